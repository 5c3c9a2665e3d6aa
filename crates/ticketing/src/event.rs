//! Event aggregate: capacity, reservations, and their invariants.

use chrono::NaiveDate;

use spotbook_core::{AggregateRoot, DomainError, DomainResult, Entity, domain_id};
use spotbook_customers::CustomerId;
use spotbook_partners::{Partner, PartnerId};
use spotbook_person::Name;

use crate::domain_event::{DomainEvent, EventTicketReserved};
use crate::event_ticket::EventTicket;

domain_id!(EventId, "EventId");

/// One reservation is taken per successful `reserve_ticket` call.
const TICKET_TO_RESERVE: usize = 1;

/// Aggregate root: an event with a fixed number of spots.
///
/// Owns its [`EventTicket`] set and the pending [`DomainEvent`] facts. Two
/// invariants hold at all times: the ticket count never exceeds
/// `total_spots`, and no two tickets share a customer. Both are enforced
/// here, guard-then-mutate, so a failed reservation leaves no partial state.
///
/// The aggregate is OPEN while spots remain and sold out once
/// `tickets.len() == total_spots`; nothing transitions it back.
#[derive(Debug, Clone)]
pub struct Event {
    event_id: EventId,
    name: Name,
    date: NaiveDate,
    total_spots: u32,
    partner_id: PartnerId,
    tickets: Vec<EventTicket>,
    domain_events: Vec<DomainEvent>,
    version: u64,
}

impl Event {
    /// Create an event with a fresh identity and an empty reservation set.
    ///
    /// `date` must be an ISO-8601 calendar date (no time component). A zero
    /// `total_spots` is accepted and produces an event that is born sold out.
    pub fn new_event(
        name: &str,
        date: &str,
        total_spots: u32,
        partner: &Partner,
    ) -> DomainResult<Self> {
        Self::from_parts(
            EventId::new(),
            name,
            date,
            total_spots,
            *partner.partner_id(),
            Vec::new(),
        )
    }

    /// Rehydrate an event from storage.
    ///
    /// Field validations re-run; the ticket set is taken as-is. Rehydration
    /// trusts the persisted invariant and does not re-derive set consistency.
    pub fn with(
        id: EventId,
        name: &str,
        date: &str,
        total_spots: u32,
        partner_id: PartnerId,
        tickets: Vec<EventTicket>,
    ) -> DomainResult<Self> {
        Self::from_parts(id, name, date, total_spots, partner_id, tickets)
    }

    fn from_parts(
        id: EventId,
        name: &str,
        date: &str,
        total_spots: u32,
        partner_id: PartnerId,
        tickets: Vec<EventTicket>,
    ) -> DomainResult<Self> {
        let version = tickets.len() as u64;
        Ok(Self {
            event_id: id,
            name: Name::new(name)?,
            date: parse_date(date)?,
            total_spots,
            partner_id,
            tickets,
            domain_events: Vec::new(),
            version,
        })
    }

    /// Reserve one spot for `customer_id`.
    ///
    /// Guard order is an observable contract: the duplicate-registration
    /// check runs before the capacity check, so a repeat customer on a full
    /// event still gets `AlreadyRegistered`, never `SoldOut`. On success the
    /// aggregate is mutated in place (a new reservation with the next
    /// 1-based ordering is appended together with its fact) and the caller
    /// persists the whole aggregate.
    pub fn reserve_ticket(&mut self, customer_id: &CustomerId) -> DomainResult<EventTicket> {
        self.check_customer_not_registered(customer_id)?;
        self.check_event_not_sold_out()?;

        let ordering = (self.tickets.len() + TICKET_TO_RESERVE) as u32;
        let ticket = EventTicket::new_ticket(self.event_id, *customer_id, ordering);

        self.tickets.push(ticket.clone());
        self.domain_events
            .push(DomainEvent::EventTicketReserved(EventTicketReserved::new(
                *ticket.event_ticket_id(),
                self.event_id,
                *customer_id,
            )));
        self.version += 1;

        Ok(ticket)
    }

    fn check_customer_not_registered(&self, customer_id: &CustomerId) -> DomainResult<()> {
        if self.tickets.iter().any(|t| t.customer_id() == customer_id) {
            return Err(DomainError::AlreadyRegistered);
        }
        Ok(())
    }

    fn check_event_not_sold_out(&self) -> DomainResult<()> {
        if (self.total_spots as usize) < self.tickets.len() + TICKET_TO_RESERVE {
            return Err(DomainError::SoldOut);
        }
        Ok(())
    }

    pub fn event_id(&self) -> &EventId {
        &self.event_id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn total_spots(&self) -> u32 {
        self.total_spots
    }

    pub fn partner_id(&self) -> &PartnerId {
        &self.partner_id
    }

    pub fn all_tickets(&self) -> &[EventTicket] {
        &self.tickets
    }

    /// Pending facts, in emission order. Drained by the persistence
    /// collaborator; the aggregate never deduplicates them.
    pub fn domain_events(&self) -> &[DomainEvent] {
        &self.domain_events
    }

    /// Hand the pending facts to the persistence collaborator, leaving the
    /// aggregate in its canonical stored form (no pending facts).
    pub fn take_domain_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.domain_events)
    }
}

fn parse_date(date: &str) -> DomainResult<NaiveDate> {
    date.parse().map_err(|_| DomainError::InvalidDate)
}

impl Entity for Event {
    type Id = EventId;

    fn id(&self) -> &Self::Id {
        &self.event_id
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.event_id == other.event_id
    }
}

impl Eq for Event {}

impl AggregateRoot for Event {
    fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::event_ticket::EventTicketId;

    use super::*;

    fn test_partner() -> Partner {
        Partner::new_partner("John Doe", "90.113.692/0001-77", "john.doe@gmail.com").unwrap()
    }

    fn disney_on_ice(total_spots: u32) -> Event {
        Event::new_event("Disney on Ice", "2021-01-01", total_spots, &test_partner()).unwrap()
    }

    #[test]
    fn creates_an_event() {
        let partner = test_partner();
        let event = Event::new_event("Disney on Ice", "2021-01-01", 10, &partner).unwrap();

        assert_eq!(event.name().as_str(), "Disney on Ice");
        assert_eq!(event.date(), "2021-01-01".parse::<NaiveDate>().unwrap());
        assert_eq!(event.total_spots(), 10);
        assert_eq!(event.partner_id(), partner.partner_id());
        assert!(event.all_tickets().is_empty());
        assert!(event.domain_events().is_empty());
        assert_eq!(event.version(), 0);
    }

    #[test]
    fn rejects_an_invalid_name() {
        let err =
            Event::new_event("", "2021-01-01", 10, &test_partner()).unwrap_err();
        assert_eq!(err, DomainError::invalid_value("Name"));
        assert_eq!(err.to_string(), "Invalid value for Name");
    }

    #[test]
    fn rejects_an_invalid_date() {
        for date in ["", "not-a-date", "2021-13-01", "01/01/2021"] {
            let err = Event::new_event("Disney on Ice", date, 10, &test_partner()).unwrap_err();
            assert_eq!(err, DomainError::InvalidDate);
            assert_eq!(err.to_string(), "Invalid date for Event");
        }
    }

    #[test]
    fn reserves_a_ticket_when_spots_remain() {
        let mut event = disney_on_ice(10);
        let customer_id = CustomerId::new();

        let ticket = event.reserve_ticket(&customer_id).unwrap();

        assert_eq!(ticket.event_id(), event.event_id());
        assert_eq!(ticket.customer_id(), &customer_id);
        assert!(ticket.ticket_id().is_none());
        assert_eq!(ticket.ordering(), 1);

        assert_eq!(event.all_tickets().len(), 1);
        assert_eq!(&event.all_tickets()[0], &ticket);
        assert_eq!(event.version(), 1);

        let facts = event.domain_events();
        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].event_type(), "event-ticket.reserved");
        match &facts[0] {
            DomainEvent::EventTicketReserved(fact) => {
                assert_eq!(&fact.event_ticket_id, ticket.event_ticket_id());
                assert_eq!(&fact.event_id, event.event_id());
                assert_eq!(&fact.customer_id, &customer_id);
            }
            other => panic!("expected EventTicketReserved, got {other:?}"),
        }
    }

    #[test]
    fn refuses_to_oversell_a_full_event() {
        let mut event = disney_on_ice(1);
        event.reserve_ticket(&CustomerId::new()).unwrap();

        let err = event.reserve_ticket(&CustomerId::new()).unwrap_err();
        assert_eq!(err, DomainError::SoldOut);
        assert_eq!(err.to_string(), "Event sold out");
        assert_eq!(event.all_tickets().len(), 1);
        assert_eq!(event.domain_events().len(), 1);
    }

    #[test]
    fn refuses_a_second_ticket_for_the_same_customer() {
        let mut event = disney_on_ice(10);
        let customer_id = CustomerId::new();

        event.reserve_ticket(&customer_id).unwrap();
        let err = event.reserve_ticket(&customer_id).unwrap_err();

        assert_eq!(err, DomainError::AlreadyRegistered);
        assert_eq!(err.to_string(), "Email already registered");
        assert_eq!(event.all_tickets().len(), 1);
    }

    #[test]
    fn duplicate_registration_wins_over_sold_out() {
        // One spot, taken by the same customer who retries: the repeat
        // customer must see AlreadyRegistered even though the event is full.
        let mut event = disney_on_ice(1);
        let customer_id = CustomerId::new();

        event.reserve_ticket(&customer_id).unwrap();
        let err = event.reserve_ticket(&customer_id).unwrap_err();
        assert_eq!(err, DomainError::AlreadyRegistered);
    }

    #[test]
    fn fills_to_capacity_then_rejects_any_new_customer() {
        let n = 10;
        let mut event = disney_on_ice(n);

        for k in 1..=n {
            let ticket = event.reserve_ticket(&CustomerId::new()).unwrap();
            assert_eq!(ticket.ordering(), k);
        }
        assert_eq!(event.all_tickets().len(), n as usize);

        let err = event.reserve_ticket(&CustomerId::new()).unwrap_err();
        assert_eq!(err, DomainError::SoldOut);
        assert_eq!(event.all_tickets().len(), n as usize);
    }

    #[test]
    fn zero_spot_event_is_born_sold_out() {
        let mut event = disney_on_ice(0);
        let err = event.reserve_ticket(&CustomerId::new()).unwrap_err();
        assert_eq!(err, DomainError::SoldOut);
    }

    #[test]
    fn rehydrated_event_reserves_like_a_fresh_one() {
        let mut event = disney_on_ice(3);
        let first = CustomerId::new();
        event.reserve_ticket(&first).unwrap();
        event.reserve_ticket(&CustomerId::new()).unwrap();

        let mut rehydrated = Event::with(
            *event.event_id(),
            event.name().as_str(),
            &event.date().to_string(),
            event.total_spots(),
            *event.partner_id(),
            event.all_tickets().to_vec(),
        )
        .unwrap();

        assert_eq!(rehydrated, event);
        assert_eq!(rehydrated.version(), 2);
        assert!(rehydrated.domain_events().is_empty());

        // Same next reservation behaves identically: ordering continues and
        // the duplicate guard still sees the persisted tickets.
        let ticket = rehydrated.reserve_ticket(&CustomerId::new()).unwrap();
        assert_eq!(ticket.ordering(), 3);
        assert_eq!(
            rehydrated.reserve_ticket(&first).unwrap_err(),
            DomainError::AlreadyRegistered
        );
        assert_eq!(
            rehydrated.reserve_ticket(&CustomerId::new()).unwrap_err(),
            DomainError::SoldOut
        );
    }

    #[test]
    fn rehydration_trusts_the_persisted_ticket_set() {
        // More tickets than spots: accepted as-is, and the capacity guard
        // simply reports sold out on the next reservation.
        let event_id = EventId::new();
        let tickets = vec![
            EventTicket::with(EventTicketId::new(), event_id, CustomerId::new(), None, 1),
            EventTicket::with(EventTicketId::new(), event_id, CustomerId::new(), None, 2),
        ];

        let mut event = Event::with(
            event_id,
            "Disney on Ice",
            "2021-01-01",
            1,
            PartnerId::new(),
            tickets,
        )
        .unwrap();

        assert_eq!(event.all_tickets().len(), 2);
        assert_eq!(
            event.reserve_ticket(&CustomerId::new()).unwrap_err(),
            DomainError::SoldOut
        );
    }

    #[test]
    fn each_reservation_appends_its_own_fact() {
        let mut event = disney_on_ice(5);
        let a = event.reserve_ticket(&CustomerId::new()).unwrap();
        let b = event.reserve_ticket(&CustomerId::new()).unwrap();

        let facts = event.domain_events();
        assert_eq!(facts.len(), 2);
        assert_ne!(facts[0].domain_event_id(), facts[1].domain_event_id());
        match (&facts[0], &facts[1]) {
            (DomainEvent::EventTicketReserved(f0), DomainEvent::EventTicketReserved(f1)) => {
                assert_eq!(&f0.event_ticket_id, a.event_ticket_id());
                assert_eq!(&f1.event_ticket_id, b.event_ticket_id());
            }
            other => panic!("expected two EventTicketReserved facts, got {other:?}"),
        }
    }

    proptest! {
        #[test]
        fn ordering_equals_the_reservation_sequence(spots in 1u32..40) {
            let mut event = disney_on_ice(spots);
            for k in 1..=spots {
                let ticket = event.reserve_ticket(&CustomerId::new()).unwrap();
                prop_assert_eq!(ticket.ordering(), k);
            }
            prop_assert_eq!(event.all_tickets().len(), spots as usize);
            prop_assert!(event.reserve_ticket(&CustomerId::new()).is_err());
        }
    }
}
