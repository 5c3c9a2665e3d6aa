//! Queue gateway: where published facts go.

use std::sync::Mutex;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// The queue rejected or could not accept the message.
    #[error("queue unavailable: {0}")]
    Unavailable(String),
}

/// Transport-agnostic publish contract for relayed facts.
///
/// Delivery order and retry policy downstream of this call belong to the
/// queue; the relay only needs accept/reject.
pub trait QueueGateway: Send + Sync {
    fn publish(&self, content: &str) -> Result<(), QueueError>;
}

/// Recording gateway for tests/dev: accepts everything and keeps it.
#[derive(Debug, Default)]
pub struct InMemoryQueueGateway {
    messages: Mutex<Vec<String>>,
}

impl InMemoryQueueGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything published so far, in publish order.
    pub fn published(&self) -> Vec<String> {
        self.messages.lock().expect("gateway lock poisoned").clone()
    }
}

impl QueueGateway for InMemoryQueueGateway {
    fn publish(&self, content: &str) -> Result<(), QueueError> {
        self.messages
            .lock()
            .map_err(|_| QueueError::Unavailable("gateway lock poisoned".to_string()))?
            .push(content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_published_messages_in_order() {
        let gateway = InMemoryQueueGateway::new();
        gateway.publish("first").unwrap();
        gateway.publish("second").unwrap();
        assert_eq!(gateway.published(), vec!["first", "second"]);
    }
}
