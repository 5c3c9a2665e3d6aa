//! Outbox: durable staging for facts awaiting asynchronous publication.
//!
//! Aggregate saves stage their facts here (same transaction as the aggregate
//! state); the relay ships them to a queue gateway afterwards. Keying records
//! by fact id keeps repeated saves idempotent, and a record is only marked
//! published after the gateway accepted it. Downstream delivery is
//! at-least-once, which is the consumer's concern.

pub mod gateway;
pub mod relay;
pub mod store;

pub use gateway::{InMemoryQueueGateway, QueueError, QueueGateway};
pub use relay::{OutboxRelay, WorkerHandle};
pub use store::{InMemoryOutboxStore, OutboxRecord, OutboxStore};
