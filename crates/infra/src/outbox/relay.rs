//! Outbox relay: background job shipping staged facts to the queue.

use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use super::gateway::QueueGateway;
use super::store::OutboxStore;

/// Batch size per drain, matching the reference relay.
const BATCH_SIZE: usize = 100;

/// Poll interval between drains.
const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Handle to control and join a background worker.
#[derive(Debug)]
pub struct WorkerHandle {
    shutdown: mpsc::Sender<()>,
    join: Option<thread::JoinHandle<()>>,
}

impl WorkerHandle {
    /// Request graceful shutdown and wait for the worker to stop.
    pub fn shutdown(mut self) {
        let _ = self.shutdown.send(());
        if let Some(j) = self.join.take() {
            let _ = j.join();
        }
    }
}

/// Polling relay: every 2 seconds, publish up to 100 unpublished records and
/// mark each one published after the gateway accepted it.
///
/// A rejected publish leaves the record staged for the next tick, so a fact
/// is never lost between staging and publication; the queue may therefore
/// see a fact more than once (at-least-once, consumers deduplicate by fact
/// id).
#[derive(Debug)]
pub struct OutboxRelay;

impl OutboxRelay {
    /// Spawn the relay thread.
    pub fn spawn(store: Arc<dyn OutboxStore>, gateway: Arc<dyn QueueGateway>) -> WorkerHandle {
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let join = thread::Builder::new()
            .name("outbox-relay".to_string())
            .spawn(move || {
                loop {
                    match shutdown_rx.recv_timeout(POLL_INTERVAL) {
                        Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
                        Err(mpsc::RecvTimeoutError::Timeout) => {}
                    }
                    Self::drain_once(store.as_ref(), gateway.as_ref());
                }
            })
            .expect("failed to spawn outbox relay thread");

        WorkerHandle {
            shutdown: shutdown_tx,
            join: Some(join),
        }
    }

    /// Publish one batch; returns how many records were shipped.
    ///
    /// Exposed so tests (and a draining shutdown path) can run a tick
    /// without the thread.
    pub fn drain_once(store: &dyn OutboxStore, gateway: &dyn QueueGateway) -> usize {
        let batch = store.unpublished(BATCH_SIZE);
        let mut shipped = 0;

        for record in batch {
            match gateway.publish(record.content()) {
                Ok(()) => {
                    store.mark_published(record.id());
                    shipped += 1;
                }
                Err(err) => {
                    // Left staged; the next tick retries it.
                    warn!(record_id = %record.id(), error = %err, "outbox publish failed");
                }
            }
        }

        if shipped > 0 {
            debug!(shipped, "outbox batch relayed");
        }
        shipped
    }
}
