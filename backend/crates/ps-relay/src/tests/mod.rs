mod subscriber_id;

use crate::{Message, RegistryHandle, RelayError, Result as RelayResult, Subscriber};
use crate::{SubscriberConnection, SubscriberId};

use std::panic::Location;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use error_location::ErrorLocation;
use tokio::sync::Notify;
use tokio::time::{Duration, timeout};

/// Every write made through any fake connection, in the order it happened
#[derive(Clone, Default)]
pub(crate) struct DeliveryLog {
    entries: Arc<Mutex<Vec<(usize, String)>>>,
}

impl DeliveryLog {
    pub(crate) fn entries(&self) -> Vec<(usize, String)> {
        self.entries.lock().unwrap().clone()
    }

    pub(crate) fn received_by(&self, subscriber: usize) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(index, _)| *index == subscriber)
            .map(|(_, body)| body)
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    fn record(&self, subscriber: usize, body: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((subscriber, body.to_string()));
    }

    /// Poll until at least `count` writes have been recorded
    pub(crate) async fn wait_for(&self, count: usize) {
        let waited = timeout(Duration::from_secs(2), async {
            while self.len() < count {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await;
        assert!(
            waited.is_ok(),
            "expected {count} deliveries, got {}",
            self.len()
        );
    }
}

/// In-memory subscriber connection
pub(crate) struct FakeConnection {
    index: usize,
    log: DeliveryLog,
    closed: Arc<AtomicBool>,
    fail_sends: bool,
    fail_close: bool,
    yield_on_send: bool,
    gate: Option<Arc<Notify>>,
}

impl FakeConnection {
    pub(crate) fn new(index: usize, log: &DeliveryLog) -> Self {
        Self {
            index,
            log: log.clone(),
            closed: Arc::new(AtomicBool::new(false)),
            fail_sends: false,
            fail_close: false,
            yield_on_send: false,
            gate: None,
        }
    }

    pub(crate) fn failing(mut self) -> Self {
        self.fail_sends = true;
        self
    }

    pub(crate) fn failing_close(mut self) -> Self {
        self.fail_close = true;
        self
    }

    /// Block every write until `gate` is notified once for it
    pub(crate) fn gated(mut self, gate: &Arc<Notify>) -> Self {
        self.gate = Some(Arc::clone(gate));
        self
    }

    /// Yield to the scheduler after every write, giving other tasks a chance
    /// to run mid fan-out
    pub(crate) fn yielding(mut self) -> Self {
        self.yield_on_send = true;
        self
    }

    pub(crate) fn closed_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.closed)
    }

    pub(crate) fn into_subscriber(self, registry: &RegistryHandle) -> Subscriber {
        let id = SubscriberId::new(format!("fake-{}", self.index));
        Subscriber::new(id, Box::new(self), registry)
    }
}

#[async_trait]
impl SubscriberConnection for FakeConnection {
    async fn send_message(&mut self, message: &Message) -> RelayResult<()> {
        if self.fail_sends {
            return Err(RelayError::delivery_failure("simulated write failure"));
        }
        if self.closed.load(Ordering::SeqCst) {
            return Err(RelayError::delivery_failure("connection closed"));
        }

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        self.log.record(self.index, message.body());

        if self.yield_on_send {
            tokio::task::yield_now().await;
        }

        Ok(())
    }

    async fn close(&mut self) -> RelayResult<()> {
        if self.fail_close {
            return Err(RelayError::CloseFailure {
                reason: String::from("simulated close failure"),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// Register and wait until the registry has appended the subscriber
pub(crate) async fn register_and_wait(registry: &RegistryHandle, subscriber: Subscriber) {
    let expected = registry.subscriber_count() + 1;
    registry.register(subscriber).await.unwrap();

    let mut count = registry.watch_subscriber_count();
    timeout(Duration::from_secs(2), count.wait_for(|n| *n >= expected))
        .await
        .expect("registration not processed in time")
        .unwrap();
}
