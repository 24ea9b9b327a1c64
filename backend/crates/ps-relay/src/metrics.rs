use metrics::{counter, gauge};

/// Metrics collector for the relay
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "ps_relay" }
    }

    /// Record a subscriber appended to the registry
    pub fn subscriber_registered(&self, total: usize) {
        counter!(format!("{}.subscribers.registered", self.prefix)).increment(1);
        gauge!(format!("{}.subscribers.active", self.prefix)).set(total as f64);
    }

    /// Record a broadcast fanned out to `subscriber_count` subscribers
    pub fn broadcast_published(&self, subscriber_count: usize) {
        counter!(format!("{}.broadcast.published", self.prefix)).increment(1);
        gauge!(format!("{}.broadcast.subscribers", self.prefix)).set(subscriber_count as f64);
    }

    /// Record one successful write to a subscriber
    pub fn message_delivered(&self) {
        counter!(format!("{}.messages.delivered", self.prefix)).increment(1);
    }

    /// Record a failed write to a subscriber
    pub fn delivery_failed(&self) {
        counter!(format!("{}.errors.total", self.prefix)).increment(1);
        counter!(format!("{}.errors.delivery", self.prefix)).increment(1);
    }

    /// Record a connection closed by a stop event
    pub fn connection_closed(&self) {
        counter!(format!("{}.connections.closed", self.prefix)).increment(1);
    }

    /// Record a rejected upgrade request
    pub fn upgrade_failed(&self) {
        counter!(format!("{}.errors.total", self.prefix)).increment(1);
        counter!(format!("{}.errors.upgrade", self.prefix)).increment(1);
    }

    /// Record a publish request rejected before reaching the registry
    pub fn publish_rejected(&self) {
        counter!(format!("{}.errors.total", self.prefix)).increment(1);
        counter!(format!("{}.errors.bad_request", self.prefix)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
