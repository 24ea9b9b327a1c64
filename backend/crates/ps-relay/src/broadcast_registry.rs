use crate::registry_handle::Handoff;
use crate::{Message, Metrics, RegistryHandle, Subscriber};

use log::{debug, error, info, warn};
use tokio::sync::{mpsc, oneshot, watch};

/// Smallest buffer tokio allows. The accept handshake in `RegistryHandle`
/// makes each submit wait for the loop regardless.
const EVENT_BUFFER: usize = 1;

/// The broadcast actor.
///
/// Owns the subscriber list and is the only code that reads or writes it. All
/// work arrives through three event inputs and is processed one event at a
/// time, to completion, on a single task.
pub struct BroadcastRegistry {
    subscribers: Vec<Subscriber>,
    register_rx: mpsc::Receiver<Handoff<Subscriber>>,
    broadcast_rx: mpsc::Receiver<Handoff<Message>>,
    stop_rx: mpsc::Receiver<oneshot::Sender<usize>>,
    subscriber_count: watch::Sender<usize>,
    metrics: Metrics,
}

impl BroadcastRegistry {
    /// Start the control loop on its own task and return a handle to it
    pub fn spawn(metrics: Metrics) -> RegistryHandle {
        let (handle, registry) = Self::new(metrics);
        tokio::spawn(registry.run());
        handle
    }

    /// Build the registry without starting it
    pub fn new(metrics: Metrics) -> (RegistryHandle, Self) {
        let (register_tx, register_rx) = mpsc::channel(EVENT_BUFFER);
        let (broadcast_tx, broadcast_rx) = mpsc::channel(EVENT_BUFFER);
        let (stop_tx, stop_rx) = mpsc::channel(EVENT_BUFFER);
        let (count_tx, count_rx) = watch::channel(0);

        let handle = RegistryHandle::new(register_tx, broadcast_tx, stop_tx, count_rx);
        let registry = Self {
            subscribers: Vec::new(),
            register_rx,
            broadcast_rx,
            stop_rx,
            subscriber_count: count_tx,
            metrics,
        };

        (handle, registry)
    }

    /// Run the control loop.
    ///
    /// Stop does not end the loop. It returns only after every
    /// `RegistryHandle` has been dropped.
    pub async fn run(mut self) {
        info!("Broadcast registry started");

        loop {
            tokio::select! {
                Some(handoff) = self.register_rx.recv() => {
                    let subscriber = handoff.accept();
                    self.register(subscriber);
                }
                Some(handoff) = self.broadcast_rx.recv() => {
                    let message = handoff.accept();
                    self.broadcast(&message).await;
                }
                Some(closed_tx) = self.stop_rx.recv() => {
                    let closed = self.stop().await;
                    let _ = closed_tx.send(closed);
                }
                else => break,
            }
        }

        info!(
            "Broadcast registry exiting, all handles dropped ({} subscribers)",
            self.subscribers.len()
        );
    }

    fn register(&mut self, subscriber: Subscriber) {
        info!("Registering subscriber {} to pool", subscriber.id());

        self.subscribers.push(subscriber);

        let total = self.subscribers.len();
        self.subscriber_count.send_replace(total);
        self.metrics.subscriber_registered(total);

        info!("Successfully registered subscriber ({total} total)");
    }

    async fn broadcast(&mut self, message: &Message) {
        debug!(
            "Broadcasting message to {} subscribers",
            self.subscribers.len()
        );
        self.metrics.broadcast_published(self.subscribers.len());

        // Failed subscribers stay registered
        for subscriber in &mut self.subscribers {
            match subscriber.deliver(message).await {
                Ok(()) => self.metrics.message_delivered(),
                Err(e) => {
                    error!(
                        "Error writing message to subscriber {}: {}",
                        subscriber.id(),
                        e
                    );
                    self.metrics.delivery_failed();
                }
            }
        }
    }

    async fn stop(&mut self) -> usize {
        info!(
            "Stop requested, closing {} subscriber connections",
            self.subscribers.len()
        );

        let mut closed = 0;
        for subscriber in &mut self.subscribers {
            info!("Shutting down connection for subscriber {}", subscriber.id());

            match subscriber.close().await {
                Ok(()) => {
                    closed += 1;
                    self.metrics.connection_closed();
                }
                Err(e) => warn!(
                    "Error closing connection for subscriber {}: {}",
                    subscriber.id(),
                    e
                ),
            }
        }

        closed
    }
}
