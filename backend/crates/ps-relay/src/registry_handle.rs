use crate::{Message, RelayError, Result as RelayResult, Subscriber};

use tokio::sync::{mpsc, oneshot, watch};

/// An event paired with the acknowledgement the registry sends when it
/// dequeues it. Awaiting the acknowledgement turns a bounded send into a
/// rendezvous with the control loop.
pub(crate) struct Handoff<T> {
    payload: T,
    accepted: oneshot::Sender<()>,
}

impl<T> Handoff<T> {
    /// Acknowledge receipt and take the payload
    pub(crate) fn accept(self) -> T {
        let _ = self.accepted.send(());
        self.payload
    }
}

/// Cloneable front door to the broadcast registry.
///
/// Every method submits one event to the registry's control loop. None of
/// them touch subscriber state directly.
#[derive(Clone)]
pub struct RegistryHandle {
    register_tx: mpsc::Sender<Handoff<Subscriber>>,
    broadcast_tx: mpsc::Sender<Handoff<Message>>,
    stop_tx: mpsc::Sender<oneshot::Sender<usize>>,
    subscriber_count: watch::Receiver<usize>,
}

impl RegistryHandle {
    pub(crate) fn new(
        register_tx: mpsc::Sender<Handoff<Subscriber>>,
        broadcast_tx: mpsc::Sender<Handoff<Message>>,
        stop_tx: mpsc::Sender<oneshot::Sender<usize>>,
        subscriber_count: watch::Receiver<usize>,
    ) -> Self {
        Self {
            register_tx,
            broadcast_tx,
            stop_tx,
            subscriber_count,
        }
    }

    /// Submit a Register event. Returns once the registry has dequeued it,
    /// before the subscriber is appended.
    pub async fn register(&self, subscriber: Subscriber) -> RelayResult<()> {
        hand_off(&self.register_tx, subscriber).await
    }

    /// Submit a Broadcast event. Returns once the registry has dequeued it,
    /// which implies every earlier event has been fully processed. The
    /// fan-out itself happens after this returns.
    pub async fn broadcast(&self, message: Message) -> RelayResult<()> {
        hand_off(&self.broadcast_tx, message).await
    }

    /// Submit a Stop event and wait until a close has been attempted on every
    /// registered connection. Returns the number that closed without error.
    ///
    /// The registry keeps running afterwards and keeps its subscribers.
    pub async fn stop(&self) -> RelayResult<usize> {
        let (closed_tx, closed_rx) = oneshot::channel();

        self.stop_tx
            .send(closed_tx)
            .await
            .map_err(|_| RelayError::registry_unavailable())?;

        closed_rx.await.map_err(|_| RelayError::registry_unavailable())
    }

    /// Subscriber count as of the most recently processed Register event
    pub fn subscriber_count(&self) -> usize {
        *self.subscriber_count.borrow()
    }

    /// Watch the subscriber count published after each Register event
    pub fn watch_subscriber_count(&self) -> watch::Receiver<usize> {
        self.subscriber_count.clone()
    }

    pub fn downgrade(&self) -> WeakRegistryHandle {
        WeakRegistryHandle {
            register_tx: self.register_tx.downgrade(),
            broadcast_tx: self.broadcast_tx.downgrade(),
            stop_tx: self.stop_tx.downgrade(),
            subscriber_count: self.subscriber_count.clone(),
        }
    }
}

/// Non-owning reference to a registry, held by each subscriber
#[derive(Clone)]
pub struct WeakRegistryHandle {
    register_tx: mpsc::WeakSender<Handoff<Subscriber>>,
    broadcast_tx: mpsc::WeakSender<Handoff<Message>>,
    stop_tx: mpsc::WeakSender<oneshot::Sender<usize>>,
    subscriber_count: watch::Receiver<usize>,
}

impl WeakRegistryHandle {
    /// Returns None once every strong handle is gone
    pub fn upgrade(&self) -> Option<RegistryHandle> {
        Some(RegistryHandle {
            register_tx: self.register_tx.upgrade()?,
            broadcast_tx: self.broadcast_tx.upgrade()?,
            stop_tx: self.stop_tx.upgrade()?,
            subscriber_count: self.subscriber_count.clone(),
        })
    }
}

async fn hand_off<T>(tx: &mpsc::Sender<Handoff<T>>, payload: T) -> RelayResult<()> {
    let (accepted, accepted_rx) = oneshot::channel();

    tx.send(Handoff { payload, accepted })
        .await
        .map_err(|_| RelayError::registry_unavailable())?;

    accepted_rx
        .await
        .map_err(|_| RelayError::registry_unavailable())
}
