use crate::{
    Message, RegistryHandle, Result as RelayResult, SubscriberConnection, SubscriberId,
    WeakRegistryHandle,
};

/// A client holding a live connection that receives broadcasts.
pub struct Subscriber {
    id: SubscriberId,
    connection: Box<dyn SubscriberConnection>,
    /// Owning registry. Weak so a registered subscriber never keeps the
    /// registry's event inputs open.
    registry: WeakRegistryHandle,
}

impl Subscriber {
    pub fn new(
        id: SubscriberId,
        connection: Box<dyn SubscriberConnection>,
        registry: &RegistryHandle,
    ) -> Self {
        Self {
            id,
            connection,
            registry: registry.downgrade(),
        }
    }

    pub fn id(&self) -> &SubscriberId {
        &self.id
    }

    /// The registry this subscriber was created for, if it is still running
    pub fn registry(&self) -> Option<RegistryHandle> {
        self.registry.upgrade()
    }

    pub(crate) async fn deliver(&mut self, message: &Message) -> RelayResult<()> {
        self.connection.send_message(message).await
    }

    pub(crate) async fn close(&mut self) -> RelayResult<()> {
        self.connection.close().await
    }
}

impl std::fmt::Debug for Subscriber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscriber").field("id", &self.id).finish_non_exhaustive()
    }
}
