use async_trait::async_trait;

use crate::framework::{SessionClient, SessionError, SessionId, SessionWorkflow};

/// Trait for workflow-specific clients to inherit the shared session
/// operations.
///
/// Reduces boilerplate: `snapshot` and `close` behave the same for every
/// workflow, so they are provided here and each client only supplies its
/// inner generic client and error mapping.
#[async_trait]
pub trait SessionHandle<W: SessionWorkflow>: Send + Sync {
    /// The workflow-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic [`SessionClient`].
    fn inner(&self) -> &SessionClient<W>;

    /// Map framework errors to the workflow-specific error type.
    fn map_error(e: SessionError) -> Self::Error;

    /// Fetch the current state of a session, if it exists.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self, id: SessionId) -> Result<Option<W>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot(id).await.map_err(Self::map_error)
    }

    /// Remove a session (the customer left).
    #[tracing::instrument(skip(self))]
    async fn close(&self, id: SessionId) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().close(id).await.map_err(Self::map_error)
    }
}
