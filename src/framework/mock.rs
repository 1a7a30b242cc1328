//! # Mock Framework
//!
//! Utilities for testing typed clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver, then the
//! `expect_*` helpers to assert which requests arrive and script the actor's
//! replies without spinning up a real [`SessionActor`](super::SessionActor).

use tokio::sync::{mpsc, oneshot};

use super::{SessionError, SessionId, SessionRequest, SessionWorkflow};

/// Creates a mock client and a receiver for asserting requests.
///
/// The client sends its requests to a channel the test controls; the test
/// inspects each request and answers through the bundled oneshot sender,
/// simulating success, rejection, or a vanished session deterministically.
pub fn create_mock_client<W: SessionWorkflow>(
    buffer_size: usize,
) -> (super::SessionClient<W>, mpsc::Receiver<SessionRequest<W>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (super::SessionClient::new(sender), receiver)
}

/// Verifies that the next request is an `Open` and hands back its responder.
pub async fn expect_open<W: SessionWorkflow>(
    receiver: &mut mpsc::Receiver<SessionRequest<W>>,
) -> Option<oneshot::Sender<Result<SessionId, SessionError>>> {
    match receiver.recv().await {
        Some(SessionRequest::Open { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Verifies that the next request is a `Snapshot` for some session.
pub async fn expect_snapshot<W: SessionWorkflow>(
    receiver: &mut mpsc::Receiver<SessionRequest<W>>,
) -> Option<(SessionId, oneshot::Sender<Result<Option<W>, SessionError>>)> {
    match receiver.recv().await {
        Some(SessionRequest::Snapshot { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Verifies that the next request is an `Apply` and yields the command.
pub async fn expect_apply<W: SessionWorkflow>(
    receiver: &mut mpsc::Receiver<SessionRequest<W>>,
) -> Option<(
    SessionId,
    W::Command,
    oneshot::Sender<Result<W::Outcome, SessionError>>,
)> {
    match receiver.recv().await {
        Some(SessionRequest::Apply { id, command, respond_to }) => Some((id, command, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order_flow::{OrderFlowCommand, OrderFlowOutcome, OrderWorkflow};
    use crate::model::TacoSubmission;

    #[tokio::test]
    async fn mock_scripts_an_apply_round_trip() {
        let (client, mut receiver) = create_mock_client::<OrderWorkflow>(10);

        let submission = TacoSubmission::new("Basic Taco", ["FLTO", "GRBF"]);
        let apply_task = tokio::spawn(async move {
            client
                .apply("session_1".to_string(), OrderFlowCommand::SubmitTaco(submission))
                .await
        });

        let (id, command, responder) =
            expect_apply(&mut receiver).await.expect("Expected Apply request");
        assert_eq!(id, "session_1");
        assert!(matches!(command, OrderFlowCommand::SubmitTaco(_)));
        responder
            .send(Ok(OrderFlowOutcome::TacoAdded { taco_count: 1 }))
            .unwrap();

        let outcome = apply_task.await.unwrap().unwrap();
        assert!(matches!(outcome, OrderFlowOutcome::TacoAdded { taco_count: 1 }));
    }

    #[tokio::test]
    async fn mock_scripts_a_missing_session() {
        let (client, mut receiver) = create_mock_client::<OrderWorkflow>(10);

        let snapshot_task =
            tokio::spawn(async move { client.snapshot("session_9".to_string()).await });

        let (id, responder) =
            expect_snapshot(&mut receiver).await.expect("Expected Snapshot request");
        responder.send(Err(SessionError::SessionNotFound(id))).unwrap();

        let err = snapshot_task.await.unwrap().unwrap_err();
        assert_eq!(err, SessionError::SessionNotFound("session_9".to_string()));
    }
}
