//! # Session Actor Framework
//!
//! Generic plumbing for session-scoped workflow state.
//!
//! ## Key Types
//!
//! - [`SessionWorkflow`]: the trait a per-session state machine implements.
//! - [`SessionActor`]: the generic actor owning all sessions of one workflow type.
//! - [`SessionClient`]: the generic sender half for talking to the actor.
//! - [`SessionError`]: transport-level errors (e.g. ActorClosed, SessionNotFound).
//!
//! Each [`SessionActor`] runs in its own task and processes requests
//! sequentially, so exactly one request at a time can read or mutate any
//! session's state. That sequential loop is the per-session critical section:
//! no `Mutex` around the workflow state, and no interleaving of two form
//! submissions for the same customer.

use std::collections::HashMap;
use std::fmt::Debug;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// Identifier of one customer session, minted by the actor on `Open`.
pub type SessionId = String;

/// A per-session workflow state machine managed by a [`SessionActor`].
///
/// The associated types tie each workflow to its own command and outcome
/// vocabulary, so a taco-design command can never be sent to some other
/// workflow's session.
///
/// # Context
/// `Context` carries the collaborators a workflow needs while applying a
/// command (e.g. a fulfillment sink for finalized orders). It is injected
/// into [`SessionActor::run`], not at construction time, so actors can be
/// created before their collaborators are wired up.
#[async_trait]
pub trait SessionWorkflow: Clone + Send + Sync + 'static {
    /// One step of the workflow, mapped from a form submission.
    type Command: Send + Debug;

    /// The observable result of one step, returned to the caller as data.
    type Outcome: Send + Debug;

    /// Collaborators injected into every `apply` call.
    type Context: Send + Sync;

    /// Fresh state for a newly opened session.
    fn open() -> Self;

    /// Applies one command to this session's state.
    ///
    /// Recoverable rejections (validation failures and the like) belong in
    /// `Outcome`; the `Err` channel is for faults in a collaborator.
    async fn apply(
        &mut self,
        command: Self::Command,
        ctx: &Self::Context,
    ) -> Result<Self::Outcome, String>;
}

/// Errors that can occur within the session framework itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SessionError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Unknown session: {0}")]
    SessionNotFound(SessionId),
    #[error("Workflow error: {0}")]
    Workflow(String),
}

/// One-shot reply channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, SessionError>>;

/// Requests understood by a [`SessionActor`].
///
/// The variants are the session-store contract: open a slot, snapshot its
/// current state, apply one workflow command, or close the slot when the
/// customer leaves.
#[derive(Debug)]
pub enum SessionRequest<W: SessionWorkflow> {
    Open {
        respond_to: Response<SessionId>,
    },
    Snapshot {
        id: SessionId,
        respond_to: Response<Option<W>>,
    },
    Apply {
        id: SessionId,
        command: W::Command,
        respond_to: Response<W::Outcome>,
    },
    Close {
        id: SessionId,
        respond_to: Response<()>,
    },
}

/// The generic actor owning every session of one workflow type.
///
/// Owns the state map and the receiver end of the channel. Messages are
/// processed one at a time in [`SessionActor::run`].
pub struct SessionActor<W: SessionWorkflow> {
    receiver: mpsc::Receiver<SessionRequest<W>>,
    sessions: HashMap<SessionId, W>,
    next_id_fn: Box<dyn Fn() -> SessionId + Send + Sync>,
}

impl<W: SessionWorkflow> SessionActor<W> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> SessionId + Send + Sync + 'static,
    ) -> (Self, SessionClient<W>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            sessions: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = SessionClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing requests until the channel
    /// closes (all clients dropped).
    pub async fn run(mut self, context: W::Context) {
        // Just the type name, e.g. "OrderWorkflow" instead of the full path.
        let workflow = std::any::type_name::<W>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(workflow, "Session actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SessionRequest::Open { respond_to } => {
                    let id = (self.next_id_fn)();
                    self.sessions.insert(id.clone(), W::open());
                    info!(workflow, %id, sessions = self.sessions.len(), "Session opened");
                    let _ = respond_to.send(Ok(id));
                }
                SessionRequest::Snapshot { id, respond_to } => {
                    let state = self.sessions.get(&id).cloned();
                    let found = state.is_some();
                    debug!(workflow, %id, found, "Snapshot");
                    let _ = respond_to.send(Ok(state));
                }
                SessionRequest::Apply { id, command, respond_to } => {
                    debug!(workflow, %id, ?command, "Apply");
                    if let Some(state) = self.sessions.get_mut(&id) {
                        match state.apply(command, &context).await {
                            Ok(outcome) => {
                                debug!(workflow, %id, ?outcome, "Applied");
                                let _ = respond_to.send(Ok(outcome));
                            }
                            Err(e) => {
                                warn!(workflow, %id, error = %e, "Apply failed");
                                let _ = respond_to.send(Err(SessionError::Workflow(e)));
                            }
                        }
                    } else {
                        warn!(workflow, %id, "Session not found");
                        let _ = respond_to.send(Err(SessionError::SessionNotFound(id)));
                    }
                }
                SessionRequest::Close { id, respond_to } => {
                    if self.sessions.remove(&id).is_some() {
                        info!(workflow, %id, sessions = self.sessions.len(), "Session closed");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(workflow, %id, "Session not found");
                        let _ = respond_to.send(Err(SessionError::SessionNotFound(id)));
                    }
                }
            }
        }

        info!(workflow, sessions = self.sessions.len(), "Shutdown");
    }
}

/// A type-safe client for interacting with a [`SessionActor`].
#[derive(Clone)]
pub struct SessionClient<W: SessionWorkflow> {
    sender: mpsc::Sender<SessionRequest<W>>,
}

impl<W: SessionWorkflow> SessionClient<W> {
    pub fn new(sender: mpsc::Sender<SessionRequest<W>>) -> Self {
        Self { sender }
    }

    pub async fn open(&self) -> Result<SessionId, SessionError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Open { respond_to })
            .await
            .map_err(|_| SessionError::ActorClosed)?;
        response.await.map_err(|_| SessionError::ActorDropped)?
    }

    pub async fn snapshot(&self, id: SessionId) -> Result<Option<W>, SessionError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Snapshot { id, respond_to })
            .await
            .map_err(|_| SessionError::ActorClosed)?;
        response.await.map_err(|_| SessionError::ActorDropped)?
    }

    pub async fn apply(
        &self,
        id: SessionId,
        command: W::Command,
    ) -> Result<W::Outcome, SessionError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Apply { id, command, respond_to })
            .await
            .map_err(|_| SessionError::ActorClosed)?;
        response.await.map_err(|_| SessionError::ActorDropped)?
    }

    pub async fn close(&self, id: SessionId) -> Result<(), SessionError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Close { id, respond_to })
            .await
            .map_err(|_| SessionError::ActorClosed)?;
        response.await.map_err(|_| SessionError::ActorDropped)?
    }
}
