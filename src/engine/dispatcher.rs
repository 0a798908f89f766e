//! In-process event dispatcher
//!
//! Queries are queued on an mpsc channel and answered one at a time by an
//! [`EventHandler`] running on its own tokio task. Each query carries a
//! oneshot sender for its single reply.

use crate::bundle::Bundle;
use crate::dispatch::QueryChannel;
use crate::error::ChannelError;
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// Pending queries buffered before callers wait on the queue
const QUEUE_CAPACITY: usize = 64;

/// Engine-side answer to a query; `Err` carries the refusal message
pub type EventReply = Result<Option<Bundle>, String>;

/// Engine component answering dispatched events
pub trait EventHandler: Send + Sync + 'static {
    fn on_event(&self, event: &str, data: &Bundle) -> EventReply;
}

struct Query {
    event: String,
    data: Bundle,
    reply: oneshot::Sender<EventReply>,
}

/// Caller-side handle to the engine's query queue
#[derive(Clone)]
pub struct EventDispatcher {
    sender: Option<mpsc::Sender<Query>>,
    timeout: Duration,
}

impl EventDispatcher {
    /// Dispatcher with no engine attached; every query fails as not ready
    pub fn detached(timeout: Duration) -> Self {
        Self {
            sender: None,
            timeout,
        }
    }

    /// Start `handler` on a new task and return a dispatcher feeding it.
    ///
    /// Must be called from within a tokio runtime. The task ends once every
    /// dispatcher clone is dropped.
    pub fn spawn<H: EventHandler>(handler: H, timeout: Duration) -> (Self, JoinHandle<()>) {
        let (sender, receiver) = mpsc::channel(QUEUE_CAPACITY);
        let task = tokio::spawn(run_engine(handler, receiver));
        (
            Self {
                sender: Some(sender),
                timeout,
            },
            task,
        )
    }

    pub fn is_attached(&self) -> bool {
        self.sender.is_some()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

async fn run_engine<H: EventHandler>(handler: H, mut receiver: mpsc::Receiver<Query>) {
    while let Some(query) = receiver.recv().await {
        if query.reply.is_closed() {
            tracing::debug!(event = %query.event, "skipping query abandoned by caller");
            continue;
        }
        let reply = handler.on_event(&query.event, &query.data);
        if query.reply.send(reply).is_err() {
            tracing::debug!(event = %query.event, "caller went away before the reply");
        }
    }
    tracing::debug!("engine query loop stopped");
}

/// Enqueue `query` and wait for its reply
async fn exchange(
    sender: &mpsc::Sender<Query>,
    query: Query,
    answer: oneshot::Receiver<EventReply>,
) -> Result<EventReply, ChannelError> {
    sender.send(query).await.map_err(|_| ChannelError::Closed)?;
    answer.await.map_err(|_| ChannelError::Closed)
}

#[async_trait]
impl QueryChannel for EventDispatcher {
    /// The timeout covers both waiting for queue capacity and waiting for
    /// the reply.
    async fn query_bundle(
        &self,
        event: &str,
        data: Bundle,
    ) -> Result<Option<Bundle>, ChannelError> {
        let sender = self.sender.as_ref().ok_or(ChannelError::NotReady)?;

        let (reply, answer) = oneshot::channel();
        let query = Query {
            event: event.to_string(),
            data,
            reply,
        };

        match tokio::time::timeout(self.timeout, exchange(sender, query, answer)).await {
            Err(_) => {
                tracing::warn!(event, timeout = ?self.timeout, "engine query timed out");
                Err(ChannelError::Timeout(self.timeout))
            }
            Ok(Err(e)) => {
                tracing::warn!(event, "engine query failed: {e}");
                Err(e)
            }
            Ok(Ok(Err(message))) => {
                tracing::warn!(event, %message, "engine rejected query");
                Err(ChannelError::Rejected(message))
            }
            Ok(Ok(Ok(bundle))) => Ok(bundle),
        }
    }
}
