//! Trait abstraction for the engine query channel to enable mocking in tests

use crate::bundle::Bundle;
use crate::error::ChannelError;
use async_trait::async_trait;

/// Transport carrying a single request bundle to the engine and its answer back
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueryChannel: Send + Sync {
    /// Send `data` as `event` and wait for the engine's answer.
    ///
    /// `Ok(None)` means the engine completed the query without a bundle.
    async fn query_bundle(&self, event: &str, data: Bundle) -> Result<Option<Bundle>, ChannelError>;
}
