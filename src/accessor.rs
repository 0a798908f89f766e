//! Callback-style access to address metadata
//!
//! For callers that cannot await: each request runs on its own task and
//! completes through exactly one of the two callbacks.

use crate::dispatch::{FormLayoutDecoder, QueryChannel};
use crate::error::LayoutError;
use crate::layout::AddressField;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

pub type OnSuccess = Box<dyn FnOnce(Vec<AddressField>) + Send>;
pub type OnError = Box<dyn FnOnce(LayoutError) + Send>;

/// Fetches address fields and reports the outcome through callbacks
pub trait AddressMetadataAccessor {
    fn get_address_fields(
        &self,
        country_code: &str,
        on_success: OnSuccess,
        on_error: OnError,
    ) -> JoinHandle<()>;
}

/// Accessor backed by a [`FormLayoutDecoder`] on a tokio runtime
pub struct RuntimeAddressMetadataAccessor<C> {
    decoder: Arc<FormLayoutDecoder<C>>,
    runtime: Handle,
}

impl<C: QueryChannel + 'static> RuntimeAddressMetadataAccessor<C> {
    /// Capture the current runtime; panics outside a tokio context
    pub fn new(decoder: FormLayoutDecoder<C>) -> Self {
        Self::with_runtime(decoder, Handle::current())
    }

    pub fn with_runtime(decoder: FormLayoutDecoder<C>, runtime: Handle) -> Self {
        Self {
            decoder: Arc::new(decoder),
            runtime,
        }
    }
}

impl<C: QueryChannel + 'static> AddressMetadataAccessor for RuntimeAddressMetadataAccessor<C> {
    fn get_address_fields(
        &self,
        country_code: &str,
        on_success: OnSuccess,
        on_error: OnError,
    ) -> JoinHandle<()> {
        let decoder = Arc::clone(&self.decoder);
        let country_code = country_code.to_string();

        self.runtime.spawn(async move {
            match decoder.request_form_layout(&country_code).await {
                Ok(fields) => on_success(fields),
                Err(e) => {
                    tracing::debug!(country = %country_code, "address fields request failed: {e}");
                    on_error(e)
                }
            }
        })
    }
}
