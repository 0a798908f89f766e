//! Form layout requests
//!
//! Sends the layout query for a country over a [`QueryChannel`] and decodes
//! the answer into typed fields.

use super::traits::QueryChannel;
use crate::bundle::Bundle;
use crate::error::LayoutError;
use crate::layout::{decode, AddressField};

/// Event name the engine answers with a form layout
pub const GET_FORM_LAYOUT: &str = "GeckoView:AddressMetadata:GetFormLayout";

const COUNTRY_KEY: &str = "country";

/// Requests address form layouts and decodes them.
///
/// Holds no state besides the channel; every call is an independent
/// request/response with nothing cached or shared between calls.
pub struct FormLayoutDecoder<C> {
    channel: C,
}

impl<C: QueryChannel> FormLayoutDecoder<C> {
    pub fn new(channel: C) -> Self {
        Self { channel }
    }

    /// Fetch the ordered address fields for `country_code`.
    ///
    /// Channel failures are returned unchanged; a completed query without a
    /// response bundle fails with a decode error.
    pub async fn request_form_layout(
        &self,
        country_code: &str,
    ) -> Result<Vec<AddressField>, LayoutError> {
        let mut request = Bundle::new();
        request.put_string(COUNTRY_KEY, country_code);

        tracing::debug!(country = country_code, "requesting form layout");

        let response = self.channel.query_bundle(GET_FORM_LAYOUT, request).await?;
        Ok(decode(response.as_ref())?)
    }
}
