//! Engine handler for address metadata events

use super::dispatcher::{EventHandler, EventReply};
use super::table::LayoutTable;
use crate::bundle::Bundle;
use crate::dispatch::GET_FORM_LAYOUT;

/// Answers form layout queries from a [`LayoutTable`]
#[derive(Debug, Clone)]
pub struct AddressMetadataHandler {
    table: LayoutTable,
    default_country: String,
}

impl AddressMetadataHandler {
    pub fn new(table: LayoutTable, default_country: impl Into<String>) -> Self {
        Self {
            table,
            default_country: default_country.into(),
        }
    }

    pub fn default_country(&self) -> &str {
        &self.default_country
    }

    /// Response bundle for `country`; unknown countries get a bundle
    /// without `fields`
    fn form_layout(&self, country: &str) -> Bundle {
        let mut response = Bundle::new();
        match self.table.get(country) {
            Some(fields) => response.put_bundle_array("fields", fields.to_vec()),
            None => tracing::debug!(country, "no form layout known for country"),
        }
        response
    }
}

impl EventHandler for AddressMetadataHandler {
    fn on_event(&self, event: &str, data: &Bundle) -> EventReply {
        tracing::debug!(event, ?data, "engine event");

        match event {
            GET_FORM_LAYOUT => {
                let country = data
                    .get_string("country")
                    .filter(|country| !country.is_empty())
                    .unwrap_or(self.default_country.as_str());
                Ok(Some(self.form_layout(country)))
            }
            other => Err(format!("unhandled event: {other}")),
        }
    }
}
