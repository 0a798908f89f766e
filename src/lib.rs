//! Address form layouts for autofill
//!
//! Requests the address form layout for a country from the rendering
//! engine and decodes the returned bundle into typed fields: free-text
//! fields and selectors with ordered options.

pub mod accessor;
pub mod bundle;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod layout;

pub use bundle::Bundle;
pub use dispatch::{FormLayoutDecoder, QueryChannel, GET_FORM_LAYOUT};
pub use error::{ChannelError, DecodeError, InvalidOption, LayoutError};
pub use layout::{decode, AddressField, FieldOption, SelectorField, TextField};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{AddressMetadataHandler, EventDispatcher, LayoutTable};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    const TIMEOUT: Duration = Duration::from_secs(5);

    fn engine_decoder(layouts: &str) -> FormLayoutDecoder<EventDispatcher> {
        let table = LayoutTable::from_json(layouts).unwrap();
        let (dispatcher, _task) =
            EventDispatcher::spawn(AddressMetadataHandler::new(table, "US"), TIMEOUT);
        FormLayoutDecoder::new(dispatcher)
    }

    #[tokio::test]
    async fn test_empty_layout_end_to_end() {
        let decoder = engine_decoder(r#"{"AQ": {"fields": []}}"#);
        assert!(decoder.request_form_layout("AQ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_text_field_end_to_end() {
        let decoder = engine_decoder(
            r#"{"NL": {"fields": [{"fieldId": "street", "l10nId": "street_label"}]}}"#,
        );
        assert_eq!(
            decoder.request_form_layout("NL").await.unwrap(),
            vec![AddressField::from(TextField::new(
                Some("street".to_string()),
                Some("street_label".to_string())
            ))]
        );
    }

    #[tokio::test]
    async fn test_selector_end_to_end() {
        let decoder = engine_decoder(
            r#"{"US": {"fields": [{
                "fieldId": "state",
                "l10nId": "state_label",
                "value": "CA",
                "options": [{"text": "California", "value": "CA"}, {"text": "", "value": "NY"}]
            }]}}"#,
        );
        assert_eq!(
            decoder.request_form_layout("us").await.unwrap(),
            vec![AddressField::from(SelectorField::new(
                Some("state".to_string()),
                Some("state_label".to_string()),
                "CA".to_string(),
                vec![FieldOption::new("CA", "California").unwrap()],
            ))]
        );
    }

    #[tokio::test]
    async fn test_unknown_country_end_to_end() {
        let decoder = engine_decoder(r#"{"US": {"fields": [{"fieldId": "name"}]}}"#);
        assert!(decoder.request_form_layout("ZZ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_engine_not_ready_end_to_end() {
        let decoder = FormLayoutDecoder::new(EventDispatcher::detached(TIMEOUT));
        assert_eq!(
            decoder.request_form_layout("US").await,
            Err(LayoutError::Channel(ChannelError::NotReady))
        );
    }

    #[tokio::test]
    async fn test_builtin_layouts_end_to_end() {
        let table = LayoutTable::builtin().unwrap();
        let (dispatcher, _task) =
            EventDispatcher::spawn(AddressMetadataHandler::new(table, "US"), TIMEOUT);
        let decoder = FormLayoutDecoder::new(dispatcher);

        let (us, ca) = tokio::join!(
            decoder.request_form_layout("US"),
            decoder.request_form_layout("CA")
        );
        let us = us.unwrap();
        let ca = ca.unwrap();

        assert_eq!(us.iter().filter(|f| f.is_selector()).count(), 1);
        let province = ca.iter().find_map(AddressField::as_selector).unwrap();
        assert_eq!(province.option("QC").map(FieldOption::value), Some("Quebec"));
    }
}
