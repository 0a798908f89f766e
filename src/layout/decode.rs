//! Bundle to layout decoding
//!
//! Field entries are decoded leniently (missing identity is kept as `None`),
//! while options are strict: an option without a non-empty text and value is
//! dropped and logged, never reported to the caller.

use super::fields::{AddressField, FieldOption, SelectorField, TextField};
use crate::bundle::Bundle;
use crate::error::DecodeError;

const FIELDS_KEY: &str = "fields";
const FIELD_ID_KEY: &str = "fieldId";
const L10N_ID_KEY: &str = "l10nId";
const OPTIONS_KEY: &str = "options";
const VALUE_KEY: &str = "value";
const TEXT_KEY: &str = "text";

/// Decode a form layout response into its ordered fields.
///
/// A missing response is an error; a response without `fields` is a layout
/// with zero fields.
pub fn decode(response: Option<&Bundle>) -> Result<Vec<AddressField>, DecodeError> {
    let response = response.ok_or(DecodeError::MissingResponse)?;

    let fields: Vec<AddressField> = response
        .get_bundle_array(FIELDS_KEY)
        .unwrap_or_default()
        .into_iter()
        .map(|entry| decode_field(&entry.unwrap_or_default()))
        .collect();

    tracing::debug!(count = fields.len(), "decoded form layout");
    Ok(fields)
}

/// Decode a single field entry; `options` presence selects the variant
pub fn decode_field(bundle: &Bundle) -> AddressField {
    if bundle.contains_key(OPTIONS_KEY) {
        decode_selector_field(bundle).into()
    } else {
        decode_text_field(bundle).into()
    }
}

fn decode_text_field(bundle: &Bundle) -> TextField {
    TextField::new(
        bundle.get_string(FIELD_ID_KEY).map(str::to_string),
        bundle.get_string(L10N_ID_KEY).map(str::to_string),
    )
}

fn decode_selector_field(bundle: &Bundle) -> SelectorField {
    let id = bundle.get_string(FIELD_ID_KEY).map(str::to_string);
    let localization_key = bundle.get_string(L10N_ID_KEY).map(str::to_string);
    let default_value = bundle.get_string_or(VALUE_KEY, "").to_string();

    let options = bundle
        .get_bundle_array(OPTIONS_KEY)
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| decode_option(id.as_deref(), index, entry.as_ref()))
        .collect();

    SelectorField::new(id, localization_key, default_value, options)
}

/// The option's `value` becomes the stored key and its `text` the label
fn decode_option(
    field_id: Option<&str>,
    index: usize,
    bundle: Option<&Bundle>,
) -> Option<FieldOption> {
    let Some(bundle) = bundle else {
        tracing::warn!(field = ?field_id, index, "dropping address field option: not a bundle");
        return None;
    };

    let text = bundle.get_string_or(TEXT_KEY, "");
    let value = bundle.get_string_or(VALUE_KEY, "");

    match FieldOption::new(value, text) {
        Ok(option) => Some(option),
        Err(e) => {
            tracing::warn!(field = ?field_id, index, "dropping address field option: {e}");
            None
        }
    }
}
