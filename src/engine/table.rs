//! Per-country layout data served by the engine

use crate::bundle::Bundle;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const BUILTIN_LAYOUTS: &str = include_str!("layouts.json");

#[derive(Debug, Deserialize)]
struct CountryLayout {
    #[serde(default)]
    fields: Vec<Bundle>,
}

/// Field bundles keyed by upper-case country code
#[derive(Debug, Clone, Default)]
pub struct LayoutTable {
    layouts: HashMap<String, Vec<Bundle>>,
}

impl LayoutTable {
    /// Layouts shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_LAYOUTS).context("Failed to parse built-in layouts")
    }

    /// Parse `{ "<country>": { "fields": [...] }, ... }`
    pub fn from_json(json: &str) -> Result<Self> {
        let parsed: HashMap<String, CountryLayout> = serde_json::from_str(json)?;
        let layouts = parsed
            .into_iter()
            .map(|(country, layout)| (country.to_uppercase(), layout.fields))
            .collect();
        Ok(Self { layouts })
    }

    /// Load a layout file in the same shape as the built-in data
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read layouts from {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse layouts from {}", path.display()))
    }

    /// Add `other`'s countries, replacing any already present
    pub fn merge(&mut self, other: LayoutTable) {
        self.layouts.extend(other.layouts);
    }

    /// Field bundles for `country`, case-insensitive
    pub fn get(&self, country: &str) -> Option<&[Bundle]> {
        self.layouts.get(&country.to_uppercase()).map(Vec::as_slice)
    }

    /// Known country codes, sorted
    pub fn countries(&self) -> Vec<&str> {
        let mut countries: Vec<&str> = self.layouts.keys().map(String::as_str).collect();
        countries.sort_unstable();
        countries
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{decode_field, AddressField};
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_builtin_layouts_parse() {
        let table = LayoutTable::builtin().unwrap();
        assert_eq!(table.countries(), vec!["CA", "DE", "FR", "GB", "US"]);
    }

    #[test]
    fn test_builtin_us_has_state_selector() {
        let table = LayoutTable::builtin().unwrap();
        let fields: Vec<AddressField> = table.get("US").unwrap().iter().map(decode_field).collect();

        let state = fields
            .iter()
            .find(|f| f.id() == Some("address-level1"))
            .and_then(AddressField::as_selector)
            .unwrap();
        assert!(state.option("CA").is_some());
        assert!(state.options().iter().all(|o| !o.key().is_empty() && !o.value().is_empty()));
    }

    #[test]
    fn test_builtin_de_is_text_only() {
        let table = LayoutTable::builtin().unwrap();
        let de = table.get("de").unwrap();
        assert!(!de.is_empty());
        assert!(de.iter().map(decode_field).all(|f| !f.is_selector()));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = LayoutTable::from_json(r#"{"nz": {"fields": [{"fieldId": "name"}]}}"#).unwrap();
        assert!(table.get("NZ").is_some());
        assert!(table.get("nz").is_some());
        assert!(table.get("AU").is_none());
    }

    #[test]
    fn test_missing_fields_is_empty_layout() {
        let table = LayoutTable::from_json(r#"{"AQ": {}}"#).unwrap();
        assert_eq!(table.get("AQ").map(<[Bundle]>::len), Some(0));
    }

    #[test]
    fn test_merge_overrides_existing_country() {
        let mut table = LayoutTable::builtin().unwrap();
        let before = table.len();
        let custom = LayoutTable::from_json(
            r#"{"us": {"fields": [{"fieldId": "only"}]}, "JP": {}}"#,
        )
        .unwrap();
        table.merge(custom);

        assert_eq!(table.len(), before + 1);
        let us = table.get("US").unwrap();
        assert_eq!(us.len(), 1);
        assert_eq!(us[0].get_string("fieldId"), Some("only"));
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(LayoutTable::from_json("[1, 2]").is_err());
        assert!(LayoutTable::from_json("not json").is_err());
    }

    #[test]
    fn test_from_path() {
        let file_name = format!("address-metadata-layouts-{}.json", std::process::id());
        let path = std::env::temp_dir().join(file_name);
        let mut file = fs::File::create(&path).unwrap();
        write!(file, r#"{{"IT": {{"fields": [{{"fieldId": "name"}}]}}}}"#).unwrap();
        drop(file);

        let table = LayoutTable::from_path(&path).unwrap();
        assert_eq!(table.countries(), vec!["IT"]);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_from_missing_path_is_error() {
        let path = Path::new("/nonexistent/address-metadata/layouts.json");
        let err = LayoutTable::from_path(path).unwrap_err();
        assert!(err.to_string().contains("Failed to read layouts"));
    }
}
