//! Address field value objects
//!
//! Every type here is immutable once built and compares structurally, so
//! decoded layouts can be diffed or used as cache keys.

use crate::error::InvalidOption;
use serde::Serialize;

/// One entry of an address form layout
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AddressField {
    Text(TextField),
    Selector(SelectorField),
}

impl AddressField {
    /// Field identifier used by form filling, if the engine sent one
    pub fn id(&self) -> Option<&str> {
        match self {
            AddressField::Text(field) => field.id(),
            AddressField::Selector(field) => field.id(),
        }
    }

    /// Opaque reference to the field's display label
    pub fn localization_key(&self) -> Option<&str> {
        match self {
            AddressField::Text(field) => field.localization_key(),
            AddressField::Selector(field) => field.localization_key(),
        }
    }

    pub fn is_selector(&self) -> bool {
        matches!(self, AddressField::Selector(_))
    }

    pub fn as_selector(&self) -> Option<&SelectorField> {
        match self {
            AddressField::Selector(field) => Some(field),
            AddressField::Text(_) => None,
        }
    }
}

impl From<TextField> for AddressField {
    fn from(field: TextField) -> Self {
        AddressField::Text(field)
    }
}

impl From<SelectorField> for AddressField {
    fn from(field: SelectorField) -> Self {
        AddressField::Selector(field)
    }
}

/// Free-text input field
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct TextField {
    id: Option<String>,
    localization_key: Option<String>,
}

impl TextField {
    pub fn new(id: Option<String>, localization_key: Option<String>) -> Self {
        Self {
            id,
            localization_key,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn localization_key(&self) -> Option<&str> {
        self.localization_key.as_deref()
    }
}

/// Field restricted to an ordered set of options
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct SelectorField {
    id: Option<String>,
    localization_key: Option<String>,
    default_value: String,
    options: Vec<FieldOption>,
}

impl SelectorField {
    pub fn new(
        id: Option<String>,
        localization_key: Option<String>,
        default_value: String,
        options: Vec<FieldOption>,
    ) -> Self {
        Self {
            id,
            localization_key,
            default_value,
            options,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn localization_key(&self) -> Option<&str> {
        self.localization_key.as_deref()
    }

    /// Key preselected in the UI; may be empty and is not checked against
    /// the option keys
    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    /// Options in display order
    pub fn options(&self) -> &[FieldOption] {
        &self.options
    }

    /// Look up an option by its stored key
    pub fn option(&self, key: &str) -> Option<&FieldOption> {
        self.options.iter().find(|option| option.key == key)
    }
}

/// A selectable option: the stored key and the label shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FieldOption {
    key: String,
    value: String,
}

impl FieldOption {
    /// Build an option; both parts must be non-empty
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Result<Self, InvalidOption> {
        let key = key.into();
        let value = value.into();
        if key.is_empty() {
            return Err(InvalidOption::EmptyKey);
        }
        if value.is_empty() {
            return Err(InvalidOption::EmptyLabel);
        }
        Ok(Self { key, value })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
