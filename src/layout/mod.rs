//! Address form layouts
//!
//! Typed field descriptors and the decoder that builds them from engine
//! bundles.

mod decode;
mod fields;

pub use decode::{decode, decode_field};
pub use fields::{AddressField, FieldOption, SelectorField, TextField};
