//! Query dispatch between callers and the engine

mod client;
mod traits;

pub use client::{FormLayoutDecoder, GET_FORM_LAYOUT};
pub use traits::QueryChannel;

#[cfg(test)]
pub use traits::MockQueryChannel;
