//! Request payloads for the catalog API, one explicit struct per endpoint.
//!
//! The screens build these instead of appending loose string keys to a
//! request body, so the field names each endpoint expects are pinned in one
//! place. Every payload validates itself before any request goes out; an
//! invalid payload never reaches the network.

use std::fmt;

pub mod category;
pub mod location;
pub mod product;

pub use category::NewCategory;
pub use location::NewLocation;
pub use product::NewProduct;

/// A submit rejected before any request was sent. The message is user-facing
/// and shown as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
