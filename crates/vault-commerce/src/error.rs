//! Commerce error types.

use crate::ids::RecordId;
use crate::money::Currency;
use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Every operation that returns one of these leaves its state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Record not found in the catalog.
    #[error("Record not found: {0}")]
    RecordNotFound(RecordId),

    /// Two catalog records share an identifier.
    #[error("Duplicate record id in catalog: {0}")]
    DuplicateRecord(RecordId),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// A price is in a different currency than the catalog or cart.
    #[error("Currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch { expected: Currency, found: Currency },

    /// A filter selector value could not be parsed.
    #[error("Invalid {field} selector: {value:?}")]
    InvalidSelector { field: &'static str, value: String },

    /// Store configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::Config(e.to_string())
    }
}
