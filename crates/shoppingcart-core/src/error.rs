//! # Error Types
//!
//! Domain-specific error types for shoppingcart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shoppingcart-core errors (this file)                                  │
//! │  ├── CoreError        - Line item / cart content failures              │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  shoppingcart-session errors (separate crate)                          │
//! │  └── CartError        - Session, config and provider failures          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CartError → caller                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed entity lookup is not an error: resolvers return `None`.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::RowId;

// =============================================================================
// Core Error
// =============================================================================

/// Core cart errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A line item field failed validation.
    ///
    /// ## When This Occurs
    /// - Constructing a line item with an empty id or name
    /// - A negative or non-numeric price
    /// - Setting a quantity of zero or below
    /// - A price, quantity or tax rate above its maximum
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// The cart has no row with this identifier.
    #[error("The cart does not contain rowId {0}")]
    RowNotFound(RowId),

    /// A line item could not be encoded.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised synchronously by constructors and setters, before any field of the
/// line item is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Value lies outside the accepted range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: String,
        min: Decimal,
        max: Decimal,
    },

    /// Value could not be decoded (e.g. a non-numeric price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Shorthand for [`ValidationError::Required`].
    pub fn required(field: &str) -> Self {
        ValidationError::Required {
            field: field.to_string(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
