//! # Validation Module
//!
//! Field validators for line items.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Decoding (serde)                                             │
//! │  └── "abc" as a price never becomes a Decimal                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── id / name present and non-empty                                   │
//! │  ├── 0 <= price <= MAX_ITEM_PRICE                                      │
//! │  ├── 0 < quantity <= MAX_ITEM_QUANTITY                                 │
//! │  └── 0 <= tax rate <= MAX_TAX_RATE                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: LineItem                                                     │
//! │  └── assigns fields only after every check passed                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rust_decimal::Decimal;
//! use shoppingcart_core::validation::{validate_price, validate_quantity};
//!
//! assert!(validate_price(Decimal::ZERO).is_ok());
//! assert!(validate_quantity(Decimal::ZERO).is_err());
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::money::TaxRate;
use crate::types::ItemId;
use crate::{MAX_ITEM_PRICE, MAX_ITEM_QUANTITY, MAX_TAX_RATE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an item identifier.
///
/// ## Rules
/// - Must not be an empty string
/// - Must not be the integer `0`
pub fn validate_identifier(id: &ItemId) -> ValidationResult<()> {
    if id.is_empty() {
        return Err(ValidationError::required("id"));
    }

    Ok(())
}

/// Validates an item name.
///
/// `"0"` is a valid name; only the empty string is rejected.
///
/// ## Example
/// ```rust
/// use shoppingcart_core::validation::validate_name;
///
/// assert!(validate_name("T-Shirt").is_ok());
/// assert!(validate_name("").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::required("name"));
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - Must not exceed MAX_ITEM_PRICE (10^12)
pub fn validate_price(price: Decimal) -> ValidationResult<()> {
    if price < Decimal::ZERO {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    if price > MAX_ITEM_PRICE {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: Decimal::ZERO,
            max: MAX_ITEM_PRICE,
        });
    }

    Ok(())
}

/// Validates a quantity.
///
/// ## Rules
/// - Must be positive (> 0); fractional quantities (e.g. 0.5 kg) are fine
/// - Must not exceed MAX_ITEM_QUANTITY (1,000,000)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart: Change Quantity                                                  │
/// │                                                                         │
/// │  set_quantity(qty)                                                      │
/// │       │                                                                 │
/// │       ├── qty <= 0? → Error: "quantity must be positive"                │
/// │       ├── qty > 10^6? → Error: "quantity must be between 0 and 1000000" │
/// │       │                                                                 │
/// │       └── OK → quantity replaced, row id unchanged                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: Decimal) -> ValidationResult<()> {
    if qty <= Decimal::ZERO {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: Decimal::ZERO,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a tax rate.
///
/// ## Rules
/// - Must be non-negative
/// - Must not exceed MAX_TAX_RATE (1000%)
pub fn validate_tax_rate(rate: TaxRate) -> ValidationResult<()> {
    let percentage = rate.percentage();
    if percentage < Decimal::ZERO {
        return Err(ValidationError::MustNotBeNegative {
            field: "taxRate".to_string(),
        });
    }

    if percentage > MAX_TAX_RATE {
        return Err(ValidationError::OutOfRange {
            field: "taxRate".to_string(),
            min: Decimal::ZERO,
            max: MAX_TAX_RATE,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
