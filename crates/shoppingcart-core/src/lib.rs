//! # shoppingcart-core: Pure Cart Logic
//!
//! Line items, row identity, tax and totals, and number formatting. No
//! session access, no config files, no logging subscribers.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Shopping Cart Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Host application                             │   │
//! │  │    product pages ──► cart page ──► checkout ──► logout         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               shoppingcart-session                              │   │
//! │  │    CartStore, CartConfig, CartServiceProvider, SessionStore    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shoppingcart-core (THIS CRATE) ★                │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ line_item │  │   cart    │  │   │
//! │  │   │  ItemId   │  │  TaxRate  │  │ LineItem  │  │CartContent│  │   │
//! │  │   │  RowId    │  │NumberFormat│ │  Record   │  │CartTotals │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SESSION • DETERMINISTIC                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Item ids, row ids, item options
//! - [`money`] - Tax rates and number formatting
//! - [`line_item`] - The line item and its persisted record
//! - [`cart`] - Row-keyed cart content and totals
//! - [`catalog`] - Traits implemented by host catalogs
//! - [`error`] - Domain error types
//! - [`validation`] - Field validators
//!
//! ## Example Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use shoppingcart_core::{CartContent, ItemOptions, LineItem, NumberFormat};
//!
//! let mut shirt = LineItem::new(1, "T-Shirt", Decimal::new(1000, 2), ItemOptions::new())?;
//! shirt.set_quantity(Decimal::from(3))?;
//! shirt.set_tax_rate(21)?;
//!
//! let mut cart = CartContent::new();
//! cart.add(shirt)?;
//!
//! assert_eq!(NumberFormat::PLAIN.format(cart.total()), "36.30");
//! # Ok::<(), shoppingcart_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod line_item;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartContent, CartTotals};
pub use catalog::{EntityResolver, Purchasable};
pub use error::{CoreError, CoreResult, ValidationError};
pub use line_item::{generate_row_id, LineItem, LineItemAttributes, LineItemRecord};
pub use money::{NumberFormat, TaxRate};
pub use types::{ItemId, ItemOptions, RowId};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Instance name used when the caller does not pick one.
pub const DEFAULT_INSTANCE: &str = "default";

/// Largest unit price a line item accepts.
///
/// Together with [`MAX_ITEM_QUANTITY`] and [`MAX_TAX_RATE`] this keeps a line
/// total below 10^19, far inside `Decimal`'s range even when summed over a
/// cart, so derived values never overflow.
pub const MAX_ITEM_PRICE: rust_decimal::Decimal =
    rust_decimal::Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0); // 10^12

/// Largest quantity of a single row, including merged quantities.
pub const MAX_ITEM_QUANTITY: rust_decimal::Decimal =
    rust_decimal::Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Largest tax rate, as a percentage.
pub const MAX_TAX_RATE: rust_decimal::Decimal = rust_decimal::Decimal::ONE_THOUSAND;
