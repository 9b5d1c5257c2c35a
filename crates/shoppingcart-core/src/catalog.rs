//! # Catalog Capabilities
//!
//! The cart never depends on a concrete product type. Anything that can
//! describe itself as a purchasable item can be added; anything that can look
//! up an entity by id can back [`LineItem::model`](crate::LineItem::model).
//!
//! ```text
//! ┌──────────────────┐  identifier/description/price   ┌──────────────┐
//! │  your Product    │ ──────────────────────────────► │   LineItem   │
//! │  impl Purchasable│                                  │              │
//! └──────────────────┘                                  │ associated   │
//! ┌──────────────────┐  find(id) on demand              │ type name    │
//! │  your Repository │ ◄────────────────────────────── │              │
//! │ impl EntityResolver                                 └──────────────┘
//! └──────────────────┘
//! ```

use rust_decimal::Decimal;

use crate::types::{ItemId, ItemOptions};

/// Something that can be put in a cart.
///
/// Every method receives the selected options so a catalog can vary the
/// identifier, description or price per variant.
pub trait Purchasable {
    /// Catalog identifier for the given options.
    fn identifier(&self, options: &ItemOptions) -> ItemId;

    /// Display name for the given options.
    fn description(&self, options: &ItemOptions) -> String;

    /// Unit price (before tax) for the given options.
    fn price(&self, options: &ItemOptions) -> Decimal;
}

/// Looks up external entities by line item id.
pub trait EntityResolver {
    type Entity;

    /// Name of the entity type this resolver serves. Recorded on line items by
    /// [`LineItem::associate`](crate::LineItem::associate).
    fn entity_type(&self) -> &str;

    /// Returns the entity, or `None` when it does not exist.
    fn find(&self, id: &ItemId) -> Option<Self::Entity>;
}
