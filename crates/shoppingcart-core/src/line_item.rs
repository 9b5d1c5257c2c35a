//! # Line Item
//!
//! One priced, quantified entry in a cart.
//!
//! ## Stored vs Derived
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           LineItem                                      │
//! │                                                                         │
//! │  STORED                            DERIVED (computed on every call)     │
//! │  ──────                            ───────                              │
//! │  id, options ─────────────────────► row_id (recomputed on change)      │
//! │  price, tax_rate ─────────────────► tax            = price × rate/100  │
//! │                                     price_with_tax = price + tax       │
//! │  quantity ────────────────────────► subtotal       = qty × price       │
//! │                                     total          = qty × price+tax  │
//! │                                     tax_total      = tax × qty         │
//! │  name, associated_type                                                 │
//! │                                                                         │
//! │  Derived values are exact Decimals. Rounding happens only in the       │
//! │  formatted_* methods, with an explicit NumberFormat.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use rust_decimal::Decimal;
//! use shoppingcart_core::{ItemOptions, LineItem, NumberFormat};
//!
//! let mut item = LineItem::new(1, "T-Shirt", Decimal::new(1000, 2), ItemOptions::new())?;
//! item.set_quantity(Decimal::from(3))?;
//! item.set_tax_rate(21)?;
//!
//! assert_eq!(item.formatted_total(&NumberFormat::PLAIN), "36.30");
//! # Ok::<(), shoppingcart_core::CoreError>(())
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use ts_rs::TS;

use crate::catalog::{EntityResolver, Purchasable};
use crate::error::{CoreResult, ValidationError};
use crate::money::{NumberFormat, TaxRate};
use crate::types::{ItemId, ItemOptions, RowId};
use crate::validation::{
    validate_identifier, validate_name, validate_price, validate_quantity, validate_tax_rate,
};

// =============================================================================
// Row Id Generation
// =============================================================================

/// Derives the row id of an `(id, options)` pair.
///
/// `sha256(id ++ canonical_json(options))`, hex encoded. Options are sorted by
/// key first, so insertion order never matters. Quantity, price and tax rate
/// are not part of the identity.
pub fn generate_row_id(id: &ItemId, options: &ItemOptions) -> RowId {
    let mut hasher = Sha256::new();
    hasher.update(id.to_string().as_bytes());
    hasher.update(options.canonical_json().as_bytes());
    RowId::from(hex::encode(hasher.finalize()))
}

// =============================================================================
// Line Item
// =============================================================================

/// A cart line item.
///
/// Fields are private so the row id can never drift from `(id, options)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    row_id: RowId,
    id: ItemId,
    name: String,
    quantity: Decimal,
    price: Decimal,
    options: ItemOptions,
    tax_rate: TaxRate,
    associated_type: Option<String>,
}

impl LineItem {
    /// Creates a line item with quantity 1 and no tax.
    ///
    /// ## Errors
    /// `CoreError::InvalidInput` if `id` or `name` is empty or `price` is
    /// negative. Nothing is constructed in that case.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        price: Decimal,
        options: ItemOptions,
    ) -> CoreResult<Self> {
        let id = id.into();
        let name = name.into();

        validate_identifier(&id)?;
        validate_name(&name)?;
        validate_price(price)?;

        Ok(LineItem {
            row_id: generate_row_id(&id, &options),
            id,
            name,
            quantity: Decimal::ONE,
            price,
            options,
            tax_rate: TaxRate::zero(),
            associated_type: None,
        })
    }

    /// Creates a line item from a catalog item and the selected options.
    pub fn from_purchasable<P>(item: &P, options: ItemOptions) -> CoreResult<Self>
    where
        P: Purchasable + ?Sized,
    {
        LineItem::new(
            item.identifier(&options),
            item.description(&options),
            item.price(&options),
            options,
        )
    }

    /// Creates a line item from a generic attribute record.
    ///
    /// `id`, `name` and `price` are required; `options` defaults to empty and
    /// `qty`, when present, goes through [`LineItem::set_quantity`].
    pub fn from_attributes(attributes: LineItemAttributes) -> CoreResult<Self> {
        let LineItemAttributes {
            id,
            name,
            price,
            qty,
            options,
        } = attributes;

        let id = id.ok_or_else(|| ValidationError::required("id"))?;
        let name = name.ok_or_else(|| ValidationError::required("name"))?;
        let price = price.ok_or_else(|| ValidationError::required("price"))?;

        let mut item = LineItem::new(id, name, price, options.unwrap_or_default())?;
        if let Some(qty) = qty {
            item.set_quantity(qty)?;
        }

        Ok(item)
    }

    // =========================================================================
    // Updates
    // =========================================================================

    /// Overwrites every field present in `attributes`, keeps the rest.
    ///
    /// Options, when given, replace the whole option set. All incoming values
    /// are validated before anything is assigned; the row id is recomputed.
    pub fn update_from_attributes(&mut self, attributes: LineItemAttributes) -> CoreResult<()> {
        let LineItemAttributes {
            id,
            name,
            price,
            qty,
            options,
        } = attributes;

        if let Some(id) = &id {
            validate_identifier(id)?;
        }
        if let Some(name) = &name {
            validate_name(name)?;
        }
        if let Some(price) = price {
            validate_price(price)?;
        }
        if let Some(qty) = qty {
            validate_quantity(qty)?;
        }

        if let Some(id) = id {
            self.id = id;
        }
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(qty) = qty {
            self.quantity = qty;
        }
        if let Some(options) = options {
            self.options = options;
        }

        self.row_id = generate_row_id(&self.id, &self.options);
        Ok(())
    }

    /// Re-reads id, name and price from the catalog using the current options.
    ///
    /// Quantity and options are untouched. The row id follows the new id.
    pub fn update_from_purchasable<P>(&mut self, item: &P) -> CoreResult<()>
    where
        P: Purchasable + ?Sized,
    {
        let id = item.identifier(&self.options);
        let name = item.description(&self.options);
        let price = item.price(&self.options);

        validate_identifier(&id)?;
        validate_name(&name)?;
        validate_price(price)?;

        self.id = id;
        self.name = name;
        self.price = price;
        self.row_id = generate_row_id(&self.id, &self.options);
        Ok(())
    }

    /// Replaces the quantity. The row id does not change.
    pub fn set_quantity(&mut self, qty: Decimal) -> CoreResult<()> {
        validate_quantity(qty)?;
        self.quantity = qty;
        Ok(())
    }

    /// Replaces the tax rate.
    ///
    /// ## Errors
    /// `CoreError::InvalidInput` if the rate is negative or above
    /// [`crate::MAX_TAX_RATE`]. The current rate is kept in that case.
    pub fn set_tax_rate(&mut self, rate: impl Into<TaxRate>) -> CoreResult<&mut Self> {
        let rate = rate.into();
        validate_tax_rate(rate)?;
        self.tax_rate = rate;
        Ok(self)
    }

    /// Records the resolver's entity type for a later [`LineItem::model`] call.
    pub fn associate<R>(&mut self, resolver: &R) -> &mut Self
    where
        R: EntityResolver + ?Sized,
    {
        self.associate_type(resolver.entity_type())
    }

    /// Records an entity type by name.
    pub fn associate_type(&mut self, entity_type: impl Into<String>) -> &mut Self {
        self.associated_type = Some(entity_type.into());
        self
    }

    /// Looks up the associated entity by this item's id.
    ///
    /// `None` when nothing is associated, when `resolver` serves a different
    /// entity type, or when the entity does not exist.
    pub fn model<R>(&self, resolver: &R) -> Option<R::Entity>
    where
        R: EntityResolver + ?Sized,
    {
        let associated = self.associated_type.as_deref()?;
        if associated != resolver.entity_type() {
            return None;
        }
        resolver.find(&self.id)
    }

    // =========================================================================
    // Stored Fields
    // =========================================================================

    pub fn row_id(&self) -> &RowId {
        &self.row_id
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Unit price without tax.
    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn options(&self) -> &ItemOptions {
        &self.options
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    pub fn associated_type(&self) -> Option<&str> {
        self.associated_type.as_deref()
    }

    // =========================================================================
    // Derived Values
    // =========================================================================

    /// Tax on one unit.
    pub fn tax(&self) -> Decimal {
        self.tax_rate.tax_on(self.price)
    }

    /// Unit price including tax.
    pub fn price_with_tax(&self) -> Decimal {
        self.price + self.tax()
    }

    /// Line price without tax.
    pub fn subtotal(&self) -> Decimal {
        self.quantity * self.price
    }

    /// Line price including tax.
    pub fn total(&self) -> Decimal {
        self.quantity * self.price_with_tax()
    }

    /// Tax for the whole line.
    pub fn tax_total(&self) -> Decimal {
        self.tax() * self.quantity
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    pub fn formatted_price(&self, format: &NumberFormat) -> String {
        format.format(self.price)
    }

    pub fn formatted_price_tax(&self, format: &NumberFormat) -> String {
        format.format(self.price_with_tax())
    }

    pub fn formatted_subtotal(&self, format: &NumberFormat) -> String {
        format.format(self.subtotal())
    }

    pub fn formatted_total(&self, format: &NumberFormat) -> String {
        format.format(self.total())
    }

    pub fn formatted_tax(&self, format: &NumberFormat) -> String {
        format.format(self.tax())
    }

    pub fn formatted_tax_total(&self, format: &NumberFormat) -> String {
        format.format(self.tax_total())
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    /// Plain record of this item. `tax` and `subtotal` use [`NumberFormat::PLAIN`].
    pub fn to_record(&self) -> LineItemRecord {
        LineItemRecord {
            row_id: self.row_id.clone(),
            id: self.id.clone(),
            name: self.name.clone(),
            qty: self.quantity,
            price: self.price,
            options: self.options.clone(),
            tax: self.formatted_tax(&NumberFormat::PLAIN),
            subtotal: self.formatted_subtotal(&NumberFormat::PLAIN),
        }
    }

    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(&self.to_record())?)
    }
}

// =============================================================================
// Record
// =============================================================================

/// Serialized view of a line item.
///
/// ## JSON Shape
/// ```json
/// {
///   "rowId": "9f86d08...",
///   "id": 1,
///   "name": "T-Shirt",
///   "qty": "3",
///   "price": "10.00",
///   "options": { "size": "L" },
///   "tax": "2.10",
///   "subtotal": "30.00"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItemRecord {
    #[ts(type = "string")]
    pub row_id: RowId,

    #[ts(type = "number | string")]
    pub id: ItemId,

    pub name: String,

    #[ts(type = "string")]
    pub qty: Decimal,

    #[ts(type = "string")]
    pub price: Decimal,

    #[ts(type = "Record<string, unknown>")]
    pub options: ItemOptions,

    /// Unit tax, formatted.
    pub tax: String,

    /// Line subtotal, formatted.
    pub subtotal: String,
}

// =============================================================================
// Attributes
// =============================================================================

/// Named-field input for creating or updating a line item.
///
/// Every field is optional so the same type serves partial updates.
/// Decimals decode from JSON numbers or numeric strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItemAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qty: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<ItemOptions>,
}

impl LineItemAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes an arbitrary JSON record. Unknown fields are ignored.
    ///
    /// ## Errors
    /// `CoreError::InvalidInput` when a field has the wrong shape, e.g. a
    /// price of `"abc"`.
    pub fn from_value(value: serde_json::Value) -> CoreResult<Self> {
        serde_json::from_value(value).map_err(|e| {
            ValidationError::InvalidFormat {
                field: "attributes".to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<ItemId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn with_qty(mut self, qty: Decimal) -> Self {
        self.qty = Some(qty);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: ItemOptions) -> Self {
        self.options = Some(options);
        self
    }
}

impl From<&LineItemRecord> for LineItemAttributes {
    fn from(record: &LineItemRecord) -> Self {
        LineItemAttributes {
            id: Some(record.id.clone()),
            name: Some(record.name.clone()),
            price: Some(record.price),
            qty: Some(record.qty),
            options: Some(record.options.clone()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
