//! # Cart Content
//!
//! The row-keyed collection of line items behind one cart instance.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Content Operations                              │
//! │                                                                         │
//! │  Operation               Row exists?          Effect                    │
//! │  ─────────               ───────────          ──────                    │
//! │                                                                         │
//! │  add(item) ────────────► yes ───────────────► qty += item.qty          │
//! │                          no  ───────────────► append row               │
//! │                                                                         │
//! │  update_quantity(r, q) ► q <= 0 ────────────► remove row               │
//! │                          q > 0  ────────────► qty = q                  │
//! │                                                                         │
//! │  update(r, attrs) ─────► row id unchanged ──► replace in place         │
//! │                          row id changed ────► drop old key,            │
//! │                                               merge into clash or      │
//! │                                               append as new row        │
//! │                                                                         │
//! │  remove(r) / get(r) ───► missing ───────────► CoreError::RowNotFound   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Purchasable;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::line_item::{LineItem, LineItemAttributes};
use crate::money::TaxRate;
use crate::types::RowId;
use crate::MAX_ITEM_QUANTITY;

/// Line items keyed by row id, in insertion order.
///
/// ## Invariants
/// - The key of every entry equals the entry's `row_id()`
/// - Adding an item whose row id already exists merges quantities
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartContent {
    items: IndexMap<RowId, LineItem>,
}

impl CartContent {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item or, if its row already exists, increases that row's quantity.
    ///
    /// The incoming item replaces the stored one (so its price, name and tax
    /// rate win), carrying the summed quantity.
    pub fn add(&mut self, mut item: LineItem) -> CoreResult<&LineItem> {
        if let Some(existing) = self.items.get(item.row_id()) {
            item.set_quantity(merged_quantity(existing, &item)?)?;
        }

        let row_id = item.row_id().clone();
        let index = match self.items.get_index_of(&row_id) {
            Some(index) => {
                self.items[index] = item;
                index
            }
            None => self.items.insert_full(row_id, item).0,
        };

        Ok(&self.items[index])
    }

    /// Returns the item stored under `row_id`.
    pub fn get(&self, row_id: &RowId) -> CoreResult<&LineItem> {
        self.items
            .get(row_id)
            .ok_or_else(|| CoreError::RowNotFound(row_id.clone()))
    }

    /// Returns true if the cart has a row with this id.
    pub fn has(&self, row_id: &RowId) -> bool {
        self.items.contains_key(row_id)
    }

    /// Sets a row's quantity; zero or below removes the row.
    ///
    /// ## Returns
    /// - `Ok(Some(item))` with the updated item
    /// - `Ok(None)` if the row was removed
    pub fn update_quantity(&mut self, row_id: &RowId, qty: Decimal) -> CoreResult<Option<&LineItem>> {
        if qty <= Decimal::ZERO {
            self.remove(row_id)?;
            return Ok(None);
        }

        let item = self
            .items
            .get_mut(row_id)
            .ok_or_else(|| CoreError::RowNotFound(row_id.clone()))?;
        item.set_quantity(qty)?;
        Ok(Some(&*item))
    }

    /// Applies [`LineItem::update_from_attributes`] to a row.
    pub fn update(&mut self, row_id: &RowId, attributes: LineItemAttributes) -> CoreResult<&LineItem> {
        self.update_with(row_id, |item| item.update_from_attributes(attributes))
    }

    /// Applies [`LineItem::update_from_purchasable`] to a row.
    pub fn update_from_purchasable<P>(&mut self, row_id: &RowId, purchasable: &P) -> CoreResult<&LineItem>
    where
        P: Purchasable + ?Sized,
    {
        self.update_with(row_id, |item| item.update_from_purchasable(purchasable))
    }

    /// Sets the tax rate of a row.
    pub fn set_tax(&mut self, row_id: &RowId, rate: impl Into<TaxRate>) -> CoreResult<&LineItem> {
        let item = self
            .items
            .get_mut(row_id)
            .ok_or_else(|| CoreError::RowNotFound(row_id.clone()))?;
        item.set_tax_rate(rate)?;
        Ok(&*item)
    }

    /// Associates a row with an entity type.
    pub fn associate(&mut self, row_id: &RowId, entity_type: impl Into<String>) -> CoreResult<&LineItem> {
        let item = self
            .items
            .get_mut(row_id)
            .ok_or_else(|| CoreError::RowNotFound(row_id.clone()))?;
        item.associate_type(entity_type);
        Ok(&*item)
    }

    /// Removes a row and returns its item.
    pub fn remove(&mut self, row_id: &RowId) -> CoreResult<LineItem> {
        self.items
            .shift_remove(row_id)
            .ok_or_else(|| CoreError::RowNotFound(row_id.clone()))
    }

    /// Removes every row.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.items.values()
    }

    /// Items matching `predicate`, in insertion order.
    pub fn search<F>(&self, mut predicate: F) -> Vec<&LineItem>
    where
        F: FnMut(&LineItem) -> bool,
    {
        self.items.values().filter(|item| predicate(item)).collect()
    }

    /// Sum of all quantities.
    pub fn count(&self) -> Decimal {
        self.items.values().map(LineItem::quantity).sum()
    }

    /// Sum of line subtotals (before tax).
    pub fn subtotal(&self) -> Decimal {
        self.items.values().map(LineItem::subtotal).sum()
    }

    /// Sum of line tax totals.
    pub fn tax(&self) -> Decimal {
        self.items.values().map(LineItem::tax_total).sum()
    }

    /// Sum of line totals (after tax).
    pub fn total(&self) -> Decimal {
        self.items.values().map(LineItem::total).sum()
    }

    /// Snapshot of the cart's figures.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self)
    }

    /// Runs `update` on a copy of the row, then re-keys it.
    ///
    /// The stored row is left untouched if `update` fails. When the row id
    /// changes and another row already has the new id, the two rows merge.
    fn update_with<F>(&mut self, row_id: &RowId, update: F) -> CoreResult<&LineItem>
    where
        F: FnOnce(&mut LineItem) -> CoreResult<()>,
    {
        let mut item = self.get(row_id)?.clone();
        update(&mut item)?;

        if item.row_id() != row_id {
            if let Some(existing) = self.items.get(item.row_id()) {
                item.set_quantity(merged_quantity(existing, &item)?)?;
            }
            self.items.shift_remove(row_id);
        }

        let new_row_id = item.row_id().clone();
        let index = match self.items.get_index_of(&new_row_id) {
            Some(index) => {
                self.items[index] = item;
                index
            }
            None => self.items.insert_full(new_row_id, item).0,
        };

        Ok(&self.items[index])
    }
}

/// Sum of two rows' quantities. Anything past the quantity limit is rejected.
fn merged_quantity(existing: &LineItem, incoming: &LineItem) -> CoreResult<Decimal> {
    existing
        .quantity()
        .checked_add(incoming.quantity())
        .ok_or_else(|| {
            ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: Decimal::ZERO,
                max: MAX_ITEM_QUANTITY,
            }
            .into()
        })
}

impl FromIterator<LineItem> for CartContent {
    /// Builds a cart from items; items sharing a row id are kept last-wins.
    fn from_iter<I: IntoIterator<Item = LineItem>>(iter: I) -> Self {
        CartContent {
            items: iter
                .into_iter()
                .map(|item| (item.row_id().clone(), item))
                .collect(),
        }
    }
}

/// Cart totals summary for API responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub row_count: usize,

    #[ts(type = "string")]
    pub total_quantity: Decimal,

    #[ts(type = "string")]
    pub subtotal: Decimal,

    #[ts(type = "string")]
    pub tax: Decimal,

    #[ts(type = "string")]
    pub total: Decimal,
}

impl From<&CartContent> for CartTotals {
    fn from(cart: &CartContent) -> Self {
        CartTotals {
            row_count: cart.len(),
            total_quantity: cart.count(),
            subtotal: cart.subtotal(),
            tax: cart.tax(),
            total: cart.total(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
