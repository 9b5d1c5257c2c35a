//! # Cart Store
//!
//! Cart content persisted in the visitor's session.
//!
//! ## Session Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  session["cart"]                      (CartConfig::session_key)         │
//! │  ├── "default"                        (instance)                        │
//! │  │   ├── "9f2c…e1": { id, name, qty, price, options, taxRate }         │
//! │  │   └── "03ab…7d": { ... }                                             │
//! │  └── "wishlist"                                                         │
//! │      └── "51c0…aa": { ..., associatedType: "catalog::Product" }        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operation Cycle
//! ```text
//!   load instance ──► CartContent operation ──► write instance back
//!        │                    │
//!        │                    └── error? session is left as it was
//!        └── malformed? CartError::CorruptSession
//! ```
//!
//! Only derived-free fields are stored; tax and totals are recomputed on
//! every load.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shoppingcart_core::{
    CartContent, CartTotals, CoreError, CoreResult, ItemId, ItemOptions, LineItem,
    LineItemAttributes, Purchasable, RowId, TaxRate, DEFAULT_INSTANCE,
};
use tracing::{debug, info};

use crate::config::CartConfig;
use crate::error::{CartError, CartResult};
use crate::session::SessionStore;

// =============================================================================
// Stored Line Item
// =============================================================================

/// One cart row as written to the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredLineItem {
    pub id: ItemId,
    pub name: String,
    pub qty: Decimal,
    pub price: Decimal,

    #[serde(default)]
    pub options: ItemOptions,

    #[serde(default)]
    pub tax_rate: TaxRate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_type: Option<String>,
}

impl From<&LineItem> for StoredLineItem {
    fn from(item: &LineItem) -> Self {
        StoredLineItem {
            id: item.id().clone(),
            name: item.name().to_string(),
            qty: item.quantity(),
            price: item.price(),
            options: item.options().clone(),
            tax_rate: item.tax_rate(),
            associated_type: item.associated_type().map(str::to_string),
        }
    }
}

impl StoredLineItem {
    /// Rebuilds the line item, checking it still hashes to `row_key`.
    fn restore(self, row_key: &str) -> CartResult<LineItem> {
        let attributes = LineItemAttributes {
            id: Some(self.id),
            name: Some(self.name),
            price: Some(self.price),
            qty: Some(self.qty),
            options: Some(self.options),
        };

        let mut item = LineItem::from_attributes(attributes)
            .map_err(|e| CartError::CorruptSession(format!("row {row_key}: {e}")))?;
        item.set_tax_rate(self.tax_rate)
            .map_err(|e| CartError::CorruptSession(format!("row {row_key}: {e}")))?;
        if let Some(entity_type) = self.associated_type {
            item.associate_type(entity_type);
        }

        if item.row_id().as_str() != row_key {
            return Err(CartError::CorruptSession(format!(
                "row {row_key} does not match its contents ({})",
                item.row_id()
            )));
        }

        Ok(item)
    }
}

/// Every instance under the session key: instance -> rowId -> row.
type SessionCarts = IndexMap<String, IndexMap<String, StoredLineItem>>;

// =============================================================================
// Cart Store
// =============================================================================

/// A cart instance bound to a session and a config.
///
/// Holding `&mut S` means only one store can write to a session at a time.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use shoppingcart_core::ItemOptions;
/// use shoppingcart_session::{CartConfig, CartStore, MemorySession};
///
/// let config = CartConfig::default();
/// let mut session = MemorySession::new();
///
/// let mut cart = CartStore::new(&mut session, &config);
/// cart.add(1, "T-Shirt", Decimal::from(2), Decimal::new(1000, 2), ItemOptions::new())?;
/// assert_eq!(cart.subtotal()?, "20.00");
/// # Ok::<(), shoppingcart_session::CartError>(())
/// ```
pub struct CartStore<'a, S>
where
    S: SessionStore + ?Sized,
{
    session: &'a mut S,
    config: &'a CartConfig,
    instance: String,
}

impl<'a, S> CartStore<'a, S>
where
    S: SessionStore + ?Sized,
{
    /// Binds the `"default"` instance.
    pub fn new(session: &'a mut S, config: &'a CartConfig) -> Self {
        CartStore {
            session,
            config,
            instance: DEFAULT_INSTANCE.to_string(),
        }
    }

    /// Switches to another named instance; an empty name means `"default"`.
    pub fn instance(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        self.instance = if name.is_empty() {
            DEFAULT_INSTANCE.to_string()
        } else {
            name
        };
        self
    }

    /// Name of the current instance.
    pub fn current_instance(&self) -> &str {
        &self.instance
    }

    pub fn config(&self) -> &CartConfig {
        self.config
    }

    // =========================================================================
    // Adding
    // =========================================================================

    /// Adds an item by id, name, quantity and price, taxed at `config.tax`.
    pub fn add(
        &mut self,
        id: impl Into<ItemId>,
        name: impl Into<String>,
        qty: Decimal,
        price: Decimal,
        options: ItemOptions,
    ) -> CartResult<LineItem> {
        let mut item = LineItem::new(id, name, price, options)?;
        item.set_quantity(qty)?;
        item.set_tax_rate(self.config.tax)?;
        self.add_item(item)
    }

    /// Adds a catalog item, taxed at `config.tax`.
    pub fn add_purchasable<P>(&mut self, purchasable: &P, qty: Decimal, options: ItemOptions) -> CartResult<LineItem>
    where
        P: Purchasable + ?Sized,
    {
        let mut item = LineItem::from_purchasable(purchasable, options)?;
        item.set_quantity(qty)?;
        item.set_tax_rate(self.config.tax)?;
        self.add_item(item)
    }

    /// Adds a prepared line item as-is. Quantities merge on equal row ids.
    pub fn add_item(&mut self, item: LineItem) -> CartResult<LineItem> {
        let stored = self.modify(|cart| cart.add(item).cloned())?;
        debug!(
            instance = %self.instance,
            row_id = %stored.row_id(),
            qty = %stored.quantity(),
            "Added item to cart"
        );
        Ok(stored)
    }

    // =========================================================================
    // Updating
    // =========================================================================

    /// Sets a row's quantity; zero or below removes the row.
    pub fn update_quantity(&mut self, row_id: &RowId, qty: Decimal) -> CartResult<Option<LineItem>> {
        let updated = self.modify(|cart| cart.update_quantity(row_id, qty).map(|i| i.cloned()))?;
        match &updated {
            Some(item) => debug!(instance = %self.instance, row_id = %row_id, qty = %item.quantity(), "Updated quantity"),
            None => debug!(instance = %self.instance, row_id = %row_id, "Removed item (quantity <= 0)"),
        }
        Ok(updated)
    }

    /// Applies an attribute update; the row may move to a new row id.
    pub fn update(&mut self, row_id: &RowId, attributes: LineItemAttributes) -> CartResult<LineItem> {
        let updated = self.modify(|cart| cart.update(row_id, attributes).cloned())?;
        debug!(
            instance = %self.instance,
            row_id = %row_id,
            new_row_id = %updated.row_id(),
            "Updated item"
        );
        Ok(updated)
    }

    /// Refreshes a row from its catalog item.
    pub fn update_from_purchasable<P>(&mut self, row_id: &RowId, purchasable: &P) -> CartResult<LineItem>
    where
        P: Purchasable + ?Sized,
    {
        let updated = self.modify(|cart| cart.update_from_purchasable(row_id, purchasable).cloned())?;
        debug!(
            instance = %self.instance,
            row_id = %row_id,
            new_row_id = %updated.row_id(),
            "Updated item from catalog"
        );
        Ok(updated)
    }

    pub fn set_tax(&mut self, row_id: &RowId, rate: impl Into<TaxRate>) -> CartResult<LineItem> {
        let rate = rate.into();
        let updated = self.modify(|cart| cart.set_tax(row_id, rate).cloned())?;
        debug!(instance = %self.instance, row_id = %row_id, tax_rate = %rate, "Set tax rate");
        Ok(updated)
    }

    /// Records the entity type a row's id refers to.
    pub fn associate(&mut self, row_id: &RowId, entity_type: impl Into<String>) -> CartResult<LineItem> {
        let entity_type = entity_type.into();
        let updated = self.modify(|cart| cart.associate(row_id, entity_type).cloned())?;
        debug!(instance = %self.instance, row_id = %row_id, "Associated item");
        Ok(updated)
    }

    // =========================================================================
    // Removing
    // =========================================================================

    pub fn remove(&mut self, row_id: &RowId) -> CartResult<LineItem> {
        let removed = self.modify(|cart| cart.remove(row_id))?;
        debug!(instance = %self.instance, row_id = %row_id, "Removed item");
        Ok(removed)
    }

    /// Drops the current instance. The session key goes away with the last
    /// instance.
    pub fn destroy(&mut self) -> CartResult<()> {
        let mut carts = self.load_all()?;
        carts.shift_remove(&self.instance);

        if carts.is_empty() {
            self.session.forget(&self.config.session_key);
        } else {
            self.write_all(&carts)?;
        }

        info!(instance = %self.instance, "Cart destroyed");
        Ok(())
    }

    // =========================================================================
    // Reading
    // =========================================================================

    pub fn get(&self, row_id: &RowId) -> CartResult<LineItem> {
        Ok(self.content()?.get(row_id)?.clone())
    }

    /// The current instance's content. Empty if nothing is stored.
    pub fn content(&self) -> CartResult<CartContent> {
        let mut carts = self.load_all()?;
        let rows = carts.shift_remove(&self.instance).unwrap_or_default();

        rows.into_iter()
            .map(|(row_key, stored)| stored.restore(&row_key))
            .collect()
    }

    /// Sum of quantities in the current instance.
    pub fn count(&self) -> CartResult<Decimal> {
        Ok(self.content()?.count())
    }

    pub fn search<F>(&self, predicate: F) -> CartResult<Vec<LineItem>>
    where
        F: FnMut(&LineItem) -> bool,
    {
        let content = self.content()?;
        Ok(content.search(predicate).into_iter().cloned().collect())
    }

    /// Names of every instance stored in the session.
    pub fn instances(&self) -> CartResult<Vec<String>> {
        Ok(self.load_all()?.into_keys().collect())
    }

    pub fn totals(&self) -> CartResult<CartTotals> {
        Ok(self.content()?.totals())
    }

    /// Subtotal, formatted with `config.format`.
    pub fn subtotal(&self) -> CartResult<String> {
        Ok(self.config.format.format(self.content()?.subtotal()))
    }

    /// Tax, formatted with `config.format`.
    pub fn tax(&self) -> CartResult<String> {
        Ok(self.config.format.format(self.content()?.tax()))
    }

    /// Total, formatted with `config.format`.
    pub fn total(&self) -> CartResult<String> {
        Ok(self.config.format.format(self.content()?.total()))
    }

    // =========================================================================
    // Session I/O
    // =========================================================================

    /// Loads, runs `op`, and writes back only if `op` succeeded.
    fn modify<T, F>(&mut self, op: F) -> CartResult<T>
    where
        F: FnOnce(&mut CartContent) -> CoreResult<T>,
    {
        let mut content = self.content()?;
        let out = op(&mut content)?;
        self.persist(&content)?;
        Ok(out)
    }

    fn persist(&mut self, content: &CartContent) -> CartResult<()> {
        let mut carts = self.load_all()?;
        let rows = content
            .iter()
            .map(|item| (item.row_id().to_string(), StoredLineItem::from(item)))
            .collect();
        carts.insert(self.instance.clone(), rows);
        self.write_all(&carts)
    }

    fn load_all(&self) -> CartResult<SessionCarts> {
        match self.session.get(&self.config.session_key) {
            Some(value) => serde_json::from_value(value).map_err(|e| {
                CartError::CorruptSession(format!("{}: {}", self.config.session_key, e))
            }),
            None => Ok(SessionCarts::new()),
        }
    }

    fn write_all(&mut self, carts: &SessionCarts) -> CartResult<()> {
        let value = serde_json::to_value(carts).map_err(CoreError::from)?;
        self.session.put(&self.config.session_key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySession;
    use serde_json::json;
    use shoppingcart_core::NumberFormat;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn size(s: &str) -> ItemOptions {
        ItemOptions::new().with("size", s)
    }

    #[test]
    fn test_add_and_read_back() {
        let config = CartConfig::default();
        let mut session = MemorySession::new();
        let mut cart = CartStore::new(&mut session, &config);

        let item = cart.add(1, "T-Shirt", dec("2"), dec("10.00"), size("L")).unwrap();
        assert_eq!(cart.get(item.row_id()).unwrap(), item);
        assert_eq!(cart.count().unwrap(), dec("2"));
        assert_eq!(cart.content().unwrap().len(), 1);
    }

    #[test]
    fn test_persists_across_store_handles() {
        let config = CartConfig::default();
        let mut session = MemorySession::new();

        let row_id = {
            let mut cart = CartStore::new(&mut session, &config);
            cart.add("SKU-1", "Mug", dec("1"), dec("7.50"), ItemOptions::new())
                .unwrap()
                .row_id()
                .clone()
        };

        let mut cart = CartStore::new(&mut session, &config);
        cart.add("SKU-1", "Mug", dec("2"), dec("7.50"), ItemOptions::new())
            .unwrap();

        assert_eq!(cart.get(&row_id).unwrap().quantity(), dec("3"));
        assert_eq!(cart.subtotal().unwrap(), "22.50");
    }

    #[test]
    fn test_session_layout() {
        let config = CartConfig::default();
        let mut session = MemorySession::new();
        let row_id = CartStore::new(&mut session, &config)
            .add(1, "T-Shirt", dec("1"), dec("10"), size("L"))
            .unwrap()
            .row_id()
            .clone();

        let stored = session.get("cart").unwrap();
        let row = &stored["default"][row_id.as_str()];
        assert_eq!(row["id"], json!(1));
        assert_eq!(row["name"], json!("T-Shirt"));
        assert_eq!(row["options"], json!({"size": "L"}));
        assert!(row.get("taxRate").is_some());
        assert!(row.get("associatedType").is_none());
        assert!(row.get("rowId").is_none());
    }

    #[test]
    fn test_config_tax_applied() {
        let config = CartConfig {
            tax: TaxRate::from(21),
            ..CartConfig::default()
        };
        let mut session = MemorySession::new();
        let mut cart = CartStore::new(&mut session, &config);

        let item = cart.add(1, "T-Shirt", dec("3"), dec("10.00"), ItemOptions::new()).unwrap();
        assert_eq!(item.tax_rate(), TaxRate::from(21));
        assert_eq!(cart.subtotal().unwrap(), "30.00");
        assert_eq!(cart.tax().unwrap(), "6.30");
        assert_eq!(cart.total().unwrap(), "36.30");
    }

    #[test]
    fn test_add_item_keeps_its_own_tax() {
        let config = CartConfig {
            tax: TaxRate::from(21),
            ..CartConfig::default()
        };
        let mut session = MemorySession::new();
        let mut cart = CartStore::new(&mut session, &config);

        let item = LineItem::new(1, "Book", dec("10"), ItemOptions::new()).unwrap();
        let stored = cart.add_item(item).unwrap();
        assert!(stored.tax_rate().is_zero());
    }

    #[test]
    fn test_formatting_uses_config() {
        let config = CartConfig {
            format: NumberFormat::new(2, ",", "."),
            ..CartConfig::default()
        };
        let mut session = MemorySession::new();
        let mut cart = CartStore::new(&mut session, &config);

        cart.add(1, "TV", dec("2"), dec("1234.5"), ItemOptions::new()).unwrap();
        assert_eq!(cart.total().unwrap(), "2.469,00");
    }

    #[test]
    fn test_instances_are_isolated() {
        let config = CartConfig::default();
        let mut session = MemorySession::new();
        let mut cart = CartStore::new(&mut session, &config);

        cart.add(1, "T-Shirt", dec("1"), dec("10"), ItemOptions::new()).unwrap();
        cart.instance("wishlist")
            .add(2, "Hoodie", dec("1"), dec("30"), ItemOptions::new())
            .unwrap();

        assert_eq!(cart.current_instance(), "wishlist");
        assert_eq!(cart.subtotal().unwrap(), "30.00");

        cart.instance("default");
        assert_eq!(cart.subtotal().unwrap(), "10.00");
        assert_eq!(cart.instances().unwrap(), ["default", "wishlist"]);
    }

    #[test]
    fn test_empty_instance_name_means_default() {
        let config = CartConfig::default();
        let mut session = MemorySession::new();
        let mut cart = CartStore::new(&mut session, &config);

        cart.instance("");
        assert_eq!(cart.current_instance(), DEFAULT_INSTANCE);
    }

    #[test]
    fn test_update_and_remove() {
        let config = CartConfig::default();
        let mut session = MemorySession::new();
        let mut cart = CartStore::new(&mut session, &config);

        let row = cart.add(1, "T-Shirt", dec("2"), dec("10"), size("M")).unwrap().row_id().clone();

        let moved = cart
            .update(&row, LineItemAttributes::new().with_options(size("L")))
            .unwrap();
        assert_ne!(moved.row_id(), &row);
        assert!(cart.get(&row).unwrap_err().is_not_found());

        assert!(cart.update_quantity(moved.row_id(), Decimal::ZERO).unwrap().is_none());
        assert!(cart.content().unwrap().is_empty());

        let err = cart.remove(moved.row_id()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_failed_operation_leaves_session_untouched() {
        let config = CartConfig::default();
        let mut session = MemorySession::new();
        let row = CartStore::new(&mut session, &config)
            .add(1, "T-Shirt", dec("2"), dec("10"), ItemOptions::new())
            .unwrap()
            .row_id()
            .clone();
        let before = session.get("cart");

        let mut cart = CartStore::new(&mut session, &config);
        let err = cart
            .update(&row, LineItemAttributes::new().with_price(dec("-1")))
            .unwrap_err();
        assert!(matches!(err, CartError::Core(CoreError::InvalidInput(_))));

        assert_eq!(session.get("cart"), before);
    }

    #[test]
    fn test_quantity_limit_on_merge_leaves_session_untouched() {
        let config = CartConfig::default();
        let mut session = MemorySession::new();
        CartStore::new(&mut session, &config)
            .add(1, "Screw", dec("1000000"), dec("0.01"), ItemOptions::new())
            .unwrap();
        let before = session.get("cart");

        let mut cart = CartStore::new(&mut session, &config);
        let err = cart
            .add(1, "Screw", dec("1"), dec("0.01"), ItemOptions::new())
            .unwrap_err();
        assert!(matches!(err, CartError::Core(CoreError::InvalidInput(_))));
        assert_eq!(cart.count().unwrap(), dec("1000000"));

        assert_eq!(session.get("cart"), before);
    }

    #[test]
    fn test_set_tax_associate_and_search() {
        let config = CartConfig::default();
        let mut session = MemorySession::new();
        let mut cart = CartStore::new(&mut session, &config);

        let row = cart.add(1, "T-Shirt", dec("1"), dec("10"), size("L")).unwrap().row_id().clone();
        cart.add(2, "Mug", dec("1"), dec("5"), ItemOptions::new()).unwrap();

        cart.set_tax(&row, 10).unwrap();
        cart.associate(&row, "catalog::Product").unwrap();

        let reloaded = cart.get(&row).unwrap();
        assert_eq!(reloaded.tax(), dec("1"));
        assert_eq!(reloaded.associated_type(), Some("catalog::Product"));

        let found = cart.search(|i| i.options().has("size")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name(), "T-Shirt");
    }

    struct Poster;

    impl Purchasable for Poster {
        fn identifier(&self, _options: &ItemOptions) -> ItemId {
            ItemId::from("POSTER")
        }

        fn description(&self, options: &ItemOptions) -> String {
            match options.get("format").and_then(|v| v.as_str()) {
                Some(format) => format!("Poster ({format})"),
                None => "Poster".to_string(),
            }
        }

        fn price(&self, options: &ItemOptions) -> Decimal {
            match options.get("format").and_then(|v| v.as_str()) {
                Some("A1") => Decimal::from(25),
                _ => Decimal::from(15),
            }
        }
    }

    #[test]
    fn test_add_and_refresh_purchasable() {
        let config = CartConfig::default();
        let mut session = MemorySession::new();
        let mut cart = CartStore::new(&mut session, &config);

        let item = cart
            .add_purchasable(&Poster, dec("2"), ItemOptions::new().with("format", "A1"))
            .unwrap();
        assert_eq!(item.name(), "Poster (A1)");
        assert_eq!(cart.subtotal().unwrap(), "50.00");

        cart.update(item.row_id(), LineItemAttributes::new().with_price(dec("1")))
            .unwrap();
        let refreshed = cart.update_from_purchasable(item.row_id(), &Poster).unwrap();
        assert_eq!(refreshed.price(), dec("25"));
    }

    #[test]
    fn test_destroy() {
        let config = CartConfig::default();
        let mut session = MemorySession::new();
        let mut cart = CartStore::new(&mut session, &config);

        cart.add(1, "T-Shirt", dec("1"), dec("10"), ItemOptions::new()).unwrap();
        cart.instance("wishlist")
            .add(2, "Hoodie", dec("1"), dec("30"), ItemOptions::new())
            .unwrap();

        cart.destroy().unwrap();
        assert_eq!(cart.instances().unwrap(), ["default"]);

        cart.instance("default").destroy().unwrap();
        assert!(!session.has("cart"));
    }

    #[test]
    fn test_corrupt_session_detected() {
        let config = CartConfig::default();
        let mut session = MemorySession::new();
        session.put("cart", json!("not a cart"));

        let cart = CartStore::new(&mut session, &config);
        assert!(matches!(cart.content(), Err(CartError::CorruptSession(_))));
    }

    #[test]
    fn test_invalid_stored_row_detected() {
        let config = CartConfig::default();
        let mut session = MemorySession::new();
        session.put(
            "cart",
            json!({"default": {"abc": {"id": 1, "name": "X", "qty": "1", "price": "-3"}}}),
        );

        let cart = CartStore::new(&mut session, &config);
        assert!(matches!(cart.content(), Err(CartError::CorruptSession(_))));
    }

    #[test]
    fn test_stored_values_beyond_limits_detected() {
        let config = CartConfig::default();
        let row_key = shoppingcart_core::generate_row_id(&ItemId::from(1), &ItemOptions::new());
        let huge = "79228162514264337593543950335";

        for row in [
            json!({"id": 1, "name": "X", "qty": "2", "price": huge}),
            json!({"id": 1, "name": "X", "qty": huge, "price": "3"}),
            json!({"id": 1, "name": "X", "qty": "2", "price": "3", "taxRate": huge}),
        ] {
            let mut session = MemorySession::new();
            session.put("cart", json!({"default": {row_key.as_str(): row}}));

            let cart = CartStore::new(&mut session, &config);
            assert!(matches!(cart.content(), Err(CartError::CorruptSession(_))));
            assert!(matches!(cart.total(), Err(CartError::CorruptSession(_))));
        }
    }

    #[test]
    fn test_tampered_row_key_detected() {
        let config = CartConfig::default();
        let mut session = MemorySession::new();
        session.put(
            "cart",
            json!({"default": {"abc": {"id": 1, "name": "X", "qty": "1", "price": "3"}}}),
        );

        let cart = CartStore::new(&mut session, &config);
        assert!(matches!(cart.content(), Err(CartError::CorruptSession(_))));
    }

    #[test]
    fn test_custom_session_key() {
        let config = CartConfig {
            session_key: "basket".into(),
            ..CartConfig::default()
        };
        let mut session = MemorySession::new();
        CartStore::new(&mut session, &config)
            .add(1, "T-Shirt", dec("1"), dec("10"), ItemOptions::new())
            .unwrap();

        assert!(session.has("basket"));
        assert!(!session.has("cart"));
    }

    #[test]
    fn test_works_through_dyn_session() {
        let config = CartConfig::default();
        let mut session = MemorySession::new();
        let dyn_session: &mut dyn SessionStore = &mut session;

        let mut cart = CartStore::new(dyn_session, &config);
        cart.add(1, "T-Shirt", dec("1"), dec("10"), ItemOptions::new()).unwrap();
        assert_eq!(cart.count().unwrap(), dec("1"));
    }
}
