//! # Cart Demo Entry Point
//!
//! Drives a session-backed cart end to end and prints what a storefront
//! would render.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Register the cart service (`cart.toml` + `CART_*` env vars)
//! 3. Open an in-memory session
//! 4. Add, update and price items in two instances
//! 5. Log out and show the session afterwards
//!
//! ## Usage
//! ```text
//! cart-demo [path/to/cart.toml]
//! RUST_LOG=shoppingcart=trace CART_TAX=21 cart-demo
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use rust_decimal::Decimal;
use shoppingcart_core::{
    EntityResolver, ItemId, ItemOptions, LineItemAttributes, LineItemRecord, Purchasable,
};
use shoppingcart_session::{AuthEvent, CartServiceProvider, MemorySession, SessionStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

// =============================================================================
// Demo Catalog
// =============================================================================

#[derive(Debug, Clone)]
struct Product {
    sku: &'static str,
    name: &'static str,
    price: Decimal,
}

impl Purchasable for Product {
    fn identifier(&self, _options: &ItemOptions) -> ItemId {
        ItemId::from(self.sku)
    }

    fn description(&self, options: &ItemOptions) -> String {
        match options.get("size").and_then(|v| v.as_str()) {
            Some(size) => format!("{} ({})", self.name, size),
            None => self.name.to_string(),
        }
    }

    fn price(&self, options: &ItemOptions) -> Decimal {
        // XL costs two more
        match options.get("size").and_then(|v| v.as_str()) {
            Some("XL") => self.price + Decimal::from(2),
            _ => self.price,
        }
    }
}

struct Catalog {
    products: HashMap<&'static str, Product>,
}

impl Catalog {
    fn demo() -> Self {
        let products = [
            Product {
                sku: "TSHIRT",
                name: "T-Shirt",
                price: Decimal::new(1999, 2),
            },
            Product {
                sku: "MUG",
                name: "Coffee Mug",
                price: Decimal::new(750, 2),
            },
        ];

        Catalog {
            products: products.into_iter().map(|p| (p.sku, p)).collect(),
        }
    }

    fn product(&self, sku: &str) -> Option<&Product> {
        self.products.get(sku)
    }
}

impl EntityResolver for Catalog {
    type Entity = Product;

    fn entity_type(&self) -> &str {
        "demo::Product"
    }

    fn find(&self, id: &ItemId) -> Option<Product> {
        match id {
            ItemId::Str(sku) => self.products.get(sku.as_str()).cloned(),
            ItemId::Int(_) => None,
        }
    }
}

// =============================================================================
// Main
// =============================================================================

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let provider = CartServiceProvider::register(config_path)?;
    let catalog = Catalog::demo();
    let mut session = MemorySession::new();

    info!(session_id = %session.id(), "Session opened");

    let tshirt = catalog.product("TSHIRT").ok_or("TSHIRT missing from catalog")?;
    let mug = catalog.product("MUG").ok_or("MUG missing from catalog")?;

    // -------------------------------------------------------------------------
    // Default instance
    // -------------------------------------------------------------------------
    {
        let mut cart = provider.cart(&mut session);

        let shirt = cart.add_purchasable(tshirt, Decimal::from(2), ItemOptions::new().with("size", "L"))?;
        cart.add_purchasable(tshirt, Decimal::ONE, ItemOptions::new().with("size", "L"))?;
        cart.add_purchasable(mug, Decimal::ONE, ItemOptions::new())?;

        // Same product, new size: the row moves and is repriced
        let moved = cart.update(
            shirt.row_id(),
            LineItemAttributes::new().with_options(ItemOptions::new().with("size", "XL")),
        )?;
        let moved = cart.update_from_purchasable(moved.row_id(), tshirt)?;
        cart.associate(moved.row_id(), catalog.entity_type())?;

        let records: Vec<LineItemRecord> = cart.content()?.iter().map(|item| item.to_record()).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);

        let associated = cart.get(moved.row_id())?;
        if let Some(product) = associated.model(&catalog) {
            info!(sku = product.sku, "Row resolves to catalog product");
        }

        println!(
            "items: {}  subtotal: {}  tax: {}  total: {}",
            cart.count()?,
            cart.subtotal()?,
            cart.tax()?,
            cart.total()?
        );
    }

    // -------------------------------------------------------------------------
    // Wishlist instance
    // -------------------------------------------------------------------------
    {
        let mut cart = provider.cart(&mut session);
        cart.instance("wishlist")
            .add_purchasable(mug, Decimal::from(4), ItemOptions::new().with("color", "blue"))?;

        println!("wishlist totals: {}", serde_json::to_string(&cart.totals()?)?);
        println!("instances: {:?}", cart.instances()?);
    }

    // -------------------------------------------------------------------------
    // Logout
    // -------------------------------------------------------------------------
    let destroyed = provider.handle(&AuthEvent::Logout { user_id: None }, &mut session);
    println!(
        "logout: cart destroyed = {}, session has cart = {}",
        destroyed,
        session.has(&provider.config().session_key)
    );

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shoppingcart=trace` - Show trace for the cart crates only
/// - Default: INFO, DEBUG for the cart crates
fn init_tracing() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .init();
}

const DEFAULT_LOG_FILTER: &str = "info,shoppingcart=debug";

/// Builds the log filter from `RUST_LOG` directives, falling back to
/// [`DEFAULT_LOG_FILTER`] when they are absent or do not parse.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_default_filter_stops_at_debug() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_rust_log_directives_are_honored() {
        assert_eq!(log_filter(Some("warn")).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(
            log_filter(Some("shoppingcart=trace")).max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }

    #[test]
    fn test_unparsable_directives_fall_back_to_default() {
        assert_eq!(
            log_filter(Some("shoppingcart=loud")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }
}
