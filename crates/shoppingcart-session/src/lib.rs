//! # shoppingcart-session: Session-Backed Cart
//!
//! Stores [`shoppingcart_core::CartContent`] in a visitor session, loads the
//! cart configuration, and clears the cart on logout.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Request Flow                                     │
//! │                                                                         │
//! │  ┌──────────────────┐   cart(&mut session)   ┌─────────────────────┐   │
//! │  │CartServiceProvider│ ────────────────────► │ CartStore           │   │
//! │  │  CartConfig      │                        │  instance "default" │   │
//! │  └────────┬─────────┘                        └──────────┬──────────┘   │
//! │           │ handle(Logout)                              │ load/save    │
//! │           ▼                                             ▼              │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    SessionStore (host session)                   │  │
//! │  │                    "cart" ─► { instance ─► { rowId ─► row } }     │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - `CartConfig`: defaults, `cart.toml`, `CART_*` env vars
//! - [`session`] - `SessionStore` trait and `MemorySession`
//! - [`store`] - `CartStore`, one cart instance inside a session
//! - [`provider`] - `CartServiceProvider` and `AuthEvent`
//! - [`error`] - `CartError`
//!
//! ## Example Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use shoppingcart_core::ItemOptions;
//! use shoppingcart_session::{AuthEvent, CartConfig, CartServiceProvider, MemorySession, SessionStore};
//!
//! let provider = CartServiceProvider::new(CartConfig {
//!     destroy_on_logout: true,
//!     ..CartConfig::default()
//! });
//! let mut session = MemorySession::new();
//!
//! provider
//!     .cart(&mut session)
//!     .add("SKU-1", "Mug", Decimal::ONE, Decimal::new(750, 2), ItemOptions::new())?;
//! assert!(session.has("cart"));
//!
//! provider.handle(&AuthEvent::Logout { user_id: None }, &mut session);
//! assert!(!session.has("cart"));
//! # Ok::<(), shoppingcart_session::CartError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod provider;
pub mod session;
pub mod store;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::CartConfig;
pub use error::{CartError, CartResult};
pub use provider::{AuthEvent, CartServiceProvider};
pub use session::{MemorySession, SessionStore};
pub use store::{CartStore, StoredLineItem};
