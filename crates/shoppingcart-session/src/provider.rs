//! # Cart Service Provider
//!
//! Owns the effective [`CartConfig`], hands out [`CartStore`]s bound to it,
//! and reacts to authentication events.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Provider Lifecycle                                 │
//! │                                                                         │
//! │  App start                                                              │
//! │    └── CartServiceProvider::register(path) ── CartConfig::load()        │
//! │                                                                         │
//! │  Each request                                                           │
//! │    └── provider.cart(&mut session) ─────────► CartStore                 │
//! │                                                                         │
//! │  Auth events                                                            │
//! │    ├── Login  ─────────────────────────────► (nothing)                  │
//! │    └── Logout ── destroy_on_logout? ──yes──► session.forget(key)        │
//! │                                     └──no──► cart survives              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::CartConfig;
use crate::error::{CartError, CartResult};
use crate::session::SessionStore;
use crate::store::CartStore;

/// Authentication events the cart listens to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AuthEvent {
    Login {
        user_id: String,
    },
    Logout {
        #[serde(default)]
        user_id: Option<String>,
    },
}

/// Wires the cart into configuration and the session lifecycle.
#[derive(Debug, Clone, Default)]
pub struct CartServiceProvider {
    config: CartConfig,
}

impl CartServiceProvider {
    /// Wraps an explicit configuration.
    pub fn new(config: CartConfig) -> Self {
        CartServiceProvider { config }
    }

    /// Loads the configuration (file, then environment) and builds the provider.
    pub fn register(config_path: Option<PathBuf>) -> CartResult<Self> {
        let config = CartConfig::load(config_path)?;
        info!(
            tax = %config.tax,
            destroy_on_logout = config.destroy_on_logout,
            session_key = %config.session_key,
            "Cart service registered"
        );
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    /// Returns a cart bound to `session`, on the default instance.
    pub fn cart<'a, S>(&'a self, session: &'a mut S) -> CartStore<'a, S>
    where
        S: SessionStore + ?Sized,
    {
        CartStore::new(session, &self.config)
    }

    /// Handles an auth event. Returns true if the cart was destroyed.
    pub fn handle<S>(&self, event: &AuthEvent, session: &mut S) -> bool
    where
        S: SessionStore + ?Sized,
    {
        match event {
            AuthEvent::Login { user_id } => {
                debug!(user_id = %user_id, "Login: cart kept");
                false
            }
            AuthEvent::Logout { user_id } => {
                if !self.config.destroy_on_logout {
                    debug!(user_id = ?user_id, "Logout: cart kept");
                    return false;
                }

                let existed = session.forget(&self.config.session_key).is_some();
                info!(user_id = ?user_id, existed, "Logout: cart destroyed");
                true
            }
        }
    }

    /// Writes the effective configuration to `path` unless a file already
    /// exists there. Returns the path if it was written.
    pub fn publish_config(&self, path: Option<PathBuf>) -> CartResult<Option<PathBuf>> {
        let target = path
            .or_else(CartConfig::default_config_path)
            .ok_or_else(|| CartError::ConfigSaveFailed("No config path available".into()))?;

        if target.exists() {
            debug!(path = ?target, "Config already published");
            return Ok(None);
        }

        self.config.save(Some(target)).map(Some)
    }
}
