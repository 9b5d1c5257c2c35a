//! # Cart Configuration
//!
//! Configuration for the session-backed cart.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CART_TAX=21                                                        │
//! │     CART_DESTROY_ON_LOGOUT=true                                        │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/shoppingcart/cart.toml (Linux)                           │
//! │     ~/Library/Application Support/com.shoppingcart.shoppingcart/...    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     tax 0, 2 decimals, ".", no thousands separator, keep on logout     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # cart.toml
//! tax = 21
//! destroy_on_logout = true
//! session_key = "cart"
//!
//! [format]
//! decimals = 2
//! decimal_point = ","
//! thousands_separator = "."
//! ```

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shoppingcart_core::money::MAX_DECIMALS;
use shoppingcart_core::validation::validate_tax_rate;
use shoppingcart_core::{NumberFormat, TaxRate};
use tracing::{debug, info, warn};

use crate::error::{CartError, CartResult};

/// Environment variable names, in the order they are applied.
pub const ENV_TAX: &str = "CART_TAX";
pub const ENV_FORMAT_DECIMALS: &str = "CART_FORMAT_DECIMALS";
pub const ENV_FORMAT_DECIMAL_POINT: &str = "CART_FORMAT_DECIMAL_POINT";
pub const ENV_FORMAT_THOUSANDS_SEPARATOR: &str = "CART_FORMAT_THOUSANDS_SEPARATOR";
pub const ENV_DESTROY_ON_LOGOUT: &str = "CART_DESTROY_ON_LOGOUT";
pub const ENV_SESSION_KEY: &str = "CART_SESSION_KEY";

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "cart.toml";

// =============================================================================
// Cart Configuration
// =============================================================================

/// Complete cart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Tax rate (percent) applied to items added by id/name/price.
    #[serde(default)]
    pub tax: TaxRate,

    /// Forget the whole cart when the user logs out.
    #[serde(default)]
    pub destroy_on_logout: bool,

    /// Session key all cart instances are stored under.
    #[serde(default = "default_session_key")]
    pub session_key: String,

    /// Display format for monetary values.
    // Must stay the last field: TOML tables follow plain keys.
    #[serde(default)]
    pub format: NumberFormat,
}

fn default_session_key() -> String {
    "cart".to_string()
}

impl Default for CartConfig {
    fn default() -> Self {
        CartConfig {
            tax: TaxRate::zero(),
            destroy_on_logout: false,
            session_key: default_session_key(),
            format: NumberFormat::default(),
        }
    }
}

impl CartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`cart.toml`)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> CartResult<Self> {
        Self::load_with_env(config_path, |name| std::env::var(name).ok())
    }

    /// Same as [`CartConfig::load`] with an explicit environment lookup.
    pub fn load_with_env<F>(config_path: Option<PathBuf>, env: F) -> CartResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading cart config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides(env);
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load cart config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a config file without applying environment overrides.
    pub fn from_file(path: &Path) -> CartResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> CartResult<PathBuf> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| CartError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Cart config saved");
        Ok(path)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CartResult<()> {
        if self.format.decimals > MAX_DECIMALS {
            return Err(CartError::InvalidConfig(format!(
                "format.decimals must be at most {}, got {}",
                MAX_DECIMALS, self.format.decimals
            )));
        }

        if self.format.decimal_point.is_empty() {
            return Err(CartError::InvalidConfig(
                "format.decimal_point must not be empty".into(),
            ));
        }

        if self.session_key.is_empty() {
            return Err(CartError::InvalidConfig(
                "session_key must not be empty".into(),
            ));
        }

        validate_tax_rate(self.tax)
            .map_err(|e| CartError::InvalidConfig(format!("{e}, got {}", self.tax)))?;

        Ok(())
    }

    /// Applies environment variable overrides.
    ///
    /// Values that do not parse are logged and skipped.
    fn apply_env_overrides<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(tax) = env(ENV_TAX) {
            match tax.trim().parse::<Decimal>() {
                Ok(rate) => {
                    debug!(tax = %rate, "Overriding tax rate from environment");
                    self.tax = TaxRate::from(rate);
                }
                Err(_) => warn!(value = %tax, "Invalid {} in environment", ENV_TAX),
            }
        }

        if let Some(decimals) = env(ENV_FORMAT_DECIMALS) {
            match decimals.trim().parse::<u32>() {
                Ok(d) => self.format.decimals = d,
                Err(_) => warn!(value = %decimals, "Invalid {} in environment", ENV_FORMAT_DECIMALS),
            }
        }

        if let Some(point) = env(ENV_FORMAT_DECIMAL_POINT) {
            self.format.decimal_point = point.into();
        }

        if let Some(separator) = env(ENV_FORMAT_THOUSANDS_SEPARATOR) {
            self.format.thousands_separator = separator.into();
        }

        if let Some(flag) = env(ENV_DESTROY_ON_LOGOUT) {
            match parse_bool(&flag) {
                Some(on) => {
                    debug!(destroy_on_logout = on, "Overriding destroy_on_logout from environment");
                    self.destroy_on_logout = on;
                }
                None => warn!(value = %flag, "Invalid {} in environment", ENV_DESTROY_ON_LOGOUT),
            }
        }

        if let Some(key) = env(ENV_SESSION_KEY) {
            self.session_key = key;
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "shoppingcart", "shoppingcart")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
