//! # Cart Session Error Types
//!
//! Error types for session-backed cart operations.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Error Categories                             │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │     Domain      │  │     Session     │  │     Configuration       │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Core(...)      │  │  CorruptSession │  │  InvalidConfig          │ │
//! │  │   InvalidInput  │  │                 │  │  ConfigLoadFailed       │ │
//! │  │   RowNotFound   │  │                 │  │  ConfigSaveFailed       │ │
//! │  │                 │  │                 │  │  Io / TomlDe / TomlSer  │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use shoppingcart_core::CoreError;
use thiserror::Error;

/// Result type alias for cart session operations.
pub type CartResult<T> = Result<T, CartError>;

/// Errors raised by the session-backed cart, its config and its provider.
#[derive(Debug, Error)]
pub enum CartError {
    // =========================================================================
    // Domain Errors
    // =========================================================================
    /// A line item or cart content operation failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    // =========================================================================
    // Session Errors
    // =========================================================================
    /// The value stored under the cart session key is not a valid cart.
    #[error("Corrupt cart session data: {0}")]
    CorruptSession(String),

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid cart configuration.
    #[error("Invalid cart configuration: {0}")]
    InvalidConfig(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for `CartConfig`.
    #[error("Failed to parse config: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Failed to write config: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl CartError {
    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CartError::InvalidConfig(_)
                | CartError::ConfigLoadFailed(_)
                | CartError::ConfigSaveFailed(_)
                | CartError::TomlDe(_)
                | CartError::TomlSer(_)
        )
    }

    /// Returns true if the caller referenced a row the cart does not have.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CartError::Core(CoreError::RowNotFound(_)))
    }
}
