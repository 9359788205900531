//! # Expose Core Library (`expose-core`)
//!
//! Foundation crate for the window overview ("expose") placement. It provides:
//!
//! - **Geometry**: the integer [`Rectangle`], [`PointInt`] and [`Padding`] types the
//!   placement algorithm works in.
//! - **Error Handling**: [`CoreError`] and the more specific [`ConfigError`] and
//!   [`LoggingError`].
//! - **Configuration**: TOML configuration with defaults and validation through
//!   [`ConfigLoader`].
//! - **Logging**: `tracing` subscriber setup driven by [`LoggingConfig`].
//!
//! ```rust,ignore
//! use expose_core::config::ConfigLoader;
//! use expose_core::logging::init_logging;
//! use expose_core::error::CoreError;
//!
//! fn main() -> Result<(), CoreError> {
//!     let config = ConfigLoader::load()?;
//!     init_logging(&config.logging, false)?;
//!     tracing::info!("expose core initialized");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

pub use config::{ConfigLoader, CoreConfig, LoggingConfig, PlacementConfig};
pub use error::{ConfigError, CoreError, LoggingError};
pub use logging::{init_logging, init_minimal_logging};
pub use types::{Padding, PointInt, Rectangle};
