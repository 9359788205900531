//! Configuration management.
//!
//! - [`types`]: the schema ([`CoreConfig`], [`LoggingConfig`], [`PlacementConfig`]).
//! - [`defaults`]: default values used when a field or table is missing.
//! - [`loader`]: [`ConfigLoader`], which reads, parses and validates the TOML file.
//!
//! ## Loading
//!
//! 1. [`ConfigLoader::load()`] resolves the file location: the `EXPOSE_CONFIG`
//!    environment variable, else `config.toml` in the application config directory.
//! 2. A missing file means defaults. Anything else that prevents reading is an error.
//! 3. The parsed (or default) configuration is validated before it is returned.

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{CoreConfig, LoggingConfig, PlacementConfig};
