//! Small helpers shared by the configuration and logging modules.
//!
//! - [`fs`]: directory creation and file reading mapped onto [`crate::error::CoreError`].
//! - [`paths`]: XDG-based application directories resolved through `directories-next`.

pub mod fs;
pub mod paths;

pub use fs::{ensure_dir_exists, read_to_string};
