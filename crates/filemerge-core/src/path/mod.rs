//! Output path utilities
//!
//! - [`sanitize_filename`]: turn rendered text into a safe file name
//! - [`resolve_collision`]: pick a path that does not exist yet

mod collision;
mod sanitize;

pub use collision::resolve_collision;
pub use sanitize::{sanitize_filename, try_sanitize_filename, FALLBACK_NAME};
