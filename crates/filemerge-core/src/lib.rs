// Core modules
pub mod config;
pub mod error;
pub mod path;
pub mod reader;
pub mod record;
pub mod render;
pub mod select;
pub mod template;

// Re-export commonly used types
pub use config::{Config, MergeOptions};
pub use error::{FilemergeError, Result};
pub use record::{Record, RecordSet};
pub use render::render;
pub use select::Selection;
