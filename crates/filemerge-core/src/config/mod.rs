//! Configuration: the optional `filemerge.toml` defaults file and the
//! resolved options handed to the renderer

pub mod consts;
pub mod model;
pub mod options;

pub use model::{Config, MergeDefaults};
pub use options::MergeOptions;
