//! Template module - thin binding over the `minijinja` engine
//!
//! Templates use Jinja syntax. The engine itself is external; this module
//! only decides how records are exposed to it and how its failures are
//! classified.
//!
//! ## Contexts
//!
//! - Per-record: every header is a top-level variable, `{{ Name }}`
//! - Chunk: the selected records are one list, `{% for row in rows %}{{ row.Name }}{% endfor %}`
//!
//! ## Errors
//!
//! - Compiling a template yields [`TemplateError::Syntax`]
//! - Evaluating it against a context yields [`TemplateError::Render`]

pub mod engine;
pub mod error;

pub use engine::{TemplateContext, TemplateEngine};
pub use error::TemplateError;
