//! Template engine binding

use crate::record::Record;
use crate::template::error::TemplateError;
use minijinja::{Environment, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// Data bound to one render call
#[derive(Debug, Clone)]
pub struct TemplateContext {
    data: Value,
}

impl TemplateContext {
    /// Expose every header of `record` as a top-level variable
    pub fn from_record(record: &Record) -> Self {
        Self {
            data: Value::from_serialize(record),
        }
    }

    /// Expose `records` as a single list named `name`
    pub fn from_records(name: &str, records: &[&Record]) -> Self {
        let mut table = BTreeMap::new();
        table.insert(name, records);
        Self {
            data: Value::from_serialize(&table),
        }
    }

    /// Get the underlying engine value
    pub fn data(&self) -> &Value {
        &self.data
    }
}

/// Holds compiled templates by name
///
/// Templates keep their trailing newline and undefined variables render
/// as empty strings.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create an engine with no templates loaded
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        Self { env }
    }

    /// Create an engine that resolves `include`, `extends` and `import`
    /// against files in `dir`
    pub fn with_search_path(dir: &Path) -> Self {
        let mut engine = Self::new();
        engine.env.set_loader(minijinja::path_loader(dir));
        engine
    }

    /// Compile `source` and register it under `name`
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Syntax`] if the source does not compile.
    pub fn load(&mut self, name: &str, source: impl Into<String>) -> Result<(), TemplateError> {
        self.env
            .add_template_owned(name.to_string(), source.into())
            .map_err(|e| TemplateError::syntax(name, &e))
    }

    /// Whether a template named `name` has been loaded
    pub fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    /// Render the template registered under `name`
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Render`] if evaluation fails or no template
    /// was loaded under `name`.
    pub fn render(&self, name: &str, context: &TemplateContext) -> Result<String, TemplateError> {
        let template = self
            .env
            .get_template(name)
            .map_err(|e| TemplateError::render(name, &e))?;
        template
            .render(context.data())
            .map_err(|e| TemplateError::render(name, &e))
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}
