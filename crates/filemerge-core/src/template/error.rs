//! Template error types

use std::fmt;

/// Template compile and render errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Template source failed to compile
    Syntax {
        /// Name the template was registered under
        name: String,
        /// Engine message, including location when known
        message: String,
    },

    /// Template compiled but failed while binding a context
    Render {
        /// Name the template was registered under
        name: String,
        /// Engine message, including location when known
        message: String,
    },
}

impl TemplateError {
    pub(crate) fn syntax(name: &str, err: &minijinja::Error) -> Self {
        TemplateError::Syntax {
            name: name.to_string(),
            message: describe(err),
        }
    }

    pub(crate) fn render(name: &str, err: &minijinja::Error) -> Self {
        TemplateError::Render {
            name: name.to_string(),
            message: describe(err),
        }
    }
}

fn describe(err: &minijinja::Error) -> String {
    match (err.detail(), err.line()) {
        (Some(detail), Some(line)) => format!("{} at line {}: {}", err.kind(), line, detail),
        (Some(detail), None) => format!("{}: {}", err.kind(), detail),
        (None, Some(line)) => format!("{} at line {}", err.kind(), line),
        (None, None) => err.kind().to_string(),
    }
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::Syntax { name, message } => {
                write!(f, "Template '{}' failed to compile: {}", name, message)
            }
            TemplateError::Render { name, message } => {
                write!(f, "Template '{}' failed to render: {}", name, message)
            }
        }
    }
}

impl std::error::Error for TemplateError {}
