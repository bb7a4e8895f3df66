use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilemergeError {
    // Input errors
    #[error("EMPTY_INPUT: '{}' contains no rows", .path.display())]
    EmptyInput { path: PathBuf },

    #[error("ENCODING_ERROR: '{}' is not valid UTF-8: {reason}", .path.display())]
    Encoding { path: PathBuf, reason: String },

    #[error("CSV_PARSE_ERROR: '{}': {reason}", .path.display())]
    CsvParse { path: PathBuf, reason: String },

    #[error("INVALID_DELIMITER: '{0}' must be a single ASCII character or one of \\t, \\n, \\r")]
    InvalidDelimiter(String),

    // Selection errors
    #[error("INVALID_INDEX: '{0}' is not a row number")]
    InvalidIndex(String),

    #[error("INVALID_RANGE: '{0}' is not a valid range")]
    InvalidRange(String),

    // Template errors
    #[error("TEMPLATE_SYNTAX: {0}")]
    TemplateSyntax(String),

    #[error("TEMPLATE_RENDER: {0}")]
    TemplateRender(String),

    // Config errors
    #[error("CONFIG_INVALID: failed to parse '{}': {reason}", .path.display())]
    ConfigInvalid { path: PathBuf, reason: String },

    // IO errors
    #[error("IO_ERROR: '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FilemergeError {
    /// Wrap an IO error with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FilemergeError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<crate::template::TemplateError> for FilemergeError {
    fn from(err: crate::template::TemplateError) -> Self {
        use crate::template::TemplateError;
        match err {
            TemplateError::Syntax { .. } => FilemergeError::TemplateSyntax(err.to_string()),
            TemplateError::Render { .. } => FilemergeError::TemplateRender(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, FilemergeError>;
