use super::consts::{DEFAULT_CHUNK_NAME, DEFAULT_DELIMITER, DEFAULT_EXTENSION};
use super::model::MergeDefaults;
use crate::error::Result;
use crate::reader::{parse_delimiter, ReadOptions};
use crate::select::Selection;

/// Fully resolved options for one render run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    pub override_headers: Option<Vec<String>>,
    pub select_rows: Selection,
    pub no_headers: bool,
    pub delimiter: char,
    /// Template for per-record output file names
    pub filename_template: Option<String>,
    /// Render all selected records into one file
    pub chunk: bool,
    /// Name of the record list in chunk mode
    pub chunk_name: String,
    /// Extension without the leading dot
    pub default_extension: String,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            override_headers: None,
            select_rows: Selection::All,
            no_headers: false,
            delimiter: DEFAULT_DELIMITER,
            filename_template: None,
            chunk: false,
            chunk_name: DEFAULT_CHUNK_NAME.to_string(),
            default_extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl MergeOptions {
    /// Start from config file defaults
    ///
    /// # Errors
    ///
    /// Returns `InvalidDelimiter` if the configured delimiter is unusable.
    pub fn from_defaults(defaults: &MergeDefaults) -> Result<Self> {
        let mut options = Self::default();

        if let Some(delimiter) = &defaults.delimiter {
            options.delimiter = parse_delimiter(delimiter)?;
        }
        if let Some(no_headers) = defaults.no_headers {
            options.no_headers = no_headers;
        }
        if let Some(template) = &defaults.file_template {
            options.filename_template = Some(template.clone());
        }
        if let Some(chunk) = defaults.chunk {
            options.chunk = chunk;
        }
        if let Some(name) = &defaults.chunk_name {
            options.chunk_name = name.clone();
        }
        if let Some(ext) = &defaults.extension {
            options.default_extension = ext.trim_start_matches('.').to_string();
        }

        Ok(options)
    }

    /// Reader options derived from these merge options
    pub fn read_options(&self) -> ReadOptions {
        ReadOptions {
            override_headers: self.override_headers.clone(),
            no_headers: self.no_headers,
            delimiter: self.delimiter,
        }
    }

    /// Default name for the `counter`-th output file, `output_{counter}.{ext}`
    pub fn default_filename(&self, counter: usize) -> String {
        format!(
            "{}_{}.{}",
            super::consts::DEFAULT_OUTPUT_PREFIX,
            counter,
            self.default_extension
        )
    }
}
