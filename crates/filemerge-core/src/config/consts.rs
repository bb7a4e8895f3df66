//! Default values shared by the config file and the CLI

/// Config file looked up in the current directory
pub const CONFIG_FILE_NAME: &str = "filemerge.toml";

/// Field delimiter when none is configured
pub const DEFAULT_DELIMITER: char = ',';

/// Extension for default names and extension-less rendered names
pub const DEFAULT_EXTENSION: &str = "txt";

/// Variable holding all records in chunk mode
pub const DEFAULT_CHUNK_NAME: &str = "rows";

/// Prefix of default output names, `output_1.txt`, `output_2.txt`, ...
pub const DEFAULT_OUTPUT_PREFIX: &str = "output";
