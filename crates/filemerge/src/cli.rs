//! CLI argument structure using clap

use clap::Parser;
use filemerge_core::Selection;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "filemerge")]
#[command(version, about = "Generate documents from a Jinja template and CSV data", long_about = None)]
pub struct Cli {
    /// Path to the template file
    pub template: PathBuf,

    /// Path to the CSV file
    pub csvfile: PathBuf,

    /// Output directory (output file in --chunk mode)
    pub output_dir: PathBuf,

    /// Override CSV headers, comma separated, e.g. Name,Address,Phone
    #[arg(long, value_name = "LIST")]
    pub headers: Option<String>,

    /// Select rows and ranges, 1-based, e.g. 1,3-5,7
    #[arg(long, value_name = "EXPR")]
    pub select: Option<Selection>,

    /// Treat the first CSV row as data, not as headers
    #[arg(short, long)]
    pub no_headers: bool,

    /// Template for output file names, e.g. "letter-{{ Name }}.txt"
    #[arg(short = 't', long, value_name = "TEMPLATE")]
    pub file_template: Option<String>,

    /// Field delimiter; \t, \n and \r are accepted [default: ,]
    #[arg(short, long, value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Render all selected rows into a single file at OUTPUT_DIR
    #[arg(short, long)]
    pub chunk: bool,

    /// Name of the row list in --chunk mode [default: rows]
    #[arg(long, value_name = "NAME")]
    pub chunk_name: Option<String>,

    /// Extension for default and extension-less file names [default: txt]
    #[arg(short, long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Defaults file [default: ./filemerge.toml if present]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
