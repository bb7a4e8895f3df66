//! Merge command - resolve options and render

use crate::cli::Cli;
use crate::output;
use anyhow::{Context, Result};
use filemerge_core::reader::{parse_delimiter, parse_headers};
use filemerge_core::{Config, MergeOptions};
use log::debug;
use std::env;

/// Resolve options from config file and flags, then render
///
/// Flags win over config values. Boolean flags can only switch a mode on.
pub fn run(cli: Cli) -> Result<()> {
    let options = resolve_options(&cli)?;

    if options.chunk {
        debug!("Chunk mode: writing {}", cli.output_dir.display());
    } else {
        debug!("Writing into {}", cli.output_dir.display());
    }

    let written = filemerge_core::render(&cli.template, &cli.csvfile, &cli.output_dir, &options)?;

    output::print_summary(&written)?;
    Ok(())
}

fn resolve_options(cli: &Cli) -> Result<MergeOptions> {
    let current_dir = env::current_dir().context("Failed to determine current directory")?;
    let config = Config::discover(cli.config.as_deref(), &current_dir)?;
    let mut options = MergeOptions::from_defaults(&config.merge)?;

    if let Some(headers) = &cli.headers {
        options.override_headers = Some(parse_headers(headers));
    }
    if let Some(selection) = &cli.select {
        options.select_rows = selection.clone();
    }
    if let Some(delimiter) = &cli.delimiter {
        options.delimiter = parse_delimiter(delimiter)?;
    }
    if let Some(template) = &cli.file_template {
        options.filename_template = Some(template.clone());
    }
    if let Some(name) = &cli.chunk_name {
        options.chunk_name = name.clone();
    }
    if let Some(ext) = &cli.extension {
        options.default_extension = ext.trim_start_matches('.').to_string();
    }
    options.no_headers |= cli.no_headers;
    options.chunk |= cli.chunk;

    Ok(options)
}
