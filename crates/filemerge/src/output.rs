use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;

pub fn print_text(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}

/// Summary line after a successful run
pub fn print_summary(written: &[PathBuf]) -> io::Result<()> {
    if written.is_empty() {
        print_text(&format!("{} No records selected", "!".yellow()))
    } else {
        print_text(&format!(
            "{} Generated {} file(s)",
            "✓".green().bold(),
            written.len()
        ))
    }
}
