use std::io::{self, Write};

use colored::*;
use pin_common::config::Config;

/// Applies the colour setting before anything is written.
pub fn initialize(cfg: &Config) {
    if !cfg.color {
        colored::control::set_override(false);
    }
}

/// Writes each value on its own line to stdout.
pub fn values(lines: &[String]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{line}")?;
    }
    stdout.flush()
}

/// Reports a failed operation on stderr unless `--quiet` was given.
pub fn failure(err: &anyhow::Error, cfg: &Config) {
    if cfg.quiet {
        return;
    }

    eprintln!("{} {:#}", "[-]".red().bold(), err);
}
