use anyhow::Result;
use clap::Parser;
use std::io::{IsTerminal, Write};

use tsym_cli::args::CliArgs;
use tsym_cli::{driver, tracing_config};

fn main() -> Result<()> {
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    let stdout = std::io::stdout();
    let output = driver::run(&args, stdout.is_terminal())?;

    let mut out = stdout.lock();
    if !output.is_empty() {
        writeln!(out, "{output}")?;
    }
    Ok(())
}
