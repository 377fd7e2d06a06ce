use std::io::{self, Write};

use anyhow::{Context, Result};
use dnscheck_lib::{DkimRun, write_report};

use crate::args::{Cli, OutputFormat};

/// Fails early when the requested format was not compiled in.
pub fn ensure_supported(format: OutputFormat) {
    if format == OutputFormat::Json && !cfg!(feature = "with-serde") {
        eprintln!("format=json requires the 'with-serde' feature");
        std::process::exit(1);
    }
}

pub fn emit(run: &DkimRun, cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Human => {
            write_report(&mut out, run, &cli.report_options()).context("write report")?;
        }
        OutputFormat::Json => write_json(&mut out, run)?,
    }
    out.flush().context("flush stdout")?;
    Ok(())
}

#[cfg(feature = "with-serde")]
fn write_json<W: Write>(out: &mut W, run: &DkimRun) -> Result<()> {
    let json = serde_json::to_string_pretty(run).context("serialize run")?;
    writeln!(out, "{json}").context("write report")?;
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_json<W: Write>(_out: &mut W, _run: &DkimRun) -> Result<()> {
    anyhow::bail!("format=json requires the 'with-serde' feature")
}
