#[path = "test_dns/args.rs"]
mod args;
#[path = "test_dns/output.rs"]
mod output;

use anyhow::{Context, Result};
use dnscheck_lib::check_dkim;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use args::{Cli, Mode};

fn init_tracing() {
    // stdout is reserved for the report
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse_or_usage();
    init_tracing();
    output::ensure_supported(cli.format);

    match cli.mode {
        Mode::Dkim => {
            let options = cli.check_options();
            let run = check_dkim(&options)
                .with_context(|| format!("DKIM check failed for {}", cli.domain))?;
            debug!(
                domain = %run.domain,
                tried = run.selectors.len(),
                found = run.results.len(),
                strict = run.is_strict(),
                "DKIM check finished"
            );
            output::emit(&run, &cli)
        }
    }
}
