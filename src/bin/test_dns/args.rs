use std::path::PathBuf;

use clap::{Parser, ValueEnum, error::ErrorKind};
use dnscheck_lib::{DkimCheckOptions, ReportOptions, dkim::DEFAULT_SELECTORS_DIR};

pub const USAGE: &str = "Usage:\n  test_dns dkim <domain> [selector]";

#[derive(Parser)]
#[command(name = "test_dns", version, about = "Find the DKIM selectors published for a domain")]
pub struct Cli {
    /// check to run (only `dkim` is supported)
    #[arg(value_enum)]
    pub mode: Mode,

    /// domain to check
    pub domain: String,

    /// DKIM selector to test instead of the selector lists
    pub selector: Option<String>,

    /// directory holding selectors.lst and <domain>.selectors.lst
    #[arg(long, default_value = DEFAULT_SELECTORS_DIR)]
    pub selectors_dir: PathBuf,

    /// do not print the raw value of matched records
    #[arg(long)]
    pub no_record_values: bool,

    /// format: human|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Dkim,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

impl Cli {
    /// Parse the command line; any usage error prints [`USAGE`] and exits 1.
    pub fn parse_or_usage() -> Self {
        match <Self as Parser>::try_parse() {
            Ok(cli) => cli,
            Err(err) => match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
                _ => usage(),
            },
        }
    }

    pub fn check_options(&self) -> DkimCheckOptions {
        let options = DkimCheckOptions::new(self.domain.as_str())
            .with_selectors_dir(self.selectors_dir.clone());
        match self.selector.as_deref() {
            Some(selector) => options.with_selector(selector),
            None => options,
        }
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            show_record_values: !self.no_record_values,
        }
    }
}

pub fn usage() -> ! {
    println!("{USAGE}");
    std::process::exit(1);
}
