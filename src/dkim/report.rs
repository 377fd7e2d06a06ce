use std::io::{self, Write};

use super::{DkimRun, ReportOptions};

const BANNER_LEAD: usize = 5;
const BANNER_TAIL: usize = 50;
const BANNER_CLOSE: usize = 61;

/// Print the human-readable summary of `run`.
///
/// On success only the first matching selector is named; the raw records of
/// every match follow in a debug block when `show_record_values` is set.
pub fn write_report<W: Write>(
    out: &mut W,
    run: &DkimRun,
    options: &ReportOptions,
) -> io::Result<()> {
    let Some(first) = run.results.first() else {
        writeln!(out, "❌ No DKIM record found for {}", run.domain)?;
        if run.is_strict() {
            let tested: Vec<&str> = run.selectors.iter().collect();
            writeln!(out, "\nTested Selectors: {}", tested.join(", "))?;
        }
        return Ok(());
    };

    writeln!(
        out,
        "✅ DKIM found for {} with DKIM selector \"{}\"",
        run.domain, first.selector
    )?;

    if options.show_record_values {
        writeln!(out, "\n")?;
        writeln!(
            out,
            "{} DEBUG {}",
            "=".repeat(BANNER_LEAD),
            "=".repeat(BANNER_TAIL)
        )?;
        for entry in run.results.iter() {
            writeln!(out, "\nValue:")?;
            writeln!(out, "{}", entry.record)?;
        }
        writeln!(out, "\n")?;
        writeln!(out, "{}", "=".repeat(BANNER_CLOSE))?;
    }

    Ok(())
}
