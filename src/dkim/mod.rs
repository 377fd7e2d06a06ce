//! DKIM selector discovery.
//!
//! [`check_dkim`] resolves the selector list for a domain, queries
//! `<selector>._domainkey.<domain>` for each of them with the system resolver
//! and keeps every selector whose TXT record carries `v=DKIM1`.

mod error;
mod report;
mod resolver;
mod selectors;
mod types;

pub use error::DkimError;
pub use report::write_report;
pub use resolver::{LookupFailure, LookupTxt, TxtRecord};
pub use selectors::{DEFAULT_SELECTORS_FILE, SelectorList};
pub use types::{
    DEFAULT_SELECTORS_DIR, DKIM_MARKER, DkimCheckOptions, DkimMatch, DkimResults, DkimRun,
    ReportOptions, SelectorOutcome,
};

use resolver::{normalize_domain, selector_name, system_resolver};
use tracing::{debug, warn};

/// Run a full check for `options` against the system resolver.
pub fn check_dkim(options: &DkimCheckOptions) -> Result<DkimRun, DkimError> {
    let ascii = normalize_domain(options.domain())?;
    let selectors = SelectorList::resolve(options)?;
    let resolver = system_resolver()?;
    let results = check_with_resolver(&resolver, &ascii, &selectors);
    Ok(DkimRun {
        domain: options.domain().to_string(),
        selectors,
        results,
    })
}

/// Query every selector in order and collect the valid ones.
pub fn check_with_resolver<R>(
    resolver: &R,
    ascii_domain: &str,
    selectors: &SelectorList,
) -> DkimResults
where
    R: LookupTxt,
{
    let mut results = DkimResults::new();
    if selectors.is_empty() {
        warn!("selector list is empty, nothing to query");
    }
    for selector in selectors.iter() {
        match check_selector(resolver, ascii_domain, selector) {
            SelectorOutcome::Valid { record } => {
                debug!(selector, "DKIM record found");
                results.insert(selector, record);
            }
            SelectorOutcome::NotDkim { records } => {
                debug!(selector, count = records.len(), "TXT records without DKIM marker");
            }
            SelectorOutcome::Absent { failure } => {
                debug!(selector, %failure, "no DKIM record");
            }
            SelectorOutcome::LookupError { failure } => {
                warn!(selector, %failure, "DKIM lookup failed, treating as absent");
            }
        }
    }
    results
}

/// Issue one TXT lookup for `selector` and classify the answer.
pub fn check_selector<R>(resolver: &R, ascii_domain: &str, selector: &str) -> SelectorOutcome
where
    R: LookupTxt,
{
    let name = selector_name(selector, ascii_domain);
    let answers = match resolver.lookup_txt(&name) {
        Ok(answers) => answers,
        Err(failure @ (LookupFailure::NotFound | LookupFailure::NoAnswer)) => {
            return SelectorOutcome::Absent { failure };
        }
        Err(failure @ LookupFailure::OtherFailure(_)) => {
            return SelectorOutcome::LookupError { failure };
        }
    };

    let mut records = Vec::new();
    let mut undecodable = None;
    for answer in answers {
        match answer {
            Ok(record) if record.contains(DKIM_MARKER) => {
                return SelectorOutcome::Valid { record };
            }
            Ok(record) => records.push(record),
            Err(failure) => {
                undecodable.get_or_insert(failure);
            }
        }
    }

    match undecodable {
        Some(failure) => SelectorOutcome::LookupError { failure },
        None => SelectorOutcome::NotDkim { records },
    }
}
