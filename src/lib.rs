#![forbid(unsafe_code)]
//! dnscheck_lib — DNS checks for mail domains (DKIM selector discovery)

pub mod dkim;
pub use dkim::{
    DkimCheckOptions, DkimError, DkimMatch, DkimResults, DkimRun, LookupFailure, LookupTxt,
    ReportOptions, SelectorList, SelectorOutcome, TxtRecord, check_dkim, check_selector,
    check_with_resolver, write_report,
};
