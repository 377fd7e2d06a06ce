use std::path::{Path, PathBuf};

use super::{LookupFailure, SelectorList};

pub const DEFAULT_SELECTORS_DIR: &str = "./dkim";

/// Substring a TXT record must contain to count as a DKIM key record.
pub const DKIM_MARKER: &str = "v=DKIM1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DkimCheckOptions {
    domain: String,
    selector: Option<String>,
    selectors_dir: PathBuf,
}

impl DkimCheckOptions {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            selector: None,
            selectors_dir: PathBuf::from(DEFAULT_SELECTORS_DIR),
        }
    }

    /// Query only `selector` instead of the selector list files.
    ///
    /// The selector is used as given; only an empty string leaves the
    /// options in guessing mode.
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        let selector = selector.into();
        self.selector = if selector.is_empty() {
            None
        } else {
            Some(selector)
        };
        self
    }

    pub fn with_selectors_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.selectors_dir = dir.into();
        self
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn selector(&self) -> Option<&str> {
        self.selector.as_deref()
    }

    pub fn selectors_dir(&self) -> &Path {
        &self.selectors_dir
    }

    pub fn is_strict(&self) -> bool {
        self.selector.is_some()
    }
}

/// Classification of a single `<selector>._domainkey.<domain>` lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorOutcome {
    Valid { record: String },
    /// TXT records exist but none carries [`DKIM_MARKER`].
    NotDkim { records: Vec<String> },
    /// NXDOMAIN or no TXT answer.
    Absent { failure: LookupFailure },
    LookupError { failure: LookupFailure },
}

impl SelectorOutcome {
    pub fn record(&self) -> Option<&str> {
        match self {
            Self::Valid { record } => Some(record.as_str()),
            _ => None,
        }
    }
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DkimMatch {
    pub selector: String,
    pub record: String,
}

/// Selectors whose record carried the DKIM marker, in the order they were tried.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[cfg_attr(feature = "with-serde", serde(transparent))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DkimResults {
    entries: Vec<DkimMatch>,
}

impl DkimResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, selector: impl Into<String>, record: impl Into<String>) {
        let selector = selector.into();
        if self.get(&selector).is_some() {
            return;
        }
        self.entries.push(DkimMatch {
            selector,
            record: record.into(),
        });
    }

    pub fn get(&self, selector: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.selector == selector)
            .map(|entry| entry.record.as_str())
    }

    pub fn first(&self) -> Option<&DkimMatch> {
        self.entries.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DkimMatch> {
        self.entries.iter()
    }

    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.selector.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outcome of one `check_dkim` run, handed to the reporter.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DkimRun {
    pub domain: String,
    pub selectors: SelectorList,
    pub results: DkimResults,
}

impl DkimRun {
    pub fn is_strict(&self) -> bool {
        self.selectors.is_strict()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub show_record_values: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            show_record_values: true,
        }
    }
}
