use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a DKIM selector check.
///
/// DNS failures for individual selectors are not represented here: they are
/// classified as [`LookupFailure`](super::LookupFailure) and the run goes on.
#[derive(Debug, Error)]
pub enum DkimError {
    #[error("domain is empty")]
    EmptyDomain,
    #[error("domain IDNA conversion failed")]
    IdnaConversion {
        #[source]
        source: idna::Errors,
    },
    #[error("resolver initialization failed: {source}")]
    ResolverInit {
        #[source]
        source: std::io::Error,
    },
    #[error("domain {domain:?} cannot name a selector list file")]
    DomainFileName { domain: String },
    #[error("cannot read selector list {}: {source}", path.display())]
    SelectorFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DkimError {
    pub(crate) fn idna(source: idna::Errors) -> Self {
        Self::IdnaConversion { source }
    }

    pub(crate) fn resolver_init(source: std::io::Error) -> Self {
        Self::ResolverInit { source }
    }

    pub(crate) fn selector_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SelectorFile {
            path: path.into(),
            source,
        }
    }
}
