use std::{fs, io::ErrorKind, path::Path};

use tracing::debug;

use super::{DkimCheckOptions, DkimError};

pub const DEFAULT_SELECTORS_FILE: &str = "selectors.lst";

/// Ordered, de-duplicated selectors to try for one domain.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    selectors: Vec<String>,
    strict: bool,
}

impl SelectorList {
    /// Single user-supplied selector; the run is strict.
    pub fn explicit(selector: impl Into<String>) -> Self {
        Self {
            selectors: vec![selector.into()],
            strict: true,
        }
    }

    /// Guessed selectors, de-duplicated in first-seen order.
    pub fn guessed<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self {
            selectors: Vec::new(),
            strict: false,
        };
        for selector in selectors {
            let selector = selector.into();
            if !list.selectors.contains(&selector) {
                list.selectors.push(selector);
            }
        }
        list
    }

    /// Build the list for `options`: the explicit selector if any, otherwise
    /// `<dir>/<domain>.selectors.lst` followed by `<dir>/selectors.lst`.
    pub fn resolve(options: &DkimCheckOptions) -> Result<Self, DkimError> {
        match options.selector() {
            Some(selector) => Ok(Self::explicit(selector)),
            None => Self::from_files(options.selectors_dir(), options.domain()),
        }
    }

    pub fn from_files(dir: &Path, domain: &str) -> Result<Self, DkimError> {
        if domain.chars().any(|c| c == '/' || std::path::is_separator(c)) {
            return Err(DkimError::DomainFileName {
                domain: domain.to_string(),
            });
        }
        let domain_path = dir.join(format!("{domain}.selectors.lst"));
        let default_path = dir.join(DEFAULT_SELECTORS_FILE);

        let mut lines = match read_optional(&domain_path)? {
            Some(content) => parse_selectors(&content),
            None => {
                debug!(path = %domain_path.display(), "no domain-specific selector list");
                Vec::new()
            }
        };

        let defaults = fs::read_to_string(&default_path)
            .map_err(|err| DkimError::selector_file(&default_path, err))?;
        lines.extend(parse_selectors(&defaults));

        Ok(Self::guessed(lines))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.selectors
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selectors.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

/// One selector per line; blank lines and `#` comments are skipped.
pub(crate) fn parse_selectors(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

fn read_optional(path: &Path) -> Result<Option<String>, DkimError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(DkimError::selector_file(path, err)),
    }
}
