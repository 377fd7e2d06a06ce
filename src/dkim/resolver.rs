use thiserror::Error;
use trust_dns_resolver::{
    Resolver,
    error::{ResolveError, ResolveErrorKind},
    lookup::TxtLookup,
    proto::{op::ResponseCode, rr::rdata::TXT},
};

use super::DkimError;

/// Why a TXT lookup returned no usable records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupFailure {
    /// NXDOMAIN: the queried name does not exist.
    #[error("domain does not exist")]
    NotFound,
    /// The name exists but carries no TXT answer.
    #[error("no TXT answer")]
    NoAnswer,
    #[error("lookup failed: {0}")]
    OtherFailure(String),
}

/// One TXT record with its character-strings concatenated, or the reason it
/// could not be decoded.
pub type TxtRecord = Result<String, LookupFailure>;

/// Source of TXT records. A record that fails to decode does not hide its
/// siblings.
pub trait LookupTxt {
    fn lookup_txt(&self, name: &str) -> Result<Vec<TxtRecord>, LookupFailure>;
}

impl LookupTxt for Resolver {
    fn lookup_txt(&self, name: &str) -> Result<Vec<TxtRecord>, LookupFailure> {
        let lookup = Resolver::txt_lookup(self, name).map_err(|err| classify(&err))?;
        Ok(collect_txt_records(&lookup))
    }
}

pub(crate) fn system_resolver() -> Result<Resolver, DkimError> {
    Resolver::from_system_conf().map_err(DkimError::resolver_init)
}

pub(crate) fn normalize_domain(domain: &str) -> Result<String, DkimError> {
    let trimmed = domain.trim().trim_end_matches('.');
    if trimmed.is_empty() {
        return Err(DkimError::EmptyDomain);
    }
    idna::domain_to_ascii(trimmed).map_err(DkimError::idna)
}

pub(crate) fn selector_name(selector: &str, ascii_domain: &str) -> String {
    format!("{selector}._domainkey.{ascii_domain}")
}

fn collect_txt_records(lookup: &TxtLookup) -> Vec<TxtRecord> {
    lookup.iter().map(decode_txt).collect()
}

pub(crate) fn decode_txt(txt: &TXT) -> TxtRecord {
    let mut record = String::new();
    for piece in txt.txt_data().iter() {
        let segment = std::str::from_utf8(piece.as_ref()).map_err(|err| {
            LookupFailure::OtherFailure(format!("TXT data is not valid UTF-8: {err}"))
        })?;
        record.push_str(segment);
    }
    Ok(record)
}

pub(crate) fn classify(err: &ResolveError) -> LookupFailure {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. }
            if *response_code == ResponseCode::NXDomain =>
        {
            LookupFailure::NotFound
        }
        ResolveErrorKind::NoRecordsFound { .. } => LookupFailure::NoAnswer,
        _ => LookupFailure::OtherFailure(err.to_string()),
    }
}
