use std::collections::HashSet;

use serde::Deserialize;

use crate::errors::ScanError;

/// One entry of the crt.sh JSON array. `name_value` is the certificate's
/// subject name and may carry a leading `*.` wildcard marker. Multi-SAN
/// certificates pack several newline-separated names into one field; that
/// blob is kept as a single opaque string.
#[derive(Debug, Clone, Deserialize)]
pub struct CrtShEntry {
    pub name_value: String,
}

/// Decode the raw crt.sh body into typed records. Anything that is not a
/// JSON array of `{name_value}` objects is a fatal parse failure.
pub fn parse_records(body: &str) -> Result<Vec<CrtShEntry>, ScanError> {
    let records: Vec<CrtShEntry> = serde_json::from_str(body)?;
    Ok(records)
}

/// Collapse certificate records into a sorted, deduplicated subdomain list.
///
/// A single leading `*.` is stripped; no other normalization is applied
/// (case and whitespace are preserved exactly as crt.sh returned them).
/// Sorting is byte-wise lexicographic ascending.
pub fn extract_subdomains(records: &[CrtShEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    for record in records {
        let name = record
            .name_value
            .strip_prefix("*.")
            .unwrap_or(&record.name_value);
        seen.insert(name.to_string());
    }

    let mut subdomains: Vec<String> = seen.into_iter().collect();
    subdomains.sort_unstable();
    subdomains
}
