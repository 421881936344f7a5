use reqwest::Client;

use crate::errors::ScanError;

/// Build the crt.sh wildcard query URL for a domain. `%25.` is the encoded
/// `%.` prefix, matching every name under the domain in the CT index.
pub fn query_url(domain: &str) -> String {
    let q = format!("%25.{}", urlencoding::encode(domain));
    format!("https://crt.sh/?q={q}&output=json")
}

/// Issue the single GET against crt.sh and return the raw response body.
///
/// The status code is deliberately not checked: crt.sh error pages are
/// non-JSON and fail at the decode stage instead, so a transport-level
/// success with any status is treated as a readable response.
pub async fn fetch_raw(client: &Client, domain: &str) -> Result<String, ScanError> {
    let url = query_url(domain);
    tracing::debug!(%url, "querying crt.sh");

    let resp = client.get(&url).send().await.map_err(ScanError::Network)?;
    let status = resp.status();
    let body = resp.text().await.map_err(ScanError::Read)?;

    tracing::debug!(%status, bytes = body.len(), "crt.sh responded");
    Ok(body)
}
