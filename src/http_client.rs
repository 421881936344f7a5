use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use once_cell::sync::Lazy;

/// Default client used when no request timeout was asked for. crt.sh can take
/// a long time to answer wildcard queries, so no timeout is configured here;
/// a hung server stalls the scan until the user interrupts it.
pub static DEFAULT_CLIENT: Lazy<Client> = Lazy::new(|| create_client(None));

/// Create the HTTP client used for the crt.sh query.
pub fn create_client(timeout_secs: Option<u64>) -> Client {
    let mut builder = ClientBuilder::new()
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .tcp_nodelay(true)

        // Compression
        .gzip(true)
        .brotli(true)

        // TLS
        .use_rustls_tls()
        .tls_sni(true)

        // Redirects
        .redirect(reqwest::redirect::Policy::limited(5))

        // User agent
        .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36");

    if let Some(secs) = timeout_secs {
        builder = builder
            .timeout(Duration::from_secs(secs))
            .connect_timeout(Duration::from_secs(5));
    }

    builder.build().expect("Failed to build HTTP client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        // Builder panics on an invalid configuration; both variants must build.
        let _with_timeout = create_client(Some(10));
        let _without_timeout = create_client(None);
    }
}
