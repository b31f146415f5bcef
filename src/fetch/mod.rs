//! Page retrieval.

use log::debug;

use crate::error_handling::ScrapeError;

/// Fetches `url` and returns its body as text.
///
/// Redirects are followed by the client. The client's timeout bounds the whole
/// request, body included.
///
/// # Errors
///
/// - `ScrapeError::Fetch` on network failure, timeout or an unreadable body
/// - `ScrapeError::HttpStatus` for any non-2xx final status
/// - `ScrapeError::Parse` for an empty body
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String, ScrapeError> {
    debug!("Fetching {url}");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ScrapeError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|source| ScrapeError::Fetch {
        url: url.to_string(),
        source,
    })?;

    if body.trim().is_empty() {
        return Err(ScrapeError::Parse {
            url: url.to_string(),
            reason: "empty body".to_string(),
        });
    }

    debug!("Fetched {} bytes from {url}", body.len());
    Ok(body)
}
