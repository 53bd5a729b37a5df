//! Blocking HTTP retrieval of the source document.

use tracing::debug;

use crate::config::FetchConfig;

/// Errors that can occur while fetching a document.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("Request to {url} returned HTTP {code}")]
    Status { url: String, code: u16 },

    #[error("Failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },
}

impl FetchError {
    /// HTTP status code, when the server answered with a non-success status.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// GET `url` and return its body as text.
///
/// Any status outside 2xx is an error. Bytes that are not valid UTF-8 are
/// decoded as U+FFFD. The response, and with it the
/// underlying connection, is dropped before this returns on every path.
pub fn fetch_document(url: &str, config: &FetchConfig) -> Result<String, FetchError> {
    let agent = ureq::Agent::new_with_config(
        ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout)
            .build(),
    );

    debug!(url, "fetching document");
    let mut response = agent
        .get(url)
        .header("User-Agent", config.user_agent.as_str())
        .call()
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source: Box::new(source),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            code: status.as_u16(),
        });
    }

    let bytes = response
        .body_mut()
        .with_config()
        .limit(config.max_body_bytes)
        .read_to_vec()
        .map_err(|source| FetchError::Body {
            url: url.to_string(),
            source: Box::new(source),
        })?;

    // Invalid UTF-8 is replaced rather than rejected
    let body = String::from_utf8_lossy(&bytes).into_owned();

    debug!(url, bytes = body.len(), status = status.as_u16(), "document fetched");
    Ok(body)
}
