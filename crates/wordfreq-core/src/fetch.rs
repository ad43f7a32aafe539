//! Source document retrieval.
//!
//! One HTTP GET via the curl crate (libcurl). The body is returned only for a
//! final status of exactly 200; anything else is a [`FetchError`]. No retries.

use std::time::Duration;
use thiserror::Error;

/// Why the source document could not be retrieved.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported URL scheme {scheme:?} (expected http or https)")]
    UnsupportedScheme { scheme: String },
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    #[error("GET {url} returned HTTP {code}")]
    Status { url: String, code: u32 },
}

impl FetchError {
    /// HTTP status code, when the server answered with something other than 200.
    pub fn status(&self) -> Option<u32> {
        match self {
            FetchError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

fn check_url(url: &str) -> Result<(), FetchError> {
    let parsed = url::Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(FetchError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}

/// Fetches `url` and returns the response body as text.
///
/// Follows redirects. Bytes that are not valid UTF-8 are replaced with U+FFFD.
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub fn fetch_text(url: &str) -> Result<String, FetchError> {
    check_url(url)?;
    let transport = |source: curl::Error| FetchError::Transport {
        url: url.to_string(),
        source,
    };

    let mut body: Vec<u8> = Vec::new();
    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(transport)?;
    easy.get(true).map_err(transport)?;
    easy.follow_location(true).map_err(transport)?;
    easy.max_redirections(10).map_err(transport)?;
    easy.connect_timeout(Duration::from_secs(30))
        .map_err(transport)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(transport)?;
        transfer.perform().map_err(transport)?;
    }

    let code = easy.response_code().map_err(transport)?;
    if code != 200 {
        return Err(FetchError::Status {
            url: url.to_string(),
            code,
        });
    }

    tracing::debug!("fetched {} bytes from {}", body.len(), url);
    Ok(match String::from_utf8(body) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("{} returned invalid UTF-8; decoding lossily", url);
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_url() {
        let err = fetch_text("not a url").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
        assert!(err.status().is_none());
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = fetch_text("file:///etc/hostname").unwrap_err();
        match err {
            FetchError::UnsupportedScheme { scheme } => assert_eq!(scheme, "file"),
            other => panic!("expected UnsupportedScheme, got {:?}", other),
        }
    }

    #[test]
    fn status_error_message_names_code() {
        let err = FetchError::Status {
            url: "http://example.com/".to_string(),
            code: 404,
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "GET http://example.com/ returned HTTP 404");
    }
}
