use thiserror::Error;

/// The single failure kind of the contacts API: the request did not
/// complete with a usable success response.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },
    #[error("{method} {url} returned HTTP {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },
    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl TransportError {
    pub(crate) fn from_reqwest(method: &'static str, url: &str, err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::Status {
                method,
                url: url.to_string(),
                status: status.as_u16(),
            };
        }
        if err.is_decode() {
            return Self::Decode {
                url: url.to_string(),
                message: err.to_string(),
            };
        }
        Self::Request {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid api base url {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: String },
    #[error("failed to parse {path}: {message}")]
    File { path: String, message: String },
}
