use crate::transport::HttpResponse;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Structured error body returned by the Feedly API.
/// <https://developer.feedly.com/cloud/#client-errors>
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error identifier
    #[serde(default, rename = "errorId")]
    pub error_id: String,
    /// Human readable error message
    #[serde(default, rename = "errorMessage")]
    pub error_message: String,
}

impl ApiError {
    /// An ApiError with both fields unset represents the absence of an
    /// API-level error.
    pub fn is_empty(&self) -> bool {
        self.error_id.is_empty() && self.error_message.is_empty()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_id, self.error_message)
    }
}

/// Main error type for Feedly API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Error returned in a structured Feedly error envelope
    #[error("{error}")]
    Api {
        error: ApiError,
        /// Raw exchange, kept so callers can inspect the status code
        response: Option<HttpResponse>,
    },

    /// Non-success HTTP status without a parseable error envelope
    #[error("HTTP error {}: {}", .response.status.as_u16(), .response.text())]
    Http {
        /// Raw exchange, kept so callers can inspect the status and headers
        response: HttpResponse,
    },

    /// HTTP transport error
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Response body could not be mapped onto the expected structure
    #[error("failed to decode response body: {source}")]
    Decode {
        source: serde_json::Error,
        /// Raw exchange, kept so callers can inspect the status code
        response: Option<HttpResponse>,
    },

    /// XML response body (OPML export) could not be decoded
    #[error("failed to decode XML response body: {source}")]
    Xml {
        source: quick_xml::DeError,
        /// Raw exchange, kept so callers can inspect the status code
        response: Option<HttpResponse>,
    },

    /// Request building error
    #[error("failed to build request: {0}")]
    RequestBuild(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// IO error (cover image and OPML uploads)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Get the HTTP status code associated with this error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api {
                response: Some(response),
                ..
            }
            | Error::Decode {
                response: Some(response),
                ..
            }
            | Error::Xml {
                response: Some(response),
                ..
            }
            | Error::Http { response } => Some(response.status.as_u16()),
            Error::Reqwest(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error carries a 401 Unauthorized status
    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == Some(401)
    }

    /// Check if this error carries a 404 Not Found status
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }
}

/// Result type for Feedly API operations
pub type Result<T> = std::result::Result<T, Error>;

/// Collapse the two failure signals of a call into the single relevant error:
/// a transport-level failure always wins over a structured API error body,
/// and an empty API error body means the call succeeded.
pub fn relevant_error(
    transport_error: Option<Error>,
    api_error: ApiError,
    response: Option<&HttpResponse>,
) -> Option<Error> {
    if transport_error.is_some() {
        return transport_error;
    }

    if !api_error.is_empty() {
        return Some(Error::Api {
            error: api_error,
            response: response.cloned(),
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(id: &str, message: &str) -> ApiError {
        ApiError {
            error_id: id.to_string(),
            error_message: message.to_string(),
        }
    }

    #[test]
    fn test_empty_api_error_is_no_error() {
        assert!(relevant_error(None, ApiError::default(), None).is_none());
    }

    #[test]
    fn test_api_error_formatting() {
        let err = relevant_error(None, api_error("404", "not found"), None).unwrap();
        assert_eq!(err.to_string(), "404: not found");
    }

    #[test]
    fn test_api_error_with_only_one_field_set_is_an_error() {
        assert!(relevant_error(None, api_error("401", ""), None).is_some());
        assert!(relevant_error(None, api_error("", "denied"), None).is_some());
    }

    #[test]
    fn test_transport_error_takes_precedence() {
        let transport = Error::RequestBuild("boom".to_string());
        let err = relevant_error(Some(transport), api_error("404", "not found"), None).unwrap();
        assert!(matches!(err, Error::RequestBuild(_)));
    }

    #[test]
    fn test_http_error_keeps_the_raw_exchange() {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert("retry-after", reqwest::header::HeaderValue::from_static("30"));

        let err = Error::Http {
            response: HttpResponse {
                status: reqwest::StatusCode::BAD_GATEWAY,
                headers,
                body: b"<html>bad gateway</html>".to_vec(),
            },
        };

        assert_eq!(err.status_code(), Some(502));
        assert_eq!(err.to_string(), "HTTP error 502: <html>bad gateway</html>");

        match &err {
            Error::Http { response } => assert_eq!(response.headers["retry-after"], "30"),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_status_code_from_response() {
        let response = HttpResponse {
            status: reqwest::StatusCode::NOT_FOUND,
            headers: reqwest::header::HeaderMap::new(),
            body: Vec::new(),
        };

        let err = relevant_error(None, api_error("404", "not found"), Some(&response)).unwrap();
        assert!(err.is_not_found());
        assert_eq!(err.status_code(), Some(404));
    }
}
