//! Shared request base used by every resource service.

use crate::client::Config;
use crate::decode;
use crate::error::{relevant_error, ApiError, Error, Result};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Instant;
use url::Url;

/// Raw outcome of an HTTP exchange: status, headers, and the response body
/// bytes. Returned alongside every decoded result (and embedded in
/// [`Error::Api`]) so callers can inspect status codes independently of the
/// unified error.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// The response body as text, lossily converted
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Shared request base: the caller-supplied HTTP client plus the configured
/// base URL and version prefix. Each service holds its own clone.
#[derive(Clone)]
pub(crate) struct Transport {
    client: Client,
    config: Config,
}

impl Transport {
    pub(crate) fn new(client: Client, config: Config) -> Self {
        Transport { client, config }
    }

    /// Build the request URL from the base, version prefix, and path
    /// segments. Each segment is percent-encoded, so resource IDs containing
    /// slashes stay within their segment.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.config.base_url)?;

        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| Error::RequestBuild("API base URL cannot be a base".to_string()))?;
            path.pop_if_empty();
            path.push(&self.config.version);
            for segment in segments {
                path.push(segment);
            }
        }

        Ok(url)
    }

    pub(crate) fn get(&self, segments: &[&str]) -> Result<RequestBuilder> {
        Ok(self.client.request(Method::GET, self.url(segments)?))
    }

    pub(crate) fn post(&self, segments: &[&str]) -> Result<RequestBuilder> {
        Ok(self.client.request(Method::POST, self.url(segments)?))
    }

    pub(crate) fn put(&self, segments: &[&str]) -> Result<RequestBuilder> {
        Ok(self.client.request(Method::PUT, self.url(segments)?))
    }

    pub(crate) fn delete(&self, segments: &[&str]) -> Result<RequestBuilder> {
        Ok(self.client.request(Method::DELETE, self.url(segments)?))
    }

    /// Send the request, capture the raw exchange, and collapse the transport
    /// and API failure signals into at most one error.
    pub(crate) fn execute(&self, builder: RequestBuilder) -> Result<HttpResponse> {
        let request = builder.build().map_err(Error::Reqwest)?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        let start = Instant::now();
        let (response, transport_error) = match self.client.execute(request) {
            Ok(raw) => {
                let status = raw.status();
                let headers = raw.headers().clone();
                match raw.bytes() {
                    Ok(body) => (
                        Some(HttpResponse {
                            status,
                            headers,
                            body: body.to_vec(),
                        }),
                        None,
                    ),
                    Err(err) => (None, Some(Error::Reqwest(err))),
                }
            }
            Err(err) => (None, Some(Error::Reqwest(err))),
        };

        if self.config.debug {
            eprintln!(
                "[feedly] {} {} => {:?} (status: {:?})",
                method,
                path,
                start.elapsed(),
                response.as_ref().map(|r| r.status.as_u16()),
            );
        }

        // Feedly serves a structured error envelope on non-success statuses;
        // anything else on a failed exchange surfaces as a raw HTTP error.
        let api_error = match &response {
            Some(r) if !r.status.is_success() => match serde_json::from_slice(&r.body) {
                Ok(api_error) => api_error,
                Err(_) => {
                    return Err(Error::Http {
                        response: r.clone(),
                    })
                }
            },
            _ => ApiError::default(),
        };

        if let Some(err) = relevant_error(transport_error, api_error, response.as_ref()) {
            return Err(err);
        }

        // relevant_error found nothing, so the exchange completed
        response.ok_or_else(|| Error::RequestBuild("exchange yielded no response".to_string()))
    }

    /// Execute the request and decode its JSON body into the target type.
    pub(crate) fn receive<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<(T, HttpResponse)> {
        let response = self.execute(builder)?;
        let decoded = decode::from_slice(&response.body).map_err(|err| match err {
            // Attach the exchange so callers can still inspect the status
            Error::Decode {
                source,
                response: None,
            } => Error::Decode {
                source,
                response: Some(response.clone()),
            },
            other => other,
        })?;

        Ok((decoded, response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base_url: &str) -> Transport {
        let config = Config::default().with_base_url(base_url.to_string());
        Transport::new(Client::new(), config)
    }

    #[test]
    fn test_url_joins_version_and_segments() {
        let url = transport("https://cloud.feedly.com")
            .url(&["streams", "feed/http://example.com/rss", "contents"])
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://cloud.feedly.com/v3/streams/feed%2Fhttp:%2F%2Fexample.com%2Frss/contents"
        );
    }

    #[test]
    fn test_url_tolerates_trailing_slash_in_base() {
        let url = transport("https://cloud.feedly.com/").url(&["boards"]).unwrap();
        assert_eq!(url.as_str(), "https://cloud.feedly.com/v3/boards");
    }

    #[test]
    fn test_invalid_base_url_is_reported() {
        assert!(transport("not a url").url(&["boards"]).is_err());
    }
}
