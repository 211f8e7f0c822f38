//! HTTP transport for the host-does-IO split.
//!
//! # Design
//! `HttpRequest` and `HttpResponse` describe a round-trip as plain data.
//! `FetchClient` builds the request and parses the response without touching
//! the network; `execute` is the only function here that does I/O. Keeping
//! the split means request building and body parsing are tested without a
//! server, and the network path is tested once against the mock server.

use tracing::debug;

use crate::error::FetchError;

/// A GET request described as plain data.
///
/// The API is read-only and unauthenticated, so the target URL is all a
/// request needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
}

/// A fully accumulated HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Execute `request` and read the whole body.
///
/// A URL that cannot be built is an `InvalidRequest` error. Any failure
/// before the last body byte arrives is a `Transport` error. A body that is
/// not UTF-8 is a `Parse` error. Status codes are returned as
/// data; interpreting them is the caller's job.
pub async fn execute(http: &reqwest::Client, request: HttpRequest) -> Result<HttpResponse, FetchError> {
    let response = http.get(&request.url).send().await?;
    let status = response.status().as_u16();
    let bytes = response.bytes().await?;
    debug!(url = %request.url, status, bytes = bytes.len(), "response received");

    let body = String::from_utf8(bytes.to_vec())
        .map_err(|e| FetchError::Parse(format!("body is not UTF-8: {e}")))?;
    Ok(HttpResponse { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_is_2xx() {
        let ok = HttpResponse {
            status: 204,
            body: String::new(),
        };
        let redirect = HttpResponse {
            status: 301,
            body: String::new(),
        };
        assert!(ok.is_success());
        assert!(!redirect.is_success());
    }
}
