//! Transport seam between the client and the HTTP stack.
//!
//! The BLAST protocol logic only needs two primitives: a form-encoded POST
//! and a GET with query parameters, both returning the response body as
//! text. Putting them behind a trait keeps the submit/poll/fetch logic
//! testable against scripted responses without a network.

use std::time::Duration;

use crate::client::ClientError;

/// Request timeout applied to every call; the service's own default would
/// otherwise leave a stuck request hanging indefinitely.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Blocking text-in/text-out HTTP transport
pub trait Transport {
    /// POST `form` as `application/x-www-form-urlencoded` and return the
    /// response body
    fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<String, ClientError>;

    /// GET `url` with `query` parameters appended and return the response
    /// body
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<String, ClientError>;
}

/// [`Transport`] backed by a blocking `reqwest` client
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Build a transport with the standard request timeout.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Network` if the TLS backend cannot be
    /// initialized.
    pub fn new() -> Result<Self, ClientError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<String, ClientError> {
        let body = self.client.post(url).form(form).send()?.text()?;
        Ok(body)
    }

    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<String, ClientError> {
        let body = self.client.get(url).query(query).send()?.text()?;
        Ok(body)
    }
}
