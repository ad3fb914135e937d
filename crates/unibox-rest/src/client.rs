//! HTTP client for a single message backend.

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{ConversationMessage, MessagePreview, SendMessageRequest};

/// Client for one backend endpoint.
///
/// Cheap to clone; the underlying connection pool is shared between clones.
/// One instance is typically created per configured backend, all sharing a
/// single [`reqwest::Client`] via [`BackendClient::with_client`].
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for the given base URL with a fresh connection pool.
    ///
    /// Trailing slashes on the base URL are ignored.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client that reuses an existing connection pool.
    #[must_use]
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The normalized base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Fetch the message previews for the whole inbox.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend answers with a
    /// non-success status, or the body is not valid preview JSON.
    pub async fn messages(&self) -> Result<Vec<MessagePreview>> {
        let url = self.endpoint("messages");
        debug!("GET {url}");
        let response = self.http.get(&url).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Fetch the conversation thread for one phone number.
    ///
    /// The phone value is percent-encoded by the query serializer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend answers with a
    /// non-success status, or the body is not valid conversation JSON.
    pub async fn conversation(&self, phone: &str) -> Result<Vec<ConversationMessage>> {
        let url = self.endpoint("conversation");
        debug!("GET {url}?phone={phone}");
        let response = self
            .http
            .get(&url)
            .query(&[("phone", phone)])
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Send a new outbound message and return the backend's raw response
    /// text, which callers display verbatim as a status line.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend answers with a
    /// non-success status.
    pub async fn send_message(&self, request: &SendMessageRequest) -> Result<String> {
        let url = self.endpoint("send-message");
        debug!("POST {url} to {}", request.phone_number);
        let response = self.http.post(&url).json(request).send().await?;
        let response = check_status(response).await?;
        Ok(response.text().await?)
    }
}

/// Turn non-success responses into [`Error::Status`], keeping the body text.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::Status { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slashes() {
        let client = BackendClient::new("https://sms.example.com///");
        assert_eq!(client.base_url(), "https://sms.example.com");
        assert_eq!(
            client.endpoint("messages"),
            "https://sms.example.com/messages"
        );
    }

    #[test]
    fn endpoint_joins_with_single_slash() {
        let client = BackendClient::new("http://127.0.0.1:8080");
        assert_eq!(
            client.endpoint("send-message"),
            "http://127.0.0.1:8080/send-message"
        );
    }
}
