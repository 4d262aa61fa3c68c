//! src/subscribe_client.rs

use std::time::Duration;

use anyhow::Context;
use reqwest::{Client, StatusCode};

use crate::domain::SubscriberRequest;
use crate::error::SubscribeError;

/// Client for the newsletter subscription endpoint.
///
/// Holds a single `reqwest::Client` so the underlying connection pool is
/// reused across submissions.
pub struct SubscribeClient {
    http_client: Client,
    base_url: String,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct SubscribeRequestBody<'a> {
    email: &'a str,
    first_name: &'a str,
    referrer: &'a str,
}

/// Parsed body of the endpoint's reply. The `message` field is only
/// meaningful on failure responses.
#[derive(serde::Deserialize, Debug)]
pub struct SubscribeResponse {
    #[serde(default)]
    pub message: String,
}

impl SubscribeClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, anyhow::Error> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build the HTTP client.")?;
        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Issue one `POST /api/subscribe` with the serialized request.
    ///
    /// The response body is read and parsed as JSON regardless of HTTP
    /// status: a 422 carries a user-safe `message`, every other failure is
    /// collapsed into the opaque `Request` kind.
    #[tracing::instrument(
        name = "Posting a new subscription.",
        skip(self, request),
        fields(subscriber_email = %request.email)
    )]
    pub async fn subscribe(
        &self,
        request: &SubscriberRequest,
    ) -> Result<SubscribeResponse, SubscribeError> {
        let url = format!("{}/api/subscribe", self.base_url);
        let body = SubscribeRequestBody {
            email: request.email.as_ref(),
            first_name: request.first_name.as_ref(),
            referrer: &request.referrer,
        };
        let response = self
            .http_client
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("Failed to reach the newsletter subscription endpoint.")?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .context("Failed to read the subscription response body.")?;
        let payload: SubscribeResponse = serde_json::from_slice(&bytes).with_context(|| {
            format!("Failed to parse the subscription response body (status {status}).")
        })?;
        if status.is_success() {
            Ok(payload)
        } else if status == StatusCode::UNPROCESSABLE_ENTITY {
            Err(SubscribeError::Validation {
                message: payload.message,
            })
        } else {
            Err(SubscribeError::Request(anyhow::anyhow!(
                "The subscription endpoint responded with {status}: {}",
                payload.message
            )))
        }
    }
}
