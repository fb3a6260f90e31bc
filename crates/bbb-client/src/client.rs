//! HTTP client for the conferencing server's control API.
//!
//! Wraps one `reqwest::Client` built from an immutable [`ClientConfig`].
//! Every call validates and signs its request before any network action,
//! then performs a single request-response cycle. There are no retries and
//! no fallback transport; each failing stage maps onto one
//! [`ApiError`](crate::ApiError) variant.

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::operation::Operation;
use crate::params::Parameters;
use crate::request;
use crate::response::{self, ApiResponse};
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

/// Media type of XML bodies attached to POST calls.
const XML_CONTENT_TYPE: &str = "application/xml";

// =============================================================================
// Per-call options
// =============================================================================

/// Options for a single call.
///
/// The default is a plain GET with the configured timeout. Attaching an
/// XML body turns the call into a POST; `create` uses this to ship
/// pre-upload document descriptions.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    xml_body: Option<String>,
    timeout: Option<Duration>,
}

impl CallOptions {
    /// Create empty options: GET, configured timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an XML document as the request body.
    ///
    /// The request becomes a POST carrying
    /// `Content-Type: application/xml`, with the body's byte length as its
    /// content length. The body does not participate in the checksum.
    #[must_use]
    pub fn with_xml_body(mut self, body: impl Into<String>) -> Self {
        self.xml_body = Some(body.into());
        self
    }

    /// Override the configured request timeout for this call only.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

// =============================================================================
// Client
// =============================================================================

/// Client for one conferencing server.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Create a client from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::TransportUnavailable`] if the HTTP client
    /// cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| {
                error!(
                    target: "bbb_client.client",
                    error = %e,
                    "Failed to build HTTP client"
                );
                ApiError::TransportUnavailable(e.to_string())
            })?;

        Ok(Self { http, config })
    }

    /// The configuration this client was built from.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the signed URL for an operation without executing it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameter`] if a required parameter is
    /// absent or blank.
    pub fn request_url(
        &self,
        operation: Operation,
        params: &Parameters,
    ) -> Result<String, ApiError> {
        request::signed_url(&self.config, operation, params)
    }

    /// Build the signed join URL for a user's browser.
    ///
    /// Join is the one operation the client never executes itself: the
    /// server answers it by redirecting into the meeting room, which only
    /// works inside the joining user's browser. Required parameters:
    /// `meetingId`, `username`, `password`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameter`] if a required parameter is
    /// absent or blank.
    pub fn join_url(&self, params: &Parameters) -> Result<String, ApiError> {
        self.request_url(Operation::Join, params)
    }

    /// Create a meeting room.
    ///
    /// Required parameters: `meetingId`, `meetingName`. Optional settings
    /// such as `attendeePW`, `moderatorPW`, `welcome` or `record` pass
    /// through unvalidated.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn create_meeting(&self, params: &Parameters) -> Result<ApiResponse, ApiError> {
        self.execute(Operation::Create, params).await
    }

    /// Create a meeting room, shipping pre-upload document XML.
    ///
    /// The documents are attached as the POST body; everything else is
    /// identical to [`ApiClient::create_meeting`].
    ///
    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn create_meeting_with_documents(
        &self,
        params: &Parameters,
        documents_xml: &str,
    ) -> Result<ApiResponse, ApiError> {
        self.execute_with(
            Operation::Create,
            params,
            CallOptions::new().with_xml_body(documents_xml),
        )
        .await
    }

    /// End a running meeting.
    ///
    /// Required parameters: `meetingId`, `password` (the moderator
    /// password).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn end_meeting(&self, params: &Parameters) -> Result<ApiResponse, ApiError> {
        self.execute(Operation::End, params).await
    }

    /// Ask whether a meeting is currently running.
    ///
    /// Required parameter: `meetingId`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn is_meeting_running(&self, params: &Parameters) -> Result<ApiResponse, ApiError> {
        self.execute(Operation::IsMeetingRunning, params).await
    }

    /// List the meetings the server knows about.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn get_meetings(&self) -> Result<ApiResponse, ApiError> {
        self.execute(Operation::GetMeetings, &Parameters::new()).await
    }

    /// Fetch detailed information about one meeting.
    ///
    /// Required parameters: `meetingId`, `password` (the moderator
    /// password).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn get_meeting_info(&self, params: &Parameters) -> Result<ApiResponse, ApiError> {
        self.execute(Operation::GetMeetingInfo, params).await
    }

    /// Execute an operation as a plain signed GET.
    ///
    /// # Errors
    ///
    /// - [`ApiError::MissingParameter`] if a required parameter is absent
    ///   or blank; nothing is sent in that case.
    /// - [`ApiError::TransportUnavailable`] if the request cannot be sent
    ///   or the response body cannot be read.
    /// - [`ApiError::EmptyResponse`] if the server answers with no
    ///   payload.
    /// - [`ApiError::MalformedResponse`] if the payload is not
    ///   well-formed XML.
    pub async fn execute(
        &self,
        operation: Operation,
        params: &Parameters,
    ) -> Result<ApiResponse, ApiError> {
        self.execute_with(operation, params, CallOptions::new()).await
    }

    /// Execute an operation with per-call options.
    ///
    /// With an XML body attached the request is a POST, otherwise a GET.
    /// The response body is decoded regardless of HTTP status: the server
    /// reports operation failures inside a 200 envelope, and a failure
    /// envelope is a decoded response, not an error.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ApiClient::execute`].
    #[instrument(skip_all, fields(operation = %operation))]
    pub async fn execute_with(
        &self,
        operation: Operation,
        params: &Parameters,
        options: CallOptions,
    ) -> Result<ApiResponse, ApiError> {
        let url = request::signed_url(&self.config, operation, params)?;

        debug!(
            target: "bbb_client.client",
            parameters = params.len(),
            has_body = options.xml_body.is_some(),
            "Sending API request"
        );

        let mut builder = match options.xml_body {
            Some(body) => self
                .http
                .post(&url)
                .header(CONTENT_TYPE, XML_CONTENT_TYPE)
                .body(body),
            None => self.http.get(&url),
        };
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(
                target: "bbb_client.client",
                error = %e,
                "Request could not be sent"
            );
            ApiError::TransportUnavailable(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            // Operation failures arrive inside a 200 envelope; any other
            // status usually means a proxy or a misconfigured server, but
            // the body may still carry a decodable envelope.
            warn!(
                target: "bbb_client.client",
                status = %status,
                "Non-success HTTP status"
            );
        }

        let body = response.text().await.map_err(|e| {
            warn!(
                target: "bbb_client.client",
                error = %e,
                "Failed to read response body"
            );
            ApiError::TransportUnavailable(e.to_string())
        })?;

        let decoded = response::decode(&body).map_err(|e| {
            error!(
                target: "bbb_client.client",
                error = %e,
                "Failed to decode response body"
            );
            e
        })?;
        debug!(
            target: "bbb_client.client",
            return_code = decoded.return_code().unwrap_or("<none>"),
            "Response decoded"
        );
        Ok(decoded)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::secret::SecretString;

    fn client() -> ApiClient {
        let config = ClientConfig::new(
            "http://host/bbb/".to_string(),
            SecretString::from("s3cr3t"),
        );
        ApiClient::new(config).unwrap()
    }

    #[test]
    fn test_call_options_default_is_get() {
        let options = CallOptions::new();
        assert!(options.xml_body.is_none());
        assert!(options.timeout.is_none());
    }

    #[test]
    fn test_call_options_builders() {
        let options = CallOptions::new()
            .with_xml_body("<modules/>")
            .with_timeout(Duration::from_secs(3));

        assert_eq!(options.xml_body.as_deref(), Some("<modules/>"));
        assert_eq!(options.timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_join_url_is_signed_and_never_sent() {
        let params = Parameters::new()
            .with("meetingId", "demo-101")
            .with("username", "alice")
            .with("password", "ap-secret");
        let url = client().join_url(&params).unwrap();

        assert_eq!(
            url,
            "http://host/bbb/api/join?meetingId=demo-101&username=alice&password=ap-secret\
             &checksum=34cefea88735bd8fabb7d6c38b38186ee988104b"
        );
    }

    #[test]
    fn test_join_url_requires_username() {
        let params = Parameters::new()
            .with("meetingId", "demo-101")
            .with("password", "ap-secret");
        let err = client().join_url(&params).unwrap_err();

        assert!(matches!(err, ApiError::MissingParameter { name: "username" }));
    }

    #[test]
    fn test_request_url_covers_any_operation() {
        let params = Parameters::new().with("meetingId", "abc");
        let url = client()
            .request_url(Operation::IsMeetingRunning, &params)
            .unwrap();

        assert!(url.starts_with("http://host/bbb/api/isMeetingRunning?meetingId=abc&checksum="));
    }

    #[test]
    fn test_client_debug_redacts_secret() {
        let debug = format!("{:?}", client());
        assert!(!debug.contains("s3cr3t"));
        assert!(debug.contains("[REDACTED]"));
    }
}
