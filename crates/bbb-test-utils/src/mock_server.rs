//! Mock conferencing server for client tests.
//!
//! Wraps a [`wiremock::MockServer`] behind the URL layout a real server
//! exposes (`{base}/bigbluebutton/api/{operation}`). Every helper-mounted
//! mock verifies the request checksum the way the real server does:
//! recompute the digest from the raw query and the shared secret, then
//! compare it against the final `checksum` parameter. A request signed
//! with the wrong secret simply never matches.
//!
//! # Example
//!
//! ```rust,ignore
//! use bbb_test_utils::{fixtures, MockBbbServer, TEST_MEETING_ID};
//!
//! let server = MockBbbServer::start().await;
//! server
//!     .mock_operation("isMeetingRunning", fixtures::running_response(true))
//!     .await;
//! let client = server.client();
//! ```

use bbb_client::checksum;
use bbb_client::secret::SecretString;
use bbb_client::{ApiClient, ClientConfig};
use wiremock::matchers::{any, method, path};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

use crate::test_ids::TEST_SHARED_SECRET;

/// Matcher that recomputes and verifies the request checksum.
///
/// Matches when the query string ends in `checksum={digest}` and the
/// digest equals the one recomputed from the operation name, the
/// preceding raw query and the configured secret.
pub struct ValidChecksum {
    operation: String,
    secret: String,
}

impl ValidChecksum {
    /// Creates a matcher for `operation` using the default test secret.
    #[must_use]
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            secret: TEST_SHARED_SECRET.to_string(),
        }
    }

    /// Overrides the secret to verify against.
    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = secret.into();
        self
    }
}

impl Match for ValidChecksum {
    fn matches(&self, request: &Request) -> bool {
        let Some(query) = request.url.query() else {
            return false;
        };
        let Some((params, digest)) = split_checksum(query) else {
            return false;
        };
        digest == checksum::compute(&self.operation, params, &self.secret)
    }
}

/// Splits a raw query into the parameter string and the trailing digest.
///
/// Returns `None` when `checksum` is absent or not the final parameter.
fn split_checksum(query: &str) -> Option<(&str, &str)> {
    if let Some(digest) = query.strip_prefix("checksum=") {
        if !digest.contains('&') {
            return Some(("", digest));
        }
    }
    query.rsplit_once("&checksum=")
}

/// Mock conferencing server with checksum verification.
pub struct MockBbbServer {
    server: MockServer,
}

impl MockBbbServer {
    /// Starts a fresh mock server on a random local port.
    ///
    /// The server is dedicated (not pooled), so dropping it closes the
    /// listening socket.
    pub async fn start() -> Self {
        Self {
            server: MockServer::builder().start().await,
        }
    }

    /// Base endpoint for client configuration, ending with
    /// `/bigbluebutton/`.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/bigbluebutton/", self.server.uri())
    }

    /// Client configuration pointing at this server, signed with
    /// [`TEST_SHARED_SECRET`].
    #[must_use]
    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(self.endpoint(), SecretString::from(TEST_SHARED_SECRET))
    }

    /// Ready-made client pointing at this server.
    #[must_use]
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.config()).expect("client construction cannot fail in tests")
    }

    /// The wrapped server, for mocks these helpers do not cover.
    #[must_use]
    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// Request path of an operation, as a real server lays it out.
    #[must_use]
    pub fn api_path(operation: &str) -> String {
        format!("/bigbluebutton/api/{operation}")
    }

    /// Mounts a checksum-verified GET mock answering `200` with `body`.
    pub async fn mock_operation(&self, operation: &str, body: impl Into<String>) {
        Mock::given(method("GET"))
            .and(path(Self::api_path(operation)))
            .and(ValidChecksum::new(operation))
            .respond_with(ResponseTemplate::new(200).set_body_string(body.into()))
            .mount(&self.server)
            .await;
    }

    /// Mounts a checksum-verified POST mock answering `200` with `body`.
    pub async fn mock_post_operation(&self, operation: &str, body: impl Into<String>) {
        Mock::given(method("POST"))
            .and(path(Self::api_path(operation)))
            .and(ValidChecksum::new(operation))
            .respond_with(ResponseTemplate::new(200).set_body_string(body.into()))
            .mount(&self.server)
            .await;
    }

    /// Mounts a checksum-verified GET mock answering `status` with `body`.
    pub async fn mock_operation_with_status(
        &self,
        operation: &str,
        status: u16,
        body: impl Into<String>,
    ) {
        Mock::given(method("GET"))
            .and(path(Self::api_path(operation)))
            .and(ValidChecksum::new(operation))
            .respond_with(ResponseTemplate::new(status).set_body_string(body.into()))
            .mount(&self.server)
            .await;
    }

    /// Mounts a low-priority catch-all answering every unverified request
    /// the way a real server rejects a bad checksum.
    pub async fn mount_checksum_rejection(&self) {
        Mock::given(any())
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(crate::fixtures::checksum_error_response()),
            )
            .with_priority(u8::MAX)
            .mount(&self.server)
            .await;
    }

    /// Number of requests this server has received so far.
    pub async fn received_request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map_or(0, |requests| requests.len())
    }
}
