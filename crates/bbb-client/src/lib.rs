//! Client for the BigBlueButton conferencing server's HTTP/XML control API.
//!
//! The server authenticates callers by a SHA-1 checksum over each
//! request's operation name, serialized query string and a shared secret.
//! This crate builds those signed request URLs, validates per-operation
//! required parameters before any network action, executes calls over
//! HTTP and decodes the XML replies into a generic element tree.
//!
//! ```no_run
//! use bbb_client::secret::SecretString;
//! use bbb_client::{ApiClient, ClientConfig, Parameters};
//!
//! # async fn run() -> Result<(), bbb_client::ApiError> {
//! let config = ClientConfig::new(
//!     "https://bbb.example.org/bigbluebutton/".to_string(),
//!     SecretString::from("change-me"),
//! );
//! let client = ApiClient::new(config)?;
//!
//! let params = Parameters::new()
//!     .with("meetingId", "weekly-sync")
//!     .with("meetingName", "Weekly Sync");
//! let created = client.create_meeting(&params).await?;
//! assert!(created.is_success());
//!
//! // Join URLs are handed to the user's browser, never fetched here.
//! let join = client.join_url(
//!     &Parameters::new()
//!         .with("meetingId", "weekly-sync")
//!         .with("username", "alice")
//!         .with("password", "attendee-pw"),
//! )?;
//! println!("{join}");
//! # Ok(())
//! # }
//! ```

#![warn(clippy::pedantic)]

/// Module for request checksum computation
pub mod checksum;

/// Module for the HTTP client and per-call options
pub mod client;

/// Module for client configuration
pub mod config;

/// Module for error types
pub mod error;

/// Module for the operation set and its required-parameter table
pub mod operation;

/// Module for ordered request parameters
pub mod params;

/// Module for signed request-URL construction
pub mod request;

/// Module for XML response decoding
pub mod response;

/// Module for shared-secret handling
pub mod secret;

pub use client::{ApiClient, CallOptions};
pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use operation::Operation;
pub use params::Parameters;
pub use response::{ApiResponse, XmlElement};
