//! # BBB Test Utilities
//!
//! Shared test utilities for the BigBlueButton API client.
//!
//! This crate provides:
//! - A mock conferencing server that verifies request checksums
//!   (`MockBbbServer`, `ValidChecksum`)
//! - Canned XML response envelopes (`fixtures`)
//! - Fixed test IDs and credentials (`test_ids`)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bbb_client::Parameters;
//! use bbb_test_utils::*;
//!
//! #[tokio::test]
//! async fn test_example() {
//!     let server = MockBbbServer::start().await;
//!     server
//!         .mock_operation("isMeetingRunning", fixtures::running_response(true))
//!         .await;
//!
//!     let client = server.client();
//!     let params = Parameters::new().with("meetingId", TEST_MEETING_ID);
//!     let response = client.is_meeting_running(&params).await.unwrap();
//!     assert!(response.is_success());
//! }
//! ```

pub mod fixtures;
pub mod mock_server;
pub mod test_ids;

// Re-export commonly used items
pub use mock_server::*;
pub use test_ids::*;
