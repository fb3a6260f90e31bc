//! Fixed test IDs for deterministic tests
//!
//! Checksums are derived from meeting IDs, names and the shared secret, so
//! fixed values keep expected digests stable across runs. A helper is
//! provided for the few tests that need IDs unique per run instead.

use uuid::Uuid;

// Shared secret used by every mock server
pub const TEST_SHARED_SECRET: &str = "test-secret-do-not-use-in-production";

// Meeting identity
pub const TEST_MEETING_ID: &str = "test-meeting-101";
pub const TEST_MEETING_NAME: &str = "Test Meeting";

// Meeting passwords
pub const TEST_MODERATOR_PW: &str = "mod-pw";
pub const TEST_ATTENDEE_PW: &str = "att-pw";

// Participants
pub const TEST_USERNAME_ALICE: &str = "alice";
pub const TEST_USERNAME_BOB: &str = "bob";

/// Returns a meeting ID that is unique per call.
///
/// Useful when a test mounts several mocks on one server and must keep
/// their meetings apart.
#[must_use]
pub fn unique_meeting_id() -> String {
    format!("test-meeting-{}", Uuid::new_v4())
}
