//! The closed set of control-API operations.
//!
//! Each variant names one server action reachable under `api/` and declares
//! the parameters a request for it must carry. Keeping the required-key
//! table here means validation happens in one place rather than at every
//! call site.

use std::fmt;

/// A named action of the conferencing server's control API.
///
/// The name doubles as the path segment of the request URL and as the
/// leading checksum input, so [`Operation::as_str`] is spelled exactly the
/// way the server expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Create a meeting room on the server.
    Create,
    /// Join a meeting; answered with a redirect for the user's browser.
    Join,
    /// Force a running meeting to end.
    End,
    /// Ask whether a meeting is currently running.
    IsMeetingRunning,
    /// List the meetings the server knows about.
    GetMeetings,
    /// Fetch detailed information about one meeting.
    GetMeetingInfo,
}

impl Operation {
    /// Returns the operation name as it appears in the request path.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Join => "join",
            Operation::End => "end",
            Operation::IsMeetingRunning => "isMeetingRunning",
            Operation::GetMeetings => "getMeetings",
            Operation::GetMeetingInfo => "getMeetingInfo",
        }
    }

    /// Parameters that must be present and non-blank for this operation.
    ///
    /// `join` requires the attendee or moderator password; `end` and
    /// `getMeetingInfo` require the moderator password.
    #[must_use]
    pub const fn required_parameters(&self) -> &'static [&'static str] {
        match self {
            Operation::Create => &["meetingId", "meetingName"],
            Operation::Join => &["meetingId", "username", "password"],
            Operation::End => &["meetingId", "password"],
            Operation::IsMeetingRunning => &["meetingId"],
            Operation::GetMeetings => &[],
            Operation::GetMeetingInfo => &["meetingId", "password"],
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_matches_server_spelling() {
        assert_eq!(Operation::Create.as_str(), "create");
        assert_eq!(Operation::Join.as_str(), "join");
        assert_eq!(Operation::End.as_str(), "end");
        assert_eq!(Operation::IsMeetingRunning.as_str(), "isMeetingRunning");
        assert_eq!(Operation::GetMeetings.as_str(), "getMeetings");
        assert_eq!(Operation::GetMeetingInfo.as_str(), "getMeetingInfo");
    }

    #[test]
    fn test_required_parameters_per_operation() {
        assert_eq!(
            Operation::Create.required_parameters(),
            &["meetingId", "meetingName"]
        );
        assert_eq!(
            Operation::Join.required_parameters(),
            &["meetingId", "username", "password"]
        );
        assert_eq!(Operation::End.required_parameters(), &["meetingId", "password"]);
        assert_eq!(
            Operation::IsMeetingRunning.required_parameters(),
            &["meetingId"]
        );
        assert!(Operation::GetMeetings.required_parameters().is_empty());
        assert_eq!(
            Operation::GetMeetingInfo.required_parameters(),
            &["meetingId", "password"]
        );
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(Operation::IsMeetingRunning.to_string(), "isMeetingRunning");
        assert_eq!(format!("{}", Operation::Create), "create");
    }
}
