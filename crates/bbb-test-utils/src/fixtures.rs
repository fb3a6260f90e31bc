//! Canned XML response envelopes
//!
//! Bodies mirror what a real conferencing server sends back, compact and
//! declaration-free, so tests exercise the same shapes production sees.
//! All helpers return owned strings ready for
//! `ResponseTemplate::set_body_string`.

/// Successful `create` envelope for the given meeting.
#[must_use]
pub fn success_create_response(meeting_id: &str) -> String {
    format!(
        "<response><returncode>SUCCESS</returncode>\
         <meetingID>{meeting_id}</meetingID>\
         <attendeePW>att-pw</attendeePW>\
         <moderatorPW>mod-pw</moderatorPW>\
         <createTime>1700000000000</createTime>\
         <messageKey></messageKey><message></message></response>"
    )
}

/// `isMeetingRunning` envelope.
#[must_use]
pub fn running_response(running: bool) -> String {
    format!(
        "<response><returncode>SUCCESS</returncode>\
         <running>{running}</running></response>"
    )
}

/// Successful `end` envelope.
#[must_use]
pub fn end_response() -> String {
    "<response><returncode>SUCCESS</returncode>\
     <messageKey>sentEndMeetingRequest</messageKey>\
     <message>A request to end the meeting was sent.</message></response>"
        .to_string()
}

/// `getMeetings` envelope listing the given meeting IDs.
#[must_use]
pub fn meetings_response(meeting_ids: &[&str]) -> String {
    let meetings: String = meeting_ids
        .iter()
        .map(|id| {
            format!(
                "<meeting><meetingID>{id}</meetingID>\
                 <attendeePW>att-pw</attendeePW>\
                 <moderatorPW>mod-pw</moderatorPW>\
                 <hasBeenForciblyEnded>false</hasBeenForciblyEnded>\
                 <running>true</running></meeting>"
            )
        })
        .collect();
    format!(
        "<response><returncode>SUCCESS</returncode>\
         <meetings>{meetings}</meetings></response>"
    )
}

/// `getMeetings` envelope for a server with no meetings.
#[must_use]
pub fn no_meetings_response() -> String {
    "<response><returncode>SUCCESS</returncode><meetings/>\
     <messageKey>noMeetings</messageKey>\
     <message>no meetings were found on this server</message></response>"
        .to_string()
}

/// `getMeetingInfo` envelope with the given participant count.
#[must_use]
pub fn meeting_info_response(meeting_id: &str, participant_count: u32) -> String {
    format!(
        "<response><returncode>SUCCESS</returncode>\
         <meetingName>Test Meeting</meetingName>\
         <meetingID>{meeting_id}</meetingID>\
         <running>true</running>\
         <participantCount>{participant_count}</participantCount>\
         <moderatorCount>1</moderatorCount>\
         <hasBeenForciblyEnded>false</hasBeenForciblyEnded></response>"
    )
}

/// Failure envelope with the given key and message.
#[must_use]
pub fn failed_response(message_key: &str, message: &str) -> String {
    format!(
        "<response><returncode>FAILED</returncode>\
         <messageKey>{message_key}</messageKey>\
         <message>{message}</message></response>"
    )
}

/// The server's checksum rejection envelope.
#[must_use]
pub fn checksum_error_response() -> String {
    failed_response(
        "checksumError",
        "You did not pass the checksum security check",
    )
}
