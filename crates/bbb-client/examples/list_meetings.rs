//! Lists the meetings the server knows about.
//!
//! Reads the server location and shared secret from the environment:
//!
//! ```bash
//! export BBB_SERVER_URL="https://bbb.example.org/bigbluebutton/"
//! export BBB_SHARED_SECRET="change-me"
//! cargo run --example list_meetings
//! ```

use bbb_client::{ApiClient, ClientConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bbb_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = ApiClient::new(ClientConfig::from_env()?)?;
    let response = client.get_meetings().await?;

    if !response.is_success() {
        println!(
            "server declined: {}",
            response.message().unwrap_or("no message")
        );
        return Ok(());
    }

    let mut count = 0usize;
    if let Some(meetings) = response.root().child("meetings") {
        for meeting in meetings.children_named("meeting") {
            count += 1;
            println!(
                "{}  running={}  participants={}",
                meeting.child_text("meetingID").unwrap_or("<unnamed>"),
                meeting.child_text("running").unwrap_or("?"),
                meeting.child_text("participantCount").unwrap_or("?"),
            );
        }
    }
    if count == 0 {
        println!("no meetings");
    }
    Ok(())
}
