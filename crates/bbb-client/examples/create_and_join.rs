//! Creates a meeting and prints signed join URLs.
//!
//! Reads the server location and shared secret from the environment:
//!
//! ```bash
//! export BBB_SERVER_URL="https://bbb.example.org/bigbluebutton/"
//! export BBB_SHARED_SECRET="change-me"
//! cargo run --example create_and_join
//! ```

use bbb_client::{ApiClient, ClientConfig, Parameters};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bbb_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env()?;
    let client = ApiClient::new(config)?;

    let params = Parameters::new()
        .with("meetingId", "demo-101")
        .with("meetingName", "Weekly Sync")
        .with("attendeePW", "att-pw")
        .with("moderatorPW", "mod-pw");

    let created = client.create_meeting(&params).await?;
    if !created.is_success() {
        info!(
            message_key = created.message_key().unwrap_or("<none>"),
            message = created.message().unwrap_or(""),
            "Server declined the create request"
        );
        return Ok(());
    }
    info!(meeting_id = "demo-101", "Meeting created");

    let moderator_join = client.join_url(
        &Parameters::new()
            .with("meetingId", "demo-101")
            .with("username", "alice")
            .with("password", "mod-pw"),
    )?;
    let attendee_join = client.join_url(
        &Parameters::new()
            .with("meetingId", "demo-101")
            .with("username", "bob")
            .with("password", "att-pw"),
    )?;

    println!("moderator: {moderator_join}");
    println!("attendee:  {attendee_join}");
    Ok(())
}
