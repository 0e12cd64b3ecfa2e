//! Example: send a notification through Pushy.

use std::time::Duration;

use pushy::{Pushy, ReqwestTransport, SendNotificationRequest};
use serde_json::json;

#[tokio::main]
async fn main() -> pushy::Result<()> {
    let device = std::env::args().nth(1).expect("usage: send <device-token>");

    // API token from the PUSHY_API_TOKEN environment variable
    let client = Pushy::from_env(ReqwestTransport::new(Duration::from_secs(10))?)?;

    let response = client
        .notify_device(&SendNotificationRequest {
            to: vec![device],
            data: json!({
                "message": "Hello World!",
                "sent_by": "pushy-rs",
            }),
            time_to_live: 120,
            ..Default::default()
        })
        .await?;

    println!("Notification sent!");
    println!("  ID: {}", response.id);

    Ok(())
}
