//! Example: inspect a registered device.

use std::time::Duration;

use pushy::{Pushy, ReqwestTransport};

#[tokio::main]
async fn main() -> pushy::Result<()> {
    let device = std::env::args()
        .nth(1)
        .expect("usage: device_info <device-token>");

    // API token from the PUSHY_API_TOKEN environment variable
    let client = Pushy::from_env(ReqwestTransport::new(Duration::from_secs(10))?)?;

    let info = client.device_info(&device).await?;

    println!("Device registered on {}: {}", info.device.date, info.device.platform);
    println!("Subscriptions: {:?}", info.subscriptions);
    if info.presence.online {
        println!("Online now");
    } else {
        println!(
            "Last seen {} seconds ago",
            info.presence.last_active.seconds_ago
        );
    }
    println!("{} pending notification(s)", info.pending_notifications.len());

    Ok(())
}
