//! # pushy
//!
//! Rust SDK for the [Pushy](https://pushy.me) push notification service.
//!
//! Wraps the REST API behind typed async methods: look up devices and their
//! presence, manage topic subscriptions, and create, inspect or delete
//! notifications.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use pushy::{Pushy, ReqwestTransport, SendNotificationRequest};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> pushy::Result<()> {
//!     // The client never builds an HTTP client behind your back; hand it
//!     // one with the timeout you want.
//!     let client = Pushy::builder("API_TOKEN")
//!         .transport(ReqwestTransport::new(Duration::from_secs(10))?)
//!         .build()?;
//!
//!     let response = client
//!         .notify_device(&SendNotificationRequest {
//!             to: vec!["DEVICE_TOKEN".into()],
//!             data: json!({"message": "Hello World!"}),
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!("Push ID: {}", response.id);
//!
//!     let info = client.device_info("DEVICE_TOKEN").await?;
//!     println!("online: {}", info.presence.online);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Transports
//!
//! All network I/O goes through the [`Transport`] trait. [`ReqwestTransport`]
//! is the stock implementation; anything that can perform GET, POST and
//! generic requests can stand in for it — a custom client, or a scripted
//! fake in tests. Timeouts are configured on the transport, not on the
//! client.
//!
//! ## Errors
//!
//! Every call returns [`Result`]. A rejected request (status >= 400) is
//! [`PushyError::Api`] and carries the decoded error body next to the status
//! summary; a failed exchange is [`PushyError::Transport`]; a body that does
//! not match the documented shape is [`PushyError::Serialization`].

mod client;
mod dispatch;
mod error;
mod transport;
mod types;

pub use client::{Pushy, PushyBuilder, DEFAULT_ENDPOINT};
pub use error::{BoxError, PushyError, Result};
pub use transport::{Method, ReqwestTransport, Transport, TransportRequest, TransportResponse};
pub use types::{
    ApiError, Device, DeviceInfo, DevicePresence, DevicePresenceResponse, IosNotification,
    LastActive, Notification, NotificationResponse, NotificationStatus, PresenceEntry, PushStatus,
    SendNotificationRequest, SimpleSuccess,
};
