//! Data types for the Pushy SDK.
//!
//! Field names follow the service's wire contract; timestamps are the
//! service's integer unix-seconds values.

use serde::{Deserialize, Serialize};

/// Error body returned by the service when a request is rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ApiError {
    /// Human-readable reason from the service.
    pub error: String,
}

/// A registered device.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Device {
    /// Registration date, unix seconds.
    pub date: i64,
    /// Platform identifier, e.g. "android" or "ios".
    pub platform: String,
}

/// Last-seen details inside a [`DevicePresence`] block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct LastActive {
    pub date: i64,
    pub seconds_ago: i64,
}

/// Presence block of a [`DeviceInfo`] response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct DevicePresence {
    pub online: bool,
    pub last_active: LastActive,
}

/// A notification still pending delivery to a device.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Notification {
    pub id: String,
    /// Creation date, unix seconds.
    pub date: i64,
    /// Caller-defined payload, passed through without interpretation.
    pub payload: serde_json::Value,
}

/// Response from [`Pushy::device_info`](crate::Pushy::device_info).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct DeviceInfo {
    pub device: Device,
    /// Topics the device is subscribed to.
    pub subscriptions: Vec<String>,
    pub presence: DevicePresence,
    pub pending_notifications: Vec<Notification>,
}

/// One entry of a [`DevicePresenceResponse`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct PresenceEntry {
    /// Device token.
    pub id: String,
    pub online: bool,
    /// Last-seen date, unix seconds.
    pub last_active: i64,
}

/// Response from [`Pushy::device_presence`](crate::Pushy::device_presence).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct DevicePresenceResponse {
    pub presence: Vec<PresenceEntry>,
}

/// Delivery details inside a [`NotificationStatus`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct PushStatus {
    /// Creation date, unix seconds.
    pub date: i64,
    /// Caller-defined payload, passed through without interpretation.
    pub payload: serde_json::Value,
    /// Expiration date, unix seconds.
    pub expiration: i64,
    /// Devices the notification has not reached yet.
    pub pending_devices: Vec<String>,
}

/// Response from
/// [`Pushy::notification_status`](crate::Pushy::notification_status).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct NotificationStatus {
    pub push: PushStatus,
}

/// Acknowledgement response for operations without further data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct SimpleSuccess {
    pub success: bool,
}

/// Response from [`Pushy::notify_device`](crate::Pushy::notify_device).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct NotificationResponse {
    pub success: bool,
    /// Identifier of the created notification.
    pub id: String,
}

/// Payload for [`Pushy::notify_device`](crate::Pushy::notify_device).
///
/// `data` is an opaque JSON value, forwarded to the devices untouched.
/// The `mutable_content`, `content_available` and `notification` fields are
/// interpreted by iOS devices only.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SendNotificationRequest {
    /// Device tokens to deliver to.
    pub to: Vec<String>,
    /// Caller-defined notification payload.
    pub data: serde_json::Value,
    /// How long the service keeps the notification for offline devices,
    /// in seconds.
    pub time_to_live: u32,
    pub mutable_content: bool,
    pub content_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<IosNotification>,
}

/// The `notification` block shown by iOS devices.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IosNotification {
    pub body: String,
    pub badge: i64,
    pub sound: String,
    pub title: String,
    pub category: String,
    pub loc_key: String,
    pub loc_args: Vec<String>,
    pub title_loc_key: String,
    pub title_loc_args: Vec<String>,
}

// Wire-only request bodies.

#[derive(Debug, Serialize)]
pub(crate) struct DevicePresenceRequest<'a> {
    pub tokens: &'a [&'a str],
}

#[derive(Debug, Serialize)]
pub(crate) struct SubscriptionRequest<'a> {
    pub token: &'a str,
    pub topics: &'a [&'a str],
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn send_notification_request_omits_absent_ios_block() {
        let request = SendNotificationRequest {
            to: vec!["DEVICE".to_string()],
            data: json!({"message": "Hello World!"}),
            time_to_live: 120,
            ..Default::default()
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["to"], json!(["DEVICE"]));
        assert_eq!(value["data"]["message"], "Hello World!");
        assert_eq!(value["time_to_live"], 120);
        assert_eq!(value["mutable_content"], false);
        assert!(value.get("notification").is_none());
    }

    #[test]
    fn send_notification_request_serializes_ios_block() {
        let request = SendNotificationRequest {
            notification: Some(IosNotification {
                body: "Hello".to_string(),
                badge: 1,
                sound: "ping.aiff".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["notification"]["body"], "Hello");
        assert_eq!(value["notification"]["badge"], 1);
        assert_eq!(value["notification"]["loc_args"], json!([]));
    }

    #[test]
    fn subscription_request_preserves_topic_order() {
        let request = SubscriptionRequest {
            token: "DEVICE",
            topics: &["news", "media", "sports"],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["topics"], json!(["news", "media", "sports"]));
    }
}
