//! Pushy client implementation.

use std::env;
use std::sync::Arc;

use url::Url;

use crate::dispatch::{perform_delete, perform_get, perform_post};
use crate::error::{PushyError, Result};
use crate::transport::Transport;
use crate::types::{
    DeviceInfo, DevicePresenceRequest, DevicePresenceResponse, NotificationResponse,
    NotificationStatus, SendNotificationRequest, SimpleSuccess, SubscriptionRequest,
};

/// Production API host.
pub const DEFAULT_ENDPOINT: &str = "https://api.pushy.me";

const ENV_VAR_NAME: &str = "PUSHY_API_TOKEN";

/// Builder for creating a Pushy client with custom options.
pub struct PushyBuilder {
    api_token: String,
    endpoint: String,
    transport: Option<Arc<dyn Transport>>,
}

impl PushyBuilder {
    /// Create a new builder with the given API token.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            transport: None,
        }
    }

    /// Point the client at a different API host.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Inject the transport that carries every request.
    ///
    /// Required: the client never constructs one on its own, so timeout and
    /// connection tuning stay under the caller's control.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Build the Pushy client.
    pub fn build(self) -> Result<Pushy> {
        if self.api_token.is_empty() {
            return Err(PushyError::config("API token must not be empty"));
        }
        let endpoint = self.endpoint.trim_end_matches('/').to_string();
        Url::parse(&endpoint)?;
        let transport = self.transport.ok_or_else(|| {
            PushyError::config("no transport configured; supply one with PushyBuilder::transport")
        })?;

        Ok(Pushy {
            inner: Arc::new(PushyInner {
                api_token: self.api_token,
                endpoint,
                transport,
            }),
        })
    }
}

struct PushyInner {
    api_token: String,
    endpoint: String,
    transport: Arc<dyn Transport>,
}

/// The Pushy API client.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
///
/// use pushy::{Pushy, ReqwestTransport, SendNotificationRequest};
/// use serde_json::json;
///
/// #[tokio::main]
/// async fn main() -> pushy::Result<()> {
///     let client = Pushy::builder("API_TOKEN")
///         .transport(ReqwestTransport::new(Duration::from_secs(10))?)
///         .build()?;
///
///     let response = client
///         .notify_device(&SendNotificationRequest {
///             to: vec!["DEVICE_TOKEN".into()],
///             data: json!({"message": "Hello World!"}),
///             ..Default::default()
///         })
///         .await?;
///     println!("Push ID: {}", response.id);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Pushy {
    inner: Arc<PushyInner>,
}

impl std::fmt::Debug for Pushy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pushy")
            .field("endpoint", &self.inner.endpoint)
            .finish_non_exhaustive()
    }
}

impl Pushy {
    /// Create a new builder with the given API token.
    pub fn builder(api_token: impl Into<String>) -> PushyBuilder {
        PushyBuilder::new(api_token)
    }

    /// Create a client with the API token taken from the `PUSHY_API_TOKEN`
    /// environment variable.
    pub fn from_env(transport: impl Transport + 'static) -> Result<Self> {
        let api_token = env::var(ENV_VAR_NAME).map_err(|_| {
            PushyError::config(format!("{ENV_VAR_NAME} environment variable not set"))
        })?;
        PushyBuilder::new(api_token).transport(transport).build()
    }

    /// Get the configured API endpoint.
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// Get the injected transport.
    pub fn transport(&self) -> &dyn Transport {
        self.inner.transport.as_ref()
    }

    /// Fetch device, subscription, presence and pending-notification details
    /// for a device token.
    pub async fn device_info(&self, device_id: &str) -> Result<DeviceInfo> {
        let url = self.url(&format!("/devices/{device_id}"));
        perform_get(self.inner.transport.as_ref(), &url).await
    }

    /// Check whether devices are online and when they were last seen.
    pub async fn device_presence(&self, device_ids: &[&str]) -> Result<DevicePresenceResponse> {
        let url = self.url("/devices/presence");
        let request = DevicePresenceRequest { tokens: device_ids };
        perform_post(self.inner.transport.as_ref(), &url, &request).await
    }

    /// Delivery status of a previously created notification.
    pub async fn notification_status(&self, push_id: &str) -> Result<NotificationStatus> {
        let url = self.url(&format!("/pushes/{push_id}"));
        perform_get(self.inner.transport.as_ref(), &url).await
    }

    /// Delete a notification that has not been fully delivered yet.
    pub async fn delete_notification(&self, push_id: &str) -> Result<SimpleSuccess> {
        let url = self.url(&format!("/pushes/{push_id}"));
        perform_delete(self.inner.transport.as_ref(), &url).await
    }

    /// Subscribe a device to topics on its behalf.
    pub async fn subscribe_to_topic(
        &self,
        device_id: &str,
        topics: &[&str],
    ) -> Result<SimpleSuccess> {
        let url = self.url("/devices/subscribe");
        let request = SubscriptionRequest {
            token: device_id,
            topics,
        };
        perform_post(self.inner.transport.as_ref(), &url, &request).await
    }

    /// Unsubscribe a device from topics on its behalf.
    pub async fn unsubscribe_from_topic(
        &self,
        device_id: &str,
        topics: &[&str],
    ) -> Result<SimpleSuccess> {
        let url = self.url("/devices/unsubscribe");
        let request = SubscriptionRequest {
            token: device_id,
            topics,
        };
        perform_post(self.inner.transport.as_ref(), &url, &request).await
    }

    /// Send a notification to one or more devices.
    pub async fn notify_device(
        &self,
        request: &SendNotificationRequest,
    ) -> Result<NotificationResponse> {
        let url = self.url("/push");
        perform_post(self.inner.transport.as_ref(), &url, request).await
    }

    /// Full URL for an API path, auth token included.
    fn url(&self, path: &str) -> String {
        format!(
            "{}{}?api_key={}",
            self.inner.endpoint, path, self.inner.api_token
        )
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::error::BoxError;
    use crate::transport::{TransportRequest, TransportResponse};

    struct StubTransport;

    #[async_trait]
    impl Transport for StubTransport {
        async fn get(&self, _url: &str) -> std::result::Result<TransportResponse, BoxError> {
            Err("stub".into())
        }

        async fn post(
            &self,
            _url: &str,
            _content_type: &str,
            _body: Vec<u8>,
        ) -> std::result::Result<TransportResponse, BoxError> {
            Err("stub".into())
        }

        async fn execute(
            &self,
            _request: TransportRequest,
        ) -> std::result::Result<TransportResponse, BoxError> {
            Err("stub".into())
        }
    }

    #[test]
    fn builder_uses_production_endpoint_by_default() {
        let client = Pushy::builder("token").transport(StubTransport).build().unwrap();
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
        let _ = client.transport();
    }

    #[test]
    fn builder_trims_trailing_slash_from_endpoint() {
        let client = Pushy::builder("token")
            .endpoint("http://localhost:3000/")
            .transport(StubTransport)
            .build()
            .unwrap();
        assert_eq!(client.endpoint(), "http://localhost:3000");
    }

    #[test]
    fn builder_rejects_empty_token() {
        let err = Pushy::builder("").transport(StubTransport).build().unwrap_err();
        assert!(matches!(err, PushyError::Config(_)));
    }

    #[test]
    fn builder_rejects_missing_transport() {
        let err = Pushy::builder("token").build().unwrap_err();
        assert!(matches!(err, PushyError::Config(_)));
        assert!(err.to_string().contains("transport"));
    }

    #[test]
    fn builder_rejects_invalid_endpoint() {
        let err = Pushy::builder("token")
            .endpoint("not a url")
            .transport(StubTransport)
            .build()
            .unwrap_err();
        assert!(matches!(err, PushyError::Url(_)));
    }

    #[test]
    fn urls_embed_path_and_auth_token() {
        let client = Pushy::builder("API_TOKEN").transport(StubTransport).build().unwrap();
        assert_eq!(
            client.url("/devices/DEVICE"),
            "https://api.pushy.me/devices/DEVICE?api_key=API_TOKEN"
        );
    }
}
