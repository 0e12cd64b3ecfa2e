//! Shared request dispatch.
//!
//! Every API method funnels through here: issue the call through the
//! injected transport, classify the outcome by status code, decode the body
//! into the matching shape. The status code is the sole discriminator
//! between the success shape and the error shape.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{PushyError, Result};
use crate::transport::{Method, Transport, TransportRequest, TransportResponse};
use crate::types::ApiError;

const JSON_CONTENT_TYPE: &str = "application/json";

pub(crate) async fn perform_get<T: DeserializeOwned>(
    transport: &dyn Transport,
    url: &str,
) -> Result<T> {
    debug!(%url, "GET");
    let response = transport.get(url).await.map_err(PushyError::Transport)?;
    decode_response(response)
}

pub(crate) async fn perform_post<T, B>(transport: &dyn Transport, url: &str, body: &B) -> Result<T>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    // Serialize up front; an unencodable body never reaches the wire.
    let payload = serde_json::to_vec(body)?;
    debug!(%url, bytes = payload.len(), "POST");
    let response = transport
        .post(url, JSON_CONTENT_TYPE, payload)
        .await
        .map_err(PushyError::Transport)?;
    decode_response(response)
}

pub(crate) async fn perform_delete<T: DeserializeOwned>(
    transport: &dyn Transport,
    url: &str,
) -> Result<T> {
    debug!(%url, "DELETE");
    let request = TransportRequest {
        method: Method::Delete,
        url: url.to_string(),
        headers: Vec::new(),
        body: None,
    };
    let response = transport
        .execute(request)
        .await
        .map_err(PushyError::Transport)?;
    decode_response(response)
}

fn decode_response<T: DeserializeOwned>(response: TransportResponse) -> Result<T> {
    let TransportResponse { status, body } = response;
    if status >= 400 {
        // The documented error shape; anything else is kept verbatim as the
        // message so the status classification is never masked.
        let error = serde_json::from_slice(&body).unwrap_or_else(|_| ApiError {
            error: String::from_utf8_lossy(&body).into_owned(),
        });
        debug!(status, "request rejected");
        return Err(PushyError::api(status, error));
    }
    debug!(status, "request ok");
    Ok(serde_json::from_slice(&body)?)
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::types::SimpleSuccess;

    fn response(status: u16, body: &str) -> TransportResponse {
        TransportResponse {
            status,
            body: Bytes::copy_from_slice(body.as_bytes()),
        }
    }

    #[test]
    fn status_below_400_decodes_success_shape() {
        let ok: SimpleSuccess = decode_response(response(200, r#"{"success":true}"#)).unwrap();
        assert!(ok.success);
    }

    #[test]
    fn status_399_is_still_success() {
        let ok: SimpleSuccess = decode_response(response(399, r#"{"success":true}"#)).unwrap();
        assert!(ok.success);
    }

    #[test]
    fn status_400_decodes_error_shape() {
        let err = decode_response::<SimpleSuccess>(response(400, r#"{"error":"bad token"}"#))
            .unwrap_err();
        assert!(err.to_string().contains("400"));
        match err {
            PushyError::Api { status, error, .. } => {
                assert_eq!(status, 400);
                assert_eq!(error.error, "bad token");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn non_json_error_body_is_kept_verbatim() {
        let err =
            decode_response::<SimpleSuccess>(response(500, "upstream exploded")).unwrap_err();
        assert!(err.to_string().contains("500"));
        match err {
            PushyError::Api { status, error, .. } => {
                assert_eq!(status, 500);
                assert_eq!(error.error, "upstream exploded");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_success_body_surfaces_as_serialization_error() {
        let err = decode_response::<SimpleSuccess>(response(200, "not json")).unwrap_err();
        assert!(matches!(err, PushyError::Serialization(_)));
    }
}
