//! HTTP delivery of an assembled notification.

use tracing::{error, info, warn};

use super::errors::DispatchError;
use super::types::{DeliveryResult, OutboundRequest};

/// Sends notifications with a single POST per call.
///
/// No retries and no timeout beyond the client default.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    client: reqwest::Client,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// POST `request` and report the status the service answered with.
    ///
    /// Any HTTP status counts as a completed delivery and is returned as-is;
    /// only transport failures are errors. A 200 is logged as confirmed,
    /// other statuses are logged with the response body.
    pub async fn send(
        &self,
        request: &OutboundRequest,
        topic: &str,
    ) -> Result<DeliveryResult, DispatchError> {
        info!(
            event = "core.dispatch.send_started",
            url = %request.url,
            topic = topic,
        );

        let response = self
            .client
            .post(&request.url)
            .headers(request.headers.clone())
            .body(request.body.clone())
            .send()
            .await
            .map_err(|source| {
                error!(
                    event = "core.dispatch.send_failed",
                    url = %request.url,
                    error = %source,
                );
                DispatchError::RequestFailed {
                    url: request.url.clone(),
                    source,
                }
            })?;

        let status = response.status();
        let result = DeliveryResult {
            status_code: status.as_u16(),
            url: request.url.clone(),
            topic: topic.to_string(),
        };

        if result.is_confirmed() {
            info!(
                event = "core.dispatch.send_completed",
                url = %request.url,
                topic = topic,
                status = result.status_code,
            );
        } else {
            let body = response.text().await.unwrap_or_default();
            warn!(
                event = "core.dispatch.unexpected_status",
                url = %request.url,
                topic = topic,
                status = result.status_code,
                response_body = %body,
            );
        }

        Ok(result)
    }
}
