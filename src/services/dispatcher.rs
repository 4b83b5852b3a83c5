use crate::adapters::push::PushGateway;
use crate::domain::message::{self, PushMessage};
use crate::domain::outcome::DispatchOutcome;
use crate::error::{PushError, Result};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Dispatches individual push notifications through a gateway.
///
/// Stateless between calls; concurrent dispatches share nothing but the
/// gateway's pooled session.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    gateway: Arc<dyn PushGateway>,
}

impl Dispatcher {
    #[must_use]
    pub fn new(gateway: Arc<dyn PushGateway>) -> Self {
        Self { gateway }
    }

    /// Sends one notification and classifies the gateway's verdict.
    ///
    /// A dead device registration is an expected condition and is reported
    /// as `DispatchOutcome::DeviceNotRegistered` rather than an error; which
    /// token to deactivate is in the outcome, acting on it is the caller's
    /// job.
    ///
    /// # Errors
    /// Propagates `PushError::ServerRejected`, `PushError::Transport`, and
    /// `PushError::TicketRejected` after logging them once, leaving retry
    /// policy to the caller.
    #[tracing::instrument(skip(self, body, data), fields(token = %token))]
    pub async fn dispatch(
        &self,
        token: &str,
        body: &str,
        data: Option<Map<String, Value>>,
    ) -> Result<DispatchOutcome> {
        if !message::is_expo_push_token(token) {
            tracing::warn!("Recipient does not look like an Expo push token");
        }

        let mut message = PushMessage::new(token, body);
        if let Some(data) = data {
            message = message.with_data(data);
        }

        match self.gateway.publish(&message).await {
            Ok(ticket) => {
                tracing::debug!(ticket_id = %ticket.id, "Push notification accepted by gateway");
                Ok(DispatchOutcome::Delivered { ticket_id: ticket.id })
            }
            Err(PushError::DeviceNotRegistered { token }) => {
                tracing::warn!(token = %token, "Device not registered, stop targeting this token");
                Ok(DispatchOutcome::DeviceNotRegistered { token })
            }
            Err(e @ PushError::ServerRejected { .. }) => {
                tracing::error!(error = %e, "Push server error");
                Err(e)
            }
            Err(e @ PushError::Transport(_)) => {
                tracing::error!(error = %e, "Network or HTTP error");
                Err(e)
            }
            Err(e @ PushError::TicketRejected { .. }) => {
                tracing::error!(error = %e, "Push ticket error");
                Err(e)
            }
        }
    }
}
