use crate::adapters::push::PushGateway;
use crate::config::GatewayConfig;
use crate::domain::message::PushMessage;
use crate::domain::ticket::PushTicket;
use crate::error::{PushError, Result};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;

const DEVICE_NOT_REGISTERED: &str = "DeviceNotRegistered";

/// Client for the Expo push HTTP API.
///
/// Holds one pooled HTTPS session configured with the bearer credential at
/// construction time. Per-request resources are released on every exit
/// path, including cancellation of an in-flight call.
#[derive(Debug)]
pub struct ExpoPushGateway {
    client: reqwest::Client,
    url: String,
}

impl ExpoPushGateway {
    /// Builds the gateway client from explicit configuration.
    ///
    /// # Errors
    /// Returns an error if the credential cannot be encoded as a header
    /// value or the HTTP client cannot be constructed.
    pub fn new(config: &GatewayConfig) -> anyhow::Result<Self> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", config.access_token))
            .context("access token is not a valid header value")?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("failed to construct the HTTP client")?;

        Ok(Self {
            client,
            url: config.gateway_url.clone(),
        })
    }
}

#[async_trait]
impl PushGateway for ExpoPushGateway {
    async fn publish(&self, message: &PushMessage) -> Result<PushTicket> {
        tracing::debug!(to = %message.to, "Submitting push message to gateway");

        // The endpoint consumes a batch; a single dispatch is a one-element batch.
        let response = self.client.post(&self.url).json(&[message]).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(PushError::ServerRejected {
                status: status.as_u16(),
                message: body,
            });
        }
        let status = status.as_u16();

        let envelope: PushEnvelope =
            serde_json::from_str(&body).map_err(|e| PushError::ServerRejected {
                status,
                message: format!("undecodable gateway response: {e}"),
            })?;

        if let Some(error) = envelope.errors.first() {
            return Err(PushError::ServerRejected {
                status,
                message: format!("{}: {}", error.code, error.message),
            });
        }

        let mut tickets = envelope.data;
        if tickets.len() != 1 {
            return Err(PushError::ServerRejected {
                status,
                message: format!("expected one ticket, gateway returned {}", tickets.len()),
            });
        }
        let ticket = tickets.remove(0);

        classify_ticket(ticket, &message.to)
    }
}

/// Maps a gateway ticket onto the dispatch failure taxonomy.
fn classify_ticket(ticket: TicketPayload, token: &str) -> Result<PushTicket> {
    match ticket.status {
        TicketStatus::Ok => Ok(PushTicket {
            id: ticket.id.unwrap_or_default(),
        }),
        TicketStatus::Error => {
            let code = ticket
                .details
                .and_then(|details| details.error)
                .unwrap_or_else(|| "Unknown".to_owned());
            let message = ticket
                .message
                .unwrap_or_else(|| "unspecified ticket error".to_owned());

            if code == DEVICE_NOT_REGISTERED {
                Err(PushError::DeviceNotRegistered {
                    token: token.to_owned(),
                })
            } else {
                Err(PushError::TicketRejected { code, message })
            }
        }
    }
}

/// Envelope returned by the push endpoint.
#[derive(Debug, Deserialize)]
struct PushEnvelope {
    #[serde(default)]
    data: Vec<TicketPayload>,
    #[serde(default)]
    errors: Vec<RequestError>,
}

#[derive(Debug, Deserialize)]
struct TicketPayload {
    status: TicketStatus,
    id: Option<String>,
    message: Option<String>,
    details: Option<TicketDetails>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum TicketStatus {
    Ok,
    Error,
}

#[derive(Debug, Deserialize)]
struct TicketDetails {
    error: Option<String>,
}

/// Request-level error entry, reported even under a 2xx status.
#[derive(Debug, Deserialize)]
struct RequestError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}
