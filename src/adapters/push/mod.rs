use crate::domain::message::PushMessage;
use crate::domain::ticket::PushTicket;
use crate::error::Result;
use async_trait::async_trait;

pub mod expo;

pub use expo::ExpoPushGateway;

/// A push gateway able to deliver one notification to one device.
#[async_trait]
pub trait PushGateway: Send + Sync + std::fmt::Debug {
    /// Submits a single message and returns the gateway's delivery ticket.
    ///
    /// # Errors
    /// Returns `PushError::DeviceNotRegistered` when the gateway reports the
    /// target registration as gone, `PushError::Transport` for network and
    /// HTTP-level failures, `PushError::ServerRejected` for request-level
    /// gateway errors, and `PushError::TicketRejected` for any other
    /// ticket-level rejection.
    async fn publish(&self, message: &PushMessage) -> Result<PushTicket>;
}
