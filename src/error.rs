use thiserror::Error;

#[derive(Error, Debug)]
pub enum PushError {
    /// The target device registration is gone (uninstall, expiry).
    /// Routine churn; callers should stop targeting this token.
    #[error("device registration is no longer valid: {token}")]
    DeviceNotRegistered { token: String },

    /// The gateway failed to process the request itself.
    #[error("gateway rejected the request ({status}): {message}")]
    ServerRejected { status: u16, message: String },

    /// Network or HTTP-level failure before the gateway produced a verdict.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The gateway accepted the request but rejected this delivery ticket.
    #[error("delivery ticket rejected ({code}): {message}")]
    TicketRejected { code: String, message: String },
}

pub type Result<T> = std::result::Result<T, PushError>;
