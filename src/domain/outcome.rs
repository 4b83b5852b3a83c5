/// Result of one dispatch call.
///
/// Covers the two non-fatal verdicts; processing failures are surfaced as
/// `PushError` instead so the caller keeps control over retry policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The gateway accepted the notification and issued a delivery ticket.
    Delivered { ticket_id: String },
    /// The device registration is gone. Stop targeting this token.
    DeviceNotRegistered { token: String },
}
