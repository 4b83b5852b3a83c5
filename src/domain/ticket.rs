/// The gateway's acknowledgment for one accepted delivery attempt.
///
/// A ticket means the gateway has taken over the message; it says nothing
/// about delivery to the device itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushTicket {
    /// Gateway-issued receipt identifier.
    pub id: String,
}
