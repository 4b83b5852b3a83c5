pub mod message;
pub mod outcome;
pub mod ticket;

pub use message::PushMessage;
pub use outcome::DispatchOutcome;
pub use ticket::PushTicket;
