use serde::Serialize;
use serde_json::{Map, Value};

/// Sound played on delivery. Every dispatch uses the platform default;
/// per-message sound selection is not part of the contract.
pub const DEFAULT_SOUND: &str = "default";

/// A single push notification addressed to one device registration.
///
/// Immutable once built; construct a fresh value per dispatch. Serializes
/// directly to the gateway's wire shape, with `data` omitted when absent.
#[derive(Debug, Clone, Serialize)]
pub struct PushMessage {
    pub to: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
    pub sound: &'static str,
}

impl PushMessage {
    #[must_use]
    pub fn new(to: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            body: body.into(),
            data: None,
            sound: DEFAULT_SOUND,
        }
    }

    /// Attaches an opaque key/value payload forwarded to the device.
    #[must_use]
    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = Some(data);
        self
    }
}

/// Returns true if `token` has the shape the Expo gateway hands out.
///
/// The gateway remains authoritative over registration validity; this only
/// recognizes the `ExponentPushToken[...]` / `ExpoPushToken[...]` format.
#[must_use]
pub fn is_expo_push_token(token: &str) -> bool {
    (token.starts_with("ExponentPushToken[") || token.starts_with("ExpoPushToken["))
        && token.ends_with(']')
}
