//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/IO types here — adapters decode into these.

use serde::{Deserialize, Deserializer};

/// Greeting payload returned by the remote endpoint.
///
/// Both fields are optional: a missing key or JSON `null` becomes `None`.
/// Numbers and booleans are accepted and kept in their textual form, since the
/// public greeting service sends `id` as a number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Greeting {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub content: Option<String>,
}

impl Greeting {
    pub fn new(id: Option<String>, content: Option<String>) -> Self {
        Self { id, content }
    }
}

/// Observable screen state. `Displayed` and `Errored` are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Idle,
    Pending,
    Displayed,
    Errored,
}

impl ScreenState {
    pub fn is_resolved(self) -> bool {
        matches!(self, ScreenState::Displayed | ScreenState::Errored)
    }
}

/// Scalar JSON value coerced to text. Arrays and objects are rejected.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_json::Value;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a text value, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
        _ => "a scalar",
    }
}
