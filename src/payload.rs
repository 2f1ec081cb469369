use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque result returned by an inference run.
///
/// The payload is kept exactly as the service returned it. Displaying it
/// yields the text of a JSON string, or pretty printed JSON for anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultPayload(Value);

impl ResultPayload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self(Value::String(text.into()))
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Render the payload as display text.
    pub fn render(&self) -> String {
        match &self.0 {
            Value::String(text) => text.clone(),
            other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
        }
    }
}

impl fmt::Display for ResultPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<Value> for ResultPayload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
