use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Inbound body of `POST /api/send-prompt`. Absent or `null` fields
/// deserialize as empty strings and are rejected by validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromptRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub prompt: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub model: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl PromptRequest {
    /// Decodes the first JSON value of a request body, whatever its content
    /// type. Only an object or `null` is accepted; anything after the first
    /// value is ignored.
    pub fn from_body(body: &[u8]) -> serde_json::Result<Self> {
        let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Value>();
        let value = match values.next() {
            Some(value) => value?,
            None => return Err(serde::de::Error::custom("empty request body")),
        };

        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(_) => serde_json::from_value(value),
            other => Err(serde::de::Error::custom(format!(
                "expected a JSON object, found {}",
                kind(&other)
            ))),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.prompt.is_empty() && !self.model.is_empty()
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PromptResponse {
    pub response: String,
}
