use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumString};

use crate::shared::AppError;

/// Presence state of a chat member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum MemberStatus {
    /// Currently in the room
    Active,
    /// Left the room
    Inactive,
    /// In the room but away
    Idle,
}

/// A stored history payload. The shape is defined by clients and never inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryEntry(Value);

impl HistoryEntry {
    pub fn new(payload: Value) -> Self {
        Self(payload)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for HistoryEntry {
    fn from(payload: Value) -> Self {
        Self(payload)
    }
}

/// A `(name, status)` pair, serialized as a two-element JSON array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberEntry(pub String, pub MemberStatus);

impl MemberEntry {
    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn status(&self) -> MemberStatus {
        self.1
    }
}

/// Payload of enter, exit and idle events
///
/// Must be a JSON object with a string `name`. Any other fields are kept
/// untouched so the original object can be stored and rebroadcast as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct PresencePayload {
    name: String,
    raw: Value,
}

impl PresencePayload {
    pub fn from_value(raw: Value) -> Result<Self, AppError> {
        let object = raw.as_object().ok_or_else(|| {
            AppError::InvalidPayload("presence payload must be a JSON object".to_string())
        })?;

        let name = match object.get("name") {
            Some(Value::String(name)) => name.clone(),
            Some(_) => {
                return Err(AppError::InvalidPayload(
                    "`name` must be a string".to_string(),
                ))
            }
            None => return Err(AppError::InvalidPayload("missing `name`".to_string())),
        };

        Ok(Self { name, raw })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn into_raw(self) -> Value {
        self.raw
    }
}
