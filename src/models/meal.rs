use serde::{Deserialize, Serialize};

/// A meal as supplied by the caller: an id, a display name and its protocol text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub protocol: String,
}

impl Meal {
    pub fn new(id: impl Into<String>, name: impl Into<String>, protocol: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            protocol: protocol.into(),
        }
    }

    /// Whether the protocol holds anything besides whitespace.
    pub fn has_protocol(&self) -> bool {
        !self.protocol.trim().is_empty()
    }
}
