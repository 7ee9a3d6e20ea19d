//! Wire types for the tutorial-list endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a tutorial. The backend sends integers, but any JSON
/// number or string is accepted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum TutorialId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TutorialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TutorialId::Number(n) => write!(f, "{n}"),
            TutorialId::Text(s) => f.write_str(s),
        }
    }
}

/// A single displayable record. Never mutated after it is received.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Tutorial {
    pub id: TutorialId,
    pub title: String,
    pub description: String,
    pub url: String,
}

/// The backend's `{ success, data }` wrapper.
///
/// `success` is required; a missing flag fails deserialization. `data` may be
/// absent or `null` (the backend omits it on failures) but must be an array
/// when present.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResponseEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Tutorial>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
