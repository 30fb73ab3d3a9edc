use serde::{Deserialize, Serialize};

/// Which path a request takes through the engine.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    /// Corpus matching: detection, ranking, composition.
    #[default]
    Normal,
    /// Expanded-information lookup; bypasses corpus matching entirely.
    OpenEvidence,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Free-text patient message. Empty is valid and gets the "didn't
    /// understand" reply.
    #[serde(default)]
    pub message: String,
    /// Request path, "normal" (default) or "openevidence".
    #[serde(default, rename = "type")]
    pub kind: RequestKind,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ChatReply {
    /// Composed reply text; may embed an HTML link for content pointers.
    pub response: String,
    /// Present (true) when the query looks medical enough to offer the
    /// expanded-information path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggest_openevidence: Option<bool>,
}

impl ChatReply {
    pub fn text(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            suggest_openevidence: None,
        }
    }
}
