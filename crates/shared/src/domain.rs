use serde::{Deserialize, Serialize};

/// A physical license office. Supplied wholesale by the presentation layer
/// at startup and never mutated by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Office {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl Office {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentKind {
    GeneralComment,
    RequestToEditSteps,
}

impl CommentKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::GeneralComment => "General comment",
            Self::RequestToEditSteps => "Request to edit steps",
        }
    }
}

/// A user-submitted note on the comment board. Constructed only by the
/// comment board on submission; immutable afterwards.
///
/// The persisted wire shape is `{"kind": ..., "text": ..., "createdAt": ...}`;
/// older payloads that named the category field `type` are still accepted
/// on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(alias = "type")]
    pub kind: CommentKind,
    pub text: String,
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}
