use chrono::Utc;
use serde_json::Value;
use shared::domain::{Comment, CommentKind};
use storage::KeyValueSlot;
use thiserror::Error;
use tracing::warn;

/// Slot key the comment list lives under. All profiles use the same key.
pub const COMMENT_SLOT_KEY: &str = "guide.comments";

/// Hard cap applied when loading a persisted list. Entries past this are
/// dropped at load time; submissions within a session are not capped.
pub const MAX_LOADED_COMMENTS: usize = 200;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommentShapeError {
    #[error("comment entry is not a JSON object")]
    NotAnObject,
    #[error("comment kind is missing or unrecognized")]
    UnknownKind,
    #[error("comment text is missing, empty, or not a string")]
    InvalidText,
    #[error("comment timestamp is missing or not an integer")]
    InvalidTimestamp,
}

/// Validates one persisted entry. Older profiles wrote the kind under a
/// `type` key, so both spellings are accepted.
pub fn decode_comment(value: &Value) -> Result<Comment, CommentShapeError> {
    let obj = value.as_object().ok_or(CommentShapeError::NotAnObject)?;

    let kind_value = obj
        .get("kind")
        .or_else(|| obj.get("type"))
        .ok_or(CommentShapeError::UnknownKind)?;
    let kind: CommentKind = serde_json::from_value(kind_value.clone())
        .map_err(|_| CommentShapeError::UnknownKind)?;

    let text = obj
        .get("text")
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .ok_or(CommentShapeError::InvalidText)?
        .to_string();

    let created_at = obj
        .get("createdAt")
        .and_then(Value::as_i64)
        .ok_or(CommentShapeError::InvalidTimestamp)?;

    Ok(Comment {
        kind,
        text,
        created_at,
    })
}

/// Newest-first comment list backed by a single storage slot.
pub struct CommentBoard<S: KeyValueSlot> {
    slot: S,
    comments: Vec<Comment>,
}

impl<S: KeyValueSlot> CommentBoard<S> {
    /// Loads whatever is persisted under the comment key. Damage never
    /// aborts startup: an unreadable slot, unparseable JSON, or a non-array
    /// payload all yield an empty board, and malformed entries inside an
    /// otherwise valid array are skipped element by element.
    pub fn load(slot: S) -> Self {
        let comments = match slot.read(COMMENT_SLOT_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Value>(&raw) {
                Ok(Value::Array(entries)) => entries
                    .iter()
                    .filter_map(|entry| match decode_comment(entry) {
                        Ok(comment) => Some(comment),
                        Err(err) => {
                            warn!("comments: skipping malformed entry: {err}");
                            None
                        }
                    })
                    .take(MAX_LOADED_COMMENTS)
                    .collect(),
                Ok(_) => {
                    warn!("comments: persisted value is not an array, starting empty");
                    Vec::new()
                }
                Err(err) => {
                    warn!("comments: persisted value is not valid JSON, starting empty: {err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("comments: failed to read slot, starting empty: {err:#}");
                Vec::new()
            }
        };

        Self { slot, comments }
    }

    /// Newest first.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Trims the text and rejects a blank submission without side effects.
    /// Otherwise the comment is stamped with the current wall clock,
    /// prepended, and the whole list persisted. Returns whether a comment
    /// was added.
    pub fn submit(&mut self, kind: CommentKind, raw_text: &str) -> bool {
        let text = raw_text.trim();
        if text.is_empty() {
            return false;
        }

        self.comments.insert(
            0,
            Comment {
                kind,
                text: text.to_string(),
                created_at: Utc::now().timestamp_millis(),
            },
        );
        self.persist();
        true
    }

    // Persistence failures are logged and swallowed; the in-memory list is
    // already updated and the session keeps working.
    fn persist(&self) {
        let payload = match serde_json::to_string(&self.comments) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("comments: failed to serialize list: {err}");
                return;
            }
        };
        if let Err(err) = self.slot.write(COMMENT_SLOT_KEY, &payload) {
            warn!("comments: failed to persist list: {err:#}");
        }
    }
}

#[cfg(test)]
#[path = "tests/comments_tests.rs"]
mod tests;
