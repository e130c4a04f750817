use shared::domain::{Comment, CommentKind, Office};
use storage::KeyValueSlot;

pub mod checklist;
pub mod comments;
pub mod locator;

pub use checklist::ChecklistState;
pub use comments::{CommentBoard, CommentShapeError, COMMENT_SLOT_KEY, MAX_LOADED_COMMENTS};
pub use locator::filter_offices;

/// All mutable state for one open guide session. The presentation layer
/// owns exactly one of these and mutates it only through the operations
/// below; the static office list is supplied once at construction.
pub struct GuideSession<S: KeyValueSlot> {
    offices: Vec<Office>,
    query: String,
    checklist: ChecklistState,
    comments: CommentBoard<S>,
}

impl<S: KeyValueSlot> GuideSession<S> {
    pub fn new(offices: Vec<Office>, slot: S) -> Self {
        Self {
            offices,
            query: String::new(),
            checklist: ChecklistState::new(),
            comments: CommentBoard::load(slot),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// The office list as currently filtered by the live query.
    pub fn visible_offices(&self) -> Vec<Office> {
        filter_offices(&self.offices, &self.query)
    }

    pub fn office_count(&self) -> usize {
        self.offices.len()
    }

    pub fn checklist(&self) -> &ChecklistState {
        &self.checklist
    }

    pub fn toggle_item(&mut self, item_id: &str) {
        self.checklist.toggle(item_id);
    }

    /// Returns `false` when the submission was rejected (blank text).
    pub fn submit_comment(&mut self, kind: CommentKind, raw_text: &str) -> bool {
        self.comments.submit(kind, raw_text)
    }

    pub fn comments(&self) -> &[Comment] {
        self.comments.comments()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
