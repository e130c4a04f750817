use std::collections::BTreeSet;

/// Tracks which document-checklist items the driver has ticked off.
/// Items are identified by stable string ids owned by the presentation
/// layer; state here is session-local and never persisted.
#[derive(Debug, Default)]
pub struct ChecklistState {
    checked: BTreeSet<String>,
}

impl ChecklistState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.contains(id)
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.checked.remove(id) {
            self.checked.insert(id.to_string());
        }
    }

    pub fn checked_count(&self) -> usize {
        self.checked.len()
    }
}

#[cfg(test)]
#[path = "tests/checklist_tests.rs"]
mod tests;
