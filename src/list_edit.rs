//! Inline Edit Controller
//!
//! State machine for the urgency-rules editor: an ordered rule list with at
//! most one row in edit mode, a backup buffer for cancel, and a draft
//! lifecycle for locally-created rows. UI-free so the transitions can be
//! tested without a browser.

use crate::models::UrgencyRule;

/// What a commit has to send to the server
#[derive(Debug, Clone, PartialEq)]
pub enum CommitTarget {
    Create(String),
    Update(i32, String),
}

/// How a delete request should be carried out
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeletePlan {
    /// Unsaved draft, drop it locally without a network call
    Local,
    /// Persisted row, issue a server delete first
    Remote(i32),
}

#[derive(Debug, Clone, PartialEq)]
struct ActiveEdit {
    index: usize,
    backup: String,
}

/// Ordered rule list plus edit cursor and backup buffer
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RuleList {
    items: Vec<UrgencyRule>,
    active: Option<ActiveEdit>,
}

impl RuleList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[UrgencyRule] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active.as_ref().map(|a| a.index)
    }

    pub fn is_editing(&self, index: usize) -> bool {
        self.active_index() == Some(index)
    }

    /// Replace the whole list with a fresh server snapshot
    pub fn replace_all(&mut self, items: Vec<UrgencyRule>) {
        self.items = items;
        self.active = None;
    }

    /// Enter edit mode on `index`, capturing the pre-edit text.
    /// No-op if out of range or another row is already being edited.
    pub fn begin_edit(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        match &self.active {
            Some(active) if active.index != index => return,
            _ => {}
        }
        self.active = Some(ActiveEdit {
            index,
            backup: self.items[index].urgency_rule_text.clone(),
        });
    }

    /// Append a draft row and activate it. If the tail row is already an
    /// unsaved draft, re-activate it instead of stacking a second one.
    pub fn add_draft(&mut self) {
        if self.active.is_some() {
            return;
        }
        if let Some(last) = self.items.last() {
            if last.is_draft() {
                self.begin_edit(self.items.len() - 1);
                return;
            }
        }
        self.items.push(UrgencyRule::draft());
        self.begin_edit(self.items.len() - 1);
    }

    /// Buffer the edited text into the row
    pub fn set_text(&mut self, index: usize, text: String) {
        if let Some(item) = self.items.get_mut(index) {
            item.urgency_rule_text = text;
        }
    }

    /// Leave edit mode and classify the pending save. The row keeps its
    /// edited text; on commit failure nothing is rolled back and the caller
    /// only reports the error.
    pub fn commit(&mut self, index: usize) -> Option<CommitTarget> {
        if !self.is_editing(index) {
            return None;
        }
        self.active = None;
        let item = self.items.get(index)?;
        let text = item.urgency_rule_text.clone();
        match item.urgency_rule_id {
            None => Some(CommitTarget::Create(text)),
            Some(id) => Some(CommitTarget::Update(id, text)),
        }
    }

    /// Replace the local row with the server-authoritative record
    pub fn apply_saved(&mut self, index: usize, record: UrgencyRule) {
        if let Some(item) = self.items.get_mut(index) {
            *item = record;
        }
    }

    /// Restore the backup text and leave edit mode; drafts are removed
    /// entirely since they never existed on the server.
    pub fn cancel(&mut self, index: usize) {
        if !self.is_editing(index) {
            return;
        }
        let backup = self.active.take().map(|a| a.backup).unwrap_or_default();
        if self.items.get(index).map(|i| i.is_draft()).unwrap_or(false) {
            self.items.remove(index);
        } else if let Some(item) = self.items.get_mut(index) {
            item.urgency_rule_text = backup;
        }
    }

    /// Implicit cancel on focus loss, persisted rows only
    pub fn blur(&mut self, index: usize) {
        if !self.is_editing(index) {
            return;
        }
        if self.items.get(index).map(|i| !i.is_draft()).unwrap_or(false) {
            self.cancel(index);
        }
    }

    pub fn delete_plan(&self, index: usize) -> Option<DeletePlan> {
        let item = self.items.get(index)?;
        Some(match item.urgency_rule_id {
            None => DeletePlan::Local,
            Some(id) => DeletePlan::Remote(id),
        })
    }

    /// Drop the row, keeping the edit cursor in range
    pub fn remove(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        self.items.remove(index);
        self.active = match self.active.take() {
            Some(a) if a.index == index => None,
            Some(mut a) => {
                if a.index > index {
                    a.index -= 1;
                }
                Some(a)
            }
            None => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(id: i32, text: &str) -> UrgencyRule {
        UrgencyRule {
            urgency_rule_id: Some(id),
            urgency_rule_text: text.to_string(),
            created_datetime_utc: "2024-01-01T00:00:00Z".to_string(),
            updated_datetime_utc: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    fn list_of(texts: &[&str]) -> RuleList {
        let mut list = RuleList::new();
        list.replace_all(
            texts
                .iter()
                .enumerate()
                .map(|(i, t)| rule(i as i32 + 1, t))
                .collect(),
        );
        list
    }

    #[test]
    fn draft_then_escape_restores_original_list() {
        let mut list = list_of(&["Rule A", "Rule B"]);
        list.add_draft();
        assert_eq!(list.len(), 3);
        assert_eq!(list.active_index(), Some(2));

        list.set_text(2, "half-typed".to_string());
        list.cancel(2);

        assert_eq!(list.len(), 2);
        assert_eq!(list.active_index(), None);
        let texts: Vec<_> = list.items().iter().map(|r| r.urgency_rule_text.as_str()).collect();
        assert_eq!(texts, vec!["Rule A", "Rule B"]);
    }

    #[test]
    fn escape_restores_persisted_text_exactly() {
        let mut list = list_of(&["Do not ignore chest pain"]);
        list.begin_edit(0);
        list.set_text(0, "mangled".to_string());
        list.cancel(0);
        assert_eq!(list.items()[0].urgency_rule_text, "Do not ignore chest pain");
        assert_eq!(list.active_index(), None);
    }

    #[test]
    fn only_one_row_editable_at_a_time() {
        let mut list = list_of(&["a", "b"]);
        list.begin_edit(0);
        list.begin_edit(1);
        assert_eq!(list.active_index(), Some(0));
        // re-entering the same row keeps the cursor
        list.begin_edit(0);
        assert_eq!(list.active_index(), Some(0));
    }

    #[test]
    fn begin_edit_out_of_range_is_ignored() {
        let mut list = list_of(&["a"]);
        list.begin_edit(5);
        assert_eq!(list.active_index(), None);
    }

    #[test]
    fn add_draft_reuses_trailing_draft() {
        let mut list = list_of(&["a"]);
        list.add_draft();
        list.commit(1);
        // commit cleared the cursor but the save has not landed; the tail is
        // still a draft, so "New" re-activates it
        list.add_draft();
        assert_eq!(list.len(), 2);
        assert_eq!(list.active_index(), Some(1));
    }

    #[test]
    fn commit_classifies_create_vs_update() {
        let mut list = list_of(&["existing"]);
        list.begin_edit(0);
        list.set_text(0, "changed".to_string());
        assert_eq!(
            list.commit(0),
            Some(CommitTarget::Update(1, "changed".to_string()))
        );
        assert_eq!(list.active_index(), None);

        list.add_draft();
        list.set_text(1, "fresh".to_string());
        assert_eq!(list.commit(1), Some(CommitTarget::Create("fresh".to_string())));
    }

    #[test]
    fn commit_without_active_edit_is_none() {
        let mut list = list_of(&["a"]);
        assert_eq!(list.commit(0), None);
    }

    #[test]
    fn failed_commit_leaves_edited_text_in_place() {
        let mut list = list_of(&["original"]);
        list.begin_edit(0);
        list.set_text(0, "edited".to_string());
        let _ = list.commit(0);
        // no apply_saved: the server call failed; text stays edited
        assert_eq!(list.items()[0].urgency_rule_text, "edited");
        assert_eq!(list.active_index(), None);
    }

    #[test]
    fn apply_saved_takes_server_record() {
        let mut list = list_of(&["a"]);
        list.add_draft();
        list.set_text(1, "new rule".to_string());
        let _ = list.commit(1);
        list.apply_saved(1, rule(42, "new rule"));
        assert_eq!(list.items()[1].urgency_rule_id, Some(42));
        assert!(!list.items()[1].is_draft());
    }

    #[test]
    fn delete_plan_is_local_for_drafts_remote_otherwise() {
        let mut list = list_of(&["a"]);
        list.add_draft();
        assert_eq!(list.delete_plan(1), Some(DeletePlan::Local));
        assert_eq!(list.delete_plan(0), Some(DeletePlan::Remote(1)));
        assert_eq!(list.delete_plan(9), None);
    }

    #[test]
    fn remove_shifts_cursor_down() {
        let mut list = list_of(&["a", "b", "c"]);
        list.begin_edit(2);
        list.remove(0);
        assert_eq!(list.active_index(), Some(1));
        assert_eq!(list.items()[1].urgency_rule_text, "c");
    }

    #[test]
    fn remove_active_row_clears_cursor() {
        let mut list = list_of(&["a", "b"]);
        list.begin_edit(1);
        list.remove(1);
        assert_eq!(list.active_index(), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn blur_cancels_persisted_but_not_draft() {
        let mut list = list_of(&["keep me"]);
        list.begin_edit(0);
        list.set_text(0, "half".to_string());
        list.blur(0);
        assert_eq!(list.items()[0].urgency_rule_text, "keep me");
        assert_eq!(list.active_index(), None);

        list.add_draft();
        list.set_text(1, "typing a draft".to_string());
        list.blur(1);
        // draft survives focus loss, still in edit mode
        assert_eq!(list.len(), 2);
        assert_eq!(list.active_index(), Some(1));
        assert_eq!(list.items()[1].urgency_rule_text, "typing a draft");
    }
}
