//! Local record list and selection state.
//!
//! The roster is the console's copy of the server's record list plus the
//! selected subset used for the email action. Everything here is pure
//! state manipulation, kept free of I/O so it can be tested directly.

use api_protocol::types::ApiUser;
use uuid::Uuid;

/// Appends a server-confirmed new record to the list.
pub fn merge_created(mut users: Vec<ApiUser>, user: ApiUser) -> Vec<ApiUser> {
    users.push(user);
    users
}

/// Replaces the record matching the server-confirmed record's ID.
///
/// A record that is no longer present is left alone; the next full fetch
/// reconciles.
pub fn merge_updated(mut users: Vec<ApiUser>, user: ApiUser) -> Vec<ApiUser> {
    if let Some(slot) = users.iter_mut().find(|u| u.id == user.id) {
        *slot = user;
    }
    users
}

/// Removes the record with the given ID.
pub fn remove_by_id(mut users: Vec<ApiUser>, id: Uuid) -> Vec<ApiUser> {
    users.retain(|u| u.id != id);
    users
}

/// The record list and the selected subset.
#[derive(Debug, Default)]
pub struct Roster {
    users: Vec<ApiUser>,
    selected: Vec<ApiUser>,
}

impl Roster {
    /// Creates a roster from a fetched record list, nothing selected.
    pub fn new(users: Vec<ApiUser>) -> Self {
        Self {
            users,
            selected: Vec::new(),
        }
    }

    /// All records, in list order.
    pub fn users(&self) -> &[ApiUser] {
        &self.users
    }

    /// The selected subset, in list order.
    pub fn selected(&self) -> &[ApiUser] {
        &self.selected
    }

    /// Returns true if the record with this ID is selected.
    pub fn is_selected(&self, id: Uuid) -> bool {
        self.selected.iter().any(|u| u.id == id)
    }

    /// Selects every record, in list order.
    pub fn select_all(&mut self) {
        self.selected = self.users.clone();
    }

    /// Clears the selected subset.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Selects the record with this ID.
    ///
    /// The record is inserted at the position matching its index in the
    /// full list, so the subset stays in list order regardless of the
    /// order records were selected in. Returns false for an unknown or
    /// already-selected ID.
    pub fn select(&mut self, id: Uuid) -> bool {
        if self.is_selected(id) {
            return false;
        }
        let Some(list_index) = self.users.iter().position(|u| u.id == id) else {
            return false;
        };

        let insert_at = self
            .selected
            .iter()
            .take_while(|s| {
                self.users.iter().position(|u| u.id == s.id).unwrap_or(usize::MAX) < list_index
            })
            .count();
        self.selected.insert(insert_at, self.users[list_index].clone());
        true
    }

    /// Unselects the record with this ID. Returns false if it was not
    /// selected.
    pub fn unselect(&mut self, id: Uuid) -> bool {
        let before = self.selected.len();
        self.selected.retain(|u| u.id != id);
        self.selected.len() != before
    }

    /// Applies a server-confirmed create to the local list.
    pub fn apply_created(&mut self, user: ApiUser) {
        self.users = merge_created(std::mem::take(&mut self.users), user);
    }

    /// Applies a server-confirmed update to the local list.
    ///
    /// The selected subset is intentionally left stale; it is a transient
    /// copy and the email action sends whatever was selected.
    pub fn apply_updated(&mut self, user: ApiUser) {
        self.users = merge_updated(std::mem::take(&mut self.users), user);
    }

    /// Applies a server-confirmed delete to the local list.
    pub fn apply_deleted(&mut self, id: Uuid) {
        self.users = remove_by_id(std::mem::take(&mut self.users), id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(name: &str) -> ApiUser {
        let now = Utc::now();
        ApiUser {
            id: Uuid::new_v4(),
            name: name.to_string(),
            phone_number: format!("123-456-{:04}", name.len()),
            email: format!("{name}@example.com"),
            hobbies: "chess".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn roster_of(names: &[&str]) -> Roster {
        Roster::new(names.iter().map(|n| user(n)).collect())
    }

    #[test]
    fn test_select_all_matches_list_order_and_size() {
        let mut roster = roster_of(&["a", "b", "c"]);
        roster.select_all();

        assert_eq!(roster.selected().len(), 3);
        let list_ids: Vec<Uuid> = roster.users().iter().map(|u| u.id).collect();
        let selected_ids: Vec<Uuid> = roster.selected().iter().map(|u| u.id).collect();
        assert_eq!(selected_ids, list_ids);
    }

    #[test]
    fn test_clear_selection_empties_subset() {
        let mut roster = roster_of(&["a", "b"]);
        roster.select_all();
        roster.clear_selection();
        assert!(roster.selected().is_empty());
    }

    #[test]
    fn test_unselect_removes_exactly_that_record() {
        let mut roster = roster_of(&["a", "b", "c"]);
        roster.select_all();

        let middle = roster.users()[1].id;
        assert!(roster.unselect(middle));

        let selected_ids: Vec<Uuid> = roster.selected().iter().map(|u| u.id).collect();
        assert_eq!(
            selected_ids,
            vec![roster.users()[0].id, roster.users()[2].id]
        );
    }

    #[test]
    fn test_selection_keeps_list_order_regardless_of_click_order() {
        let mut roster = roster_of(&["a", "b", "c", "d"]);
        let ids: Vec<Uuid> = roster.users().iter().map(|u| u.id).collect();

        // Select out of order: d, a, c
        assert!(roster.select(ids[3]));
        assert!(roster.select(ids[0]));
        assert!(roster.select(ids[2]));

        let selected_ids: Vec<Uuid> = roster.selected().iter().map(|u| u.id).collect();
        assert_eq!(selected_ids, vec![ids[0], ids[2], ids[3]]);
    }

    #[test]
    fn test_select_unknown_or_duplicate_is_a_no_op() {
        let mut roster = roster_of(&["a"]);
        let id = roster.users()[0].id;

        assert!(roster.select(id));
        assert!(!roster.select(id));
        assert!(!roster.select(Uuid::new_v4()));
        assert_eq!(roster.selected().len(), 1);
    }

    #[test]
    fn test_merge_created_appends() {
        let list = vec![user("a")];
        let new = user("b");
        let merged = merge_created(list, new.clone());
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[1], new);
    }

    #[test]
    fn test_merge_updated_replaces_by_id_in_place() {
        let a = user("a");
        let b = user("b");
        let mut replacement = a.clone();
        replacement.hobbies = "chess, reading".to_string();

        let merged = merge_updated(vec![a.clone(), b.clone()], replacement.clone());
        assert_eq!(merged, vec![replacement, b]);
    }

    #[test]
    fn test_merge_updated_with_unknown_id_changes_nothing() {
        let a = user("a");
        let merged = merge_updated(vec![a.clone()], user("ghost"));
        assert_eq!(merged, vec![a]);
    }

    #[test]
    fn test_remove_by_id() {
        let a = user("a");
        let b = user("b");
        let remaining = remove_by_id(vec![a.clone(), b.clone()], a.id);
        assert_eq!(remaining, vec![b]);
    }

    #[test]
    fn test_deleting_does_not_rewrite_selection() {
        let mut roster = roster_of(&["a", "b"]);
        roster.select_all();
        let gone = roster.users()[0].id;

        roster.apply_deleted(gone);

        assert_eq!(roster.users().len(), 1);
        // Selection is an acknowledged stale copy.
        assert_eq!(roster.selected().len(), 2);
    }
}
