//! Group-list state for the groups page.

#[cfg(test)]
#[path = "groups_test.rs"]
mod tests;

use crate::net::types::Group;

/// State backing the group-list view.
#[derive(Clone, Debug, Default)]
pub struct GroupsState {
    pub groups: Vec<Group>,
    pub loading: bool,
    pub error: Option<String>,
}

impl GroupsState {
    /// Replace the list with freshly fetched groups.
    pub fn set_groups(&mut self, groups: Vec<Group>) {
        self.groups = groups;
        self.loading = false;
        self.error = None;
    }

    /// Insert or update a single group, keeping the list unique by id.
    pub fn upsert(&mut self, group: Group) {
        match self.groups.iter_mut().find(|g| g.id == group.id) {
            Some(existing) => *existing = group,
            None => self.groups.push(group),
        }
    }
}
