//! Filters that narrow a collection to its filtered set.

use crate::models::{Id, Post, PostDraft, User};
use crate::record::Filter;

/// Case-insensitive substring search over a user's id, name, username and email.
///
/// The term is trimmed; an empty term matches every user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextFilter {
    term: String,
}

impl TextFilter {
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }

    /// The term as typed by the user.
    pub fn term(&self) -> &str {
        &self.term
    }

    fn needle(&self) -> String {
        self.term.trim().to_lowercase()
    }
}

impl Filter<User> for TextFilter {
    fn matches(&self, user: &User) -> bool {
        let needle = self.needle();
        if needle.is_empty() {
            return true;
        }
        user.id.to_string().contains(&needle)
            || user.name.to_lowercase().contains(&needle)
            || user.username.to_lowercase().contains(&needle)
            || user.email.to_lowercase().contains(&needle)
    }
}

/// Restricts posts to a single author, taken from the navigation context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RelationFilter {
    user_id: Option<Id>,
}

impl RelationFilter {
    pub fn new(user_id: Option<Id>) -> Self {
        Self { user_id }
    }

    /// Parse the `userId` query parameter. Missing, empty, zero or non-numeric
    /// values mean "no filter".
    pub fn from_query(param: &str) -> Self {
        let user_id = param.trim().parse::<Id>().ok().filter(|id| *id != 0);
        Self { user_id }
    }

    pub fn user_id(&self) -> Option<Id> {
        self.user_id
    }
}

impl Filter<Post> for RelationFilter {
    fn matches(&self, post: &Post) -> bool {
        match self.user_id {
            Some(user_id) => post.user_id == user_id,
            None => true,
        }
    }

    fn seed(&self, draft: &mut PostDraft) {
        if let Some(user_id) = self.user_id {
            draft.user_id = user_id;
        }
    }
}
