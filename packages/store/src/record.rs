//! # The `Record` abstraction shared by users and posts
//!
//! [`crate::ListView`], [`crate::DraftForm`] and [`crate::ResourceClient`] are
//! generic over a [`Record`]. The trait ties a record type to its draft, patch and
//! filter types and describes the few rules the controllers need:
//!
//! - how a record is built from a draft plus an id ([`Record::from_draft`]),
//! - how a patch is layered over an existing record ([`Record::apply`]), keeping
//!   every field the patch leaves out,
//! - how the form is pre-filled from a record ([`Record::to_draft`]).
//!
//! [`Filter`] narrows the collection to the filtered set. Users are filtered by a
//! free-text [`TextFilter`](crate::TextFilter), posts by an optional author
//! ([`RelationFilter`](crate::RelationFilter)).

use std::fmt::Debug;

use crate::models::{Id, Post, PostDraft, PostPatch, Role, User, UserDraft, UserPatch};
use crate::filter::{RelationFilter, TextFilter};

/// A predicate over records that also knows how to seed a fresh draft.
pub trait Filter<R: Record>: Clone + Debug + Default + PartialEq {
    fn matches(&self, record: &R) -> bool;

    /// Pre-fill a new draft from the filter (e.g. the author of a filtered post list).
    fn seed(&self, _draft: &mut R::Draft) {}
}

/// A partial record. Only the id is needed generically.
pub trait Patch: Clone + Debug + Default + PartialEq {
    fn id(&self) -> Option<Id>;

    fn set_id(&mut self, id: Id);
}

/// An entity managed by a list view.
pub trait Record: Clone + Debug + PartialEq {
    type Draft: Clone + Debug + Default + PartialEq;
    type Patch: Patch + From<Self::Draft>;
    type Filter: Filter<Self>;

    /// Singular noun used in prompts and log lines ("user", "post").
    const NOUN: &'static str;

    /// Message shown when the initial load fails.
    const LOAD_ERROR: &'static str;

    fn id(&self) -> Id;

    fn from_draft(id: Id, draft: Self::Draft) -> Self;

    fn to_draft(&self) -> Self::Draft;

    /// Overwrite every field the patch carries. The id is never changed.
    fn apply(&mut self, patch: &Self::Patch);

    /// Hook run on every record of a fresh load.
    fn loaded(self) -> Self {
        self
    }

    /// Whether the draft has every field the form requires.
    fn validate(_draft: &Self::Draft) -> Result<(), String> {
        Ok(())
    }
}

impl Patch for UserPatch {
    fn id(&self) -> Option<Id> {
        self.id
    }

    fn set_id(&mut self, id: Id) {
        self.id = Some(id);
    }
}

impl Patch for PostPatch {
    fn id(&self) -> Option<Id> {
        self.id
    }

    fn set_id(&mut self, id: Id) {
        self.id = Some(id);
    }
}

impl Record for User {
    type Draft = UserDraft;
    type Patch = UserPatch;
    type Filter = TextFilter;

    const NOUN: &'static str = "user";
    const LOAD_ERROR: &'static str = "An unexpected error occurred while fetching users.";

    fn id(&self) -> Id {
        self.id
    }

    fn from_draft(id: Id, draft: UserDraft) -> Self {
        Self {
            id,
            name: draft.name,
            username: draft.username,
            email: draft.email,
            role: draft.role,
        }
    }

    fn to_draft(&self) -> UserDraft {
        UserDraft {
            name: self.name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }

    fn apply(&mut self, patch: &UserPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(username) = &patch.username {
            self.username = username.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
    }

    fn loaded(mut self) -> Self {
        self.role = Role::demo_for(self.id);
        self
    }

    fn validate(draft: &UserDraft) -> Result<(), String> {
        if draft.name.trim().is_empty() {
            return Err("Full name is required".to_string());
        }
        if draft.username.trim().is_empty() {
            return Err("Username is required".to_string());
        }
        if !draft.email.contains('@') {
            return Err("A valid email is required".to_string());
        }
        Ok(())
    }
}

impl Record for Post {
    type Draft = PostDraft;
    type Patch = PostPatch;
    type Filter = RelationFilter;

    const NOUN: &'static str = "post";
    const LOAD_ERROR: &'static str = "Unexpected error while fetching posts.";

    fn id(&self) -> Id {
        self.id
    }

    fn from_draft(id: Id, draft: PostDraft) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            title: draft.title,
            body: draft.body,
        }
    }

    fn to_draft(&self) -> PostDraft {
        PostDraft {
            user_id: self.user_id,
            title: self.title.clone(),
            body: self.body.clone(),
        }
    }

    fn apply(&mut self, patch: &PostPatch) {
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(body) = &patch.body {
            self.body = Some(body.clone());
        }
    }

    fn validate(draft: &PostDraft) -> Result<(), String> {
        if draft.title.trim().is_empty() {
            return Err("Title is required".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Post {
        Post {
            id: 4,
            user_id: 1,
            title: "old".to_string(),
            body: Some("keep me".to_string()),
        }
    }

    #[test]
    fn test_apply_keeps_omitted_fields() {
        let mut p = post();
        p.apply(&PostPatch {
            title: Some("new".to_string()),
            ..Default::default()
        });
        assert_eq!(p.title, "new");
        assert_eq!(p.body.as_deref(), Some("keep me"));
        assert_eq!(p.user_id, 1);
    }

    #[test]
    fn test_apply_never_changes_id() {
        let mut p = post();
        p.apply(&PostPatch {
            id: Some(99),
            ..Default::default()
        });
        assert_eq!(p.id, 4);
    }

    #[test]
    fn test_draft_roundtrip_through_record() {
        let p = post();
        assert_eq!(Post::from_draft(p.id, p.to_draft()), p);
    }

    #[test]
    fn test_loaded_user_gets_demo_role() {
        let u = User {
            id: 6,
            name: "A".to_string(),
            username: "a".to_string(),
            email: "a@b".to_string(),
            role: Role::User,
        };
        assert_eq!(u.loaded().role, Role::Admin);
    }

    #[test]
    fn test_user_validation() {
        let mut draft = UserDraft {
            name: "Jane".to_string(),
            username: "jane".to_string(),
            email: "jane@example.com".to_string(),
            role: Role::User,
        };
        assert!(User::validate(&draft).is_ok());
        draft.email = "nope".to_string();
        assert!(User::validate(&draft).is_err());
        draft.email = "jane@example.com".to_string();
        draft.username = "  ".to_string();
        assert!(User::validate(&draft).is_err());
    }

    #[test]
    fn test_post_requires_title() {
        assert!(Post::validate(&PostDraft::default()).is_err());
    }
}
