//! # Domain models for users and posts
//!
//! Defines the records held by a [`crate::ListView`] and the shapes that travel to
//! and from the remote service. Every record type comes in three flavours:
//!
//! | Shape | Users | Posts | Meaning |
//! |-------|-------|-------|---------|
//! | Record | [`User`] | [`Post`] | A persisted entity with an [`Id`]. |
//! | Draft | [`UserDraft`] | [`PostDraft`] | The form contents, a record without its id. |
//! | Patch | [`UserPatch`] | [`PostPatch`] | Every field optional. Used for partial update requests and for service responses that may omit fields. |
//!
//! Wire keys are camelCase (`userId`), matching the JSONPlaceholder-style service.
//!
//! [`Role`] is a presentation-only attribute of a user. It never crosses the wire:
//! it is derived from the id on load ([`Role::demo_for`]) and afterwards carried
//! locally through drafts and patches.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a record within its collection.
///
/// Server-issued ids are positive; placeholder ids synthesized on the client are
/// negative (see [`crate::PlaceholderIds`]).
pub type Id = i64;

/// Coarse demo role shown next to a user. Not persisted by the service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    /// The demo rule: every third user id is an admin.
    pub fn demo_for(id: Id) -> Self {
        if id % 3 == 0 {
            Role::Admin
        } else {
            Role::User
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
        }
    }

    /// Parse the label used by the role selector. Unknown labels fall back to `User`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Admin" => Role::Admin,
            _ => Role::User,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user account as listed by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(skip)]
    pub role: Role,
}

/// Form contents for creating or editing a [`User`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserDraft {
    pub name: String,
    pub username: String,
    pub email: String,
    pub role: Role,
}

/// Partial user: the body of an update request, or a service response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip)]
    pub role: Option<Role>,
}

impl From<UserDraft> for UserPatch {
    fn from(draft: UserDraft) -> Self {
        Self {
            id: None,
            name: Some(draft.name),
            username: Some(draft.username),
            email: Some(draft.email),
            role: Some(draft.role),
        }
    }
}

/// A blog post as listed by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Id,
    pub user_id: Id,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Form contents for creating or editing a [`Post`].
#[derive(Clone, Debug, PartialEq)]
pub struct PostDraft {
    pub user_id: Id,
    pub title: String,
    pub body: Option<String>,
}

impl Default for PostDraft {
    fn default() -> Self {
        Self {
            user_id: 1,
            title: String::new(),
            body: Some(String::new()),
        }
    }
}

/// Partial post: the body of an update request, or a service response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl From<PostDraft> for PostPatch {
    fn from(draft: PostDraft) -> Self {
        Self {
            id: None,
            user_id: Some(draft.user_id),
            title: Some(draft.title),
            body: draft.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_role_rule() {
        assert_eq!(Role::demo_for(3), Role::Admin);
        assert_eq!(Role::demo_for(9), Role::Admin);
        assert_eq!(Role::demo_for(1), Role::User);
        assert_eq!(Role::demo_for(10), Role::User);
    }

    #[test]
    fn test_post_uses_camel_case_keys() {
        let post: Post =
            serde_json::from_str(r#"{"id":7,"userId":2,"title":"hi","body":"there"}"#).unwrap();
        assert_eq!(post.user_id, 2);
        assert_eq!(post.body.as_deref(), Some("there"));

        let json = serde_json::to_value(PostPatch {
            title: Some("X".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "title": "X" }));
    }

    #[test]
    fn test_role_never_crosses_the_wire() {
        let patch = UserPatch::from(UserDraft {
            name: "Jane".to_string(),
            username: "jane".to_string(),
            email: "jane@example.com".to_string(),
            role: Role::Admin,
        });
        let json = serde_json::to_value(&patch).unwrap();
        assert!(json.get("role").is_none());

        let response: UserPatch = serde_json::from_str(r#"{"id":11}"#).unwrap();
        assert_eq!(response.id, Some(11));
        assert!(response.name.is_none());
        assert!(response.role.is_none());
    }
}
