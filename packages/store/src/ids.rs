use crate::models::Id;

/// Source of client-side placeholder ids for records the service created
/// without returning an id.
///
/// Yields `-1, -2, -3, …`, so placeholders never collide with positive
/// server-issued ids nor with each other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaceholderIds {
    next: Id,
}

impl Default for PlaceholderIds {
    fn default() -> Self {
        Self { next: -1 }
    }
}

impl PlaceholderIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> Id {
        let id = self.next;
        self.next -= 1;
        id
    }

    pub fn is_placeholder(id: Id) -> bool {
        id < 0
    }
}
