pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod form;
pub mod models;
pub mod pagination;
pub mod record;
pub mod view;

mod client;
mod ids;
mod memory;

pub use client::{list_joined, ResourceClient};
pub use config::AdminConfig;
pub use controller::{DeleteOutcome, ListController};
pub use error::{ClientError, LoadError, MutationError};
pub use filter::{RelationFilter, TextFilter};
pub use form::{DraftForm, FormMode, Settled, Submission};
pub use ids::PlaceholderIds;
pub use memory::{MemoryClient, Operation};
pub use models::{Id, Post, PostDraft, PostPatch, Role, User, UserDraft, UserPatch};
pub use pagination::PageLayout;
pub use record::{Filter, Patch, Record};
pub use view::{ListView, LoadPhase};
