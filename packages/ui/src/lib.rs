//! This crate contains all shared UI for the workspace.
//!
//! Components here receive plain data and callbacks, or a `Signal` over a
//! `store` form, and never talk to the network themselves.

mod platform;
pub use platform::{current_time, scroll_to_top, sleep};

mod navbar;
pub use navbar::Navbar;

mod modal;
pub use modal::{ConfirmDialog, ModalOverlay};

mod notice;
pub use notice::NoticeBanner;

mod pagination;
pub use pagination::Pagination;

mod users;
pub use users::{UserForm, UserTable};

mod posts;
pub use posts::{PostForm, PostTable};

pub mod activity_log;
pub use activity_log::{log_activity, use_activity_log, ActivityLog, ActivityLogProvider, LogLevel};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle, ActivityToast};
