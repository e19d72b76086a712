//! # API crate — HTTP access to the remote users/posts service
//!
//! Implements the [`store::ResourceClient`] contract over a JSONPlaceholder-style
//! REST service so the list controllers in `store` can run against the real
//! backend. Nothing in here knows about pagination, filters or forms.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`rest`] | [`RestClient`] (one `reqwest::Client` plus a base URL) and the per-collection [`Collection`] handles that implement `ResourceClient`. |
//!
//! ## Endpoints
//!
//! | Call | Request | Reply |
//! |------|---------|-------|
//! | `list` | `GET {base}/{users,posts}` | JSON array of records |
//! | `create` | `POST {base}/{collection}` with the draft | the created record; the `id` may be missing |
//! | `update` | `PUT {base}/{collection}/{id}` with the patch | a possibly partial record |
//! | `delete` | `DELETE {base}/{collection}/{id}` | any 2xx, body ignored |
//!
//! Every failure (transport, non-2xx status, undecodable body) surfaces as a
//! single [`store::ClientError`]. There are no retries.

pub mod rest;

pub use rest::{Collection, RestClient, RestResource};

pub use store::{AdminConfig, ClientError, Id, Post, User};
