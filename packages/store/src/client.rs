//! # The `ResourceClient` seam
//!
//! Everything the controllers know about the remote service goes through
//! [`ResourceClient`]: list, create, update and delete against one collection.
//! Implementations live elsewhere: [`crate::MemoryClient`] for tests and offline
//! runs, and the HTTP client in the `api` crate.
//!
//! Responses are partial on purpose. `create` and `update` return the record's
//! [`Patch`](crate::Record::Patch) type because the service may omit fields (or
//! the id) from its reply; the caller decides how to fill the gaps.

use std::future::Future;

use futures::future::join;

use crate::error::ClientError;
use crate::models::Id;
use crate::record::Record;

/// Async CRUD access to one remote collection.
pub trait ResourceClient<R: Record> {
    fn list(&self) -> impl Future<Output = Result<Vec<R>, ClientError>>;

    fn create(
        &self,
        draft: &R::Draft,
    ) -> impl Future<Output = Result<R::Patch, ClientError>>;

    fn update(
        &self,
        id: Id,
        patch: &R::Patch,
    ) -> impl Future<Output = Result<R::Patch, ClientError>>;

    fn delete(&self, id: Id) -> impl Future<Output = Result<(), ClientError>>;
}

/// List two collections concurrently, succeeding only if both lists succeed.
///
/// Used for views that join a second collection for display (posts show their
/// authors). Either failure fails the whole load; partial results are dropped.
pub async fn list_joined<R, U, C, D>(own: &C, related: &D) -> Result<(Vec<R>, Vec<U>), ClientError>
where
    R: Record,
    U: Record,
    C: ResourceClient<R>,
    D: ResourceClient<U>,
{
    let (own, related) = join(own.list(), related.list()).await;
    Ok((own?, related?))
}
