//! Error types surfaced by resource clients and the list controller.

use thiserror::Error;

use crate::models::Id;

/// A failed call to a [`crate::ResourceClient`]. Every operation fails with one
/// of these; callers never retry automatically.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("service returned status {status}")]
    Status { status: u16 },
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("no record with id {0}")]
    NotFound(Id),
}

/// The initial load failed. The view shows [`LoadError::message`] and stays
/// in that state until it is rebuilt.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct LoadError {
    pub message: String,
    #[source]
    pub cause: ClientError,
}

/// A create, update or delete failed. The collection is left unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MutationError {
    #[error("An error occurred while saving.")]
    Save(#[source] ClientError),
    #[error("An error occurred while deleting.")]
    Delete(#[source] ClientError),
    #[error("{0}")]
    Invalid(String),
    #[error("no form is open")]
    Idle,
}
