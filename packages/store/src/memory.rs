use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::client::ResourceClient;
use crate::error::ClientError;
use crate::models::Id;
use crate::record::{Patch, Record};

/// Which client call a [`MemoryClient`] should fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

#[derive(Debug)]
struct Inner<R> {
    records: Vec<R>,
    next_id: Id,
    failing: HashSet<Operation>,
    omit_ids: bool,
    calls: Vec<Operation>,
}

/// In-memory ResourceClient for testing and offline runs.
///
/// Behaves like a JSONPlaceholder-style service: `create` answers with the new
/// id, `update` echoes back only the fields it was sent. Calls can be made to
/// fail per operation, and created ids can be withheld, to exercise the
/// controller's error and placeholder paths.
#[derive(Clone, Debug)]
pub struct MemoryClient<R> {
    inner: Arc<Mutex<Inner<R>>>,
}

impl<R: Record> MemoryClient<R> {
    pub fn new(records: Vec<R>) -> Self {
        let next_id = records.iter().map(Record::id).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(Mutex::new(Inner {
                records,
                next_id,
                failing: HashSet::new(),
                omit_ids: false,
                calls: Vec::new(),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<R>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make every subsequent call of `op` fail (or succeed again).
    pub fn set_failing(&self, op: Operation, failing: bool) {
        let mut inner = self.lock();
        if failing {
            inner.failing.insert(op);
        } else {
            inner.failing.remove(&op);
        }
    }

    /// Answer `create` without an id.
    pub fn set_omit_ids(&self, omit: bool) {
        self.lock().omit_ids = omit;
    }

    /// Snapshot of the service-side collection.
    pub fn records(&self) -> Vec<R> {
        self.lock().records.clone()
    }

    /// Every call received so far, failed ones included.
    pub fn calls(&self) -> Vec<Operation> {
        self.lock().calls.clone()
    }

    fn begin(&self, op: Operation) -> Result<MutexGuard<'_, Inner<R>>, ClientError> {
        let mut inner = self.lock();
        inner.calls.push(op);
        if inner.failing.contains(&op) {
            return Err(ClientError::Status { status: 500 });
        }
        Ok(inner)
    }
}

impl<R: Record> Default for MemoryClient<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R: Record> ResourceClient<R> for MemoryClient<R> {
    async fn list(&self) -> Result<Vec<R>, ClientError> {
        let inner = self.begin(Operation::List)?;
        Ok(inner.records.clone())
    }

    async fn create(&self, draft: &R::Draft) -> Result<R::Patch, ClientError> {
        let mut inner = self.begin(Operation::Create)?;
        let id = inner.next_id;
        inner.next_id += 1;
        inner.records.push(R::from_draft(id, draft.clone()));

        let mut reply = R::Patch::from(draft.clone());
        if !inner.omit_ids {
            reply.set_id(id);
        }
        Ok(reply)
    }

    async fn update(&self, id: Id, patch: &R::Patch) -> Result<R::Patch, ClientError> {
        let mut inner = self.begin(Operation::Update)?;
        let record = inner
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(ClientError::NotFound(id))?;
        record.apply(patch);

        let mut reply = patch.clone();
        reply.set_id(id);
        Ok(reply)
    }

    async fn delete(&self, id: Id) -> Result<(), ClientError> {
        let mut inner = self.begin(Operation::Delete)?;
        let before = inner.records.len();
        inner.records.retain(|r| r.id() != id);
        if inner.records.len() == before {
            return Err(ClientError::NotFound(id));
        }
        Ok(())
    }
}
