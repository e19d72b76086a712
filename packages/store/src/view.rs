//! # List view-state controller
//!
//! [`ListView`] owns the in-memory copy of one collection together with its
//! filter and pagination state, and reconciles that copy after every load and
//! mutation. It never talks to the network: callers dispatch requests through a
//! [`crate::ResourceClient`] and hand the outcome back (`finish_load`, `settle`,
//! `finish_delete`).
//!
//! ## Derived state
//!
//! The filtered set is cached as a list of indices into the collection and is
//! recomputed only on these events:
//!
//! | Event | Page handling |
//! |-------|---------------|
//! | load complete | page 1 |
//! | filter changed | page 1 if the filtered set changed |
//! | page size changed | page 1 |
//! | create / update | clamped down if needed |
//! | delete | clamped down to the new last page, never reset to 1 |
//!
//! After each event `1 <= page <= total_pages` holds and the visible slice is
//! `filtered[(page - 1) * page_size .. page * page_size]`.
//!
//! ## Failures
//!
//! A failed load moves the view to [`LoadPhase::Failed`] for good. A failed
//! mutation leaves the collection untouched and sets a transient
//! [`notice`](ListView::notice) that the UI shows until it is dismissed or the
//! next mutation succeeds.

use tracing::{debug, info, warn};

use crate::error::{ClientError, LoadError, MutationError};
use crate::form::{DraftForm, Settled};
use crate::ids::PlaceholderIds;
use crate::models::Id;
use crate::pagination::{self, PageLayout};
use crate::record::{Filter, Patch, Record};

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListView<R: Record> {
    records: Vec<R>,
    filter: R::Filter,
    filtered: Vec<usize>,
    page: usize,
    page_size: usize,
    phase: LoadPhase,
    notice: Option<String>,
    placeholder_ids: PlaceholderIds,
}

impl<R: Record> Default for ListView<R> {
    fn default() -> Self {
        Self::new(R::Filter::default(), DEFAULT_PAGE_SIZE)
    }
}

impl<R: Record> ListView<R> {
    pub fn new(filter: R::Filter, page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            filter,
            filtered: Vec::new(),
            page: 1,
            page_size: page_size.max(1),
            phase: LoadPhase::Loading,
            notice: None,
            placeholder_ids: PlaceholderIds::new(),
        }
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn get(&self, id: Id) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn filter(&self) -> &R::Filter {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn filtered(&self) -> impl Iterator<Item = &R> {
        self.filtered.iter().map(|&i| &self.records[i])
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered.len(), self.page_size)
    }

    /// The page-sized window of the filtered set currently shown.
    pub fn visible(&self) -> Vec<&R> {
        let bounds = pagination::slice_bounds(self.filtered.len(), self.page, self.page_size);
        self.filtered[bounds]
            .iter()
            .map(|&i| &self.records[i])
            .collect()
    }

    pub fn layout(&self) -> PageLayout {
        pagination::present(self.filtered.len(), self.page, self.page_size)
    }

    /// Apply the result of the initial load. Results arriving after the view has
    /// already settled are discarded.
    pub fn finish_load(&mut self, result: Result<Vec<R>, ClientError>) -> Result<(), LoadError> {
        if self.phase != LoadPhase::Loading {
            debug!(noun = R::NOUN, "discarding late load result");
            return Ok(());
        }
        match result {
            Ok(records) => {
                info!(noun = R::NOUN, count = records.len(), "collection loaded");
                self.records = records.into_iter().map(R::loaded).collect();
                self.phase = LoadPhase::Ready;
                self.refilter();
                self.page = 1;
                Ok(())
            }
            Err(cause) => {
                warn!(noun = R::NOUN, error = %cause, "collection load failed");
                self.phase = LoadPhase::Failed(R::LOAD_ERROR.to_string());
                Err(LoadError {
                    message: R::LOAD_ERROR.to_string(),
                    cause,
                })
            }
        }
    }

    /// Replace the filter. Goes back to page 1 when the filtered set changes.
    pub fn apply_filter(&mut self, filter: R::Filter) {
        if filter == self.filter {
            return;
        }
        self.filter = filter;
        let before = std::mem::take(&mut self.filtered);
        self.refilter();
        if self.filtered != before {
            self.page = 1;
        }
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Move to `page`, clamped into range. Returns whether the page changed.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let target = pagination::clamp_page(page, self.total_pages());
        if target == self.page {
            return false;
        }
        self.page = target;
        true
    }

    pub fn go_to_first(&mut self) -> bool {
        self.go_to_page(1)
    }

    pub fn go_to_last(&mut self) -> bool {
        self.go_to_page(self.total_pages())
    }

    pub fn go_to_prev(&mut self) -> bool {
        self.go_to_page(self.page.saturating_sub(1))
    }

    pub fn go_to_next(&mut self) -> bool {
        self.go_to_page(self.page + 1)
    }

    /// Reconcile a dispatched create or update. Returns the id of the affected
    /// record.
    pub fn settle(&mut self, settled: Settled<R>) -> Result<Id, MutationError> {
        match settled {
            Settled::Created { draft, reply } => self.finish_create(draft, reply),
            Settled::Updated { id, sent, reply } => self.finish_update(id, &sent, reply),
        }
    }

    pub fn finish_create(
        &mut self,
        draft: R::Draft,
        reply: Result<R::Patch, ClientError>,
    ) -> Result<Id, MutationError> {
        let reply = reply.map_err(|cause| self.fail(MutationError::Save(cause)))?;
        let id = match reply.id() {
            Some(id) => id,
            None => {
                let id = self.placeholder_ids.next_id();
                warn!(noun = R::NOUN, id, "service returned no id, using placeholder");
                id
            }
        };
        let mut record = R::from_draft(id, draft);
        record.apply(&reply);
        info!(noun = R::NOUN, id, "record created");

        self.records.insert(0, record);
        self.notice = None;
        self.reconcile();
        Ok(id)
    }

    /// Layer `existing <- sent <- reply`. Fields missing from both keep their
    /// previous values.
    pub fn finish_update(
        &mut self,
        id: Id,
        sent: &R::Patch,
        reply: Result<R::Patch, ClientError>,
    ) -> Result<Id, MutationError> {
        let reply = reply.map_err(|cause| self.fail(MutationError::Save(cause)))?;
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                record.apply(sent);
                record.apply(&reply);
                info!(noun = R::NOUN, id, "record updated");
            }
            None => warn!(noun = R::NOUN, id, "updated record is no longer listed"),
        }
        self.notice = None;
        self.reconcile();
        Ok(id)
    }

    pub fn finish_delete(&mut self, id: Id, reply: Result<(), ClientError>) -> Result<Id, MutationError> {
        reply.map_err(|cause| self.fail(MutationError::Delete(cause)))?;
        self.records.retain(|r| r.id() != id);
        info!(noun = R::NOUN, id, "record deleted");
        self.notice = None;
        self.reconcile();
        Ok(id)
    }

    /// Prompt shown before a delete is dispatched.
    pub fn delete_prompt(&self) -> String {
        format!("Are you sure you want to delete this {}?", R::NOUN)
    }

    /// [`finish_load`](Self::finish_load), then re-seed `form` from the filter.
    pub fn finish_load_with(
        &mut self,
        form: &mut DraftForm<R>,
        result: Result<Vec<R>, ClientError>,
    ) -> Result<(), LoadError> {
        self.finish_load(result)?;
        form.seed(&self.filter);
        Ok(())
    }

    /// Apply a load joined with a related collection (see [`crate::list_joined`]).
    /// Returns the related records as loaded, or nothing if the load failed or
    /// arrived late.
    pub fn finish_joined_load<U: Record>(
        &mut self,
        form: &mut DraftForm<R>,
        result: Result<(Vec<R>, Vec<U>), ClientError>,
    ) -> Result<Vec<U>, LoadError> {
        match result {
            Ok((records, related)) => {
                if self.phase != LoadPhase::Loading {
                    debug!(noun = R::NOUN, related = U::NOUN, "discarding late joined load");
                    return Ok(Vec::new());
                }
                self.finish_load_with(form, Ok(records))?;
                Ok(related.into_iter().map(U::loaded).collect())
            }
            Err(cause) => {
                debug!(noun = R::NOUN, related = U::NOUN, "combined load failed");
                self.finish_load_with(form, Err(cause))?;
                Ok(Vec::new())
            }
        }
    }

    /// Replace the filter and re-seed the defaults of new drafts from it.
    pub fn apply_filter_with(&mut self, form: &mut DraftForm<R>, filter: R::Filter) {
        form.seed(&filter);
        self.apply_filter(filter);
    }

    /// [`settle`](Self::settle), closing `form` on success and leaving it as
    /// it was on failure.
    pub fn settle_with(
        &mut self,
        form: &mut DraftForm<R>,
        settled: Settled<R>,
    ) -> Result<Id, MutationError> {
        let result = self.settle(settled);
        form.finish(result.is_ok());
        result
    }

    /// [`finish_delete`](Self::finish_delete), closing `form` if it was editing
    /// the deleted record.
    pub fn finish_delete_with(
        &mut self,
        form: &mut DraftForm<R>,
        id: Id,
        reply: Result<(), ClientError>,
    ) -> Result<Id, MutationError> {
        let id = self.finish_delete(id, reply)?;
        if form.editing_id() == Some(id) {
            form.cancel();
        }
        Ok(id)
    }

    /// Open `form` on the listed record with `id`. Returns false if it is not listed.
    pub fn edit_with(&self, form: &mut DraftForm<R>, id: Id) -> bool {
        match self.get(id) {
            Some(record) => {
                form.start_edit(record);
                true
            }
            None => false,
        }
    }

    fn fail(&mut self, error: MutationError) -> MutationError {
        warn!(noun = R::NOUN, error = ?error, "mutation failed");
        self.notice = Some(error.to_string());
        error
    }

    fn refilter(&mut self) {
        let filter = &self.filter;
        self.filtered = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| filter.matches(r))
            .map(|(i, _)| i)
            .collect();
    }

    /// Recompute the filtered set after a mutation and pull `page` back into range.
    fn reconcile(&mut self) {
        self.refilter();
        self.page = pagination::clamp_page(self.page, self.total_pages());
    }
}
