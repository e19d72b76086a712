//! # Form draft controller
//!
//! Owns the pending create/edit record for one list view. The form is in exactly
//! one [`FormMode`] at a time, so "creating" and "editing" can never both be
//! active. Edits go straight into [`DraftForm::draft_mut`]; nothing reaches the
//! collection until [`DraftForm::submission`] is dispatched and settled by the
//! [`crate::ListView`].
//!
//! A failed submit leaves mode and draft exactly as they were so the user can fix
//! and resubmit without retyping.

use tracing::debug;

use crate::client::ResourceClient;
use crate::error::{ClientError, MutationError};
use crate::models::Id;
use crate::record::{Filter, Record};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Idle,
    Creating,
    Editing(Id),
}

/// A create or update ready to be sent to the service.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission<R: Record> {
    Create(R::Draft),
    Update(Id, R::Patch),
}

/// A submission together with the service's answer.
#[derive(Clone, Debug, PartialEq)]
pub enum Settled<R: Record> {
    Created {
        draft: R::Draft,
        reply: Result<R::Patch, ClientError>,
    },
    Updated {
        id: Id,
        sent: R::Patch,
        reply: Result<R::Patch, ClientError>,
    },
}

impl<R: Record> Submission<R> {
    /// Send the submission through `client`. Failures are carried in the
    /// result, not returned, so the caller can settle them on the view.
    pub async fn dispatch<C: ResourceClient<R>>(self, client: &C) -> Settled<R> {
        match self {
            Submission::Create(draft) => {
                let reply = client.create(&draft).await;
                Settled::Created { draft, reply }
            }
            Submission::Update(id, sent) => {
                let reply = client.update(id, &sent).await;
                Settled::Updated { id, sent, reply }
            }
        }
    }
}

/// Pending form state for records of type `R`.
#[derive(Clone, Debug, PartialEq)]
pub struct DraftForm<R: Record> {
    mode: FormMode,
    draft: R::Draft,
    defaults: R::Draft,
}

impl<R: Record> Default for DraftForm<R> {
    fn default() -> Self {
        Self {
            mode: FormMode::Idle,
            draft: R::Draft::default(),
            defaults: R::Draft::default(),
        }
    }
}

impl<R: Record> DraftForm<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the defaults for new drafts from the active filter.
    pub fn seed(&mut self, filter: &R::Filter) {
        let mut defaults = R::Draft::default();
        filter.seed(&mut defaults);
        if self.mode == FormMode::Idle {
            self.draft = defaults.clone();
        }
        self.defaults = defaults;
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Idle
    }

    pub fn editing_id(&self) -> Option<Id> {
        match self.mode {
            FormMode::Editing(id) => Some(id),
            _ => None,
        }
    }

    pub fn draft(&self) -> &R::Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut R::Draft {
        &mut self.draft
    }

    pub fn defaults(&self) -> &R::Draft {
        &self.defaults
    }

    pub fn start_create(&mut self) {
        self.mode = FormMode::Creating;
        self.draft = self.defaults.clone();
    }

    pub fn start_edit(&mut self, record: &R) {
        debug!(id = record.id(), noun = R::NOUN, "editing record");
        self.mode = FormMode::Editing(record.id());
        self.draft = record.to_draft();
    }

    pub fn cancel(&mut self) {
        self.mode = FormMode::Idle;
        self.draft = self.defaults.clone();
    }

    /// The submission for the current mode, if the draft is complete.
    pub fn submission(&self) -> Result<Submission<R>, MutationError> {
        let submission = match self.mode {
            FormMode::Idle => return Err(MutationError::Idle),
            FormMode::Creating => Submission::Create(self.draft.clone()),
            FormMode::Editing(id) => Submission::Update(id, self.draft.clone().into()),
        };
        R::validate(&self.draft).map_err(MutationError::Invalid)?;
        Ok(submission)
    }

    /// Close the form after a successful submit. On failure keep everything.
    pub fn finish(&mut self, succeeded: bool) {
        if succeeded {
            self.cancel();
        }
    }
}
