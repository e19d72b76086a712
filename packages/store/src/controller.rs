//! # Headless list controller
//!
//! [`ListController`] bundles a [`ListView`], its [`DraftForm`] and a
//! [`ResourceClient`] into one injectable object per view instance. It runs the
//! dispatch/settle cycle through the same `ListView::*_with` steps the UI calls
//! on its signals, but owns its state directly, so it can be exercised without a
//! rendering environment.

use tracing::info;

use crate::client::{list_joined, ResourceClient};
use crate::error::{LoadError, MutationError};
use crate::form::DraftForm;
use crate::models::Id;
use crate::record::Record;
use crate::view::ListView;

/// What happened to a delete request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Id),
    /// The user declined the confirmation; nothing was sent.
    Declined,
    /// No record with that id is listed.
    Missing,
}

pub struct ListController<R: Record, C: ResourceClient<R>> {
    client: C,
    view: ListView<R>,
    form: DraftForm<R>,
}

impl<R: Record, C: ResourceClient<R>> ListController<R, C> {
    pub fn new(client: C, filter: R::Filter, page_size: usize) -> Self {
        let mut form = DraftForm::new();
        form.seed(&filter);
        Self {
            client,
            view: ListView::new(filter, page_size),
            form,
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn view(&self) -> &ListView<R> {
        &self.view
    }

    /// Filter and pagination changes go straight to the view.
    pub fn view_mut(&mut self) -> &mut ListView<R> {
        &mut self.view
    }

    pub fn form(&self) -> &DraftForm<R> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut DraftForm<R> {
        &mut self.form
    }

    /// Fetch the collection once.
    pub async fn load(&mut self) -> Result<(), LoadError> {
        let result = self.client.list().await;
        self.view.finish_load_with(&mut self.form, result)
    }

    /// Fetch the collection and a related one concurrently. Nothing is applied
    /// unless both succeed.
    pub async fn load_with<U, D>(&mut self, related: &D) -> Result<Vec<U>, LoadError>
    where
        U: Record,
        D: ResourceClient<U>,
    {
        let result = list_joined(&self.client, related).await;
        self.view.finish_joined_load(&mut self.form, result)
    }

    /// Replace the filter and re-seed the defaults of new drafts from it.
    pub fn apply_filter(&mut self, filter: R::Filter) {
        self.view.apply_filter_with(&mut self.form, filter);
    }

    pub fn start_create(&mut self) {
        self.form.start_create();
    }

    /// Open the form on the listed record with `id`. Returns false if it is not listed.
    pub fn start_edit(&mut self, id: Id) -> bool {
        self.view.edit_with(&mut self.form, id)
    }

    pub fn cancel(&mut self) {
        self.form.cancel();
    }

    /// Send the open form to the service and reconcile the collection.
    pub async fn submit(&mut self) -> Result<Id, MutationError> {
        let submission = self.form.submission()?;
        let settled = submission.dispatch(&self.client).await;
        self.view.settle_with(&mut self.form, settled)
    }

    /// Delete a record after `confirm` approves the prompt.
    pub async fn delete(
        &mut self,
        id: Id,
        confirm: impl FnOnce(&str, &R) -> bool,
    ) -> Result<DeleteOutcome, MutationError> {
        let Some(record) = self.view.get(id) else {
            return Ok(DeleteOutcome::Missing);
        };
        if !confirm(&self.view.delete_prompt(), record) {
            info!(noun = R::NOUN, id, "delete declined");
            return Ok(DeleteOutcome::Declined);
        }
        let reply = self.client.delete(id).await;
        let id = self.view.finish_delete_with(&mut self.form, id, reply)?;
        Ok(DeleteOutcome::Deleted(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{RelationFilter, TextFilter};
    use crate::form::FormMode;
    use crate::memory::{MemoryClient, Operation};
    use crate::models::{Post, PostPatch, Role, User};
    use crate::view::LoadPhase;

    fn posts(n: i64) -> Vec<Post> {
        (1..=n)
            .map(|id| Post {
                id,
                user_id: 1 + (id - 1) % 3,
                title: format!("post {id}"),
                body: Some(format!("body {id}")),
            })
            .collect()
    }

    fn users() -> Vec<User> {
        (1..=3)
            .map(|id| User {
                id,
                name: format!("User {id}"),
                username: format!("user{id}"),
                email: format!("user{id}@example.com"),
                role: Role::User,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_load_with_related_seeds_draft() {
        let posts_client = MemoryClient::new(posts(9));
        let users_client = MemoryClient::new(users());
        let mut controller =
            ListController::new(posts_client, RelationFilter::new(Some(2)), 5);

        let authors = controller.load_with(&users_client).await.unwrap();
        assert_eq!(authors.len(), 3);
        assert_eq!(authors[2].role, Role::Admin);
        assert_eq!(controller.view().filtered_len(), 3);

        controller.start_create();
        assert_eq!(controller.form().draft().user_id, 2);
    }

    #[tokio::test]
    async fn test_load_fails_if_either_fetch_fails() {
        let posts_client = MemoryClient::new(posts(9));
        let users_client = MemoryClient::new(users());
        users_client.set_failing(Operation::List, true);
        let mut controller = ListController::new(posts_client, RelationFilter::default(), 5);

        let err = controller.load_with(&users_client).await.unwrap_err();
        assert_eq!(err.message, "Unexpected error while fetching posts.");
        assert!(matches!(controller.view().phase(), LoadPhase::Failed(_)));
        assert!(controller.view().records().is_empty());
    }

    #[tokio::test]
    async fn test_create_then_edit_round() {
        let client = MemoryClient::new(posts(4));
        let mut controller = ListController::new(client.clone(), RelationFilter::default(), 5);
        controller.load().await.unwrap();

        controller.start_create();
        controller.form_mut().draft_mut().title = "hello".to_string();
        let id = controller.submit().await.unwrap();
        assert_eq!(id, 5);
        assert_eq!(controller.view().records()[0].title, "hello");
        assert_eq!(controller.form().mode(), FormMode::Idle);

        assert!(controller.start_edit(id));
        controller.form_mut().draft_mut().title = "hello again".to_string();
        controller.submit().await.unwrap();
        assert_eq!(controller.view().get(id).unwrap().title, "hello again");
        assert_eq!(client.records().last().unwrap().title, "hello again");
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_form_and_collection() {
        let client = MemoryClient::new(posts(4));
        let mut controller = ListController::new(client.clone(), RelationFilter::default(), 5);
        controller.load().await.unwrap();
        client.set_failing(Operation::Create, true);

        controller.start_create();
        controller.form_mut().draft_mut().title = "draft".to_string();
        let err = controller.submit().await.unwrap_err();
        assert!(matches!(err, MutationError::Save(_)));
        assert_eq!(controller.form().mode(), FormMode::Creating);
        assert_eq!(controller.form().draft().title, "draft");
        assert_eq!(controller.view().records().len(), 4);
        assert!(controller.view().notice().is_some());

        client.set_failing(Operation::Create, false);
        controller.submit().await.unwrap();
        assert_eq!(controller.view().records().len(), 5);
        assert!(controller.view().notice().is_none());
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_client() {
        let client = MemoryClient::<Post>::default();
        let mut controller = ListController::new(client.clone(), RelationFilter::default(), 5);
        controller.load().await.unwrap();
        controller.start_create();
        assert!(matches!(
            controller.submit().await,
            Err(MutationError::Invalid(_))
        ));
        assert_eq!(client.calls(), vec![Operation::List]);
    }

    #[tokio::test]
    async fn test_create_without_server_id() {
        let client = MemoryClient::new(posts(2));
        client.set_omit_ids(true);
        let mut controller = ListController::new(client, RelationFilter::default(), 5);
        controller.load().await.unwrap();

        controller.start_create();
        controller.form_mut().draft_mut().title = "orphan".to_string();
        assert_eq!(controller.submit().await.unwrap(), -1);
    }

    #[tokio::test]
    async fn test_update_response_without_body_keeps_body() {
        let client = MemoryClient::new(posts(3));
        let mut controller = ListController::new(client, RelationFilter::default(), 5);
        controller.load().await.unwrap();

        let sent = PostPatch {
            title: Some("X".to_string()),
            ..Default::default()
        };
        let settled = crate::form::Submission::<Post>::Update(2, sent)
            .dispatch(controller.client())
            .await;
        controller.view_mut().settle(settled).unwrap();
        let post = controller.view().get(2).unwrap();
        assert_eq!(post.title, "X");
        assert_eq!(post.body.as_deref(), Some("body 2"));
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let client = MemoryClient::new(posts(6));
        let mut controller = ListController::new(client.clone(), RelationFilter::default(), 5);
        controller.load().await.unwrap();

        let outcome = controller.delete(3, |_, _| false).await.unwrap();
        assert_eq!(outcome, DeleteOutcome::Declined);
        assert_eq!(client.calls(), vec![Operation::List]);

        let mut prompt = String::new();
        let outcome = controller
            .delete(3, |p, _| {
                prompt = p.to_string();
                true
            })
            .await
            .unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted(3));
        assert_eq!(prompt, "Are you sure you want to delete this post?");
        assert_eq!(client.records().len(), 5);

        assert_eq!(
            controller.delete(3, |_, _| true).await.unwrap(),
            DeleteOutcome::Missing
        );
    }

    #[tokio::test]
    async fn test_delete_last_item_on_last_page() {
        let client = MemoryClient::new(posts(6));
        let mut controller = ListController::new(client, RelationFilter::default(), 5);
        controller.load().await.unwrap();
        controller.view_mut().go_to_page(2);

        controller.delete(6, |_, _| true).await.unwrap();
        assert_eq!(controller.view().page(), 1);
        assert_eq!(controller.view().total_pages(), 1);
    }

    #[tokio::test]
    async fn test_failed_delete_surfaces_notice() {
        let client = MemoryClient::new(users());
        client.set_failing(Operation::Delete, true);
        let mut controller = ListController::new(client, TextFilter::default(), 5);
        controller.load().await.unwrap();

        let err = controller.delete(1, |_, _| true).await.unwrap_err();
        assert!(matches!(err, MutationError::Delete(_)));
        assert_eq!(controller.view().records().len(), 3);
        assert_eq!(
            controller.view().notice(),
            Some("An error occurred while deleting.")
        );
    }

    #[tokio::test]
    async fn test_deleting_edited_record_closes_form() {
        let client = MemoryClient::new(users());
        let mut controller = ListController::new(client, TextFilter::default(), 5);
        controller.load().await.unwrap();

        controller.start_edit(2);
        controller.delete(2, |_, _| true).await.unwrap();
        assert_eq!(controller.form().mode(), FormMode::Idle);
    }

    #[tokio::test]
    async fn test_user_role_survives_update() {
        let client = MemoryClient::new(users());
        let mut controller = ListController::new(client, TextFilter::default(), 5);
        controller.load().await.unwrap();

        controller.start_edit(1);
        controller.form_mut().draft_mut().role = Role::Admin;
        controller.submit().await.unwrap();
        assert_eq!(controller.view().get(1).unwrap().role, Role::Admin);
    }

    #[tokio::test]
    async fn test_search_through_controller() {
        let client = MemoryClient::new(users());
        let mut controller = ListController::new(client, TextFilter::default(), 1);
        controller.load().await.unwrap();
        controller.view_mut().go_to_page(3);

        controller.apply_filter(TextFilter::new("USER2"));
        assert_eq!(controller.view().page(), 1);
        assert_eq!(controller.view().visible()[0].id, 2);
    }

    #[tokio::test]
    async fn test_relation_filter_change_reseeds_new_drafts() {
        let client = MemoryClient::new(posts(9));
        let mut controller = ListController::new(client, RelationFilter::default(), 5);
        controller.load().await.unwrap();

        controller.start_create();
        assert_eq!(controller.form().draft().user_id, 1);
        controller.cancel();

        controller.apply_filter(RelationFilter::new(Some(3)));
        assert_eq!(controller.view().filtered_len(), 3);
        controller.start_create();
        assert_eq!(controller.form().draft().user_id, 3);
    }
}
