use dioxus::prelude::*;

use store::{
    list_joined, DraftForm, Id, ListView, LoadPhase, Post, RelationFilter, ResourceClient, Settled,
    User,
};
use ui::{
    log_activity, scroll_to_top, use_activity_log, ConfirmDialog, LogLevel, NoticeBanner,
    Pagination, PostForm, PostTable,
};

use super::{admin_config, make_client};
use crate::Route;

/// `/posts?userId=`. A new `userId` remounts the page with fresh state.
#[allow(non_snake_case)]
#[component]
pub fn Posts(userId: String) -> Element {
    let filter = RelationFilter::from_query(&userId);
    rsx! {
        PostsPage { key: "{userId}", filter }
    }
}

#[component]
fn PostsPage(filter: RelationFilter) -> Element {
    let config = use_hook(admin_config);
    let client = use_hook(|| make_client(&config));
    let page_size_options = config.pagination.options();

    let seed = filter.clone();
    let mut view = use_signal(|| ListView::<Post>::new(seed, config.pagination.default_page_size));
    let mut form = use_signal(|| {
        let mut form = DraftForm::<Post>::new();
        form.seed(&filter);
        form
    });
    let mut authors = use_signal(Vec::<User>::new);
    let mut pending_delete = use_signal(|| Option::<Id>::None);
    let mut busy = use_signal(|| false);
    let mut log = use_activity_log();
    let nav = use_navigator();

    let loader = client.clone();
    let _loader = use_resource(move || {
        let client = loader.clone();
        async move {
            let result = list_joined(&client.posts(), &client.users()).await;
            let loaded = view.write().finish_joined_load(&mut form.write(), result);
            match loaded {
                Ok(users) => authors.set(users),
                Err(e) => tracing::error!("Failed to load posts: {}", e.cause),
            }
        }
    });

    let on_edit = move |id: Id| {
        if !view.read().edit_with(&mut form.write(), id) {
            tracing::debug!(id, "post is no longer listed");
        }
    };

    let posts = client.posts();
    let saver = posts.clone();
    let on_submit = move |_: ()| {
        let submission = form.read().submission();
        let submission = match submission {
            Ok(submission) => submission,
            Err(e) => {
                log_activity(&mut log, LogLevel::Error, &e.to_string());
                return;
            }
        };
        let posts = saver.clone();
        busy.set(true);
        spawn(async move {
            let settled = submission.dispatch(&posts).await;
            let created = matches!(settled, Settled::Created { .. });
            let result = view.write().settle_with(&mut form.write(), settled);
            busy.set(false);
            if let Ok(id) = result {
                let verb = if created { "created" } else { "updated" };
                log_activity(&mut log, LogLevel::Success, &format!("Post #{id} {verb}"));
            }
        });
    };

    let on_confirm_delete = move |_: ()| {
        let Some(id) = pending_delete() else {
            return;
        };
        pending_delete.set(None);
        let posts = posts.clone();
        spawn(async move {
            let reply = posts.delete(id).await;
            let result = view.write().finish_delete_with(&mut form.write(), id, reply);
            if result.is_ok() {
                log_activity(&mut log, LogLevel::Success, &format!("Post #{id} deleted"));
            }
        });
    };

    let (phase, visible, layout, page_size, notice, prompt) = {
        let view = view.read();
        (
            view.phase().clone(),
            view.visible().into_iter().cloned().collect::<Vec<_>>(),
            view.layout(),
            view.page_size(),
            view.notice().map(str::to_string),
            view.delete_prompt(),
        )
    };
    let selected_author = filter.user_id().map(|id| id.to_string()).unwrap_or_default();
    let heading = match filter.user_id() {
        Some(id) => format!("Posts by user #{id}"),
        None => "Posts".to_string(),
    };

    rsx! {
        div {
            class: "page-header",
            h1 { "{heading}" }
            select {
                class: "search",
                value: "{selected_author}",
                onchange: move |evt: FormEvent| {
                    nav.push(Route::Posts { userId: evt.value() });
                },
                option { value: "", selected: selected_author.is_empty(), "All authors" }
                for user in authors.read().iter() {
                    option {
                        key: "{user.id}",
                        value: "{user.id}",
                        selected: user.id.to_string() == selected_author,
                        "{user.name}"
                    }
                }
            }
            button {
                class: "btn btn-primary",
                disabled: phase != LoadPhase::Ready,
                onclick: move |_| form.write().start_create(),
                "New post"
            }
        }

        if let Some(message) = notice {
            NoticeBanner {
                message,
                on_dismiss: move |_| view.write().dismiss_notice(),
            }
        }

        PostForm {
            form,
            authors: authors(),
            busy: busy(),
            on_submit,
            on_cancel: move |_| form.write().cancel(),
        }

        {match phase {
            LoadPhase::Loading => rsx! {
                div { class: "load-state", "Loading posts…" }
            },
            LoadPhase::Failed(ref message) => rsx! {
                div { class: "load-state failed", "{message}" }
            },
            LoadPhase::Ready => rsx! {
                PostTable {
                    posts: visible,
                    authors: authors(),
                    on_edit,
                    on_delete: move |id: Id| pending_delete.set(Some(id)),
                }
                Pagination {
                    layout,
                    page_size,
                    page_size_options,
                    on_page: move |page: usize| {
                        if view.write().go_to_page(page) {
                            scroll_to_top();
                        }
                    },
                    on_page_size: move |size: usize| view.write().set_page_size(size),
                }
            },
        }}

        if pending_delete().is_some() {
            ConfirmDialog {
                message: prompt,
                on_confirm: on_confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}
