use dioxus::prelude::*;

use store::{DraftForm, Id, ListView, LoadPhase, ResourceClient, Settled, TextFilter, User};
use ui::{
    log_activity, scroll_to_top, use_activity_log, ConfirmDialog, LogLevel, NoticeBanner,
    Pagination, UserForm, UserTable,
};

use super::{admin_config, make_client};
use crate::Route;

#[component]
pub fn Users() -> Element {
    let config = use_hook(admin_config);
    let users = use_hook(|| make_client(&config).users());
    let page_size_options = config.pagination.options();

    let mut view = use_signal(|| {
        ListView::<User>::new(TextFilter::default(), config.pagination.default_page_size)
    });
    let mut form = use_signal(DraftForm::<User>::new);
    let mut search = use_signal(String::new);
    let mut pending_delete = use_signal(|| Option::<Id>::None);
    let mut busy = use_signal(|| false);
    let mut log = use_activity_log();
    let nav = use_navigator();

    let loader = users.clone();
    let _loader = use_resource(move || {
        let users = loader.clone();
        async move {
            let result = users.list().await;
            if let Err(e) = view.write().finish_load_with(&mut form.write(), result) {
                tracing::error!("Failed to load users: {}", e.cause);
            }
        }
    });

    let on_search = move |evt: FormEvent| {
        let term = evt.value();
        view.write()
            .apply_filter_with(&mut form.write(), TextFilter::new(term.clone()));
        search.set(term);
    };

    let on_edit = move |id: Id| {
        if !view.read().edit_with(&mut form.write(), id) {
            tracing::debug!(id, "user is no longer listed");
        }
    };

    let saver = users.clone();
    let on_submit = move |_: ()| {
        let submission = form.read().submission();
        let submission = match submission {
            Ok(submission) => submission,
            Err(e) => {
                log_activity(&mut log, LogLevel::Error, &e.to_string());
                return;
            }
        };
        let users = saver.clone();
        busy.set(true);
        spawn(async move {
            let settled = submission.dispatch(&users).await;
            let created = matches!(settled, Settled::Created { .. });
            let result = view.write().settle_with(&mut form.write(), settled);
            busy.set(false);
            if let Ok(id) = result {
                let verb = if created { "created" } else { "updated" };
                log_activity(&mut log, LogLevel::Success, &format!("User #{id} {verb}"));
            }
        });
    };

    let deleter = users.clone();
    let on_confirm_delete = move |_: ()| {
        let Some(id) = pending_delete() else {
            return;
        };
        pending_delete.set(None);
        let users = deleter.clone();
        spawn(async move {
            let reply = users.delete(id).await;
            let result = view.write().finish_delete_with(&mut form.write(), id, reply);
            if result.is_ok() {
                log_activity(&mut log, LogLevel::Success, &format!("User #{id} deleted"));
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

    rsx! {
        div {
            class: "page-header",
            h1 { "Users" }
            input {
                class: "search",
                r#type: "search",
                placeholder: "Search by id, name, username or email",
                value: "{search}",
                oninput: on_search,
            }
            button {
                class: "btn btn-primary",
                disabled: phase != LoadPhase::Ready,
                onclick: move |_| form.write().start_create(),
                "New user"
            }
        }

        if let Some(message) = notice {
            NoticeBanner {
                message,
                on_dismiss: move |_| view.write().dismiss_notice(),
            }
        }

        UserForm {
            form,
            busy: busy(),
            on_submit,
            on_cancel: move |_| form.write().cancel(),
        }

        {match phase {
            LoadPhase::Loading => rsx! {
                div { class: "load-state", "Loading users…" }
            },
            LoadPhase::Failed(ref message) => rsx! {
                div { class: "load-state failed", "{message}" }
            },
            LoadPhase::Ready => rsx! {
                UserTable {
                    users: visible,
                    on_edit,
                    on_delete: move |id: Id| pending_delete.set(Some(id)),
                    on_show_posts: move |id: Id| {
                        nav.push(Route::Posts { userId: id.to_string() });
                    },
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
