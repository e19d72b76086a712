use dioxus::prelude::*;
use store::{DraftForm, FormMode, Id, Post, User};

fn author_label(authors: &[User], user_id: Id) -> String {
    match authors.iter().find(|u| u.id == user_id) {
        Some(user) => format!("{} (#{})", user.name, user.id),
        None => format!("#{user_id}"),
    }
}

/// Table of the visible posts. `authors` is only used to show names.
#[component]
pub fn PostTable(
    posts: Vec<Post>,
    authors: Vec<User>,
    on_edit: EventHandler<Id>,
    on_delete: EventHandler<Id>,
) -> Element {
    rsx! {
        table {
            class: "records",
            thead {
                tr {
                    th { "ID" }
                    th { "Author" }
                    th { "Title" }
                    th { "Body" }
                    th { "" }
                }
            }
            tbody {
                if posts.is_empty() {
                    tr {
                        td { colspan: "5", class: "records-empty", "No posts match." }
                    }
                }
                for post in posts {
                    tr {
                        key: "{post.id}",
                        td { "{post.id}" }
                        td { {author_label(&authors, post.user_id)} }
                        td { "{post.title}" }
                        td { class: "records-body", {post.body.clone().unwrap_or_default()} }
                        td {
                            class: "row-actions",
                            button {
                                class: "btn",
                                onclick: move |_| on_edit.call(post.id),
                                "Edit"
                            }
                            button {
                                class: "btn btn-danger",
                                onclick: move |_| on_delete.call(post.id),
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Create/edit form bound to a [`DraftForm<Post>`]. The author selector lists
/// `authors`; a draft pointing at an unknown user keeps its id as an extra
/// option.
#[component]
pub fn PostForm(
    form: Signal<DraftForm<Post>>,
    authors: Vec<User>,
    busy: bool,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let (mode, draft) = {
        let form = form.read();
        (form.mode(), form.draft().clone())
    };
    let heading = match mode {
        FormMode::Idle => return rsx! {},
        FormMode::Creating => "New post".to_string(),
        FormMode::Editing(id) => format!("Edit post #{id}"),
    };
    let unknown_author = !authors.iter().any(|u| u.id == draft.user_id);
    let body = draft.body.clone().unwrap_or_default();

    rsx! {
        form {
            class: "record-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },
            h2 { "{heading}" }

            label { r#for: "post-author", "Author" }
            select {
                id: "post-author",
                value: "{draft.user_id}",
                onchange: move |evt: FormEvent| {
                    match evt.value().parse::<Id>() {
                        Ok(user_id) => form.write().draft_mut().user_id = user_id,
                        Err(_) => tracing::debug!(value = %evt.value(), "ignoring author"),
                    }
                },
                if unknown_author {
                    option {
                        value: "{draft.user_id}",
                        selected: true,
                        "#{draft.user_id}"
                    }
                }
                for user in authors.iter() {
                    option {
                        key: "{user.id}",
                        value: "{user.id}",
                        selected: user.id == draft.user_id,
                        "{user.name} (#{user.id})"
                    }
                }
            }

            label { r#for: "post-title", "Title" }
            input {
                id: "post-title",
                r#type: "text",
                value: "{draft.title}",
                oninput: move |evt: FormEvent| form.write().draft_mut().title = evt.value(),
            }

            label { r#for: "post-body", "Body" }
            textarea {
                id: "post-body",
                rows: "5",
                value: "{body}",
                oninput: move |evt: FormEvent| form.write().draft_mut().body = Some(evt.value()),
            }

            div {
                class: "form-actions",
                button { class: "btn btn-primary", r#type: "submit", disabled: busy, "Save" }
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
