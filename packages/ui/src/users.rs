use dioxus::prelude::*;
use store::{DraftForm, FormMode, Id, Role, User};

/// Table of the visible users with per-row actions.
#[component]
pub fn UserTable(
    users: Vec<User>,
    on_edit: EventHandler<Id>,
    on_delete: EventHandler<Id>,
    on_show_posts: EventHandler<Id>,
) -> Element {
    rsx! {
        table {
            class: "records",
            thead {
                tr {
                    th { "ID" }
                    th { "Full name" }
                    th { "Username" }
                    th { "Email" }
                    th { "Role" }
                    th { "" }
                }
            }
            tbody {
                if users.is_empty() {
                    tr {
                        td { colspan: "6", class: "records-empty", "No users match." }
                    }
                }
                for user in users {
                    UserRow {
                        key: "{user.id}",
                        user: user.clone(),
                        on_edit,
                        on_delete,
                        on_show_posts,
                    }
                }
            }
        }
    }
}

#[component]
fn UserRow(
    user: User,
    on_edit: EventHandler<Id>,
    on_delete: EventHandler<Id>,
    on_show_posts: EventHandler<Id>,
) -> Element {
    let id = user.id;
    let role_class = match user.role {
        Role::Admin => "badge admin",
        Role::User => "badge",
    };

    rsx! {
        tr {
            td { "{user.id}" }
            td { "{user.name}" }
            td { "{user.username}" }
            td { "{user.email}" }
            td { span { class: role_class, "{user.role}" } }
            td {
                class: "row-actions",
                button { class: "btn", onclick: move |_| on_show_posts.call(id), "Posts" }
                button { class: "btn", onclick: move |_| on_edit.call(id), "Edit" }
                button { class: "btn btn-danger", onclick: move |_| on_delete.call(id), "Delete" }
            }
        }
    }
}

/// Create/edit form bound to a [`DraftForm<User>`]. Renders nothing while the
/// form is idle.
#[component]
pub fn UserForm(
    form: Signal<DraftForm<User>>,
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
        FormMode::Creating => "New user".to_string(),
        FormMode::Editing(id) => format!("Edit user #{id}"),
    };

    rsx! {
        form {
            class: "record-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },
            h2 { "{heading}" }

            label { r#for: "user-name", "Full name" }
            input {
                id: "user-name",
                r#type: "text",
                value: "{draft.name}",
                oninput: move |evt: FormEvent| form.write().draft_mut().name = evt.value(),
            }

            label { r#for: "user-username", "Username" }
            input {
                id: "user-username",
                r#type: "text",
                value: "{draft.username}",
                oninput: move |evt: FormEvent| form.write().draft_mut().username = evt.value(),
            }

            label { r#for: "user-email", "Email" }
            input {
                id: "user-email",
                r#type: "email",
                value: "{draft.email}",
                oninput: move |evt: FormEvent| form.write().draft_mut().email = evt.value(),
            }

            label { r#for: "user-role", "Role" }
            select {
                id: "user-role",
                value: "{draft.role}",
                onchange: move |evt: FormEvent| {
                    form.write().draft_mut().role = Role::from_label(&evt.value());
                },
                for role in [Role::Admin, Role::User] {
                    option {
                        value: "{role}",
                        selected: role == draft.role,
                        "{role}"
                    }
                }
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
