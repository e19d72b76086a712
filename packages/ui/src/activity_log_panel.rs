use dioxus::prelude::*;

use crate::activity_log::use_activity_log;

const ADMIN_CSS: Asset = asset!("/assets/styling/admin.css");

/// The newest undismissed notification, pinned to the top right.
#[component]
pub fn ActivityToast() -> Element {
    let mut log = use_activity_log();
    let Some(entry) = log.read().toast().cloned() else {
        return rsx! {};
    };
    let id = entry.id;

    rsx! {
        div {
            class: "toast {entry.level.class()}",
            role: "status",
            span { "{entry.message}" }
            button {
                class: "toast-close",
                title: "Dismiss",
                onclick: move |_| log.write().dismiss(id),
                "×"
            }
        }
    }
}

#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();

    if !log.read().visible {
        return rsx! {};
    }

    let entries = log.read().entries().to_vec();

    rsx! {
        document::Stylesheet { href: ADMIN_CSS }

        div {
            class: "activity-log-panel",
            div {
                class: "activity-log-header",
                span { "Activity" }
                div {
                    class: "activity-log-header-actions",
                    button {
                        onclick: move |_| log.write().clear(),
                        "Clear"
                    }
                    button {
                        onclick: move |_| log.write().visible = false,
                        "Close"
                    }
                }
            }
            div {
                class: "activity-log-entries",
                if entries.is_empty() {
                    div { class: "activity-log-empty", "Nothing yet." }
                }
                for entry in entries.iter().rev() {
                    div {
                        key: "{entry.id}",
                        class: "activity-log-entry {entry.level.class()}",
                        span { class: "activity-log-time", "{entry.timestamp}" }
                        span { " {entry.message}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let count = log.read().entries().len();
    let has_errors = log.read().error_count() > 0;

    rsx! {
        button {
            class: if has_errors { "activity-log-toggle has-errors" } else { "activity-log-toggle" },
            onclick: move |_| {
                let visible = log.read().visible;
                log.write().visible = !visible;
            },
            title: "Activity",
            if count > 0 {
                "{count}"
            } else {
                "Log"
            }
        }
    }
}
