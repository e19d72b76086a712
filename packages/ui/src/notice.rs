use dioxus::prelude::*;

/// Inline alert for a failed save or delete. Stays until dismissed or until
/// the next mutation succeeds.
#[component]
pub fn NoticeBanner(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "notice",
            role: "alert",
            span { "{message}" }
            button {
                class: "toast-close",
                title: "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}
