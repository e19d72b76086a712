use dioxus::prelude::*;

use crate::ActivityLogToggle;

const ADMIN_CSS: Asset = asset!("/assets/styling/admin.css");

/// Top bar. `children` are the route links; the activity toggle sits on the right.
#[component]
pub fn Navbar(#[props(default = "Admin Panel".to_string())] title: String, children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: ADMIN_CSS }
        header {
            class: "navbar",
            span { class: "navbar-brand", "{title}" }
            nav { class: "navbar-links", {children} }
            ActivityLogToggle {}
        }
    }
}
