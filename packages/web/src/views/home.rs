use dioxus::prelude::*;

use super::admin_config;
use crate::Route;

#[component]
pub fn Home() -> Element {
    let config = use_hook(admin_config);

    rsx! {
        div {
            class: "page-header",
            h1 { "Admin Panel" }
        }
        p { "Manage the users and posts served by {config.api.base_url}." }
        div {
            class: "home-links",
            Link { to: Route::Users {}, "Users" }
            Link { to: Route::Posts { userId: String::new() }, "Posts" }
        }
    }
}
