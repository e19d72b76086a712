use dioxus::prelude::*;

use ui::{ActivityLogProvider, Navbar};
use views::{Home, Posts, Users};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
#[allow(non_snake_case)]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/users")]
        Users {},
        #[route("/posts?:userId")]
        Posts { userId: String },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ActivityLogProvider {
            Router::<Route> {}
        }
    }
}

/// Navbar plus the active view.
#[component]
fn Shell() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::Home {}, "Home" }
            Link { to: Route::Users {}, "Users" }
            Link { to: Route::Posts { userId: String::new() }, "Posts" }
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!(path = %path, "no route");
    rsx! {
        main {
            class: "page",
            h1 { "Not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, "Back home" }
        }
    }
}
