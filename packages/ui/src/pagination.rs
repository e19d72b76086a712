use dioxus::prelude::*;
use store::PageLayout;

/// Pagination bar: first/prev, one button per page, next/last, a page-size
/// selector and the result summary.
///
/// The bar only reports requests; clamping and the "already current" check
/// happen in the list view that owns the page.
#[component]
pub fn Pagination(
    layout: PageLayout,
    page_size: usize,
    page_size_options: Vec<usize>,
    on_page: EventHandler<usize>,
    on_page_size: EventHandler<usize>,
) -> Element {
    let page = layout.page;
    let last = layout.total_pages;

    rsx! {
        nav {
            class: "pagination",
            span { class: "pagination-summary", "{layout.summary()}" }

            div {
                class: "pagination-pages",
                button {
                    disabled: !layout.can_prev,
                    title: "First page",
                    onclick: move |_| on_page.call(1),
                    "«"
                }
                button {
                    disabled: !layout.can_prev,
                    title: "Previous page",
                    onclick: move |_| on_page.call(page.saturating_sub(1)),
                    "‹"
                }
                for n in layout.page_numbers.iter().copied() {
                    button {
                        key: "{n}",
                        class: if n == page { "active" } else { "" },
                        onclick: move |_| on_page.call(n),
                        "{n}"
                    }
                }
                button {
                    disabled: !layout.can_next,
                    title: "Next page",
                    onclick: move |_| on_page.call(page + 1),
                    "›"
                }
                button {
                    disabled: !layout.can_next,
                    title: "Last page",
                    onclick: move |_| on_page.call(last),
                    "»"
                }
            }

            select {
                class: "pagination-size",
                value: "{page_size}",
                onchange: move |evt| {
                    match evt.value().parse::<usize>() {
                        Ok(size) => on_page_size.call(size),
                        Err(_) => tracing::debug!(value = %evt.value(), "ignoring page size"),
                    }
                },
                for size in page_size_options.iter().copied() {
                    option {
                        key: "{size}",
                        value: "{size}",
                        selected: size == page_size,
                        "{size} / page"
                    }
                }
            }
        }
    }
}
