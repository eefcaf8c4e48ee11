//! Page selector links.

use leptos::prelude::*;
use todos::page::PageLink;

use crate::state::TodoState;

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// One link per page; renders nothing while everything fits on one page.
#[component]
pub fn Pagination() -> impl IntoView {
    let state = expect_context::<TodoState>();

    view! {
        <ul id="pagination" class="pagination justify-content-center">
            {move || {
                state
                    .with(|s| s.page_links())
                    .into_iter()
                    .map(|link| {
                        let number = link.number;
                        view! {
                            <li class=page_item_class(link)>
                                <a
                                    class="page-link"
                                    href="#"
                                    on:click=move |ev: leptos::ev::MouseEvent| {
                                        ev.prevent_default();
                                        state.update(|s| {
                                            s.go_to_page(number);
                                        });
                                    }
                                >
                                    {number.to_string()}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </ul>
    }
}

pub fn page_item_class(link: PageLink) -> &'static str {
    if link.active { "page-item active" } else { "page-item" }
}
