use leptos::prelude::*;

use crate::config::SITE_TITLE;
use crate::page::Page;

/// Site title plus one link per page. Reports clicks through `on_navigate`.
#[component]
pub fn Navigation(page: ReadSignal<Page>, on_navigate: Callback<Page>) -> impl IntoView {
    view! {
        <nav>
            <div class="logo">{SITE_TITLE}</div>
            <ul>
                {Page::ALL
                    .into_iter()
                    .map(|link| {
                        let is_active = move || page.get() == link;
                        view! {
                            <li>
                                <a
                                    href="#"
                                    data-page=link.id()
                                    style:color=move || {
                                        if is_active() { "var(--primary-color)" } else { "inherit" }
                                    }
                                    style:font-weight=move || if is_active() { "600" } else { "500" }
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        on_navigate.run(link);
                                    }
                                >
                                    {link.label()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
