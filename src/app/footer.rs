use chrono::prelude::*;
use leptos::prelude::*;

use crate::config::{SITE_TITLE, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div class="social-icons">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a href=link.href target="_blank" rel="noopener" aria-label=link.label>
                                <i class=link.icon></i>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <p>{copyright(current_year())}</p>
        </footer>
    }
}

fn current_year() -> i32 {
    Local::now().year()
}

fn copyright(year: i32) -> String {
    format!("© {year} {SITE_TITLE}. All rights reserved.")
}
