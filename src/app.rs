mod about;
mod card;
mod contact;
mod footer;
mod homepage;
mod navigation;
mod projects;

use leptos::prelude::*;
use leptos_meta::*;

use crate::browser::Browser;
use crate::catalog::{catalog, Catalog};
use crate::config::SITE_TITLE;
use crate::page::Page;

use about::AboutPage;
use contact::ContactPage;
use footer::Footer;
use homepage::HomePage;
use navigation::Navigation;
use projects::ProjectsPage;

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(Browser::default());

    let catalog = catalog();
    let (page, set_page) = signal(Page::default());

    // Re-selecting the current page is a no-op so the active view keeps its state
    let on_navigate = Callback::new(move |next: Page| {
        if let Some(next) = page.get_untracked().transition(next) {
            log::debug!("navigating to {next}");
            set_page.set(next);
        }
    });

    view! {
        <Title formatter=|title: String| format!("{title} | {SITE_TITLE}") />
        <Navigation page on_navigate />
        <main>
            {move || page_view(page.get(), catalog)}
        </main>
        <Footer />
    }
}

/// The one view shown for `page`.
fn page_view(page: Page, catalog: &'static Catalog) -> AnyView {
    match page {
        Page::Home => view! { <HomePage catalog /> }.into_any(),
        Page::Projects => view! { <ProjectsPage catalog /> }.into_any(),
        Page::About => view! { <AboutPage /> }.into_any(),
        Page::Contact => view! { <ContactPage /> }.into_any(),
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{numbered_catalog, render};
    use super::*;

    const MARKERS: [(Page, &str); 4] = [
        (Page::Home, "home-page"),
        (Page::Projects, "projects-page"),
        (Page::About, "about-page"),
        (Page::Contact, "contact-page"),
    ];

    #[test]
    fn test_each_page_renders_only_its_view() {
        let catalog = numbered_catalog(5);
        for (page, marker) in MARKERS {
            let html = render(|| page_view(page, catalog));
            for (other, other_marker) in MARKERS {
                assert_eq!(
                    html.contains(other_marker),
                    other == page,
                    "{page} view and {other_marker} marker: {html}"
                );
            }
            assert!(html.contains(marker));
        }
    }

    #[test]
    fn test_app_starts_on_home() {
        let html = render(|| view! { <App /> });

        assert!(html.contains("home-page"));
        assert!(!html.contains("contact-page"));
        assert!(html.contains("<nav>"));
        assert!(html.contains("<footer>"));
    }

    #[test]
    fn test_leaving_contact_drops_the_form() {
        let catalog = numbered_catalog(3);
        let pages = [Page::Contact, Page::Home, Page::Contact];
        let views: Vec<String> = pages
            .into_iter()
            .map(|page| render(|| page_view(page, catalog)))
            .collect();

        assert!(views[0].contains("contact-form"));
        assert!(!views[1].contains("contact-form"));
        assert!(views[2].contains("contact-form"));
        assert!(!views[2].contains(r#"value="p"#));
        assert!(views[2].contains("></textarea>"));
    }
}
