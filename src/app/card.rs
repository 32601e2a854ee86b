use leptos::prelude::*;

use crate::browser::Browser;
use crate::catalog::Project;

#[component]
pub fn ProjectGrid(projects: &'static [Project]) -> impl IntoView {
    view! {
        <div class="card-grid">
            {projects.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let browser = use_context::<Browser>().unwrap_or_default();
    view! {
        <div class="card" data-project=project.id.as_str() on:click=move |_| open_project(&browser, project)>
            <h3>{project.title.as_str()}</h3>
            <p>{project.description.as_str()}</p>
            <span class="btn">"View Details"</span>
        </div>
    }
}

/// Project pages are standalone documents, so they open in a new tab.
pub fn open_project(browser: &Browser, project: &Project) {
    log::debug!("opening project {}", project.id);
    browser.open_new(&project.link);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::testing::{Effect, RecordingContext};
    use crate::catalog::catalog;

    #[test]
    fn test_card_opens_its_link() {
        for project in catalog().all() {
            let recorder = RecordingContext::default();
            open_project(&Browser::new(recorder.clone()), project);
            assert_eq!(recorder.effects(), vec![Effect::OpenNew(project.link.clone())]);
        }
    }

    #[test]
    fn test_link_is_passed_unchanged() {
        let recorder = RecordingContext::default();
        let project = Project {
            id: "odd".to_string(),
            title: "Odd".to_string(),
            description: "Link with spaces and a query".to_string(),
            link: "projects/odd page.html?from=home#top".to_string(),
        };
        open_project(&Browser::new(recorder.clone()), &project);
        assert_eq!(
            recorder.effects(),
            vec![Effect::OpenNew("projects/odd page.html?from=home#top".to_string())]
        );
    }
}
