use leptos::prelude::*;
use leptos_meta::Title;

use super::card::ProjectGrid;
use crate::catalog::Catalog;
use crate::page::Page;

#[component]
pub fn ProjectsPage(catalog: &'static Catalog) -> impl IntoView {
    view! {
        <Title text=Page::Projects.label() />
        <div class="section projects-page">
            <h2>"Projects"</h2>
            <p>"Explore a selection of my work. Click a project to learn more."</p>
            <ProjectGrid projects=catalog.all() />
        </div>
    }
}
