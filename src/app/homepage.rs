use leptos::prelude::*;
use leptos_meta::Title;

use super::card::ProjectGrid;
use crate::catalog::{Catalog, FEATURED_COUNT};
use crate::page::Page;

#[component]
pub fn HomePage(catalog: &'static Catalog) -> impl IntoView {
    view! {
        <Title text=Page::Home.label() />
        <div class="home-page">
            <div class="hero">
                <h1>"Creating Worlds with Code & Intelligence"</h1>
                <p>
                    "I combine game development and artificial intelligence to craft unique, immersive experiences. From gameplay mechanics to smart, adaptive systems, my work bridges creativity with cutting-edge technology."
                </p>
            </div>
            <section class="section">
                <h2>"What I Do"</h2>
                <p>
                    "I specialise in designing and developing video games, leveraging AI to build dynamic behaviours, procedural content and adaptive gameplay. Whether it's a mobile puzzle or a large-scale multiplayer title, I deliver polished experiences across platforms."
                </p>
            </section>
            <section class="section">
                <h2>"Latest Projects"</h2>
                <ProjectGrid projects=catalog.featured(FEATURED_COUNT) />
            </section>
        </div>
    }
}
