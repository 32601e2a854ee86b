use leptos::prelude::*;
use leptos_meta::Title;

use crate::page::Page;

struct Stat {
    icon: &'static str,
    value: &'static str,
    caption: &'static str,
}

struct SkillGroup {
    title: &'static str,
    skills: &'static [&'static str],
}

const STATS: &[Stat] = &[
    Stat {
        icon: "fas fa-briefcase",
        value: "5+ Years",
        caption: "Game Development Experience",
    },
    Stat {
        icon: "fas fa-gamepad",
        value: "10+ Games",
        caption: "Published & Shipped",
    },
    Stat {
        icon: "fas fa-download",
        value: "2M+ Downloads",
        caption: "Across All Projects",
    },
];

const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Game Engines",
        skills: &["Unity", "Unreal Engine", "Godot"],
    },
    SkillGroup {
        title: "Programming",
        skills: &["C#", "C++", "JavaScript", "Python"],
    },
    SkillGroup {
        title: "Platforms",
        skills: &["PC", "Mobile (iOS/Android)", "WebGL"],
    },
    SkillGroup {
        title: "Tools",
        skills: &["Git", "Blender", "Photoshop", "Visual Studio"],
    },
    SkillGroup {
        title: "Specialties",
        skills: &[
            "Gameplay Programming",
            "System Design",
            "Optimisation",
            "Multiplayer",
        ],
    },
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text=Page::About.label() />
        <div class="section about-page">
            <h2>"About Me"</h2>
            <p class="subtitle">
                "Passionate game developer and AI engineer with a mission to create memorable experiences."
            </p>
            <div class="about-two-column">
                <Journey />
                <Stats />
            </div>
            <h3>"Technical Skills"</h3>
            <Skills />
        </div>
    }
}

#[component]
fn Journey() -> impl IntoView {
    view! {
        <div class="journey-card">
            <h3>"My Journey"</h3>
            <p>
                "I'm a game developer and AI engineer with over five years of experience creating engaging games for PC, mobile and the web. My journey began with a love for both playing and building games, leading me to pursue a professional career in interactive entertainment. Over the years I've worked on projects ranging from mobile puzzles to complex real-time strategy titles. I specialise in gameplay programming, system design and optimisation, always striving to deliver smooth and enjoyable player experiences. Combining technical expertise with creative problem-solving, I believe that great games are built on solid systems and polished mechanics. I'm committed to continuous learning and staying current with industry trends."
            </p>
        </div>
    }
}

#[component]
fn Stats() -> impl IntoView {
    view! {
        <div class="stats-card">
            {STATS
                .iter()
                .map(|stat| {
                    view! {
                        <div class="stat">
                            <i class=stat.icon></i>
                            <div>
                                <span>{stat.value}</span>
                                <small>{stat.caption}</small>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <div class="skills-grid">
            {SKILL_GROUPS
                .iter()
                .map(|group| {
                    view! {
                        <div class="skill-column">
                            <h4>{group.title}</h4>
                            <ul>
                                {group
                                    .skills
                                    .iter()
                                    .map(|skill| view! { <li>{*skill}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
