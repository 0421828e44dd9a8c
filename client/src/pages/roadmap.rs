//! Public roadmap grouped by milestone status.

#[cfg(test)]
#[path = "roadmap_test.rs"]
mod roadmap_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MilestoneStatus {
    Shipped,
    InProgress,
    Planned,
}

impl MilestoneStatus {
    pub const ORDER: [Self; 3] = [Self::Shipped, Self::InProgress, Self::Planned];

    pub fn heading(self) -> &'static str {
        match self {
            Self::Shipped => "Shipped",
            Self::InProgress => "In progress",
            Self::Planned => "Planned",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Shipped => "shipped",
            Self::InProgress => "in-progress",
            Self::Planned => "planned",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub title: &'static str,
    pub summary: &'static str,
    pub status: MilestoneStatus,
}

pub const MILESTONES: &[Milestone] = &[
    Milestone {
        title: "Cross-platform CLI",
        summary: "Run Darklang scripts and packages from macOS, Linux, and Windows terminals.",
        status: MilestoneStatus::Shipped,
    },
    Milestone {
        title: "Package manager",
        summary: "Versioned, immutable functions and packages with no install step.",
        status: MilestoneStatus::Shipped,
    },
    Milestone {
        title: "AI-assisted code generation",
        summary: "Describe a script in plain language and get typed Darklang back.",
        status: MilestoneStatus::InProgress,
    },
    Milestone {
        title: "Cloud deploys from the CLI",
        summary: "Move a local script to a hosted HTTP handler with one command.",
        status: MilestoneStatus::InProgress,
    },
    Milestone {
        title: "Traces for scripts",
        summary: "Inspect every input and intermediate value of past runs.",
        status: MilestoneStatus::Planned,
    },
    Milestone {
        title: "Darklang Classic migration",
        summary: "Bring Classic canvases, handlers, and datastores to the new runtime.",
        status: MilestoneStatus::Planned,
    },
];

/// Milestones with `status`, in declaration order.
pub fn milestones_with_status(status: MilestoneStatus) -> impl Iterator<Item = &'static Milestone> {
    MILESTONES.iter().filter(move |m| m.status == status)
}

#[component]
pub fn RoadmapPage() -> impl IntoView {
    view! {
        <div class="roadmap-page">
            <header class="roadmap-page__header">
                <h1>"Roadmap"</h1>
                <p>"Where Darklang is headed next."</p>
            </header>
            {MilestoneStatus::ORDER
                .into_iter()
                .map(|status| {
                    view! {
                        <section class=format!("roadmap-group roadmap-group--{}", status.slug())>
                            <h2 class="roadmap-group__heading">{status.heading()}</h2>
                            <ul class="roadmap-group__items">
                                {milestones_with_status(status)
                                    .map(|m| {
                                        view! {
                                            <li class="roadmap-item">
                                                <h3>{m.title}</h3>
                                                <p>{m.summary}</p>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </section>
                    }
                })
                .collect_view()}
        </div>
    }
}
