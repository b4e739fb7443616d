//! Samples grid.

use std::sync::Arc;

use carousel::SiteConfig;
use leptos::prelude::*;

use crate::components::project_card::ProjectCard;

#[component]
pub fn ProjectGrid() -> impl IntoView {
    let config = expect_context::<Arc<SiteConfig>>();
    let projects = config.catalog.projects.clone();

    view! {
        <div id="projectGrid" class="grid">
            {projects.into_iter().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
        </div>
    }
}
