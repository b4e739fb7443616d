//! Root application component and context providers.

use std::sync::Arc;

use carousel::{CarouselController, CarouselError, SiteConfig};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::carousel_modal::CarouselModal;
use crate::components::custom_cursor::CustomCursor;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::project_grid::ProjectGrid;
use crate::components::section_nav::SectionNav;
use crate::components::sections::{Contact, Resume, Workflow};
use crate::state::gallery::Gallery;
use crate::state::ui::UiState;
use crate::util::{content, dark_mode, dom};

/// Root application component.
///
/// Provides the site config, the gallery, and UI chrome state to every
/// child component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = Arc::new(content::load());
    let gallery = Gallery::new(build_controller(&config));

    let dark = dark_mode::read_preference(&config.theme_storage_key);
    dark_mode::apply(dark);
    let ui = RwSignal::new(UiState::new(dark, config.section_ids()));

    provide_context(Arc::clone(&config));
    provide_context(gallery);
    provide_context(ui);

    Effect::new(move || dark_mode::apply(ui.with(|u| u.dark_mode)));

    let title = format!("{} | Portfolio", config.owner);

    view! {
        <Title text=title/>
        <CustomCursor/>
        <Header/>
        <SectionNav/>
        <main class="snap-container">
            <Hero/>
            <Workflow/>
            <section id="samples" class="samples">
                <h2 class="section-title">"Samples"</h2>
                <ProjectGrid/>
            </section>
            <Resume/>
            <Contact/>
        </main>
        <Footer/>
        <CarouselModal/>
    }
}

/// Controller resolving image paths against the current page URL.
fn build_controller(config: &SiteConfig) -> CarouselController {
    let catalog = Arc::new(config.catalog.clone());
    dom::document_href()
        .ok_or(CarouselError::MissingDomElement("location"))
        .and_then(|href| CarouselController::with_base(Arc::clone(&catalog), &href))
        .unwrap_or_else(|err| {
            log::warn!("[gallery] {err}; relative image paths will use fallbacks");
            CarouselController::detached(catalog)
        })
}
