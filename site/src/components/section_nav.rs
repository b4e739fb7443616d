//! Fixed dot navigation between page sections.

use std::sync::Arc;

use carousel::SiteConfig;
use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dom;

/// One dot per configured section. Clicking scrolls to it; the dot of the
/// section that is mostly on screen is highlighted.
#[component]
pub fn SectionNav() -> impl IntoView {
    let config = expect_context::<Arc<SiteConfig>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let links = config.sections.clone();

    #[cfg(feature = "csr")]
    {
        let ids: Vec<String> = links.iter().map(|link| link.id.clone()).collect();
        Effect::new(move || watch_sections(&ids, ui));
    }

    view! {
        <nav class="dot-nav" aria-label="Sections">
            {links
                .into_iter()
                .map(|link| {
                    let id = link.id.clone();
                    let target = link.id;
                    view! {
                        <button
                            class:active=move || ui.with(|u| u.sections.is_active(&id))
                            aria-label=link.label
                            on:click=move |_| dom::scroll_to_section(&target)
                        ></button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(feature = "csr")]
fn watch_sections(ids: &[String], ui: RwSignal<UiState>) {
    use carousel::consts::SECTION_ACTIVE_THRESHOLD;

    for id in ids {
        let Some(el) = dom::element_by_id(id) else {
            log::debug!("[nav] section `{id}` is not on the page");
            continue;
        };
        let id = id.clone();
        crate::util::observer::observe_visibility(&el, SECTION_ACTIVE_THRESHOLD, move |visible| {
            if visible {
                ui.maybe_update(|u| u.sections.on_visible(&id));
            }
        });
    }
}
