//! A single project tile in the samples grid.

use carousel::ProjectRecord;
use leptos::prelude::*;

use crate::state::gallery::Gallery;

/// Card showing a project's thumbnail; clicking opens its gallery.
#[component]
pub fn ProjectCard(project: ProjectRecord) -> impl IntoView {
    let gallery = expect_context::<Gallery>();
    let visible = RwSignal::new(false);
    let node = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    Effect::new(move || {
        if let Some(el) = node.get() {
            crate::util::observer::observe_visibility(&el, carousel::consts::CARD_REVEAL_THRESHOLD, move |on| visible.set(on));
        }
    });

    let ProjectRecord { key, title, category, thumbnail, contain } = project;
    let alt = title.clone();

    view! {
        <div class="card" class:visible=move || visible.get() node_ref=node on:click=move |_| gallery.open(&key)>
            <div class="card-header">
                <div class="title">{title}</div>
            </div>
            <img src=thumbnail alt=alt class:contain=contain loading="lazy"/>
            <div class="card-divider"></div>
            <div class="meta">
                <div class="cat">{category}</div>
            </div>
        </div>
    }
}
