//! Sections that fade in as they scroll into view.

use leptos::prelude::*;

/// `<section>` that gains `visible` while at least `threshold` of it is on
/// screen, and loses it again on the way out.
#[component]
pub fn RevealSection(
    #[prop(into)] id: String,
    #[prop(into, optional)] class: String,
    threshold: f64,
    children: Children,
) -> impl IntoView {
    let visible = RwSignal::new(false);
    let node = NodeRef::<leptos::html::Section>::new();

    #[cfg(feature = "csr")]
    Effect::new(move || {
        if let Some(el) = node.get() {
            crate::util::observer::observe_visibility(&el, threshold, move |on| visible.set(on));
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = threshold;

    view! {
        <section id=id class=class class:visible=move || visible.get() node_ref=node>
            {children()}
        </section>
    }
}
