//! Landing section with the animated name underline.

use std::sync::Arc;

use carousel::SiteConfig;
use leptos::prelude::*;

/// Class that runs the hero intro animation.
#[cfg(feature = "csr")]
const LOADED_CLASS: &str = "loaded";

/// Intro section. The underline animation plays on load and replays each
/// time the hero scrolls back into view.
#[component]
pub fn Hero() -> impl IntoView {
    let config = expect_context::<Arc<SiteConfig>>();
    let owner = config.owner.clone();
    let node = NodeRef::<leptos::html::Section>::new();

    #[cfg(feature = "csr")]
    Effect::new(move || {
        use carousel::consts::HERO_REPLAY_THRESHOLD;

        let Some(el) = node.get() else {
            return;
        };
        let _ = el.class_list().add_1(LOADED_CLASS);
        let target = el.clone();
        crate::util::observer::observe_visibility(&el, HERO_REPLAY_THRESHOLD, move |visible| {
            if visible {
                replay(&target);
            }
        });
    });

    view! {
        <section id="home" class="hero" node_ref=node>
            <p class="hero-kicker">"Hello, I'm"</p>
            <h1 class="hero-name">
                <span class="underline">{owner}</span>
            </h1>
            <p class="hero-tagline">"Designer taking ideas from first sketch to finished product."</p>
        </section>
    }
}

/// Restart the CSS animation: drop the class, reset the underline, force a
/// reflow, then add the class back.
#[cfg(feature = "csr")]
fn replay(el: &web_sys::HtmlElement) {
    use wasm_bindgen::JsCast;

    let classes = el.class_list();
    let _ = classes.remove_1(LOADED_CLASS);
    if let Some(underline) = el
        .query_selector(".underline")
        .ok()
        .flatten()
        .and_then(|u| u.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = underline.style().set_property("background-size", "0% .11em");
    }
    let _ = el.offset_width();
    let _ = classes.add_1(LOADED_CLASS);
}
