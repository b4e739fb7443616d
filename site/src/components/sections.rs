//! Workflow, resume, and contact sections.

use std::sync::Arc;

use carousel::SiteConfig;
use carousel::consts::{RESUME_REVEAL_THRESHOLD, WORKFLOW_REVEAL_THRESHOLD};
use leptos::prelude::*;

use crate::components::reveal::RevealSection;

struct Step {
    number: &'static str,
    title: &'static str,
    body: &'static str,
}

const STEPS: &[Step] = &[
    Step { number: "01", title: "Concept", body: "Sketches, references, and the problem worth solving." },
    Step { number: "02", title: "Design", body: "Form, material, and detail resolved in CAD and renders." },
    Step { number: "03", title: "Prototype", body: "Physical models to test fit, feel, and function." },
    Step { number: "04", title: "Production", body: "Drawings and vendor hand-off for manufacturing." },
];

/// Process steps with number parallax.
#[component]
pub fn Workflow() -> impl IntoView {
    #[cfg(feature = "csr")]
    {
        use leptos::ev;

        Effect::new(move || update_parallax());
        let _ = window_event_listener(ev::scroll, move |_| update_parallax());
        let _ = window_event_listener(ev::resize, move |_| update_parallax());
    }

    view! {
        <RevealSection id="concept-to-production" class="parallax-section" threshold=WORKFLOW_REVEAL_THRESHOLD>
            <h2 class="section-title">"Concept to Production"</h2>
            <div class="steps">
                {STEPS
                    .iter()
                    .map(|step| {
                        view! {
                            <div class="step">
                                <h1>{step.number}</h1>
                                <h3>{step.title}</h3>
                                <p>{step.body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </RevealSection>
    }
}

/// Write `--parallaxY` on every step number from its step's position.
#[cfg(feature = "csr")]
fn update_parallax() {
    use carousel::parallax;
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(numbers) = document.query_selector_all(".parallax-section .step h1") else {
        return;
    };
    let (width, height) = crate::util::dom::viewport_size();
    for i in 0..numbers.length() {
        let Some(number) = numbers.item(i).and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok()) else {
            continue;
        };
        let Some(step) = number.parent_element() else {
            continue;
        };
        let rect = step.get_bounding_client_rect();
        let shift = parallax::step_shift(rect.top(), rect.height(), height, width);
        let _ = number.style().set_property("--parallaxY", &parallax::css_value(shift));
    }
}

#[component]
pub fn Resume() -> impl IntoView {
    view! {
        <RevealSection id="resume" class="resume-section" threshold=RESUME_REVEAL_THRESHOLD>
            <h2 class="section-title">"Resume"</h2>
            <div class="resume-grid">
                <div class="resume-block">
                    <h3>"Experience"</h3>
                    <p>"Industrial and product design across consumer goods, furniture, and packaging."</p>
                </div>
                <div class="resume-block">
                    <h3>"Tools"</h3>
                    <p>"SolidWorks, KeyShot, Rhino, Adobe Creative Suite, rapid prototyping."</p>
                </div>
            </div>
            <a class="resume-download" href="assets/resume.pdf" target="_blank" rel="noopener">"Download PDF"</a>
        </RevealSection>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let config = expect_context::<Arc<SiteConfig>>();
    let owner = config.owner.clone();

    view! {
        <section id="contact" class="contact">
            <h2 class="section-title">"Contact"</h2>
            <p>"Open to design roles and freelance projects. Say hello to " {owner} "."</p>
        </section>
    }
}
