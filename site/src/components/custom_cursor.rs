//! Custom cursor for mouse users.
//!
//! Rendered only on fine-pointer, hover-capable devices. The native cursor
//! is hidden (via `cursor-enabled` on `<html>`) after the first mouse move.

use carousel::cursor::CursorState;
use leptos::prelude::*;

use crate::util::dom;

const CURSOR_ENABLED_CLASS: &str = "cursor-enabled";

#[component]
pub fn CustomCursor() -> impl IntoView {
    let fine_pointer = dom::has_fine_pointer();
    let cursor = RwSignal::new(CursorState::default());
    let position = RwSignal::new((0.0_f64, 0.0_f64));

    #[cfg(feature = "csr")]
    if fine_pointer {
        listen(cursor, position);
    }

    Effect::new(move || {
        if cursor.with(|c| c.enabled) {
            dom::set_root_class(CURSOR_ENABLED_CLASS, true);
        }
    });

    view! {
        <Show when=move || fine_pointer>
            <div
                id="customCursor"
                class="custom-cursor"
                aria-hidden="true"
                class:is-visible=move || cursor.with(|c| c.visible)
                class:is-image=move || cursor.with(|c| c.over_image)
                style:left=move || format!("{}px", position.get().0)
                style:top=move || format!("{}px", position.get().1)
            ></div>
        </Show>
    }
}

#[cfg(feature = "csr")]
const IMAGE_SELECTOR: &str = "#projectGrid .card img, #modalImg";

#[cfg(feature = "csr")]
fn listen(cursor: RwSignal<CursorState>, position: RwSignal<(f64, f64)>) {
    use carousel::cursor::PointerKind;
    use leptos::ev;

    let hide = move || cursor.update(CursorState::hide);

    let _ = window_event_listener(ev::pointermove, move |ev| {
        moved(cursor, position, PointerKind::from_dom(&ev.pointer_type()), ev.client_x(), ev.client_y());
    });
    let _ = window_event_listener(ev::pointerover, move |ev| {
        if !is_image(ev.target()) {
            return;
        }
        let kind = PointerKind::from_dom(&ev.pointer_type());
        moved(cursor, position, kind, ev.client_x(), ev.client_y());
        cursor.update(|c| c.set_over_image(kind, true));
    });
    let _ = window_event_listener(ev::pointerout, move |ev| {
        if !is_image(ev.target()) || is_image(ev.related_target()) {
            return;
        }
        cursor.update(|c| c.set_over_image(None, false));
    });
    let _ = window_event_listener(ev::blur, move |_| hide());

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(root) = document.document_element() {
        dom::listen_forever(&root, "mouseleave", move |_| hide());
    }
    let doc = document.clone();
    dom::listen_forever(&document, "visibilitychange", move |_| {
        if doc.hidden() {
            hide();
        }
    });
}

/// Record a move; position writes are batched to one per animation frame.
#[cfg(feature = "csr")]
fn moved(
    cursor: RwSignal<CursorState>,
    position: RwSignal<(f64, f64)>,
    kind: Option<carousel::cursor::PointerKind>,
    x: i32,
    y: i32,
) {
    let was_shown = cursor.with_untracked(|c| c.enabled && c.visible);
    let schedule = cursor
        .try_update_untracked(|c| c.pointer_moved(kind, f64::from(x), f64::from(y)))
        .unwrap_or(false);
    if !was_shown && cursor.with_untracked(|c| c.visible) {
        cursor.notify();
    }
    if schedule {
        request_animation_frame(move || {
            if let Some(frame) = cursor.try_update_untracked(CursorState::take_frame) {
                position.set(frame);
            }
        });
    }
}

#[cfg(feature = "csr")]
fn is_image(target: Option<web_sys::EventTarget>) -> bool {
    use wasm_bindgen::JsCast;

    target
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(IMAGE_SELECTOR).ok().flatten())
        .is_some()
}
