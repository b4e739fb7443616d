//! Gallery modal: slide image, prev/next, dots, zoom, and captions.
//!
//! All state lives in the [`Gallery`] controller; this component only maps
//! DOM input to [`Command`]s and renders [`carousel::CarouselState`].

use carousel::input::SwipeTracker;
use carousel::{CarouselController, Command};
use leptos::prelude::*;

use crate::state::gallery::Gallery;

#[component]
pub fn CarouselModal() -> impl IntoView {
    let gallery = expect_context::<Gallery>();
    let swipe = RwSignal::new(SwipeTracker::new());

    let is_open = move || gallery.with(CarouselController::is_open);
    let is_zoomed = move || gallery.with(|c| c.state().is_zoomed);
    let loaded = move || gallery.with(|c| c.state().image.loaded);
    let src = move || gallery.with(|c| c.state().image.src.clone());
    let title = move || gallery.with(|c| c.current_slide().map(|s| s.title.clone()).unwrap_or_default());
    let description = move || gallery.with(|c| c.current_slide().map(|s| s.description.clone()).unwrap_or_default());
    let slide_count = move || gallery.with(CarouselController::slide_count);
    let active_index = move || gallery.with(|c| c.state().active_index);

    let send = move |command: Command| gallery.dispatch(command);

    #[cfg(feature = "csr")]
    {
        let _ = window_event_listener(leptos::ev::keydown, move |ev| {
            if !gallery.is_open_untracked() {
                return;
            }
            if let Some(command) = carousel::input::command_for_key(&ev.key()) {
                ev.prevent_default();
                send(command);
            }
        });
    }

    let on_touch_start = move |ev: leptos::ev::TouchEvent| {
        #[cfg(feature = "csr")]
        {
            if !gallery.is_open_untracked() {
                return;
            }
            if let Some(touch) = ev.touches().get(0) {
                let (x, y) = (f64::from(touch.client_x()), f64::from(touch.client_y()));
                swipe.update(|s| s.begin(x, y));
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };
    let on_touch_move = move |ev: leptos::ev::TouchEvent| {
        #[cfg(feature = "csr")]
        {
            if let Some(touch) = ev.touches().get(0) {
                let (x, y) = (f64::from(touch.client_x()), f64::from(touch.client_y()));
                swipe.update(|s| s.track(x, y));
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };
    let on_touch_end = move |_: leptos::ev::TouchEvent| {
        if let Some(command) = swipe.try_update(SwipeTracker::finish).flatten() {
            send(command);
        }
    };

    view! {
        <div
            id="modal"
            class="modal"
            class:open=is_open
            role="dialog"
            aria-modal="true"
            aria-hidden=move || if is_open() { "false" } else { "true" }
            on:click=move |_| send(Command::Close)
            on:touchstart=on_touch_start
            on:touchmove=on_touch_move
            on:touchend=on_touch_end
        >
            <div class="panel" on:click=move |ev| ev.stop_propagation()>
                <button id="closeBtn" class="close" aria-label="Close" on:click=move |_| send(Command::Close)>
                    "✕"
                </button>
                <div class="carousel">
                    <button id="prevBtn" class="carousel-nav prev" aria-label="Previous slide" on:click=move |_| send(Command::Previous)>
                        "‹"
                    </button>
                    <img id="modalImg" src=src alt=title class:loaded=loaded class:zoomed=is_zoomed/>
                    <button id="nextBtn" class="carousel-nav next" aria-label="Next slide" on:click=move |_| send(Command::Next)>
                        "›"
                    </button>
                    <button
                        id="zoomBtn"
                        class="zoom"
                        aria-label="Toggle zoom"
                        aria-pressed=move || if is_zoomed() { "true" } else { "false" }
                        style:opacity=move || if is_zoomed() { "0.7" } else { "1" }
                        on:click=move |_| send(Command::ToggleZoom)
                    >
                        "⤢"
                    </button>
                </div>
                <div id="dots" class="dots">
                    {move || {
                        (0..slide_count())
                            .map(|i| {
                                view! {
                                    <button
                                        class="dot"
                                        class:active=move || active_index() == i
                                        aria-label=format!("Go to slide {}", i + 1)
                                        on:click=move |_| send(Command::GoTo(i))
                                    ></button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <h3 id="modalTitle">{title}</h3>
                <p id="modalDesc">{description}</p>
            </div>
        </div>
    }
}
