//! Site header: logo, section links, mobile menu toggle, dark-mode toggle.

use std::sync::Arc;

use carousel::SiteConfig;
use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn Header() -> impl IntoView {
    let config = expect_context::<Arc<SiteConfig>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let nav_ref = NodeRef::<leptos::html::Nav>::new();
    let toggle_ref = NodeRef::<leptos::html::Button>::new();

    let owner = config.owner.clone();
    let links = config.sections.clone();
    let storage_key = config.theme_storage_key.clone();

    let close_menu = move || {
        ui.maybe_update(|u| u.menu.close());
    };

    let on_toggle = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        ui.update(|u| {
            u.menu.toggle();
        });
        #[cfg(feature = "csr")]
        {
            if crate::util::dom::is_touch_like() {
                flash_star(ui);
            }
            if let Some(button) = toggle_ref.get_untracked() {
                let _ = button.blur();
            }
        }
    };

    let on_dark_toggle = move |_| {
        ui.update(|u| u.dark_mode = dark_mode::toggle(u.dark_mode, &storage_key));
    };

    #[cfg(feature = "csr")]
    {
        use leptos::ev;
        use wasm_bindgen::JsCast;

        let _ = window_event_listener(ev::click, move |ev| {
            if !ui.with_untracked(|u| u.menu.is_open()) {
                return;
            }
            let Some(nav) = nav_ref.get_untracked() else {
                return;
            };
            let inside = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                .is_some_and(|node| nav.contains(Some(&node)));
            if !inside {
                close_menu();
            }
        });
        let _ = window_event_listener(ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                close_menu();
            }
        });
        let _ = window_event_listener(ev::resize, move |_| {
            let (width, _) = crate::util::dom::viewport_size();
            ui.maybe_update(|u| u.menu.on_resize(width));
        });
    }

    view! {
        <header class="header">
            <nav class="nav" class:is-open=move || ui.with(|u| u.menu.is_open()) node_ref=nav_ref>
                <a class="logo" href="#home">{owner}</a>
                <button
                    id="menuToggle"
                    class="menu-toggle"
                    class:is-star=move || ui.with(|u| u.menu.is_flashing())
                    aria-expanded=move || ui.with(|u| u.menu.aria_expanded())
                    aria-label=move || ui.with(|u| u.menu.aria_label())
                    node_ref=toggle_ref
                    on:click=on_toggle
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul class="nav-links">
                    {links
                        .into_iter()
                        .map(|link| {
                            let href = format!("#{}", link.id);
                            view! {
                                <li>
                                    <a href=href on:click=move |_| close_menu()>{link.label}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button id="darkModeToggle" class="dark-toggle" aria-label="Toggle dark mode" on:click=on_dark_toggle>
                    "◐"
                </button>
            </nav>
        </header>
    }
}

/// Light the toggle star; a later press restarts the timer.
#[cfg(feature = "csr")]
fn flash_star(ui: RwSignal<UiState>) {
    use carousel::consts::MENU_STAR_FLASH_MS;
    use gloo_timers::callback::Timeout;

    let Some(token) = ui.try_update(|u| u.menu.begin_flash()) else {
        return;
    };
    Timeout::new(MENU_STAR_FLASH_MS, move || {
        ui.maybe_update(|u| u.menu.end_flash(token));
    })
    .forget();
}
