//! Thin wrappers over `window` and `document`.

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Current page URL, used as the base for relative image paths.
pub fn document_href() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.location().href().ok())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Wall-clock milliseconds; feeds the cache-busting token.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_ms() -> u64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now().max(0.0) as u64
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}

pub fn current_year() -> Option<u32> {
    #[cfg(feature = "csr")]
    {
        Some(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Toggle a class on `<body>`.
pub fn set_body_class(class: &str, on: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.class_list().toggle_with_force(class, on);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (class, on);
    }
}

/// Toggle a class on `<html>`.
pub fn set_root_class(class: &str, on: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.class_list().toggle_with_force(class, on);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (class, on);
    }
}

/// Evaluate a media query. Unsupported queries count as not matching.
pub fn media_matches(query: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(query).ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = query;
        false
    }
}

/// Devices without hover or with a coarse pointer.
pub fn is_touch_like() -> bool {
    media_matches("(hover: none)") || media_matches("(pointer: coarse)")
}

/// Devices where the custom cursor makes sense.
pub fn has_fine_pointer() -> bool {
    media_matches("(pointer: fine)") && media_matches("(hover: hover)")
}

/// Viewport `(width, height)` in CSS pixels.
pub fn viewport_size() -> (f64, f64) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return (0.0, 0.0);
        };
        let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };
        (read(window.inner_width()), read(window.inner_height()))
    }
    #[cfg(not(feature = "csr"))]
    {
        (0.0, 0.0)
    }
}

/// Smooth-scroll a section into view.
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(el) = element_by_id(id) else {
            log::debug!("[nav] no section `{id}` to scroll to");
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

#[cfg(feature = "csr")]
pub fn element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
}

/// Attach a listener for the lifetime of the page.
#[cfg(feature = "csr")]
pub fn listen_forever(target: &web_sys::EventTarget, event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("[dom] failed to listen for {event}: {err:?}");
        return;
    }
    closure.forget();
}
