//! `IntersectionObserver` wrapper for reveal and scroll-spy effects.

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Call `on_change` with the intersection state of `target` each time it
/// crosses `threshold`. The observer lives as long as the page.
pub fn observe_visibility(target: &web_sys::Element, threshold: f64, on_change: impl Fn(bool) + 'static) -> bool {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_change(entry.is_intersecting());
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(target);
            callback.forget();
            true
        }
        Err(err) => {
            log::warn!("[reveal] IntersectionObserver unavailable: {err:?}");
            false
        }
    }
}
