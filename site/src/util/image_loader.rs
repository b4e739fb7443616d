//! Off-screen image loading for the gallery.
//!
//! Loads go through a detached `HtmlImageElement`; once it settles the modal
//! `<img>` is pointed at the same URL and renders from cache.

use carousel::loader::LoadOutcome;

/// Load `url` and report whether it decoded.
pub async fn load(url: String) -> LoadOutcome {
    #[cfg(feature = "csr")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use futures::channel::oneshot;
        use wasm_bindgen::{JsCast, closure::Closure};

        let Ok(img) = web_sys::HtmlImageElement::new() else {
            return LoadOutcome::Failed;
        };
        let (tx, rx) = oneshot::channel::<LoadOutcome>();
        let tx = Rc::new(RefCell::new(Some(tx)));
        let settle = |outcome: LoadOutcome| {
            let tx = Rc::clone(&tx);
            Closure::<dyn FnMut()>::new(move || {
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(outcome);
                }
            })
        };
        let on_load = settle(LoadOutcome::Loaded);
        let on_error = settle(LoadOutcome::Failed);

        img.set_onload(Some(on_load.as_ref().unchecked_ref()));
        img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        img.set_decoding("async");
        img.set_src(&url);

        let outcome = rx.await.unwrap_or(LoadOutcome::Failed);
        img.set_onload(None);
        img.set_onerror(None);
        outcome
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        LoadOutcome::Failed
    }
}

/// Start fetching `url` so a later navigation hits the cache.
pub fn prefetch(url: &str) {
    #[cfg(feature = "csr")]
    {
        match web_sys::HtmlImageElement::new() {
            Ok(img) => {
                img.set_decoding("async");
                img.set_src(url);
            }
            Err(err) => log::debug!("[gallery] prefetch skipped for {url}: {err:?}"),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}
