//! Reactive handle over the carousel controller.
//!
//! Components send commands through [`Gallery`]; it runs the controller and
//! performs the returned effects, feeding image load results back in.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use carousel::loader::{LoadOutcome, LoadRequest};
use carousel::{CarouselController, Command, Effect};
use leptos::prelude::*;

use crate::util::{dom, image_loader};

/// Body class that locks background scroll while the modal is open.
const MODAL_OPEN_CLASS: &str = "modal-open";

#[derive(Clone, Copy)]
pub struct Gallery {
    controller: RwSignal<CarouselController>,
}

impl Gallery {
    pub fn new(controller: CarouselController) -> Self {
        Self { controller: RwSignal::new(controller) }
    }

    /// Tracked read of the controller.
    pub fn with<T>(self, f: impl FnOnce(&CarouselController) -> T) -> T {
        self.controller.with(f)
    }

    pub fn is_open_untracked(self) -> bool {
        self.controller.with_untracked(CarouselController::is_open)
    }

    /// Open the gallery for a project card. Unknown or empty projects are
    /// ignored.
    pub fn open(self, key: &str) {
        match self.controller.try_update(|c| c.open(key)) {
            Some(Ok(effects)) => self.apply(effects),
            Some(Err(err)) => log::debug!("[gallery] {err}"),
            None => {}
        }
    }

    pub fn dispatch(self, command: Command) {
        let effects = self.controller.try_update(|c| c.dispatch(command)).unwrap_or_default();
        self.apply(effects);
    }

    fn settle(self, request: &LoadRequest, outcome: LoadOutcome) {
        let effects = self
            .controller
            .try_update(|c| c.on_image_settled(request, outcome, dom::now_ms()))
            .unwrap_or_default();
        self.apply(effects);
    }

    fn apply(self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ShowModal => dom::set_body_class(MODAL_OPEN_CLASS, true),
                Effect::HideModal => dom::set_body_class(MODAL_OPEN_CLASS, false),
                Effect::LoadImage(request) => self.spawn_load(request),
                Effect::Prefetch(url) => image_loader::prefetch(&url),
            }
        }
    }

    fn spawn_load(self, request: LoadRequest) {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let outcome = image_loader::load(request.url.clone()).await;
            self.settle(&request, outcome);
        });
        #[cfg(not(feature = "csr"))]
        self.settle(&request, LoadOutcome::Failed);
    }
}
