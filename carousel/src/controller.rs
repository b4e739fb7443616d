//! Modal carousel state machine.
//!
//! [`CarouselController`] owns the only mutable carousel state. Every input
//! adapter (keys, dots, arrow buttons, swipes, backdrop clicks) funnels into
//! [`CarouselController::dispatch`] or one of the primitive operations, and
//! the host applies the returned [`Effect`]s. Asynchronous image results come
//! back through [`CarouselController::on_image_settled`], which drops anything
//! issued for a render that is no longer current.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::sync::Arc;

use url::Url;

use crate::catalog::{Catalog, SlideRecord};
use crate::error::CarouselError;
use crate::input::Command;
use crate::loader::{self, Attempt, FallbackChain, LoadOutcome, LoadRequest, LoadStage, LoadTicket};

/// Side effects the host must perform after a controller call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Show the modal and lock background scrolling.
    ShowModal,
    /// Hide the modal and release background scrolling.
    HideModal,
    /// Load an image and report back via `on_image_settled`.
    LoadImage(LoadRequest),
    /// Warm the cache for a neighbouring slide. Never touches the display.
    Prefetch(String),
}

/// What the modal image element should currently show.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlideImage {
    pub src: Option<String>,
    /// Set once a real image (not the placeholder) finished loading.
    pub loaded: bool,
    pub stage: Option<LoadStage>,
}

/// Mutable carousel state, read by the view layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CarouselState {
    pub is_open: bool,
    pub active_key: Option<String>,
    pub active_slides: Vec<SlideRecord>,
    pub active_index: usize,
    pub is_zoomed: bool,
    pub image: SlideImage,
}

#[derive(Clone, Debug)]
pub struct CarouselController {
    catalog: Arc<Catalog>,
    base_url: Option<Url>,
    state: CarouselState,
    generation: u64,
    chain: Option<FallbackChain>,
    pending: Option<LoadStage>,
}

impl CarouselController {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, base_url: Url) -> Self {
        Self::build(catalog, Some(base_url))
    }

    /// A controller with no document base. Relative image paths cannot be
    /// resolved, so their slides go straight to the fallback stages.
    #[must_use]
    pub fn detached(catalog: Arc<Catalog>) -> Self {
        Self::build(catalog, None)
    }

    fn build(catalog: Arc<Catalog>, base_url: Option<Url>) -> Self {
        Self {
            catalog,
            base_url,
            state: CarouselState::default(),
            generation: 0,
            chain: None,
            pending: None,
        }
    }

    /// Build a controller for a document located at `base`.
    pub fn with_base(catalog: Arc<Catalog>, base: &str) -> Result<Self, CarouselError> {
        let base_url = Url::parse(base).map_err(|_| CarouselError::InvalidBaseUrl(base.to_owned()))?;
        Ok(Self::new(catalog, base_url))
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.state.active_slides.len()
    }

    #[must_use]
    pub fn current_slide(&self) -> Option<&SlideRecord> {
        self.state.active_slides.get(self.state.active_index)
    }

    // --- Transitions ---

    /// Open the gallery for `key` at its first slide.
    ///
    /// A key with no slides is a [`CarouselError::LookupMiss`] and leaves the
    /// state exactly as it was.
    pub fn open(&mut self, key: &str) -> Result<Vec<Effect>, CarouselError> {
        let slides = self.catalog.slides(key);
        if slides.is_empty() {
            return Err(CarouselError::LookupMiss { key: key.to_owned() });
        }

        self.state.active_key = Some(key.to_owned());
        self.state.active_slides = slides.to_vec();
        self.state.active_index = 0;

        let mut effects = Vec::new();
        if !self.state.is_open {
            self.state.is_open = true;
            effects.push(Effect::ShowModal);
        }
        effects.extend(self.navigate(0));
        Ok(effects)
    }

    /// Jump to `index`, wrapping in both directions.
    pub fn go_to(&mut self, index: isize) -> Vec<Effect> {
        if !self.state.is_open {
            return Vec::new();
        }
        self.navigate(index)
    }

    pub fn next(&mut self) -> Vec<Effect> {
        self.step(1)
    }

    pub fn previous(&mut self) -> Vec<Effect> {
        self.step(-1)
    }

    /// Close the modal. Slides and index are kept until the next open.
    pub fn close(&mut self) -> Vec<Effect> {
        if !self.state.is_open {
            return Vec::new();
        }
        self.state.is_open = false;
        self.invalidate();
        vec![Effect::HideModal]
    }

    /// Flip the zoomed display flag. Returns the new value.
    pub fn toggle_zoom(&mut self) -> bool {
        if self.state.is_open {
            self.state.is_zoomed = !self.state.is_zoomed;
        }
        self.state.is_zoomed
    }

    /// Apply an input command. Ignored while closed.
    pub fn dispatch(&mut self, command: Command) -> Vec<Effect> {
        if !self.state.is_open {
            return Vec::new();
        }
        match command {
            Command::Close => self.close(),
            Command::Previous => self.previous(),
            Command::Next => self.next(),
            Command::GoTo(index) => self.go_to(isize::try_from(index).unwrap_or(isize::MAX)),
            Command::ToggleZoom => {
                self.toggle_zoom();
                Vec::new()
            }
        }
    }

    /// Feed back the result of an [`Effect::LoadImage`].
    ///
    /// Results for a superseded render, for a closed carousel, or for a stage
    /// that is no longer pending are discarded. `now_ms` seeds the cache-bust
    /// retry.
    pub fn on_image_settled(&mut self, request: &LoadRequest, outcome: LoadOutcome, now_ms: u64) -> Vec<Effect> {
        if !self.is_current(request) {
            log::debug!(
                "[gallery] discarding stale {} result for slide {} ({})",
                request.stage,
                request.ticket.index,
                request.url
            );
            return Vec::new();
        }

        match outcome {
            LoadOutcome::Loaded => {
                log::debug!("[gallery] loaded slide {} at {} stage: {}", request.ticket.index, request.stage, request.url);
                self.pending = None;
                self.state.image = SlideImage { src: Some(request.url.clone()), loaded: true, stage: Some(request.stage) };
                Vec::new()
            }
            LoadOutcome::Failed => {
                let err = CarouselError::ImageLoadFailure { url: request.url.clone(), stage: request.stage };
                let next = match &self.chain {
                    Some(chain) => chain.next(request.stage, now_ms),
                    None => Attempt::placeholder(),
                };
                match next.stage {
                    LoadStage::CacheBusted => log::warn!("[gallery] {err}; retrying with cache-bust"),
                    LoadStage::Thumbnail => log::error!("[gallery] {err}; using project thumbnail fallback"),
                    LoadStage::Placeholder => log::error!("[gallery] {err}; using transparent placeholder"),
                    LoadStage::Primary => log::warn!("[gallery] {err}"),
                }
                self.issue(next)
            }
        }
    }

    // --- Internals ---

    fn step(&mut self, delta: isize) -> Vec<Effect> {
        let current = isize::try_from(self.state.active_index).unwrap_or_default();
        self.go_to(current.saturating_add(delta))
    }

    /// Reset zoom, then render the wrapped index.
    fn navigate(&mut self, index: isize) -> Vec<Effect> {
        let len = self.state.active_slides.len();
        if len == 0 {
            return Vec::new();
        }
        self.state.active_index = wrap_index(index, len);
        self.state.is_zoomed = false;
        self.render_slide()
    }

    fn render_slide(&mut self) -> Vec<Effect> {
        self.invalidate();
        self.state.image.loaded = false;

        let index = self.state.active_index;
        let Some(slide) = self.state.active_slides.get(index) else {
            return Vec::new();
        };

        let primary = loader::resolve(self.base_url.as_ref(), &slide.image);
        let thumbnail = self
            .state
            .active_key
            .as_deref()
            .and_then(|key| self.catalog.thumbnail(key))
            .and_then(|path| loader::resolve(self.base_url.as_ref(), path))
            .map(String::from);
        let chain = FallbackChain::new(primary, thumbnail);
        let first = chain.first();
        self.chain = Some(chain);

        let mut effects = self.issue(first);
        effects.extend(self.prefetch_neighbours().into_iter().map(Effect::Prefetch));
        effects
    }

    /// Turn an attempt into a pending load, or apply the placeholder directly.
    fn issue(&mut self, attempt: Attempt) -> Vec<Effect> {
        if attempt.stage == LoadStage::Placeholder {
            self.pending = None;
            self.state.image = SlideImage { src: Some(attempt.url), loaded: false, stage: Some(LoadStage::Placeholder) };
            return Vec::new();
        }
        self.pending = Some(attempt.stage);
        vec![Effect::LoadImage(LoadRequest {
            ticket: LoadTicket { generation: self.generation, index: self.state.active_index },
            stage: attempt.stage,
            url: attempt.url,
        })]
    }

    fn prefetch_neighbours(&self) -> Vec<String> {
        let len = self.state.active_slides.len();
        if len < 2 {
            return Vec::new();
        }
        let index = self.state.active_index;
        let prev = (index + len - 1) % len;
        let next = (index + 1) % len;
        let mut targets = vec![prev];
        if next != prev {
            targets.push(next);
        }
        targets
            .into_iter()
            .filter_map(|i| self.state.active_slides.get(i))
            .filter_map(|slide| loader::resolve(self.base_url.as_ref(), &slide.image))
            .map(String::from)
            .collect()
    }

    fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }

    fn is_current(&self, request: &LoadRequest) -> bool {
        self.state.is_open
            && request.ticket.generation == self.generation
            && request.ticket.index == self.state.active_index
            && self.pending == Some(request.stage)
    }
}

/// Wrap `index` into `0..len`. Negative indices count back from the end.
///
/// `len` must be non-zero.
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn wrap_index(index: isize, len: usize) -> usize {
    index.rem_euclid(len as isize) as usize
}
