//! Staged image fallback chain.
//!
//! A slide render produces one [`FallbackChain`]. The host loads one
//! [`Attempt`] at a time and reports the outcome; on failure the chain yields
//! the next stage, ending at [`consts::PLACEHOLDER_PIXEL`](crate::consts::PLACEHOLDER_PIXEL),
//! which never needs a network round trip.
//!
//! Stage order: primary URL → primary with a cache-bust query pair → project
//! thumbnail → transparent placeholder.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use std::fmt;

use url::Url;

use crate::consts::{CACHE_BUST_PARAM, PLACEHOLDER_PIXEL};

/// Position of an attempt within the fallback chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStage {
    Primary,
    CacheBusted,
    Thumbnail,
    Placeholder,
}

impl LoadStage {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::CacheBusted => "cache-busted",
            Self::Thumbnail => "thumbnail",
            Self::Placeholder => "placeholder",
        }
    }
}

impl fmt::Display for LoadStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifies the slide render a load was issued for.
///
/// `generation` changes on every render and every close, so a result carrying
/// an older generation no longer describes what is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub index: usize,
}

/// One URL to try, and where it sits in the chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attempt {
    pub stage: LoadStage,
    pub url: String,
}

impl Attempt {
    #[must_use]
    pub fn placeholder() -> Self {
        Self { stage: LoadStage::Placeholder, url: PLACEHOLDER_PIXEL.to_owned() }
    }
}

/// A load the host must perform and report back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    pub ticket: LoadTicket,
    pub stage: LoadStage,
    pub url: String,
}

/// Result of a host image load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
}

/// Fallback sources for a single slide render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FallbackChain {
    primary: Option<Url>,
    thumbnail: Option<String>,
}

impl FallbackChain {
    /// `primary` is `None` when the slide path could not be resolved; the
    /// chain then starts at the thumbnail.
    #[must_use]
    pub fn new(primary: Option<Url>, thumbnail: Option<String>) -> Self {
        Self { primary, thumbnail }
    }

    #[must_use]
    pub fn first(&self) -> Attempt {
        match &self.primary {
            Some(url) => Attempt { stage: LoadStage::Primary, url: url.to_string() },
            None => self.after_retry(),
        }
    }

    /// The attempt that follows a failure at `failed`.
    ///
    /// `now_ms` seeds the cache-bust value when retrying the primary URL.
    #[must_use]
    pub fn next(&self, failed: LoadStage, now_ms: u64) -> Attempt {
        match (failed, &self.primary) {
            (LoadStage::Primary, Some(url)) => Attempt { stage: LoadStage::CacheBusted, url: cache_bust(url, now_ms) },
            (LoadStage::Primary | LoadStage::CacheBusted, _) => self.after_retry(),
            (LoadStage::Thumbnail | LoadStage::Placeholder, _) => Attempt::placeholder(),
        }
    }

    fn after_retry(&self) -> Attempt {
        match &self.thumbnail {
            Some(url) => Attempt { stage: LoadStage::Thumbnail, url: url.clone() },
            None => Attempt::placeholder(),
        }
    }
}

/// Resolve a (possibly relative) asset path against the document base URL.
///
/// Without a base only absolute URLs resolve.
#[must_use]
pub fn resolve(base: Option<&Url>, path: &str) -> Option<Url> {
    if path.trim().is_empty() {
        return None;
    }
    let joined = match base {
        Some(base) => base.join(path),
        None => Url::parse(path),
    };
    match joined {
        Ok(url) => Some(url),
        Err(err) => {
            log::warn!("[gallery] cannot resolve `{path}`: {err}");
            None
        }
    }
}

/// Append `v=<token>` to `url`, using `?` or `&` as the existing query requires.
#[must_use]
pub fn cache_bust(url: &Url, token: u64) -> String {
    let mut busted = url.clone();
    busted
        .query_pairs_mut()
        .append_pair(CACHE_BUST_PARAM, &token.to_string());
    busted.into()
}
