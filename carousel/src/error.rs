//! Error taxonomy for the gallery.
//!
//! None of these are fatal. Each is recovered where it occurs: a lookup miss
//! leaves the carousel closed, an image failure advances the fallback chain,
//! and a missing element disables the enhancement that needed it.

use crate::loader::LoadStage;

/// Errors raised by carousel operations and the browser bridge around them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    /// The requested project key has no (non-empty) gallery.
    #[error("no gallery registered for project `{key}`")]
    LookupMiss { key: String },
    /// An image could not be fetched or decoded at the given stage.
    #[error("image failed to load at {stage} stage: {url}")]
    ImageLoadFailure { url: String, stage: LoadStage },
    /// An element the feature depends on is absent from the document.
    #[error("required element `{0}` is missing from the document")]
    MissingDomElement(&'static str),
    /// The document base URL could not be parsed.
    #[error("invalid base url `{0}`")]
    InvalidBaseUrl(String),
}
