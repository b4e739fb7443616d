//! Project catalog and gallery registry.
//!
//! The catalog is the ordered card list; the registry maps each project key
//! to its ordered slides. Both are read-only after load.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One card in the project grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub key: String,
    pub title: String,
    pub category: String,
    pub thumbnail: String,
    /// Render the thumbnail uncropped (logo-style artwork).
    #[serde(default)]
    pub contain: bool,
}

/// One image + caption unit inside a gallery.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideRecord {
    pub image: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Projects in display order plus their galleries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub galleries: BTreeMap<String, Vec<SlideRecord>>,
}

impl Catalog {
    #[must_use]
    pub fn new(projects: Vec<ProjectRecord>, galleries: BTreeMap<String, Vec<SlideRecord>>) -> Self {
        Self { projects, galleries }
    }

    /// Look up a project card by key.
    #[must_use]
    pub fn project(&self, key: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.key == key)
    }

    /// Slides registered for `key`. Unknown keys yield an empty slice.
    #[must_use]
    pub fn slides(&self, key: &str) -> &[SlideRecord] {
        self.galleries.get(key).map_or(&[], Vec::as_slice)
    }

    /// Thumbnail path of the owning project, used as an image fallback.
    #[must_use]
    pub fn thumbnail(&self, key: &str) -> Option<&str> {
        self.project(key)
            .map(|p| p.thumbnail.as_str())
            .filter(|t| !t.is_empty())
    }

    /// Project keys that cannot be opened (no gallery, or an empty one).
    #[must_use]
    pub fn unopenable_keys(&self) -> Vec<&str> {
        self.projects
            .iter()
            .filter(|p| self.slides(&p.key).is_empty())
            .map(|p| p.key.as_str())
            .collect()
    }
}
