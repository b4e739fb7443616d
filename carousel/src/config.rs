//! Site configuration: owner, page sections, catalog, and galleries.
//!
//! Content is data, not code. The site embeds one JSON document and parses it
//! at startup; swapping the portfolio means swapping that file.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::consts::DEFAULT_THEME_STORAGE_KEY;

/// Error returned by [`SiteConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid JSON or does not match the schema.
    #[error("failed to parse site config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A project has a blank key.
    #[error("project key must not be empty")]
    EmptyKey,
    /// Two projects share a key.
    #[error("duplicate project key `{0}`")]
    DuplicateProject(String),
}

/// A page section reachable from the dot-nav.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionLink {
    pub id: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub owner: String,
    #[serde(default = "default_theme_storage_key")]
    pub theme_storage_key: String,
    #[serde(default)]
    pub sections: Vec<SectionLink>,
    #[serde(flatten)]
    pub catalog: Catalog,
}

fn default_theme_storage_key() -> String {
    DEFAULT_THEME_STORAGE_KEY.to_owned()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: String::new(),
            theme_storage_key: default_theme_storage_key(),
            sections: Vec::new(),
            catalog: Catalog::default(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON site config.
    ///
    /// Projects without slides are accepted but logged, since their cards
    /// will not open.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        for key in config.catalog.unopenable_keys() {
            log::warn!("[config] project `{key}` has no slides; its card will not open");
        }
        Ok(config)
    }

    /// Check project keys are present and unique.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for project in &self.catalog.projects {
            if project.key.trim().is_empty() {
                return Err(ConfigError::EmptyKey);
            }
            if !seen.insert(project.key.as_str()) {
                return Err(ConfigError::DuplicateProject(project.key.clone()));
            }
        }
        Ok(())
    }

    /// Section ids in page order.
    #[must_use]
    pub fn section_ids(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.id.as_str()).collect()
    }
}
