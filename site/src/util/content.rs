//! Embedded portfolio content.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use carousel::SiteConfig;

const PORTFOLIO_JSON: &str = include_str!("../../content/portfolio.json");

/// Parse the embedded portfolio. A broken document renders an empty page
/// rather than aborting the app.
pub fn load() -> SiteConfig {
    parse(PORTFOLIO_JSON)
}

fn parse(raw: &str) -> SiteConfig {
    match SiteConfig::from_json(raw) {
        Ok(config) => config,
        Err(err) => {
            log::error!("[config] {err}; rendering without projects");
            SiteConfig::default()
        }
    }
}
