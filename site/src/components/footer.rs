//! Page footer.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use std::sync::Arc;

use carousel::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let config = expect_context::<Arc<SiteConfig>>();
    let text = footer_text(crate::util::dom::current_year(), &config.owner);

    view! {
        <footer class="footer">
            <p>{text}</p>
        </footer>
    }
}

fn footer_text(year: Option<u32>, owner: &str) -> String {
    match year {
        Some(year) => format!("© {year} {owner}"),
        None => format!("© {owner}"),
    }
}
