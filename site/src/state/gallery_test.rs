#![cfg(not(feature = "csr"))]

use std::sync::Arc;

use carousel::loader::LoadStage;
use carousel::{CarouselController, Command};

use super::*;
use crate::util::content;

fn gallery(base: Option<&str>) -> Gallery {
    let catalog = Arc::new(content::load().catalog);
    let controller = match base {
        Some(base) => CarouselController::with_base(catalog, base).unwrap_or_else(|err| panic!("{err}")),
        None => CarouselController::detached(catalog),
    };
    Gallery::new(controller)
}

#[test]
fn unknown_project_keeps_gallery_closed() {
    let gallery = gallery(None);
    gallery.open("no-such-project");
    assert!(!gallery.is_open_untracked());
}

#[test]
fn failed_loads_walk_the_chain_to_the_placeholder() {
    // Without a browser every load fails, so the chain runs to its end.
    let gallery = gallery(Some("https://portfolio.test/"));
    gallery.open("bendy");
    assert!(gallery.is_open_untracked());
    let image = gallery.with(|c| c.state().image.clone());
    assert_eq!(image.stage, Some(LoadStage::Placeholder));
    assert!(!image.loaded);
    assert!(image.src.is_some_and(|src| src.starts_with("data:image/")));
}

#[test]
fn commands_navigate_and_close() {
    let gallery = gallery(None);
    gallery.open("bendy");
    let count = gallery.with(CarouselController::slide_count);
    assert!(count > 1);

    gallery.dispatch(Command::Previous);
    assert_eq!(gallery.with(|c| c.state().active_index), count - 1);

    gallery.dispatch(Command::ToggleZoom);
    assert!(gallery.with(|c| c.state().is_zoomed));

    gallery.dispatch(Command::Close);
    assert!(!gallery.is_open_untracked());
}
