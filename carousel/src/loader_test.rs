use super::*;

fn base() -> Url {
    match Url::parse("https://example.com/portfolio/index.html") {
        Ok(url) => url,
        Err(err) => panic!("bad fixture url: {err}"),
    }
}

fn url(raw: &str) -> Url {
    match Url::parse(raw) {
        Ok(url) => url,
        Err(err) => panic!("bad fixture url {raw}: {err}"),
    }
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_relative_path_against_document() {
    let resolved = resolve(Some(&base()), "assets/images/blox_action.jpg");
    assert_eq!(
        resolved.map(String::from).as_deref(),
        Some("https://example.com/portfolio/assets/images/blox_action.jpg")
    );
}

#[test]
fn resolve_encodes_spaces() {
    let resolved = resolve(Some(&base()), "assets/images/Poppy Banner.jpg");
    assert_eq!(
        resolved.map(String::from).as_deref(),
        Some("https://example.com/portfolio/assets/images/Poppy%20Banner.jpg")
    );
}

#[test]
fn resolve_keeps_absolute_urls() {
    let resolved = resolve(Some(&base()), "https://cdn.example.net/a.jpg");
    assert_eq!(resolved.map(String::from).as_deref(), Some("https://cdn.example.net/a.jpg"));
}

#[test]
fn resolve_without_base_accepts_only_absolute() {
    assert!(resolve(None, "assets/a.jpg").is_none());
    assert_eq!(
        resolve(None, "https://cdn.example.net/a.jpg").map(String::from).as_deref(),
        Some("https://cdn.example.net/a.jpg")
    );
}

#[test]
fn resolve_rejects_blank_path() {
    assert!(resolve(Some(&base()), "  ").is_none());
}

// =============================================================
// cache_bust
// =============================================================

#[test]
fn cache_bust_adds_query() {
    assert_eq!(cache_bust(&url("https://example.com/a.jpg"), 1700), "https://example.com/a.jpg?v=1700");
}

#[test]
fn cache_bust_extends_existing_query() {
    assert_eq!(
        cache_bust(&url("https://example.com/a.jpg?w=640"), 42),
        "https://example.com/a.jpg?w=640&v=42"
    );
}

// =============================================================
// FallbackChain
// =============================================================

#[test]
fn chain_walks_all_stages_in_order() {
    let chain = FallbackChain::new(
        Some(url("https://example.com/a.jpg")),
        Some("https://example.com/thumb.jpg".to_owned()),
    );

    let first = chain.first();
    assert_eq!(first.stage, LoadStage::Primary);
    assert_eq!(first.url, "https://example.com/a.jpg");

    let retry = chain.next(first.stage, 99);
    assert_eq!(retry.stage, LoadStage::CacheBusted);
    assert_eq!(retry.url, "https://example.com/a.jpg?v=99");

    let thumb = chain.next(retry.stage, 100);
    assert_eq!(thumb.stage, LoadStage::Thumbnail);
    assert_eq!(thumb.url, "https://example.com/thumb.jpg");

    let last = chain.next(thumb.stage, 101);
    assert_eq!(last, Attempt::placeholder());
}

#[test]
fn chain_without_thumbnail_goes_straight_to_placeholder() {
    let chain = FallbackChain::new(Some(url("https://example.com/a.jpg")), None);
    assert_eq!(chain.next(LoadStage::CacheBusted, 0), Attempt::placeholder());
}

#[test]
fn chain_without_primary_starts_at_thumbnail() {
    let chain = FallbackChain::new(None, Some("https://example.com/t.jpg".to_owned()));
    assert_eq!(chain.first().stage, LoadStage::Thumbnail);
}

#[test]
fn chain_without_any_source_is_placeholder() {
    let chain = FallbackChain::new(None, None);
    assert_eq!(chain.first(), Attempt::placeholder());
}

#[test]
fn placeholder_is_terminal() {
    let chain = FallbackChain::new(None, None);
    assert_eq!(chain.next(LoadStage::Placeholder, 0), Attempt::placeholder());
}

#[test]
fn stage_labels_render_in_messages() {
    assert_eq!(LoadStage::CacheBusted.to_string(), "cache-busted");
    assert_eq!(LoadStage::Thumbnail.label(), "thumbnail");
}
