use std::collections::BTreeMap;

use super::*;

fn project(key: &str, thumb: &str) -> ProjectRecord {
    ProjectRecord {
        key: key.to_owned(),
        title: key.to_uppercase(),
        category: "Packaging".to_owned(),
        thumbnail: thumb.to_owned(),
        contain: false,
    }
}

fn slide(image: &str) -> SlideRecord {
    SlideRecord { image: image.to_owned(), title: String::new(), description: String::new() }
}

fn catalog() -> Catalog {
    let mut galleries = BTreeMap::new();
    galleries.insert("a".to_owned(), vec![slide("a1.jpg"), slide("a2.jpg")]);
    galleries.insert("empty".to_owned(), Vec::new());
    Catalog::new(
        vec![project("a", "a.jpg"), project("empty", ""), project("orphan", "o.jpg")],
        galleries,
    )
}

#[test]
fn project_lookup_by_key() {
    let catalog = catalog();
    assert_eq!(catalog.project("a").map(|p| p.title.as_str()), Some("A"));
    assert!(catalog.project("zzz").is_none());
}

#[test]
fn slides_for_unknown_key_are_empty() {
    let catalog = catalog();
    assert_eq!(catalog.slides("a").len(), 2);
    assert!(catalog.slides("zzz").is_empty());
}

#[test]
fn thumbnail_skips_blank_paths() {
    let catalog = catalog();
    assert_eq!(catalog.thumbnail("a"), Some("a.jpg"));
    assert_eq!(catalog.thumbnail("empty"), None);
    assert_eq!(catalog.thumbnail("zzz"), None);
}

#[test]
fn unopenable_keys_lists_missing_and_empty_galleries() {
    assert_eq!(catalog().unopenable_keys(), vec!["empty", "orphan"]);
}
