//! Integration tests for listing parsing, the gallery model and deletion

use sketchlist::deletion::parse_sketchlist;
use sketchlist::listing::entries;
use sketchlist::{parse_listing, Gallery, NameRules, ThumbnailRenderer};

use crate::helpers::{filled, listing_body};

fn gallery(body: &str) -> Gallery {
    Gallery::from_listing(
        &parse_listing(body),
        &ThumbnailRenderer::default(),
        &NameRules::default(),
        16,
    )
}

#[test]
fn cat_and_dog_end_to_end() {
    let body = format!("/imgs/cat.txt,{}|/imgs/dog.txt,{}", filled('A'), filled('B'));
    let g = gallery(&body);
    let palette = ThumbnailRenderer::default().palette().clone();

    assert_eq!(g.len(), 2);
    assert_eq!(g.get(0).unwrap().name, "cat");
    assert_eq!(g.get(1).unwrap().name, "dog");
    assert!(g.canvas(0).unwrap().is_filled_with(palette[0]));
    assert!(g.canvas(1).unwrap().is_filled_with(palette[1]));
}

#[test]
fn empty_response_has_no_thumbnails() {
    assert!(gallery("").is_empty());
    assert_eq!(entries("").count(), 0);
}

#[test]
fn single_entry_without_separator_is_ignored() {
    let body = format!("/imgs/cat.txt,{}", filled('A'));
    assert!(parse_listing(&body).is_empty());
}

#[test]
fn malformed_segment_does_not_stop_parsing() {
    let body = format!("garbage|/imgs/ok.txt,{}|", filled('C'));
    let listing = parse_listing(&body);
    assert_eq!(listing.len(), 1);
    assert_eq!(listing.skipped.len(), 1);
    assert_eq!(listing.skipped[0].segment, "garbage");
    assert_eq!(listing.entries[0].display_name(&NameRules::default()), "ok");
}

#[test]
fn bad_descriptor_only_breaks_its_own_thumbnail() {
    let body = listing_body(&[
        ("/imgs/a.txt", filled('A').as_str()),
        ("/imgs/b.txt", "not a sketch"),
        ("/imgs/c.txt", filled('D').as_str()),
    ]);
    let g = gallery(&body);
    assert_eq!(g.len(), 3);
    assert_eq!(g.broken_count(), 1);
    assert!(g.get(0).unwrap().is_valid());
    assert!(!g.get(1).unwrap().is_valid());
    assert!(g.get(2).unwrap().is_valid());
}

#[test]
fn selection_round_trips_through_sketchlist() {
    let body = listing_body(&[
        ("/imgs/zeta.txt", filled('A').as_str()),
        ("/imgs/alpha.txt", filled('A').as_str()),
        ("/imgs/mid.txt", filled('A').as_str()),
    ]);
    let mut g = gallery(&body);
    g.toggle_all();

    let request = g.deletion_request().unwrap();
    assert_eq!(request.sketchlist(), "zeta,alpha,mid,");
    assert_eq!(parse_sketchlist(&request.sketchlist()), g.selected_names());
}

#[test]
fn empty_selection_sends_nothing() {
    let g = gallery(&listing_body(&[("/imgs/a.txt", filled('A').as_str())]));
    assert!(g.deletion_request().is_none());
}

#[test]
fn custom_name_rules() {
    let rules = NameRules {
        strip_prefix: "/sd/".to_string(),
        strip_suffix: ".spr".to_string(),
    };
    let listing = parse_listing(&listing_body(&[("/sd/ship.spr", filled('A').as_str())]));
    assert_eq!(listing.entries[0].display_name(&rules), "ship");
}
