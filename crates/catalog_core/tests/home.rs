use std::sync::Once;

use catalog_core::assemble::home;
use catalog_core::{BasicCard, CatalogSummary, Document};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(catalog_logging::initialize_for_tests);
}

const HOME: &str = r#"
<html><body>
<div class="swiper">
  <div class="swiper-slide">
    <div class="swiper-inner">
      <div class="info">
        <div class="above"><span>Releasing</span><a class="unit" href="/manga/one-piece.dkw">One Piece</a></div>
        <div class="below">
          <span>Gol D. Roger was known as the Pirate King.</span>
          <p>Chapters 12 - Volumes 3</p>
          <div><a href="/genre/action">Action</a><a href="/genre/adventure">Adventure</a></div>
        </div>
      </div>
      <img src="https://static.example/one-piece.jpg">
    </div>
  </div>
  <div class="swiper-slide">
    <div class="swiper-inner">
      <div class="info">
        <div class="above"><span>Completed</span></div>
        <div class="below"><p>Chapters 7</p></div>
      </div>
    </div>
  </div>
</div>
<div class="swiper completed">
  <div class="swiper-slide"><a href="/manga/berserk.b1"><img src="https://static.example/berserk.jpg"><span> Berserk </span></a></div>
</div>
<div class="tab-content" data-name="day">
  <div class="swiper-slide"><a href="/manga/day.d1"><span>Day Pick</span></a></div>
</div>
<div class="tab-content" data-name="week">
  <div class="swiper-slide"><a href="/manga/week.w1"><span>Week One</span></a></div>
  <div class="swiper-slide"><a href="/manga/week.w2"><span>Week Two</span></a></div>
</div>
</body></html>
"#;

#[test]
fn carousel_entries_split_counts_and_keep_tags_in_order() {
    init_logging();
    let doc = Document::parse(HOME);
    let home = home::assemble(&doc);

    assert_eq!(
        home.carousel_data[0],
        CatalogSummary {
            id: Some("one-piece.dkw".into()),
            title: Some("One Piece".into()),
            image: Some("https://static.example/one-piece.jpg".into()),
            status: Some("Releasing".into()),
            description: Some("Gol D. Roger was known as the Pirate King.".into()),
            tags: vec!["Action".into(), "Adventure".into()],
            chapters: Some("12".into()),
            volumes: Some("3".into()),
        }
    );
}

#[test]
fn carousel_entry_without_link_or_volume_count_degrades() {
    init_logging();
    let doc = Document::parse(HOME);
    let home = home::assemble(&doc);

    let second = &home.carousel_data[1];
    assert_eq!(second.id, None);
    assert_eq!(second.title, None);
    assert_eq!(second.chapters.as_deref(), Some("7"));
    assert_eq!(second.volumes, None);
    assert!(second.tags.is_empty());
    assert_eq!(home.carousel_ids, vec!["one-piece.dkw".to_string(), String::new()]);
}

#[test]
fn rails_are_read_per_section() {
    init_logging();
    let doc = Document::parse(HOME);
    let home = home::assemble(&doc);

    assert_eq!(
        home.new_release_data,
        vec![BasicCard {
            id: Some("berserk.b1".into()),
            image: Some("https://static.example/berserk.jpg".into()),
            title: Some("Berserk".into()),
        }]
    );
    assert_eq!(home.most_view_data.day.len(), 1);
    let week: Vec<_> = home
        .most_view_data
        .week
        .iter()
        .map(|card| card.id.clone().unwrap_or_default())
        .collect();
    assert_eq!(week, vec!["week.w1", "week.w2"]);
    assert!(home.most_view_data.month.is_empty());
}

#[test]
fn empty_page_gives_empty_home() {
    init_logging();
    let doc = Document::parse("<html><body></body></html>");
    let home = home::assemble(&doc);
    assert!(home.carousel_ids.is_empty());
    assert!(home.carousel_data.is_empty());
    assert!(home.new_release_data.is_empty());
}

#[test]
fn summary_serializes_without_absent_keys() {
    init_logging();
    let doc = Document::parse(HOME);
    let home = home::assemble(&doc);
    let json = serde_json::to_value(&home.carousel_data[1]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "status": "Completed", "tags": [], "chapters": "7" })
    );
}
