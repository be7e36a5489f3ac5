use crate::fields::{text_of_all, Field, Positional};
use crate::ident::last_path_segment;
use crate::model::{Detail, EntityStub, Relation, SuggestedEntity};
use crate::text::{after_label, decode_entities, split_list, strip_escapes, word};
use crate::tree::{Document, Node};

/// Node every real title page has; its absence means the title is unknown.
pub const ROOT: &str = ".info h1";

const BANNER: Field = Field::attr(".detail-bg img", "src");
const POSTER: Field = Field::attr(".poster img", "src");
const STATUS: Field = Field::text(".info p");
const ALT_TITLES: Field = Field::text(".content .info h6");
const KIND: Field = Field::text(".min-info a");
const RATING: Field = Field::text(".min-info span b");
const SYNOPSIS: Field = Field::text("#synopsis");
const AUTHOR: Field = Field::text(r#"a[itemprop="author"]"#);
const PUBLISHED: Field = Field::text(".sidebar .meta div:nth-child(2)");
const GENRES: Field = Field::text(".sidebar .meta div:nth-child(3)");
const MAGAZINES: &str = ".sidebar .meta div:nth-child(4) a";
const RELATION_GROUP: &str = ".m-related .tab-content";
const SUGGESTED_ITEM: &str = ".side-manga .unit";

pub fn is_present(doc: &Document) -> bool {
    doc.find(ROOT).is_some()
}

/// Banner image of a title page, `""` when the page has none.
pub fn banner(doc: &Document) -> String {
    BANNER.extract(doc.root()).unwrap_or_default()
}

pub fn assemble(doc: &Document, id: &str) -> Detail {
    let root = doc.root();

    Detail {
        id: id.to_string(),
        banner: BANNER.extract(root),
        image: POSTER.extract(root),
        status: STATUS.extract(root),
        title: Field::text(ROOT)
            .extract(root)
            .map(|title| decode_entities(&title)),
        alt_titles: ALT_TITLES
            .extract(root)
            .map(|titles| split_list(&decode_entities(&titles), ';'))
            .unwrap_or_default(),
        kind: KIND.extract(root),
        rating: RATING.extract(root).and_then(|text| word(&text, 0)),
        views: views(root),
        description: SYNOPSIS.extract(root).map(|text| strip_escapes(&text)),
        author: AUTHOR.extract(root),
        published: PUBLISHED.extract(root).and_then(|line| after_label(&line)),
        genres: GENRES
            .extract(root)
            .and_then(|line| after_label(&line))
            .map(|genres| split_list(&genres, ','))
            .unwrap_or_default(),
        magazines: text_of_all(root, MAGAZINES),
        relations: root
            .find_all(RELATION_GROUP)
            .into_iter()
            .map(relation)
            .collect(),
        suggested: root
            .find_all(SUGGESTED_ITEM)
            .into_iter()
            .map(suggested)
            .collect(),
    }
}

/// The view counter is the first word of the `.min-info` span carrying an
/// icon.
fn views(root: Node<'_>) -> Option<String> {
    root.find_all(".min-info span")
        .into_iter()
        .find(|span| span.has("i"))
        .and_then(|span| word(&span.text(), 0))
}

fn relation(group: Node<'_>) -> Relation {
    Relation {
        kind: Field::own_attr("data-name").extract(group),
        entries: group
            .find_all("a")
            .into_iter()
            .map(|link| EntityStub {
                id: link.attr("href").map(last_path_segment),
                title: decode_entities(link.text().trim()),
            })
            .collect(),
    }
}

fn suggested(item: Node<'_>) -> SuggestedEntity {
    let spans = Positional::collect(item, "span");
    SuggestedEntity {
        id: item.attr("href").map(last_path_segment),
        title: Field::text("h6")
            .extract(item)
            .map(|title| decode_entities(&title)),
        image: Field::attr("img", "src").extract(item),
        chapters: spans.text_at(0),
        volumes: spans.text_at(1),
    }
}
