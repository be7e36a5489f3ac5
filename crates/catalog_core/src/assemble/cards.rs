use crate::fields::{Field, Positional};
use crate::ident::last_path_segment;
use crate::model::{Card, ChapterRef};
use crate::text::decode_entities;
use crate::tree::{Document, Node};

/// Card container on listing pages and ajax listing fragments.
pub const LISTING_ITEM: &str = ".unit";

const RECENT_CHAPTERS: &str = r#".content[data-name="chap"] li"#;
const RECENT_VOLUMES: &str = r#".content[data-name="vol"] li"#;

pub fn assemble(doc: &Document) -> Vec<Card> {
    doc.find_all(LISTING_ITEM).into_iter().map(card).collect()
}

pub fn card(node: Node<'_>) -> Card {
    Card {
        kind: Field::text(".type").extract(node),
        id: Field::attr(".poster", "href")
            .extract(node)
            .map(|href| last_path_segment(&href)),
        image: Field::attr("img", "src").extract(node),
        title: Field::attr("img", "alt")
            .extract(node)
            .map(|alt| decode_entities(&alt)),
        recent_chapters: chapter_refs(node, RECENT_CHAPTERS),
        recent_volumes: chapter_refs(node, RECENT_VOLUMES),
    }
}

pub fn chapter_refs(node: Node<'_>, selector: &str) -> Vec<ChapterRef> {
    node.find_all(selector).into_iter().map(chapter_ref).collect()
}

/// Reads one `<li>` of a card's chapter list.
///
/// The item holds two spans: the label (with the language in a `<b>`) and
/// the time. A missing time span only loses `aired_at`.
fn chapter_ref(item: Node<'_>) -> ChapterRef {
    let spans = Positional::collect(item, "span");
    let label = spans.at(0);
    let lang = label.and_then(|node| Field::text("b").extract(node));
    let chapter = label.map(|node| label_before(&node.text(), lang.as_deref()));

    ChapterRef {
        id: Field::attr("a", "href").extract(item),
        chapter,
        lang,
        aired_at: spans.text_at(1),
    }
}

fn label_before(text: &str, lang: Option<&str>) -> String {
    let head = match lang {
        Some(code) if !code.is_empty() => text.split(code).next().unwrap_or(text),
        _ => text,
    };
    decode_entities(head.trim())
}
