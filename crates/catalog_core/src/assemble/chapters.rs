use crate::fields::{Field, Positional};
use crate::ident::{absolute_url, relative_to, Language};
use crate::model::{Chapter, ReadableChapter, Volume};
use crate::text::{after_last_colon, decode_entities, split_pair};
use crate::tree::{Document, Node};

const CHAPTER_ITEM: &str = ".item";
const VOLUME_ITEM: &str = ".unit";
const READABLE_ITEM: &str = "li a";

/// Chapters of one title from the chapter-list fragment.
///
/// `base_id` is the request suffix of the title; chapter identifiers are
/// the part of each link after it.
pub fn assemble_chapters(doc: &Document, base_id: &str, lang: &Language) -> Vec<Chapter> {
    let lang = lang.for_output();
    doc.find_all(CHAPTER_ITEM)
        .into_iter()
        .map(|item| chapter(item, base_id, &lang))
        .collect()
}

fn chapter(item: Node<'_>, base_id: &str, lang: &str) -> Chapter {
    let anchor = item.find("a");
    let (volume, chapter) = anchor
        .and_then(|a| a.attr("title"))
        .map(|label| split_pair(&decode_entities(label), '-'))
        .unwrap_or((None, None));
    let spans = Positional::collect(item, "span");

    Chapter {
        id: anchor
            .and_then(|a| a.attr("href"))
            .map(|href| relative_to(href, base_id).to_string()),
        lang: lang.to_string(),
        number: Field::own_attr("data-number").extract(item),
        title: spans
            .text_at(0)
            .map(|title| after_last_colon(&decode_entities(&title))),
        posted: spans.text_at(1),
        volume,
        chapter,
    }
}

/// Volumes with absolute cover URLs.
pub fn assemble_volumes(doc: &Document, origin: &str) -> Vec<Volume> {
    doc.find_all(VOLUME_ITEM)
        .into_iter()
        .map(|item| Volume {
            id: Field::attr("a", "href").extract(item),
            image: Field::attr("img", "src")
                .extract(item)
                .map(|src| absolute_url(&src, origin)),
        })
        .collect()
}

/// Reader chapter list; `id` is the value the page listing expects.
pub fn assemble_readable(doc: &Document, lang: &Language) -> Vec<ReadableChapter> {
    let lang = lang.for_output();
    doc.find_all(READABLE_ITEM)
        .into_iter()
        .map(|link| ReadableChapter {
            id: Field::own_attr("data-id").extract(link),
            lang: lang.clone(),
            chapter: Field::own_attr("data-number").extract(link),
            title: link
                .attr("title")
                .map(|title| after_last_colon(&decode_entities(title))),
        })
        .collect()
}
