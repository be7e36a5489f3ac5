use crate::fields::Field;
use crate::ident::last_path_segment;
use crate::model::{BasicCard, CatalogSummary, Home, MostViewed};
use crate::text::{decode_entities, split_counts};
use crate::tree::{Document, Node};

const CAROUSEL_ITEM: &str = ".swiper-inner";
const NEW_RELEASES: &str = ".swiper.completed .swiper-slide";
const MOST_VIEWED_DAY: &str = r#".tab-content[data-name="day"] .swiper-slide"#;
const MOST_VIEWED_WEEK: &str = r#".tab-content[data-name="week"] .swiper-slide"#;
const MOST_VIEWED_MONTH: &str = r#".tab-content[data-name="month"] .swiper-slide"#;

const TITLE_LINK: Field = Field::text(".unit");
const HREF: Field = Field::attr(".unit", "href");
const IMAGE: Field = Field::attr("img", "src");
const STATUS: Field = Field::text(".above span");
const DESCRIPTION: Field = Field::text(".below span");
const COUNTS: Field = Field::text(".below p");
const TAGS: Field = Field::text(".below a");

pub fn assemble(doc: &Document) -> Home {
    let carousel_data: Vec<CatalogSummary> = doc
        .find_all(CAROUSEL_ITEM)
        .into_iter()
        .map(summary)
        .collect();
    let carousel_ids = carousel_data
        .iter()
        .map(|entry| entry.id.clone().unwrap_or_default())
        .collect();

    Home {
        carousel_ids,
        carousel_data,
        new_release_data: basic_cards(doc, NEW_RELEASES),
        most_view_data: MostViewed {
            day: basic_cards(doc, MOST_VIEWED_DAY),
            week: basic_cards(doc, MOST_VIEWED_WEEK),
            month: basic_cards(doc, MOST_VIEWED_MONTH),
        },
    }
}

/// Builds one carousel entry.
///
/// The counts line reads like `"Chapters 12 - Volumes 3"`; the volume count
/// is `None` when the line has no `-`.
pub fn summary(node: Node<'_>) -> CatalogSummary {
    let (chapters, volumes) = COUNTS
        .extract(node)
        .map(|line| split_counts(&line))
        .unwrap_or((None, None));

    CatalogSummary {
        id: HREF.extract(node).map(|href| last_path_segment(&href)),
        title: TITLE_LINK.extract(node).map(|title| decode_entities(&title)),
        image: IMAGE.extract(node),
        status: STATUS.extract(node),
        description: DESCRIPTION.extract(node),
        tags: TAGS.extract_all(node),
        chapters,
        volumes,
    }
}

pub fn basic_cards(doc: &Document, selector: &str) -> Vec<BasicCard> {
    doc.find_all(selector)
        .into_iter()
        .map(|slide| BasicCard {
            id: Field::attr("a", "href")
                .extract(slide)
                .map(|href| last_path_segment(&href)),
            image: IMAGE.extract(slide),
            title: Field::text("span")
                .extract(slide)
                .map(|title| decode_entities(&title)),
        })
        .collect()
}
