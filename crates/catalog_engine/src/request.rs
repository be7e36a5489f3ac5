//! Upstream request construction.

use std::fmt;
use std::str::FromStr;

use catalog_core::Language;

use crate::CatalogError;

/// Type filter accepted by the recent-updates listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingType {
    #[default]
    All,
    Manga,
    Manwah,
    Manhua,
}

impl ListingType {
    pub fn as_str(self) -> &'static str {
        match self {
            ListingType::All => "all",
            ListingType::Manga => "manga",
            ListingType::Manwah => "manwah",
            ListingType::Manhua => "manhua",
        }
    }
}

impl FromStr for ListingType {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "all" => Ok(ListingType::All),
            "manga" => Ok(ListingType::Manga),
            "manwah" => Ok(ListingType::Manwah),
            "manhua" => Ok(ListingType::Manhua),
            _ => Err(CatalogError::Validation(
                "Invalid type. Supported types: all, manga, manwah, manhua".to_string(),
            )),
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a request targets a page or one of the site's ajax endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Document,
    /// Sent with `X-Requested-With` and a JSON `Accept`; answered with an
    /// envelope.
    Ajax,
}

/// Path (with query) relative to the content origin, plus its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub path: String,
    pub kind: RequestKind,
}

impl Request {
    fn document(path: String) -> Self {
        Self {
            path,
            kind: RequestKind::Document,
        }
    }

    fn ajax(path: String) -> Self {
        Self {
            path,
            kind: RequestKind::Ajax,
        }
    }

    pub fn home() -> Self {
        Self::document("/home".to_string())
    }

    pub fn detail(id: &str) -> Self {
        Self::document(format!("/manga/{id}"))
    }

    pub fn recent(page: u32, listing: ListingType) -> Self {
        Self::ajax(format!("/ajax/home/widget/updated-{listing}?page={page}"))
    }

    pub fn trending(page: u32) -> Self {
        Self::document(format!("/filter?keyword=&sort=trending&page={page}"))
    }

    /// `suffix` is the composite suffix of the title id, never the full id.
    pub fn chapters(suffix: &str, lang: &Language) -> Self {
        Self::ajax(format!("/ajax/manga/{suffix}/chapter/{}", lang.for_path()))
    }

    pub fn volumes(suffix: &str, lang: &Language) -> Self {
        Self::ajax(format!("/ajax/manga/{suffix}/volume/{}", lang.for_path()))
    }

    pub fn readable_chapters(suffix: &str, lang: &Language) -> Self {
        Self::ajax(format!("/ajax/read/{suffix}/chapter/{}", lang.for_path()))
    }

    pub fn pages(chapter_id: &str) -> Self {
        Self::ajax(format!("/ajax/read/chapter/{chapter_id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_type_rejects_unknown_values() {
        assert_eq!("manhua".parse::<ListingType>().unwrap(), ListingType::Manhua);
        assert!(matches!(
            "manhwa".parse::<ListingType>(),
            Err(CatalogError::Validation(_))
        ));
        assert!("ALL".parse::<ListingType>().is_err());
    }

    #[test]
    fn paths_lowercase_language() {
        let lang = Language::new("EN");
        assert_eq!(Request::chapters("dkw", &lang).path, "/ajax/manga/dkw/chapter/en");
        assert_eq!(Request::volumes("dkw", &lang).path, "/ajax/manga/dkw/volume/en");
        assert_eq!(Request::readable_chapters("dkw", &lang).path, "/ajax/read/dkw/chapter/en");
    }

    #[test]
    fn listing_paths_carry_page_and_kind() {
        let recent = Request::recent(3, ListingType::Manwah);
        assert_eq!(recent.path, "/ajax/home/widget/updated-manwah?page=3");
        assert_eq!(recent.kind, RequestKind::Ajax);

        let trending = Request::trending(2);
        assert_eq!(trending.path, "/filter?keyword=&sort=trending&page=2");
        assert_eq!(trending.kind, RequestKind::Document);
    }
}
