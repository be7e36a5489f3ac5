use catalog_core::assemble::{cards, chapters, detail, home};
use catalog_core::ident::composite_suffix;
use catalog_core::{
    envelope, Card, Chapter, Detail, Document, Home, Language, Pages, ReadableChapter, Volume,
};
use catalog_logging::{catalog_debug, catalog_warn};
use futures_util::future::try_join_all;

use crate::{CatalogError, DocumentSource, ListingType, Request};

/// One operation per resource kind, each a fetch followed by a single
/// assembly pass.
///
/// Parsed documents never live across an `.await`.
pub struct CatalogService<S> {
    source: S,
    origin: String,
}

impl<S: DocumentSource> CatalogService<S> {
    /// `origin` is used to absolutize relative image paths.
    pub fn new(source: S, origin: impl Into<String>) -> Self {
        Self {
            source,
            origin: origin.into(),
        }
    }

    pub async fn home(&self) -> Result<Home, CatalogError> {
        let markup = self.load(Request::home()).await?;
        Ok(home::assemble(&Document::parse(&markup)))
    }

    /// Banner image of every title in `ids`, in the same order.
    ///
    /// Fetches run concurrently; the first failure fails the whole batch.
    pub async fn banners(&self, ids: &[String]) -> Result<Vec<String>, CatalogError> {
        try_join_all(ids.iter().map(|id| async move {
            let markup = self.load(Request::detail(id)).await?;
            Ok::<_, CatalogError>(detail::banner(&Document::parse(&markup)))
        }))
        .await
    }

    pub async fn recent(&self, page: u32, listing: ListingType) -> Result<Vec<Card>, CatalogError> {
        let payload = self.load(Request::recent(page, listing)).await?;
        let markup = envelope::markup(&payload)?;
        Ok(cards::assemble(&Document::parse_fragment(&markup)))
    }

    pub async fn trending(&self, page: u32) -> Result<Vec<Card>, CatalogError> {
        let markup = self.load(Request::trending(page)).await?;
        Ok(cards::assemble(&Document::parse(&markup)))
    }

    pub async fn info(&self, id: &str) -> Result<Detail, CatalogError> {
        require_id(id)?;
        let markup = self.load(Request::detail(id)).await?;
        let doc = Document::parse(&markup);
        if !detail::is_present(&doc) {
            catalog_warn!("No title page found for {}", id);
            return Err(not_found());
        }
        Ok(detail::assemble(&doc, id))
    }

    pub async fn chapters(&self, id: &str, lang: &Language) -> Result<Vec<Chapter>, CatalogError> {
        require_id(id)?;
        let suffix = composite_suffix(id);
        let payload = self.load(Request::chapters(suffix, lang)).await?;
        let markup = envelope::markup(&payload)?;
        let list = chapters::assemble_chapters(&Document::parse_fragment(&markup), suffix, lang);
        catalog_debug!("Assembled {} chapters for {}", list.len(), id);
        Ok(list)
    }

    pub async fn volumes(&self, id: &str, lang: &Language) -> Result<Vec<Volume>, CatalogError> {
        require_id(id)?;
        let suffix = composite_suffix(id);
        let payload = self.load(Request::volumes(suffix, lang)).await?;
        let markup = envelope::markup(&payload)?;
        Ok(chapters::assemble_volumes(
            &Document::parse_fragment(&markup),
            &self.origin,
        ))
    }

    pub async fn chapters_with_ids(
        &self,
        id: &str,
        lang: &Language,
    ) -> Result<Vec<ReadableChapter>, CatalogError> {
        require_id(id)?;
        let suffix = composite_suffix(id);
        let payload = self.load(Request::readable_chapters(suffix, lang)).await?;
        let markup = envelope::nested_markup(&payload)?;
        Ok(chapters::assemble_readable(
            &Document::parse_fragment(&markup),
            lang,
        ))
    }

    /// Page images of one chapter; `chapter_id` is a readable chapter id.
    pub async fn pages(&self, chapter_id: &str) -> Result<Pages, CatalogError> {
        require_id(chapter_id)?;
        let payload = self.load(Request::pages(chapter_id)).await?;
        let pages = envelope::image_urls(&payload)?;
        catalog_debug!("Chapter {} has {} pages", chapter_id, pages.len());
        Ok(pages)
    }

    async fn load(&self, request: Request) -> Result<String, CatalogError> {
        catalog_debug!("GET {} ({:?})", request.path, request.kind);
        self.source.fetch(&request).await.map_err(|err| {
            catalog_warn!("Fetching {} failed: {}", request.path, err);
            CatalogError::from(err)
        })
    }
}

fn require_id(id: &str) -> Result<(), CatalogError> {
    if id.trim().is_empty() {
        return Err(CatalogError::Validation("Manga ID is required".to_string()));
    }
    Ok(())
}

fn not_found() -> CatalogError {
    CatalogError::NotFound("Content not found".to_string())
}
