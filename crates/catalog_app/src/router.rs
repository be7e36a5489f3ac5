//! Maps an endpoint name and query-style parameters onto one catalog
//! operation.

use catalog_core::{Card, Chapter, Detail, Home, Language, Pages, ReadableChapter, Volume};
use catalog_engine::{CatalogError, CatalogService, DocumentSource, ListingType};
use serde::Serialize;

/// Raw parameters as they arrive from the caller, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pub page: Option<String>,
    pub kind: Option<String>,
    pub lang: Option<String>,
    pub id: Option<String>,
    /// JSON array of title ids.
    pub ids: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Banners(Vec<String>),
    Recent { page: u32, listing: ListingType },
    Trending { page: u32 },
    Info(String),
    Chapters { id: String, lang: Language },
    Volumes { id: String, lang: Language },
    ChaptersWithIds { id: String, lang: Language },
    Read(String),
}

impl Route {
    /// Validates parameters for `endpoint`. Nothing is fetched here.
    pub fn resolve(endpoint: &str, params: &Params) -> Result<Self, CatalogError> {
        let page = page_number(params.page.as_deref());
        let lang = || Language::new(params.lang.as_deref().unwrap_or("en"));

        let route = match endpoint {
            "home" => Route::Home,
            "banners" => Route::Banners(id_list(params.ids.as_deref())?),
            "recent" => Route::Recent {
                page,
                listing: params.kind.as_deref().unwrap_or("all").parse()?,
            },
            "trending" => Route::Trending { page },
            "info" => Route::Info(required_id(params)?),
            "chapters" => Route::Chapters {
                id: required_id(params)?,
                lang: lang(),
            },
            "volumes" => Route::Volumes {
                id: required_id(params)?,
                lang: lang(),
            },
            "chapters-with-ids" => Route::ChaptersWithIds {
                id: required_id(params)?,
                lang: lang(),
            },
            "read" => Route::Read(required_id(params)?),
            _ => return Err(CatalogError::Validation("Invalid endpoint".to_string())),
        };
        Ok(route)
    }
}

/// Whatever an operation produced, serialized as-is.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Home(Home),
    Banners(Vec<String>),
    Cards(Vec<Card>),
    Detail(Detail),
    Chapters(Vec<Chapter>),
    Volumes(Vec<Volume>),
    Readable(Vec<ReadableChapter>),
    Pages(Pages),
}

pub async fn dispatch<S: DocumentSource>(
    service: &CatalogService<S>,
    route: Route,
) -> Result<Payload, CatalogError> {
    let payload = match route {
        Route::Home => Payload::Home(service.home().await?),
        Route::Banners(ids) => Payload::Banners(service.banners(&ids).await?),
        Route::Recent { page, listing } => Payload::Cards(service.recent(page, listing).await?),
        Route::Trending { page } => Payload::Cards(service.trending(page).await?),
        Route::Info(id) => Payload::Detail(service.info(&id).await?),
        Route::Chapters { id, lang } => Payload::Chapters(service.chapters(&id, &lang).await?),
        Route::Volumes { id, lang } => Payload::Volumes(service.volumes(&id, &lang).await?),
        Route::ChaptersWithIds { id, lang } => {
            Payload::Readable(service.chapters_with_ids(&id, &lang).await?)
        }
        Route::Read(id) => Payload::Pages(service.pages(&id).await?),
    };
    Ok(payload)
}

/// Positive page number; anything else falls back to 1.
fn page_number(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|page| *page > 0)
        .unwrap_or(1)
}

fn required_id(params: &Params) -> Result<String, CatalogError> {
    params
        .id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or_else(|| CatalogError::Validation("Manga ID is required".to_string()))
}

fn id_list(raw: Option<&str>) -> Result<Vec<String>, CatalogError> {
    raw.and_then(|json| serde_json::from_str::<Vec<String>>(json).ok())
        .ok_or_else(|| CatalogError::Validation("Invalid IDs format".to_string()))
}
