//! Catalog core: pure extraction and normalization over parsed markup.
pub mod assemble;
pub mod envelope;
pub mod fields;
pub mod ident;
pub mod model;
pub mod text;
pub mod tree;

pub use envelope::EnvelopeError;
pub use ident::Language;
pub use model::{
    BasicCard, Card, CatalogSummary, Chapter, ChapterRef, Detail, EntityStub, Home, MostViewed,
    Pages, ReadableChapter, Relation, SuggestedEntity, Volume,
};
pub use tree::{Document, Node};
