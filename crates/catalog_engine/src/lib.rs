//! Catalog engine: document source, request construction and the
//! operations the routing layer calls.
mod error;
mod request;
mod service;
mod source;

pub use error::{CatalogError, ErrorBody, ErrorStatus, FailureKind, FetchError};
pub use request::{ListingType, Request, RequestKind};
pub use service::CatalogService;
pub use source::{DocumentSource, ReqwestSource, SourceSettings};
