//! Property catalogue, search filters, and contact-inquiry intake.
//!
//! The repository owns every listing and inquiry; the service layers validation on top and
//! the router exposes both over HTTP.

pub mod domain;
pub mod filter;
pub mod intake;
pub mod query;
pub mod repository;
pub mod router;
pub mod seed;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    BhkConfig, ContactInquiry, InquiryId, NewInquiry, NewProperty, Property, PropertyId,
    PropertyType, UnknownVariant,
};
pub use filter::{filter, SearchCriteria};
pub use query::SearchQuery;
pub use repository::{InMemoryListingRepository, ListingRepository, RepositoryError};
pub use router::listing_router;
pub use seed::{sample_properties, seed_samples, ListingCsvImporter, ListingImportError};
pub use service::{ListingService, ListingServiceError};
