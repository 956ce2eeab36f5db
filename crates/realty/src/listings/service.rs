use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info};

use super::domain::{ContactInquiry, NewInquiry, NewProperty, Property, PropertyId};
use super::filter::SearchCriteria;
use super::intake::{inquiry_from_payload, property_from_payload, validate_inquiry, validate_property};
use super::query::SearchQuery;
use super::repository::{ListingRepository, RepositoryError};
use crate::validation::ValidationError;

/// Service composing listing validation with the repository.
pub struct ListingService<R> {
    repository: Arc<R>,
}

impl<R> Clone for ListingService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> ListingService<R>
where
    R: ListingRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn properties(&self) -> Result<Vec<Property>, ListingServiceError> {
        Ok(self.repository.properties()?)
    }

    pub fn featured(&self) -> Result<Vec<Property>, ListingServiceError> {
        Ok(self.repository.featured()?)
    }

    /// `Ok(None)` when no property carries the identifier.
    pub fn property(&self, id: PropertyId) -> Result<Option<Property>, ListingServiceError> {
        Ok(self.repository.property(id)?)
    }

    pub fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Property>, ListingServiceError> {
        let matches = self.repository.search(criteria)?;
        debug!(?criteria, matches = matches.len(), "property search");
        Ok(matches)
    }

    /// Parse loosely typed query parameters, then search.
    pub fn search_query(&self, query: SearchQuery) -> Result<Vec<Property>, ListingServiceError> {
        let criteria = query.into_criteria()?;
        self.search(&criteria)
    }

    pub fn create_property(&self, draft: NewProperty) -> Result<Property, ListingServiceError> {
        validate_property(&draft)?;
        let property = self.repository.insert_property(draft)?;
        info!(
            property_id = %property.id,
            city = %property.details.city,
            "property listed"
        );
        Ok(property)
    }

    /// Validate a raw listing submission and store it.
    pub fn submit_property(&self, payload: &Value) -> Result<Property, ListingServiceError> {
        let draft = property_from_payload(payload)?;
        self.create_property(draft)
    }

    pub fn create_inquiry(&self, draft: NewInquiry) -> Result<ContactInquiry, ListingServiceError> {
        validate_inquiry(&draft)?;
        let inquiry = self.repository.insert_inquiry(draft, Utc::now())?;
        info!(inquiry_id = %inquiry.id, "contact inquiry received");
        Ok(inquiry)
    }

    /// Validate a raw contact-form submission and store it.
    pub fn submit_inquiry(&self, payload: &Value) -> Result<ContactInquiry, ListingServiceError> {
        let draft = inquiry_from_payload(payload)?;
        self.create_inquiry(draft)
    }

    pub fn inquiries(&self) -> Result<Vec<ContactInquiry>, ListingServiceError> {
        Ok(self.repository.inquiries()?)
    }
}

/// Error raised by the listing service.
#[derive(Debug, thiserror::Error)]
pub enum ListingServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
