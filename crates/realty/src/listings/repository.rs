use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use super::domain::{ContactInquiry, InquiryId, NewInquiry, NewProperty, Property, PropertyId};
use super::filter::{filter, SearchCriteria};

/// Storage abstraction so the service and router can be exercised in isolation.
///
/// Implementations assign identifiers; callers never choose them.
pub trait ListingRepository: Send + Sync {
    fn insert_property(&self, draft: NewProperty) -> Result<Property, RepositoryError>;
    fn properties(&self) -> Result<Vec<Property>, RepositoryError>;
    fn property(&self, id: PropertyId) -> Result<Option<Property>, RepositoryError>;
    fn insert_inquiry(
        &self,
        draft: NewInquiry,
        received_at: DateTime<Utc>,
    ) -> Result<ContactInquiry, RepositoryError>;
    fn inquiries(&self) -> Result<Vec<ContactInquiry>, RepositoryError>;

    fn featured(&self) -> Result<Vec<Property>, RepositoryError> {
        Ok(self
            .properties()?
            .into_iter()
            .filter(Property::is_featured)
            .collect())
    }

    fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Property>, RepositoryError> {
        Ok(filter(&self.properties()?, criteria))
    }
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug)]
struct ListingStore {
    properties: BTreeMap<PropertyId, Property>,
    inquiries: BTreeMap<InquiryId, ContactInquiry>,
    next_property_id: u64,
    next_inquiry_id: u64,
}

impl Default for ListingStore {
    fn default() -> Self {
        Self {
            properties: BTreeMap::new(),
            inquiries: BTreeMap::new(),
            next_property_id: 1,
            next_inquiry_id: 1,
        }
    }
}

/// Process-lifetime store. Both collections and both counters share one mutex, so
/// concurrent inserts never hand out the same identifier.
#[derive(Debug, Default, Clone)]
pub struct InMemoryListingRepository {
    store: Arc<Mutex<ListingStore>>,
}

impl InMemoryListingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, ListingStore>, RepositoryError> {
        self.store
            .lock()
            .map_err(|_| RepositoryError::Unavailable("listing store lock poisoned".to_string()))
    }
}

impl ListingRepository for InMemoryListingRepository {
    fn insert_property(&self, draft: NewProperty) -> Result<Property, RepositoryError> {
        let mut store = self.lock()?;
        let id = PropertyId(store.next_property_id);
        store.next_property_id += 1;

        let property = Property::new(id, draft);
        store.properties.insert(id, property.clone());
        Ok(property)
    }

    fn properties(&self) -> Result<Vec<Property>, RepositoryError> {
        let store = self.lock()?;
        Ok(store.properties.values().cloned().collect())
    }

    fn property(&self, id: PropertyId) -> Result<Option<Property>, RepositoryError> {
        let store = self.lock()?;
        Ok(store.properties.get(&id).cloned())
    }

    fn insert_inquiry(
        &self,
        draft: NewInquiry,
        received_at: DateTime<Utc>,
    ) -> Result<ContactInquiry, RepositoryError> {
        let mut store = self.lock()?;
        let id = InquiryId(store.next_inquiry_id);
        store.next_inquiry_id += 1;

        let inquiry = ContactInquiry {
            id,
            details: draft,
            created_at: received_at,
        };
        store.inquiries.insert(id, inquiry.clone());
        Ok(inquiry)
    }

    fn inquiries(&self) -> Result<Vec<ContactInquiry>, RepositoryError> {
        let store = self.lock()?;
        Ok(store.inquiries.values().cloned().collect())
    }
}
