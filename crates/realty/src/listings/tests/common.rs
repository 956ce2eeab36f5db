use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::{json, Value};

use crate::listings::domain::{
    BhkConfig, ContactInquiry, NewInquiry, NewProperty, Property, PropertyId, PropertyType,
};
use crate::listings::repository::{
    InMemoryListingRepository, ListingRepository, RepositoryError,
};
use crate::listings::seed::seed_samples;
use crate::listings::{listing_router, ListingService};

pub(super) fn listing(title: &str, city: &str, price: i64) -> NewProperty {
    NewProperty {
        title: title.to_string(),
        description: format!("{title} with covered parking and power backup."),
        location: format!("Central {city}"),
        city: city.to_string(),
        state: "Maharashtra".to_string(),
        price: Decimal::from(price),
        property_type: PropertyType::Apartment,
        bhk_config: BhkConfig::Two,
        bedrooms: 2,
        bathrooms: 2,
        carpet_area: 900,
        built_up_area: 1100,
        image_url: "https://img.example/listing.jpg".to_string(),
        vastu_compliant: false,
        ready_to_move: true,
        furnished: false,
        premium: false,
        new_launch: false,
        luxury: false,
        contact_number: "+919876543210".to_string(),
        featured: false,
    }
}

pub(super) fn inquiry() -> NewInquiry {
    NewInquiry {
        first_name: "Rohan".to_string(),
        last_name: "Mehta".to_string(),
        email: "rohan.mehta@example.in".to_string(),
        phone: "9123456780".to_string(),
        preferred_location: Some("Pune".to_string()),
        budget_range: Some("₹1 Crore - ₹2 Crore".to_string()),
        message: None,
    }
}

pub(super) fn listing_payload() -> Value {
    json!({
        "title": "Riverside Villa",
        "description": "Independent villa with private garden and river frontage.",
        "location": "Kalyani Nagar, Pune",
        "city": "Pune",
        "state": "Maharashtra",
        "price": 27500000,
        "propertyType": "villa",
        "bhkConfig": "4+BHK",
        "bedrooms": 5,
        "bathrooms": 4,
        "carpetArea": 2600,
        "builtUpArea": 3000,
        "imageUrl": "https://img.example/riverside.jpg",
        "vastuCompliant": true,
        "luxury": true,
        "contactNumber": "+919811122233",
        "featured": false
    })
}

pub(super) fn inquiry_payload() -> Value {
    json!({
        "firstName": "Priya",
        "lastName": "Nair",
        "email": "priya.nair@example.in",
        "phone": "8899001122",
        "preferredLocation": "Bangalore",
        "message": "Interested in the Garden Villa."
    })
}

pub(super) fn fixed_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-01-15T10:30:00Z")
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

pub(super) fn seeded_repository() -> Arc<InMemoryListingRepository> {
    let repository = Arc::new(InMemoryListingRepository::new());
    seed_samples(repository.as_ref()).expect("samples seed");
    repository
}

pub(super) fn seeded_service() -> ListingService<InMemoryListingRepository> {
    ListingService::new(seeded_repository())
}

pub(super) fn seeded_router() -> axum::Router {
    listing_router(Arc::new(seeded_service()))
}

pub(super) fn ids(properties: &[Property]) -> Vec<u64> {
    properties.iter().map(|property| property.id.0).collect()
}

pub(super) struct UnavailableRepository;

impl ListingRepository for UnavailableRepository {
    fn insert_property(&self, _draft: NewProperty) -> Result<Property, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn properties(&self) -> Result<Vec<Property>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn property(&self, _id: PropertyId) -> Result<Option<Property>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn insert_inquiry(
        &self,
        _draft: NewInquiry,
        _received_at: DateTime<Utc>,
    ) -> Result<ContactInquiry, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn inquiries(&self) -> Result<Vec<ContactInquiry>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
