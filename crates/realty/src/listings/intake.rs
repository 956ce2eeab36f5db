use rust_decimal::Decimal;
use serde_json::Value;

use super::domain::{BhkConfig, NewInquiry, NewProperty, PropertyType};
use crate::validation::{is_valid_email, is_valid_mobile, FieldError, PayloadReader, ValidationError};

/// Convert a raw listing submission into a validated `NewProperty`.
///
/// Missing, mistyped, and out-of-range fields are all reported together.
pub fn property_from_payload(payload: &Value) -> Result<NewProperty, ValidationError> {
    let mut reader = PayloadReader::new(payload);

    let title = reader.text("title");
    let description = reader.text("description");
    let location = reader.text("location");
    let city = reader.text("city");
    let state = reader.text("state");
    let price: Option<Decimal> = reader.parsed("price", "a decimal amount");
    let property_type: Option<PropertyType> =
        reader.parsed("propertyType", "one of apartment, villa, plot, commercial");
    let bhk_config: Option<BhkConfig> = reader.parsed("bhkConfig", "one of 1BHK, 2BHK, 3BHK, 4BHK");
    let bedrooms: Option<u32> = reader.parsed("bedrooms", "a non-negative whole number");
    let bathrooms: Option<u32> = reader.parsed("bathrooms", "a non-negative whole number");
    let carpet_area: Option<u32> = reader.parsed("carpetArea", "a whole number of square feet");
    let built_up_area: Option<u32> = reader.parsed("builtUpArea", "a whole number of square feet");
    let image_url = reader.text("imageUrl");
    let vastu_compliant = reader.flag("vastuCompliant");
    let ready_to_move = reader.flag("readyToMove");
    let furnished = reader.flag("furnished");
    let premium = reader.flag("premium");
    let new_launch = reader.flag("newLaunch");
    let luxury = reader.flag("luxury");
    let contact_number = reader.text("contactNumber");
    let featured = reader.flag("featured");

    let draft = (|| {
        Some(NewProperty {
            title: title?,
            description: description?,
            location: location?,
            city: city?,
            state: state?,
            price: price?,
            property_type: property_type?,
            bhk_config: bhk_config?,
            bedrooms: bedrooms?,
            bathrooms: bathrooms?,
            carpet_area: carpet_area?,
            built_up_area: built_up_area?,
            image_url: image_url?,
            vastu_compliant,
            ready_to_move,
            furnished,
            premium,
            new_launch,
            luxury,
            contact_number: contact_number?,
            featured,
        })
    })();

    let draft = reader.finish(draft)?;
    validate_property(&draft)?;
    Ok(draft)
}

/// Range checks for a typed listing; enumerations are already enforced by the types.
pub fn validate_property(draft: &NewProperty) -> Result<(), ValidationError> {
    let mut fields = Vec::new();

    for (field, value) in [
        ("title", &draft.title),
        ("description", &draft.description),
        ("location", &draft.location),
        ("city", &draft.city),
        ("state", &draft.state),
        ("imageUrl", &draft.image_url),
        ("contactNumber", &draft.contact_number),
    ] {
        if value.trim().is_empty() {
            fields.push(FieldError::new(field, "must not be blank"));
        }
    }

    if draft.price < Decimal::ZERO {
        fields.push(FieldError::new("price", "must not be negative"));
    }
    if draft.carpet_area == 0 {
        fields.push(FieldError::new("carpetArea", "must be greater than zero"));
    }
    if draft.built_up_area == 0 {
        fields.push(FieldError::new("builtUpArea", "must be greater than zero"));
    }

    ValidationError::check(fields)
}

/// Convert a raw contact-form submission into a validated `NewInquiry`.
pub fn inquiry_from_payload(payload: &Value) -> Result<NewInquiry, ValidationError> {
    let mut reader = PayloadReader::new(payload);

    let first_name = reader.text("firstName");
    let last_name = reader.text("lastName");
    let email = reader.text("email");
    let phone = reader.text("phone");
    let preferred_location = reader.optional_text("preferredLocation");
    let budget_range = reader.optional_text("budgetRange");
    let message = reader.optional_text("message");

    let draft = (|| {
        Some(NewInquiry {
            first_name: first_name?,
            last_name: last_name?,
            email: email?,
            phone: phone?,
            preferred_location,
            budget_range,
            message,
        })
    })();

    let draft = reader.finish(draft)?;
    validate_inquiry(&draft)?;
    Ok(draft)
}

pub fn validate_inquiry(draft: &NewInquiry) -> Result<(), ValidationError> {
    let mut fields = Vec::new();

    if draft.first_name.trim().is_empty() {
        fields.push(FieldError::new("firstName", "must not be blank"));
    }
    if draft.last_name.trim().is_empty() {
        fields.push(FieldError::new("lastName", "must not be blank"));
    }
    // Checked as stored: payload intake trims, typed callers must pass clean values.
    if !is_valid_email(&draft.email) {
        fields.push(FieldError::new("email", "must be a valid email address"));
    }
    if !is_valid_mobile(&draft.phone) {
        fields.push(FieldError::new(
            "phone",
            "must be a 10-digit mobile number starting with 6-9",
        ));
    }

    ValidationError::check(fields)
}
