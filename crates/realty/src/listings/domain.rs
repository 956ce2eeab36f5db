use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier assigned by the repository when a property is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(pub u64);

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier assigned by the repository when an inquiry is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InquiryId(pub u64);

impl fmt::Display for InquiryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    Villa,
    Plot,
    Commercial,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::Apartment,
        PropertyType::Villa,
        PropertyType::Plot,
        PropertyType::Commercial,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::Villa => "villa",
            PropertyType::Plot => "plot",
            PropertyType::Commercial => "commercial",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a string is not one of the fixed enumeration labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not one of {expected}")]
pub struct UnknownVariant {
    pub value: String,
    pub expected: &'static str,
}

impl FromStr for PropertyType {
    type Err = UnknownVariant;

    /// Case-insensitive, so "Apartment" from a filter dropdown matches the stored value.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        PropertyType::ALL
            .into_iter()
            .find(|kind| kind.label() == normalized)
            .ok_or_else(|| UnknownVariant {
                value: raw.to_string(),
                expected: "apartment, villa, plot, commercial",
            })
    }
}

/// Bedroom-hall-kitchen layout. `Four` covers four bedrooms and up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BhkConfig {
    #[serde(rename = "1BHK")]
    One,
    #[serde(rename = "2BHK")]
    Two,
    #[serde(rename = "3BHK")]
    Three,
    #[serde(rename = "4BHK", alias = "4+BHK")]
    Four,
}

impl BhkConfig {
    pub const ALL: [BhkConfig; 4] = [
        BhkConfig::One,
        BhkConfig::Two,
        BhkConfig::Three,
        BhkConfig::Four,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            BhkConfig::One => "1BHK",
            BhkConfig::Two => "2BHK",
            BhkConfig::Three => "3BHK",
            BhkConfig::Four => "4BHK",
        }
    }
}

impl fmt::Display for BhkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BhkConfig {
    type Err = UnknownVariant;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed == "4+BHK" {
            return Ok(BhkConfig::Four);
        }
        BhkConfig::ALL
            .into_iter()
            .find(|bhk| bhk.label() == trimmed)
            .ok_or_else(|| UnknownVariant {
                value: raw.to_string(),
                expected: "1BHK, 2BHK, 3BHK, 4BHK",
            })
    }
}

/// Owner-supplied listing fields, before the repository assigns an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub location: String,
    pub city: String,
    pub state: String,
    pub price: Decimal,
    pub property_type: PropertyType,
    pub bhk_config: BhkConfig,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub carpet_area: u32,
    pub built_up_area: u32,
    pub image_url: String,
    #[serde(default)]
    pub vastu_compliant: bool,
    #[serde(default)]
    pub ready_to_move: bool,
    #[serde(default)]
    pub furnished: bool,
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub new_launch: bool,
    #[serde(default)]
    pub luxury: bool,
    pub contact_number: String,
    #[serde(default)]
    pub featured: bool,
}

/// A stored listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    #[serde(flatten)]
    pub details: NewProperty,
}

impl Property {
    pub fn new(id: PropertyId, details: NewProperty) -> Self {
        Self { id, details }
    }

    pub fn is_featured(&self) -> bool {
        self.details.featured
    }
}

/// Contact-form submission fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInquiry {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A stored lead. `created_at` is stamped by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInquiry {
    pub id: InquiryId,
    #[serde(flatten)]
    pub details: NewInquiry,
    pub created_at: DateTime<Utc>,
}
