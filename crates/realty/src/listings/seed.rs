use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use super::domain::{BhkConfig, NewProperty, Property, PropertyType};
use super::intake::validate_property;
use super::repository::{ListingRepository, RepositoryError};
use crate::validation::{FieldError, ValidationError};

const SAMPLE_CONTACT: &str = "+919876543210";

struct SampleListing {
    title: &'static str,
    description: &'static str,
    location: &'static str,
    city: &'static str,
    state: &'static str,
    price: i64,
    property_type: PropertyType,
    bhk_config: BhkConfig,
    rooms: (u32, u32),
    areas: (u32, u32),
    image_url: &'static str,
    // vastu, ready, furnished, premium, new launch, luxury
    features: [bool; 6],
}

const SAMPLE_LISTINGS: [SampleListing; 6] = [
    SampleListing {
        title: "Luxury Sea View Apartment",
        description: "Premium 3BHK apartment with stunning sea views in Bandra West. Features modern amenities, spacious balconies, and world-class facilities.",
        location: "Bandra West, Mumbai",
        city: "Mumbai",
        state: "Maharashtra",
        price: 32_000_000,
        property_type: PropertyType::Apartment,
        bhk_config: BhkConfig::Three,
        rooms: (3, 3),
        areas: (1200, 1450),
        image_url: "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
        features: [true, true, false, true, false, true],
    },
    SampleListing {
        title: "Premium City Apartment",
        description: "Well-located 2BHK apartment in the heart of Delhi. Perfect for professionals with easy access to metro and commercial areas.",
        location: "Connaught Place, Delhi",
        city: "Delhi",
        state: "Delhi",
        price: 28_000_000,
        property_type: PropertyType::Apartment,
        bhk_config: BhkConfig::Two,
        rooms: (2, 2),
        areas: (1000, 1200),
        image_url: "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
        features: [false, true, false, false, false, false],
    },
    SampleListing {
        title: "Garden Villa",
        description: "Spacious 4BHK villa with beautiful garden in Whitefield. Perfect for families looking for luxury living with nature.",
        location: "Whitefield, Bangalore",
        city: "Bangalore",
        state: "Karnataka",
        price: 45_000_000,
        property_type: PropertyType::Villa,
        bhk_config: BhkConfig::Four,
        rooms: (4, 4),
        areas: (2400, 2800),
        image_url: "https://images.unsplash.com/photo-1613490493576-7fde63acd811?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
        features: [true, false, false, true, false, true],
    },
    SampleListing {
        title: "Designer Home",
        description: "Beautifully designed 2BHK apartment with premium interiors. Fully furnished and ready to move in.",
        location: "Koramangala, Bangalore",
        city: "Bangalore",
        state: "Karnataka",
        price: 18_000_000,
        property_type: PropertyType::Apartment,
        bhk_config: BhkConfig::Two,
        rooms: (2, 2),
        areas: (950, 1100),
        image_url: "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
        features: [false, true, true, false, false, false],
    },
    SampleListing {
        title: "Smart Apartment",
        description: "Modern 3BHK apartment with smart home features. Located in prime Gurgaon with excellent connectivity.",
        location: "Gurgaon, Delhi NCR",
        city: "Delhi",
        state: "Haryana",
        price: 21_000_000,
        property_type: PropertyType::Apartment,
        bhk_config: BhkConfig::Three,
        rooms: (3, 3),
        areas: (1150, 1350),
        image_url: "https://images.unsplash.com/photo-1516455207990-7a41ce80f7ee?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
        features: [true, false, false, false, true, false],
    },
    SampleListing {
        title: "Executive Penthouse",
        description: "Ultra-luxury penthouse with panoramic city views. Features private terrace, premium finishes, and exclusive amenities.",
        location: "Powai, Mumbai",
        city: "Mumbai",
        state: "Maharashtra",
        price: 65_000_000,
        property_type: PropertyType::Apartment,
        bhk_config: BhkConfig::Four,
        rooms: (4, 5),
        areas: (2800, 3200),
        image_url: "https://images.unsplash.com/photo-1484154218962-a197022b5858?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
        features: [false, true, false, true, false, true],
    },
];

/// The six showcase listings the site launches with, all featured.
pub fn sample_properties() -> Vec<NewProperty> {
    SAMPLE_LISTINGS
        .iter()
        .map(|sample| {
            let [vastu_compliant, ready_to_move, furnished, premium, new_launch, luxury] =
                sample.features;
            NewProperty {
                title: sample.title.to_string(),
                description: sample.description.to_string(),
                location: sample.location.to_string(),
                city: sample.city.to_string(),
                state: sample.state.to_string(),
                price: Decimal::from(sample.price),
                property_type: sample.property_type,
                bhk_config: sample.bhk_config,
                bedrooms: sample.rooms.0,
                bathrooms: sample.rooms.1,
                carpet_area: sample.areas.0,
                built_up_area: sample.areas.1,
                image_url: sample.image_url.to_string(),
                vastu_compliant,
                ready_to_move,
                furnished,
                premium,
                new_launch,
                luxury,
                contact_number: SAMPLE_CONTACT.to_string(),
                featured: true,
            }
        })
        .collect()
}

/// Insert the sample listings in order.
pub fn seed_samples<R>(repository: &R) -> Result<Vec<Property>, RepositoryError>
where
    R: ListingRepository + ?Sized,
{
    let stored = sample_properties()
        .into_iter()
        .map(|draft| repository.insert_property(draft))
        .collect::<Result<Vec<_>, _>>()?;
    info!(count = stored.len(), "seeded sample listings");
    Ok(stored)
}

#[derive(Debug)]
pub enum ListingImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Row { row: usize, source: ValidationError },
    Repository(RepositoryError),
}

impl fmt::Display for ListingImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingImportError::Io(err) => write!(f, "failed to read listings file: {err}"),
            ListingImportError::Csv(err) => write!(f, "invalid listings CSV: {err}"),
            ListingImportError::Row { row, source } => {
                write!(f, "listing row {row} rejected: {source}")
            }
            ListingImportError::Repository(err) => {
                write!(f, "could not store imported listings: {err}")
            }
        }
    }
}

impl std::error::Error for ListingImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ListingImportError::Io(err) => Some(err),
            ListingImportError::Csv(err) => Some(err),
            ListingImportError::Row { source, .. } => Some(source),
            ListingImportError::Repository(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ListingImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ListingImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<RepositoryError> for ListingImportError {
    fn from(err: RepositoryError) -> Self {
        Self::Repository(err)
    }
}

#[derive(Debug, Deserialize)]
struct ListingRow {
    title: String,
    description: String,
    location: String,
    city: String,
    state: String,
    price: String,
    property_type: String,
    bhk_config: String,
    bedrooms: String,
    bathrooms: String,
    carpet_area: String,
    built_up_area: String,
    image_url: String,
    #[serde(default)]
    vastu_compliant: Option<String>,
    #[serde(default)]
    ready_to_move: Option<String>,
    #[serde(default)]
    furnished: Option<String>,
    #[serde(default)]
    premium: Option<String>,
    #[serde(default)]
    new_launch: Option<String>,
    #[serde(default)]
    luxury: Option<String>,
    contact_number: String,
    #[serde(default)]
    featured: Option<String>,
}

impl ListingRow {
    fn into_draft(self) -> Result<NewProperty, ValidationError> {
        let mut fields = Vec::new();

        let price = parse_cell::<Decimal>(&mut fields, "price", &self.price, "a decimal amount");
        let property_type = parse_cell::<PropertyType>(
            &mut fields,
            "propertyType",
            &self.property_type,
            "one of apartment, villa, plot, commercial",
        );
        let bhk_config = parse_cell::<BhkConfig>(
            &mut fields,
            "bhkConfig",
            &self.bhk_config,
            "one of 1BHK, 2BHK, 3BHK, 4BHK",
        );
        let bedrooms = parse_cell::<u32>(&mut fields, "bedrooms", &self.bedrooms, "a whole number");
        let bathrooms =
            parse_cell::<u32>(&mut fields, "bathrooms", &self.bathrooms, "a whole number");
        let carpet_area =
            parse_cell::<u32>(&mut fields, "carpetArea", &self.carpet_area, "a whole number");
        let built_up_area = parse_cell::<u32>(
            &mut fields,
            "builtUpArea",
            &self.built_up_area,
            "a whole number",
        );

        let flags = [
            ("vastuCompliant", &self.vastu_compliant),
            ("readyToMove", &self.ready_to_move),
            ("furnished", &self.furnished),
            ("premium", &self.premium),
            ("newLaunch", &self.new_launch),
            ("luxury", &self.luxury),
            ("featured", &self.featured),
        ]
        .map(|(field, raw)| parse_flag_cell(&mut fields, field, raw.as_deref()));

        ValidationError::check(fields)?;

        let (
            Some(price),
            Some(property_type),
            Some(bhk_config),
            Some(bedrooms),
            Some(bathrooms),
            Some(carpet_area),
            Some(built_up_area),
        ) = (
            price,
            property_type,
            bhk_config,
            bedrooms,
            bathrooms,
            carpet_area,
            built_up_area,
        )
        else {
            return Err(ValidationError::single("row", "incomplete listing"));
        };
        let [vastu_compliant, ready_to_move, furnished, premium, new_launch, luxury, featured] =
            flags;

        let draft = NewProperty {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            price,
            property_type,
            bhk_config,
            bedrooms,
            bathrooms,
            carpet_area,
            built_up_area,
            image_url: self.image_url.trim().to_string(),
            vastu_compliant,
            ready_to_move,
            furnished,
            premium,
            new_launch,
            luxury,
            contact_number: self.contact_number.trim().to_string(),
            featured,
        };
        validate_property(&draft)?;
        Ok(draft)
    }
}

fn parse_cell<T: std::str::FromStr>(
    fields: &mut Vec<FieldError>,
    field: &'static str,
    raw: &str,
    expected: &str,
) -> Option<T> {
    let parsed = raw.trim().parse::<T>().ok();
    if parsed.is_none() {
        fields.push(FieldError::new(field, format!("must be {expected}")));
    }
    parsed
}

fn parse_flag_cell(fields: &mut Vec<FieldError>, field: &'static str, raw: Option<&str>) -> bool {
    match raw.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
        None | Some("") | Some("false") | Some("no") | Some("0") => false,
        Some("true") | Some("yes") | Some("1") => true,
        Some(_) => {
            fields.push(FieldError::new(field, "must be true or false"));
            false
        }
    }
}

/// Bulk listing import from a CSV export with snake_case headers.
pub struct ListingCsvImporter;

impl ListingCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<NewProperty>, ListingImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Every row is validated like an API submission; the first bad row aborts the import.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<NewProperty>, ListingImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let mut drafts = Vec::new();
        for (index, row) in csv_reader.deserialize::<ListingRow>().enumerate() {
            let draft = row?
                .into_draft()
                .map_err(|source| ListingImportError::Row {
                    row: index + 1,
                    source,
                })?;
            drafts.push(draft);
        }
        Ok(drafts)
    }

    /// Read a CSV file and store every listing in file order.
    pub fn import_into<R, P>(repository: &R, path: P) -> Result<Vec<Property>, ListingImportError>
    where
        R: ListingRepository + ?Sized,
        P: AsRef<Path>,
    {
        let drafts = Self::from_path(path.as_ref())?;
        let stored = drafts
            .into_iter()
            .map(|draft| repository.insert_property(draft))
            .collect::<Result<Vec<_>, _>>()?;
        info!(
            count = stored.len(),
            path = %path.as_ref().display(),
            "imported listings from CSV"
        );
        Ok(stored)
    }
}
