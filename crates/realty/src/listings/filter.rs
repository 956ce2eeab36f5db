use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::domain::{BhkConfig, Property, PropertyType};

/// Optional predicates over the catalogue. Every present criterion must hold; an empty set of
/// criteria matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub city: Option<String>,
    pub property_type: Option<PropertyType>,
    pub bhk_config: Option<BhkConfig>,
    /// Case-insensitive substring over title, location, city, and description.
    pub keyword: Option<String>,
}

impl SearchCriteria {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn with_min_price(mut self, price: Decimal) -> Self {
        self.min_price = Some(price);
        self
    }

    pub fn with_max_price(mut self, price: Decimal) -> Self {
        self.max_price = Some(price);
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_property_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = Some(property_type);
        self
    }

    pub fn with_bhk(mut self, bhk: BhkConfig) -> Self {
        self.bhk_config = Some(bhk);
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn matches(&self, property: &Property) -> bool {
        let details = &property.details;

        if let Some(min) = self.min_price {
            if details.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if details.price > max {
                return false;
            }
        }
        if let Some(city) = &self.city {
            if &details.city != city {
                return false;
            }
        }
        if let Some(kind) = self.property_type {
            if details.property_type != kind {
                return false;
            }
        }
        if let Some(bhk) = self.bhk_config {
            if details.bhk_config != bhk {
                return false;
            }
        }
        if let Some(keyword) = &self.keyword {
            let needle = keyword.to_lowercase();
            let hit = [
                &details.title,
                &details.location,
                &details.city,
                &details.description,
            ]
            .into_iter()
            .any(|haystack| haystack.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        true
    }
}

/// Stable, order-preserving filter.
pub fn filter(properties: &[Property], criteria: &SearchCriteria) -> Vec<Property> {
    if criteria.is_empty() {
        return properties.to_vec();
    }

    properties
        .iter()
        .filter(|property| criteria.matches(property))
        .cloned()
        .collect()
}
