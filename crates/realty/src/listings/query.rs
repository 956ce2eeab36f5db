use rust_decimal::Decimal;
use serde::Deserialize;

use super::domain::{BhkConfig, PropertyType};
use super::filter::SearchCriteria;
use crate::validation::{FieldError, ValidationError};

/// Search parameters as they arrive from a query string or a filter form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub city: Option<String>,
    pub property_type: Option<String>,
    pub bhk_config: Option<String>,
    #[serde(alias = "searchTerm")]
    pub q: Option<String>,
}

/// Dropdown values that mean "no constraint".
const SENTINELS: [&str; 6] = ["all", "any", "all cities", "all types", "any bhk", "any price"];

fn present(raw: Option<&str>) -> Option<&str> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() || SENTINELS.contains(&trimmed.to_ascii_lowercase().as_str()) {
        None
    } else {
        Some(trimmed)
    }
}

impl SearchQuery {
    /// Translate sentinels to absence and parse the typed criteria.
    pub fn into_criteria(self) -> Result<SearchCriteria, ValidationError> {
        let mut fields = Vec::new();
        let mut criteria = SearchCriteria::default();

        for (field, raw, slot) in [
            ("minPrice", &self.min_price, &mut criteria.min_price),
            ("maxPrice", &self.max_price, &mut criteria.max_price),
        ] {
            if let Some(value) = present(raw.as_deref()) {
                match value.parse::<Decimal>() {
                    Ok(amount) if amount < Decimal::ZERO => {
                        fields.push(FieldError::new(field, "must not be negative"));
                    }
                    Ok(amount) => *slot = Some(amount),
                    Err(_) => fields.push(FieldError::new(field, "must be a number")),
                }
            }
        }

        criteria.city = present(self.city.as_deref()).map(str::to_string);

        if let Some(value) = present(self.property_type.as_deref()) {
            match value.parse::<PropertyType>() {
                Ok(kind) => criteria.property_type = Some(kind),
                Err(err) => fields.push(FieldError::new("propertyType", err.to_string())),
            }
        }

        if let Some(value) = present(self.bhk_config.as_deref()) {
            match value.parse::<BhkConfig>() {
                Ok(bhk) => criteria.bhk_config = Some(bhk),
                Err(err) => fields.push(FieldError::new("bhkConfig", err.to_string())),
            }
        }

        criteria.keyword = present(self.q.as_deref()).map(str::to_string);

        ValidationError::check(fields)?;
        Ok(criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_and_blanks_impose_no_constraint() {
        let query = SearchQuery {
            min_price: Some("any".into()),
            max_price: Some(String::new()),
            city: Some("All Cities".into()),
            property_type: Some("all".into()),
            bhk_config: Some("Any BHK".into()),
            q: Some("   ".into()),
        };

        let criteria = query.into_criteria().expect("sentinels parse");
        assert!(criteria.is_empty());
    }

    #[test]
    fn parses_typed_criteria() {
        let query = SearchQuery {
            min_price: Some("10000000".into()),
            max_price: Some("50000000".into()),
            city: Some("Mumbai".into()),
            property_type: Some("Villa".into()),
            bhk_config: Some("4+BHK".into()),
            q: Some("garden".into()),
        };

        let criteria = query.into_criteria().expect("valid query");
        assert_eq!(criteria.min_price, Some(Decimal::from(10_000_000)));
        assert_eq!(criteria.max_price, Some(Decimal::from(50_000_000)));
        assert_eq!(criteria.city.as_deref(), Some("Mumbai"));
        assert_eq!(criteria.property_type, Some(PropertyType::Villa));
        assert_eq!(criteria.bhk_config, Some(BhkConfig::Four));
        assert_eq!(criteria.keyword.as_deref(), Some("garden"));
    }

    #[test]
    fn rejects_non_numeric_bounds_and_unknown_labels() {
        let query = SearchQuery {
            min_price: Some("one crore".into()),
            max_price: Some("-5".into()),
            property_type: Some("castle".into()),
            bhk_config: Some("5BHK".into()),
            ..SearchQuery::default()
        };

        let error = query.into_criteria().expect_err("invalid query");
        assert_eq!(
            error.field_names(),
            vec!["minPrice", "maxPrice", "propertyType", "bhkConfig"]
        );
    }
}
