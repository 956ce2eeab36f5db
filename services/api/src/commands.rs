use crate::infra::load_catalogue;
use clap::Args;
use realty::error::AppError;
use realty::finance::{calculate_emi, format_indian_price, group_indian_digits, LoanTerms};
use realty::listings::{
    BhkConfig, ListingService, ListingServiceError, Property, PropertyType, SearchCriteria,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
    /// Lowest acceptable price in rupees (commas allowed)
    #[arg(long, value_parser = crate::infra::parse_amount)]
    pub(crate) min_price: Option<Decimal>,
    /// Highest acceptable price in rupees (commas allowed)
    #[arg(long, value_parser = crate::infra::parse_amount)]
    pub(crate) max_price: Option<Decimal>,
    /// Exact city name, e.g. Mumbai
    #[arg(long)]
    pub(crate) city: Option<String>,
    /// apartment, villa, plot or commercial
    #[arg(long)]
    pub(crate) property_type: Option<PropertyType>,
    /// 1BHK, 2BHK, 3BHK or 4BHK
    #[arg(long)]
    pub(crate) bhk: Option<BhkConfig>,
    /// Free-text match against title, location, city and description
    #[arg(long)]
    pub(crate) keyword: Option<String>,
    /// Listings CSV to load on top of the sample catalogue
    #[arg(long)]
    pub(crate) listings_csv: Option<PathBuf>,
    /// Skip the built-in sample listings
    #[arg(long)]
    pub(crate) no_samples: bool,
}

impl SearchArgs {
    fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            min_price: self.min_price,
            max_price: self.max_price,
            city: self.city.clone(),
            property_type: self.property_type,
            bhk_config: self.bhk,
            keyword: self.keyword.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct EmiArgs {
    /// Principal in rupees (commas allowed)
    #[arg(long, value_parser = crate::infra::parse_amount)]
    pub(crate) loan_amount: Decimal,
    /// Annual interest rate in percent
    #[arg(long)]
    pub(crate) rate: f64,
    /// Loan tenure in years
    #[arg(long)]
    pub(crate) tenure_years: f64,
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let repository = load_catalogue(!args.no_samples, args.listings_csv.as_deref())?;
    let service = ListingService::new(repository);
    let criteria = args.criteria();

    let results = service.search(&criteria).map_err(service_error)?;
    render_search_results(&criteria, &results);
    Ok(())
}

pub(crate) fn run_emi(args: EmiArgs) -> Result<(), AppError> {
    let loan_amount = decimal_to_f64(args.loan_amount);
    let breakdown = calculate_emi(LoanTerms::new(loan_amount, args.rate, args.tenure_years))?;

    println!("Home loan EMI");
    println!(
        "Loan ₹{} at {}% for {} years",
        group_indian_digits(loan_amount.round() as i64),
        args.rate,
        args.tenure_years
    );
    println!(
        "- Monthly EMI: ₹{}",
        group_indian_digits(breakdown.monthly_installment)
    );
    println!(
        "- Total interest: ₹{}",
        group_indian_digits(breakdown.total_interest)
    );
    println!(
        "- Total payment: ₹{}",
        group_indian_digits(breakdown.total_payment)
    );
    Ok(())
}

fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

fn service_error(err: ListingServiceError) -> AppError {
    match err {
        ListingServiceError::Validation(err) => AppError::Validation(err),
        ListingServiceError::Repository(err) => AppError::Repository(err),
    }
}

fn render_search_results(criteria: &SearchCriteria, results: &[Property]) {
    if criteria.is_empty() {
        println!("Showing every listing");
    } else {
        println!("Listings matching {}", describe_criteria(criteria));
    }

    if results.is_empty() {
        println!("No properties found");
        return;
    }

    for property in results {
        let details = &property.details;
        let badge = if details.featured { " [featured]" } else { "" };
        println!(
            "- #{} {}{} | {} | {} {} | {}",
            property.id,
            details.title,
            badge,
            details.location,
            details.bhk_config,
            details.property_type,
            format_indian_price(details.price)
        );
    }
    println!("{} result(s)", results.len());
}

fn describe_criteria(criteria: &SearchCriteria) -> String {
    let mut parts = Vec::new();
    if let Some(min) = criteria.min_price {
        parts.push(format!("from {}", format_indian_price(min)));
    }
    if let Some(max) = criteria.max_price {
        parts.push(format!("up to {}", format_indian_price(max)));
    }
    if let Some(city) = &criteria.city {
        parts.push(format!("in {city}"));
    }
    if let Some(kind) = criteria.property_type {
        parts.push(kind.label().to_string());
    }
    if let Some(bhk) = criteria.bhk_config {
        parts.push(bhk.label().to_string());
    }
    if let Some(keyword) = &criteria.keyword {
        parts.push(format!("mentioning '{keyword}'"));
    }
    parts.join(", ")
}
