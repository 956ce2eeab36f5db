use metrics_exporter_prometheus::PrometheusHandle;
use realty::config::CatalogueConfig;
use realty::error::AppError;
use realty::listings::{seed_samples, InMemoryListingRepository, ListingCsvImporter};
use rust_decimal::Decimal;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the process-lifetime catalogue: samples first, then any CSV listings.
pub(crate) fn build_catalogue(
    config: &CatalogueConfig,
) -> Result<Arc<InMemoryListingRepository>, AppError> {
    load_catalogue(config.seed_samples, config.listings_csv.as_deref())
}

pub(crate) fn load_catalogue(
    seed: bool,
    listings_csv: Option<&Path>,
) -> Result<Arc<InMemoryListingRepository>, AppError> {
    let repository = Arc::new(InMemoryListingRepository::new());

    if seed {
        seed_samples(repository.as_ref())?;
    }
    if let Some(path) = listings_csv {
        ListingCsvImporter::import_into(repository.as_ref(), path)?;
    }

    info!(seeded = seed, csv = listings_csv.is_some(), "catalogue ready");
    Ok(repository)
}

pub(crate) fn parse_amount(raw: &str) -> Result<Decimal, String> {
    let amount = raw
        .trim()
        .replace(',', "")
        .parse::<Decimal>()
        .map_err(|err| format!("failed to parse '{raw}' as an amount ({err})"))?;
    if amount < Decimal::ZERO {
        return Err(format!("'{raw}' must not be negative"));
    }
    Ok(amount)
}
