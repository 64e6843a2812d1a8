//! Site page handlers

use askama::Template;
use axum::{extract::State, response::Html};

use crate::error::{AppError, Result};
use crate::pricing::models::{RadiusBand, VehicleClass};
use crate::pricing::responses::format_rub;
use crate::AppState;

/// Home page template
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    radius_labels: Vec<&'static str>,
    price_rows: Vec<PriceRow>,
}

/// One vehicle class in the public price list
struct PriceRow {
    vehicle: &'static str,
    prices: Vec<String>,
}

/// Home page with the calculator and the public price list.
///
/// The table is rendered from the same book the calculator quotes from.
pub async fn home(State(state): State<AppState>) -> Result<Html<String>> {
    let price_rows = VehicleClass::ALL
        .iter()
        .map(|vehicle| PriceRow {
            vehicle: vehicle.label(),
            prices: RadiusBand::ALL
                .iter()
                .map(|radius| format_rub(state.book.base_price(*vehicle, *radius)))
                .collect(),
        })
        .collect();

    let template = IndexTemplate {
        radius_labels: RadiusBand::ALL.iter().map(|radius| radius.label()).collect(),
        price_rows,
    };

    Ok(Html(template.render()?))
}

/// Liveness probe
pub async fn health() -> &'static str {
    "ok"
}

/// Fallback for unknown paths
pub async fn not_found() -> AppError {
    AppError::NotFound
}
