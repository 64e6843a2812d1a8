//! Pricing API route handlers
//!
//! The calculator form posts its current selection here on every change.
//! Handlers are infallible: an incomplete selection is an "unavailable"
//! quote, not an error.

use axum::{extract::State, routing::post, Json, Router};

use crate::AppState;

use super::calculators::{quote_total, service_total};
use super::requests::{QuoteRequest, ServiceQuoteRequest};
use super::responses::{QuoteResponse, ServiceQuoteResponse};

/// Router for the pricing API, nested under /api/pricing
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", post(quote))
        .route("/services", post(services))
}

/// Quote the markup-chain calculator
pub async fn quote(
    State(state): State<AppState>,
    Json(req): Json<QuoteRequest>,
) -> Json<QuoteResponse> {
    let included_work = req.job_type.included_work();
    let selection = req.into_selection();
    let total = quote_total(&state.book, &selection);
    tracing::debug!("quote for {:?}: {:?}", selection, total);
    Json(QuoteResponse::new(total, included_work))
}

/// Quote the additive service calculator
pub async fn services(
    State(state): State<AppState>,
    Json(req): Json<ServiceQuoteRequest>,
) -> Json<ServiceQuoteResponse> {
    let total = service_total(&state.book, req.vehicle, req.radius, &req.services);
    tracing::debug!("service quote for {:?}: {:?}", req.services, total);
    Json(ServiceQuoteResponse::new(total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::pricing::models::PriceBook;
    use serde_json::json;
    use std::net::IpAddr;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState {
            config: Arc::new(Config {
                host: IpAddr::from([127, 0, 0, 1]),
                port: 0,
                price_book_path: None,
                static_dir: PathBuf::from("static"),
            }),
            book: Arc::new(PriceBook::builtin()),
        }
    }

    #[tokio::test]
    async fn quote_returns_formatted_total() {
        let req: QuoteRequest = serde_json::from_value(json!({
            "vehicle": "car",
            "radius": "r16-18",
            "run_flat": true,
            "low_profile": true
        }))
        .unwrap();

        let Json(resp) = quote(State(test_state()), Json(req)).await;
        assert!(resp.available);
        assert_eq!(resp.formatted, "4\u{a0}830 ₽");
        assert_eq!(resp.included_work.len(), 4);
    }

    #[tokio::test]
    async fn quote_without_vehicle_is_unavailable() {
        let req: QuoteRequest =
            serde_json::from_value(json!({ "radius": "r16-18", "valve_set": true })).unwrap();

        let Json(resp) = quote(State(test_state()), Json(req)).await;
        assert!(!resp.available);
        assert!(resp.total.is_none());
        assert_eq!(resp.formatted, "—");
    }

    #[tokio::test]
    async fn quote_lists_wheel_swap_work() {
        let req: QuoteRequest = serde_json::from_value(json!({
            "job_type": "wheel-swap",
            "vehicle": "car",
            "radius": "r13-15"
        }))
        .unwrap();

        let Json(resp) = quote(State(test_state()), Json(req)).await;
        assert_eq!(resp.formatted, "1\u{a0}500 ₽");
        assert_eq!(resp.included_work.len(), 3);
    }

    #[tokio::test]
    async fn services_sum_selected_subprices() {
        let req: ServiceQuoteRequest = serde_json::from_value(json!({
            "vehicle": "suv",
            "radius": "r16-18",
            "services": ["repair", "balance"]
        }))
        .unwrap();

        let Json(resp) = services(State(test_state()), Json(req)).await;
        assert!(resp.available);
        assert_eq!(resp.formatted, "2\u{a0}000 ₽");
    }

    #[tokio::test]
    async fn services_empty_set_is_unavailable() {
        let req: ServiceQuoteRequest = serde_json::from_value(json!({
            "vehicle": "suv",
            "radius": "r16-18",
            "services": []
        }))
        .unwrap();

        let Json(resp) = services(State(test_state()), Json(req)).await;
        assert!(!resp.available);
        assert_eq!(resp.formatted, "—");
    }
}
