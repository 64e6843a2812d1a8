//! Web frontend for the Koleso tire service.
//!
//! Serves the marketing site and exposes the pricing calculator as a small
//! JSON API. All pricing math lives in pure functions under [`pricing`];
//! the HTTP layer only reads the form selection and renders the result.

pub mod config;
pub mod error;
pub mod pricing;
pub mod routes;

use std::sync::Arc;

use config::Config;
use pricing::PriceBook;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub book: Arc<PriceBook>,
}
