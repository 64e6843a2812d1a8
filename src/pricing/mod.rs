//! Pricing module for the tire service.
//!
//! Pure calculator math (no I/O) plus the JSON API the calculator form
//! talks to. The calculator on the site re-requests a quote on every form
//! change; each request is an independent computation over the immutable
//! price book.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::{quote_total, round_money, service_total, QuoteSelection};
pub use models::PriceBook;
pub use routes::router;
