//! Core pricing calculation functions.
//!
//! Pure functions for the calculator math - no I/O, no shared state.
//! A missing selection always resolves to `None` ("unavailable"), never to
//! zero and never to a panic.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::models::{JobType, PriceBook, RadiusBand, ServiceKind, VehicleClass};

use std::collections::BTreeSet;

/// Wheel-swap price factor relative to the full re-mount price
pub const WHEEL_SWAP_FACTOR: Decimal = dec!(0.6);
/// Markup for run-flat tires
pub const RUN_FLAT_MARKUP: Decimal = dec!(1.2);
/// Markup for low-profile tires
pub const LOW_PROFILE_MARKUP: Decimal = dec!(1.15);
/// Flat surcharge for a set of new valves
pub const VALVE_SET_EXTRA: Decimal = dec!(500);

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is
/// exactly halfway between two possibilities. The markup chain rounds to
/// whole rubles after every multiplicative step, so each markup compounds
/// on the already-rounded previous total.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use koleso_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// The user's current calculator choices, read fresh for every computation
#[derive(Debug, Clone, Default)]
pub struct QuoteSelection {
    pub job_type: JobType,
    pub vehicle: Option<VehicleClass>,
    pub radius: Option<RadiusBand>,
    pub run_flat: bool,
    pub low_profile: bool,
    pub valve_set: bool,
}

/// Quote the markup-chain calculator.
///
/// Looks up the base price for the selected tier, then applies adjustments
/// in fixed order: wheel-swap factor, run-flat markup, low-profile markup
/// (each followed by rounding to whole rubles), and finally the flat valve
/// surcharge, which is never rounded or multiplied.
///
/// Returns `None` when the vehicle class or radius band is unselected or
/// absent from the book.
pub fn quote_total(book: &PriceBook, selection: &QuoteSelection) -> Option<Decimal> {
    let vehicle = selection.vehicle?;
    let radius = selection.radius?;
    let base = book.base_price(vehicle, radius)?;

    let mut total = base;
    if selection.job_type == JobType::WheelSwap {
        total = round_money(total * WHEEL_SWAP_FACTOR, 0);
    }
    if selection.run_flat {
        total = round_money(total * RUN_FLAT_MARKUP, 0);
    }
    if selection.low_profile {
        total = round_money(total * LOW_PROFILE_MARKUP, 0);
    }
    if selection.valve_set {
        total += VALVE_SET_EXTRA;
    }
    Some(total)
}

/// Quote the additive service calculator.
///
/// Sums the sub-prices of the selected services for the tier. No markups
/// apply in this model. Returns `None` when the vehicle class or radius
/// band is unselected or absent, or when no service is selected.
pub fn service_total(
    book: &PriceBook,
    vehicle: Option<VehicleClass>,
    radius: Option<RadiusBand>,
    services: &BTreeSet<ServiceKind>,
) -> Option<Decimal> {
    let vehicle = vehicle?;
    let radius = radius?;
    if services.is_empty() {
        return None;
    }
    let prices = book.wheel_prices(vehicle, radius)?;
    Some(services.iter().map(|service| prices.rate(*service)).sum())
}
