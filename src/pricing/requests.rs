//! Request DTOs for the pricing API.
//!
//! Every field is optional on the wire: the form posts whatever is selected
//! and the defaults mirror an untouched form.

use std::collections::BTreeSet;

use serde::Deserialize;

use super::calculators::QuoteSelection;
use super::models::{JobType, RadiusBand, ServiceKind, VehicleClass};

/// Request to quote the markup-chain calculator
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct QuoteRequest {
    pub job_type: JobType,
    pub vehicle: Option<VehicleClass>,
    pub radius: Option<RadiusBand>,
    pub run_flat: bool,
    pub low_profile: bool,
    pub valve_set: bool,
}

impl QuoteRequest {
    /// Snapshot of the request as an engine selection
    pub fn into_selection(self) -> QuoteSelection {
        QuoteSelection {
            job_type: self.job_type,
            vehicle: self.vehicle,
            radius: self.radius,
            run_flat: self.run_flat,
            low_profile: self.low_profile,
            valve_set: self.valve_set,
        }
    }
}

/// Request to quote the additive service calculator
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ServiceQuoteRequest {
    pub vehicle: Option<VehicleClass>,
    pub radius: Option<RadiusBand>,
    /// Checkbox set; duplicates collapse on deserialization
    pub services: BTreeSet<ServiceKind>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_body_means_untouched_form() {
        let req: QuoteRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(req.job_type, JobType::FullRemount);
        assert!(req.vehicle.is_none());
        assert!(req.radius.is_none());
        assert!(!req.run_flat && !req.low_profile && !req.valve_set);
    }

    #[test]
    fn full_body_parses_wire_names() {
        let req: QuoteRequest = serde_json::from_value(json!({
            "job_type": "wheel-swap",
            "vehicle": "minibus",
            "radius": "r19-22",
            "run_flat": true,
            "low_profile": false,
            "valve_set": true
        }))
        .unwrap();
        assert_eq!(req.job_type, JobType::WheelSwap);
        assert_eq!(req.vehicle, Some(VehicleClass::Minibus));
        assert_eq!(req.radius, Some(RadiusBand::R19to22));
        assert!(req.run_flat);
        assert!(req.valve_set);
    }

    #[test]
    fn duplicate_services_collapse_to_a_set() {
        let req: ServiceQuoteRequest = serde_json::from_value(json!({
            "vehicle": "car",
            "radius": "r13-15",
            "services": ["repair", "repair", "balance"]
        }))
        .unwrap();
        assert_eq!(req.services.len(), 2);
    }
}
