//! Pricing data model: selection enums and the static price book.
//!
//! The book is loaded once at startup (built-in tariff or a JSON file) and
//! never mutated afterwards.

use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Vehicle category, the first pricing axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleClass {
    Car,
    Suv,
    Minibus,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 3] = [VehicleClass::Car, VehicleClass::Suv, VehicleClass::Minibus];

    /// Human label for the price list
    pub fn label(self) -> &'static str {
        match self {
            VehicleClass::Car => "Легковой",
            VehicleClass::Suv => "Внедорожник",
            VehicleClass::Minibus => "Микроавтобус",
        }
    }
}

/// Rim diameter bucket, the second pricing axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RadiusBand {
    #[serde(rename = "r13-15")]
    R13to15,
    #[serde(rename = "r16-18")]
    R16to18,
    #[serde(rename = "r19-22")]
    R19to22,
}

impl RadiusBand {
    pub const ALL: [RadiusBand; 3] = [RadiusBand::R13to15, RadiusBand::R16to18, RadiusBand::R19to22];

    /// Human label for the price list
    pub fn label(self) -> &'static str {
        match self {
            RadiusBand::R13to15 => "R13-R15",
            RadiusBand::R16to18 => "R16-R18",
            RadiusBand::R19to22 => "R19-R22",
        }
    }
}

/// Kind of job quoted by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    /// Tires dismounted from the rims and remounted
    #[default]
    FullRemount,
    /// Whole wheels swapped, tires stay on their rims
    WheelSwap,
}

impl JobType {
    /// Work items included in the job, shown next to the total
    pub fn included_work(self) -> &'static [&'static str] {
        match self {
            JobType::FullRemount => &[
                "Снятие и установка",
                "Мойка",
                "Демонтаж и монтаж шин",
                "Балансировка",
            ],
            JobType::WheelSwap => &["Снятие и установка", "Мойка", "Балансировка"],
        }
    }
}

/// Individually priced service for the additive calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    /// Full re-mount of all four wheels
    Complex,
    /// Puncture repair
    Repair,
    /// Wheel balancing
    Balance,
}

/// Prices for one (vehicle, radius) tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WheelPrices {
    pub complex: Decimal,
    pub repair: Decimal,
    pub balance: Decimal,
}

impl WheelPrices {
    /// Price of a single service at this tier
    pub fn rate(&self, service: ServiceKind) -> Decimal {
        match service {
            ServiceKind::Complex => self.complex,
            ServiceKind::Repair => self.repair,
            ServiceKind::Balance => self.balance,
        }
    }
}

/// Static price table: vehicle class -> radius band -> prices
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceBook {
    tariff: BTreeMap<VehicleClass, BTreeMap<RadiusBand, WheelPrices>>,
}

impl PriceBook {
    /// The shop's published tariff
    pub fn builtin() -> Self {
        let mut tariff = BTreeMap::new();
        tariff.insert(
            VehicleClass::Car,
            BTreeMap::from([
                (RadiusBand::R13to15, WheelPrices { complex: dec!(2500), repair: dec!(500), balance: dec!(800) }),
                (RadiusBand::R16to18, WheelPrices { complex: dec!(3500), repair: dec!(600), balance: dec!(1000) }),
                (RadiusBand::R19to22, WheelPrices { complex: dec!(4500), repair: dec!(800), balance: dec!(1400) }),
            ]),
        );
        tariff.insert(
            VehicleClass::Suv,
            BTreeMap::from([
                (RadiusBand::R13to15, WheelPrices { complex: dec!(3000), repair: dec!(600), balance: dec!(1000) }),
                (RadiusBand::R16to18, WheelPrices { complex: dec!(4000), repair: dec!(800), balance: dec!(1200) }),
                (RadiusBand::R19to22, WheelPrices { complex: dec!(5500), repair: dec!(1000), balance: dec!(1600) }),
            ]),
        );
        tariff.insert(
            VehicleClass::Minibus,
            BTreeMap::from([
                (RadiusBand::R13to15, WheelPrices { complex: dec!(3500), repair: dec!(700), balance: dec!(1100) }),
                (RadiusBand::R16to18, WheelPrices { complex: dec!(4500), repair: dec!(900), balance: dec!(1400) }),
                (RadiusBand::R19to22, WheelPrices { complex: dec!(6000), repair: dec!(1200), balance: dec!(1800) }),
            ]),
        );
        Self { tariff }
    }

    /// Load a price book from a JSON file.
    ///
    /// The file mirrors the book's shape: `{"car": {"r13-15": {"complex":
    /// 2500, "repair": 500, "balance": 800}, ...}, ...}`.
    pub fn from_json_file(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read price book {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            AppError::Config(format!("invalid price book {}: {}", path.display(), e))
        })
    }

    /// All prices for a tier, if the tier is present
    pub fn wheel_prices(&self, vehicle: VehicleClass, radius: RadiusBand) -> Option<&WheelPrices> {
        self.tariff.get(&vehicle).and_then(|bands| bands.get(&radius))
    }

    /// Base price of a full re-mount for a tier
    pub fn base_price(&self, vehicle: VehicleClass, radius: RadiusBand) -> Option<Decimal> {
        self.wheel_prices(vehicle, radius).map(|prices| prices.complex)
    }
}
