//! # Loading Cases
//!
//! A loading case is the variable part of a condition: discrete cargo items,
//! tank fill levels, passengers and vehicles. It is pure input and is never
//! mutated by the engine.
//!
//! ## Example
//!
//! ```rust
//! use stability_core::loading::{LoadingCase, LoadingItem, TankFilling};
//!
//! let case = LoadingCase::new("Departure")
//!     .with_item(LoadingItem::new("Hold 1 steel coils", 2400.0, 72.0, 0.0, 3.1))
//!     .with_tank(TankFilling::new("DB1P", 50.0));
//!
//! assert_eq!(case.items.len(), 1);
//! assert!(case.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcResult, StabilityError};
use crate::vessel::{finite, non_negative};

/// One loading condition.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "Departure",
///   "items": [
///     { "name": "Hold 1", "weight_t": 2400.0, "lcg_m": 72.0, "tcg_m": 0.0, "vcg_m": 3.1 }
///   ],
///   "tanks": [
///     { "id": "DB1P", "fill_percent": 50.0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadingCase {
    /// Case name (e.g., "Departure", "Arrival 10% consumables")
    #[serde(default)]
    pub name: String,

    /// Discrete cargo and stores
    #[serde(default)]
    pub items: Vec<LoadingItem>,

    /// Tank fill levels
    #[serde(default)]
    pub tanks: Vec<TankFilling>,

    /// Passenger groups
    #[serde(default)]
    pub passengers: Vec<PassengerGroup>,

    /// Vehicle groups
    #[serde(default)]
    pub vehicles: Vec<VehicleGroup>,
}

impl LoadingCase {
    /// Create an empty loading case
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a cargo item and return self (builder pattern)
    pub fn with_item(mut self, item: LoadingItem) -> Self {
        self.items.push(item);
        self
    }

    /// Add a tank filling and return self (builder pattern)
    pub fn with_tank(mut self, filling: TankFilling) -> Self {
        self.tanks.push(filling);
        self
    }

    /// Add a passenger group and return self (builder pattern)
    pub fn with_passengers(mut self, group: PassengerGroup) -> Self {
        self.passengers.push(group);
        self
    }

    /// Add a vehicle group and return self (builder pattern)
    pub fn with_vehicles(mut self, group: VehicleGroup) -> Self {
        self.vehicles.push(group);
        self
    }

    /// Validate all entries.
    ///
    /// Unknown tank ids are not checked here; they are resolved against the
    /// vessel during aggregation.
    pub fn validate(&self) -> CalcResult<()> {
        for (i, item) in self.items.iter().enumerate() {
            let field = |name: &str| format!("items[{}].{}", i, name);
            non_negative(&field("weight_t"), item.weight_t, "Item weight cannot be negative")?;
            finite(&field("lcg_m"), item.lcg_m)?;
            finite(&field("tcg_m"), item.tcg_m)?;
            finite(&field("vcg_m"), item.vcg_m)?;
        }
        for filling in &self.tanks {
            if !(0.0..=100.0).contains(&filling.fill_percent) {
                return Err(StabilityError::invalid_input(
                    format!("tanks[{}].fill_percent", filling.id),
                    filling.fill_percent.to_string(),
                    "Fill percent must be between 0 and 100",
                ));
            }
        }
        for (i, group) in self.passengers.iter().enumerate() {
            let field = |name: &str| format!("passengers[{}].{}", i, name);
            non_negative(
                &field("average_weight_kg"),
                group.average_weight_kg,
                "Average weight cannot be negative",
            )?;
            finite(&field("lcg_m"), group.lcg_m)?;
            finite(&field("tcg_m"), group.tcg_m)?;
            finite(&field("vcg_m"), group.vcg_m)?;
        }
        for (i, group) in self.vehicles.iter().enumerate() {
            let field = |name: &str| format!("vehicles[{}].{}", i, name);
            non_negative(
                &field("average_weight_t"),
                group.average_weight_t,
                "Average weight cannot be negative",
            )?;
            finite(&field("lcg_m"), group.lcg_m)?;
            finite(&field("tcg_m"), group.tcg_m)?;
            finite(&field("vcg_m"), group.vcg_m)?;
        }
        Ok(())
    }
}

/// A discrete weight with its center of gravity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadingItem {
    /// Description (e.g., "Hold 2 containers")
    pub name: String,
    /// Weight (t)
    pub weight_t: f64,
    /// Longitudinal center (m)
    pub lcg_m: f64,
    /// Transverse center (m)
    pub tcg_m: f64,
    /// Vertical center above keel (m)
    pub vcg_m: f64,
}

impl LoadingItem {
    pub fn new(name: impl Into<String>, weight_t: f64, lcg_m: f64, tcg_m: f64, vcg_m: f64) -> Self {
        Self {
            name: name.into(),
            weight_t,
            lcg_m,
            tcg_m,
            vcg_m,
        }
    }
}

/// Fill level of one vessel tank, joined to its [`crate::vessel::TankGeometry`] by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankFilling {
    /// References `TankGeometry::id`
    pub id: String,
    /// Fill level, 0-100
    pub fill_percent: f64,
}

impl TankFilling {
    pub fn new(id: impl Into<String>, fill_percent: f64) -> Self {
        Self {
            id: id.into(),
            fill_percent,
        }
    }
}

/// Passengers occupying one area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassengerGroup {
    /// Deck area (e.g., "Promenade deck")
    pub area: String,
    /// Number of persons
    pub count: u32,
    /// Average weight per person including luggage (kg)
    pub average_weight_kg: f64,
    pub lcg_m: f64,
    pub tcg_m: f64,
    pub vcg_m: f64,
}

impl PassengerGroup {
    /// Total group weight (t)
    pub fn weight_t(&self) -> f64 {
        f64::from(self.count) * self.average_weight_kg / 1000.0
    }
}

/// Vehicles parked on one deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleGroup {
    /// Deck name (e.g., "Main vehicle deck")
    pub deck: String,
    /// Number of vehicles
    pub count: u32,
    /// Average weight per vehicle (t)
    pub average_weight_t: f64,
    pub lcg_m: f64,
    pub tcg_m: f64,
    pub vcg_m: f64,
}

impl VehicleGroup {
    /// Total group weight (t)
    pub fn weight_t(&self) -> f64 {
        f64::from(self.count) * self.average_weight_t
    }
}
