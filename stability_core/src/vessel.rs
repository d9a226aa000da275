//! # Vessel Data
//!
//! Static description of a hull: principal dimensions, lightship, hydrostatic
//! tables, KN cross curves, tank geometry and windage. Vessel data is loaded
//! once and only ever read by the engine.
//!
//! All lengths are meters: vertical from the keel, longitudinal from the
//! forward perpendicular (positive aft, so LCG > LCB trims by the stern),
//! transverse from the centerline (positive to starboard).
//!
//! ## Example
//!
//! ```rust
//! use stability_core::vessel::{KnTable, LightshipData};
//!
//! let lightship = LightshipData::new(4200.0, 7.9, 47.5, 0.0);
//! assert_eq!(lightship.weight_t, 4200.0);
//!
//! let kn = KnTable::new(vec![0.0, 30.0, 60.0])
//!     .with_curve(6.0, vec![0.0, 4.19, 7.15])
//!     .with_curve(7.0, vec![0.0, 4.06, 6.93]);
//! assert_eq!(kn.curves.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::damage::CompartmentData;
use crate::errors::{CalcResult, StabilityError};

/// Complete static description of a vessel.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "MV Example",
///   "lpp_m": 100.0,
///   "breadth_m": 16.0,
///   "depth_m": 9.0,
///   "lightship": { "weight_t": 4200.0, "kg_m": 7.9, "lcg_m": 47.5, "tcg_m": 0.0 },
///   "hydrostatics": { "draft_m": [4.0, 10.0], "displacement_t": [8000.0, 20000.0], "...": "..." },
///   "tanks": [],
///   "downflooding_angle_deg": 45.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselData {
    /// Vessel name
    pub name: String,

    /// Length between perpendiculars (m)
    pub lpp_m: f64,

    /// Moulded breadth (m)
    pub breadth_m: f64,

    /// Moulded depth (m)
    pub depth_m: f64,

    /// Bare-hull weight and center of gravity
    pub lightship: LightshipData,

    /// Hydrostatic tables and KN cross curves
    pub hydrostatics: HydrostaticTables,

    /// Tank geometry; fillings in a loading case reference these by id
    #[serde(default)]
    pub tanks: Vec<TankGeometry>,

    /// Heel angle at which an unprotected opening immerses (degrees)
    pub downflooding_angle_deg: f64,

    /// Lateral windage, if known
    #[serde(default)]
    pub windage: Option<WindageData>,

    /// Watertight compartments for damage stability models
    #[serde(default)]
    pub compartments: Vec<CompartmentData>,
}

impl VesselData {
    /// Validate the scalar inputs.
    ///
    /// Table shape problems are not rejected here: the pipeline treats a
    /// malformed table as a recoverable condition and reports it per lookup.
    pub fn validate(&self) -> CalcResult<()> {
        positive("lpp_m", self.lpp_m, "Length between perpendiculars must be positive")?;
        positive("breadth_m", self.breadth_m, "Breadth must be positive")?;
        positive("depth_m", self.depth_m, "Depth must be positive")?;
        non_negative(
            "lightship.weight_t",
            self.lightship.weight_t,
            "Lightship weight cannot be negative",
        )?;
        for (field, value) in [
            ("lightship.kg_m", self.lightship.kg_m),
            ("lightship.lcg_m", self.lightship.lcg_m),
            ("lightship.tcg_m", self.lightship.tcg_m),
        ] {
            finite(field, value)?;
        }
        if !(self.downflooding_angle_deg > 0.0 && self.downflooding_angle_deg <= 180.0) {
            return Err(StabilityError::invalid_input(
                "downflooding_angle_deg",
                self.downflooding_angle_deg.to_string(),
                "Downflooding angle must be in (0, 180] degrees",
            ));
        }
        for tank in &self.tanks {
            tank.validate()?;
        }
        if let Some(windage) = &self.windage {
            non_negative(
                "windage.lateral_area_m2",
                windage.lateral_area_m2,
                "Lateral area cannot be negative",
            )?;
            finite("windage.center_height_m", windage.center_height_m)?;
        }
        Ok(())
    }

    /// Find tank geometry by id
    pub fn tank(&self, id: &str) -> Option<&TankGeometry> {
        self.tanks.iter().find(|t| t.id == id)
    }
}

/// Bare-hull weight and its center of gravity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightshipData {
    /// Lightship weight (t)
    pub weight_t: f64,
    /// Vertical center of gravity above keel (m)
    pub kg_m: f64,
    /// Longitudinal center of gravity (m)
    pub lcg_m: f64,
    /// Transverse center of gravity (m)
    pub tcg_m: f64,
}

impl LightshipData {
    pub fn new(weight_t: f64, kg_m: f64, lcg_m: f64, tcg_m: f64) -> Self {
        Self {
            weight_t,
            kg_m,
            lcg_m,
            tcg_m,
        }
    }
}

/// Hydrostatic particulars tabulated against a common draft axis.
///
/// Every array is parallel to `draft_m`, which must be strictly increasing.
/// The optional columns fall back as follows when absent: `bmt_m` is derived
/// as KMt − KB, the others read as zero (and trim is then reported as
/// degenerate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrostaticTables {
    /// Mean draft axis (m)
    pub draft_m: Vec<f64>,
    /// Displacement (t)
    pub displacement_t: Vec<f64>,
    /// Center of buoyancy above keel (m)
    pub kb_m: Vec<f64>,
    /// Transverse metacenter above keel (m)
    pub kmt_m: Vec<f64>,
    /// Transverse metacentric radius (m)
    #[serde(default)]
    pub bmt_m: Option<Vec<f64>>,
    /// Longitudinal center of buoyancy (m)
    #[serde(default)]
    pub lcb_m: Option<Vec<f64>>,
    /// Longitudinal center of flotation (m)
    #[serde(default)]
    pub lcf_m: Option<Vec<f64>>,
    /// Tonnes per centimeter immersion (t/cm)
    #[serde(default)]
    pub tpc_t_per_cm: Option<Vec<f64>>,
    /// Moment to change trim one centimeter (t·m/cm)
    #[serde(default)]
    pub mtc_tm_per_cm: Option<Vec<f64>>,
    /// KN cross curves
    pub kn: KnTable,
}

/// KN cross curves: one KN array per reference draft over a shared heel axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnTable {
    /// Heel angle axis (degrees), strictly increasing
    pub heel_angles_deg: Vec<f64>,
    /// One curve per reference draft
    pub curves: Vec<KnCurve>,
}

impl KnTable {
    /// Create a table with no curves yet
    pub fn new(heel_angles_deg: Vec<f64>) -> Self {
        Self {
            heel_angles_deg,
            curves: Vec::new(),
        }
    }

    /// Add a KN curve for a reference draft and return self (builder pattern)
    pub fn with_curve(mut self, draft_m: f64, kn_m: Vec<f64>) -> Self {
        self.curves.push(KnCurve { draft_m, kn_m });
        self
    }
}

/// KN values at one reference draft, aligned with [`KnTable::heel_angles_deg`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnCurve {
    /// Reference draft (m)
    pub draft_m: f64,
    /// KN per heel angle (m)
    pub kn_m: Vec<f64>,
}

/// Geometry of one tank. Fill state lives in [`crate::loading::TankFilling`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankGeometry {
    /// Tank identifier referenced by fillings
    pub id: String,
    /// Fluid density (t/m³)
    pub density_t_per_m3: f64,
    /// Full capacity (m³)
    pub capacity_m3: f64,
    /// Free-surface moment (t·m) keyed by fill percent: `[[fill_percent, fsm], ...]`
    pub fsm_table: Vec<[f64; 2]>,
    /// Longitudinal center (m)
    pub lcg_m: f64,
    /// Transverse center (m)
    pub tcg_m: f64,
    /// Vertical center above keel (m)
    pub vcg_m: f64,
}

impl TankGeometry {
    fn validate(&self) -> CalcResult<()> {
        let field = |name: &str| format!("tanks[{}].{}", self.id, name);
        positive(
            &field("density_t_per_m3"),
            self.density_t_per_m3,
            "Fluid density must be positive",
        )?;
        non_negative(&field("capacity_m3"), self.capacity_m3, "Capacity cannot be negative")?;
        finite(&field("lcg_m"), self.lcg_m)?;
        finite(&field("tcg_m"), self.tcg_m)?;
        finite(&field("vcg_m"), self.vcg_m)?;
        Ok(())
    }
}

/// Lateral windage above the waterline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindageData {
    /// Projected lateral area (m²)
    pub lateral_area_m2: f64,
    /// Height of the area's center above the waterline (m)
    pub center_height_m: f64,
}

// ============================================================================
// Validation helpers
// ============================================================================

pub(crate) fn finite(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(StabilityError::invalid_input(field, value.to_string(), "Value must be finite"));
    }
    Ok(())
}

pub(crate) fn positive(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    if !(value.is_finite() && value > 0.0) {
        return Err(StabilityError::invalid_input(field, value.to_string(), reason));
    }
    Ok(())
}

pub(crate) fn non_negative(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    if !(value.is_finite() && value >= 0.0) {
        return Err(StabilityError::invalid_input(field, value.to_string(), reason));
    }
    Ok(())
}
