//! # Wind Heeling
//!
//! Steady beam wind acting on the lateral windage area. Independent of the
//! main pipeline; [`crate::calculations::analyze`] calls it only when a wind
//! speed is configured and the vessel carries windage data.
//!
//! ```text
//! p     = ½ · ρ_air · v²          (N/m²)
//! F     = p · A                   (N)
//! M     = F · h                   (N·m)
//! arm   = M / (Δ · 1000 · g)      (m)
//! heel  = atan(arm / GM)
//! margin = GM − arm
//! ```
//!
//! ## Example
//!
//! ```rust
//! use stability_core::calculations::wind::wind_heeling;
//!
//! let calm = wind_heeling(0.0, 1100.0, 6.5, 14000.0, 0.8).unwrap();
//! assert_eq!(calm.heel_angle_deg, 0.0);
//! assert_eq!(calm.stability_margin_m, 0.8);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcResult, StabilityError};
use crate::units::{Degrees, Newtons, Radians, Tonnes};

/// Air density at sea level (kg/m³)
pub const AIR_DENSITY_KG_PER_M3: f64 = 1.225;

/// Wind heeling result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindHeeling {
    pub wind_speed_mps: f64,
    /// Steady heel angle (degrees)
    pub heel_angle_deg: f64,
    /// Wind heeling arm (m)
    pub heeling_arm_m: f64,
    /// GM − heeling arm; negative when wind overcomes initial stability (m)
    pub stability_margin_m: f64,
    /// Wind speed at which the margin reaches zero. `None` when the wind
    /// produces no heeling arm at any speed.
    pub critical_wind_speed_mps: Option<f64>,
}

/// Heeling arm per (m/s)², for the given windage and displacement.
fn arm_per_speed_squared(lateral_area_m2: f64, center_height_m: f64, displacement_t: f64) -> f64 {
    let weight = Newtons::from(Tonnes(displacement_t));
    0.5 * AIR_DENSITY_KG_PER_M3 * lateral_area_m2 * center_height_m / weight.value()
}

/// Compute wind heeling for a speed, windage area and height, displacement and GM.
///
/// With GM ≤ 0 any nonzero heeling arm lays the vessel over, reported as 90°.
///
/// # Errors
///
/// * `InvalidInput` - negative or non-finite speed or area, non-positive displacement
pub fn wind_heeling(
    wind_speed_mps: f64,
    lateral_area_m2: f64,
    center_height_m: f64,
    displacement_t: f64,
    gm_m: f64,
) -> CalcResult<WindHeeling> {
    if !(wind_speed_mps.is_finite() && wind_speed_mps >= 0.0) {
        return Err(StabilityError::invalid_input(
            "wind_speed_mps",
            wind_speed_mps.to_string(),
            "Wind speed must be finite and non-negative",
        ));
    }
    if !(lateral_area_m2.is_finite() && lateral_area_m2 >= 0.0) {
        return Err(StabilityError::invalid_input(
            "lateral_area_m2",
            lateral_area_m2.to_string(),
            "Windage area must be finite and non-negative",
        ));
    }
    if !(displacement_t.is_finite() && displacement_t > 0.0) {
        return Err(StabilityError::invalid_input(
            "displacement_t",
            displacement_t.to_string(),
            "Displacement must be positive",
        ));
    }
    if !(center_height_m.is_finite() && gm_m.is_finite()) {
        return Err(StabilityError::invalid_input(
            "center_height_m",
            format!("h={}, GM={}", center_height_m, gm_m),
            "Height and GM must be finite",
        ));
    }

    let k = arm_per_speed_squared(lateral_area_m2, center_height_m, displacement_t);
    let heeling_arm_m = k * wind_speed_mps * wind_speed_mps;

    let heel_angle_deg = if heeling_arm_m == 0.0 {
        0.0
    } else if gm_m <= 0.0 {
        90.0_f64.copysign(heeling_arm_m)
    } else {
        Degrees::from(Radians((heeling_arm_m / gm_m).atan())).value()
    };

    let critical_wind_speed_mps = if k <= 0.0 {
        None
    } else if gm_m <= 0.0 {
        Some(0.0)
    } else {
        Some((gm_m / k).sqrt())
    };

    Ok(WindHeeling {
        wind_speed_mps,
        heel_angle_deg,
        heeling_arm_m,
        stability_margin_m: gm_m - heeling_arm_m,
        critical_wind_speed_mps,
    })
}
