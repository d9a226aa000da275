//! # Unit Types
//!
//! Type-safe wrappers for the quantities where unit confusion actually bites
//! in stability work: angles (degrees vs radians) and weight vs force
//! (tonnes vs newtons). They are plain `f64` newtypes that serialize as bare
//! numbers.
//!
//! ## SI / Marine Units
//!
//! - Length: meters (m)
//! - Mass: tonnes (t)
//! - Force: newtons (N), kilonewtons (kN)
//! - Angle: degrees for input/output, radians for trigonometry and areas
//! - Moment: tonne-meters (t·m) for loading, kilonewton-meters (kN·m) for righting moments
//!
//! ## Example
//!
//! ```rust
//! use stability_core::units::{Degrees, Radians, Tonnes, KiloNewtons};
//!
//! let heel = Degrees(30.0);
//! let heel_rad: Radians = heel.into();
//! assert!((heel_rad.0 - std::f64::consts::FRAC_PI_6).abs() < 1e-12);
//!
//! let weight: KiloNewtons = Tonnes(1.0).into();
//! assert!((weight.0 - 9.81).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Standard gravity used throughout the engine (m/s²)
pub const GRAVITY: f64 = 9.81;

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

impl Degrees {
    /// Sine of the angle
    pub fn sin(self) -> f64 {
        Radians::from(self).0.sin()
    }
}

// ============================================================================
// Mass and Force Units
// ============================================================================

/// Mass in tonnes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tonnes(pub f64);

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

/// Weight of a mass under standard gravity
impl From<Tonnes> for Newtons {
    fn from(t: Tonnes) -> Self {
        Newtons(t.0 * 1000.0 * GRAVITY)
    }
}

/// Weight of a mass under standard gravity
impl From<Tonnes> for KiloNewtons {
    fn from(t: Tonnes) -> Self {
        KiloNewtons(t.0 * GRAVITY)
    }
}

impl From<Newtons> for KiloNewtons {
    fn from(n: Newtons) -> Self {
        KiloNewtons(n.0 / 1000.0)
    }
}

impl From<KiloNewtons> for Newtons {
    fn from(kn: KiloNewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Degrees);
impl_arithmetic!(Radians);
impl_arithmetic!(Tonnes);
impl_arithmetic!(Newtons);
impl_arithmetic!(KiloNewtons);
