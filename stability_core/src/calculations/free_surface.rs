//! # Free-Surface Correction
//!
//! Liquid free to move in slack tanks raises the effective center of
//! gravity by ΣFSM / Δ. GM is then read against the corrected KG.

/// Virtual rise of G due to free surfaces (m).
///
/// Zero when there is no displacement to spread the moment over.
pub fn free_surface_correction_m(fsm_sum_tm: f64, displacement_t: f64) -> f64 {
    if displacement_t > 0.0 {
        fsm_sum_tm / displacement_t
    } else {
        0.0
    }
}

/// Corrected KG = KG + ΣFSM / Δ
pub fn apply_free_surface(kg_m: f64, fsm_sum_tm: f64, displacement_t: f64) -> f64 {
    kg_m + free_surface_correction_m(fsm_sum_tm, displacement_t)
}

/// Transverse metacentric height GMt = KMt − KG(corrected)
pub fn compute_gm(kmt_m: f64, kg_corrected_m: f64) -> f64 {
    kmt_m - kg_corrected_m
}
