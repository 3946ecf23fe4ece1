//! Resistance - elemental damage mitigation
//!
//! Three-piece curve, continuous at both thresholds:
//! - res <= 0: multiplier = 1 - res / 2 (negative resistance amplifies at half rate)
//! - res <= 0.8: multiplier = 1 - res
//! - res > 0.8: multiplier = 1 / (1 + 5 * res)

use crate::config::ResistanceConstants;

/// Enemy resistance after a signed penetration shift
pub fn effective_resistance(res_penetration: f64, constants: &ResistanceConstants) -> f64 {
    constants.base_resistance + res_penetration
}

/// Damage multiplier for a total resistance value
pub fn resistance_multiplier(res_total: f64, constants: &ResistanceConstants) -> f64 {
    if res_total <= constants.low_threshold {
        1.0 - res_total / 2.0
    } else if res_total <= constants.high_threshold {
        1.0 - res_total
    } else {
        1.0 / (1.0 + constants.high_slope * res_total)
    }
}
