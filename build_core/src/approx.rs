//! Approximate comparison of numbers and stat blocks
//!
//! Relative tolerance is given in percent; when the expected value is
//! exactly zero an absolute tolerance is used instead.

use crate::stats::CharacterStats;

/// Default relative tolerance, in percent
pub const DEFAULT_TOLERANCE_PERCENT: f64 = 1.0;
/// Default absolute tolerance when the expected value is zero
pub const DEFAULT_TOLERANCE_AT_ZERO: f64 = 0.001;

/// Whether `left` is within tolerance of the expected value `right`
pub fn approx_eq(left: f64, right: f64, tolerance_percent: f64, tolerance_at_zero: f64) -> bool {
    if right == 0.0 {
        (left - right).abs() <= tolerance_at_zero
    } else {
        ((left - right) / right).abs() * 100.0 <= tolerance_percent
    }
}

/// `approx_eq` with the default tolerances
pub fn approx_eq_default(left: f64, right: f64) -> bool {
    approx_eq(left, right, DEFAULT_TOLERANCE_PERCENT, DEFAULT_TOLERANCE_AT_ZERO)
}

/// Compare two stat blocks field by field
///
/// Returns a description of the first field out of tolerance, or `None`.
pub fn stats_mismatch(
    left: &CharacterStats,
    right: &CharacterStats,
    tolerance_percent: f64,
    tolerance_at_zero: f64,
) -> Option<String> {
    let scalars = [
        ("base_atk", left.base_atk, right.base_atk),
        ("base_hp", left.base_hp, right.base_hp),
        ("base_def", left.base_def, right.base_def),
        ("atk_flat", left.atk_flat, right.atk_flat),
        ("hp_flat", left.hp_flat, right.hp_flat),
        ("def_flat", left.def_flat, right.def_flat),
        ("atk_percent", left.atk_percent, right.atk_percent),
        ("hp_percent", left.hp_percent, right.hp_percent),
        ("def_percent", left.def_percent, right.def_percent),
        ("crit_rate", left.crit_rate, right.crit_rate),
        ("crit_dmg", left.crit_dmg, right.crit_dmg),
        ("energy_recharge", left.energy_recharge, right.energy_recharge),
        ("healing_bonus", left.healing_bonus, right.healing_bonus),
    ];

    for (key, l, r) in scalars {
        if !approx_eq(l, r, tolerance_percent, tolerance_at_zero) {
            return Some(format!(
                "expected {} to be approximately equal to {} (within {}%) (key {})",
                l, r, tolerance_percent, key
            ));
        }
    }

    let arrays: [(&str, &[f64], &[f64]); 2] = [
        ("element_dmg", &left.element_dmg, &right.element_dmg),
        ("move_dmg", &left.move_dmg, &right.move_dmg),
    ];

    for (key, l, r) in arrays {
        for (i, (lv, rv)) in l.iter().zip(r.iter()).enumerate() {
            if !approx_eq(*lv, *rv, tolerance_percent, tolerance_at_zero) {
                return Some(format!(
                    "expected {} to be approximately equal to {} (within {}%) (key {}, index {})",
                    lv, rv, tolerance_percent, key, i
                ));
            }
        }
    }

    None
}

/// Values that can be compared with [`assert_approx_eq!`]
pub trait ApproxEq {
    /// `None` when within tolerance, otherwise a failure message
    fn approx_mismatch(
        &self,
        expected: &Self,
        tolerance_percent: f64,
        tolerance_at_zero: f64,
    ) -> Option<String>;
}

impl ApproxEq for f64 {
    fn approx_mismatch(
        &self,
        expected: &Self,
        tolerance_percent: f64,
        tolerance_at_zero: f64,
    ) -> Option<String> {
        if approx_eq(*self, *expected, tolerance_percent, tolerance_at_zero) {
            None
        } else {
            Some(format!(
                "expected {} to be approximately equal to {} (within {}%)",
                self, expected, tolerance_percent
            ))
        }
    }
}

impl ApproxEq for CharacterStats {
    fn approx_mismatch(
        &self,
        expected: &Self,
        tolerance_percent: f64,
        tolerance_at_zero: f64,
    ) -> Option<String> {
        stats_mismatch(self, expected, tolerance_percent, tolerance_at_zero)
    }
}

/// Assert that two numbers or stat blocks are approximately equal
///
/// ```rust
/// use build_core::assert_approx_eq;
///
/// assert_approx_eq!(1062.5_f64, 1062.0);
/// assert_approx_eq!(105.0_f64, 100.0, 5.0);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr) => {
        $crate::assert_approx_eq!(
            $left,
            $right,
            $crate::approx::DEFAULT_TOLERANCE_PERCENT,
            $crate::approx::DEFAULT_TOLERANCE_AT_ZERO
        )
    };
    ($left:expr, $right:expr, $tolerance_percent:expr) => {
        $crate::assert_approx_eq!(
            $left,
            $right,
            $tolerance_percent,
            $crate::approx::DEFAULT_TOLERANCE_AT_ZERO
        )
    };
    ($left:expr, $right:expr, $tolerance_percent:expr, $tolerance_at_zero:expr) => {
        if let Some(message) = $crate::approx::ApproxEq::approx_mismatch(
            &$left,
            &$right,
            $tolerance_percent,
            $tolerance_at_zero,
        ) {
            panic!("{}", message);
        }
    };
}
