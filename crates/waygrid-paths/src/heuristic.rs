//! User-tunable heuristic weights.

use waygrid_core::Point;

use crate::distance::{euclidean, manhattan};

/// Exclusive upper bound for a heuristic weight; cycling wraps modulo this.
pub const WEIGHT_LIMIT: u8 = 5;

/// Weighted combination of Euclidean and Manhattan distance.
///
/// Each weight is an integer in `[0, 4]`, adjustable in increments of 1
/// with wrap-around (the UI knob semantics). A weight of 0 disables that
/// term; with both at 0 the search degenerates to uniform-cost search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weights {
    pub euclidean: u8,
    pub manhattan: u8,
}

impl Weights {
    /// Both terms off: the heuristic contributes nothing.
    pub const DISABLED: Self = Self {
        euclidean: 0,
        manhattan: 0,
    };

    /// Create weights, reduced modulo [`WEIGHT_LIMIT`].
    pub const fn new(euclidean: u8, manhattan: u8) -> Self {
        Self {
            euclidean: euclidean % WEIGHT_LIMIT,
            manhattan: manhattan % WEIGHT_LIMIT,
        }
    }

    /// Bump the Euclidean weight by 1, wrapping to 0 past 4.
    pub fn cycle_euclidean(&mut self) {
        self.euclidean = (self.euclidean + 1) % WEIGHT_LIMIT;
    }

    /// Bump the Manhattan weight by 1, wrapping to 0 past 4.
    pub fn cycle_manhattan(&mut self) {
        self.manhattan = (self.manhattan + 1) % WEIGHT_LIMIT;
    }

    /// Whether both terms are off.
    pub fn is_disabled(self) -> bool {
        self.euclidean == 0 && self.manhattan == 0
    }

    /// Estimated cost from `a` to `b`:
    /// `w_e * euclidean(a, b) + w_m * manhattan(a, b)`.
    pub fn estimate(self, a: Point, b: Point) -> f64 {
        if self.is_disabled() {
            return 0.0;
        }
        f64::from(self.euclidean) * euclidean(a, b)
            + f64::from(self.manhattan) * f64::from(manhattan(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_wraps_past_four() {
        let mut w = Weights::new(4, 3);
        w.cycle_euclidean();
        assert_eq!(w.euclidean, 0);
        w.cycle_manhattan();
        w.cycle_manhattan();
        assert_eq!(w.manhattan, 0);
    }

    #[test]
    fn new_reduces_modulo_limit() {
        let w = Weights::new(5, 9);
        assert_eq!(w, Weights::new(0, 4));
    }

    #[test]
    fn disabled_estimates_zero() {
        let w = Weights::DISABLED;
        assert!(w.is_disabled());
        assert_eq!(w.estimate(Point::new(0, 0), Point::new(30, 40)), 0.0);
    }

    #[test]
    fn combined_estimate() {
        let w = Weights::new(2, 1);
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        // 2 * 5.0 + 1 * 7.0
        assert_eq!(w.estimate(a, b), 17.0);
    }

    #[test]
    fn single_term() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        assert_eq!(Weights::new(1, 0).estimate(a, b), 5.0);
        assert_eq!(Weights::new(0, 3).estimate(a, b), 21.0);
    }
}
