use serde::{Deserialize, Serialize};

/// A closed numeric interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    min: f64,
    max: f64,
}

impl Interval {
    /// Creates an interval, swapping the bounds if they arrive out of order.
    pub fn new(a: f64, b: f64) -> Self {
        if a > b {
            Self { min: b, max: a }
        } else {
            Self { min: a, max: b }
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// True unless one interval starts strictly after the other ends.
    /// Touching intervals overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        !(self.min > other.max || other.min > self.max)
    }

    /// Length of the shared part of both intervals.
    ///
    /// Negative when the intervals are disjoint, so gate on
    /// [`overlaps`](Self::overlaps) first.
    pub fn overlap(&self, other: &Interval) -> f64 {
        self.max.min(other.max) - self.min.max(other.min)
    }

    /// Limits `value` to `[min, max]`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value > self.max {
            self.max
        } else if value < self.min {
            self.min
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_interval_new_in_order() {
        let i = Interval::new(1.0, 3.0);
        assert_eq!(i.min(), 1.0);
        assert_eq!(i.max(), 3.0);
    }

    #[test]
    fn test_interval_new_swaps() {
        let i = Interval::new(3.0, -1.0);
        assert_eq!(i.min(), -1.0);
        assert_eq!(i.max(), 3.0);
    }

    #[test]
    fn test_overlaps() {
        let a = Interval::new(0.0, 2.0);
        assert!(a.overlaps(&Interval::new(1.0, 5.0)));
        assert!(a.overlaps(&Interval::new(2.0, 5.0))); // touching
        assert!(a.overlaps(&Interval::new(0.5, 1.0))); // contained
        assert!(!a.overlaps(&Interval::new(2.1, 5.0)));
        assert!(!a.overlaps(&Interval::new(-3.0, -0.1)));
    }

    #[test]
    fn test_overlap_amount() {
        let a = Interval::new(0.0, 2.0);
        assert!((a.overlap(&Interval::new(1.5, 5.0)) - 0.5).abs() < EPSILON);
        assert!((a.overlap(&Interval::new(0.5, 1.0)) - 0.5).abs() < EPSILON);
        assert!(a.overlap(&Interval::new(2.0, 5.0)).abs() < EPSILON);
        // Disjoint intervals report a negative overlap.
        assert!((a.overlap(&Interval::new(3.0, 5.0)) + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_clamp() {
        let i = Interval::new(-1.0, 1.0);
        assert_eq!(i.clamp(0.25), 0.25);
        assert_eq!(i.clamp(4.0), 1.0);
        assert_eq!(i.clamp(-4.0), -1.0);
        assert_eq!(i.clamp(1.0), 1.0);
    }

    proptest! {
        #[test]
        fn constructor_orders_bounds(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
            let i = Interval::new(a, b);
            prop_assert!(i.min() <= i.max());
            prop_assert_eq!(i.min(), a.min(b));
            prop_assert_eq!(i.max(), a.max(b));
        }

        #[test]
        fn overlaps_is_symmetric(a in -100.0f64..100.0, b in -100.0f64..100.0,
                                 c in -100.0f64..100.0, d in -100.0f64..100.0) {
            let first = Interval::new(a, b);
            let second = Interval::new(c, d);
            prop_assert_eq!(first.overlaps(&second), second.overlaps(&first));
            prop_assert_eq!(first.overlap(&second), second.overlap(&first));
        }

        #[test]
        fn clamp_stays_inside(a in -100.0f64..100.0, b in -100.0f64..100.0, v in -500.0f64..500.0) {
            let i = Interval::new(a, b);
            let clamped = i.clamp(v);
            prop_assert!(clamped >= i.min() && clamped <= i.max());
        }
    }
}
