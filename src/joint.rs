//! Angular arithmetic on single joint records.
//!
//! Every component is treated as an angle in degrees. Translation
//! components (carried by `root`) must be kept out of `difference` and
//! `sum`, the interpolator does this through its fixed joint set.

use crate::{Error, Result};

const FULL_TURN: f64 = 360.0;
const HALF_TURN: f64 = 180.0;

/// One named joint and its degree-of-freedom values.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct JointFrame {
    pub name: String,
    pub values: Vec<f64>,
}

/// Signed angle from `from` to `to` along the shorter arc, in `[-180, 180]`.
pub fn shortest_arc(from: f64, to: f64) -> f64 {
    let diff = (to - from) % FULL_TURN;
    if diff > HALF_TURN {
        diff - FULL_TURN
    } else if diff < -HALF_TURN {
        diff + FULL_TURN
    } else {
        diff
    }
}

impl JointFrame {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    fn check(&self, other: &Self) -> Result<()> {
        if self.name != other.name || self.values.len() != other.values.len() {
            return Err(Error::MismatchedJoint {
                left: self.name.clone(),
                left_len: self.values.len(),
                right: other.name.clone(),
                right_len: other.values.len(),
            });
        }
        Ok(())
    }

    fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Result<Self> {
        self.check(other)?;
        let values = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Self::new(self.name.clone(), values))
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(self.name.clone(), self.values.iter().map(|&v| f(v)).collect())
    }

    /// Per-component shortest-arc rotation taking `self` to `other`.
    pub fn difference(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, shortest_arc)
    }

    /// Per-component sum, wrapped into `[0, 360)`.
    pub fn sum(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| {
            // a tiny negative sum rounds up to a full turn
            let wrapped = (a + b).rem_euclid(FULL_TURN);
            if wrapped >= FULL_TURN {
                0.0
            } else {
                wrapped
            }
        })
    }

    pub fn divide(&self, by: f64) -> Self {
        self.map(|v| v / by)
    }

    pub fn multiply(&self, by: f64) -> Self {
        self.map(|v| v * by)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    fn circular_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(FULL_TURN);
        d.min(FULL_TURN - d)
    }

    #[test]
    fn difference_takes_short_way_round() {
        let a = JointFrame::new("elbow", vec![350.0, 10.0, 90.0]);
        let b = JointFrame::new("elbow", vec![10.0, 350.0, 100.0]);
        assert_eq!(a.difference(&b).unwrap().values, [20.0, -20.0, 10.0]);
    }

    #[test]
    fn difference_of_full_turn_is_zero() {
        let a = JointFrame::new("shoulder", vec![10.0, 0.0]);
        let b = JointFrame::new("shoulder", vec![370.0, 0.0]);
        assert_eq!(a.difference(&b).unwrap().values, [0.0, 0.0]);
    }

    #[test]
    fn sum_wraps() {
        let a = JointFrame::new("elbow", vec![350.0, 5.0]);
        let b = JointFrame::new("elbow", vec![20.0, -10.0]);
        assert_eq!(a.sum(&b).unwrap().values, [10.0, 355.0]);
    }

    #[test]
    fn sum_never_reaches_full_turn() {
        let a = JointFrame::new("k", vec![0.0, 0.1]);
        let b = JointFrame::new("k", vec![-1e-20, -0.1 - 1e-15]);
        let s = a.sum(&b).unwrap();
        assert!(s.values.iter().all(|v| (0.0..FULL_TURN).contains(v)));
        assert_eq!(s.values[0], 0.0);
    }

    #[test]
    fn scale_keeps_name() {
        let a = JointFrame::new("wrist", vec![30.0, -12.0]);
        let step = a.divide(3.0);
        assert_eq!(step.name, "wrist");
        assert_eq!(step.values, [10.0, -4.0]);
        assert_eq!(step.multiply(2.0).values, [20.0, -8.0]);
        // operands are untouched
        assert_eq!(a.values, [30.0, -12.0]);
    }

    #[test]
    fn mismatched_joints_are_rejected() {
        let a = JointFrame::new("lfemur", vec![1.0, 2.0, 3.0]);
        let b = JointFrame::new("rfemur", vec![1.0, 2.0, 3.0]);
        assert!(matches!(a.difference(&b), Err(Error::MismatchedJoint { .. })));

        let c = JointFrame::new("lfemur", vec![1.0, 2.0]);
        match a.sum(&c) {
            Err(Error::MismatchedJoint { left_len, right_len, .. }) => {
                assert_eq!((left_len, right_len), (3, 2))
            }
            other => panic!("expected a mismatch, got {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn difference_stays_within_half_turn(a in 0.0..360.0f64, b in 0.0..360.0f64) {
            let d = shortest_arc(a, b);
            prop_assert!((-HALF_TURN..=HALF_TURN).contains(&d));
        }

        #[test]
        fn sum_undoes_difference(a in 0.0..360.0f64, b in 0.0..360.0f64) {
            let ja = JointFrame::new("knee", vec![a]);
            let jb = JointFrame::new("knee", vec![b]);
            let back = ja.sum(&ja.difference(&jb).unwrap()).unwrap();
            prop_assert!(circular_distance(back.values[0], b) < 1e-9);
        }
    }
}
