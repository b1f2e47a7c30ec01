//! Linear interpolation of joint angles between two frames.
//!
//! Joints are paired by name. Every joint outside the fixed set advances
//! by an equal share of its shortest-arc difference per step; fixed joints
//! (by default only `root`, which carries translation) are copied from
//! the start frame.

use log::debug;

use crate::{Error, Frame, JointFrame, Result, ROOT};

/// Interpolation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolator {
    fixed: Vec<String>,
}

impl Default for Interpolator {
    fn default() -> Self {
        Self {
            fixed: vec![ROOT.to_string()],
        }
    }
}

impl Interpolator {
    /// Replaces the set of joints that are copied instead of interpolated.
    pub fn with_fixed_joints<I, S>(joints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fixed: joints.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_fixed(&self, name: &str) -> bool {
        self.fixed.iter().any(|f| f == name)
    }

    /// Validates `start` against `end` and computes the per-step deltas.
    pub fn prepare<'a>(&self, start: &'a Frame, end: &Frame, steps: usize) -> Result<Interpolation<'a>> {
        if start.len() != end.len() {
            return Err(Error::JointCountMismatch {
                start: start.len(),
                end: end.len(),
            });
        }

        let mut deltas = Vec::with_capacity(start.len());
        for joint in start {
            let target = end.get(&joint.name).ok_or_else(|| Error::MissingJoint {
                name: joint.name.clone(),
            })?;
            if self.is_fixed(&joint.name) {
                deltas.push(None);
                continue;
            }
            let difference = joint.difference(target)?;
            deltas.push(if steps == 0 {
                None
            } else {
                Some(difference.divide(steps as f64))
            });
        }
        debug!("interpolating {} joint(s) over {} step(s)", start.len(), steps);

        Ok(Interpolation { start, deltas, steps })
    }

    pub fn interpolate(&self, start: &Frame, end: &Frame, steps: usize) -> Result<Vec<Frame>> {
        self.prepare(start, end, steps)?.frames().collect()
    }
}

/// Interpolates with the default fixed set (`root`).
pub fn interpolate(start: &Frame, end: &Frame, steps: usize) -> Result<Vec<Frame>> {
    Interpolator::default().interpolate(start, end, steps)
}

/// Validated pairing of two frames; deltas line up with the start joints.
#[derive(Debug)]
pub struct Interpolation<'a> {
    start: &'a Frame,
    deltas: Vec<Option<JointFrame>>,
    steps: usize,
}

impl<'a> Interpolation<'a> {
    /// Frame after `step` deltas, with interpolated angles wrapped into `[0, 360)`.
    pub fn frame(&self, step: usize) -> Result<Frame> {
        let mut frame = Frame::new();
        for (joint, delta) in self.start.iter().zip(self.deltas.iter()) {
            let joint = match delta {
                Some(delta) => joint.sum(&delta.multiply(step as f64))?,
                None => joint.clone(),
            };
            frame.push(joint)?;
        }
        Ok(frame)
    }

    /// Frames `1..=steps`, in order.
    pub fn frames(&self) -> impl Iterator<Item = Result<Frame>> + '_ {
        (1..=self.steps).map(move |step| self.frame(step))
    }
}
