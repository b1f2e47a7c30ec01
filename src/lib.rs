pub mod error;
pub mod interpolate;
pub mod joint;
pub mod read;
pub mod write;

use std::collections::HashMap;

pub use error::{Error, Result};
pub use interpolate::{interpolate, Interpolation, Interpolator};
pub use joint::JointFrame;

/// Joint that carries translation and is never interpolated by default.
pub const ROOT: &str = "root";

/// One complete pose: joint records in file order, indexed by name.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Frame {
    joints: Vec<JointFrame>,
    index: HashMap<String, usize>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a joint, keeping names unique within the frame.
    pub fn push(&mut self, joint: JointFrame) -> Result<()> {
        if self.index.contains_key(&joint.name) {
            return Err(Error::DuplicateJoint { name: joint.name });
        }
        self.index.insert(joint.name.clone(), self.joints.len());
        self.joints.push(joint);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&JointFrame> {
        self.index.get(name).map(|&i| &self.joints[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JointFrame> {
        self.joints.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.joints.iter().map(|j| &j.name[..])
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.joints.clear();
        self.index.clear();
    }
}

impl<'a> IntoIterator for &'a Frame {
    type Item = &'a JointFrame;
    type IntoIter = std::slice::Iter<'a, JointFrame>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::iter::FromIterator<JointFrame> for Result<Frame> {
    fn from_iter<I: IntoIterator<Item = JointFrame>>(iter: I) -> Self {
        let mut frame = Frame::new();
        for joint in iter {
            frame.push(joint)?;
        }
        Ok(frame)
    }
}
