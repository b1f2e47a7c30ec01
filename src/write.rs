use std::fmt;
use std::io;

use crate::{Frame, JointFrame};

/// Header directives opening every generated motion.
pub const HEADER: [&str; 2] = [":FULLY-SPECIFIED", ":DEGREES"];

const SCALE: f64 = 10_000.0;

/// Cuts `value` to 4 decimals toward zero.
///
/// A nudge of a few ulps absorbs binary representation error so that a
/// value read as `0.3` is not cut down to `0.2999`.
pub fn truncate(value: f64) -> f64 {
    let scaled = value * SCALE;
    let nudge = scaled.abs() * 64.0 * f64::EPSILON;
    let cut = (scaled + nudge.copysign(value)).trunc() / SCALE;
    if cut == 0.0 {
        0.0
    } else {
        cut
    }
}

impl fmt::Display for JointFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for value in &self.values {
            write!(f, " {:.4}", truncate(*value))?;
        }
        Ok(())
    }
}

/// Writes the header followed by `frames`, numbered from 1.
pub fn write_motion<W: io::Write>(mut out: W, frames: &[Frame]) -> io::Result<()> {
    for line in HEADER.iter() {
        writeln!(out, "{}", line)?;
    }
    for (idx, frame) in frames.iter().enumerate() {
        writeln!(out, "{}", idx + 1)?;
        for joint in frame {
            writeln!(out, "{}", joint)?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::read::extract_first_frame;
    use crate::Result;

    #[test]
    fn joint_format() {
        let joint = JointFrame::new("elbow", vec![10.0, 1.23459, -1.23459, 0.3, -0.00001]);
        assert_eq!(joint.to_string(), "elbow 10.0000 1.2345 -1.2345 0.3000 0.0000");
        assert_eq!(JointFrame::new("rhand", vec![]).to_string(), "rhand");
        // just under a boundary still truncates
        let joint = JointFrame::new("k", vec![359.99999999995, 10.0 - 1e-14]);
        assert_eq!(joint.to_string(), "k 359.9999 10.0000");
    }

    #[test]
    fn motion_write() {
        let frame: Frame = vec![
            JointFrame::new("root", vec![1.0, 2.0]),
            JointFrame::new("neck", vec![45.5]),
        ]
        .into_iter()
        .collect::<Result<Frame>>()
        .unwrap();

        let mut out = vec![];
        write_motion(&mut out, &[frame.clone(), frame]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            ":FULLY-SPECIFIED\n:DEGREES\n\
             1\nroot 1.0000 2.0000\nneck 45.5000\n\
             2\nroot 1.0000 2.0000\nneck 45.5000\n"
        );
    }

    #[test]
    fn empty_motion_is_header_only() {
        let mut out = vec![];
        write_motion(&mut out, &[]).unwrap();
        assert_eq!(out, b":FULLY-SPECIFIED\n:DEGREES\n");
    }

    #[test]
    fn written_motion_reads_back() {
        let frame: Frame = vec![
            JointFrame::new("root", vec![-3.14159, 17.0]),
            JointFrame::new("lwrist", vec![123.456789]),
        ]
        .into_iter()
        .collect::<Result<Frame>>()
        .unwrap();

        let mut out = vec![];
        write_motion(&mut out, &[frame.clone()]).unwrap();
        let back = extract_first_frame(&out[..]).unwrap();

        for (written, read) in frame.iter().zip(back.iter()) {
            assert_eq!(written.name, read.name);
            for (&w, &r) in written.values.iter().zip(read.values.iter()) {
                assert_eq!(truncate(w), r);
            }
        }
    }
}
