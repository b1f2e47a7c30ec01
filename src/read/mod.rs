//! Frame extraction from line-oriented motion (AMC) text.
//!
//! Both extractors work on any [`BufRead`]; the `read_*` helpers open a
//! path and close it again on every exit path.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, trace};

use crate::{Error, Frame, Result};

mod utilities;

use utilities::{joint_record, Line};

fn parse_record(record: &str, line: usize) -> Result<crate::JointFrame> {
    match joint_record(record) {
        Ok((_, joint)) => {
            trace!("line {}: {} with {} value(s)", line, joint.name, joint.values.len());
            Ok(joint)
        }
        Err(_) => Err(Error::MalformedRecord {
            line,
            record: record.to_string(),
        }),
    }
}

/// Collects the records of frame `1`, stopping at the next frame marker.
pub fn extract_first_frame<R: BufRead>(source: R) -> Result<Frame> {
    let mut frame = Frame::new();
    let mut found = false;

    for (idx, line) in source.lines().enumerate() {
        let line = line?;
        match Line::classify(&line) {
            Line::Marker("1") if !found => found = true,
            Line::Marker(index) if found => {
                debug!("frame 1 ends at frame marker {}", index);
                break;
            }
            Line::Record(record) | Line::DigitLed(record) if found => {
                frame.push(parse_record(record, idx + 1)?)?
            }
            _ => (),
        }
    }

    if !found {
        return Err(Error::MissingFrame { index: "1" });
    }
    debug!("first frame holds {} joint(s)", frame.len());
    Ok(frame)
}

/// Scans the whole source, keeping only the records after the last
/// frame marker.
pub fn extract_last_frame<R: BufRead>(source: R) -> Result<Frame> {
    let mut frame = Frame::new();
    let mut last = None;

    for (idx, line) in source.lines().enumerate() {
        let line = line?;
        match Line::classify(&line) {
            Line::Marker(index) | Line::DigitLed(index) => {
                frame.clear();
                last = Some(index.to_string());
            }
            Line::Record(record) if last.is_some() => {
                frame.push(parse_record(record, idx + 1)?)?
            }
            Line::Record(_) => trace!("line {}: record before any frame, skipping", idx + 1),
            _ => (),
        }
    }

    match last {
        Some(index) => {
            debug!("last frame is {} with {} joint(s)", index, frame.len());
            Ok(frame)
        }
        None => Err(Error::MissingFrame { index: "marker" }),
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| Error::io(path, e))
}

/// Opens `path` and extracts its first frame.
pub fn read_first_frame<P: AsRef<Path>>(path: P) -> Result<Frame> {
    let path = path.as_ref();
    debug!("reading first frame of {}", path.display());
    extract_first_frame(open(path)?).map_err(|e| with_path(e, path))
}

/// Opens `path` and extracts its last frame.
pub fn read_last_frame<P: AsRef<Path>>(path: P) -> Result<Frame> {
    let path = path.as_ref();
    debug!("reading last frame of {}", path.display());
    extract_last_frame(open(path)?).map_err(|e| with_path(e, path))
}

fn with_path(err: Error, path: &Path) -> Error {
    match err {
        Error::Read(source) => Error::io(path, source),
        e => e,
    }
}
