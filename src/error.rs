//! Errors raised while reading, combining and interpolating frames

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Fewer than the three positional parameters were supplied
    #[error("not enough arguments: expected <FROM> <TO> <FRAMES>")]
    InsufficientArguments,

    #[error("motion file `{}` does not exist", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Read(#[from] io::Error),

    /// A joint record whose components are not all real numbers
    #[error("line {line}: malformed joint record `{record}`")]
    MalformedRecord { line: usize, record: String },

    #[error("cannot combine joint `{left}` ({left_len} values) with `{right}` ({right_len} values)")]
    MismatchedJoint {
        left: String,
        left_len: usize,
        right: String,
        right_len: usize,
    },

    #[error("start frame has {start} joints but end frame has {end}")]
    JointCountMismatch { start: usize, end: usize },

    #[error("joint `{name}` is missing from the end frame")]
    MissingJoint { name: String },

    #[error("joint `{name}` appears twice in one frame")]
    DuplicateJoint { name: String },

    #[error("no frame {index} in motion")]
    MissingFrame { index: &'static str },
}

impl Error {
    /// Attaches `path` to an I/O failure, singling out missing files.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound { path },
            _ => Self::Io { path, source },
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn error_display() {
        let error = Error::MalformedRecord {
            line: 7,
            record: "lfemur 1.0 abc".to_string(),
        };
        assert_eq!(error.to_string(), "line 7: malformed joint record `lfemur 1.0 abc`");

        let error = Error::JointCountMismatch { start: 29, end: 30 };
        assert_eq!(error.to_string(), "start frame has 29 joints but end frame has 30");
    }

    #[test]
    fn missing_file_is_singled_out() {
        let err = Error::io("walk.amc", io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(matches!(err, Error::FileNotFound { .. }));

        let err = Error::io("walk.amc", io::Error::new(io::ErrorKind::PermissionDenied, "no"));
        assert!(matches!(err, Error::Io { .. }));
    }
}
