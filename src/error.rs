// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Image(String),
    Config(String),
    Pair(PairError),
}

/// Specific error types for comparison pair discovery.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone)]
pub enum PairError {
    /// The scanned directory contains no before/after pairs
    NoPairsFound,

    /// A `*_before.*` file exists without a matching `*_after.*` file
    MissingAfter(String),

    /// A `*_after.*` file exists without a matching `*_before.*` file
    MissingBefore(String),

    /// The path is not a directory or cannot be read
    UnreadableDirectory(String),

    /// The file name carries no `before`/`after` marker to pair on
    NotAPairFile(String),
}

impl PairError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PairError::NoPairsFound => "error-pair-none-found",
            PairError::MissingAfter(_) => "error-pair-missing-after",
            PairError::MissingBefore(_) => "error-pair-missing-before",
            PairError::UnreadableDirectory(_) => "error-pair-unreadable-directory",
            PairError::NotAPairFile(_) => "error-pair-not-a-pair-file",
        }
    }
}

impl fmt::Display for PairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairError::NoPairsFound => write!(f, "No before/after pairs found"),
            PairError::MissingAfter(title) => {
                write!(f, "No matching after image for '{}'", title)
            }
            PairError::MissingBefore(title) => {
                write!(f, "No matching before image for '{}'", title)
            }
            PairError::UnreadableDirectory(path) => {
                write!(f, "Cannot read directory: {}", path)
            }
            PairError::NotAPairFile(path) => {
                write!(f, "File name has no before/after marker: {}", path)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Pair(e) => write!(f, "Pair Error: {}", e),
        }
    }
}

impl From<PairError> for Error {
    fn from(err: PairError) -> Self {
        Error::Pair(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn pair_error_converts_to_error() {
        let err: Error = PairError::NoPairsFound.into();
        assert!(matches!(err, Error::Pair(PairError::NoPairsFound)));
    }

    #[test]
    fn pair_error_i18n_keys() {
        assert_eq!(PairError::NoPairsFound.i18n_key(), "error-pair-none-found");
        assert_eq!(
            PairError::MissingAfter("sunset".into()).i18n_key(),
            "error-pair-missing-after"
        );
        assert_eq!(
            PairError::UnreadableDirectory("/tmp/x".into()).i18n_key(),
            "error-pair-unreadable-directory"
        );
    }

    #[test]
    fn pair_error_display_names_the_title() {
        let err = PairError::MissingAfter("sunset".to_string());
        assert!(format!("{}", err).contains("sunset"));
    }
}
