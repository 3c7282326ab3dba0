// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error taxonomy.
//!
//! Navigation edge conditions (window already at an edge, single-item
//! gallery) are normal no-ops and never reach this module. Errors here mark
//! either a caller programming error ([`Error::OutOfRange`]), an invalid
//! construction ([`Error::EmptyGallery`]), or a configuration problem.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An index argument fell outside `[0, len)`. Rejected synchronously and
    /// never silently clamped, so integration bugs surface early.
    OutOfRange { index: usize, len: usize },
    /// A gallery was constructed with zero media items.
    EmptyGallery,
    /// Configuration (de)serialization failed.
    Config(String),
    /// Configuration file I/O failed.
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange { index, len } => {
                write!(f, "index {} out of range for gallery of {} items", index, len)
            }
            Error::EmptyGallery => write!(f, "gallery requires at least one media item"),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
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
    fn display_formats_out_of_range() {
        let err = Error::OutOfRange { index: 7, len: 5 };
        assert_eq!(
            format!("{}", err),
            "index 7 out of range for gallery of 5 items"
        );
    }

    #[test]
    fn display_formats_empty_gallery() {
        let err = Error::EmptyGallery;
        assert_eq!(format!("{}", err), "gallery requires at least one media item");
    }

    #[test]
    fn display_formats_config_error() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
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
    fn from_toml_error_produces_config_variant() {
        let parse_err = toml::from_str::<toml::Value>("not [ valid").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
