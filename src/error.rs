// License: MIT
// Copyright © 2026 The rsa-availability-aggregator contributors

//! This module defines the `Error` struct and the `ErrorKind` enum, which are
//! used to represent the fatal errors that can occur while aggregating
//! availability.
//!
//! Non-fatal conditions are reported as [`Warning`][crate::Warning]s instead.

/// A macro for defining the `ErrorKind` enum, the `Display` implementation for
/// it, and the constructors for the `Error` struct.
macro_rules! ErrorKind {
    ($(
        ($kind:ident, $ctor:ident)
    ),*) => {
        /// The kind of error that occurred.
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum ErrorKind {
            $(
                $kind,
            )*
        }

        impl std::fmt::Display for ErrorKind {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        Self::$kind => write!(f, "{}", stringify!($kind)),
                    )*
                }
            }
        }

        /// Constructors for [`Error`].
        impl Error {
            $(
                #[doc = concat!(
                    "Creates a new [`Error`] with the `",
                    stringify!($kind),
                    "` kind and the given description."
                )]
                pub(crate) fn $ctor(desc: impl Into<String>) -> crate::Error {
                    Self {
                        kind: ErrorKind::$kind,
                        desc: desc.into(),
                    }
                }
            )*
        }
    };
}

ErrorKind!(
    (InvalidInput, invalid_input),
    (ProjectionMismatch, projection_mismatch)
);

/// An error that can occur while building an
/// [AvailabilityAggregator][crate::AvailabilityAggregator] or aggregating
/// features with it.
#[derive(Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    desc: String,
}

impl Error {
    /// Returns the kind of the error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the description of the error, which names the offending
    /// feature, cell or zone.
    pub fn description(&self) -> &str {
        &self.desc
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.desc)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::projection_mismatch("Zone Z1 does not overlap the grid.");
        assert_eq!(err.kind(), ErrorKind::ProjectionMismatch);
        assert_eq!(
            err.to_string(),
            "ProjectionMismatch: Zone Z1 does not overlap the grid."
        );
        assert_eq!(err.description(), "Zone Z1 does not overlap the grid.");
    }
}
