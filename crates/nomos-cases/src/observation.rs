//! The reported-or-missing wrapper used for every case figure.

use std::fmt;

use serde::{Serialize, Serializer};

/// The literal placed in serialized documents where a figure is missing.
pub const NO_DATA_LABEL: &str = "No data";

/// A figure that is either reported for a region/date pair or absent.
///
/// Serializes as the bare number when reported and as the [`NO_DATA_LABEL`]
/// string when absent, so consumers can tell a genuine zero apart from a
/// gap in the source table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Observation<T> {
    /// A figure reported by the source table.
    Reported(T),
    /// No figure was reported for this region/date pair.
    NoData,
}

impl<T> Observation<T> {
    /// Return true if a figure was reported.
    #[must_use]
    pub fn is_reported(&self) -> bool {
        matches!(self, Self::Reported(_))
    }

    /// Return the reported figure, if any.
    #[must_use]
    pub fn reported(&self) -> Option<&T> {
        match self {
            Self::Reported(value) => Some(value),
            Self::NoData => None,
        }
    }
}

impl<T: Serialize> Serialize for Observation<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Reported(value) => value.serialize(serializer),
            Self::NoData => serializer.serialize_str(NO_DATA_LABEL),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Observation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reported(value) => value.fmt(f),
            Self::NoData => f.write_str(NO_DATA_LABEL),
        }
    }
}
