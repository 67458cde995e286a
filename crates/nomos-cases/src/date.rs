//! Date labels in the underscore form used by the daily table filenames.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::CaseError;

/// Label format shared by table filenames, snapshot documents, and titles.
const LABEL_FORMAT: &str = "%Y_%m_%d";

/// A calendar date in the `YYYY_MM_DD` label form.
///
/// Orders chronologically and displays in the same underscore form it is
/// parsed from, so `2020_03_20` survives a round trip unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Parse a `YYYY_MM_DD` label.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`CaseError::InvalidDateLabel`] | `label` is not a valid calendar date in `YYYY_MM_DD` form |
    pub fn parse(label: &str) -> Result<Self, CaseError> {
        NaiveDate::parse_from_str(label.trim(), LABEL_FORMAT)
            .map(Self)
            .map_err(|_| CaseError::InvalidDateLabel {
                label: label.to_string(),
            })
    }

    /// Return the underlying calendar date.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(LABEL_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}
