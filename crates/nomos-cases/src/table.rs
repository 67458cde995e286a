//! Assembled per-date case records.

use std::collections::BTreeMap;

use nomos_geo::PrefectureName;

use crate::{CaseError, DateKey, Observation};

/// One region's figures for one date.
#[derive(Debug, Clone)]
pub struct CaseRecord {
    prefecture: PrefectureName,
    cases: Observation<u64>,
    rate: Observation<f64>,
}

impl CaseRecord {
    /// Create a record from its figures.
    #[must_use]
    pub fn new(prefecture: PrefectureName, cases: Observation<u64>, rate: Observation<f64>) -> Self {
        Self {
            prefecture,
            cases,
            rate,
        }
    }

    /// Canonical name of the region this record is for.
    #[must_use]
    pub fn prefecture(&self) -> &PrefectureName {
        &self.prefecture
    }

    /// Cumulative confirmed case count.
    #[must_use]
    pub fn cases(&self) -> Observation<u64> {
        self.cases
    }

    /// Cases per 100,000 inhabitants.
    #[must_use]
    pub fn rate(&self) -> Observation<f64> {
        self.rate
    }
}

/// Every ingested daily table, keyed by date.
///
/// Non-empty by construction, so [`CaseTable::latest`] always has an
/// answer. Row validation (known names, unique regions, readable
/// figures) happens at ingestion in the builder; this type only holds
/// the result.
#[derive(Debug)]
pub struct CaseTable {
    by_date: BTreeMap<DateKey, Vec<CaseRecord>>,
    latest: DateKey,
}

impl CaseTable {
    /// Assemble a table from per-date record sets.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`CaseError::EmptyCaseSet`] | `by_date` has no entries |
    pub fn new(by_date: BTreeMap<DateKey, Vec<CaseRecord>>) -> Result<Self, CaseError> {
        let latest = by_date
            .keys()
            .next_back()
            .copied()
            .ok_or(CaseError::EmptyCaseSet)?;
        Ok(Self { by_date, latest })
    }

    /// Dates with an ingested table, in chronological order.
    #[must_use]
    pub fn dates(&self) -> Vec<DateKey> {
        self.by_date.keys().copied().collect()
    }

    /// The most recent ingested date.
    #[must_use]
    pub fn latest(&self) -> DateKey {
        self.latest
    }

    /// Return true if `date` has an ingested table.
    #[must_use]
    pub fn contains(&self, date: DateKey) -> bool {
        self.by_date.contains_key(&date)
    }

    /// The records for `date`, if that date was ingested.
    #[must_use]
    pub fn rows_for(&self, date: DateKey) -> Option<&[CaseRecord]> {
        self.by_date.get(&date).map(Vec::as_slice)
    }

    /// Number of ingested dates.
    #[must_use]
    pub fn n_dates(&self) -> usize {
        self.by_date.len()
    }
}
