//! Joining boundary regions with the case figures of one date.

use std::collections::HashMap;

use tracing::{debug, instrument, warn};

use nomos_cases::{CaseRecord, CaseTable, DateKey, Observation, UNDER_INVESTIGATION};
use nomos_geo::{BoundaryTable, Geometry, PrefectureName, RegionBoundary};

use crate::MapError;

/// One boundary region paired with its figures for the snapshot date.
#[derive(Debug)]
pub struct SnapshotRow<'a> {
    boundary: &'a RegionBoundary,
    cases: Observation<u64>,
    rate: Observation<f64>,
}

impl<'a> SnapshotRow<'a> {
    /// Canonical name of this region.
    #[must_use]
    pub fn prefecture(&self) -> &'a PrefectureName {
        self.boundary.name()
    }

    /// Boundary geometry of this region.
    #[must_use]
    pub fn geometry(&self) -> &'a Geometry {
        self.boundary.geometry()
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

/// The joined view of the map for one date.
///
/// Holds exactly one row per boundary region, in boundary order.
/// Regions absent from that date's table carry
/// [`Observation::NoData`] figures; case rows without a boundary are
/// not represented.
#[derive(Debug)]
pub struct RegionDateSnapshot<'a> {
    date: DateKey,
    rows: Vec<SnapshotRow<'a>>,
}

impl<'a> RegionDateSnapshot<'a> {
    /// The date this snapshot depicts.
    #[must_use]
    pub fn date(&self) -> DateKey {
        self.date
    }

    /// The joined rows, one per boundary region.
    #[must_use]
    pub fn rows(&self) -> &[SnapshotRow<'a>] {
        &self.rows
    }

    /// Number of mapped regions.
    #[must_use]
    pub fn n_regions(&self) -> usize {
        self.rows.len()
    }
}

/// Join the boundary set with the case figures of `date`.
///
/// A left outer join driven by the boundary table: every boundary
/// region appears exactly once, in boundary order, whether or not the
/// date's table reports it. Case rows whose region has no boundary
/// (notably the pending-attribution row) are dropped with a log
/// message.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`MapError::UnknownDate`] | `date` has no ingested case table |
#[instrument(skip(boundaries, cases), fields(date = %date, n_boundaries = boundaries.len()))]
pub fn join_for_date<'a>(
    boundaries: &'a BoundaryTable,
    cases: &'a CaseTable,
    date: DateKey,
) -> Result<RegionDateSnapshot<'a>, MapError> {
    // 1. Look up the records for the requested date.
    let records = cases
        .rows_for(date)
        .ok_or(MapError::UnknownDate { date })?;

    // 2. Index the records by canonical name.
    let by_name: HashMap<&PrefectureName, &CaseRecord> = records
        .iter()
        .map(|record| (record.prefecture(), record))
        .collect();

    // 3. One row per boundary region, in boundary order.
    let rows: Vec<SnapshotRow<'a>> = boundaries
        .entries()
        .iter()
        .map(|boundary| match by_name.get(boundary.name()) {
            Some(record) => SnapshotRow {
                boundary,
                cases: record.cases(),
                rate: record.rate(),
            },
            None => SnapshotRow {
                boundary,
                cases: Observation::NoData,
                rate: Observation::NoData,
            },
        })
        .collect();

    // 4. Note case rows without a boundary; they carry real counts but
    //    cannot be drawn.
    for record in records {
        if !boundaries.contains(record.prefecture()) {
            if record.prefecture().as_str() == UNDER_INVESTIGATION {
                debug!(cases = %record.cases(), "pending-attribution cases left off the map");
            } else {
                warn!(prefecture = %record.prefecture(), "case row has no boundary; dropped");
            }
        }
    }

    debug!(n_regions = rows.len(), "snapshot joined");
    Ok(RegionDateSnapshot { date, rows })
}
