//! Daily table ingestion with full input validation.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use nomos_geo::PrefectureName;

use crate::discover::discover_tables;
use crate::{
    CaseError, CaseRecord, CaseTable, ColumnMap, DateKey, NameTranslator, Observation, TableFault,
};

/// Reads dated case table files into an assembled [`CaseTable`].
///
/// Expected CSV format:
/// - Header row required, naming at least the three columns in [`ColumnMap`]
/// - One row per region; extra columns are ignored
/// - Count and rate cells may be empty, which ingests as
///   [`Observation::NoData`]
///
/// Ingestion is all-or-nothing: any fault in any file fails the whole
/// build.
pub struct CaseTableBuilder {
    translator: NameTranslator,
    columns: ColumnMap,
}

impl CaseTableBuilder {
    /// Builder with the Greek table conventions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            translator: NameTranslator::greek(),
            columns: ColumnMap::greek(),
        }
    }

    /// Replace the name translator.
    #[must_use]
    pub fn with_translator(mut self, translator: NameTranslator) -> Self {
        self.translator = translator;
        self
    }

    /// Replace the source column headers.
    #[must_use]
    pub fn with_columns(mut self, columns: ColumnMap) -> Self {
        self.columns = columns;
        self
    }

    /// Read and validate one dated table file.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`CaseError::MalformedCaseTable`] | The file is unreadable, misses a required column, repeats a region, or holds an unreadable figure |
    /// | [`CaseError::UnknownRegionName`] | A region cell has no canonical mapping |
    #[instrument(skip(self, path, date), fields(path = %path.display(), date = %date))]
    pub fn read_table(&self, date: DateKey, path: &Path) -> Result<Vec<CaseRecord>, CaseError> {
        let fault = |source: TableFault| CaseError::MalformedCaseTable {
            path: path.to_path_buf(),
            source,
        };

        // 1. Open file.
        let file = std::fs::File::open(path).map_err(|e| fault(TableFault::Read(e)))?;

        // 2. Build CSV reader with headers.
        // flexible(true) allows rows with varying column counts so that our
        // own RowLength check fires instead of a low-level Csv error.
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        // 3. Locate the required columns in the header.
        let header = rdr.headers().map_err(|e| {
            fault(TableFault::Csv {
                offset: e.position().map_or(0, |p| p.byte()),
                source: e,
            })
        })?;
        let expected_cols = header.len();
        let find = |wanted: &str| -> Result<usize, CaseError> {
            header
                .iter()
                .position(|h| h.trim() == wanted)
                .ok_or_else(|| {
                    fault(TableFault::MissingColumn {
                        column: wanted.to_string(),
                    })
                })
        };
        let prefecture_col = find(self.columns.prefecture())?;
        let cases_col = find(self.columns.cases())?;
        let rate_col = find(self.columns.rate())?;
        debug!(expected_cols, prefecture_col, cases_col, rate_col, "read table header");

        // 4. Iterate rows with validation.
        let mut rows = Vec::new();
        let mut seen: HashMap<PrefectureName, usize> = HashMap::new();
        for (row, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| {
                fault(TableFault::Csv {
                    offset: e.position().map_or(0, |p| p.byte()),
                    source: e,
                })
            })?;

            if record.len() != expected_cols {
                return Err(fault(TableFault::RowLength {
                    row,
                    expected: expected_cols,
                    got: record.len(),
                }));
            }

            let prefecture = self
                .translator
                .translate(record.get(prefecture_col).unwrap_or(""))?;
            if let Some(&first_row) = seen.get(&prefecture) {
                return Err(fault(TableFault::DuplicateRegion {
                    name: prefecture.as_str().to_string(),
                    first_row,
                    second_row: row,
                }));
            }
            seen.insert(prefecture.clone(), row);

            let cases = parse_count(record.get(cases_col).unwrap_or("")).map_err(|raw| {
                fault(TableFault::BadFigure {
                    row,
                    column: self.columns.cases().to_string(),
                    raw,
                })
            })?;
            let rate = parse_rate(record.get(rate_col).unwrap_or("")).map_err(|raw| {
                fault(TableFault::BadFigure {
                    row,
                    column: self.columns.rate().to_string(),
                    raw,
                })
            })?;

            rows.push(CaseRecord::new(prefecture, cases, rate));
        }

        // 5. Reject tables with no data rows.
        if rows.is_empty() {
            return Err(fault(TableFault::Empty));
        }

        debug!(n_rows = rows.len(), "case table read");
        Ok(rows)
    }

    /// Read every dated file into an assembled [`CaseTable`].
    ///
    /// # Errors
    ///
    /// Propagates every [`CaseTableBuilder::read_table`] error, plus:
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`CaseError::DuplicateDate`] | Two entries in `sources` resolve to the same date |
    /// | [`CaseError::EmptyCaseSet`] | `sources` is empty |
    pub fn build(&self, sources: &[(DateKey, PathBuf)]) -> Result<CaseTable, CaseError> {
        let mut by_date = BTreeMap::new();
        for (date, path) in sources {
            let records = self.read_table(*date, path)?;
            if by_date.insert(*date, records).is_some() {
                return Err(CaseError::DuplicateDate { date: *date });
            }
        }
        let table = CaseTable::new(by_date)?;
        info!(
            n_dates = table.n_dates(),
            latest = %table.latest(),
            "case tables assembled"
        );
        Ok(table)
    }

    /// Discover table files under `dir` and build from all of them.
    ///
    /// # Errors
    ///
    /// Propagates [`discover_tables`] and [`CaseTableBuilder::build`]
    /// errors.
    pub fn build_from_dir(&self, dir: &Path) -> Result<CaseTable, CaseError> {
        let sources = discover_tables(dir)?;
        self.build(&sources)
    }
}

impl Default for CaseTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a count cell. Empty means no figure was reported.
fn parse_count(raw: &str) -> Result<Observation<u64>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Observation::NoData);
    }
    trimmed
        .parse::<u64>()
        .map(Observation::Reported)
        .map_err(|_| raw.to_string())
}

/// Read a rate cell. Empty means no figure was reported.
fn parse_rate(raw: &str) -> Result<Observation<f64>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Observation::NoData);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Observation::Reported(value)),
        _ => Err(raw.to_string()),
    }
}
