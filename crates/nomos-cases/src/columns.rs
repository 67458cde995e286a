//! Source-table column naming.

/// Source headers for the three columns the pipeline consumes.
///
/// Defaults to the Greek headers of the national daily tables; override
/// with the `with_*` methods when ingesting tables published under other
/// headings.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    prefecture: String,
    cases: String,
    rate: String,
}

impl ColumnMap {
    /// Headers used by the Greek national daily tables.
    #[must_use]
    pub fn greek() -> Self {
        Self {
            prefecture: "Περιφερειακή ενότητα".to_string(),
            cases: "Αριθμός κρουσμάτων".to_string(),
            rate: "Ανά 100000 πληθυσμού".to_string(),
        }
    }

    /// Override the header naming the region column.
    #[must_use]
    pub fn with_prefecture(mut self, header: impl Into<String>) -> Self {
        self.prefecture = header.into();
        self
    }

    /// Override the header naming the case count column.
    #[must_use]
    pub fn with_cases(mut self, header: impl Into<String>) -> Self {
        self.cases = header.into();
        self
    }

    /// Override the header naming the per-100,000 rate column.
    #[must_use]
    pub fn with_rate(mut self, header: impl Into<String>) -> Self {
        self.rate = header.into();
        self
    }

    /// Header naming the region column.
    #[must_use]
    pub fn prefecture(&self) -> &str {
        &self.prefecture
    }

    /// Header naming the case count column.
    #[must_use]
    pub fn cases(&self) -> &str {
        &self.cases
    }

    /// Header naming the per-100,000 rate column.
    #[must_use]
    pub fn rate(&self) -> &str {
        &self.rate
    }
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self::greek()
    }
}
