//! Daily case-table ingestion for the nomos choropleth pipeline.

mod builder;
mod columns;
mod date;
mod discover;
mod error;
mod observation;
mod table;
mod translate;

pub use builder::CaseTableBuilder;
pub use columns::ColumnMap;
pub use date::DateKey;
pub use discover::{discover_tables, TABLE_FILE_PREFIX};
pub use error::{CaseError, TableFault};
pub use observation::{Observation, NO_DATA_LABEL};
pub use table::{CaseRecord, CaseTable};
pub use translate::{NameTranslator, UNDER_INVESTIGATION};
