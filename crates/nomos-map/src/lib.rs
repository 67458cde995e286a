//! Snapshot production and interactive control for the nomos choropleth.

mod controller;
mod document;
mod error;
mod join;
mod style;
mod writer;

pub use controller::{ControllerState, MapController, RenderSurface, DEFAULT_TITLE};
pub use document::MapDocument;
pub use error::MapError;
pub use join::{join_for_date, RegionDateSnapshot, SnapshotRow};
pub use style::MapStyle;
pub use writer::SnapshotWriter;
