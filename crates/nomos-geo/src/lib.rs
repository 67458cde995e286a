//! Prefecture boundary domain for the nomos choropleth pipeline.

mod boundary;
mod error;
mod geometry;
mod name;
mod source;

pub use boundary::{BoundaryTable, RegionBoundary};
pub use error::{BoundaryFault, GeoError};
pub use geometry::{Geometry, GeometryKind};
pub use name::PrefectureName;
pub use source::{BoundarySource, GeoJsonFile, DEFAULT_NAME_PROPERTY};
