//! Boundary-domain error types for nomos-geo.

use std::path::PathBuf;

/// Errors from boundary loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum GeoError {
    /// Returned when the boundary source cannot be retrieved or parsed.
    #[error("boundary source unavailable: {path}")]
    BoundaryUnavailable {
        /// Path that was attempted.
        path: PathBuf,
        /// What made the source unusable.
        source: BoundaryFault,
    },

    /// Returned when a prefecture name is empty or all whitespace.
    #[error("prefecture name must not be empty")]
    EmptyPrefectureName,

    /// Returned when a geometry is not a usable GeoJSON boundary object.
    #[error("invalid geometry: {reason}")]
    InvalidGeometry {
        /// Why the geometry was rejected.
        reason: String,
    },

    /// Returned when the same canonical name appears on two boundary entries.
    #[error("duplicate prefecture \"{name}\" in boundary set")]
    DuplicatePrefecture {
        /// The duplicated canonical name.
        name: String,
    },

    /// Returned when a boundary set contains no entries.
    #[error("boundary set is empty")]
    EmptyBoundarySet,
}

/// Underlying cause of a [`GeoError::BoundaryUnavailable`].
#[derive(Debug, thiserror::Error)]
pub enum BoundaryFault {
    /// The boundary file could not be opened or read.
    #[error("cannot read boundary file")]
    Read(#[from] std::io::Error),

    /// The boundary file content is not valid JSON.
    #[error("malformed JSON")]
    Json(#[from] serde_json::Error),

    /// The JSON document is not a GeoJSON FeatureCollection.
    #[error("expected a GeoJSON FeatureCollection, found {found}")]
    NotAFeatureCollection {
        /// What was found at the top level instead.
        found: String,
    },

    /// A feature lacks the configured name property.
    #[error("feature {index} has no usable \"{property}\" property")]
    MissingNameProperty {
        /// Zero-based index of the feature in the collection.
        index: usize,
        /// The property name that was looked up.
        property: String,
    },

    /// A feature was rejected during extraction.
    #[error("feature {index} rejected: {detail}")]
    Feature {
        /// Zero-based index of the feature in the collection.
        index: usize,
        /// Why the feature was rejected.
        detail: String,
    },
}
