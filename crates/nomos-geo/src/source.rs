//! Loading boundary tables from GeoJSON files on disk.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::geometry::json_kind;
use crate::{BoundaryFault, BoundaryTable, GeoError, Geometry, PrefectureName, RegionBoundary};

/// Feature property that carries the canonical prefecture name in the
/// shapefile-derived GeoJSON published with the Greek COVID-19 datasets.
pub const DEFAULT_NAME_PROPERTY: &str = "NAME_ENG";

/// A provider of prefecture boundaries.
///
/// The pipeline only ever needs the one load at startup, but keeping the
/// seam as a trait lets tests substitute in-memory tables and keeps the
/// GeoJSON specifics out of the join and controller layers.
pub trait BoundarySource {
    /// Load the full boundary table.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError`] if the boundaries cannot be produced; the
    /// concrete conditions depend on the source.
    fn load(&self) -> Result<BoundaryTable, GeoError>;
}

/// A GeoJSON `FeatureCollection` file holding one feature per prefecture.
#[derive(Debug, Clone)]
pub struct GeoJsonFile {
    path: PathBuf,
    name_property: String,
}

impl GeoJsonFile {
    /// Create a source reading from `path`.
    ///
    /// The canonical name is taken from the [`DEFAULT_NAME_PROPERTY`]
    /// feature property unless overridden with
    /// [`GeoJsonFile::with_name_property`].
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            name_property: DEFAULT_NAME_PROPERTY.to_string(),
        }
    }

    /// Override the feature property holding the canonical name.
    #[must_use]
    pub fn with_name_property(mut self, property: impl Into<String>) -> Self {
        self.name_property = property.into();
        self
    }

    /// Return the file path this source reads from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, source: BoundaryFault) -> GeoError {
        GeoError::BoundaryUnavailable {
            path: self.path.clone(),
            source,
        }
    }

    fn feature_fault(&self, index: usize, detail: String) -> GeoError {
        self.unavailable(BoundaryFault::Feature { index, detail })
    }
}

impl BoundarySource for GeoJsonFile {
    /// Read and validate the GeoJSON file into a [`BoundaryTable`].
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`GeoError::BoundaryUnavailable`] | The file cannot be read, is not valid JSON, is not a `FeatureCollection`, or a feature lacks the name property or a usable geometry |
    /// | [`GeoError::DuplicatePrefecture`] | Two features carry the same canonical name |
    /// | [`GeoError::EmptyBoundarySet`] | The collection has no features |
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<BoundaryTable, GeoError> {
        // 1. Read the file into memory.
        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| self.unavailable(BoundaryFault::Read(e)))?;

        // 2. Parse as JSON.
        let document: Value =
            serde_json::from_str(&raw).map_err(|e| self.unavailable(BoundaryFault::Json(e)))?;

        // 3. Unwrap the FeatureCollection envelope.
        let mut root = match document {
            Value::Object(root) => root,
            other => {
                return Err(self.unavailable(BoundaryFault::NotAFeatureCollection {
                    found: json_kind(&other).to_string(),
                }))
            }
        };
        match root.get("type").and_then(Value::as_str) {
            Some("FeatureCollection") => {}
            Some(other) => {
                return Err(self.unavailable(BoundaryFault::NotAFeatureCollection {
                    found: format!("\"{other}\""),
                }))
            }
            None => {
                return Err(self.unavailable(BoundaryFault::NotAFeatureCollection {
                    found: "a document with no \"type\" member".to_string(),
                }))
            }
        }
        let features = match root.remove("features") {
            Some(Value::Array(features)) => features,
            Some(other) => {
                return Err(self.unavailable(BoundaryFault::NotAFeatureCollection {
                    found: format!("\"features\" holding {}", json_kind(&other)),
                }))
            }
            None => {
                return Err(self.unavailable(BoundaryFault::NotAFeatureCollection {
                    found: "a collection with no \"features\" member".to_string(),
                }))
            }
        };

        // 4. Validate each feature into a boundary entry.
        let mut entries = Vec::with_capacity(features.len());
        for (index, feature) in features.into_iter().enumerate() {
            let mut feature = match feature {
                Value::Object(feature) => feature,
                other => {
                    return Err(self.feature_fault(
                        index,
                        format!("expected a feature object, found {}", json_kind(&other)),
                    ))
                }
            };
            let name = feature
                .get("properties")
                .and_then(|properties| properties.get(&self.name_property))
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    self.unavailable(BoundaryFault::MissingNameProperty {
                        index,
                        property: self.name_property.clone(),
                    })
                })?;
            let name = PrefectureName::new(name)
                .map_err(|e| self.feature_fault(index, e.to_string()))?;
            let geometry = feature
                .remove("geometry")
                .ok_or_else(|| self.feature_fault(index, "missing \"geometry\" member".to_string()))?;
            let geometry =
                Geometry::new(geometry).map_err(|e| self.feature_fault(index, e.to_string()))?;
            debug!(prefecture = %name, kind = %geometry.kind(), "boundary feature accepted");
            entries.push(RegionBoundary::new(name, geometry));
        }

        // 5. Assemble the table, enforcing uniqueness and non-emptiness.
        let table = BoundaryTable::new(entries)?;
        info!(n_prefectures = table.len(), "boundary table loaded");
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_geojson(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn feature(name_property: &str, name: &str) -> String {
        format!(
            r#"{{"type": "Feature",
                 "properties": {{"{name_property}": "{name}", "POP": 1}},
                 "geometry": {{"type": "Polygon",
                               "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]}}}}"#
        )
    }

    #[test]
    fn loads_valid_collection_in_order() {
        let body = format!(
            r#"{{"type": "FeatureCollection", "features": [{}, {}]}}"#,
            feature("NAME_ENG", "N. DRAMAS"),
            feature("NAME_ENG", "N. KAVALAS"),
        );
        let file = write_geojson(&body);

        let table = GeoJsonFile::new(file.path()).load().unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0].name().as_str(), "N. DRAMAS");
        assert_eq!(table.entries()[1].name().as_str(), "N. KAVALAS");
    }

    #[test]
    fn honors_custom_name_property() {
        let body = format!(
            r#"{{"type": "FeatureCollection", "features": [{}]}}"#,
            feature("REGION", "N. SAMOU"),
        );
        let file = write_geojson(&body);

        let table = GeoJsonFile::new(file.path())
            .with_name_property("REGION")
            .load()
            .unwrap();

        assert_eq!(table.entries()[0].name().as_str(), "N. SAMOU");
    }

    #[test]
    fn missing_file_reports_read_fault() {
        let source = GeoJsonFile::new(Path::new("/nonexistent/boundaries.geojson"));
        let err = source.load().unwrap_err();
        assert!(matches!(
            err,
            GeoError::BoundaryUnavailable {
                source: BoundaryFault::Read(_),
                ..
            }
        ));
    }

    #[test]
    fn invalid_json_reports_json_fault() {
        let file = write_geojson("{not json");
        let err = GeoJsonFile::new(file.path()).load().unwrap_err();
        assert!(matches!(
            err,
            GeoError::BoundaryUnavailable {
                source: BoundaryFault::Json(_),
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_feature_collection() {
        let file = write_geojson(r#"{"type": "Feature", "features": []}"#);
        let err = GeoJsonFile::new(file.path()).load().unwrap_err();
        assert!(matches!(
            err,
            GeoError::BoundaryUnavailable {
                source: BoundaryFault::NotAFeatureCollection { ref found },
                ..
            } if found == "\"Feature\""
        ));
    }

    #[test]
    fn rejects_missing_name_property() {
        let body = format!(
            r#"{{"type": "FeatureCollection", "features": [{}]}}"#,
            feature("WRONG_KEY", "N. CHIOU"),
        );
        let file = write_geojson(&body);

        let err = GeoJsonFile::new(file.path()).load().unwrap_err();

        assert!(matches!(
            err,
            GeoError::BoundaryUnavailable {
                source: BoundaryFault::MissingNameProperty { index: 0, ref property },
                ..
            } if property == "NAME_ENG"
        ));
    }

    #[test]
    fn rejects_unusable_geometry() {
        let body = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature",
             "properties": {"NAME_ENG": "N. CHIOU"},
             "geometry": {"type": "Point", "coordinates": [26.1, 38.4]}}]}"#;
        let file = write_geojson(body);

        let err = GeoJsonFile::new(file.path()).load().unwrap_err();

        assert!(matches!(
            err,
            GeoError::BoundaryUnavailable {
                source: BoundaryFault::Feature { index: 0, .. },
                ..
            }
        ));
    }

    #[test]
    fn rejects_duplicate_prefecture() {
        let body = format!(
            r#"{{"type": "FeatureCollection", "features": [{}, {}]}}"#,
            feature("NAME_ENG", "N. PELLAS"),
            feature("NAME_ENG", "N. PELLAS"),
        );
        let file = write_geojson(&body);

        let err = GeoJsonFile::new(file.path()).load().unwrap_err();

        assert!(matches!(err, GeoError::DuplicatePrefecture { ref name } if name == "N. PELLAS"));
    }

    #[test]
    fn rejects_empty_feature_list() {
        let file = write_geojson(r#"{"type": "FeatureCollection", "features": []}"#);
        let err = GeoJsonFile::new(file.path()).load().unwrap_err();
        assert!(matches!(err, GeoError::EmptyBoundarySet));
    }
}
