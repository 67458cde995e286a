//! Validated GeoJSON geometry for prefecture boundaries.

use serde_json::Value;

use crate::GeoError;

/// Geometry type of a validated boundary geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    /// A single GeoJSON `Polygon`.
    Polygon,
    /// A GeoJSON `MultiPolygon` (prefectures with islands or exclaves).
    MultiPolygon,
}

impl std::fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Polygon => f.write_str("Polygon"),
            Self::MultiPolygon => f.write_str("MultiPolygon"),
        }
    }
}

/// An owned, validated GeoJSON geometry object.
///
/// Guaranteed to be a JSON object with a `type` of `Polygon` or
/// `MultiPolygon` and an array `coordinates` member. The value is kept as
/// parsed JSON rather than decoded into a coordinate model: the rendering
/// collaborator consumes GeoJSON directly, and nothing in the pipeline
/// inspects individual vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    kind: GeometryKind,
    value: Value,
}

impl Geometry {
    /// Validate `value` as a boundary geometry.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`GeoError::InvalidGeometry`] | Not a JSON object, no `type` member, a type other than `Polygon`/`MultiPolygon`, or a missing/non-array `coordinates` member |
    pub fn new(value: Value) -> Result<Self, GeoError> {
        let object = value.as_object().ok_or_else(|| GeoError::InvalidGeometry {
            reason: format!("expected a JSON object, found {}", json_kind(&value)),
        })?;

        let kind = match object.get("type").and_then(Value::as_str) {
            Some("Polygon") => GeometryKind::Polygon,
            Some("MultiPolygon") => GeometryKind::MultiPolygon,
            Some(other) => {
                return Err(GeoError::InvalidGeometry {
                    reason: format!("unsupported geometry type \"{other}\""),
                })
            }
            None => {
                return Err(GeoError::InvalidGeometry {
                    reason: "missing \"type\" member".to_string(),
                })
            }
        };

        match object.get("coordinates") {
            Some(Value::Array(_)) => {}
            Some(other) => {
                return Err(GeoError::InvalidGeometry {
                    reason: format!(
                        "\"coordinates\" must be an array, found {}",
                        json_kind(other)
                    ),
                })
            }
            None => {
                return Err(GeoError::InvalidGeometry {
                    reason: "missing \"coordinates\" member".to_string(),
                })
            }
        }

        Ok(Self { kind, value })
    }

    /// Return the geometry type.
    #[must_use]
    pub fn kind(&self) -> GeometryKind {
        self.kind
    }

    /// Borrow the underlying GeoJSON value.
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.value
    }

    /// Consume and return the underlying GeoJSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }
}

/// Human-readable JSON value kind for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn square() -> Value {
        json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]]
        })
    }

    #[test]
    fn accepts_polygon() {
        let geometry = Geometry::new(square()).unwrap();
        assert_eq!(geometry.kind(), GeometryKind::Polygon);
    }

    #[test]
    fn accepts_multipolygon() {
        let value = json!({
            "type": "MultiPolygon",
            "coordinates": [[[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]]
        });
        let geometry = Geometry::new(value).unwrap();
        assert_eq!(geometry.kind(), GeometryKind::MultiPolygon);
    }

    #[test]
    fn rejects_point() {
        let value = json!({ "type": "Point", "coordinates": [23.7, 37.9] });
        let err = Geometry::new(value).unwrap_err();
        assert!(matches!(err, GeoError::InvalidGeometry { ref reason } if reason.contains("Point")));
    }

    #[test]
    fn rejects_non_object() {
        let err = Geometry::new(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, GeoError::InvalidGeometry { ref reason } if reason.contains("array")));
    }

    #[test]
    fn rejects_null() {
        let err = Geometry::new(Value::Null).unwrap_err();
        assert!(matches!(err, GeoError::InvalidGeometry { ref reason } if reason.contains("null")));
    }

    #[test]
    fn rejects_missing_type() {
        let err = Geometry::new(json!({ "coordinates": [] })).unwrap_err();
        assert!(matches!(err, GeoError::InvalidGeometry { ref reason } if reason.contains("type")));
    }

    #[test]
    fn rejects_missing_coordinates() {
        let err = Geometry::new(json!({ "type": "Polygon" })).unwrap_err();
        assert!(matches!(err, GeoError::InvalidGeometry { ref reason } if reason.contains("coordinates")));
    }

    #[test]
    fn rejects_non_array_coordinates() {
        let err = Geometry::new(json!({ "type": "Polygon", "coordinates": "0,0" })).unwrap_err();
        assert!(matches!(err, GeoError::InvalidGeometry { ref reason } if reason.contains("array")));
    }

    #[test]
    fn as_value_round_trips() {
        let value = square();
        let geometry = Geometry::new(value.clone()).unwrap();
        assert_eq!(geometry.as_value(), &value);
        assert_eq!(geometry.into_value(), value);
    }
}
