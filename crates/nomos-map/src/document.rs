//! GeoJSON interchange documents for rendered snapshots.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use nomos_cases::{DateKey, Observation};

use crate::RegionDateSnapshot;

/// A serialized snapshot: the date plus its GeoJSON body.
///
/// The body is a `FeatureCollection` with one feature per boundary
/// region, in boundary order, and a top-level `date` member carrying
/// the snapshot date label. Serialization is deterministic: the same
/// snapshot always yields byte-identical output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapDocument {
    date: DateKey,
    json: String,
}

impl MapDocument {
    /// Serialize a snapshot into its interchange document.
    #[must_use]
    pub fn from_snapshot(snapshot: &RegionDateSnapshot<'_>) -> Self {
        let features: Vec<FeatureDoc<'_>> = snapshot
            .rows()
            .iter()
            .map(|row| FeatureDoc {
                kind: "Feature",
                properties: PropertiesDoc {
                    prefecture: row.prefecture().as_str(),
                    cases: row.cases(),
                    rate: row.rate(),
                },
                geometry: row.geometry().as_value(),
            })
            .collect();

        let doc = FeatureCollectionDoc {
            kind: "FeatureCollection",
            date: snapshot.date().to_string(),
            features,
        };

        let json = serde_json::to_string(&doc).expect("serialization cannot fail");
        debug!(date = %snapshot.date(), bytes = json.len(), "snapshot serialized");
        Self {
            date: snapshot.date(),
            json,
        }
    }

    /// The date this document depicts.
    #[must_use]
    pub fn date(&self) -> DateKey {
        self.date
    }

    /// The GeoJSON body.
    #[must_use]
    pub fn as_json(&self) -> &str {
        &self.json
    }

    /// Consume the document, returning the GeoJSON body.
    #[must_use]
    pub fn into_json(self) -> String {
        self.json
    }
}

// --- Shadow structs for GeoJSON serialization ---

#[derive(Serialize)]
struct FeatureCollectionDoc<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    date: String,
    features: Vec<FeatureDoc<'a>>,
}

#[derive(Serialize)]
struct FeatureDoc<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    properties: PropertiesDoc<'a>,
    geometry: &'a Value,
}

#[derive(Serialize)]
struct PropertiesDoc<'a> {
    prefecture: &'a str,
    cases: Observation<u64>,
    #[serde(rename = "cases per 100,000 people")]
    rate: Observation<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use serde_json::json;

    use nomos_cases::{CaseRecord, CaseTable};
    use nomos_geo::{BoundaryTable, Geometry, PrefectureName, RegionBoundary};

    use crate::join_for_date;

    fn boundary(name: &str) -> RegionBoundary {
        let geometry = Geometry::new(json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
        }))
        .unwrap();
        RegionBoundary::new(PrefectureName::new(name).unwrap(), geometry)
    }

    fn date(label: &str) -> DateKey {
        DateKey::parse(label).unwrap()
    }

    fn fixture() -> (BoundaryTable, CaseTable) {
        let boundaries =
            BoundaryTable::new(vec![boundary("N. CHIOU"), boundary("N. SAMOU")]).unwrap();
        let cases = CaseTable::new(BTreeMap::from([(
            date("2020_03_20"),
            vec![CaseRecord::new(
                PrefectureName::new("N. CHIOU").unwrap(),
                Observation::Reported(7),
                Observation::Reported(13.74),
            )],
        )]))
        .unwrap();
        (boundaries, cases)
    }

    #[test]
    fn document_structure() {
        let (boundaries, cases) = fixture();
        let snapshot = join_for_date(&boundaries, &cases, date("2020_03_20")).unwrap();

        let document = MapDocument::from_snapshot(&snapshot);
        assert_eq!(document.date(), date("2020_03_20"));

        let body: Value = serde_json::from_str(document.as_json()).unwrap();
        assert_eq!(body["type"], "FeatureCollection");
        assert_eq!(body["date"], "2020_03_20");

        let features = body["features"].as_array().unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0]["type"], "Feature");
        assert_eq!(features[0]["properties"]["prefecture"], "N. CHIOU");
        assert_eq!(features[0]["properties"]["cases"], 7);
        assert_eq!(features[0]["properties"]["cases per 100,000 people"], 13.74);
        assert_eq!(features[0]["geometry"]["type"], "Polygon");
    }

    #[test]
    fn missing_figures_serialize_as_no_data() {
        let (boundaries, cases) = fixture();
        let snapshot = join_for_date(&boundaries, &cases, date("2020_03_20")).unwrap();

        let document = MapDocument::from_snapshot(&snapshot);
        let body: Value = serde_json::from_str(document.as_json()).unwrap();

        // N. SAMOU is unreported on this date.
        let samou = &body["features"][1]["properties"];
        assert_eq!(samou["prefecture"], "N. SAMOU");
        assert_eq!(samou["cases"], "No data");
        assert_eq!(samou["cases per 100,000 people"], "No data");
    }

    #[test]
    fn serialization_is_deterministic() {
        let (boundaries, cases) = fixture();
        let snapshot = join_for_date(&boundaries, &cases, date("2020_03_20")).unwrap();

        let first = MapDocument::from_snapshot(&snapshot);
        let second = MapDocument::from_snapshot(&snapshot);

        assert_eq!(first.as_json(), second.as_json());
        assert_eq!(first, second);
    }

    #[test]
    fn features_follow_boundary_order() {
        let boundaries = BoundaryTable::new(vec![
            boundary("N. LESVOU"),
            boundary("N. CHIOU"),
            boundary("N. SAMOU"),
        ])
        .unwrap();
        let cases = CaseTable::new(BTreeMap::from([(
            date("2020_03_20"),
            vec![CaseRecord::new(
                PrefectureName::new("N. SAMOU").unwrap(),
                Observation::Reported(9),
                Observation::Reported(27.09),
            )],
        )]))
        .unwrap();
        let snapshot = join_for_date(&boundaries, &cases, date("2020_03_20")).unwrap();

        let body: Value =
            serde_json::from_str(MapDocument::from_snapshot(&snapshot).as_json()).unwrap();
        let names: Vec<&str> = body["features"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["properties"]["prefecture"].as_str().unwrap())
            .collect();

        assert_eq!(names, vec!["N. LESVOU", "N. CHIOU", "N. SAMOU"]);
    }

    #[test]
    fn into_json_returns_body() {
        let (boundaries, cases) = fixture();
        let snapshot = join_for_date(&boundaries, &cases, date("2020_03_20")).unwrap();
        let document = MapDocument::from_snapshot(&snapshot);
        let json = document.clone().into_json();
        assert_eq!(json, document.as_json());
    }
}
