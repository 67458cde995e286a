//! Prefecture boundary records and the process-lifetime boundary table.

use std::collections::HashMap;

use crate::{GeoError, Geometry, PrefectureName};

/// One prefecture's boundary: canonical name plus polygon geometry.
#[derive(Debug, Clone)]
pub struct RegionBoundary {
    name: PrefectureName,
    geometry: Geometry,
}

impl RegionBoundary {
    /// Create a boundary record.
    #[must_use]
    pub fn new(name: PrefectureName, geometry: Geometry) -> Self {
        Self { name, geometry }
    }

    /// Return the canonical prefecture name.
    #[must_use]
    pub fn name(&self) -> &PrefectureName {
        &self.name
    }

    /// Return the boundary geometry.
    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }
}

/// The full set of prefecture boundaries.
///
/// Built once at startup and read-only for the life of the process.
/// Canonical names are unique; entry order is preserved from the source and
/// drives the row order of every joined snapshot.
#[derive(Debug)]
pub struct BoundaryTable {
    entries: Vec<RegionBoundary>,
    by_name: HashMap<PrefectureName, usize>,
}

impl BoundaryTable {
    /// Build a boundary table from its entries.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`GeoError::EmptyBoundarySet`] | `entries` is empty |
    /// | [`GeoError::DuplicatePrefecture`] | The same canonical name appears twice |
    pub fn new(entries: Vec<RegionBoundary>) -> Result<Self, GeoError> {
        if entries.is_empty() {
            return Err(GeoError::EmptyBoundarySet);
        }
        let mut by_name = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if by_name.insert(entry.name.clone(), index).is_some() {
                return Err(GeoError::DuplicatePrefecture {
                    name: entry.name.as_str().to_string(),
                });
            }
        }
        Ok(Self { entries, by_name })
    }

    /// Return the boundary entries in source order.
    #[must_use]
    pub fn entries(&self) -> &[RegionBoundary] {
        &self.entries
    }

    /// Return the number of prefectures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return true if the table has no entries.
    ///
    /// A table constructed via [`BoundaryTable::new`] is always non-empty,
    /// so this always returns `false` for valid instances. Provided to
    /// satisfy the `len_without_is_empty` convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return true if `name` has a boundary entry.
    #[must_use]
    pub fn contains(&self, name: &PrefectureName) -> bool {
        self.by_name.contains_key(name)
    }

    /// Look up the boundary entry for `name`.
    #[must_use]
    pub fn get(&self, name: &PrefectureName) -> Option<&RegionBoundary> {
        self.by_name.get(name).map(|&index| &self.entries[index])
    }
}
