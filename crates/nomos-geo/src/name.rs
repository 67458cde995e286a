//! Canonical prefecture naming.

use crate::GeoError;

/// A canonical prefecture name in the boundary dataset's convention.
///
/// This is the join key of record: case records published under raw
/// source-alphabet names must be translated into this form before they can
/// participate in a join. Canonical names are unique within a
/// [`BoundaryTable`](crate::BoundaryTable).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrefectureName(String);

impl PrefectureName {
    /// Create a canonical name from a non-empty string.
    ///
    /// Surrounding whitespace is trimmed; the name is otherwise stored as
    /// given (the boundary convention uses uppercase Latin with the
    /// `N. ` prefix, but that is the source's concern, not this type's).
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`GeoError::EmptyPrefectureName`] | `name` is empty or all whitespace |
    pub fn new(name: impl Into<String>) -> Result<Self, GeoError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(GeoError::EmptyPrefectureName);
        }
        if trimmed.len() == name.len() {
            Ok(Self(name))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// Return the canonical name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PrefectureName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PrefectureName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_returns_inner() {
        let name = PrefectureName::new("N. ATHINON").unwrap();
        assert_eq!(name.as_str(), "N. ATHINON");
    }

    #[test]
    fn rejects_empty() {
        let result = PrefectureName::new("");
        assert!(matches!(result, Err(GeoError::EmptyPrefectureName)));
    }

    #[test]
    fn rejects_whitespace_only() {
        let result = PrefectureName::new("   \t");
        assert!(matches!(result, Err(GeoError::EmptyPrefectureName)));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let name = PrefectureName::new("  AGIO OROS \n").unwrap();
        assert_eq!(name.as_str(), "AGIO OROS");
    }

    #[test]
    fn display_matches_inner() {
        let name = PrefectureName::new("N. LESVOU").unwrap();
        assert_eq!(format!("{name}"), "N. LESVOU");
    }

    #[test]
    fn usable_as_map_key() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(PrefectureName::new("N. CHIOU").unwrap(), 7usize);
        assert_eq!(map[&PrefectureName::new("N. CHIOU").unwrap()], 7);
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = PrefectureName::new("AGIO OROS").unwrap();
        let b = PrefectureName::new("N. ARTAS").unwrap();
        assert!(a < b);
    }
}
