//! Greek-to-canonical prefecture name translation.

use std::collections::HashMap;

use nomos_geo::PrefectureName;
use tracing::debug;

use crate::CaseError;

/// Canonical label for cases not yet attributed to a prefecture.
///
/// Rows under this name carry real counts but have no boundary, so the
/// join drops them from map snapshots.
pub const UNDER_INVESTIGATION: &str = "UNDER INVESTIGATION";

/// Reported spellings in the national daily tables, paired with the
/// canonical Latin names used by the boundary file. Covers all 55
/// prefectures plus the pending-attribution row.
const GREEK_PREFECTURES: &[(&str, &str)] = &[
    ("Άγιο Όρος", "AGIO OROS"),
    ("Αθηνών", "N. ATHINON"),
    ("Αιτωλοακαρνανίας", "N. ETOLOAKARNANIAS"),
    ("Ανατολικής Αττικής", "N. ANATOLIKIS ATTIKIS"),
    ("Αργολίδας", "N. ARGOLIDAS"),
    ("Αρκαδίας", "N. ARKADIAS"),
    ("Άρτας", "N. ARTAS"),
    ("Αχαϊας", "N. ACHAIAS"),
    ("Βοιωτίας", "N. VIOTIAS"),
    ("Γρεβενών", "N. GREVENON"),
    ("Δράμας", "N. DRAMAS"),
    ("Δυτικής Αττικής", "N. DYTIKIS ATTIKIS"),
    ("Δωδεκανήσου", "N. DODEKANISON"),
    ("Έβρου", "N. EVROU"),
    ("Εύβοιας", "N. EVVIAS"),
    ("Ευρυτανίας", "N. EVRYTANIAS"),
    ("Ζακύνθου", "N. ZAKYNTHOU"),
    ("Ηλείας", "N. ILIAS"),
    ("Ημαθίας", "N. IMATHIAS"),
    ("Ηρακλείου", "N. IRAKLIOU"),
    ("Θεσπρωτίας", "N. THESPROTIAS"),
    ("Θεσσαλονίκης", "N. THESSALONIKIS"),
    ("Ιωαννίνων", "N. IOANNINON"),
    ("Καβάλας", "N. KAVALAS"),
    ("Καρδίτσας", "N. KARDITSAS"),
    ("Καστοριάς", "N. KASTORIAS"),
    ("Κέρκυρας", "N. KERKYRAS"),
    ("Κεφαλλονιάς", "N. KEFALLONIAS"),
    ("Κιλκίς", "N. KILKIS"),
    ("Κοζάνης", "N. KOZANIS"),
    ("Κορινθίας", "N. KORINTHOU"),
    ("Κυκλάδων", "N. KYKLADON"),
    ("Λακωνίας", "N. LAKONIAS"),
    ("Λαρίσης", "N. LARISAS"),
    ("Λασιθίου", "N. LASITHIOU"),
    ("Λέσβου", "N. LESVOU"),
    ("Λευκάδας", "N. LEFKADAS"),
    ("Μαγνησίας", "N. MAGNISIAS"),
    ("Μεσσηνίας", "N. MESSINIAS"),
    ("Ξάνθης", "N. XANTHIS"),
    ("Πειραιώς", "N. PIREOS KE NISON"),
    ("Πέλλας", "N. PELLAS"),
    ("Πιερίας", "N. PIERIAS"),
    ("Πρέβεζας", "N. PREVEZAS"),
    ("Ρεθύμνου", "N. RETHYMNOU"),
    ("Ροδόπης", "N. RODOPIS"),
    ("Σάμου", "N. SAMOU"),
    ("Σερρών", "N. SERRON"),
    ("Τρικάλων", "N. TRIKALON"),
    ("Φθιώτιδας", "N. FTHIOTIDAS"),
    ("Φλώρινας", "N. FLORINAS"),
    ("Φωκίδας", "N. FOKIDAS"),
    ("Χαλκιδικής", "N. CHALKIDIKIS"),
    ("Χανίων", "N. CHANION"),
    ("Χίου", "N. CHIOU"),
    ("Υπό διερεύνηση", UNDER_INVESTIGATION),
];

/// Translates region names as reported in the daily tables into the
/// canonical names used by the boundary file.
pub struct NameTranslator {
    map: HashMap<String, PrefectureName>,
}

impl NameTranslator {
    /// Build a translator from reported/canonical name pairs.
    ///
    /// A reported spelling listed twice keeps its last canonical name.
    #[must_use]
    pub fn new(pairs: impl IntoIterator<Item = (String, PrefectureName)>) -> Self {
        Self {
            map: pairs.into_iter().collect(),
        }
    }

    /// The translator for the Greek national daily tables.
    #[must_use]
    pub fn greek() -> Self {
        let pairs = GREEK_PREFECTURES.iter().map(|&(reported, canonical)| {
            let canonical = PrefectureName::new(canonical)
                .expect("built-in canonical names are non-empty");
            (reported.to_string(), canonical)
        });
        let translator = Self::new(pairs);
        debug!(n_names = translator.len(), "Greek name translator built");
        translator
    }

    /// Translate a reported name to its canonical form.
    ///
    /// Surrounding whitespace in `raw` is ignored; spelling, accents, and
    /// case must otherwise match a known reported name exactly.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`CaseError::UnknownRegionName`] | `raw` has no canonical mapping |
    pub fn translate(&self, raw: &str) -> Result<PrefectureName, CaseError> {
        let trimmed = raw.trim();
        self.map
            .get(trimmed)
            .cloned()
            .ok_or_else(|| CaseError::UnknownRegionName {
                name: trimmed.to_string(),
            })
    }

    /// Number of reported spellings this translator covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Return true if the translator covers no spellings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greek_table_covers_all_rows() {
        let translator = NameTranslator::greek();
        assert_eq!(translator.len(), 56);
    }

    #[test]
    fn translates_known_names() {
        let translator = NameTranslator::greek();
        assert_eq!(
            translator.translate("Θεσσαλονίκης").unwrap().as_str(),
            "N. THESSALONIKIS"
        );
        assert_eq!(translator.translate("Άγιο Όρος").unwrap().as_str(), "AGIO OROS");
        assert_eq!(
            translator.translate("Πειραιώς").unwrap().as_str(),
            "N. PIREOS KE NISON"
        );
    }

    #[test]
    fn translates_pending_attribution_row() {
        let translator = NameTranslator::greek();
        assert_eq!(
            translator.translate("Υπό διερεύνηση").unwrap().as_str(),
            UNDER_INVESTIGATION
        );
    }

    #[test]
    fn ignores_surrounding_whitespace() {
        let translator = NameTranslator::greek();
        assert_eq!(
            translator.translate("  Χίου ").unwrap().as_str(),
            "N. CHIOU"
        );
    }

    #[test]
    fn unknown_name_reports_offending_input() {
        let translator = NameTranslator::greek();
        let result = translator.translate("Ατλαντίδας");
        assert!(
            matches!(result, Err(CaseError::UnknownRegionName { ref name }) if name == "Ατλαντίδας")
        );
    }

    #[test]
    fn canonical_names_are_not_accepted_as_input() {
        // Translation is one-way: the canonical side is not a reported spelling.
        let translator = NameTranslator::greek();
        assert!(translator.translate("N. CHIOU").is_err());
    }

    #[test]
    fn custom_pairs() {
        let translator = NameTranslator::new(vec![(
            "Testland".to_string(),
            PrefectureName::new("TESTLAND").unwrap(),
        )]);
        assert_eq!(translator.len(), 1);
        assert!(!translator.is_empty());
        assert_eq!(translator.translate("Testland").unwrap().as_str(), "TESTLAND");
    }
}
