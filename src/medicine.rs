//! Recently-scanned medicine history and the tablet-identification stub.

use rand::seq::SliceRandom;
use std::collections::VecDeque;

/// Maximum number of medicines kept in the recent history.
const MEDICINE_CAPACITY: usize = 3;

/// The fixed catalog the identification stub draws from.
///
/// Mirrors the names the scanner collaborator can report today.
const TABLET_CATALOG: [&str; 8] = [
    "Paracetamol",
    "Ibuprofen",
    "Amoxicillin",
    "Cetirizine",
    "Vitamin D",
    "Aspirin",
    "Dolo 650",
    "Azithromycin",
];

/// Bounded history of identified medicines for one session.
///
/// # Details
/// Holds at most the three most recent names. Recording a fourth evicts the
/// oldest entry (FIFO). Storage order is oldest-first; display consumers
/// read the reversed view via [`MedicineLog::recent`].
#[derive(Clone, Debug, Default)]
pub struct MedicineLog {
    entries: VecDeque<String>,
}

impl MedicineLog {
    /// Creates an empty medicine log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one identified medicine, evicting the oldest on overflow.
    ///
    /// # Details
    /// Appends the name to the back of the history. When the history would
    /// exceed its capacity of three, the front (oldest) entry is removed so
    /// the length invariant holds after every call.
    ///
    /// # Arguments
    /// * `name` - The identified medicine name.
    pub fn record(&mut self, name: impl Into<String>) {
        self.entries.push_back(name.into());
        while self.entries.len() > MEDICINE_CAPACITY {
            self.entries.pop_front();
        }
    }

    /// Returns the stored names oldest-first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Returns the display view, most recent first.
    ///
    /// # Returns
    /// * `Vec<&str>` - Stored names in reverse insertion order.
    pub fn recent(&self) -> Vec<&str> {
        self.entries.iter().rev().map(String::as_str).collect()
    }

    /// Returns the number of stored names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no medicine has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collaborator that turns a captured tablet image into a medicine name.
///
/// # Details
/// Real identification lives outside this crate. The trait is the seam the
/// presentation layer plugs a vision backend into; [`CatalogIdentifier`] is
/// the placeholder shipped today.
pub trait TabletIdentifier {
    /// Identifies the medicine on a captured image.
    ///
    /// # Arguments
    /// * `image` - Raw bytes of the captured still image.
    ///
    /// # Returns
    /// * `String` - The identified medicine name.
    fn identify(&mut self, image: &[u8]) -> String;
}

/// Placeholder identifier that picks uniformly from the fixed catalog.
///
/// # Details
/// Stand-in until a real vision backend exists. The image content is
/// ignored; every call reports one of the eight catalog names.
#[derive(Debug, Default)]
pub struct CatalogIdentifier;

impl TabletIdentifier for CatalogIdentifier {
    fn identify(&mut self, _image: &[u8]) -> String {
        let mut rng = rand::thread_rng();
        TABLET_CATALOG
            .choose(&mut rng)
            .copied()
            .unwrap_or(TABLET_CATALOG[0])
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_insertion_order() {
        let mut log = MedicineLog::new();
        log.record("Paracetamol");
        log.record("Ibuprofen");
        let stored: Vec<_> = log.entries().collect();
        assert_eq!(stored, vec!["Paracetamol", "Ibuprofen"]);
    }

    #[test]
    fn length_never_exceeds_capacity() {
        let mut log = MedicineLog::new();
        for name in ["Paracetamol", "Ibuprofen", "Amoxicillin", "Cetirizine", "Aspirin"] {
            log.record(name);
            assert!(log.len() <= 3);
        }
    }

    #[test]
    fn fourth_record_evicts_the_oldest() {
        let mut log = MedicineLog::new();
        log.record("Paracetamol");
        log.record("Ibuprofen");
        log.record("Amoxicillin");
        log.record("Cetirizine");
        let stored: Vec<_> = log.entries().collect();
        assert_eq!(stored, vec!["Ibuprofen", "Amoxicillin", "Cetirizine"]);
    }

    #[test]
    fn recent_view_is_most_recent_first() {
        let mut log = MedicineLog::new();
        log.record("Paracetamol");
        log.record("Ibuprofen");
        log.record("Amoxicillin");
        log.record("Cetirizine");
        assert_eq!(log.recent(), vec!["Cetirizine", "Amoxicillin", "Ibuprofen"]);
    }

    #[test]
    fn catalog_identifier_reports_catalog_names() {
        let mut identifier = CatalogIdentifier;
        for _ in 0..16 {
            let name = identifier.identify(&[]);
            assert!(TABLET_CATALOG.contains(&name.as_str()));
        }
    }
}
