//! Per-session state owned by one interactive companion run.

use crate::medicine::MedicineLog;
use crate::mood::MoodLog;

/// State for exactly one user session.
///
/// # Details
/// Owns the session's mood history and recent-medicine history. Created
/// empty when a session starts and dropped when it ends; nothing here is
/// persisted or shared between sessions. Handlers receive the session by
/// mutable reference rather than reaching for process-wide state.
#[derive(Clone, Debug, Default)]
pub struct Session {
    /// Append-only emotion history for this session.
    pub moods: MoodLog,
    /// Bounded history of identified medicines for this session.
    pub medicines: MedicineLog,
}

impl Session {
    /// Creates a fresh session with empty logs.
    pub fn new() -> Self {
        Self::default()
    }
}
