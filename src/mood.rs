//! Session mood history and dominant-emotion summarization.

use crate::emotion::Emotion;

/// Number of logged emotions required before a summary is produced.
const SUMMARY_THRESHOLD: usize = 3;

/// Suggestion shown when the dominant emotion is sadness.
const SADNESS_SUGGESTION: &str = "Try a short walk or listen to calming sounds.";

/// Suggestion shown when the dominant emotion is happiness.
const HAPPINESS_SUGGESTION: &str = "Keep it up! You're doing great emotionally.";

/// Suggestion shown for every other dominant emotion.
const STEADY_SUGGESTION: &str = "Your emotions are steady. Stay mindful and positive!";

/// Append-only history of detected emotions for one session.
///
/// # Details
/// Insertion order is significant: it defines recency for the summary
/// tie-break and the frequency counts. The log is unbounded and lives only
/// as long as its owning session.
#[derive(Clone, Debug, Default)]
pub struct MoodLog {
    entries: Vec<Emotion>,
}

/// The result of summarizing a mood log.
///
/// # Details
/// Pairs the dominant emotion with the fixed suggestion text keyed by
/// sadness, happiness, or anything else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoodSummary {
    /// The most frequent emotion in the log.
    pub dominant: Emotion,
    /// The fixed suggestion text for that emotion.
    pub suggestion: &'static str,
}

impl MoodLog {
    /// Creates an empty mood log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one detected emotion to the history.
    ///
    /// # Arguments
    /// * `emotion` - The label to record.
    pub fn append(&mut self, emotion: Emotion) {
        self.entries.push(emotion);
    }

    /// Returns the number of logged emotions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing has been logged yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the logged emotions oldest-first.
    pub fn entries(&self) -> &[Emotion] {
        &self.entries
    }

    /// Summarizes the log once enough emotions have accumulated.
    ///
    /// # Details
    /// Produces nothing until at least three emotions are logged. Otherwise
    /// counts occurrences per emotion and selects the maximum. When several
    /// emotions tie for the maximum, the one logged most recently wins,
    /// which keeps the result deterministic and biased toward how the user
    /// feels now.
    ///
    /// # Returns
    /// * `Some(MoodSummary)` - Dominant emotion plus its suggestion text.
    /// * `None` - Fewer than three emotions logged so far.
    pub fn summarize(&self) -> Option<MoodSummary> {
        if self.entries.len() < SUMMARY_THRESHOLD {
            return None;
        }
        let dominant = self.dominant_emotion()?;
        Some(MoodSummary {
            dominant,
            suggestion: suggestion_for(dominant),
        })
    }

    /// Finds the most frequent emotion, most-recently-logged winning ties.
    ///
    /// # Returns
    /// * `Some(Emotion)` - The dominant emotion.
    /// * `None` - Only when the log is empty.
    fn dominant_emotion(&self) -> Option<Emotion> {
        let max_count = self
            .entries
            .iter()
            .map(|candidate| self.count_of(*candidate))
            .max()?;
        self.entries
            .iter()
            .rev()
            .find(|candidate| self.count_of(**candidate) == max_count)
            .copied()
    }

    /// Counts occurrences of one emotion in the log.
    fn count_of(&self, emotion: Emotion) -> usize {
        self.entries.iter().filter(|e| **e == emotion).count()
    }
}

/// Returns the fixed suggestion text for a dominant emotion.
///
/// # Arguments
/// * `dominant` - The emotion the suggestion is keyed by.
///
/// # Returns
/// * `&'static str` - One of the three fixed suggestion strings.
fn suggestion_for(dominant: Emotion) -> &'static str {
    match dominant {
        Emotion::Sadness => SADNESS_SUGGESTION,
        Emotion::Happiness => HAPPINESS_SUGGESTION,
        _ => STEADY_SUGGESTION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_of(emotions: &[Emotion]) -> MoodLog {
        let mut log = MoodLog::new();
        for &emotion in emotions {
            log.append(emotion);
        }
        log
    }

    #[test]
    fn no_summary_below_three_entries() {
        assert!(log_of(&[]).summarize().is_none());
        assert!(log_of(&[Emotion::Sadness]).summarize().is_none());
        assert!(log_of(&[Emotion::Sadness, Emotion::Anger]).summarize().is_none());
    }

    #[test]
    fn majority_emotion_dominates() {
        let log = log_of(&[Emotion::Sadness, Emotion::Happiness, Emotion::Sadness]);
        let summary = log.summarize().expect("summary at three entries");
        assert_eq!(summary.dominant, Emotion::Sadness);
    }

    #[test]
    fn sadness_summary_carries_sadness_suggestion() {
        let log = log_of(&[Emotion::Sadness, Emotion::Sadness, Emotion::Happiness]);
        let summary = log.summarize().expect("summary");
        assert_eq!(summary.dominant, Emotion::Sadness);
        assert_eq!(summary.suggestion, SADNESS_SUGGESTION);
    }

    #[test]
    fn happiness_summary_carries_happiness_suggestion() {
        let log = log_of(&[Emotion::Happiness, Emotion::Happiness, Emotion::Neutral]);
        let summary = log.summarize().expect("summary");
        assert_eq!(summary.dominant, Emotion::Happiness);
        assert_eq!(summary.suggestion, HAPPINESS_SUGGESTION);
    }

    #[test]
    fn other_dominants_carry_steady_suggestion() {
        let log = log_of(&[Emotion::Stress, Emotion::Stress, Emotion::Sadness]);
        let summary = log.summarize().expect("summary");
        assert_eq!(summary.dominant, Emotion::Stress);
        assert_eq!(summary.suggestion, STEADY_SUGGESTION);
    }

    #[test]
    fn ties_go_to_the_most_recently_logged() {
        let log = log_of(&[
            Emotion::Sadness,
            Emotion::Happiness,
            Emotion::Sadness,
            Emotion::Happiness,
        ]);
        let summary = log.summarize().expect("summary");
        assert_eq!(summary.dominant, Emotion::Happiness);
    }

    #[test]
    fn append_preserves_order() {
        let log = log_of(&[Emotion::Anger, Emotion::Neutral]);
        assert_eq!(log.entries(), &[Emotion::Anger, Emotion::Neutral]);
        assert_eq!(log.len(), 2);
        assert!(!log.is_empty());
    }
}
