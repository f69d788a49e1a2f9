//! Placeholder health-insights data for the display surface.
//!
//! Nothing here reflects measured data. The snapshot is a stand-in the
//! presentation layer renders until real trend tracking exists.

use rand::Rng;

/// Labels for the weekly emotion-pattern chart.
const PATTERN_LABELS: [&str; 4] = ["Happy", "Neutral", "Sad", "Angry"];

/// Inclusive lower bound for stubbed intensity values.
const INTENSITY_MIN: u32 = 10;

/// Exclusive upper bound for stubbed intensity values.
const INTENSITY_MAX: u32 = 100;

/// One labeled bar in the emotion-pattern chart.
#[derive(Clone, Debug)]
pub struct PatternBar {
    /// Emotion label shown under the bar.
    pub label: &'static str,
    /// Stubbed intensity value in [10, 100).
    pub intensity: u32,
}

/// One fixed metric card on the insights page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricCard {
    /// Card title, e.g. "Heart Rate".
    pub title: &'static str,
    /// Current reading shown on the card.
    pub value: &'static str,
    /// Trend caption shown under the value.
    pub delta: &'static str,
}

/// Snapshot of everything the insights page displays.
#[derive(Clone, Debug)]
pub struct InsightsSnapshot {
    /// Four emotion-intensity bars with placeholder values.
    pub pattern: Vec<PatternBar>,
    /// The three fixed metric cards.
    pub metrics: Vec<MetricCard>,
}

impl InsightsSnapshot {
    /// Generates a fresh placeholder snapshot.
    ///
    /// # Details
    /// Intensities are drawn uniformly from [10, 100) on every call; the
    /// metric cards never change. Both are explicitly canned values, not
    /// measurements.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let pattern = PATTERN_LABELS
            .iter()
            .map(|&label| PatternBar {
                label,
                intensity: rng.gen_range(INTENSITY_MIN..INTENSITY_MAX),
            })
            .collect();
        Self {
            pattern,
            metrics: metric_cards(),
        }
    }
}

/// Returns the three fixed metric cards.
fn metric_cards() -> Vec<MetricCard> {
    vec![
        MetricCard {
            title: "Heart Rate",
            value: "76 bpm",
            delta: "+3 steady",
        },
        MetricCard {
            title: "Stress Index",
            value: "Low",
            delta: "-12% this week",
        },
        MetricCard {
            title: "Sleep Quality",
            value: "Good",
            delta: "+8% improvement",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_has_four_labeled_bars() {
        let snapshot = InsightsSnapshot::generate();
        let labels: Vec<_> = snapshot.pattern.iter().map(|bar| bar.label).collect();
        assert_eq!(labels, vec!["Happy", "Neutral", "Sad", "Angry"]);
    }

    #[test]
    fn intensities_stay_in_range() {
        for _ in 0..32 {
            let snapshot = InsightsSnapshot::generate();
            for bar in &snapshot.pattern {
                assert!((INTENSITY_MIN..INTENSITY_MAX).contains(&bar.intensity));
            }
        }
    }

    #[test]
    fn metric_cards_are_fixed() {
        let snapshot = InsightsSnapshot::generate();
        assert_eq!(snapshot.metrics.len(), 3);
        assert_eq!(snapshot.metrics[0].title, "Heart Rate");
        assert_eq!(snapshot.metrics[0].value, "76 bpm");
        assert_eq!(snapshot.metrics[1].delta, "-12% this week");
        assert_eq!(snapshot.metrics[2].title, "Sleep Quality");
    }
}
