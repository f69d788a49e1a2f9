/*
 * @file emotion.rs
 * @brief Emotion keyword rules and classification logic
 * @author Team CodeSlayers
 * @date 2025
 *
 * MIT License
 *
 * Copyright (c) 2025 Team CodeSlayers
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Emotion keyword configuration and classification for utterance text.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;

/// Path to the emotion rules configuration file.
const RULES_FILE: &str = "emotions.json";

/// The five emotion labels MyCare+ assigns to an utterance.
///
/// # Details
/// Every utterance maps to exactly one label. `Neutral` is the fallback
/// when no configured keyword matches, so classification is total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Sadness,
    Anger,
    Stress,
    Happiness,
    Neutral,
}

/// Display implementation producing the lowercase wire/UI label.
impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Stress => "stress",
            Emotion::Happiness => "happiness",
            Emotion::Neutral => "neutral",
        };
        write!(f, "{}", label)
    }
}

/// A single emotion rule configuration.
///
/// # Details
/// Maps a list of trigger keywords to the emotion they indicate. Rules are
/// evaluated in the order they appear in the configuration, so earlier rules
/// take priority when an utterance matches more than one.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmotionRule {
    /// The emotion this rule detects.
    pub emotion: Emotion,
    /// Lowercase keywords whose presence triggers this rule.
    pub keywords: Vec<String>,
}

/// Container for the ordered emotion rule list.
///
/// # Details
/// Loaded from emotions.json and consumed by [`classify`]. Keeping the
/// rules as data means new keywords or emotions never touch control flow.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmotionRules {
    /// Ordered rules; position defines match priority.
    pub rules: Vec<EmotionRule>,
}

/// Loads emotion rules from emotions.json.
///
/// # Details
/// Reads and parses the rules file from the current directory. Returns the
/// built-in default rules if the file doesn't exist or cannot be parsed.
///
/// # Arguments
/// None.
///
/// # Returns
/// * `EmotionRules` - Loaded or default rule configuration.
pub fn load_rules() -> EmotionRules {
    load_rules_from_file().unwrap_or_else(|err| {
        eprintln!(
            "Warning: Failed to load {}: {}. Using default emotion rules.",
            RULES_FILE, err
        );
        default_rules()
    })
}

/// Loads rules from the JSON file.
///
/// # Details
/// Attempts to read and parse emotions.json. Returns an error if the file
/// is missing or contains invalid JSON.
///
/// # Arguments
/// None.
///
/// # Returns
/// * `Ok(EmotionRules)` - Successfully parsed configuration.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
fn load_rules_from_file() -> Result<EmotionRules> {
    let content =
        fs::read_to_string(RULES_FILE).with_context(|| format!("Failed to read {}", RULES_FILE))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", RULES_FILE))
}

/// Provides the built-in rules when emotions.json is unavailable.
///
/// # Details
/// Returns the hardcoded keyword lists in priority order: sadness is
/// checked before anger, anger before stress, stress before happiness.
///
/// # Arguments
/// None.
///
/// # Returns
/// * `EmotionRules` - Default keyword configuration.
pub fn default_rules() -> EmotionRules {
    EmotionRules {
        rules: vec![
            rule(Emotion::Sadness, &["sad", "upset", "depressed", "lonely"]),
            rule(Emotion::Anger, &["angry", "mad", "furious"]),
            rule(Emotion::Stress, &["stressed", "nervous", "worried"]),
            rule(Emotion::Happiness, &["happy", "great", "excited", "good"]),
        ],
    }
}

/// Builds one rule from a static keyword slice.
fn rule(emotion: Emotion, keywords: &[&str]) -> EmotionRule {
    EmotionRule {
        emotion,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

/// Classifies an utterance into one of the five emotion labels.
///
/// # Details
/// Lowercases the text and walks the configured rules in order, returning
/// the emotion of the first rule whose keyword appears as a substring.
/// Falls back to [`Emotion::Neutral`] when nothing matches, so the function
/// is total over every input including the empty string.
///
/// # Arguments
/// * `rules` - The ordered rule configuration to match against.
/// * `text` - The utterance to classify; case is irrelevant.
///
/// # Returns
/// * `Emotion` - The first matching rule's emotion, or `Neutral`.
pub fn classify(rules: &EmotionRules, text: &str) -> Emotion {
    let normalized = text.to_lowercase();
    rules
        .rules
        .iter()
        .find(|rule| {
            rule.keywords
                .iter()
                .any(|keyword| normalized.contains(keyword.as_str()))
        })
        .map(|rule| rule.emotion)
        .unwrap_or(Emotion::Neutral)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sadness_keyword_classifies_as_sadness() {
        let rules = default_rules();
        assert_eq!(classify(&rules, "I feel so lonely tonight"), Emotion::Sadness);
        assert_eq!(classify(&rules, "bit upset about the news"), Emotion::Sadness);
    }

    #[test]
    fn classification_is_case_insensitive() {
        let rules = default_rules();
        assert_eq!(classify(&rules, "I AM FURIOUS"), Emotion::Anger);
        assert_eq!(classify(&rules, "Feeling Great today"), Emotion::Happiness);
    }

    #[test]
    fn sadness_wins_over_anger_by_rule_order() {
        let rules = default_rules();
        assert_eq!(classify(&rules, "I am SAD and ANGRY"), Emotion::Sadness);
    }

    #[test]
    fn sadness_wins_over_happiness_by_rule_order() {
        let rules = default_rules();
        assert_eq!(classify(&rules, "happy but depressed underneath"), Emotion::Sadness);
    }

    #[test]
    fn unmatched_text_falls_back_to_neutral() {
        let rules = default_rules();
        assert_eq!(classify(&rules, "the weather is mild"), Emotion::Neutral);
        assert_eq!(classify(&rules, ""), Emotion::Neutral);
    }

    #[test]
    fn stress_keywords_classify_as_stress() {
        let rules = default_rules();
        assert_eq!(classify(&rules, "so nervous about tomorrow"), Emotion::Stress);
    }

    #[test]
    fn labels_render_lowercase() {
        assert_eq!(Emotion::Sadness.to_string(), "sadness");
        assert_eq!(Emotion::Neutral.to_string(), "neutral");
    }
}
