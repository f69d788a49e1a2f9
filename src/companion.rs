/*
 * @file companion.rs
 * @brief Implementation of the MyCare+ session loop
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

//! Session-driven companion loop: listen, classify, log, respond.

use crate::audio::{record_clip, save_wav};
use crate::emotion::{self, EmotionRules};
use crate::insights::InsightsSnapshot;
use crate::medicine::{CatalogIdentifier, TabletIdentifier};
use crate::mood::MoodSummary;
use crate::recognition::RecognitionClient;
use crate::session::Session;
use crate::speech::{notify, reminder_phrase, support_phrase};
use anyhow::Result;
use serde::Deserialize;
use std::{env, fs, time::Duration};

/// Temporary file used for passing captured audio to the recognizer.
///
/// The file lives only for the duration of a single loop iteration and is
/// removed automatically by [`TempWavGuard`].
const TEMP_AUDIO_PATH: &str = "temp_audio.wav";

/// Delay inserted before each recording so the listener has time to prepare.
const PRE_RECORD_DELAY: Duration = Duration::from_millis(200);

/// Minimum RMS amplitude considered speech.
///
/// Values much above ~300 miss normal speaking levels on some microphones,
/// so the threshold stays low and the recognizer filters the rest.
const SILENCE_RMS_THRESHOLD: f32 = 150.0;

/// Path to the JSON configuration file that holds runtime defaults.
const CONFIG_PATH: &str = "config.json";

/// Default recognition endpoint used when no config exists.
const FALLBACK_RECOGNITION_URL: &str = "http://localhost:8085/v1/recognize";

/// Strongly typed representation of `config.json`.
#[derive(Clone, Deserialize)]
struct AppConfig {
    #[serde(default = "fallback_recognition_url")]
    default_recognition_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_recognition_url: fallback_recognition_url(),
        }
    }
}

/// Runs the voice-driven companion loop until the user says a quit phrase.
///
/// The loop records microphone input, transcribes it via the recognition
/// service, routes the utterance to the mood, tablet-scan, or insights
/// workflow, and speaks the fixed supportive responses.
///
/// # Returns
/// `Ok(())` when the user issues a quit command.
///
/// # Errors
/// Returns an error only if the runtime fails to initialize before the loop
/// starts; everything inside an iteration is recoverable.
pub async fn run_companion() -> Result<()> {
    CompanionRuntime::new().run_loop().await
}

/// Cleans up temporary files created during operation.
///
/// Safe to call multiple times; a missing file is not an error.
pub fn cleanup_temp_files() {
    cleanup_temp_file();
}

/// Runtime container that owns the collaborators and session state.
///
/// # Details
/// Holds the recognition client, the keyword rules, the tablet-identifier
/// stub, and the single [`Session`] this run serves. The session is created
/// empty at startup and dropped with the runtime; no state outlives it.
pub struct CompanionRuntime {
    recognizer: RecognitionClient,
    rules: EmotionRules,
    identifier: Box<dyn TabletIdentifier>,
    session: Session,
}

impl CompanionRuntime {
    /// Creates a runtime with a fresh session and loaded configuration.
    pub fn new() -> Self {
        let config = load_app_config();
        Self {
            recognizer: RecognitionClient::new(recognition_endpoint(&config)),
            rules: emotion::load_rules(),
            identifier: Box::new(CatalogIdentifier),
            session: Session::new(),
        }
    }

    /// Continuously runs the companion until a quit phrase is detected.
    ///
    /// # Errors
    /// Bubbles up fatal errors from the audio setup path.
    async fn run_loop(mut self) -> Result<()> {
        while self.process_iteration().await? {}
        println!("Take care! MyCare+ session ended.");
        Ok(())
    }

    /// Executes one listen-transcribe-route iteration.
    ///
    /// # Returns
    /// * `Ok(true)` to keep looping, `Ok(false)` to exit gracefully.
    ///
    /// # Errors
    /// Surfaces only unrecoverable setup failures.
    async fn process_iteration(&mut self) -> Result<bool> {
        announce_listening();
        let samples = match Self::capture_samples()? {
            Some(data) => data,
            None => return Ok(true),
        };
        if !Self::contains_speech(&samples) {
            return Ok(true);
        }
        if !Self::persist_samples(&samples) {
            return Ok(true);
        }
        let _guard = TempWavGuard::new();
        match self.recognizer.transcribe(TEMP_AUDIO_PATH).await {
            Ok(text) => Ok(self.handle_user_text(&text)),
            Err(err) => {
                eprintln!("❌ {}", err.user_message());
                Ok(true)
            }
        }
    }

    /// Captures microphone input and reports recoverable errors.
    ///
    /// # Returns
    /// * `Ok(Some(samples))` when recording succeeds.
    /// * `Ok(None)` when recording fails but the loop should continue.
    fn capture_samples() -> Result<Option<Vec<i16>>> {
        match record_clip() {
            Ok(data) => Ok(Some(data)),
            Err(err) => {
                eprintln!("❌ Microphone error: {}", err);
                Ok(None)
            }
        }
    }

    /// Persists captured samples to the temporary WAV file.
    ///
    /// # Returns
    /// `true` when writing succeeds; `false` when the iteration should be
    /// skipped.
    fn persist_samples(samples: &[i16]) -> bool {
        match save_wav(TEMP_AUDIO_PATH, samples) {
            Ok(_) => true,
            Err(err) => {
                eprintln!("Save error: {}", err);
                false
            }
        }
    }

    /// Detects whether samples contain meaningful speech content.
    ///
    /// # Details
    /// Compares the RMS energy of the clip against a threshold so silent
    /// recordings never reach the recognition service.
    fn contains_speech(samples: &[i16]) -> bool {
        if samples.is_empty() {
            return false;
        }
        let energy = samples
            .iter()
            .map(|sample| (*sample as f32).powi(2))
            .sum::<f32>()
            / samples.len() as f32;
        energy.sqrt() >= SILENCE_RMS_THRESHOLD
    }

    /// Routes a transcribed utterance to the right workflow.
    ///
    /// # Details
    /// Quit phrases end the loop; a scan request runs the tablet workflow;
    /// an insights request prints the placeholder dashboard; everything else
    /// is treated as the user talking about their day and feeds the mood
    /// workflow.
    ///
    /// # Returns
    /// `true` to continue looping, `false` to exit.
    fn handle_user_text(&mut self, user_text: &str) -> bool {
        println!("🗣️ You said: {}", user_text);
        if should_quit(user_text) {
            return false;
        }
        if wants_tablet_scan(user_text) {
            self.scan_tablet(&[]);
            return true;
        }
        if wants_insights(user_text) {
            show_insights();
            return true;
        }
        self.record_mood(user_text);
        true
    }

    /// Classifies an utterance, logs the emotion, and responds supportively.
    ///
    /// # Details
    /// The detected emotion is appended to the session's mood log, the fixed
    /// supportive phrase is spoken best-effort, and once three emotions have
    /// accumulated the mood summary is printed after every interaction.
    fn record_mood(&mut self, user_text: &str) {
        let detected = emotion::classify(&self.rules, user_text);
        self.session.moods.append(detected);
        println!("💭 Detected Emotion: {}", detected.to_string().to_uppercase());
        notify(support_phrase(detected));
        if let Some(summary) = self.session.moods.summarize() {
            print_summary(&summary);
        }
    }

    /// Runs the tablet-scan workflow against the identification stub.
    ///
    /// # Details
    /// The identified name goes into the bounded medicine log (oldest entry
    /// evicted beyond three), the reminder is spoken best-effort, and the
    /// recent list is printed most-recent-first.
    ///
    /// # Arguments
    /// * `image` - Captured still image handed over by the presentation layer.
    fn scan_tablet(&mut self, image: &[u8]) {
        let medicine = self.identifier.identify(image);
        println!("✓ Identified Medicine: {}", medicine);
        println!("⏰ Reminder: Take your medicine at 8:00 PM daily.");
        notify(&reminder_phrase(&medicine));
        self.session.medicines.record(medicine);
        println!("Recently Scanned Medicines:");
        for name in self.session.medicines.recent() {
            println!("- 💊 {}", name);
        }
    }

    /// Returns a read-only view of the session for display consumers.
    pub fn session(&self) -> &Session {
        &self.session
    }
}

/// Prints the mood summary block.
fn print_summary(summary: &MoodSummary) {
    println!("--- Mood Summary ---");
    println!(
        "You've been mostly feeling {} today.",
        summary.dominant.to_string().to_uppercase()
    );
    println!("Suggestion: {}", summary.suggestion);
}

/// Prints the placeholder insights dashboard.
fn show_insights() {
    let snapshot = InsightsSnapshot::generate();
    println!("--- Emotion Pattern (Weekly) ---");
    for bar in &snapshot.pattern {
        println!("{:<8} {}", bar.label, "█".repeat((bar.intensity / 5) as usize));
    }
    for card in &snapshot.metrics {
        println!("{}: {} ({})", card.title, card.value, card.delta);
    }
}

/// RAII guard that removes the temporary WAV file at scope exit.
struct TempWavGuard;

impl TempWavGuard {
    /// Creates a guard instance; cleanup happens in `Drop`.
    fn new() -> Self {
        Self
    }
}

impl Drop for TempWavGuard {
    /// Ensures the temp file is always removed, even on early returns.
    fn drop(&mut self) {
        cleanup_temp_file();
    }
}

/// Injects a short pause so the user has time to prepare before recording.
fn announce_listening() {
    println!("🎙️ Listening... please speak for 5 seconds.");
    std::thread::sleep(PRE_RECORD_DELAY);
}

/// Removes the temporary audio file, ignoring any failure.
fn cleanup_temp_file() {
    fs::remove_file(TEMP_AUDIO_PATH).ok();
}

/// Determines whether the user has asked to end the session.
///
/// # Details
/// Substring check over the lowercased utterance, so "please quit" also
/// triggers an exit.
fn should_quit(user_text: &str) -> bool {
    let normalized = user_text.to_lowercase();
    ["quit", "exit", "goodbye", "bye"]
        .iter()
        .any(|word| normalized.contains(word))
}

/// Determines whether the user asked to scan a tablet.
fn wants_tablet_scan(user_text: &str) -> bool {
    let normalized = user_text.to_lowercase();
    normalized.contains("scan") || normalized.contains("tablet")
}

/// Determines whether the user asked for the health insights view.
fn wants_insights(user_text: &str) -> bool {
    let normalized = user_text.to_lowercase();
    normalized.contains("insight") || normalized.contains("health report")
}

/// Loads configuration from `config.json`, falling back to baked defaults.
///
/// # Details
/// Missing or invalid files log the problem and yield the defaults so the
/// companion always starts.
fn load_app_config() -> AppConfig {
    match fs::read_to_string(CONFIG_PATH) {
        Ok(raw) => match serde_json::from_str(&raw) {
            Ok(cfg) => cfg,
            Err(err) => {
                eprintln!("Config parse error ({}): {}", CONFIG_PATH, err);
                AppConfig::default()
            }
        },
        Err(_) => AppConfig::default(),
    }
}

/// Determines the recognition endpoint from environment or configuration.
///
/// # Details
/// `MYCARE_RECOGNITION_URL` wins over the config-file value, which in turn
/// wins over the baked-in default.
fn recognition_endpoint(config: &AppConfig) -> String {
    env::var("MYCARE_RECOGNITION_URL").unwrap_or_else(|_| config.default_recognition_url.clone())
}

/// Returns the hardcoded fallback recognition endpoint.
///
/// Exists to satisfy serde's default attribute requirements.
fn fallback_recognition_url() -> String {
    FALLBACK_RECOGNITION_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion::Emotion;
    use std::fs::File;
    use std::path::Path;
    use std::sync::Mutex;

    static TEMP_FILE_LOCK: Mutex<()> = Mutex::new(());

    fn test_runtime() -> CompanionRuntime {
        CompanionRuntime {
            recognizer: RecognitionClient::new(FALLBACK_RECOGNITION_URL),
            rules: emotion::default_rules(),
            identifier: Box::new(CatalogIdentifier),
            session: Session::new(),
        }
    }

    #[test]
    fn quit_detection_understands_variants() {
        assert!(should_quit("Please quit now"));
        assert!(should_quit("can you EXIT"));
        assert!(should_quit("goodbye for today"));
        assert!(!should_quit("keep going"));
    }

    #[test]
    fn scan_and_insights_triggers_are_detected() {
        assert!(wants_tablet_scan("please scan my tablet"));
        assert!(wants_tablet_scan("Tablet check"));
        assert!(!wants_tablet_scan("I feel sad"));
        assert!(wants_insights("show my insights"));
        assert!(wants_insights("give me a health report"));
        assert!(!wants_insights("I am happy"));
    }

    #[test]
    fn cleanup_removes_temp_file() {
        let _guard = TEMP_FILE_LOCK.lock().unwrap();
        File::create(TEMP_AUDIO_PATH).expect("create temp file");
        assert!(Path::new(TEMP_AUDIO_PATH).exists());
        cleanup_temp_file();
        assert!(!Path::new(TEMP_AUDIO_PATH).exists());
    }

    #[test]
    fn guard_drops_temp_file() {
        let _guard = TEMP_FILE_LOCK.lock().unwrap();
        File::create(TEMP_AUDIO_PATH).expect("create temp file");
        {
            let _temp_guard = TempWavGuard::new();
        }
        assert!(!Path::new(TEMP_AUDIO_PATH).exists());
    }

    #[test]
    fn persist_samples_writes_audio() {
        let _guard = TEMP_FILE_LOCK.lock().unwrap();
        let samples = vec![0_i16, i16::MAX / 4, -i16::MAX / 4];
        assert!(CompanionRuntime::persist_samples(&samples));
        assert!(Path::new(TEMP_AUDIO_PATH).exists());
        cleanup_temp_file();
    }

    #[test]
    fn contains_speech_requires_energy() {
        assert!(!CompanionRuntime::contains_speech(&[0_i16; 1600]));
        let loud = vec![i16::MAX / 2; 1600];
        assert!(CompanionRuntime::contains_speech(&loud));
    }

    #[test]
    fn mood_utterances_feed_the_session_log() {
        let mut runtime = test_runtime();
        assert!(runtime.handle_user_text("I am so happy today"));
        assert!(runtime.handle_user_text("still happy and excited"));
        assert_eq!(runtime.session().moods.len(), 2);
        assert_eq!(
            runtime.session().moods.entries(),
            &[Emotion::Happiness, Emotion::Happiness]
        );
    }

    #[test]
    fn summary_appears_after_three_moods() {
        let mut runtime = test_runtime();
        runtime.record_mood("I feel sad");
        runtime.record_mood("still depressed");
        assert!(runtime.session().moods.summarize().is_none());
        runtime.record_mood("happy for a moment");
        let summary = runtime.session().moods.summarize().expect("summary");
        assert_eq!(summary.dominant, Emotion::Sadness);
    }

    #[test]
    fn scan_requests_fill_the_medicine_log() {
        let mut runtime = test_runtime();
        for _ in 0..4 {
            assert!(runtime.handle_user_text("scan my tablet please"));
        }
        assert_eq!(runtime.session().medicines.len(), 3);
    }

    #[test]
    fn quit_text_does_not_touch_the_logs() {
        let mut runtime = test_runtime();
        assert!(!runtime.handle_user_text("goodbye"));
        assert!(runtime.session().moods.is_empty());
        assert!(runtime.session().medicines.is_empty());
    }
}
