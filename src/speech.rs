//! Text-to-speech of the fixed supportive phrases.

use std::sync::Mutex;

use anyhow::Result;

use crate::emotion::Emotion;

/// Returns the supportive phrase spoken for a detected emotion.
pub fn support_phrase(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Sadness => "You sound sad. Take a deep breath, it's going to be okay.",
        Emotion::Anger | Emotion::Stress => {
            "Feeling tense? Remember, calm minds solve problems better."
        }
        _ => "You seem fine today. Keep that positive energy flowing!",
    }
}

/// Builds the spoken reminder for an identified medicine.
pub fn reminder_phrase(medicine: &str) -> String {
    format!("Medicine identified as {}. Reminder set for 8 PM.", medicine)
}

/// Speaks text best-effort, swallowing any synthesis failure.
///
/// A busy or broken engine is logged to stderr and otherwise ignored; it is
/// never retried and never surfaced to the caller.
pub fn notify(text: &str) {
    if let Err(err) = speak(text) {
        eprintln!("TTS error: {}", err);
    }
}

/// Speaks the given text using the platform `say` command.
///
/// # Parameters
/// * `text` - The utterance to synthesize.
///
/// # Returns
/// `Ok(())` when the `say` command completes successfully.
///
/// # Errors
/// Returns an error if the `say` command fails to spawn or exits unexpectedly.
pub fn speak(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        anyhow::bail!("Cannot speak empty text");
    }
    run_say(text)?;
    Ok(())
}

fn run_say(text: &str) -> Result<()> {
    if cfg!(test) {
        if *FORCE_ERROR.lock().unwrap() {
            anyhow::bail!("Forced failure for testing");
        }
        return Ok(());
    }

    std::process::Command::new("say").arg(text).output()?;
    Ok(())
}

#[cfg_attr(not(test), allow(dead_code))]
static FORCE_ERROR: Mutex<bool> = Mutex::new(false);
