//! Cloud speech-recognition client.
//!
//! Uploads a captured WAV clip to the recognition service and returns the
//! transcript. Exactly two recoverable failures exist: the service heard
//! nothing usable, or the service could not be reached at all. Both are
//! reported to the user and neither ends the session.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Request timeout for one recognition call.
const RECOGNITION_TIMEOUT: Duration = Duration::from_secs(15);

/// Recoverable failures from the recognition collaborator.
#[derive(Debug, Error)]
pub enum RecognitionError {
    /// The service responded but produced no usable transcript.
    #[error("speech not recognized")]
    Unrecognized,
    /// Transport or backend failure; the service never answered usefully.
    #[error("recognition service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl RecognitionError {
    /// Returns the fixed user-facing message for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            RecognitionError::Unrecognized => "Could not understand your voice.",
            RecognitionError::ServiceUnavailable(_) => "Speech recognition service unavailable.",
        }
    }
}

/// Response body returned by the recognition endpoint.
#[derive(Deserialize)]
struct RecognitionResponse {
    transcript: String,
}

/// HTTP client for the speech-recognition service.
///
/// # Details
/// Thin wrapper over [`reqwest::Client`] bound to one endpoint URL. The
/// client is cheap to clone and reused across every loop iteration.
pub struct RecognitionClient {
    client: reqwest::Client,
    endpoint: String,
}

impl RecognitionClient {
    /// Creates a client bound to the given recognition endpoint.
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the transcription service.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Transcribes a captured WAV file.
    ///
    /// # Details
    /// Reads the clip from disk, posts it to the recognition endpoint, and
    /// extracts the transcript from the JSON response. An unreadable file,
    /// connection failure, or non-success status maps to
    /// [`RecognitionError::ServiceUnavailable`]; an empty transcript maps to
    /// [`RecognitionError::Unrecognized`].
    ///
    /// # Arguments
    /// * `audio_path` - Path to the WAV clip to transcribe.
    ///
    /// # Returns
    /// * `String` - The trimmed transcript.
    ///
    /// # Errors
    /// One of the two [`RecognitionError`] kinds.
    pub async fn transcribe(&self, audio_path: &str) -> Result<String, RecognitionError> {
        let payload = std::fs::read(audio_path)
            .map_err(|err| RecognitionError::ServiceUnavailable(err.to_string()))?;
        let response = self
            .client
            .post(&self.endpoint)
            .timeout(RECOGNITION_TIMEOUT)
            .header(reqwest::header::CONTENT_TYPE, "audio/wav")
            .body(payload)
            .send()
            .await
            .map_err(|err| RecognitionError::ServiceUnavailable(err.to_string()))?;
        if !response.status().is_success() {
            return Err(RecognitionError::ServiceUnavailable(format!(
                "status {}",
                response.status()
            )));
        }
        let body: RecognitionResponse = response
            .json()
            .await
            .map_err(|err| RecognitionError::ServiceUnavailable(err.to_string()))?;
        extract_transcript(&body.transcript)
    }
}

/// Validates and trims a raw transcript.
///
/// # Details
/// A blank transcript means the service heard nothing it could use, which
/// is the unrecognized-speech case rather than an outage.
///
/// # Arguments
/// * `raw` - The transcript field from the service response.
///
/// # Returns
/// * `Ok(String)` - The trimmed transcript.
///
/// # Errors
/// [`RecognitionError::Unrecognized`] when the transcript is blank.
fn extract_transcript(raw: &str) -> Result<String, RecognitionError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RecognitionError::Unrecognized);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_is_trimmed() {
        let text = extract_transcript("  I feel great  ").expect("transcript");
        assert_eq!(text, "I feel great");
    }

    #[test]
    fn blank_transcript_is_unrecognized() {
        assert!(matches!(
            extract_transcript("   "),
            Err(RecognitionError::Unrecognized)
        ));
        assert!(matches!(
            extract_transcript(""),
            Err(RecognitionError::Unrecognized)
        ));
    }

    #[test]
    fn user_messages_match_the_two_failure_kinds() {
        assert_eq!(
            RecognitionError::Unrecognized.user_message(),
            "Could not understand your voice."
        );
        assert_eq!(
            RecognitionError::ServiceUnavailable("timeout".into()).user_message(),
            "Speech recognition service unavailable."
        );
    }

    #[tokio::test]
    async fn missing_audio_file_is_service_unavailable() {
        let client = RecognitionClient::new("http://localhost:9/recognize");
        let result = client.transcribe("/nonexistent/mycare_clip.wav").await;
        assert!(matches!(
            result,
            Err(RecognitionError::ServiceUnavailable(_))
        ));
    }
}
