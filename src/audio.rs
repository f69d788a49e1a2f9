/*
 * @file audio.rs
 * @brief Microphone capture and WAV helpers for MyCare+
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

//! Fixed-duration microphone capture using CPAL and WAV file writing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, Stream, StreamConfig, StreamError};
use hound::{WavSpec, WavWriter};

/// Sample rate for voice capture (44.1 kHz).
///
/// Matches the rate the recognition service expects for uploaded clips.
const SAMPLE_RATE: u32 = 44_100;

/// Number of audio channels (mono).
///
/// One channel keeps uploads small; the recognition service downmixes anyway.
const CHANNELS: u16 = 1;

/// Bits per sample for WAV encoding.
const BITS_PER_SAMPLE: u16 = 16;

/// Length of each listening window.
///
/// The user speaks for a fixed five seconds per interaction.
const RECORD_DURATION: Duration = Duration::from_secs(5);

/// Records one fixed-length clip from the default input device.
///
/// # Details
/// Opens the default microphone, accumulates converted 16-bit samples in a
/// shared buffer for the full listening window, then tears the stream down.
///
/// # Returns
/// * `Vec<i16>` - The captured PCM samples.
///
/// # Errors
/// Returns an error if no input device exists, the stream cannot be built,
/// or playback fails to start.
pub fn record_clip() -> Result<Vec<i16>> {
    let device = default_input_device()?;
    let config = capture_config();
    let samples = Arc::new(Mutex::new(Vec::new()));
    let stream = build_capture_stream(&device, &config, samples.clone())?;
    stream.play()?;
    std::thread::sleep(RECORD_DURATION);
    drop(stream);
    let captured = samples.lock().unwrap().clone();
    Ok(captured)
}

/// Writes captured samples to a WAV file.
///
/// # Arguments
/// * `path` - Destination path for the WAV file.
/// * `samples` - Signed 16-bit PCM frames to persist.
///
/// # Returns
/// * `Ok(())` - File written and finalized.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn save_wav(path: &str, samples: &[i16]) -> Result<()> {
    let spec = WavSpec {
        channels: CHANNELS,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Locates the system default input device.
///
/// # Errors
/// Returns an error when no microphone is available.
fn default_input_device() -> Result<Device> {
    cpal::default_host()
        .default_input_device()
        .ok_or_else(|| anyhow::anyhow!("No input device"))
}

/// Builds the CPAL stream configuration for voice capture.
///
/// # Returns
/// * `StreamConfig` - Mono, 44.1 kHz, default buffering.
fn capture_config() -> StreamConfig {
    StreamConfig {
        channels: CHANNELS,
        sample_rate: cpal::SampleRate(SAMPLE_RATE),
        buffer_size: cpal::BufferSize::Default,
    }
}

/// Builds the CPAL input stream feeding the shared sample buffer.
///
/// # Arguments
/// * `device` - The input device to capture from.
/// * `config` - Channel/rate/buffer configuration.
/// * `samples` - Shared buffer receiving converted samples.
///
/// # Errors
/// Returns stream-construction failures wrapped in [`anyhow::Error`].
fn build_capture_stream(
    device: &Device,
    config: &StreamConfig,
    samples: Arc<Mutex<Vec<i16>>>,
) -> Result<Stream> {
    let shared = samples.clone();
    device
        .build_input_stream(
            config,
            move |data: &[f32], _: &_| push_samples(&shared, data),
            log_stream_error,
            None,
        )
        .map_err(|err| anyhow::anyhow!(err))
}

/// Converts floating-point frames to 16-bit PCM and appends them.
///
/// # Arguments
/// * `buffer` - Shared sample accumulator.
/// * `data` - Latest frames delivered by CPAL.
fn push_samples(buffer: &Arc<Mutex<Vec<i16>>>, data: &[f32]) {
    let mut guard = buffer.lock().unwrap();
    for &sample in data {
        guard.push((sample * i16::MAX as f32) as i16);
    }
}

/// Logs recoverable stream errors emitted by CPAL.
fn log_stream_error(error: StreamError) {
    eprintln!("Audio stream error: {}", error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    #[test]
    fn capture_config_matches_constants() {
        let config = capture_config();
        assert_eq!(config.channels, CHANNELS);
        assert_eq!(config.sample_rate.0, SAMPLE_RATE);
    }

    #[test]
    fn push_samples_converts_floats() {
        let samples = Arc::new(Mutex::new(Vec::new()));
        push_samples(&samples, &[0.0, 0.5, -1.0]);
        let guard = samples.lock().unwrap();
        assert_eq!(guard.len(), 3);
        assert_eq!(guard[0], 0);
        assert!(guard[1] > 0);
        assert!(guard[2] < 0);
    }

    #[test]
    fn save_wav_writes_file() {
        let temp_path = std::env::temp_dir().join("mycare_audio_test.wav");
        let temp_str = temp_path.to_string_lossy().to_string();
        let samples = vec![0_i16, i16::MAX / 2, -i16::MAX / 2];
        save_wav(&temp_str, &samples).expect("save wav");
        assert!(Path::new(&temp_str).exists());
        fs::remove_file(temp_path).ok();
    }
}
