/*
 * @file lib.rs
 * @brief MyCare+ library root
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

//! MyCare+ — a voice-driven health companion.
//!
//! One session at a time, the companion:
//! - listens to the user and classifies the utterance into one of five
//!   emotion labels via configurable keyword rules,
//! - keeps an append-only mood history and summarizes the dominant emotion
//!   once three entries exist,
//! - keeps a bounded (three most recent) log of identified medicines,
//! - speaks fixed supportive phrases best-effort.
//!
//! Tablet identification and the health-insights numbers are explicitly
//! stubbed collaborators; nothing in them reflects measured data.
//!
//! # Example
//! ```no_run
//! use anyhow::Result;
//! use mycare::companion;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     dotenv::dotenv().ok();
//!     companion::run_companion().await
//! }
//! ```

pub mod audio;
pub mod companion;
pub mod emotion;
pub mod insights;
pub mod medicine;
pub mod mood;
pub mod recognition;
pub mod session;
pub mod speech;
