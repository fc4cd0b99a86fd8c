//! Answer recording module
//!
//! Owns the per-question capture state machine: acquiring the microphone,
//! starting/stopping capture, producing one WAV artifact per question, and
//! gating navigation and submission on recording progress.

mod controller;
mod mic;

pub use controller::{AnswerSubmission, CapturePhase, InterviewRecorder, MicState, RecorderConfig};
pub use mic::MicCapture;

use anyhow::Result;
use std::path::Path;

use crate::config::Settings;

/// Unified answer capture backend
///
/// Abstracts over the real microphone backend and test doubles. Only one
/// capture session may be active at a time.
pub trait AnswerCapture {
    /// Check that an input device can be acquired (the permission probe)
    fn available(&self) -> Result<()>;

    /// Start capturing audio to the specified WAV path
    fn start(&mut self, output_path: &Path) -> Result<()>;

    /// Stop capturing and finalize the file
    fn stop(&mut self) -> Result<()>;

    /// Check if currently recording
    fn is_recording(&self) -> bool;

    /// Get capture backend name for logging
    fn backend_name(&self) -> &'static str;
}

/// Create the production capture backend
pub fn create_capture(settings: &Settings) -> Result<Box<dyn AnswerCapture>> {
    Ok(Box::new(MicCapture::new(settings)?))
}
