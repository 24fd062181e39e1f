/// Tone scheduling capability
///
/// The engine decides what to play and at which gain; a backend only turns
/// those decisions into sound. Swapping the backend lets the game run
/// headless or under test with the same engine logic.
use std::sync::Arc;

use parking_lot::Mutex;

use super::tone::{ToneSegment, Waveform};
use crate::error::AudioError;

pub trait ToneBackend {
    /// Backend name for logs
    fn name(&self) -> &'static str;

    /// Play one tone segment, offset from now by `segment.start_ms`
    fn schedule_tone(&mut self, segment: &ToneSegment, gain: f32) -> Result<(), AudioError>;

    /// Start the ambient tone at zero gain
    fn start_ambient(&mut self, frequency: f32, waveform: Waveform) -> Result<(), AudioError>;

    /// Glide the ambient gain toward `target`
    fn ramp_ambient(&mut self, target: f32);

    /// Stop and release the ambient tone
    fn stop_ambient(&mut self);
}

/// Backend for environments without audio output
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentBackend;

impl ToneBackend for SilentBackend {
    fn name(&self) -> &'static str {
        "silent"
    }

    fn schedule_tone(&mut self, _segment: &ToneSegment, _gain: f32) -> Result<(), AudioError> {
        Ok(())
    }

    fn start_ambient(&mut self, _frequency: f32, _waveform: Waveform) -> Result<(), AudioError> {
        Ok(())
    }

    fn ramp_ambient(&mut self, _target: f32) {}

    fn stop_ambient(&mut self) {}
}

/// A call received by a [`RecordingBackend`]
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    Tone { segment: ToneSegment, gain: f32 },
    StartAmbient { frequency: f32, waveform: Waveform },
    RampAmbient { target: f32 },
    StopAmbient,
}

/// Backend that records every call instead of playing it.
///
/// Clones share one log, so a test can keep a clone after handing the
/// backend to an engine.
#[derive(Debug, Default, Clone)]
pub struct RecordingBackend {
    calls: Arc<Mutex<Vec<BackendCall>>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().clone()
    }

    /// Drain the recorded calls
    pub fn take(&self) -> Vec<BackendCall> {
        std::mem::take(&mut *self.calls.lock())
    }

    /// Number of tone segments scheduled so far
    pub fn tone_count(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| matches!(c, BackendCall::Tone { .. }))
            .count()
    }
}

impl ToneBackend for RecordingBackend {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn schedule_tone(&mut self, segment: &ToneSegment, gain: f32) -> Result<(), AudioError> {
        self.calls.lock().push(BackendCall::Tone {
            segment: *segment,
            gain,
        });
        Ok(())
    }

    fn start_ambient(&mut self, frequency: f32, waveform: Waveform) -> Result<(), AudioError> {
        self.calls
            .lock()
            .push(BackendCall::StartAmbient { frequency, waveform });
        Ok(())
    }

    fn ramp_ambient(&mut self, target: f32) {
        self.calls.lock().push(BackendCall::RampAmbient { target });
    }

    fn stop_ambient(&mut self) {
        self.calls.lock().push(BackendCall::StopAmbient);
    }
}
