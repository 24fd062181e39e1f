/// Audio device backend
///
/// Plays synthesized tones through the default output device with rodio.
use std::sync::Arc;

use rodio::{OutputStream, OutputStreamHandle, Source};

use super::backend::ToneBackend;
use super::effects::{GainRamp, MUSIC_RAMP_SECS};
use super::tone::{AmbientTone, GainControl, ToneSegment, ToneSource, Waveform, SAMPLE_RATE};
use crate::error::AudioError;

pub struct RodioBackend {
    _stream: OutputStream,
    stream_handle: OutputStreamHandle,
    ambient: Option<Arc<GainControl>>,
}

impl RodioBackend {
    /// Open the default output device
    pub fn try_new() -> Result<Self, AudioError> {
        let (stream, stream_handle) =
            OutputStream::try_default().map_err(|e| AudioError::StreamInitFailed(Box::new(e)))?;

        tracing::debug!("Opened default audio output at {} Hz", SAMPLE_RATE);

        Ok(Self {
            _stream: stream,
            stream_handle,
            ambient: None,
        })
    }
}

impl ToneBackend for RodioBackend {
    fn name(&self) -> &'static str {
        "rodio"
    }

    fn schedule_tone(&mut self, segment: &ToneSegment, gain: f32) -> Result<(), AudioError> {
        let source = ToneSource::new(segment, gain, SAMPLE_RATE).delay(segment.start_offset());
        self.stream_handle
            .play_raw(source)
            .map_err(|e| AudioError::PlaybackFailed(Box::new(e)))
    }

    fn start_ambient(&mut self, frequency: f32, waveform: Waveform) -> Result<(), AudioError> {
        if self.ambient.is_some() {
            return Ok(());
        }

        let control = Arc::new(GainControl::new(0.0));
        let tone = AmbientTone::new(
            frequency,
            waveform,
            SAMPLE_RATE,
            GainRamp::new(MUSIC_RAMP_SECS, SAMPLE_RATE),
            Arc::clone(&control),
        );
        self.stream_handle
            .play_raw(tone)
            .map_err(|e| AudioError::PlaybackFailed(Box::new(e)))?;

        self.ambient = Some(control);
        Ok(())
    }

    fn ramp_ambient(&mut self, target: f32) {
        if let Some(control) = &self.ambient {
            control.set_target(target);
        }
    }

    fn stop_ambient(&mut self) {
        if let Some(control) = self.ambient.take() {
            control.stop();
            tracing::debug!("Stopped ambient tone");
        }
    }
}

impl Drop for RodioBackend {
    fn drop(&mut self) {
        self.stop_ambient();
    }
}
