/// Procedural tone generation
///
/// Every sound in the game is synthesized: short tone segments for feedback
/// effects and one continuous ambient tone whose gain is steered at runtime.
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rodio::Source;

use super::effects::GainRamp;

/// Output sample rate for generated tones
pub const SAMPLE_RATE: u32 = 44_100;

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

impl Waveform {
    /// Sample the waveform at `phase` in `[0, 1)`, output in `[-1, 1]`
    pub fn sample(&self, phase: f64) -> f32 {
        let value = match self {
            Waveform::Sine => (phase * std::f64::consts::TAU).sin(),
            Waveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Sawtooth => 2.0 * phase - 1.0,
            Waveform::Triangle => 4.0 * (phase - 0.5).abs() - 1.0,
        };
        value as f32
    }
}

/// One note of a feedback sound, offset from the moment the sound is triggered
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSegment {
    pub frequency: f32,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub waveform: Waveform,
}

impl ToneSegment {
    pub const fn new(frequency: f32, start_ms: u64, duration_ms: u64, waveform: Waveform) -> Self {
        Self {
            frequency,
            start_ms,
            duration_ms,
            waveform,
        }
    }

    pub fn start_offset(&self) -> Duration {
        Duration::from_millis(self.start_ms)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn end_ms(&self) -> u64 {
        self.start_ms + self.duration_ms
    }
}

/// Finite mono tone at a fixed gain
pub struct ToneSource {
    waveform: Waveform,
    frequency: f32,
    gain: f32,
    sample_rate: u32,
    position: u64,
    total_samples: u64,
    duration: Duration,
}

impl ToneSource {
    pub fn new(segment: &ToneSegment, gain: f32, sample_rate: u32) -> Self {
        let total_samples = segment.duration_ms * u64::from(sample_rate) / 1000;
        Self {
            waveform: segment.waveform,
            frequency: segment.frequency,
            gain: gain.clamp(0.0, 1.0),
            sample_rate,
            position: 0,
            total_samples,
            duration: segment.duration(),
        }
    }
}

impl Iterator for ToneSource {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.position >= self.total_samples {
            return None;
        }
        let phase = phase_at(self.position, self.frequency, self.sample_rate);
        self.position += 1;
        Some(self.waveform.sample(phase) * self.gain)
    }
}

impl Source for ToneSource {
    fn current_frame_len(&self) -> Option<usize> {
        Some((self.total_samples - self.position) as usize)
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(self.duration)
    }
}

fn phase_at(position: u64, frequency: f32, sample_rate: u32) -> f64 {
    (position as f64 * f64::from(frequency) / f64::from(sample_rate)).fract()
}

/// Shared handle steering a running ambient tone
#[derive(Debug)]
pub struct GainControl {
    target: AtomicU32,
    stopped: AtomicBool,
}

impl GainControl {
    pub fn new(initial: f32) -> Self {
        Self {
            target: AtomicU32::new(initial.clamp(0.0, 1.0).to_bits()),
            stopped: AtomicBool::new(false),
        }
    }

    pub fn set_target(&self, gain: f32) {
        self.target
            .store(gain.clamp(0.0, 1.0).to_bits(), Ordering::Relaxed);
    }

    pub fn target(&self) -> f32 {
        f32::from_bits(self.target.load(Ordering::Relaxed))
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

/// Endless tone whose gain glides toward the target held in a [`GainControl`]
pub struct AmbientTone {
    waveform: Waveform,
    frequency: f32,
    sample_rate: u32,
    phase: f64,
    ramp: GainRamp,
    control: Arc<GainControl>,
}

impl AmbientTone {
    pub fn new(
        frequency: f32,
        waveform: Waveform,
        sample_rate: u32,
        ramp: GainRamp,
        control: Arc<GainControl>,
    ) -> Self {
        Self {
            waveform,
            frequency,
            sample_rate,
            phase: 0.0,
            ramp,
            control,
        }
    }

    pub fn current_gain(&self) -> f32 {
        self.ramp.current()
    }
}

impl Iterator for AmbientTone {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.control.is_stopped() {
            return None;
        }
        let gain = self.ramp.step(self.control.target());
        let sample = self.waveform.sample(self.phase) * gain;
        self.phase = (self.phase + f64::from(self.frequency) / f64::from(self.sample_rate)).fract();
        Some(sample)
    }
}

impl Source for AmbientTone {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        None
    }
}
