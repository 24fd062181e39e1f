/// Feedback sound effects
///
/// Each effect is a fixed schedule of tone segments relative to the moment it
/// is triggered.
use std::fmt;

use super::tone::{ToneSegment, Waveform};

const E3: f32 = 164.81;
const A3: f32 = 220.00;
const C4: f32 = 261.63;
const C5: f32 = 523.25;
const E5: f32 = 659.25;
const G5: f32 = 783.99;
const C6: f32 = 1046.50;

/// Ambient tone pitch (C2)
pub const AMBIENT_FREQUENCY: f32 = 65.41;

static CORRECT: [ToneSegment; 2] = [
    ToneSegment::new(C5, 0, 100, Waveform::Sine),
    ToneSegment::new(G5, 100, 150, Waveform::Sine),
];

static INCORRECT: [ToneSegment; 1] = [ToneSegment::new(E3, 0, 200, Waveform::Sawtooth)];

static LOSE_TURN: [ToneSegment; 2] = [
    ToneSegment::new(C4, 0, 100, Waveform::Sine),
    ToneSegment::new(A3, 100, 150, Waveform::Sine),
];

static WIN: [ToneSegment; 4] = [
    ToneSegment::new(C5, 0, 100, Waveform::Sine),
    ToneSegment::new(E5, 150, 100, Waveform::Sine),
    ToneSegment::new(G5, 300, 100, Waveform::Sine),
    ToneSegment::new(C6, 450, 200, Waveform::Sine),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Correct,
    Incorrect,
    LoseTurn,
    Win,
}

impl fmt::Display for SoundEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoundEffect::Correct => write!(f, "Correct"),
            SoundEffect::Incorrect => write!(f, "Incorrect"),
            SoundEffect::LoseTurn => write!(f, "Lose Turn"),
            SoundEffect::Win => write!(f, "Win"),
        }
    }
}

impl SoundEffect {
    /// Tone schedule for this effect
    pub fn segments(&self) -> &'static [ToneSegment] {
        match self {
            SoundEffect::Correct => &CORRECT,
            SoundEffect::Incorrect => &INCORRECT,
            SoundEffect::LoseTurn => &LOSE_TURN,
            SoundEffect::Win => &WIN,
        }
    }

    /// Time from trigger until the last segment ends
    pub fn length_ms(&self) -> u64 {
        self.segments()
            .iter()
            .map(ToneSegment::end_ms)
            .max()
            .unwrap_or(0)
    }
}
