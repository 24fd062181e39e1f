/// Audio system module
///
/// Synthesizes every sound procedurally; there are no audio files.
/// - Feedback effects (correct, incorrect, lose turn, win) as short tone schedules
/// - One ambient tone whose gain glides to the music volume
/// - Independent effect/music sliders plus a master sound switch
///
/// ## Architecture
///
/// ```text
/// AudioEngine
///   ├── MixerSettings (sound_on, sfx volume, music volume)
///   └── Box<dyn ToneBackend>
///       ├── RodioBackend     (default output device)
///       ├── SilentBackend    (no device available)
///       └── RecordingBackend (tests)
/// ```
///
/// ## Usage
///
/// ```rust,ignore
/// use audio_system::{AudioEngine, MixerSettings, SoundEffect};
///
/// let mut engine = AudioEngine::with_default_output(MixerSettings::default());
/// engine.init_ambient();
///
/// engine.play(SoundEffect::Correct);
/// engine.set_music_volume(0.6); // ambient glides to the new level
/// engine.toggle_sound();        // silence everything, keep slider values
/// ```

pub mod backend;
pub mod effects;
pub mod manager;
pub mod player;
pub mod source;
pub mod tone;

// Re-export commonly used types
pub use backend::{BackendCall, RecordingBackend, SilentBackend, ToneBackend};
pub use effects::{GainRamp, MixerSettings, VolumeEffect};
pub use manager::AudioEngine;
pub use player::RodioBackend;
pub use source::{SoundEffect, AMBIENT_FREQUENCY};
pub use tone::{ToneSegment, Waveform};
