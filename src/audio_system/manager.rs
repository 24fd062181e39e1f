/// Audio engine
///
/// Turns game events into tone schedules and keeps the ambient tone in step
/// with the mixer settings. Never fails the caller: backend errors are
/// logged and swallowed so the game stays playable without sound.

use super::backend::{SilentBackend, ToneBackend};
use super::effects::MixerSettings;
use super::player::RodioBackend;
use super::source::{SoundEffect, AMBIENT_FREQUENCY};
use super::tone::Waveform;

pub struct AudioEngine {
    backend: Box<dyn ToneBackend>,
    mixer: MixerSettings,
    ambient_running: bool,
}

impl AudioEngine {
    /// Create an engine over an explicit backend
    pub fn new(backend: Box<dyn ToneBackend>, mixer: MixerSettings) -> Self {
        tracing::debug!("Audio engine using {} backend", backend.name());
        Self {
            backend,
            mixer,
            ambient_running: false,
        }
    }

    /// Use the default output device, falling back to silence when there is none
    pub fn with_default_output(mixer: MixerSettings) -> Self {
        match RodioBackend::try_new() {
            Ok(backend) => Self::new(Box::new(backend), mixer),
            Err(e) => {
                tracing::warn!("Audio unavailable, continuing without sound: {}", e);
                Self::silent(mixer)
            }
        }
    }

    pub fn silent(mixer: MixerSettings) -> Self {
        Self::new(Box::new(SilentBackend), mixer)
    }

    pub fn mixer(&self) -> &MixerSettings {
        &self.mixer
    }

    pub fn is_ambient_running(&self) -> bool {
        self.ambient_running
    }

    /// Play a feedback effect at the current effects volume
    pub fn play(&mut self, effect: SoundEffect) {
        let Some(gain) = self.mixer.effect_gain() else {
            return;
        };

        tracing::debug!("Playing sound effect: {}", effect);
        for segment in effect.segments() {
            if let Err(e) = self.backend.schedule_tone(segment, gain) {
                tracing::warn!("Failed to play {} tone: {}", effect, e);
                return;
            }
        }
    }

    /// Start the ambient tone silently, then glide it to the music level
    pub fn init_ambient(&mut self) {
        if self.ambient_running {
            return;
        }

        match self
            .backend
            .start_ambient(AMBIENT_FREQUENCY, Waveform::Sine)
        {
            Ok(()) => {
                self.ambient_running = true;
                self.retarget_ambient();
            }
            Err(e) => tracing::warn!("Failed to start ambient tone: {}", e),
        }
    }

    pub fn set_sfx_volume(&mut self, volume: f32) {
        self.mixer.sfx.set_level(volume);
    }

    pub fn set_music_volume(&mut self, volume: f32) {
        self.mixer.music.set_level(volume);
        self.retarget_ambient();
    }

    pub fn set_sound_on(&mut self, sound_on: bool) {
        self.mixer.sound_on = sound_on;
        self.retarget_ambient();
    }

    /// Flip the master switch, returns the new state
    pub fn toggle_sound(&mut self) -> bool {
        self.set_sound_on(!self.mixer.sound_on);
        self.mixer.sound_on
    }

    fn retarget_ambient(&mut self) {
        if self.ambient_running {
            self.backend.ramp_ambient(self.mixer.music_target());
        }
    }

    /// Stop the ambient tone
    pub fn shutdown(&mut self) {
        if self.ambient_running {
            self.backend.stop_ambient();
            self.ambient_running = false;
        }
    }
}

impl Drop for AudioEngine {
    fn drop(&mut self) {
        self.shutdown();
    }
}
