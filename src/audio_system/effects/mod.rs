/// Mixer settings
///
/// Two independent sliders (effects, music) and a master sound switch. The
/// switch silences both without touching the stored slider values.

pub mod fade;
pub mod volume;

pub use fade::GainRamp;
pub use volume::VolumeEffect;

/// Effects are scaled down so a full slider is not harsh
pub const SFX_GAIN_SCALE: f32 = 0.2;

/// The ambient tone sits further below the effects
pub const MUSIC_GAIN_SCALE: f32 = 0.3;

/// Time constant for ambient gain changes
pub const MUSIC_RAMP_SECS: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixerSettings {
    pub sound_on: bool,
    pub sfx: VolumeEffect,
    pub music: VolumeEffect,
}

impl Default for MixerSettings {
    fn default() -> Self {
        Self {
            sound_on: true,
            sfx: VolumeEffect::new(0.5),
            music: VolumeEffect::new(0.2),
        }
    }
}

impl MixerSettings {
    /// Set sound switch
    pub fn with_sound_on(mut self, sound_on: bool) -> Self {
        self.sound_on = sound_on;
        self
    }

    /// Set effects volume
    pub fn with_sfx_volume(mut self, volume: f32) -> Self {
        self.sfx.set_level(volume);
        self
    }

    /// Set music volume
    pub fn with_music_volume(mut self, volume: f32) -> Self {
        self.music.set_level(volume);
        self
    }

    /// Gain for a feedback tone, `None` when effects are muted
    pub fn effect_gain(&self) -> Option<f32> {
        if !self.sound_on || self.sfx.is_silent() {
            return None;
        }
        Some(self.sfx.level() * SFX_GAIN_SCALE)
    }

    /// Target gain for the ambient tone
    pub fn music_target(&self) -> f32 {
        if self.sound_on {
            self.music.level() * MUSIC_GAIN_SCALE
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mixer() {
        let mixer = MixerSettings::default();
        assert!(mixer.sound_on);
        assert_eq!(mixer.sfx.level(), 0.5);
        assert_eq!(mixer.music.level(), 0.2);
        assert_eq!(mixer.effect_gain(), Some(0.5 * SFX_GAIN_SCALE));
    }

    #[test]
    fn test_mute_keeps_levels() {
        let mixer = MixerSettings::default()
            .with_sfx_volume(0.8)
            .with_music_volume(0.6)
            .with_sound_on(false);

        assert_eq!(mixer.effect_gain(), None);
        assert_eq!(mixer.music_target(), 0.0);
        assert_eq!(mixer.sfx.level(), 0.8);
        assert_eq!(mixer.music.level(), 0.6);

        let mixer = mixer.with_sound_on(true);
        assert_eq!(mixer.effect_gain(), Some(0.8 * SFX_GAIN_SCALE));
        assert_eq!(mixer.music_target(), 0.6 * MUSIC_GAIN_SCALE);
    }

    #[test]
    fn test_zero_sfx_is_muted() {
        let mixer = MixerSettings::default().with_sfx_volume(0.0);
        assert_eq!(mixer.effect_gain(), None);
        assert!(mixer.music_target() > 0.0);
    }

    #[test]
    fn test_builder_clamps() {
        let mixer = MixerSettings::default()
            .with_sfx_volume(1.5)
            .with_music_volume(-0.5);
        assert_eq!(mixer.sfx.level(), 1.0);
        assert_eq!(mixer.music.level(), 0.0);
    }
}
