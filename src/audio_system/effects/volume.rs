/// Volume level for one audio channel (effects or music)

/// Volume slider value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeEffect {
    /// Volume multiplier (0.0-1.0)
    level: f32,
}

impl VolumeEffect {
    /// Create a new volume effect
    pub fn new(level: f32) -> Self {
        Self {
            level: sanitize(level),
        }
    }

    /// Get the volume level
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Set the volume level
    pub fn set_level(&mut self, level: f32) {
        self.level = sanitize(level);
    }

    /// Check if the slider is at zero
    pub fn is_silent(&self) -> bool {
        self.level == 0.0
    }
}

fn sanitize(level: f32) -> f32 {
    if level.is_nan() {
        0.0
    } else {
        level.clamp(0.0, 1.0)
    }
}

impl Default for VolumeEffect {
    fn default() -> Self {
        Self { level: 1.0 }
    }
}
