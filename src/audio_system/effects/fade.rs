/// Exponential gain ramp
///
/// Moves a gain toward a target with a fixed time constant, one sample at a
/// time. After one time constant the gain has covered ~63% of the distance.

#[derive(Debug, Clone, Copy)]
pub struct GainRamp {
    current: f32,
    coefficient: f32,
    time_constant_secs: f32,
}

impl GainRamp {
    /// Create a ramp starting from silence
    pub fn new(time_constant_secs: f32, sample_rate: u32) -> Self {
        let samples = (time_constant_secs * sample_rate as f32).max(1.0);
        Self {
            current: 0.0,
            coefficient: 1.0 - (-1.0 / samples).exp(),
            time_constant_secs,
        }
    }

    /// Advance one sample toward `target` and return the new gain
    pub fn step(&mut self, target: f32) -> f32 {
        self.current += (target - self.current) * self.coefficient;
        self.current
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn time_constant_secs(&self) -> f32 {
        self.time_constant_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_starts_silent() {
        let ramp = GainRamp::new(0.1, 44_100);
        assert_eq!(ramp.current(), 0.0);
        assert_eq!(ramp.time_constant_secs(), 0.1);
    }

    #[test]
    fn test_one_time_constant_covers_most_of_the_distance() {
        let mut ramp = GainRamp::new(0.1, 1000);
        for _ in 0..100 {
            ramp.step(1.0);
        }
        assert!((ramp.current() - 0.632).abs() < 0.01);
    }

    #[test]
    fn test_ramp_never_jumps() {
        let mut ramp = GainRamp::new(0.1, 1000);
        let first = ramp.step(1.0);
        assert!(first < 0.05);

        for _ in 0..1000 {
            ramp.step(1.0);
        }
        let before = ramp.current();
        let after = ramp.step(0.0);
        assert!(before - after < 0.05);
    }

    #[test]
    fn test_zero_time_constant_clamps_to_one_sample() {
        let mut ramp = GainRamp::new(0.0, 1000);
        assert!((ramp.step(0.5) - 0.316).abs() < 0.01);
    }
}
