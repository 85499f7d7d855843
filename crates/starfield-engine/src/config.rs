//! Field configuration, provided by the host or loaded from JSON.

use serde::Deserialize;

/// Tunable parameters for the particle field.
///
/// Defaults reproduce the stock ambient look. All ranges are `(min, max)`
/// and sampled uniformly.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of particles in the pool, constant for the field's lifetime.
    pub particles: usize,
    /// Head radius range in pixels.
    pub size_range: (f32, f32),
    /// Speed magnitude range in pixels per tick.
    pub speed_range: (f32, f32),
    /// Trail history length range in samples, resampled per reset.
    pub tail_range: (usize, usize),
    /// Opacity range assigned at reset.
    pub alpha_range: (f32, f32),
    /// Opacity lost per tick.
    pub decay: f32,
    /// Half-spread of the per-particle hue around the mode's base hue, degrees.
    pub hue_jitter: f32,
    /// RNG seed; a fixed seed replays the exact same sky.
    pub seed: u64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particles: 7,
            size_range: (2.0, 5.0),
            speed_range: (0.5, 2.0),
            tail_range: (50, 150),
            alpha_range: (0.6, 1.0),
            decay: 0.003,
            hue_jitter: 20.0,
            seed: 0x5354_4152,
        }
    }
}

impl FieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    // -- Builder pattern --

    pub fn with_particles(mut self, particles: usize) -> Self {
        self.particles = particles;
        self
    }

    pub fn with_size_range(mut self, min: f32, max: f32) -> Self {
        self.size_range = (min, max);
        self
    }

    pub fn with_speed_range(mut self, min: f32, max: f32) -> Self {
        self.speed_range = (min, max);
        self
    }

    pub fn with_tail_range(mut self, min: usize, max: usize) -> Self {
        self.tail_range = (min, max);
        self
    }

    pub fn with_alpha_range(mut self, min: f32, max: f32) -> Self {
        self.alpha_range = (min, max);
        self
    }

    pub fn with_decay(mut self, decay: f32) -> Self {
        self.decay = decay;
        self
    }

    pub fn with_hue_jitter(mut self, jitter: f32) -> Self {
        self.hue_jitter = jitter;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_look() {
        let cfg = FieldConfig::default();
        assert_eq!(cfg.particles, 7);
        assert_eq!(cfg.size_range, (2.0, 5.0));
        assert_eq!(cfg.speed_range, (0.5, 2.0));
        assert_eq!(cfg.tail_range, (50, 150));
        assert_eq!(cfg.alpha_range, (0.6, 1.0));
        assert_eq!(cfg.decay, 0.003);
        assert_eq!(cfg.hue_jitter, 20.0);
    }

    #[test]
    fn builder_pattern() {
        let cfg = FieldConfig::new()
            .with_particles(12)
            .with_speed_range(1.0, 4.0)
            .with_tail_range(10, 20)
            .with_decay(0.01)
            .with_seed(99);
        assert_eq!(cfg.particles, 12);
        assert_eq!(cfg.speed_range, (1.0, 4.0));
        assert_eq!(cfg.tail_range, (10, 20));
        assert_eq!(cfg.decay, 0.01);
        assert_eq!(cfg.seed, 99);
    }

    #[test]
    fn from_json_overrides_only_given_fields() {
        let cfg = FieldConfig::from_json(r#"{"particles": 3, "tail_range": [5, 9]}"#).unwrap();
        assert_eq!(cfg.particles, 3);
        assert_eq!(cfg.tail_range, (5, 9));
        // Untouched fields keep their defaults
        assert_eq!(cfg.decay, 0.003);
        assert_eq!(cfg.size_range, (2.0, 5.0));
    }

    #[test]
    fn from_json_rejects_malformed_input() {
        assert!(FieldConfig::from_json("not json").is_err());
        assert!(FieldConfig::from_json(r#"{"particles": "seven"}"#).is_err());
    }
}
