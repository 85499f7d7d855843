//! A single shooting star.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_4, PI};

use super::rng::Rng;
use super::trail::{Trail, TrailSample};
use crate::color::Palette;
use crate::config::FieldConfig;

/// Half-spread of the travel angle around the fixed down-right diagonal.
const ANGLE_JITTER: f32 = PI / 12.0;

/// Bounds of the tail-length fraction used as the off-surface entry lead.
/// The lower bound keeps the entry coordinate strictly off the surface.
const ENTRY_LEAD: (f32, f32) = (0.05, 0.5);

/// One simulated shooting star.
///
/// Lives for the whole field lifetime; expiry recycles it in place via
/// [`Particle::reset`] rather than destroying it, so the pool cardinality
/// never changes.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Position in surface pixels; transiently off-surface is fine.
    pub pos: Vec2,
    /// Velocity in pixels per tick.
    pub vel: Vec2,
    /// Current opacity in (0, 1]; decays every tick until reset.
    pub alpha: f32,
    /// Head radius in pixels.
    pub size: f32,
    /// Target trail history length, resampled on every reset.
    pub tail_length: usize,
    /// Per-particle hue, jittered around the palette's base hue.
    pub hue: f32,
    trail: Trail,
}

impl Particle {
    /// Build a particle already recycled into a live star.
    pub fn spawn(bounds: Vec2, palette: &Palette, cfg: &FieldConfig, rng: &mut Rng) -> Self {
        let mut particle = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            alpha: 0.0,
            size: 0.0,
            tail_length: 0,
            hue: 0.0,
            trail: Trail::new(0),
        };
        particle.reset(bounds, palette, cfg, rng);
        particle
    }

    /// Re-enter as a brand-new star from the top or left edge.
    ///
    /// The tail length is resampled first so the entry lead can be derived
    /// from it; the lead keeps the head strictly off-surface so a fresh star
    /// never pops into view mid-frame.
    pub fn reset(&mut self, bounds: Vec2, palette: &Palette, cfg: &FieldConfig, rng: &mut Rng) {
        let (tail_min, tail_max) = cfg.tail_range;
        self.tail_length = rng.range_usize(tail_min, tail_max);

        let lead = (self.tail_length as f32 * rng.range(ENTRY_LEAD.0, ENTRY_LEAD.1)).max(0.1);
        self.pos = if rng.coin() {
            Vec2::new(rng.range(0.0, bounds.x), -lead)
        } else {
            Vec2::new(-lead, rng.range(0.0, bounds.y))
        };

        self.size = rng.range(cfg.size_range.0, cfg.size_range.1);
        let speed = rng.range(cfg.speed_range.0, cfg.speed_range.1);
        // Down-right at 45 degrees with a little wobble.
        let angle = FRAC_PI_4 + rng.jitter(ANGLE_JITTER);
        self.vel = Vec2::new(angle.cos(), angle.sin()) * speed;

        self.alpha = rng.range(cfg.alpha_range.0, cfg.alpha_range.1);
        self.hue = palette.base_hue + rng.jitter(cfg.hue_jitter);
        self.trail.reset(self.tail_length);
    }

    /// Advance one tick: move, fade, record history.
    ///
    /// Returns true when the particle expired (faded out, or left past the
    /// right/bottom edge by more than its tail length) and needs a reset.
    pub fn step(&mut self, bounds: Vec2, cfg: &FieldConfig) -> bool {
        self.pos += self.vel;
        self.alpha -= cfg.decay;
        self.trail.push(TrailSample {
            pos: self.pos,
            alpha: self.alpha,
        });

        let slack = self.tail_length as f32;
        self.alpha <= 0.0 || self.pos.x > bounds.x + slack || self.pos.y > bounds.y + slack
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorMode;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    fn fixture() -> (Palette, FieldConfig, Rng) {
        (
            Palette::for_mode(ColorMode::Light),
            FieldConfig::default(),
            Rng::new(42),
        )
    }

    #[test]
    fn reset_enters_strictly_off_surface() {
        let (palette, cfg, mut rng) = fixture();
        let mut p = Particle::spawn(BOUNDS, &palette, &cfg, &mut rng);
        for _ in 0..200 {
            p.reset(BOUNDS, &palette, &cfg, &mut rng);
            assert!(
                p.pos.x < 0.0 || p.pos.y < 0.0,
                "entry inside surface: {:?}",
                p.pos
            );
            if p.pos.y < 0.0 {
                assert!((0.0..BOUNDS.x).contains(&p.pos.x));
            } else {
                assert!((0.0..BOUNDS.y).contains(&p.pos.y));
            }
        }
    }

    #[test]
    fn reset_yields_valid_state() {
        let (palette, cfg, mut rng) = fixture();
        let mut p = Particle::spawn(BOUNDS, &palette, &cfg, &mut rng);
        for _ in 0..100 {
            p.reset(BOUNDS, &palette, &cfg, &mut rng);
            assert!(p.alpha > 0.0 && p.alpha <= 1.0);
            assert!((2.0..5.0).contains(&p.size));
            assert!((50..=150).contains(&p.tail_length));
            assert!(p.vel.x > 0.0 && p.vel.y > 0.0, "must travel down-right");
            assert!((palette.base_hue - p.hue).abs() <= cfg.hue_jitter);
            assert!(p.trail().is_empty());
        }
    }

    #[test]
    fn step_moves_by_velocity_and_fades() {
        let (palette, cfg, mut rng) = fixture();
        let mut p = Particle::spawn(BOUNDS, &palette, &cfg, &mut rng);
        let (pos, vel, alpha) = (p.pos, p.vel, p.alpha);
        let expired = p.step(BOUNDS, &cfg);
        assert!(!expired);
        assert_eq!(p.pos, pos + vel);
        assert!((p.alpha - (alpha - cfg.decay)).abs() < 1e-6);
        let after_one = p.alpha;
        p.step(BOUNDS, &cfg);
        assert!(p.alpha < after_one, "opacity must keep decreasing");
    }

    #[test]
    fn step_records_history_up_to_tail_length() {
        let (palette, mut cfg, mut rng) = fixture();
        cfg.tail_range = (4, 4);
        cfg.decay = 0.0001;
        let mut p = Particle::spawn(BOUNDS, &palette, &cfg, &mut rng);
        for expected in 1..=4usize {
            p.step(BOUNDS, &cfg);
            assert_eq!(p.trail().len(), expected);
        }
        for _ in 0..20 {
            p.step(BOUNDS, &cfg);
            assert_eq!(p.trail().len(), 4);
        }
    }

    #[test]
    fn near_zero_alpha_expires_within_one_tick() {
        let (palette, cfg, mut rng) = fixture();
        let mut p = Particle::spawn(BOUNDS, &palette, &cfg, &mut rng);
        p.alpha = 0.001;
        assert!(p.step(BOUNDS, &cfg), "0.001 - 0.003 must expire");
        p.reset(BOUNDS, &palette, &cfg, &mut rng);
        assert!(p.alpha > 0.0 && p.alpha <= 1.0);
        assert!(p.trail().is_empty());
        assert!(p.pos.x < 0.0 || p.pos.y < 0.0);
    }

    #[test]
    fn exit_past_trailing_edges_expires() {
        let (palette, cfg, mut rng) = fixture();
        let mut p = Particle::spawn(BOUNDS, &palette, &cfg, &mut rng);
        p.pos = Vec2::new(BOUNDS.x + p.tail_length as f32 + 5.0, 10.0);
        assert!(p.step(BOUNDS, &cfg));

        p.reset(BOUNDS, &palette, &cfg, &mut rng);
        p.pos = Vec2::new(10.0, BOUNDS.y + p.tail_length as f32 + 5.0);
        assert!(p.step(BOUNDS, &cfg));

        // Still inside the slack band: alive
        p.reset(BOUNDS, &palette, &cfg, &mut rng);
        p.pos = Vec2::new(BOUNDS.x + 1.0, 10.0);
        assert!(!p.step(BOUNDS, &cfg));
    }
}
