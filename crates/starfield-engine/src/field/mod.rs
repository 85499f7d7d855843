//! The particle field: a fixed pool of shooting stars and the per-frame
//! paint commands that depict them.

mod particle;
mod rng;
mod trail;

pub use particle::Particle;
pub use rng::Rng;
pub use trail::{Trail, TrailSample};

use glam::Vec2;

use crate::color::{ColorMode, Hsla, Palette, SATURATION};
use crate::config::FieldConfig;
use crate::render::ops::{PaintBuffer, PaintOp};
use crate::render::star::STAR_SPIKES;

/// Trail strokes taper toward the oldest sample; this scales both the
/// per-segment width and alpha.
const TRAIL_SCALE: f32 = 0.8;
/// Strokes never collapse below this width.
const MIN_TRAIL_WIDTH: f32 = 0.1;
/// Trail gradients run from `base_hue + shift` down to `base_hue - shift`.
const TRAIL_HUE_SHIFT: f32 = 20.0;

/// Owner of the particle pool and the frame's paint commands.
///
/// `tick` advances physics and lifecycle; `rebuild_paint_buffer` regenerates
/// the command list for the current state. The split lets a host run several
/// catch-up ticks and paint once.
pub struct ParticleField {
    particles: Vec<Particle>,
    rng: Rng,
    palette: Palette,
    mode: ColorMode,
    config: FieldConfig,
    bounds: Vec2,
    buffer: PaintBuffer,
}

impl ParticleField {
    pub fn new(config: FieldConfig, mode: ColorMode, width: f32, height: f32) -> Self {
        let mut rng = Rng::new(config.seed);
        let palette = Palette::for_mode(mode);
        let bounds = Vec2::new(width.max(0.0), height.max(0.0));
        let mut particles = Vec::with_capacity(config.particles);
        for _ in 0..config.particles {
            particles.push(Particle::spawn(bounds, &palette, &config, &mut rng));
        }
        ParticleField {
            particles,
            rng,
            palette,
            mode,
            config,
            bounds,
            buffer: PaintBuffer::new(),
        }
    }

    /// Advance every particle one tick, recycling expired ones in place.
    pub fn tick(&mut self) {
        let bounds = self.bounds;
        for particle in &mut self.particles {
            if particle.step(bounds, &self.config) {
                particle.reset(bounds, &self.palette, &self.config, &mut self.rng);
            }
        }
    }

    /// Regenerate the paint commands for the current state: one background
    /// wash, then each particle's trail segments and star head. A zero-area
    /// surface produces an empty frame.
    pub fn rebuild_paint_buffer(&mut self) {
        self.buffer.clear();
        if self.bounds.x <= 0.0 || self.bounds.y <= 0.0 {
            return;
        }
        self.buffer.push(PaintOp::Wash {
            color: self.palette.wash,
        });

        for particle in &self.particles {
            let trail = particle.trail();
            if trail.len() >= 2 {
                let count = trail.len() as f32;
                for (i, (from, to)) in trail.iter().zip(trail.iter().skip(1)).enumerate() {
                    // Recency ratio of the newer endpoint: old segments thin out.
                    let recency = (i + 1) as f32 / count;
                    let seg_alpha = to.alpha * recency * TRAIL_SCALE;
                    let width = (particle.size * recency * TRAIL_SCALE).max(MIN_TRAIL_WIDTH);
                    self.buffer.push(PaintOp::TrailSegment {
                        from: from.pos,
                        to: to.pos,
                        width,
                        start: Hsla::new(
                            self.palette.base_hue + TRAIL_HUE_SHIFT,
                            SATURATION,
                            self.palette.lightness,
                            particle.alpha * seg_alpha * 0.5,
                        ),
                        end: Hsla::new(
                            self.palette.base_hue - TRAIL_HUE_SHIFT,
                            SATURATION,
                            self.palette.lightness,
                            particle.alpha * seg_alpha,
                        ),
                    });
                }
            }
            self.buffer.push(PaintOp::Star {
                center: particle.pos,
                outer: particle.size,
                inner: particle.size * 0.5,
                spikes: STAR_SPIKES,
                color: Hsla::new(particle.hue, SATURATION, self.palette.lightness, particle.alpha),
            });
        }
    }

    /// Match the field to a new viewport. Particle positions are left
    /// untouched; anything now out of bounds recycles itself through the
    /// expiry rule.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width.max(0.0), height.max(0.0));
        log::debug!("particle field resized to {}x{}", self.bounds.x, self.bounds.y);
    }

    /// Switch palettes. Re-runs full initialization: every particle resets
    /// in place and in-flight trails are discarded.
    pub fn set_color_mode(&mut self, mode: ColorMode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.palette = Palette::for_mode(mode);
        log::debug!("palette switched to {:?} mode", mode);
        let bounds = self.bounds;
        for particle in &mut self.particles {
            particle.reset(bounds, &self.palette, &self.config, &mut self.rng);
        }
    }

    /// Swap in a new configuration and rebuild the pool around it.
    pub fn reconfigure(&mut self, config: FieldConfig) {
        self.config = config;
        self.rng = Rng::new(self.config.seed);
        let bounds = self.bounds;
        let mut particles = Vec::with_capacity(self.config.particles);
        for _ in 0..self.config.particles {
            particles.push(Particle::spawn(bounds, &self.palette, &self.config, &mut self.rng));
        }
        self.particles = particles;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn paint_buffer(&self) -> &PaintBuffer {
        &self.buffer
    }
}
