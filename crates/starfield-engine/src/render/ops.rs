//! Paint commands produced by the field and replayed by a [`Surface`].
//!
//! All alphas are pre-composed with the owning particle's opacity; surfaces
//! apply them as-is and never touch a global alpha.
//!
//! [`Surface`]: super::traits::Surface

use glam::Vec2;

use crate::color::{Hsla, Rgba};

/// A single drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintOp {
    /// Translucent full-surface rectangle. Clears the previous frame while
    /// leaving a faint persistence glow.
    Wash { color: Rgba },
    /// One trail segment, stroked with a linear gradient running from
    /// `start` (at `from`) to `end` (at `to`).
    TrailSegment {
        from: Vec2,
        to: Vec2,
        width: f32,
        start: Hsla,
        end: Hsla,
    },
    /// Filled five-pointed star head.
    Star {
        center: Vec2,
        outer: f32,
        inner: f32,
        spikes: u32,
        color: Hsla,
    },
}

/// Command list rebuilt every frame, wash first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaintBuffer {
    ops: Vec<PaintOp>,
}

impl PaintBuffer {
    pub fn new() -> Self {
        PaintBuffer {
            // 7 stars dragging 150-sample trails is ~1100 ops
            ops: Vec::with_capacity(1280),
        }
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn push(&mut self, op: PaintOp) {
        self.ops.push(op);
    }

    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
