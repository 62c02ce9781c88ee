//! Falling heart particles: spawn, advance, prune.

use crate::rng::RandomSource;

/// Per-frame probability of spawning a new heart (~1 every 25 frames).
pub const SPAWN_RATE: f64 = 0.04;
pub const SPEED_MIN: f64 = 1.0;
pub const SPEED_MAX: f64 = 2.5;
pub const SCALE_MIN: f64 = 0.6;
pub const SCALE_MAX: f64 = 1.0;

/// Vertical margin (px): hearts spawn this far above the top edge and are
/// dropped once this far below the bottom edge.
pub const EDGE_MARGIN: f64 = 100.0;

/// One falling heart. Position is in pixel space; speed is pixels per
/// displayed frame.
pub struct Heart {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub speed: f64,
}

impl Heart {
    /// Bounding radius in pixels; also the normalization scale for the
    /// implicit curve. Scale never reaches 0, so neither does this.
    pub fn radius(&self) -> f64 {
        self.scale * 200.0
    }
}

/// The active set of falling hearts. Order carries no meaning; removal is
/// unordered.
#[derive(Default)]
pub struct HeartField {
    hearts: Vec<Heart>,
}

impl HeartField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll the per-frame spawn chance; on success append one heart above
    /// the top edge with randomized x, scale and speed. Independent of the
    /// current particle count.
    pub fn maybe_spawn(&mut self, viewport_width: f64, rng: &mut dyn RandomSource) {
        if rng.next_unit() < SPAWN_RATE {
            self.spawn(viewport_width, rng);
        }
    }

    pub fn spawn(&mut self, viewport_width: f64, rng: &mut dyn RandomSource) {
        self.hearts.push(Heart {
            x: rng.next_unit() * viewport_width,
            y: -EDGE_MARGIN,
            scale: rng.in_range(SCALE_MIN, SCALE_MAX),
            speed: rng.in_range(SPEED_MIN, SPEED_MAX),
        });
    }

    /// Move every heart down by its own speed. No acceleration.
    pub fn advance(&mut self) {
        for heart in &mut self.hearts {
            heart.y += heart.speed;
        }
    }

    /// Remove hearts fully past the bottom edge plus margin.
    pub fn prune(&mut self, viewport_height: f64) {
        self.hearts.retain(|h| h.y < viewport_height + EDGE_MARGIN);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Heart> {
        self.hearts.iter()
    }

    pub fn len(&self) -> usize {
        self.hearts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hearts.is_empty()
    }
}
