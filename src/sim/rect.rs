//! Axis-aligned bounds for collision testing
//!
//! Every entity exposes a `Rect`; the collision passes only ever ask two
//! rects whether they overlap. The boss additionally exposes an inset rect
//! for incoming-projectile tests.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, y growing downward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Build from a top-left corner and a size
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Strict overlap test (shared edges do not count as contact)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Shrink the rect by `amount` on all four sides
    ///
    /// The inset must leave a non-degenerate rect; callers size their
    /// entities so that this holds.
    pub fn inset(&self, amount: f32) -> Rect {
        Rect {
            min: self.min + Vec2::splat(amount),
            max: self.max - Vec2::splat(amount),
        }
    }

    /// True if `other` lies strictly inside `self` on all four edges
    pub fn strictly_contains(&self, other: &Rect) -> bool {
        other.min.x > self.min.x
            && other.min.y > self.min.y
            && other.max.x < self.max.x
            && other.max.y < self.max.y
    }
}
