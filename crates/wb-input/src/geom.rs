//! Minimal 2D vector used by the drag controller.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// 2D position or size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Clamp an icon origin so the whole icon stays inside the viewport:
/// `0 <= x <= viewport.x - icon.x`, same for y.
///
/// A viewport smaller than the icon pins the origin to zero.
pub fn clamp_to_viewport(pos: Vec2, icon: Vec2, viewport: Vec2) -> Vec2 {
    let max_x = (viewport.x - icon.x).max(0.0);
    let max_y = (viewport.y - icon.y).max(0.0);
    Vec2::new(pos.x.clamp(0.0, max_x), pos.y.clamp(0.0, max_y))
}
