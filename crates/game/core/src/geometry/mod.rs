//! Continuous-space collision primitives.
//!
//! Everything here is a pure function of its arguments. Malformed input
//! (non-finite coordinates, coincident points) degrades to neutral values
//! instead of panicking, because agent state can briefly hold such values
//! while an archetype switches modes.
mod circle;
mod rect;
mod vec2;

pub use circle::Circle;
pub use rect::{Rect, Wall, aabb_collision, collides_with_walls, point_in_rect};
pub use vec2::{Size, Vec2, direction_vector, distance};

/// Playable area, anchored at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaBounds {
    pub width: f32,
    pub height: f32,
}

impl ArenaBounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn as_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// True when a box of `size` at `origin` lies entirely inside the arena.
    pub fn contains_box(&self, origin: Vec2, size: Size) -> bool {
        origin.x >= 0.0
            && origin.y >= 0.0
            && origin.x + size.width <= self.width
            && origin.y + size.height <= self.height
    }

    /// Distance along `dir` from `origin` to the arena edge it exits through.
    ///
    /// Origins outside the arena report `0.0`.
    pub fn exit_distance(&self, origin: Vec2, dir: Vec2) -> f32 {
        let mut t = f32::INFINITY;
        if dir.x > f32::EPSILON {
            t = t.min((self.width - origin.x) / dir.x);
        } else if dir.x < -f32::EPSILON {
            t = t.min(-origin.x / dir.x);
        }
        if dir.y > f32::EPSILON {
            t = t.min((self.height - origin.y) / dir.y);
        } else if dir.y < -f32::EPSILON {
            t = t.min(-origin.y / dir.y);
        }
        if t.is_finite() { t.max(0.0) } else { 0.0 }
    }
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_distance_reaches_the_facing_edge() {
        let arena = ArenaBounds::new(100.0, 50.0);
        let origin = Vec2::new(20.0, 25.0);
        assert_eq!(arena.exit_distance(origin, Vec2::new(1.0, 0.0)), 80.0);
        assert_eq!(arena.exit_distance(origin, Vec2::new(0.0, -1.0)), 25.0);
        assert_eq!(arena.exit_distance(origin, Vec2::ZERO), 0.0);
    }

    #[test]
    fn contains_box_requires_full_inclusion() {
        let arena = ArenaBounds::new(100.0, 100.0);
        assert!(arena.contains_box(Vec2::new(90.0, 0.0), Size::square(10.0)));
        assert!(!arena.contains_box(Vec2::new(91.0, 0.0), Size::square(10.0)));
        assert!(!arena.contains_box(Vec2::new(-1.0, 0.0), Size::square(10.0)));
    }
}
