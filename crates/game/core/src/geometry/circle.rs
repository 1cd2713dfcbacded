use super::rect::Rect;
use super::vec2::{Vec2, distance};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn overlaps_circle(&self, other: &Circle) -> bool {
        let reach = self.radius + other.radius;
        (other.center - self.center).length_squared() < reach * reach
    }

    pub fn overlaps_rect(&self, rect: &Rect) -> bool {
        let closest = rect.closest_point(self.center);
        (self.center - closest).length_squared() < self.radius * self.radius
    }

    /// Minimum translation that moves this circle out of `rect`, or `None`
    /// when they do not overlap.
    ///
    /// A center lying on or inside the rectangle has no usable closest-point
    /// direction, so it is pushed out through whichever edge is nearest.
    pub fn push_out_of_rect(&self, rect: &Rect) -> Option<Vec2> {
        if !self.overlaps_rect(rect) {
            return None;
        }

        let closest = rect.closest_point(self.center);
        let gap = distance(closest, self.center);
        if gap > f32::EPSILON {
            let normal = (self.center - closest) * (1.0 / gap);
            return Some(normal * (self.radius - gap));
        }

        let left = self.center.x - rect.x;
        let right = rect.right() - self.center.x;
        let top = self.center.y - rect.y;
        let bottom = rect.bottom() - self.center.y;

        let smallest = left.min(right).min(top).min(bottom);
        let push = if smallest == left {
            Vec2::new(-(left + self.radius), 0.0)
        } else if smallest == right {
            Vec2::new(right + self.radius, 0.0)
        } else if smallest == top {
            Vec2::new(0.0, -(top + self.radius))
        } else {
            Vec2::new(0.0, bottom + self.radius)
        };
        Some(push)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circles_overlap_when_closer_than_combined_radius() {
        let a = Circle::new(Vec2::ZERO, 5.0);
        assert!(a.overlaps_circle(&Circle::new(Vec2::new(9.0, 0.0), 5.0)));
        assert!(!a.overlaps_circle(&Circle::new(Vec2::new(10.0, 0.0), 5.0)));
    }

    #[test]
    fn push_out_from_outside_uses_closest_point() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let circle = Circle::new(Vec2::new(13.0, 5.0), 5.0);
        let push = circle.push_out_of_rect(&rect).unwrap();
        assert!((push.x - 2.0).abs() < 1e-5);
        assert!(push.y.abs() < 1e-5);
    }

    #[test]
    fn push_out_from_inside_uses_nearest_edge() {
        let rect = Rect::new(0.0, 0.0, 100.0, 20.0);
        let circle = Circle::new(Vec2::new(50.0, 4.0), 3.0);
        let push = circle.push_out_of_rect(&rect).unwrap();
        assert_eq!(push, Vec2::new(0.0, -7.0));

        let moved = Circle::new(circle.center + push, circle.radius);
        assert!(!moved.overlaps_rect(&rect));
    }

    #[test]
    fn separated_shapes_need_no_push() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(Circle::new(Vec2::new(20.0, 20.0), 2.0).push_out_of_rect(&rect).is_none());
    }
}
