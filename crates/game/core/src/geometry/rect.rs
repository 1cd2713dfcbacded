use super::vec2::{Size, Vec2};

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Static level obstacle. Walls never move during play.
pub type Wall = Rect;

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin(origin: Vec2, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Strict overlap test: rectangles that only share an edge do not collide.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Inclusive containment test.
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Point of this rectangle nearest to `p`.
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.clamp(self.x, self.right()), p.y.clamp(self.y, self.bottom()))
    }

    /// Distance along `dir` from `origin` to the first point of this
    /// rectangle, using the slab method. `dir` need not be normalized; the
    /// result is expressed in multiples of `dir`. An origin inside the
    /// rectangle yields `Some(0.0)`.
    pub fn ray_intersection(&self, origin: Vec2, dir: Vec2) -> Option<f32> {
        let mut t_min = 0.0_f32;
        let mut t_max = f32::INFINITY;

        for (o, d, lo, hi) in [
            (origin.x, dir.x, self.x, self.right()),
            (origin.y, dir.y, self.y, self.bottom()),
        ] {
            if d.abs() < f32::EPSILON {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / d;
            let mut t0 = (lo - o) * inv;
            let mut t1 = (hi - o) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return None;
            }
        }

        Some(t_min)
    }
}

/// True iff the two rectangles overlap on both axes (edge contact excluded).
pub fn aabb_collision(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}

/// Inclusive point-in-rectangle test.
pub fn point_in_rect(p: Vec2, r: &Rect) -> bool {
    r.contains_point(p)
}

/// True when a box of `size` placed at `origin` overlaps any wall.
pub fn collides_with_walls(origin: Vec2, size: Size, walls: &[Wall]) -> bool {
    let probe = Rect::from_origin(origin, size);
    walls.iter().any(|wall| probe.intersects(wall))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!aabb_collision(&a, &b));

        let c = Rect::new(9.5, 9.5, 10.0, 10.0);
        assert!(aabb_collision(&a, &c));
    }

    #[test]
    fn point_containment_includes_edges() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(point_in_rect(Vec2::new(10.0, 10.0), &r));
        assert!(point_in_rect(Vec2::new(0.0, 5.0), &r));
        assert!(!point_in_rect(Vec2::new(10.01, 5.0), &r));
    }

    #[test]
    fn ray_hits_rect_ahead_and_misses_behind() {
        let r = Rect::new(10.0, -5.0, 5.0, 10.0);
        let t = r.ray_intersection(Vec2::ZERO, Vec2::new(1.0, 0.0));
        assert_eq!(t, Some(10.0));

        assert_eq!(r.ray_intersection(Vec2::ZERO, Vec2::new(-1.0, 0.0)), None);
        assert_eq!(r.ray_intersection(Vec2::ZERO, Vec2::new(0.0, 1.0)), None);
    }

    #[test]
    fn ray_starting_inside_reports_zero() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(r.ray_intersection(Vec2::new(5.0, 5.0), Vec2::new(1.0, 0.0)), Some(0.0));
    }
}
