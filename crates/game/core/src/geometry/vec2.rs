use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Continuous 2D vector in screen space (x grows right, y grows down).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// True when both coordinates are real numbers (no NaN or infinity).
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Unit vector in the same direction, or [`Vec2::ZERO`] for degenerate input.
    pub fn normalize_or_zero(self) -> Self {
        let len = self.length();
        if len > f32::EPSILON && len.is_finite() {
            Self::new(self.x / len, self.y / len)
        } else {
            Self::ZERO
        }
    }

    /// Heading for a compass rotation in degrees: 0 points north (-y) and
    /// angles grow clockwise.
    pub fn from_heading_degrees(degrees: f32) -> Self {
        let radians = degrees.to_radians();
        Self::new(radians.sin(), -radians.cos())
    }

    /// Inverse of [`Vec2::from_heading_degrees`], normalized to `[0, 360)`.
    pub fn heading_degrees(self) -> f32 {
        if self.is_zero() {
            return 0.0;
        }
        let degrees = self.x.atan2(-self.y).to_degrees();
        degrees.rem_euclid(360.0)
    }

    /// Mirrors this vector about a surface with the given unit normal.
    pub fn reflect(self, normal: Vec2) -> Self {
        self - normal * (2.0 * self.dot(normal))
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Axis-aligned extent of an entity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn square(side: f32) -> Self {
        Self::new(side, side)
    }

    pub fn half(self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Euclidean distance. Returns 0 when either point holds a non-finite
/// coordinate so partially initialized positions never poison callers.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    if !a.is_finite() || !b.is_finite() {
        return 0.0;
    }
    (b - a).length()
}

/// Unit vector pointing from `from` toward `to`; zero when the points coincide
/// or either is malformed.
pub fn direction_vector(from: Vec2, to: Vec2) -> Vec2 {
    if !from.is_finite() || !to.is_finite() {
        return Vec2::ZERO;
    }
    (to - from).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_of_malformed_points_is_zero() {
        assert_eq!(distance(Vec2::new(f32::NAN, 0.0), Vec2::new(3.0, 4.0)), 0.0);
        assert_eq!(distance(Vec2::new(0.0, 0.0), Vec2::new(f32::INFINITY, 4.0)), 0.0);
        assert_eq!(distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn direction_between_equal_points_is_zero() {
        let p = Vec2::new(7.0, -2.0);
        assert_eq!(direction_vector(p, p), Vec2::ZERO);

        let dir = direction_vector(Vec2::ZERO, Vec2::new(0.0, 10.0));
        assert_eq!(dir, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn compass_headings_follow_screen_space() {
        let north = Vec2::from_heading_degrees(0.0);
        assert!(north.x.abs() < 1e-6 && (north.y + 1.0).abs() < 1e-6);

        let east = Vec2::from_heading_degrees(90.0);
        assert!((east.x - 1.0).abs() < 1e-6 && east.y.abs() < 1e-6);

        assert!((Vec2::new(0.0, 1.0).heading_degrees() - 180.0).abs() < 1e-4);
        assert!((Vec2::new(-1.0, 0.0).heading_degrees() - 270.0).abs() < 1e-4);
    }

    #[test]
    fn reflect_flips_the_normal_component() {
        let incoming = Vec2::new(1.0, 1.0);
        let reflected = incoming.reflect(Vec2::new(0.0, -1.0));
        assert_eq!(reflected, Vec2::new(1.0, -1.0));
    }
}
