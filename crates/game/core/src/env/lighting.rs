use crate::geometry::Vec2;

/// Lighting state of the level as seen by light-sensitive snakes.
///
/// Hosts may light the level globally or per region; the core only asks
/// whether a given point is currently lit.
pub trait LightingOracle: Send + Sync {
    fn is_lit(&self, point: Vec2) -> bool;
}

/// Uniform lighting, handy for hosts without regional lights and for tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniformLighting(pub bool);

impl LightingOracle for UniformLighting {
    fn is_lit(&self, _point: Vec2) -> bool {
        self.0
    }
}
