//! Arena lighting served through [`snake_core::LightingOracle`].
use snake_content::LightingData;
use snake_core::{ArenaBounds, LightingOracle, Vec2};

/// Lit flags for the four quadrants of the arena.
///
/// Quadrant order is top-left, top-right, bottom-left, bottom-right. A
/// uniform level sets all four to the same value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadrantLighting {
    bounds: ArenaBounds,
    lit: [bool; 4],
}

impl QuadrantLighting {
    pub fn uniform(bounds: ArenaBounds, lit: bool) -> Self {
        Self {
            bounds,
            lit: [lit; 4],
        }
    }

    pub fn from_data(bounds: ArenaBounds, data: LightingData) -> Self {
        match data {
            LightingData::Uniform(lit) => Self::uniform(bounds, lit),
            LightingData::Quadrants(lit) => Self { bounds, lit },
        }
    }

    pub fn set_all(&mut self, lit: bool) {
        self.lit = [lit; 4];
    }

    /// Sets one quadrant; indices past 3 are ignored.
    pub fn set_quadrant(&mut self, quadrant: usize, lit: bool) {
        if let Some(flag) = self.lit.get_mut(quadrant) {
            *flag = lit;
        }
    }

    fn quadrant(&self, point: Vec2) -> usize {
        let right = point.x >= self.bounds.width * 0.5;
        let bottom = point.y >= self.bounds.height * 0.5;
        usize::from(right) + 2 * usize::from(bottom)
    }
}

impl LightingOracle for QuadrantLighting {
    fn is_lit(&self, point: Vec2) -> bool {
        self.lit[self.quadrant(point)]
    }
}
