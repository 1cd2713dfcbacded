//! Light beam puzzle: a source, rotatable mirrors, walls, and a crystal.
//!
//! The beam is traced as a polyline. Each segment stops at the closest thing
//! ahead of it: the crystal and walls end the beam, mirrors bend it. A beam
//! that hits nothing runs on to the arena edge.

use arrayvec::ArrayVec;

use crate::geometry::{ArenaBounds, Rect, Size, Vec2, Wall};

/// Hard ceiling on reflections, whatever the configuration asks for.
pub const MAX_REFLECTIONS: u32 = 10;

/// Source, one point per reflection, and the final end point.
pub const MAX_PATH_POINTS: usize = MAX_REFLECTIONS as usize + 2;

/// Hits closer than this to the segment origin are ignored so a beam leaving
/// a surface does not immediately hit it again.
const MIN_HIT_DISTANCE: f32 = 1e-3;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightSource {
    pub position: Vec2,
    /// Degrees clockwise from north.
    pub rotation_deg: f32,
    pub is_on: bool,
}

impl LightSource {
    pub fn new(position: Vec2, rotation_deg: f32) -> Self {
        Self {
            position,
            rotation_deg,
            is_on: true,
        }
    }
}

/// Thin double-sided mirror.
///
/// The reflecting surface is a segment through `center`, `size.width` long.
/// Its normal points along `rotation_deg` (clockwise from north), so a
/// mirror at 0° lies horizontally.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mirror {
    pub center: Vec2,
    pub size: Size,
    pub rotation_deg: f32,
    /// Recomputed by every trace.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing))]
    pub is_reflecting: bool,
}

impl Mirror {
    pub fn new(center: Vec2, length: f32, rotation_deg: f32) -> Self {
        Self {
            center,
            size: Size::new(length, 4.0),
            rotation_deg,
            is_reflecting: false,
        }
    }

    pub fn normal(&self) -> Vec2 {
        Vec2::from_heading_degrees(self.rotation_deg)
    }

    /// Unit vector along the reflecting surface.
    fn tangent(&self) -> Vec2 {
        let n = self.normal();
        Vec2::new(-n.y, n.x)
    }

    pub fn endpoints(&self) -> (Vec2, Vec2) {
        let half = self.tangent() * (self.size.width * 0.5);
        (self.center - half, self.center + half)
    }

    /// Rotates by `delta_deg`, keeping the angle in `[0, 360)`.
    pub fn rotate(&mut self, delta_deg: f32) {
        self.rotation_deg = (self.rotation_deg + delta_deg).rem_euclid(360.0);
    }

    /// Ray parameter where `origin + t * dir` crosses the surface.
    fn ray_intersection(&self, origin: Vec2, dir: Vec2) -> Option<f32> {
        let tangent = self.tangent();
        let denom = cross(dir, tangent);
        if denom.abs() < f32::EPSILON {
            return None;
        }
        let offset = self.center - origin;
        let t = cross(offset, tangent) / denom;
        let s = cross(offset, dir) / denom;
        (t.is_finite() && s.abs() <= self.size.width * 0.5).then_some(t)
    }
}

fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Crystal {
    pub bounds: Rect,
    /// Set by the host from [`BeamResult::hits_crystal`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_active: bool,
}

impl Crystal {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            is_active: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeamResult {
    pub path: ArrayVec<Vec2, MAX_PATH_POINTS>,
    pub reflections: u32,
    pub hits_crystal: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Hit {
    Crystal,
    Wall,
    Mirror(usize),
}

/// Traces the beam and marks the mirrors it bounces off.
///
/// Every mirror's `is_reflecting` flag is cleared first, so only mirrors on
/// the returned path are flagged. The mirror just reflected from is skipped
/// when looking for the next hit. At most `max_reflections` reflections are
/// made (never more than [`MAX_REFLECTIONS`]); a mirror reached after that
/// ends the beam.
pub fn simulate_beam(
    source: &LightSource,
    mirrors: &mut [Mirror],
    crystal: Option<&Crystal>,
    walls: &[Wall],
    bounds: ArenaBounds,
    max_reflections: u32,
) -> BeamResult {
    for mirror in mirrors.iter_mut() {
        mirror.is_reflecting = false;
    }

    let mut result = BeamResult::default();
    result.path.push(source.position);
    if !source.is_on || !source.position.is_finite() || !source.rotation_deg.is_finite() {
        return result;
    }

    let cap = max_reflections.min(MAX_REFLECTIONS);
    let mut origin = source.position;
    let mut dir = Vec2::from_heading_degrees(source.rotation_deg);
    let mut last_mirror = None;

    loop {
        let Some((t, hit)) = closest_hit(origin, dir, mirrors, crystal, walls, last_mirror) else {
            let end = origin + dir * bounds.exit_distance(origin, dir);
            let _ = result.path.try_push(end);
            break;
        };

        let point = origin + dir * t;
        if result.path.try_push(point).is_err() {
            break;
        }
        match hit {
            Hit::Crystal => {
                result.hits_crystal = true;
                break;
            }
            Hit::Wall => break,
            Hit::Mirror(index) => {
                if result.reflections >= cap {
                    break;
                }
                let Some(mirror) = mirrors.get_mut(index) else {
                    break;
                };
                mirror.is_reflecting = true;
                dir = dir.reflect(mirror.normal()).normalize_or_zero();
                if dir.is_zero() {
                    break;
                }
                result.reflections += 1;
                origin = point;
                last_mirror = Some(index);
            }
        }
    }

    tracing::trace!(
        reflections = result.reflections,
        hits_crystal = result.hits_crystal,
        points = result.path.len(),
        "beam traced"
    );
    result
}

fn closest_hit(
    origin: Vec2,
    dir: Vec2,
    mirrors: &[Mirror],
    crystal: Option<&Crystal>,
    walls: &[Wall],
    skip_mirror: Option<usize>,
) -> Option<(f32, Hit)> {
    let crystal_hit = crystal
        .and_then(|crystal| crystal.bounds.ray_intersection(origin, dir))
        .map(|t| (t, Hit::Crystal));
    let wall_hits = walls
        .iter()
        .filter_map(|wall| wall.ray_intersection(origin, dir))
        .map(|t| (t, Hit::Wall));
    let mirror_hits = mirrors
        .iter()
        .enumerate()
        .filter(|(index, _)| Some(*index) != skip_mirror)
        .filter_map(|(index, mirror)| {
            mirror
                .ray_intersection(origin, dir)
                .map(|t| (t, Hit::Mirror(index)))
        });

    crystal_hit
        .into_iter()
        .chain(wall_hits)
        .chain(mirror_hits)
        .filter(|(t, _)| *t > MIN_HIT_DISTANCE)
        .min_by(|(a, _), (b, _)| a.total_cmp(b))
}

/// Everything the light puzzle of one level needs.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightPuzzle {
    pub source: LightSource,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mirrors: Vec<Mirror>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub crystal: Option<Crystal>,
}

impl LightPuzzle {
    /// Traces the beam and stores the crystal activation it produces.
    pub fn simulate(
        &mut self,
        walls: &[Wall],
        bounds: ArenaBounds,
        max_reflections: u32,
    ) -> BeamResult {
        let result = simulate_beam(
            &self.source,
            &mut self.mirrors,
            self.crystal.as_ref(),
            walls,
            bounds,
            max_reflections,
        );
        if let Some(crystal) = self.crystal.as_mut() {
            crystal.is_active = result.hits_crystal;
        }
        result
    }

    /// Rotates one mirror; returns `false` for an unknown index.
    pub fn rotate_mirror(&mut self, index: usize, delta_deg: f32) -> bool {
        match self.mirrors.get_mut(index) {
            Some(mirror) => {
                mirror.rotate(delta_deg);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARENA: ArenaBounds = ArenaBounds::new(800.0, 600.0);

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-2 && (a.y - b.y).abs() < 1e-2
    }

    #[test]
    fn unobstructed_beam_reaches_the_arena_edge() {
        let source = LightSource::new(Vec2::new(100.0, 300.0), 90.0);
        let result = simulate_beam(&source, &mut [], None, &[], ARENA, 10);
        assert_eq!(result.path.len(), 2);
        assert!(close(result.path[1], Vec2::new(800.0, 300.0)));
        assert_eq!(result.reflections, 0);
        assert!(!result.hits_crystal);
    }

    #[test]
    fn mirror_turns_the_beam_into_the_crystal() {
        // Beam heads east, a 45° mirror sends it north into the crystal.
        let source = LightSource::new(Vec2::new(100.0, 300.0), 90.0);
        let mut mirrors = [Mirror::new(Vec2::new(300.0, 300.0), 40.0, 315.0)];
        let crystal = Crystal::new(Rect::new(290.0, 100.0, 20.0, 20.0));
        let result = simulate_beam(&source, &mut mirrors, Some(&crystal), &[], ARENA, 10);

        assert!(result.hits_crystal);
        assert_eq!(result.reflections, 1);
        assert!(mirrors[0].is_reflecting);
        assert!(close(result.path[1], Vec2::new(300.0, 300.0)));
        assert!(close(result.path[2], Vec2::new(300.0, 120.0)));
    }

    #[test]
    fn malformed_source_emits_no_beam() {
        for rotation in [f32::NAN, f32::INFINITY] {
            let source = LightSource::new(Vec2::new(100.0, 300.0), rotation);
            let result = simulate_beam(&source, &mut [], None, &[], ARENA, 10);
            assert_eq!(result.path.as_slice(), &[Vec2::new(100.0, 300.0)]);
            assert_eq!(result.reflections, 0);
            assert!(!result.hits_crystal);
        }
    }

    #[test]
    fn walls_stop_the_beam() {
        let source = LightSource::new(Vec2::new(100.0, 300.0), 90.0);
        let walls = [Rect::new(200.0, 250.0, 10.0, 100.0)];
        let crystal = Crystal::new(Rect::new(400.0, 290.0, 20.0, 20.0));
        let result = simulate_beam(&source, &mut [], Some(&crystal), &walls, ARENA, 10);
        assert!(!result.hits_crystal);
        assert!(close(result.path[1], Vec2::new(200.0, 300.0)));
    }

    #[test]
    fn facing_mirrors_are_capped() {
        let source = LightSource::new(Vec2::new(300.0, 300.0), 90.0);
        let mut mirrors = [
            Mirror::new(Vec2::new(200.0, 300.0), 100.0, 90.0),
            Mirror::new(Vec2::new(400.0, 300.0), 100.0, 270.0),
        ];
        let result = simulate_beam(&source, &mut mirrors, None, &[], ARENA, 50);
        assert_eq!(result.reflections, MAX_REFLECTIONS);
        assert_eq!(result.path.len(), MAX_PATH_POINTS);
        assert!(mirrors.iter().all(|m| m.is_reflecting));
    }

    #[test]
    fn flags_reset_between_traces() {
        let mut puzzle = LightPuzzle {
            source: LightSource::new(Vec2::new(100.0, 300.0), 90.0),
            mirrors: vec![Mirror::new(Vec2::new(300.0, 300.0), 40.0, 315.0)],
            crystal: Some(Crystal::new(Rect::new(290.0, 100.0, 20.0, 20.0))),
        };
        puzzle.simulate(&[], ARENA, 10);
        assert!(puzzle.mirrors[0].is_reflecting);
        assert!(puzzle.crystal.is_some_and(|c| c.is_active));

        puzzle.source.is_on = false;
        let result = puzzle.simulate(&[], ARENA, 10);
        assert_eq!(result.path.len(), 1);
        assert!(!puzzle.mirrors[0].is_reflecting);
        assert!(puzzle.crystal.is_some_and(|c| !c.is_active));
    }

    #[test]
    fn rotate_mirror_wraps_angle() {
        let mut puzzle = LightPuzzle {
            mirrors: vec![Mirror::new(Vec2::ZERO, 40.0, 315.0)],
            ..LightPuzzle::default()
        };
        assert!(puzzle.rotate_mirror(0, 90.0));
        assert_eq!(puzzle.mirrors[0].rotation_deg, 45.0);
        assert!(!puzzle.rotate_mirror(3, 90.0));
    }
}
