//! Sight and hearing.

use crate::geometry::{Vec2, Wall, direction_vector, distance};

/// Ray-marched line of sight bounded by `max_distance`.
///
/// Fails fast beyond `max_distance`; otherwise samples the segment at unit
/// spacing and reports blocked as soon as a sample lies inside a wall. Thin
/// walls crossed at a shallow angle can slip between samples; the sampling
/// density is part of the contract.
pub fn has_line_of_sight(from: Vec2, to: Vec2, walls: &[Wall], max_distance: f32) -> bool {
    let span = distance(from, to);
    if span > max_distance {
        return false;
    }

    let steps = span.ceil() as u32;
    let dir = direction_vector(from, to);
    (1..steps).all(|i| {
        let sample = from + dir * i as f32;
        !walls.iter().any(|wall| wall.contains_point(sample))
    })
}

/// Nearest sound within `hearing_range`, if any. A range of zero means the
/// listener is deaf.
pub fn nearest_sound(listener: Vec2, sounds: &[Vec2], hearing_range: f32) -> Option<Vec2> {
    if hearing_range <= 0.0 {
        return None;
    }
    sounds
        .iter()
        .copied()
        .filter(|sound| sound.is_finite())
        .map(|sound| (distance(listener, sound), sound))
        .filter(|(d, _)| *d <= hearing_range)
        .min_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(_, sound)| sound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    #[test]
    fn self_sight_is_never_blocked() {
        let p = Vec2::new(5.0, 5.0);
        let walls = [Rect::new(0.0, 0.0, 10.0, 10.0)];
        assert!(has_line_of_sight(p, p, &walls, 0.0));
        assert!(has_line_of_sight(p, p, &[], 100.0));
    }

    #[test]
    fn sight_is_bounded_by_range() {
        assert!(has_line_of_sight(Vec2::ZERO, Vec2::new(100.0, 0.0), &[], 100.0));
        assert!(!has_line_of_sight(Vec2::ZERO, Vec2::new(100.5, 0.0), &[], 100.0));
    }

    #[test]
    fn walls_block_sight() {
        let walls = [Rect::new(40.0, -10.0, 5.0, 20.0)];
        assert!(!has_line_of_sight(Vec2::ZERO, Vec2::new(100.0, 0.0), &walls, 150.0));
        assert!(has_line_of_sight(Vec2::ZERO, Vec2::new(0.0, 100.0), &walls, 150.0));
    }

    #[test]
    fn nearest_sound_ignores_out_of_range_and_deaf_listeners() {
        let sounds = [Vec2::new(200.0, 0.0), Vec2::new(0.0, 80.0), Vec2::new(50.0, 0.0)];
        assert_eq!(nearest_sound(Vec2::ZERO, &sounds, 150.0), Some(Vec2::new(50.0, 0.0)));
        assert_eq!(nearest_sound(Vec2::ZERO, &sounds, 40.0), None);
        assert_eq!(nearest_sound(Vec2::ZERO, &sounds, 0.0), None);
    }
}
