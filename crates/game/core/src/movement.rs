//! Movement resolution against static walls.
//!
//! Three layers, from cheapest to most forgiving:
//! - [`move_towards`]: straight, speed-capped interpolation
//! - [`slide_along_wall`]: axis decomposition when the straight move is blocked
//! - [`find_path_around_walls`]: single-step local avoidance by perturbing the
//!   heading
//!
//! None of these search a path. An agent can still get stuck in a concave
//! pocket; the next tick simply tries again from wherever it stands.

use arrayvec::ArrayVec;

use crate::geometry::{Size, Vec2, Wall, collides_with_walls, direction_vector, distance};

/// Fractions of the intended displacement tried after both axes are blocked.
const SLIDE_FALLBACK_FRACTIONS: [f32; 3] = [0.5, 0.25, 0.1];

/// Offsets added to the heading when the direct avoidance step is blocked,
/// in the order they are tried.
const AVOIDANCE_BIAS: [(f32, f32); 4] = [(0.5, 0.0), (-0.5, 0.0), (0.0, 0.5), (0.0, -0.5)];

/// Moves `from` toward `to` by at most `max_step`.
///
/// Snaps onto `to` when it is within reach so callers never overshoot and
/// oscillate around a target.
pub fn move_towards(from: Vec2, to: Vec2, max_step: f32) -> Vec2 {
    let remaining = distance(from, to);
    if remaining <= max_step {
        return to;
    }
    from + direction_vector(from, to) * max_step
}

/// Resolves a blocked move by sliding along whichever axis is free.
///
/// When the straight move from `from` to `intended` collides, each axis of
/// the displacement is probed on its own in unit increments, keeping the
/// furthest free offset and stopping at the first blocked increment. The axis
/// with the larger intended displacement wins; the other axis is used only
/// when the dominant one cannot move at all. If both are blocked, shortened
/// copies of the full displacement are tried before giving up.
///
/// The result never overlaps a wall provided `from` itself does not.
pub fn slide_along_wall(from: Vec2, intended: Vec2, walls: &[Wall], size: Size) -> Vec2 {
    if !from.is_finite() || !intended.is_finite() {
        return from;
    }
    if !collides_with_walls(intended, size, walls) {
        return intended;
    }

    let delta = intended - from;
    let free_x = probe_axis(from, delta.x, walls, size, Axis::Horizontal);
    let free_y = probe_axis(from, delta.y, walls, size, Axis::Vertical);

    let along_x = Vec2::new(from.x + free_x, from.y);
    let along_y = Vec2::new(from.x, from.y + free_y);
    let (dominant, dominant_free, other, other_free) = if delta.x.abs() >= delta.y.abs() {
        (along_x, free_x, along_y, free_y)
    } else {
        (along_y, free_y, along_x, free_x)
    };

    if dominant_free != 0.0 {
        return dominant;
    }
    if other_free != 0.0 {
        return other;
    }

    for fraction in SLIDE_FALLBACK_FRACTIONS {
        let candidate = from + delta * fraction;
        if !collides_with_walls(candidate, size, walls) {
            tracing::trace!(%from, %candidate, fraction, "slide fell back to partial move");
            return candidate;
        }
    }

    from
}

#[derive(Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Furthest collision-free signed offset along one axis, scanning outward in
/// unit steps (the last step is clipped to `wanted`).
fn probe_axis(from: Vec2, wanted: f32, walls: &[Wall], size: Size, axis: Axis) -> f32 {
    let magnitude = wanted.abs();
    if magnitude < f32::EPSILON {
        return 0.0;
    }
    let sign = wanted.signum();
    let steps = magnitude.ceil() as u32;

    let mut best = 0.0;
    for step in 1..=steps {
        let offset = sign * (step as f32).min(magnitude);
        let probe = match axis {
            Axis::Horizontal => Vec2::new(from.x + offset, from.y),
            Axis::Vertical => Vec2::new(from.x, from.y + offset),
        };
        if collides_with_walls(probe, size, walls) {
            break;
        }
        best = offset;
    }
    best
}

/// Candidate positions probed by [`find_path_around_walls`], direct step first.
pub fn avoidance_candidates(from: Vec2, to: Vec2, step: f32) -> ArrayVec<Vec2, 5> {
    let mut candidates = ArrayVec::new();
    let dir = direction_vector(from, to);
    if dir.is_zero() {
        return candidates;
    }

    candidates.push(from + dir * step);
    for (bx, by) in AVOIDANCE_BIAS {
        let biased = Vec2::new(dir.x + bx, dir.y + by).normalize_or_zero();
        candidates.push(from + biased * step);
    }
    candidates
}

/// Single-step local avoidance.
///
/// Tries a `step`-long move straight toward `to`, then four biased headings in
/// a fixed order, and returns the first position that does not collide. When
/// every candidate is blocked the agent stays at `from` for this tick.
pub fn find_path_around_walls(
    from: Vec2,
    to: Vec2,
    walls: &[Wall],
    size: Size,
    step: f32,
) -> Vec2 {
    avoidance_candidates(from, to, step)
        .into_iter()
        .find(|candidate| !collides_with_walls(*candidate, size, walls))
        .unwrap_or(from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    const SIZE: Size = Size::new(10.0, 10.0);

    #[test]
    fn move_towards_snaps_when_in_reach() {
        let to = Vec2::new(3.0, 4.0);
        assert_eq!(move_towards(Vec2::ZERO, to, 5.0), to);
        assert_eq!(move_towards(Vec2::ZERO, to, 10.0), to);
    }

    #[test]
    fn move_towards_advances_exactly_max_step() {
        let from = Vec2::new(1.0, 1.0);
        let to = Vec2::new(101.0, 1.0);
        let next = move_towards(from, to, 7.5);
        assert!((distance(from, next) - 7.5).abs() < 1e-4);
        assert!((next.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn slide_returns_intended_when_free() {
        let walls = [Rect::new(100.0, 100.0, 10.0, 10.0)];
        let intended = Vec2::new(5.0, 5.0);
        assert_eq!(slide_along_wall(Vec2::ZERO, intended, &walls, SIZE), intended);
    }

    #[test]
    fn slide_keeps_the_free_axis_when_diagonal_is_blocked() {
        // Wall directly to the right; moving down-right should slide down.
        let walls = [Rect::new(20.0, -50.0, 10.0, 200.0)];
        let from = Vec2::new(10.0, 0.0);
        let next = slide_along_wall(from, Vec2::new(15.0, 8.0), &walls, SIZE);
        assert_eq!(next, Vec2::new(10.0, 8.0));
    }

    #[test]
    fn slide_prefers_the_dominant_axis() {
        // Wall below; moving mostly right and a little down slides right.
        let walls = [Rect::new(-100.0, 20.0, 400.0, 10.0)];
        let from = Vec2::new(0.0, 10.0);
        let next = slide_along_wall(from, Vec2::new(6.0, 3.0), &walls, SIZE);
        assert_eq!(next, Vec2::new(6.0, 10.0));
    }

    #[test]
    fn slide_stops_at_last_free_unit_step() {
        let walls = [Rect::new(15.5, -100.0, 10.0, 300.0)];
        let from = Vec2::ZERO;
        let next = slide_along_wall(from, Vec2::new(9.0, 0.0), &walls, SIZE);
        assert_eq!(next, Vec2::new(5.0, 0.0));
        assert!(!collides_with_walls(next, SIZE, &walls));
    }

    #[test]
    fn slide_stays_put_when_boxed_in() {
        let from = Vec2::new(10.0, 10.0);
        let walls = [
            Rect::new(20.0, 0.0, 5.0, 30.0),
            Rect::new(0.0, 20.0, 30.0, 5.0),
        ];
        let next = slide_along_wall(from, Vec2::new(14.0, 14.0), &walls, SIZE);
        assert_eq!(next, from);
    }

    #[test]
    fn slide_falls_back_to_a_partial_move() {
        // Each axis is blocked on its first unit step and only a tenth of the
        // diagonal clears the wall ahead.
        let from = Vec2::ZERO;
        let walls = [
            Rect::new(10.5, -5.0, 10.0, 5.5),
            Rect::new(-5.0, 10.5, 5.5, 10.0),
            Rect::new(11.5, 11.5, 10.0, 10.0),
        ];
        assert!(!collides_with_walls(from, SIZE, &walls));
        assert!(collides_with_walls(Vec2::new(1.0, 0.0), SIZE, &walls));
        assert!(collides_with_walls(Vec2::new(0.0, 1.0), SIZE, &walls));

        let next = slide_along_wall(from, Vec2::new(10.0, 10.0), &walls, SIZE);
        assert!((next.x - 1.0).abs() < 1e-5 && (next.y - 1.0).abs() < 1e-5);
        assert!(!collides_with_walls(next, SIZE, &walls));
    }

    #[test]
    fn slide_never_lands_inside_a_wall() {
        let walls = [
            Rect::new(30.0, 0.0, 4.0, 4.0),
            Rect::new(0.0, 30.0, 50.0, 3.0),
            Rect::new(-20.0, -20.0, 5.0, 60.0),
            Rect::new(22.0, 18.0, 3.0, 3.0),
        ];
        let from = Vec2::new(5.0, 5.0);
        for i in 0..36 {
            let angle = (i as f32 * 10.0).to_radians();
            for reach in [3.0_f32, 12.0, 25.0, 40.0] {
                let intended = from + Vec2::new(angle.cos(), angle.sin()) * reach;
                let next = slide_along_wall(from, intended, &walls, SIZE);
                assert!(
                    !collides_with_walls(next, SIZE, &walls),
                    "landed in wall moving toward {intended}"
                );
            }
        }
    }

    #[test]
    fn avoidance_takes_direct_step_when_clear() {
        let next = find_path_around_walls(Vec2::ZERO, Vec2::new(100.0, 0.0), &[], SIZE, 10.0);
        assert_eq!(next, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn avoidance_uses_first_free_biased_heading() {
        // Block the direct step to the right, leave room below.
        let walls = [Rect::new(15.0, -30.0, 10.0, 34.0)];
        let from = Vec2::ZERO;
        let next = find_path_around_walls(from, Vec2::new(100.0, 0.0), &walls, SIZE, 10.0);
        assert_ne!(next, from);
        assert!(!collides_with_walls(next, SIZE, &walls));
        assert!((distance(from, next) - 10.0).abs() < 1e-4);
    }

    #[test]
    fn avoidance_stalls_only_when_every_candidate_is_blocked() {
        let from = Vec2::new(50.0, 50.0);
        let to = Vec2::new(150.0, 50.0);
        let walls = [Rect::new(61.0, 30.0, 20.0, 50.0)];

        let candidates = avoidance_candidates(from, to, 10.0);
        assert_eq!(candidates.len(), 5);
        let all_blocked = candidates
            .iter()
            .all(|c| collides_with_walls(*c, SIZE, &walls));
        let next = find_path_around_walls(from, to, &walls, SIZE, 10.0);
        assert_eq!(next == from, all_blocked);
        assert!(all_blocked);
    }
}
