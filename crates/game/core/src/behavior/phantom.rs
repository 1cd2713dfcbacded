use crate::agent::{Body, SnakeId};
use crate::geometry::{Rect, Vec2, distance};
use crate::movement::move_towards;
use crate::tick::TickContext;

/// Perimeter walker that retires after one lap.
///
/// Walks the corners of its circuit in a fixed rotation, ignoring walls and
/// the player. Once it has travelled at least the configured minimum lap and
/// comes back near its spawn point, it stops for good. A spawn off the
/// circuit counts as the nearest point on the circuit's edge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhantomState {
    pub spawn: Vec2,
    pub clockwise: bool,
    /// Rectangle whose corners the snake's top-left visits. Defaults to the
    /// arena shrunk by the snake's size on the first tick.
    pub circuit: Option<Rect>,
    /// Index into top-left, top-right, bottom-right, bottom-left.
    pub corner: Option<usize>,
    /// Spawn projected onto the circuit; the lap ends here.
    pub home: Option<Vec2>,
    pub traveled: f32,
    pub has_returned_to_spawn: bool,
}

impl PhantomState {
    pub fn new(spawn: Vec2, clockwise: bool, circuit: Option<Rect>) -> Self {
        Self {
            spawn,
            clockwise,
            circuit,
            ..Self::default()
        }
    }

    fn next_corner(&self, corner: usize) -> usize {
        if self.clockwise {
            (corner + 1) % 4
        } else {
            (corner + 3) % 4
        }
    }
}

fn corners(circuit: Rect) -> [Vec2; 4] {
    [
        Vec2::new(circuit.x, circuit.y),
        Vec2::new(circuit.right(), circuit.y),
        Vec2::new(circuit.right(), circuit.bottom()),
        Vec2::new(circuit.x, circuit.bottom()),
    ]
}

/// Closest point to `point` on the edge of `circuit`.
fn nearest_on_perimeter(circuit: Rect, point: Vec2) -> Vec2 {
    let clamped = Vec2::new(
        point.x.clamp(circuit.x, circuit.right()),
        point.y.clamp(circuit.y, circuit.bottom()),
    );
    // Edge order: top, right, bottom, left.
    let gaps = [
        clamped.y - circuit.y,
        circuit.right() - clamped.x,
        circuit.bottom() - clamped.y,
        clamped.x - circuit.x,
    ];
    let edge = gaps
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map_or(0, |(edge, _)| edge);
    match edge {
        0 => Vec2::new(clamped.x, circuit.y),
        1 => Vec2::new(circuit.right(), clamped.y),
        2 => Vec2::new(clamped.x, circuit.bottom()),
        _ => Vec2::new(circuit.x, clamped.y),
    }
}

/// First corner to head for: the end of the edge `spawn` lies closest to,
/// in the direction of travel.
fn first_corner(circuit: Rect, spawn: Vec2, clockwise: bool) -> usize {
    // Edge order: top, right, bottom, left.
    let gaps = [
        (spawn.y - circuit.y).abs(),
        (spawn.x - circuit.right()).abs(),
        (spawn.y - circuit.bottom()).abs(),
        (spawn.x - circuit.x).abs(),
    ];
    let edge = gaps
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map_or(0, |(edge, _)| edge);
    // Clockwise, the top edge ends at the top-right corner; counter-clockwise
    // it ends at the top-left.
    if clockwise { (edge + 1) % 4 } else { edge }
}

pub(super) fn update(id: SnakeId, body: &mut Body, state: &mut PhantomState, ctx: &TickContext<'_>) {
    if state.has_returned_to_spawn {
        return;
    }

    let circuit = *state.circuit.get_or_insert_with(|| {
        Rect::new(
            0.0,
            0.0,
            (ctx.bounds.width - body.size.width).max(0.0),
            (ctx.bounds.height - body.size.height).max(0.0),
        )
    });
    let spawn = state.spawn;
    let home = *state
        .home
        .get_or_insert_with(|| nearest_on_perimeter(circuit, spawn));
    let corner = match state.corner {
        Some(corner) => corner % 4,
        None => first_corner(circuit, spawn, state.clockwise),
    };
    let target = corners(circuit)[corner];

    let next = move_towards(body.position, target, body.speed * ctx.dt);
    state.traveled += distance(body.position, next);
    body.relocate(next);
    state.corner = Some(if next == target {
        state.next_corner(corner)
    } else {
        corner
    });

    if state.traveled >= ctx.config.phantom_min_lap
        && distance(body.position, home) <= ctx.config.phantom_return_radius
    {
        tracing::debug!(snake = %id, traveled = state.traveled, "phantom completed its lap");
        state.has_returned_to_spawn = true;
    }
}
