use arrayvec::ArrayVec;

use crate::agent::{Body, SnakeId};
use crate::env::{CardinalDirection, RngOracle, SnakeEnv, TileCoord, TileGridOracle, roll};
use crate::geometry::{Vec2, distance};
use crate::movement::move_towards;
use crate::tick::TickContext;
use crate::timer::{Countdown, CountdownStep};

/// Distance under which a plumber counts as standing on a tile centre.
const CENTER_TOLERANCE: f32 = 0.01;

/// Pipe crawler on the rotating tile grid.
///
/// Moves centre to centre through open pipe connections and pauses at each
/// centre. On a random multi-second timer it asks the host to rotate a tile;
/// the request lives for exactly one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlumberState {
    pub target_tile: Option<TileCoord>,
    pub heading: Option<CardinalDirection>,
    pub pause: Countdown,
    pub rotation_timer: Countdown,
    /// Tile the host should rotate this tick.
    pub rotation_request: Option<TileCoord>,
}

pub(super) fn update(
    id: SnakeId,
    body: &mut Body,
    state: &mut PlumberState,
    ctx: &TickContext<'_>,
    env: &SnakeEnv<'_>,
) {
    let (tiles, rng) = match (env.tiles(), env.rng()) {
        (Ok(tiles), Ok(rng)) => (tiles, rng),
        (Err(err), _) | (_, Err(err)) => {
            tracing::warn!(snake = %id, %err, "plumber idle");
            return;
        }
    };

    state.rotation_request = None;
    schedule_rotation(id, state, tiles, rng, ctx);

    if state.pause.tick(ctx.dt) == CountdownStep::Running {
        return;
    }

    let target = match state.target_tile {
        Some(tile) => tile,
        None => match choose_next_tile(id, body, state, tiles, rng, ctx) {
            Some(tile) => tile,
            None => return,
        },
    };

    let anchor = tiles.tile_center(target) - body.size.half();
    let next = move_towards(body.position, anchor, body.speed * ctx.dt);
    body.relocate(next);
    if next == anchor {
        state.target_tile = None;
        state.pause.start(ctx.config.plumber_pause);
    }
}

fn schedule_rotation(
    id: SnakeId,
    state: &mut PlumberState,
    tiles: &dyn TileGridOracle,
    rng: &dyn RngOracle,
    ctx: &TickContext<'_>,
) {
    if state.rotation_timer.tick(ctx.dt) == CountdownStep::Expired {
        let dims = tiles.dimensions();
        let count = dims.tile_count();
        if count > 0 {
            let tile = dims.tile_from_index(rng.pick(ctx.seed_for(id, roll::ROTATION_TILE), count));
            tracing::debug!(snake = %id, col = tile.col, row = tile.row, "tile rotation requested");
            state.rotation_request = Some(tile);
        }
    }
    if !state.rotation_timer.is_running() {
        let delay = rng.range_f32(
            ctx.seed_for(id, roll::ROTATION_DELAY),
            ctx.config.plumber_rotation_min,
            ctx.config.plumber_rotation_max,
        );
        state.rotation_timer.start(delay);
    }
}

/// Picks the tile to walk to next.
///
/// Off-centre plumbers first settle onto their current tile. On a centre
/// they take a random connected exit, avoiding a U-turn when another exit
/// exists. Dead ends without any connection pause in place.
fn choose_next_tile(
    id: SnakeId,
    body: &Body,
    state: &mut PlumberState,
    tiles: &dyn TileGridOracle,
    rng: &dyn RngOracle,
    ctx: &TickContext<'_>,
) -> Option<TileCoord> {
    let current = tiles.tile_at(body.center());
    if !tiles.contains(current) {
        tracing::debug!(snake = %id, "plumber is off the grid");
        return None;
    }

    let anchor: Vec2 = tiles.tile_center(current) - body.size.half();
    if distance(body.position, anchor) > CENTER_TOLERANCE {
        state.target_tile = Some(current);
        return Some(current);
    }

    let exits: ArrayVec<CardinalDirection, 4> = CardinalDirection::ALL
        .into_iter()
        .filter(|direction| tiles.connects(current, *direction))
        .collect();
    let forward: ArrayVec<CardinalDirection, 4> = exits
        .iter()
        .copied()
        .filter(|direction| Some(direction.opposite()) != state.heading)
        .collect();
    let options = if forward.is_empty() { &exits } else { &forward };

    let Some(direction) = options
        .get(rng.pick(ctx.seed_for(id, roll::PIPE_EXIT), options.len()))
        .copied()
    else {
        state.pause.start(ctx.config.plumber_pause);
        return None;
    };

    let next = current.step(direction);
    state.heading = Some(direction);
    state.target_tile = Some(next);
    Some(next)
}
