use crate::agent::Body;
use crate::behavior::steering::pursue;
use crate::geometry::Vec2;
use crate::tick::TickContext;

/// Always knows where the player is; no sight or hearing checks.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossState {
    /// Player position chased on the most recent tick.
    pub target: Option<Vec2>,
}

pub(super) fn update(body: &mut Body, state: &mut BossState, ctx: &TickContext<'_>) {
    let Some(player) = ctx.player else {
        state.target = None;
        return;
    };
    state.target = Some(player.position);
    pursue(body, player.position, body.pursuit_speed(ctx.config), ctx);
}
