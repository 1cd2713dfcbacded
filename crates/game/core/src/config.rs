/// Tunable timings, radii, and limits shared by every snake handler.
///
/// Durations are in seconds and distances in world units. Hosts usually keep
/// the defaults; level designers can override individual values from a TOML
/// file (missing keys fall back to the defaults).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AiConfig {
    /// Grace period a sighted snake keeps chasing after losing the player.
    pub lost_sight_grace: f32,
    /// How long a stalker searches around the last heard sound.
    pub search_duration: f32,
    /// Radius around the last heard sound that counts as "arrived".
    pub search_radius: f32,
    /// Radius around the last seen position where a chaser gives up.
    pub give_up_radius: f32,
    /// Waypoint trigger radius for sighted patrollers.
    pub patrol_radius_tight: f32,
    /// Waypoint trigger radius for sound hunters.
    pub patrol_radius_loose: f32,
    /// Applied to base speed when a snake has no explicit chase speed.
    pub chase_speed_multiplier: f32,
    /// Burster dash length when the snake does not override it.
    pub dash_duration: f32,
    /// Look-ahead used to extrapolate the dash target.
    pub dash_lead_time: f32,
    /// Applied to base speed when a burster has no explicit dash speed.
    pub dash_speed_multiplier: f32,
    pub rattlesnake_grace: f32,
    /// Photophobic pause after a sound stops.
    pub hesitation_pause: f32,
    /// Photophobic pause after arriving somewhere or hitting a wall.
    pub recovery_pause: f32,
    /// Travel a phantom must accumulate before it may settle.
    pub phantom_min_lap: f32,
    pub phantom_return_radius: f32,
    pub plumber_pause: f32,
    pub plumber_rotation_min: f32,
    pub plumber_rotation_max: f32,
    pub spit_interval: f32,
    /// Step length probed by local obstacle avoidance.
    pub avoidance_step: f32,
    pub max_reflections: u32,
}

impl AiConfig {
    pub const DEFAULT_LOST_SIGHT_GRACE: f32 = 3.0;
    pub const DEFAULT_SEARCH_DURATION: f32 = 3.0;
    pub const DEFAULT_SEARCH_RADIUS: f32 = 25.0;
    pub const DEFAULT_GIVE_UP_RADIUS: f32 = 15.0;
    pub const DEFAULT_PATROL_RADIUS_TIGHT: f32 = 15.0;
    pub const DEFAULT_PATROL_RADIUS_LOOSE: f32 = 25.0;
    pub const DEFAULT_CHASE_SPEED_MULTIPLIER: f32 = 1.5;
    pub const DEFAULT_DASH_DURATION: f32 = 0.8;
    pub const DEFAULT_DASH_LEAD_TIME: f32 = 0.3;
    pub const DEFAULT_DASH_SPEED_MULTIPLIER: f32 = 3.0;
    pub const DEFAULT_RATTLESNAKE_GRACE: f32 = 2.0;
    pub const DEFAULT_HESITATION_PAUSE: f32 = 0.1;
    pub const DEFAULT_RECOVERY_PAUSE: f32 = 0.5;
    pub const DEFAULT_PHANTOM_MIN_LAP: f32 = 1200.0;
    pub const DEFAULT_PHANTOM_RETURN_RADIUS: f32 = 15.0;
    pub const DEFAULT_PLUMBER_PAUSE: f32 = 0.5;
    pub const DEFAULT_PLUMBER_ROTATION_MIN: f32 = 2.0;
    pub const DEFAULT_PLUMBER_ROTATION_MAX: f32 = 5.0;
    pub const DEFAULT_SPIT_INTERVAL: f32 = 2.0;
    pub const DEFAULT_AVOIDANCE_STEP: f32 = 10.0;
    pub const DEFAULT_MAX_REFLECTIONS: u32 = 10;

    pub fn new() -> Self {
        Self {
            lost_sight_grace: Self::DEFAULT_LOST_SIGHT_GRACE,
            search_duration: Self::DEFAULT_SEARCH_DURATION,
            search_radius: Self::DEFAULT_SEARCH_RADIUS,
            give_up_radius: Self::DEFAULT_GIVE_UP_RADIUS,
            patrol_radius_tight: Self::DEFAULT_PATROL_RADIUS_TIGHT,
            patrol_radius_loose: Self::DEFAULT_PATROL_RADIUS_LOOSE,
            chase_speed_multiplier: Self::DEFAULT_CHASE_SPEED_MULTIPLIER,
            dash_duration: Self::DEFAULT_DASH_DURATION,
            dash_lead_time: Self::DEFAULT_DASH_LEAD_TIME,
            dash_speed_multiplier: Self::DEFAULT_DASH_SPEED_MULTIPLIER,
            rattlesnake_grace: Self::DEFAULT_RATTLESNAKE_GRACE,
            hesitation_pause: Self::DEFAULT_HESITATION_PAUSE,
            recovery_pause: Self::DEFAULT_RECOVERY_PAUSE,
            phantom_min_lap: Self::DEFAULT_PHANTOM_MIN_LAP,
            phantom_return_radius: Self::DEFAULT_PHANTOM_RETURN_RADIUS,
            plumber_pause: Self::DEFAULT_PLUMBER_PAUSE,
            plumber_rotation_min: Self::DEFAULT_PLUMBER_ROTATION_MIN,
            plumber_rotation_max: Self::DEFAULT_PLUMBER_ROTATION_MAX,
            spit_interval: Self::DEFAULT_SPIT_INTERVAL,
            avoidance_step: Self::DEFAULT_AVOIDANCE_STEP,
            max_reflections: Self::DEFAULT_MAX_REFLECTIONS,
        }
    }

    pub fn with_max_reflections(mut self, max_reflections: u32) -> Self {
        self.max_reflections = max_reflections;
        self
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::new()
    }
}
