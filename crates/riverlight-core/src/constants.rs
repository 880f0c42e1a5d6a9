//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Player movement ---

/// Base linear speed of the player (world units per second).
pub const PLAYER_BASE_SPEED: f32 = 4.0;

/// Speed multiplier while free-roaming (also applies during tangent approach).
pub const FREE_SPEED_FACTOR: f32 = 2.0;

/// Speed multiplier while orbiting a tether.
pub const ORBIT_SPEED_FACTOR: f32 = 1.5;

/// Input force scale converting the normalized axis into thrust.
pub const PLAYER_THRUST: f32 = 30.0;

// --- Tethers and orbiting ---

/// Fixed orbit distance from a tether's center (world units).
/// Immutable after construction; the orbit never drifts from it.
pub const ORBIT_RADIUS: f32 = 2.0;

/// Default capture-range sensor radius around a tether (world units).
pub const TETHER_SENSOR_RADIUS: f32 = 4.0;

/// Angular speed around a bound tether (radians per second).
pub const ORBIT_ANGULAR_SPEED: f32 = 3.0;

/// Squared distance from the initial tangent point below which the
/// player is captured into orbit (world units²).
pub const CAPTURE_TOLERANCE_SQ: f32 = 0.01;

/// Charge added to a lantern for each completed orbit pass.
pub const CHARGE_PER_PASS: f32 = 0.5;

/// Charge above which a lantern counts as lit.
pub const LIT_THRESHOLD: f32 = 1.5;

/// Half-width of the one-dimensional band around the entry point's x
/// coordinate inside which a pass is registered (world units).
/// Coarse on purpose: the player covers several tenths of a unit per
/// frame at orbit speed.
pub const PASS_BAND_HALF_WIDTH: f32 = 0.5;

// --- Enemies ---

/// Distance an enemy advances toward its goal per frame (world units).
/// Direct position integration, not force-based.
pub const ENEMY_STEP: f32 = 0.2;

/// Per-axis distance from the current patrol goal at which the goal
/// advances to the next waypoint (world units).
pub const PATROL_ARRIVAL_BAND: f32 = 0.5;

/// Off-stage goal assigned when an enemy flees.
pub const FLEE_GOAL: (f32, f32) = (1000.0, 1000.0);

/// Collision radius of an enemy body (world units).
pub const ENEMY_BODY_RADIUS: f32 = 0.4;

// --- Camera ---

/// Maximum camera pursuit speed (world units per second).
pub const CAMERA_MAX_SPEED: f32 = 8.0;

/// Camera speed gained per frame while ramping toward the maximum.
pub const CAMERA_ACCELERATION: f32 = 0.1;

/// Camera speed after a tether toggle; nonzero so the camera never
/// visibly stalls on re-engagement.
pub const CAMERA_REENGAGE_SPEED: f32 = 2.0;

// --- Player body ---

/// Collision radius of the player body (world units).
pub const PLAYER_BODY_RADIUS: f32 = 0.5;
