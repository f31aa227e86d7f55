//! Simulation constants and tuning defaults.
//!
//! Distances are in world units (centimetres), angles in degrees.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- World ---

/// World gravity along Z before the per-character gravity scale is applied.
pub const WORLD_GRAVITY_Z: f32 = -980.0;

/// Height of the floor plane characters land on.
pub const FLOOR_Z: f32 = 0.0;

// --- Character collision ---

pub const CAPSULE_HALF_HEIGHT: f32 = 96.0;
pub const CAPSULE_RADIUS: f32 = 40.0;

// --- Character movement ---

pub const GRAVITY_SCALE: f32 = 2.0;

/// Fraction of ground acceleration available while airborne.
pub const AIR_CONTROL: f32 = 0.80;

pub const JUMP_Z_VELOCITY: f32 = 1000.0;

/// Ground friction while walking normally.
pub const GROUND_FRICTION: f32 = 3.0;

pub const MAX_WALK_SPEED: f32 = 600.0;
pub const MAX_FLY_SPEED: f32 = 600.0;

/// Acceleration applied from full-scale movement input.
pub const MAX_ACCELERATION: f32 = 2048.0;

/// Constant deceleration while walking without input.
pub const BRAKING_DECELERATION_WALKING: f32 = 2048.0;

/// Movement is locked to the XZ plane.
pub const PLANE_CONSTRAINT_NORMAL: [f32; 3] = [0.0, -1.0, 0.0];

// --- Dash ---

/// Horizontal launch magnitude applied at dash start and on every relaunch.
pub const DASH_IMPULSE: f32 = 1200.0;

/// A relaunch fires once the sub-phase timer exceeds this many seconds.
pub const DASH_RELAUNCH_INTERVAL_SECS: f32 = 0.3;

/// The dash ends once its total timer exceeds this many seconds.
pub const DASH_DURATION_SECS: f32 = 0.8;

/// Ground friction applied while dashing.
pub const DASH_GROUND_FRICTION: f32 = 0.0;

/// Ground friction written when a dash ends.
pub const POST_DASH_GROUND_FRICTION: f32 = 0.0;

// --- Camera rig ---

pub const CAMERA_BOOM_ARM_LENGTH: f32 = 500.0;
pub const CAMERA_BOOM_SOCKET_OFFSET: [f32; 3] = [0.0, 0.0, 75.0];
pub const CAMERA_BOOM_YAW: f32 = -90.0;
pub const CAMERA_ORTHO_WIDTH: f32 = 2048.0;

// --- Controller yaw ---

/// Control yaw when facing right (degrees).
pub const YAW_FACING_RIGHT: f32 = 0.0;

/// Control yaw when facing left (degrees).
pub const YAW_FACING_LEFT: f32 = 180.0;

// --- Assets ---

pub const RUNNING_ANIMATION_PATH: &str = "/Game/2dSideScroller/Sprites/RunningAnimation.RunningAnimation";
pub const IDLE_ANIMATION_PATH: &str = "/Game/2dSideScroller/Sprites/IdleAnimation.IdleAnimation";

// --- Input names ---

pub const JUMP_ACTION: &str = "Jump";
pub const MOVE_RIGHT_AXIS: &str = "MoveRight";
pub const DASH_ACTION: &str = "Dash";
