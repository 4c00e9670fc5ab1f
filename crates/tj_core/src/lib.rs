//! Graphics-free simulation pieces: keyboard state, the fixed-step clock,
//! jump/fall motion, AABB collision and translation transforms.

pub mod collision;
pub mod input;
pub mod motion;
pub mod time;
pub mod transform;

pub use collision::{aabb_overlap, collision_side, Aabb, CollisionSide};
pub use input::{InputState, Key};
pub use motion::{JumpPhase, MotionConfig, MotionInput, MotionState};
pub use time::TimeState;
