//! Graphics-free frame logic: motion, collision and the per-shape uniforms
//! the renderer uploads.

use tj_core::{
    aabb_overlap, collision_side, Aabb, CollisionSide, InputState, Key, MotionConfig, MotionInput,
    MotionState,
};
use tj_render::ShapeUniform;

use crate::scene::{SceneLayout, HIT_COLOR, IDLE_COLOR};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    pub triangle: ShapeUniform,
    pub square: ShapeUniform,
    pub colliding: bool,
}

pub struct Simulation {
    pub motion: MotionState,
    pub layout: SceneLayout,
    contact: Option<CollisionSide>,
}

impl Simulation {
    pub fn new(layout: SceneLayout, config: MotionConfig) -> Self {
        Self {
            motion: MotionState::with_config(
                layout.triangle_start.x,
                layout.triangle_start.y,
                config,
            ),
            layout,
            contact: None,
        }
    }

    pub fn step(&mut self, input: MotionInput, now: f64) {
        self.motion.step(input, now);

        let side = collision_side(&self.triangle_box(), &self.layout.square_box());
        if side != self.contact {
            if let Some(side) = side {
                log::debug!("Contact on {side} edge at x={:.2}", self.motion.x);
            }
            self.contact = side;
        }
    }

    pub fn triangle_box(&self) -> Aabb {
        self.layout.triangle_box(self.motion.position())
    }

    pub fn is_colliding(&self) -> bool {
        aabb_overlap(&self.triangle_box(), &self.layout.square_box())
    }

    pub fn frame_output(&self) -> FrameOutput {
        let colliding = self.is_colliding();
        // One color per frame, shared by both draws.
        let color = if colliding { HIT_COLOR } else { IDLE_COLOR };
        FrameOutput {
            triangle: ShapeUniform::translated(self.motion.position(), color),
            square: ShapeUniform::translated(self.layout.square_position, color),
            colliding,
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SceneLayout::default(), MotionConfig::default())
    }
}

pub fn sample_input(input: &InputState) -> MotionInput {
    let mut move_x = 0.0;
    if input.is_down(Key::Left) {
        move_x -= 1.0;
    }
    if input.is_down(Key::Right) {
        move_x += 1.0;
    }
    MotionInput {
        move_x,
        jump_pressed: input.is_down(Key::Space),
    }
}
