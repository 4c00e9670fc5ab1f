//! Fixed scene layout: the two shapes, where they start, their collision
//! boxes and the colors the triangle switches between.

use glam::Vec2;
use tj_core::Aabb;
use tj_render::PositionVertex;

pub const TRIANGLE_VERTICES: [PositionVertex; 3] = [
    PositionVertex::new(0.0, 0.25, 0.0),
    PositionVertex::new(-0.25, -0.25, 0.0),
    PositionVertex::new(0.25, -0.25, 0.0),
];

pub const SQUARE_VERTICES: [PositionVertex; 4] = [
    PositionVertex::new(-0.5, -0.5, 0.0),
    PositionVertex::new(-0.5, -0.25, 0.0),
    PositionVertex::new(-0.25, -0.25, 0.0),
    PositionVertex::new(-0.25, -0.5, 0.0),
];

pub const IDLE_COLOR: [f32; 4] = [0.4, 0.8, 0.6, 1.0];
pub const HIT_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLayout {
    pub triangle_start: Vec2,
    /// Collision size of the triangle; its box is anchored at the
    /// triangle's translated position.
    pub triangle_box_size: Vec2,
    pub square_position: Vec2,
    /// Collision size of the square; its box is centered on the
    /// square's translated position.
    pub square_box_size: Vec2,
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self {
            triangle_start: Vec2::new(-1.0, -0.75),
            triangle_box_size: Vec2::new(0.5, 0.5),
            square_position: Vec2::new(0.0, -0.5),
            square_box_size: Vec2::new(0.5, 0.5),
        }
    }
}

impl SceneLayout {
    pub fn triangle_box(&self, position: Vec2) -> Aabb {
        Aabb::new(
            position.x,
            position.y,
            self.triangle_box_size.x,
            self.triangle_box_size.y,
        )
    }

    pub fn square_box(&self) -> Aabb {
        Aabb::centered(
            self.square_position.x,
            self.square_position.y,
            self.square_box_size.x,
            self.square_box_size.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_box_spans_quarter_around_position() {
        let b = SceneLayout::default().square_box();
        assert!((b.x - -0.25).abs() < 1e-6);
        assert!((b.y - -0.75).abs() < 1e-6);
        assert_eq!(b.width, 0.5);
        assert_eq!(b.height, 0.5);
    }

    #[test]
    fn triangle_box_is_anchored_at_position() {
        let layout = SceneLayout::default();
        let b = layout.triangle_box(layout.triangle_start);
        assert_eq!(b, Aabb::new(-1.0, -0.75, 0.5, 0.5));
    }

    #[test]
    fn colors_are_opaque_and_distinct() {
        assert_eq!(IDLE_COLOR[3], 1.0);
        assert_eq!(HIT_COLOR[3], 1.0);
        assert_ne!(IDLE_COLOR, HIT_COLOR);
    }
}
