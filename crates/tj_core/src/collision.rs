//! Axis-aligned bounding boxes anchored at their bottom-left corner.
//!
//! `aabb_overlap` is the test the frame loop uses. It is boundary-inclusive:
//! two boxes that only share an edge (or a corner) count as overlapping.
//! `collision_side` is a stricter classifier reporting which edge of the
//! second box the first one straddles.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Box of the given size centered on `(center_x, center_y)`.
    pub fn centered(center_x: f32, center_y: f32, width: f32, height: f32) -> Self {
        Self::new(
            center_x - width * 0.5,
            center_y - height * 0.5,
            width,
            height,
        )
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionSide {
    /// `a` straddles the left edge of `b`.
    Left,
    /// `a` straddles the right edge of `b`.
    Right,
    /// `a`'s top edge is inside `b` (it straddles `b`'s bottom edge).
    Top,
    /// `a`'s bottom edge is inside `b` (it straddles `b`'s top edge).
    Bottom,
}

impl CollisionSide {
    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl std::fmt::Display for CollisionSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

pub fn aabb_overlap(a: &Aabb, b: &Aabb) -> bool {
    !(a.right() < b.left()
        || a.left() > b.right()
        || a.top() < b.bottom()
        || a.bottom() > b.top())
}

/// Classifies a strict (non-touching) overlap by the first straddled edge,
/// checked in the order left, right, top, bottom. Returns `None` when the
/// boxes do not strictly overlap or when `a` sits entirely inside `b`.
pub fn collision_side(a: &Aabb, b: &Aabb) -> Option<CollisionSide> {
    let strict = a.right() > b.left()
        && a.left() < b.right()
        && a.top() > b.bottom()
        && a.bottom() < b.top();
    if !strict {
        return None;
    }

    if a.left() < b.left() {
        Some(CollisionSide::Left)
    } else if a.right() > b.right() {
        Some(CollisionSide::Right)
    } else if a.bottom() < b.bottom() {
        Some(CollisionSide::Top)
    } else if a.top() > b.top() {
        Some(CollisionSide::Bottom)
    } else {
        None
    }
}
