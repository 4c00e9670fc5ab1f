pub mod geometry;
pub mod gpu_context;
pub mod program;
pub mod uniform;
pub mod vertex;

pub use geometry::Mesh;
pub use gpu_context::GpuContext;
pub use program::ShaderProgram;
pub use uniform::{ShapeUniform, UniformSlot};
pub use vertex::PositionVertex;
