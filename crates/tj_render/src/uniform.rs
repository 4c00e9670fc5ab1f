use glam::{Mat4, Vec2};
use wgpu::util::DeviceExt;

/// Per-draw shader inputs. Layout matches `ShapeUniform` in `flat.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShapeUniform {
    pub transform: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl ShapeUniform {
    pub fn new(transform: Mat4, color: [f32; 4]) -> Self {
        Self {
            transform: transform.to_cols_array_2d(),
            color,
        }
    }

    pub fn translated(position: Vec2, color: [f32; 4]) -> Self {
        Self::new(tj_core::transform::translation(position.x, position.y), color)
    }
}

/// A shape's uniform buffer and the bind group exposing it at group 0.
pub struct UniformSlot {
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

impl UniformSlot {
    pub fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        label: &str,
        initial: &ShapeUniform,
    ) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::bytes_of(initial),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });
        Self { buffer, bind_group }
    }

    pub fn write(&self, queue: &wgpu::Queue, uniform: &ShapeUniform) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(uniform));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_size_matches_shader_struct() {
        // mat4x4<f32> (64) + vec4<f32> (16), 16-byte aligned.
        assert_eq!(std::mem::size_of::<ShapeUniform>(), 80);
    }

    #[test]
    fn translated_uniform_stores_column_major_offset() {
        let u = ShapeUniform::translated(Vec2::new(2.0, 3.0), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(u.transform[3], [2.0, 3.0, 0.0, 1.0]);
        assert_eq!(u.transform[0], [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(u.color, [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn bytes_start_with_transform() {
        let u = ShapeUniform::translated(Vec2::new(-1.0, -0.75), [0.4, 0.8, 0.6, 1.0]);
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&u));
        assert_eq!(floats.len(), 20);
        assert_eq!(floats[12], -1.0);
        assert_eq!(floats[13], -0.75);
        assert_eq!(&floats[16..], &[0.4, 0.8, 0.6, 1.0]);
    }
}
