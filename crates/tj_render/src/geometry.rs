//! GPU-resident vertex data, one `Mesh` per shape.

use wgpu::util::DeviceExt;

use crate::vertex::PositionVertex;

/// Two triangles covering a quad listed corner by corner (0-1-2-3).
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

pub struct Mesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: Option<wgpu::Buffer>,
    pub vertex_count: u32,
    pub index_count: u32,
}

impl Mesh {
    pub fn new(
        device: &wgpu::Device,
        label: &str,
        vertices: &[PositionVertex],
        indices: Option<&[u16]>,
    ) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = indices.map(|indices| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(&padded_indices(indices)),
                usage: wgpu::BufferUsages::INDEX,
            })
        });

        Self {
            vertex_buffer,
            index_buffer,
            vertex_count: vertices.len() as u32,
            index_count: indices.map_or(0, |i| i.len() as u32),
        }
    }

    pub fn triangles(device: &wgpu::Device, label: &str, vertices: &[PositionVertex]) -> Self {
        Self::new(device, label, vertices, None)
    }

    pub fn quad(device: &wgpu::Device, label: &str, corners: &[PositionVertex; 4]) -> Self {
        Self::new(device, label, corners, Some(&QUAD_INDICES))
    }

    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        match &self.index_buffer {
            Some(index_buffer) => {
                pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                pass.draw_indexed(0..self.index_count, 0, 0..1);
            }
            None => pass.draw(0..self.vertex_count, 0..1),
        }
    }
}

/// Buffer writes must be a multiple of 4 bytes; odd u16 counts get a
/// trailing zero that `index_count` never reaches.
fn padded_indices(indices: &[u16]) -> Vec<u16> {
    let mut out = indices.to_vec();
    if out.len() % 2 != 0 {
        out.push(0);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_indices_cover_all_corners() {
        for corner in 0..4u16 {
            assert!(QUAD_INDICES.contains(&corner));
        }
        assert!(QUAD_INDICES.iter().all(|&i| i < 4));
    }

    #[test]
    fn odd_index_lists_are_padded() {
        assert_eq!(padded_indices(&[0, 1, 2]), vec![0, 1, 2, 0]);
        assert_eq!(padded_indices(&QUAD_INDICES), QUAD_INDICES.to_vec());
    }
}
