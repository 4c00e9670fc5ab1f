//! Shader program: the flat-color WGSL module plus the render pipeline that
//! links its vertex and fragment stages.
//!
//! Compile and link diagnostics are captured with validation error scopes and
//! logged. Construction always returns a program, even a broken one; draws
//! made with it produce undefined output instead of aborting.

use std::borrow::Cow;

use crate::vertex::PositionVertex;

pub const SHADER_SOURCE: &str = include_str!("shaders/flat.wgsl");
pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

pub struct ShaderProgram {
    pub pipeline: wgpu::RenderPipeline,
    pub uniform_layout: wgpu::BindGroupLayout,
    /// Diagnostics reported while building, empty when the program is sound.
    pub diagnostics: Vec<String>,
}

impl ShaderProgram {
    pub fn new(device: &wgpu::Device, target_format: wgpu::TextureFormat) -> Self {
        Self::from_source(device, target_format, SHADER_SOURCE)
    }

    pub fn from_source(
        device: &wgpu::Device,
        target_format: wgpu::TextureFormat,
        source: &str,
    ) -> Self {
        let mut diagnostics = Vec::new();

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Flat Shader"),
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(source)),
        });
        if let Some(err) = pollster::block_on(device.pop_error_scope()) {
            log::error!("Shader compilation failed:\n{err}");
            diagnostics.push(format!("compile: {err}"));
        }

        let uniform_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Shape Uniform Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Flat Pipeline Layout"),
            bind_group_layouts: &[&uniform_layout],
            push_constant_ranges: &[],
        });

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Flat Pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &module,
                entry_point: Some(VERTEX_ENTRY),
                buffers: &[PositionVertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &module,
                entry_point: Some(FRAGMENT_ENTRY),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });
        if let Some(err) = pollster::block_on(device.pop_error_scope()) {
            log::error!("Program link failed:\n{err}");
            diagnostics.push(format!("link: {err}"));
        }

        Self {
            pipeline,
            uniform_layout,
            diagnostics,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
