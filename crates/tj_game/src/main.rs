//! Controllable triangle with jump and collision -- main loop and entry point.
//!
//! winit drives the event loop via `ApplicationHandler`. Every
//! `RedrawRequested` runs one frame:
//!
//!   1. `begin_frame()` -- measure wall-clock delta, feed the accumulator
//!   2. `while should_step()` -- sample keys and advance the simulation in
//!      fixed 1/60 s slices, so speed does not follow the refresh rate
//!   3. Upload the triangle and square uniforms, issue one draw per shape
//!
//! Any initialization failure (event loop, window, GPU) is logged and the
//! process exits with status -1.

#[cfg(test)]
mod replay;
mod scene;
mod simulation;

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use scene::{SQUARE_VERTICES, TRIANGLE_VERTICES};
use simulation::{sample_input, Simulation};
use tj_core::{InputState, Key, TimeState};
use tj_platform::PlatformConfig;
use tj_render::{GpuContext, Mesh, ShaderProgram, UniformSlot};

const INIT_FAILURE_EXIT_CODE: i32 = -1;

/// Everything created once the window exists. Dropped at exit, which
/// releases the GPU buffers and pipeline.
struct EngineState {
    window: Arc<Window>,
    gpu: GpuContext,
    time: TimeState,
    input: InputState,
    program: ShaderProgram,
    triangle_mesh: Mesh,
    square_mesh: Mesh,
    triangle_uniform: UniformSlot,
    square_uniform: UniformSlot,
    simulation: Simulation,
    was_colliding: bool,
}

impl EngineState {
    fn new(window: Arc<Window>) -> Result<Self, String> {
        let gpu = GpuContext::new(window.clone())?;

        let program = ShaderProgram::new(&gpu.device, gpu.surface_format);
        if !program.is_valid() {
            log::warn!(
                "Continuing with a shader program that reported {} diagnostic(s)",
                program.diagnostics.len()
            );
        }

        let triangle_mesh = Mesh::triangles(&gpu.device, "Triangle Vertices", &TRIANGLE_VERTICES);
        let square_mesh = Mesh::quad(&gpu.device, "Square Vertices", &SQUARE_VERTICES);

        let simulation = Simulation::default();
        let initial = simulation.frame_output();
        let triangle_uniform = UniformSlot::new(
            &gpu.device,
            &program.uniform_layout,
            "Triangle Uniform",
            &initial.triangle,
        );
        let square_uniform = UniformSlot::new(
            &gpu.device,
            &program.uniform_layout,
            "Square Uniform",
            &initial.square,
        );

        Ok(Self {
            window,
            gpu,
            time: TimeState::new(),
            input: InputState::new(),
            program,
            triangle_mesh,
            square_mesh,
            triangle_uniform,
            square_uniform,
            simulation,
            was_colliding: initial.colliding,
        })
    }

    /// Runs the fixed steps owed for this frame. Returns `false` when the
    /// player asked to quit.
    fn update(&mut self) -> bool {
        self.time.begin_frame();

        if self.input.is_down(Key::Escape) {
            return false;
        }

        while self.time.should_step() {
            let input = sample_input(&self.input);
            self.simulation.step(input, self.time.total_time);
        }

        // Edge state is only dropped once a step has seen it.
        if self.time.steps_this_frame > 0 {
            self.input.end_frame();
        }
        true
    }

    fn render(&mut self) {
        let frame = self.simulation.frame_output();
        if frame.colliding != self.was_colliding {
            log::debug!("Collision {}", if frame.colliding { "began" } else { "ended" });
            self.was_colliding = frame.colliding;
        }

        let Some((output, view)) = self.gpu.begin_frame() else {
            return;
        };

        self.triangle_uniform.write(&self.gpu.queue, &frame.triangle);
        self.square_uniform.write(&self.gpu.queue, &frame.square);

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Shape Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            pass.set_pipeline(&self.program.pipeline);

            pass.set_bind_group(0, &self.triangle_uniform.bind_group, &[]);
            self.triangle_mesh.draw(&mut pass);

            pass.set_bind_group(0, &self.square_uniform.bind_group, &[]);
            self.square_mesh.draw(&mut pass);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        self.window.pre_present_notify();
        output.present();
    }
}

struct App {
    config: PlatformConfig,
    state: Option<EngineState>,
    init_failed: bool,
}

impl App {
    fn new() -> Self {
        Self {
            config: PlatformConfig::default(),
            state: None,
            init_failed: false,
        }
    }

    fn fail_init(&mut self, event_loop: &ActiveEventLoop, err: String) {
        log::error!("Initialization failed: {err}");
        self.init_failed = true;
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() || self.init_failed {
            return;
        }
        let window = match tj_platform::create_window(event_loop, &self.config) {
            Ok(window) => window,
            Err(err) => return self.fail_init(event_loop, err),
        };
        match EngineState::new(window) {
            Ok(state) => self.state = Some(state),
            Err(err) => self.fail_init(event_loop, err),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                let w = physical_size.width;
                let h = physical_size.height;
                if w > 0 && h > 0 {
                    state.gpu.resize(w, h);
                    log::info!("Resized to {}x{}", w, h);
                }
            }

            WindowEvent::Focused(false) => state.input.release_all(),

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    if let Some(key) = map_key(key_code) {
                        match event.state {
                            ElementState::Pressed => state.input.key_down(key),
                            ElementState::Released => state.input.key_up(key),
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                if state.gpu.size.0 == 0 || state.gpu.size.1 == 0 {
                    return;
                }
                if !state.update() {
                    log::info!("Escape pressed, exiting.");
                    event_loop.exit();
                    return;
                }
                state.render();
            }

            _ => {}
        }
    }
}

fn map_key(key_code: KeyCode) -> Option<Key> {
    match key_code {
        KeyCode::ArrowLeft => Some(Key::Left),
        KeyCode::ArrowRight => Some(Key::Right),
        KeyCode::Escape => Some(Key::Escape),
        KeyCode::Space => Some(Key::Space),
        _ => None,
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting controllable triangle demo...");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(err) => {
            log::error!("Failed to create event loop: {err}");
            std::process::exit(INIT_FAILURE_EXIT_CODE);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    if let Err(err) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {err}");
        std::process::exit(INIT_FAILURE_EXIT_CODE);
    }
    if app.init_failed {
        std::process::exit(INIT_FAILURE_EXIT_CODE);
    }
}
