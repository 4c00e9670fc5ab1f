use std::sync::Arc;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

pub struct PlatformConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            title: "Controllable Triangle with Collision".to_string(),
            width: 1920,
            height: 1080,
        }
    }
}

impl PlatformConfig {
    pub fn window_attributes(&self) -> WindowAttributes {
        WindowAttributes::default()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(self.width, self.height))
            .with_resizable(true)
    }
}

pub fn create_window(
    event_loop: &ActiveEventLoop,
    config: &PlatformConfig,
) -> Result<Arc<Window>, String> {
    let window = event_loop
        .create_window(config.window_attributes())
        .map_err(|e| format!("Failed to create window '{}': {e}", config.title))?;
    log::info!("Window created: {}x{}", config.width, config.height);
    Ok(Arc::new(window))
}
