//! GridMarch - a marching field of colored shapes
//!
//! Opens a window and animates sparse groups of shapes that step across a
//! grid in lockstep, wrapping at the window edges.

use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::WindowId,
};

use gridmarch::config::AppConfig;
use gridmarch::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    /// Field simulation, built once the window size is known
    simulation: Option<SimulationSystem>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        Self {
            config,
            window: None,
            render: None,
            simulation: None,
        }
    }

    /// Create window, GPU and field
    fn init_systems(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Box<dyn std::error::Error>> {
        let window = WindowSystem::create(event_loop, &self.config.window)?;
        let render = RenderSystem::new(
            window.window().clone(),
            &self.config.rendering,
            self.config.window.vsync,
        )?;

        let (width, height) = render.size();
        let simulation = SimulationSystem::from_config(&self.config, width, height)?;
        log::info!(
            "Field ready: {} groups, {} figures",
            simulation.simulation().groups().len(),
            simulation.simulation().figure_count()
        );

        window.request_redraw();
        self.window = Some(window);
        self.render = Some(render);
        self.simulation = Some(simulation);
        Ok(())
    }

    /// Tick the field if due and present the current batch
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(render), Some(simulation)) = (&mut self.render, &mut self.simulation) else {
            return;
        };

        let now = Instant::now();
        if simulation.frame_due(now) {
            if let Some(report) = simulation.step(render.batch_mut(), now) {
                if let Some(window) = &self.window {
                    window.update_title(report.fps, report.figures);
                }
            }
        }

        match render.render_frame() {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                render.reconfigure();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("{}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_systems(event_loop) {
                log::error!("Startup failed: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                // Minimized windows report zero size; keep the field's extents
                if physical_size.width == 0 || physical_size.height == 0 {
                    return;
                }
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
                if let Some(simulation) = &mut self.simulation {
                    simulation.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let (Some(window), Some(simulation)) = (&self.window, &self.simulation) {
            if simulation.frame_due(Instant::now()) {
                window.request_redraw();
            }
            event_loop.set_control_flow(ControlFlow::WaitUntil(simulation.next_frame_at()));
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration before logging so the level can come from it
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Initialize logging (RUST_LOG still wins)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting GridMarch");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    // Create event loop
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    // Create and run application
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}
