//! The widget: window, animation loop and lifecycle.
//!
//! [`LogoWidget::run`] opens a fixed 350x150 window, decodes the logo
//! bitmap, builds the particle field and then runs one physics step plus one
//! draw per display refresh until the window closes. The loop is driven by
//! the host's frame presentation: every `RedrawRequested` performs exactly
//! one step and immediately requests the next, so a slow frame delays the
//! following step but never skips or batches it.

use std::path::PathBuf;
use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::error::{BitmapError, WidgetError};
use crate::field::build_field;
use crate::gpu::GpuState;
use crate::input::PointerState;
use crate::particle::{Particle, ParticleInstance};
use crate::physics;
use crate::time::Time;

/// Logical surface footprint, fixed by the widget.
pub const SURFACE_WIDTH: f64 = 350.0;
pub const SURFACE_HEIGHT: f64 = 150.0;

/// How often the FPS debug line is emitted, in frames.
const FPS_LOG_INTERVAL: u64 = 300;

/// An interactive particle rendering of a logo bitmap.
///
/// Construction is cheap; everything fallible happens inside [`run`], which
/// blocks until the window is closed and returns the first fatal
/// initialization error, if any.
///
/// [`run`]: LogoWidget::run
pub struct LogoWidget {
    bitmap_path: PathBuf,
}

impl LogoWidget {
    /// Create a widget that will animate the bitmap at `bitmap_path`.
    pub fn new(bitmap_path: impl Into<PathBuf>) -> Self {
        Self {
            bitmap_path: bitmap_path.into(),
        }
    }

    /// Run the animation. Blocks until the window is closed.
    pub fn run(self) -> Result<(), WidgetError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self.bitmap_path);
        event_loop.run_app(&mut app)?;

        match app.failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

struct App {
    bitmap_path: PathBuf,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    particles: Vec<Particle>,
    instances: Vec<ParticleInstance>,
    pointer: PointerState,
    time: Time,
    failure: Option<WidgetError>,
    stopped: bool,
}

impl App {
    fn new(bitmap_path: PathBuf) -> Self {
        Self {
            bitmap_path,
            window: None,
            gpu: None,
            particles: Vec::new(),
            instances: Vec::new(),
            pointer: PointerState::new(),
            time: Time::new(),
            failure: None,
            stopped: false,
        }
    }

    /// Decode the bitmap, build the field and bring up the GPU. Any error
    /// here is fatal; the widget has no degraded mode.
    fn init(&mut self, window: Arc<Window>) -> Result<(), WidgetError> {
        let bytes = std::fs::read(&self.bitmap_path).map_err(BitmapError::Io)?;
        let bitmap = image::load_from_memory(&bytes)
            .map_err(BitmapError::ImageLoad)?
            .to_rgba8();

        let size = window.inner_size();
        self.particles = build_field(&bitmap, size.width, size.height);
        self.instances = self.particles.iter().map(Particle::instance).collect();
        log::info!(
            "Sampled {} particles from {} ({}x{} bitmap on a {}x{} canvas)",
            self.particles.len(),
            self.bitmap_path.display(),
            bitmap.width(),
            bitmap.height(),
            size.width,
            size.height
        );

        let gpu = pollster::block_on(GpuState::new(window.clone(), &self.instances))?;
        self.gpu = Some(gpu);

        // Kick off the continuous redraw cycle.
        window.request_redraw();
        Ok(())
    }

    /// One iteration of the animation loop: a physics step, an upload and a
    /// draw, then reschedule. Returns `true` when the loop must stop.
    fn frame(&mut self) -> bool {
        let (Some(window), Some(gpu)) = (self.window.as_ref(), self.gpu.as_mut()) else {
            return false;
        };

        physics::step(&mut self.particles, &self.pointer);
        for (instance, particle) in self.instances.iter_mut().zip(&self.particles) {
            *instance = particle.instance();
        }
        gpu.upload(&self.instances);

        match gpu.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = window.inner_size();
                gpu.resize(size);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Surface out of memory, stopping");
                return true;
            }
            Err(e) => log::warn!("Dropped frame: {:?}", e),
        }

        self.time.update();
        if self.time.frame() % FPS_LOG_INTERVAL == 0 {
            log::debug!("{:.1} fps, {} particles", self.time.fps(), self.particles.len());
        }

        window.request_redraw();
        false
    }

    /// Drop the window, GPU resources and particle state. Idempotent; once
    /// released, no further frames run.
    fn release(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;
        // Dropping the window cancels the pending redraw cycle; dropping the
        // GPU state releases the pipeline and buffers.
        self.gpu = None;
        self.window = None;
        self.particles = Vec::new();
        self.instances = Vec::new();
    }

    fn teardown(&mut self, event_loop: &ActiveEventLoop) {
        self.release();
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.stopped || self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("lume")
            .with_inner_size(winit::dpi::LogicalSize::new(SURFACE_WIDTH, SURFACE_HEIGHT))
            .with_resizable(false);

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.failure = Some(WidgetError::Window(e));
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        if let Err(e) = self.init(window) {
            log::error!("Initialization failed: {}", e);
            self.failure = Some(e);
            self.teardown(event_loop);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if self.stopped {
            return;
        }

        self.pointer.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => self.teardown(event_loop),
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                if self.frame() {
                    self.teardown(event_loop);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_is_idempotent() {
        let mut app = App::new(PathBuf::from("logo.png"));
        app.release();
        assert!(app.stopped);
        assert!(app.window.is_none() && app.gpu.is_none());

        // A second release is a no-op, not a panic.
        app.release();
        assert!(app.stopped);
    }

    #[test]
    fn test_no_frames_after_release() {
        let mut app = App::new(PathBuf::from("logo.png"));
        app.release();

        // With window and GPU gone the loop body refuses to run; the frame
        // counter proves no step happened.
        let frames_before = app.time.frame();
        assert!(!app.frame());
        assert_eq!(app.time.frame(), frames_before);
    }
}
