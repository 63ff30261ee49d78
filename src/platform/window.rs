//! Native window host (winit + wgpu)
//!
//! Owns the event loop. Redraws are requested on the pacer's schedule and
//! a due redraw runs exactly one `App::frame`. Redraws the OS asks for in
//! between repaint the last list.

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use super::fps::FpsCounter;
use super::pacing::FramePacer;
use crate::app::App;
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::renderer::SdfRenderState;

/// Window-bound GPU resources. Field order is drop order: the surface
/// must go before the window it was created from.
struct Graphics {
    renderer: SdfRenderState,
    window: Arc<Window>,
}

impl Graphics {
    fn new(event_loop: &ActiveEventLoop, config: &AppConfig) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attrs)?);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let surface = instance.create_surface(window.clone())?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;
        let info = adapter.get_info();
        log::info!("Using adapter: {} ({:?})", info.name, info.backend);

        let size = window.inner_size();
        let scale = window.scale_factor() as f32;
        let renderer = pollster::block_on(SdfRenderState::new(
            surface,
            &adapter,
            size.width,
            size.height,
            scale,
        ))?;

        log::info!(
            "Window created: {}x{} logical, {}x{} physical",
            config.width,
            config.height,
            size.width,
            size.height
        );

        Ok(Self { renderer, window })
    }
}

struct Host {
    app: App,
    pacer: FramePacer,
    fps: FpsCounter,
    gfx: Option<Graphics>,
    fatal: Option<Error>,
}

impl Host {
    fn new(config: AppConfig) -> Self {
        let pacer = FramePacer::new(config.target_fps);
        Self {
            app: App::new(config),
            pacer,
            fps: FpsCounter::new(),
            gfx: None,
            fatal: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, e: Error) {
        log::error!("Fatal: {e}");
        self.fatal = Some(e);
        event_loop.exit();
    }

    /// Step the app if the pacer says a frame is due. Returns false for
    /// out-of-schedule redraws (expose, un-minimize), which repaint the
    /// previous list without moving the ball.
    fn advance(&mut self, now: Instant) -> bool {
        if !self.pacer.is_due(now) {
            return false;
        }
        self.pacer.mark(now);
        self.fps.tick(now);
        self.app.frame(self.fps.fps());
        true
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if self.gfx.is_none() {
            return;
        }
        self.advance(Instant::now());

        let result = match self.gfx.as_mut() {
            Some(gfx) => gfx.renderer.render(self.app.draw_list()),
            None => return,
        };
        match result {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                if let Some(gfx) = self.gfx.as_mut() {
                    gfx.renderer.reconfigure();
                }
            }
            Err(wgpu::SurfaceError::OutOfMemory) => self.fail(event_loop, Error::OutOfMemory),
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }

    /// Outcome of the run: the first fatal error, if any
    fn finish(&mut self) -> Result<()> {
        match self.fatal.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl ApplicationHandler for Host {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gfx.is_some() {
            return;
        }
        match Graphics::new(event_loop, self.app.config()) {
            Ok(gfx) => {
                gfx.window.request_redraw();
                self.gfx = Some(gfx);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }

            // Escape doubles as the close key
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && !event.repeat
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape) =>
            {
                log::info!("Escape pressed, exiting.");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(gfx) = self.gfx.as_mut() {
                    gfx.renderer.resize(size.width, size.height);
                }
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(gfx) = self.gfx.as_mut() {
                    gfx.renderer.set_scale(scale_factor as f32);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gfx) = &self.gfx else {
            return;
        };

        if self.pacer.is_due(Instant::now()) {
            gfx.window.request_redraw();
        }
        if let Some(deadline) = self.pacer.next_deadline() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        log::info!("Ran {} frames", self.app.sim().frames);
        // Release the surface and window before the loop returns
        self.gfx = None;
    }
}

/// Open the window and run frames until a close request
pub fn run(config: AppConfig) -> Result<()> {
    config.validate()?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut host = Host::new(config);
    event_loop.run_app(&mut host)?;

    host.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_finish_reports_fatal_error() {
        let mut host = Host::new(AppConfig::default());
        host.fatal = Some(Error::OutOfMemory);
        assert!(matches!(host.finish(), Err(Error::OutOfMemory)));
        // Taken once; a clean run afterwards reports success
        assert!(host.finish().is_ok());
    }

    #[test]
    fn test_finish_ok_without_fatal() {
        let mut host = Host::new(AppConfig::default());
        assert!(host.finish().is_ok());
    }

    #[test]
    fn test_off_schedule_redraw_does_not_step() {
        let mut host = Host::new(AppConfig::default());
        let t0 = Instant::now();
        let interval = host.pacer.interval();

        assert!(host.advance(t0));
        assert_eq!(host.app.sim().frames, 1);
        let pos = host.app.sim().ball.pos;

        // OS redraw a few ms later: same frame is repainted
        assert!(!host.advance(t0 + Duration::from_millis(3)));
        assert_eq!(host.app.sim().frames, 1);
        assert_eq!(host.app.sim().ball.pos, pos);
        assert_eq!(host.app.draw_list().len(), 5);

        assert!(host.advance(t0 + interval));
        assert_eq!(host.app.sim().frames, 2);
    }
}
