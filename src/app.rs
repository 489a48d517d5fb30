use std::sync::Arc;

use anyhow::Result;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use crate::core::{
    Clock, Controller, FpsCounter, HeadlessPresenter, SpinningQuad, SurfaceRenderer,
    WinitController, BACKGROUND,
};
use crate::display::Display;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Window settings fixed at startup
#[derive(Debug, Clone)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

struct App {
    settings: WindowSettings,
    // Taken when the window is created
    quad: Option<SpinningQuad>,
    window: Option<Arc<Window>>,
    display: Option<Display<SurfaceRenderer>>,
    controller: WinitController,
    clock: Clock,
    fps: FpsCounter,
}

impl App {
    fn new(settings: WindowSettings, quad: SpinningQuad) -> Self {
        Self {
            settings,
            quad: Some(quad),
            window: None,
            display: None,
            controller: WinitController::new(),
            clock: Clock::new(),
            fps: FpsCounter::new(FPS_UPDATE_INTERVAL),
        }
    }

    fn create_display(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let Some(quad) = self.quad.take() else {
            return Ok(());
        };

        let window = Arc::new(
            event_loop.create_window(
                Window::default_attributes()
                    .with_title(self.settings.title.clone())
                    .with_inner_size(winit::dpi::PhysicalSize::new(
                        self.settings.width,
                        self.settings.height,
                    )),
            )?,
        );

        let (width, height) = quad.surface().dimensions();
        let renderer = SurfaceRenderer::new(window.clone(), width, height)?;
        log::info!("Window created: {}x{}", width, height);

        self.window = Some(window);
        self.display = Some(Display::new(quad, renderer));
        self.clock.reset();
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let delta = self.clock.tick();
        if let Some(fps) = self.fps.record(delta) {
            log::debug!("FPS: {:.1}", fps);
        }

        if let Some(display) = &mut self.display {
            if let Err(e) = display.draw() {
                log::error!("Render error: {:#}", e);
                event_loop.exit();
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.display.is_some() {
            return;
        }

        if let Err(e) = self.create_display(event_loop) {
            log::error!("Failed to initialize display: {:#}", e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.controller.process_event(&event);
        if self.controller.exit_requested() {
            log::info!("Exit requested");
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                log::debug!("Window resized to {}x{}", size.width, size.height);
                if let Some(display) = &mut self.display {
                    display.presenter_mut().resize(size.into());
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Open a window and animate until Escape or close
pub fn run_windowed(settings: WindowSettings, quad: SpinningQuad) -> Result<()> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(settings, quad);
    event_loop.run_app(&mut app)?;
    Ok(())
}

/// Tick `frames` frames without a window; returns the finished display
pub fn run_headless(quad: SpinningQuad, frames: u64) -> Result<Display<HeadlessPresenter>> {
    let mut display = Display::new(quad, HeadlessPresenter::new(BACKGROUND));
    for _ in 0..frames {
        display.draw()?;
    }

    let quad = display.quad();
    let state = quad.state();
    log::info!(
        "Headless run finished: {} frames, angle {:.4} rad, pulse {:.4}, {} lit pixels",
        display.presenter().frames(),
        state.angle,
        state.pulse(quad.config()),
        display.presenter().last_lit()
    );
    Ok(display)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AnimationConfig;
    use crate::math::WorldWindow;

    #[test]
    fn test_run_headless() {
        let quad = SpinningQuad::new(200, 150, WorldWindow::default(), AnimationConfig::default()).unwrap();
        let display = run_headless(quad, 25).unwrap();

        assert_eq!(display.presenter().frames(), 25);
        assert_eq!(display.quad().state().frame, 25);
        assert!(display.presenter().last_lit() > 0);
    }

    #[test]
    fn test_run_headless_zero_frames() {
        let quad = SpinningQuad::new(10, 10, WorldWindow::default(), AnimationConfig::default()).unwrap();
        let display = run_headless(quad, 0).unwrap();
        assert_eq!(display.presenter().frames(), 0);
    }
}
