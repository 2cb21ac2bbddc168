use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::config::ViewerConfig;
use crate::input::OrbitInput;
use crate::panel;
use crate::renderer::Renderer;
use crate::settings::SettingsListener;
use crate::timing::{Clock, FpsCounter};
use crate::viewer::SceneViewer;

/// winit application driving the viewer
pub struct App {
    config: ViewerConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    viewer: Option<SceneViewer>,
    input: OrbitInput,
    clock: Clock,
    fps: FpsCounter,
}

impl App {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            window: None,
            renderer: None,
            viewer: None,
            input: OrbitInput::new(),
            clock: Clock::new(),
            fps: FpsCounter::new(),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(renderer), Some(viewer)) =
            (&self.window, &mut self.renderer, &mut self.viewer)
        else {
            return;
        };

        let delta = self.clock.tick();
        if let Some(fps) = self.fps.record(delta) {
            log::debug!("FPS: {:.1} (frame {})", fps, viewer.frame_count());
        }

        // Panel edits land before the frame that shows them
        let overlay = if self.config.show_ui {
            let settings = viewer.settings().clone();
            let fps = self.fps.fps();
            let mut changes = Vec::new();
            let frame = renderer.overlay_mut().run(window, |ctx| {
                panel::show_fps(ctx, fps);
                changes = panel::show_settings(ctx, &settings);
            });
            for change in &changes {
                if let Err(e) = viewer.on_change(change) {
                    log::warn!("Ignoring {}: {}", change.label(), e);
                }
            }
            Some(frame)
        } else {
            None
        };

        match viewer.frame(|viewer| renderer.render(viewer, overlay)) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(self.config.window.title.as_str())
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let viewer = SceneViewer::new(&self.config, size.width, size.height);

        let renderer = match pollster::block_on(Renderer::new(window.clone(), &viewer)) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.viewer = Some(viewer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let consumed = match (&mut self.renderer, &self.window) {
            (Some(renderer), Some(window)) if self.config.show_ui => {
                renderer.handle_event(window, &event)
            }
            _ => false,
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } if !consumed => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let (Some(viewer), Some(renderer)) = (&mut self.viewer, &mut self.renderer) {
                    viewer.resize(size.width, size.height, renderer);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {
                // Presses and scrolls over the panel belong to egui; moves and
                // releases always reach the controls so drags end cleanly
                let blocked = consumed
                    && matches!(
                        event,
                        WindowEvent::MouseInput {
                            state: ElementState::Pressed,
                            ..
                        } | WindowEvent::MouseWheel { .. }
                    );
                if blocked {
                    return;
                }
                if let (Some(action), Some(viewer)) =
                    (self.input.process_event(&event), &mut self.viewer)
                {
                    viewer.handle_pointer(action);
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
