//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use super::core::QuadbatchApp;

impl ApplicationHandler for QuadbatchApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(ref mut rs) = self.render_state {
                        rs.resize(size.width, size.height);
                    }
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event_loop, event);
            }

            WindowEvent::RedrawRequested => {
                self.render_frame();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Continuous redraw; the frame timer depends on it
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl QuadbatchApp {
    /// Process a keyboard event: grow on Space, reset on R, quit on Escape.
    fn handle_keyboard_input(&mut self, event_loop: &ActiveEventLoop, event: KeyEvent) {
        // Edge-triggered: holding Space grows exactly once
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }

        match event.logical_key {
            Key::Named(NamedKey::Space) => {
                self.grid.grow();
                tracing::debug!("grid grown to {} quads", self.grid.quad_count());
                self.rebuild_batch(event_loop);
            }
            Key::Named(NamedKey::Escape) => {
                event_loop.exit();
            }
            Key::Character(ref c) if c.as_str() == "r" || c.as_str() == "R" => {
                self.grid.reset();
                tracing::debug!("grid reset");
                self.rebuild_batch(event_loop);
            }
            _ => {}
        }
    }

    /// Rebuild the mesh for the current grid and push it into the batch.
    ///
    /// Allocation failure is not recoverable mid-frame, so it shuts the loop
    /// down instead of limping on with stale buffers.
    fn rebuild_batch(&mut self, event_loop: &ActiveEventLoop) {
        let Some(ref mut rs) = self.render_state else {
            return;
        };

        let (vertices, indices) = self.grid.build_mesh();
        if let Err(e) = rs.update_mesh(&vertices, &indices) {
            tracing::error!("batch update failed: {e}");
            event_loop.exit();
            return;
        }

        self.timer.reset();
    }
}
