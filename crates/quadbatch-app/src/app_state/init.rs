//! Window creation and renderer initialization.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use quadbatch_renderer::RenderState;

use super::core::QuadbatchApp;

impl QuadbatchApp {
    /// Create the window and initialize the GPU renderer.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_resizable(false)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("failed to create window: {e}");
                return false;
            }
        };

        let render_state = pollster::block_on(RenderState::new(window.clone(), &self.config));

        match render_state {
            Ok(mut rs) => {
                // Capacity telemetry, mirrored to the log on every reallocation
                rs.batch.on_capacity_change(|vertex_bytes, index_bytes| {
                    tracing::info!(
                        "batch capacity: vertices {:.2} KiB, indices {:.2} KiB",
                        vertex_bytes as f64 / 1024.0,
                        index_bytes as f64 / 1024.0,
                    );
                });
                self.render_state = Some(rs);
            }
            Err(e) => {
                tracing::error!("failed to initialize renderer: {e}");
                return false;
            }
        }

        self.window = Some(window);
        tracing::info!("window created and renderer initialized");
        true
    }
}
