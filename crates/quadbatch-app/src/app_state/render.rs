//! Frame rendering logic.

use quadbatch_renderer::DrawMode;

use super::core::QuadbatchApp;

/// Frames between performance log lines.
const LOG_INTERVAL: u32 = 240;

impl QuadbatchApp {
    /// Render a single frame and keep the frame statistics up to date.
    pub(super) fn render_frame(&mut self) {
        let Some(ref mut rs) = self.render_state else {
            return;
        };

        if let Err(e) = rs.render(self.draw_mode) {
            tracing::error!("render error: {e}");
            return;
        }

        self.timer.tick();
        self.frames_since_log += 1;
        if self.frames_since_log >= LOG_INTERVAL {
            self.frames_since_log = 0;

            let draw_calls = match self.draw_mode {
                DrawMode::Batched => u32::from(rs.batch.index_count() > 0),
                DrawMode::PerQuad => self.grid.quad_count(),
            };
            tracing::info!(
                "{} quads, {} draw calls, {:.1} fps (avg {:.2} ms, worst {:.2} ms)",
                self.grid.quad_count(),
                draw_calls,
                self.timer.average_fps(),
                self.timer.average_frame_ms(),
                self.timer.worst_frame_ms(),
            );
        }
    }
}
