//! QuadbatchApp struct definition and constructor.

use std::sync::Arc;

use winit::window::Window;

use quadbatch_config::QuadbatchConfig;
use quadbatch_renderer::{DrawMode, FrameTimer, RenderState};

use crate::scene::QuadGrid;

/// Top-level application state.
pub struct QuadbatchApp {
    pub(super) config: QuadbatchConfig,
    pub(super) draw_mode: DrawMode,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    // Scene content
    pub(super) grid: QuadGrid,

    // Frame statistics
    pub(super) timer: FrameTimer,
    pub(super) frames_since_log: u32,
}

impl QuadbatchApp {
    pub fn new(config: QuadbatchConfig, draw_mode: DrawMode) -> Self {
        let grid = QuadGrid::new(&config.scene);
        Self {
            config,
            draw_mode,
            window: None,
            render_state: None,
            grid,
            timer: FrameTimer::new(),
            frames_since_log: 0,
        }
    }
}
