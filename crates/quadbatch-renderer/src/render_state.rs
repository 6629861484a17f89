//! Per-window rendering orchestration.

use std::sync::Arc;
use winit::window::Window;

use quadbatch_common::Color;
use quadbatch_config::QuadbatchConfig;

use crate::batch::{Batch, BatchRenderer};
use crate::gpu::{GpuContext, RendererError};

/// How the frame's draw calls are issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    /// One indexed draw for the whole batch.
    Batched,
    /// One indexed draw per quad, for comparing draw-call overhead.
    PerQuad,
}

/// Core rendering state: GPU context, batch, and draw pipeline.
pub struct RenderState {
    pub gpu: GpuContext,
    pub batch: Batch,
    renderer: BatchRenderer,
    view_scale: f32,
    fill_color: [f32; 4],
    clear_color: wgpu::Color,
}

impl RenderState {
    /// Create a fully initialized render state from a window.
    pub async fn new(window: Arc<Window>, config: &QuadbatchConfig) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window, config.window.vsync).await?;
        let renderer = BatchRenderer::new(&gpu.device, gpu.format());

        // Validation guarantees a parseable color; stay red on the off chance
        let fill_color = Color::from_hex(&config.scene.color)
            .unwrap_or(Color::from_rgba(255, 0, 0, 255))
            .to_f32_array();

        Ok(Self {
            gpu,
            batch: Batch::new(),
            renderer,
            view_scale: config.scene.view_scale,
            fill_color,
            clear_color: wgpu::Color::BLACK,
        })
    }

    /// Handle a window resize by reconfiguring the surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    /// Push replacement mesh content into the batch.
    pub fn update_mesh(&mut self, vertices: &[f32], indices: &[u32]) -> Result<(), RendererError> {
        self.batch
            .update(&self.gpu.device, &self.gpu.queue, vertices, indices)
    }

    /// Render one frame: clear, then draw the batch in the given mode.
    pub fn render(&mut self, mode: DrawMode) -> Result<(), RendererError> {
        let output = self.gpu.current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer.prepare(
            &self.gpu.queue,
            self.gpu.size.width as f32,
            self.gpu.size.height as f32,
            self.view_scale,
            self.fill_color,
        );

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("quadbatch frame encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("quadbatch frame pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            match mode {
                DrawMode::Batched => self.renderer.draw(&mut pass, &self.batch),
                DrawMode::PerQuad => self.renderer.draw_per_quad(&mut pass, &self.batch),
            }
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
