use wgpu::util::DeviceExt;

use super::pipeline::SHADER_SOURCE;
use super::storage::Batch;
use super::types::{Uniforms, Vertex, INDICES_PER_QUAD};

/// Pipeline and uniform state for drawing a [`Batch`].
pub struct BatchRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl BatchRenderer {
    /// Create a new BatchRenderer targeting the given surface format.
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("batch shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("batch uniforms"),
            contents: bytemuck::cast_slice(&[Uniforms {
                resolution: [1.0, 1.0],
                view_scale: 2.0,
                _pad: 0.0,
                color: [1.0, 0.0, 0.0, 1.0],
            }]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("batch bind group layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("batch bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("batch pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("batch pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                buffers: &[Vertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
        }
    }

    /// Upload the per-frame uniforms: viewport size, view scale, fill color.
    pub fn prepare(
        &self,
        queue: &wgpu::Queue,
        viewport_width: f32,
        viewport_height: f32,
        view_scale: f32,
        color: [f32; 4],
    ) {
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::cast_slice(&[Uniforms {
                resolution: [viewport_width, viewport_height],
                view_scale,
                _pad: 0.0,
                color,
            }]),
        );
    }

    /// Draw the whole batch with a single indexed call.
    pub fn draw<'pass>(&'pass self, pass: &mut wgpu::RenderPass<'pass>, batch: &'pass Batch) {
        if batch.index_count() == 0 {
            return;
        }

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        batch.bind(pass);
        pass.draw_indexed(0..batch.index_count(), 0, 0..1);
    }

    /// Draw the same content one quad at a time, as 6-index windows.
    ///
    /// Exists only to make the per-draw-call overhead that batching removes
    /// visible in the frame timer.
    pub fn draw_per_quad<'pass>(
        &'pass self,
        pass: &mut wgpu::RenderPass<'pass>,
        batch: &'pass Batch,
    ) {
        if batch.index_count() == 0 {
            return;
        }

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        batch.bind(pass);

        let mut start = 0;
        while start < batch.index_count() {
            let end = (start + INDICES_PER_QUAD).min(batch.index_count());
            pass.draw_indexed(start..end, 0, 0..1);
            start = end;
        }
    }
}
