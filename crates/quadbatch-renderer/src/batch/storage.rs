use tracing::debug;

use super::policy::next_capacity;
use crate::gpu::RendererError;

/// Observer invoked with the new `(vertex_capacity, index_capacity)` byte
/// sizes after every buffer reallocation.
pub type CapacityListener = Box<dyn FnMut(u64, u64)>;

/// A growable vertex/index buffer pair holding one batched mesh.
///
/// Capacities are decoupled from content size: every [`update`](Batch::update)
/// re-runs the capacity policy per buffer and only reallocates when the policy
/// moves. Content is always re-uploaded in full, so reallocation never has to
/// preserve previous buffer contents. Buffers are created lazily on the first
/// update that needs capacity.
pub struct Batch {
    vertex_buffer: Option<wgpu::Buffer>,
    index_buffer: Option<wgpu::Buffer>,
    vertex_capacity: u64,
    index_capacity: u64,
    index_count: u32,
    listeners: Vec<CapacityListener>,
}

impl Batch {
    pub fn new() -> Self {
        Self {
            vertex_buffer: None,
            index_buffer: None,
            vertex_capacity: 0,
            index_capacity: 0,
            index_count: 0,
            listeners: Vec::new(),
        }
    }

    /// Number of indices currently valid for drawing.
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Allocated vertex storage in bytes.
    pub fn vertex_capacity(&self) -> u64 {
        self.vertex_capacity
    }

    /// Allocated index storage in bytes.
    pub fn index_capacity(&self) -> u64 {
        self.index_capacity
    }

    /// Whether GPU buffer objects currently exist.
    pub fn is_generated(&self) -> bool {
        self.vertex_buffer.is_some()
    }

    /// Register an observer for buffer reallocations.
    ///
    /// Listeners are invoked synchronously, in registration order, with the
    /// new byte capacities. Purely observational.
    pub fn on_capacity_change(&mut self, listener: impl FnMut(u64, u64) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Replace the batch content.
    ///
    /// Recalculates both buffer capacities, reallocates if either moved, then
    /// uploads `vertices` and `indices` from offset 0 and records the new
    /// logical index count.
    pub fn update(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        vertices: &[f32],
        indices: &[u32],
    ) -> Result<(), RendererError> {
        let required_vertex = (vertices.len() * std::mem::size_of::<f32>()) as u64;
        let required_index = (indices.len() * std::mem::size_of::<u32>()) as u64;

        self.recalculate_capacities(device, required_vertex, required_index)?;

        if let Some(buffer) = &self.vertex_buffer {
            queue.write_buffer(buffer, 0, bytemuck::cast_slice(vertices));
        }
        if let Some(buffer) = &self.index_buffer {
            queue.write_buffer(buffer, 0, bytemuck::cast_slice(indices));
        }

        self.index_count = indices.len() as u32;
        Ok(())
    }

    /// Attach the buffer pair to a render pass.
    ///
    /// No-op until the first allocation has happened; there is nothing to
    /// bind before that.
    pub fn bind<'pass>(&'pass self, pass: &mut wgpu::RenderPass<'pass>) {
        if let (Some(vertices), Some(indices)) = (&self.vertex_buffer, &self.index_buffer) {
            pass.set_vertex_buffer(0, vertices.slice(..));
            pass.set_index_buffer(indices.slice(..), wgpu::IndexFormat::Uint32);
        }
    }

    /// Eagerly release GPU storage and reset to the unallocated state.
    ///
    /// Safe to call repeatedly or on a batch that was never updated; dropping
    /// the batch releases the same resources implicitly.
    pub fn dispose(&mut self) {
        if let Some(buffer) = self.vertex_buffer.take() {
            buffer.destroy();
        }
        if let Some(buffer) = self.index_buffer.take() {
            buffer.destroy();
        }
        self.vertex_capacity = 0;
        self.index_capacity = 0;
        self.index_count = 0;
    }

    fn recalculate_capacities(
        &mut self,
        device: &wgpu::Device,
        required_vertex: u64,
        required_index: u64,
    ) -> Result<(), RendererError> {
        let new_vertex = next_capacity(self.vertex_capacity, required_vertex);
        let new_index = next_capacity(self.index_capacity, required_index);

        if new_vertex == self.vertex_capacity && new_index == self.index_capacity {
            return Ok(());
        }

        self.allocate(device, new_vertex, new_index)?;

        for listener in &mut self.listeners {
            listener(new_vertex, new_index);
        }
        Ok(())
    }

    /// Destroy and recreate both buffers at the given sizes.
    ///
    /// The pair shares one generation step: a capacity move on either side
    /// reallocates both.
    fn allocate(
        &mut self,
        device: &wgpu::Device,
        vertex_capacity: u64,
        index_capacity: u64,
    ) -> Result<(), RendererError> {
        if let Some(buffer) = self.vertex_buffer.take() {
            buffer.destroy();
        }
        if let Some(buffer) = self.index_buffer.take() {
            buffer.destroy();
        }
        // Until the new pair exists the batch is unallocated; a failed
        // allocation must not leave stale capacities behind.
        self.vertex_capacity = 0;
        self.index_capacity = 0;
        self.index_count = 0;

        device.push_error_scope(wgpu::ErrorFilter::OutOfMemory);

        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("batch vertices"),
            size: vertex_capacity,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let index_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("batch indices"),
            size: index_capacity,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        if let Some(error) = pollster::block_on(device.pop_error_scope()) {
            return Err(RendererError::AllocationFailure(error.to_string()));
        }

        self.vertex_buffer = Some(vertex_buffer);
        self.index_buffer = Some(index_buffer);
        self.vertex_capacity = vertex_capacity;
        self.index_capacity = index_capacity;

        debug!("batch buffers reallocated: {vertex_capacity}B vertices, {index_capacity}B indices");
        Ok(())
    }
}

impl Default for Batch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_batch_is_unallocated() {
        let batch = Batch::new();
        assert!(!batch.is_generated());
        assert_eq!(batch.vertex_capacity(), 0);
        assert_eq!(batch.index_capacity(), 0);
        assert_eq!(batch.index_count(), 0);
    }

    #[test]
    fn dispose_before_first_update_is_safe_and_idempotent() {
        let mut batch = Batch::new();
        batch.dispose();
        batch.dispose();
        assert!(!batch.is_generated());
        assert_eq!(batch.index_count(), 0);
    }

    #[test]
    fn listeners_are_not_invoked_on_registration() {
        let mut batch = Batch::new();
        let fired = std::rc::Rc::new(std::cell::Cell::new(0u32));
        let counter = fired.clone();
        batch.on_capacity_change(move |_, _| counter.set(counter.get() + 1));
        assert_eq!(fired.get(), 0);
    }
}
