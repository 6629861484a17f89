pub mod batch;
pub mod gpu;
pub mod mesh;
pub mod perf;
pub mod render_state;

pub use batch::{Batch, BatchRenderer};
pub use gpu::{GpuContext, RendererError};
pub use mesh::MeshBuilder;
pub use perf::FrameTimer;
pub use render_state::{DrawMode, RenderState};
