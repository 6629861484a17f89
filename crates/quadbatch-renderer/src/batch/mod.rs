//! Dynamic mesh batching.
//!
//! A [`Batch`] owns a growable vertex/index buffer pair sized by a
//! hysteresis-banded power-of-two policy, so a scene that changes size every
//! few frames reallocates rarely instead of every frame. [`BatchRenderer`]
//! draws the whole batch with a single indexed call.

mod pipeline;
mod policy;
mod renderer;
mod storage;
mod types;

pub use policy::next_capacity;
pub use renderer::BatchRenderer;
pub use storage::{Batch, CapacityListener};
pub use types::Vertex;
