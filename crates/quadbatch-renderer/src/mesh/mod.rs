//! CPU-side geometry accumulation.
//!
//! A [`MeshBuilder`] collects many primitives into one vertex/index stream so
//! the whole scene can be uploaded and drawn as a single batch.

mod builder;

pub use builder::MeshBuilder;
