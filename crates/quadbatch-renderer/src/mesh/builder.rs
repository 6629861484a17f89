use quadbatch_common::Vec2;

/// Accumulates 2D quads into a shared vertex/index stream.
///
/// Positions are stored as flat `f32` pairs; indices reference positions
/// (index n refers to floats `2n` and `2n+1`). Each appended primitive gets
/// its indices biased by the running offset so all primitives occupy disjoint
/// blocks of the shared vertex space.
#[derive(Debug, Default)]
pub struct MeshBuilder {
    vertices: Vec<f32>,
    indices: Vec<u32>,
    highest_index: u32,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next unused vertex index, i.e. the bias the next primitive gets.
    pub fn offset(&self) -> u32 {
        self.highest_index
    }

    /// Append an axis-aligned quad centered at `center` with extent `size`.
    ///
    /// Corners are emitted lower-left, upper-left, upper-right, lower-right,
    /// indexed as two triangles (`0,1,2` and `3,0,2`) relative to the current
    /// offset. Chainable.
    pub fn quad(&mut self, center: Vec2, size: Vec2) -> &mut Self {
        let half = size * 0.5;
        let lower = center - half;
        let upper = center + half;

        self.vertices.extend_from_slice(&[
            lower.x, lower.y, //
            lower.x, upper.y, //
            upper.x, upper.y, //
            upper.x, lower.y,
        ]);

        let offset = self.highest_index;
        for index in [0u32, 1, 2, 3, 0, 2] {
            let index = index + offset;
            if index >= self.highest_index {
                self.highest_index = index + 1;
            }
            self.indices.push(index);
        }

        self
    }

    /// Flattened copies of the accumulated vertex and index data.
    ///
    /// Internal state is left untouched, so repeated calls without
    /// intervening appends return identical arrays.
    pub fn build(&self) -> (Vec<f32>, Vec<u32>) {
        (self.vertices.clone(), self.indices.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_builds_nothing() {
        let builder = MeshBuilder::new();
        let (vertices, indices) = builder.build();
        assert!(vertices.is_empty());
        assert!(indices.is_empty());
        assert_eq!(builder.offset(), 0);
    }

    #[test]
    fn single_quad_corner_order() {
        let mut builder = MeshBuilder::new();
        builder.quad(Vec2::new(1.0, 2.0), Vec2::new(4.0, 6.0));

        let (vertices, indices) = builder.build();
        #[rustfmt::skip]
        let expected = vec![
            -1.0, -1.0, // lower-left
            -1.0,  5.0, // upper-left
             3.0,  5.0, // upper-right
             3.0, -1.0, // lower-right
        ];
        assert_eq!(vertices, expected);
        assert_eq!(indices, vec![0, 1, 2, 3, 0, 2]);
    }

    #[test]
    fn n_quads_produce_dense_blocks() {
        let mut builder = MeshBuilder::new();
        let n = 7u32;
        for i in 0..n {
            builder.quad(Vec2::new(i as f32, 0.0), Vec2::splat(1.0));
        }

        let (vertices, indices) = builder.build();
        assert_eq!(vertices.len(), (4 * 2 * n) as usize);
        assert_eq!(indices.len(), (6 * n) as usize);
        assert_eq!(builder.offset(), 4 * n);
        assert!(indices.iter().all(|&i| i < 4 * n));
    }

    #[test]
    fn second_quad_indices_are_biased() {
        let mut builder = MeshBuilder::new();
        builder
            .quad(Vec2::new(0.0, 0.0), Vec2::splat(1.0))
            .quad(Vec2::new(2.0, 0.0), Vec2::splat(1.0));

        let (_, indices) = builder.build();
        assert_eq!(&indices[6..], &[4, 5, 6, 7, 4, 6]);
    }

    #[test]
    fn offset_advances_by_four_per_quad() {
        let mut builder = MeshBuilder::new();
        assert_eq!(builder.offset(), 0);
        builder.quad(Vec2::new(0.0, 0.0), Vec2::splat(1.0));
        assert_eq!(builder.offset(), 4);
        builder.quad(Vec2::new(1.0, 0.0), Vec2::splat(1.0));
        assert_eq!(builder.offset(), 8);
    }

    #[test]
    fn build_twice_returns_identical_data() {
        let mut builder = MeshBuilder::new();
        builder.quad(Vec2::new(0.5, -0.5), Vec2::splat(0.25));

        let first = builder.build();
        let second = builder.build();
        assert_eq!(first, second);
    }
}
