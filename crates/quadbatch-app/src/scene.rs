//! The demo scene: a growable grid of quads centered on the origin.

use quadbatch_common::Vec2;
use quadbatch_config::schema::SceneConfig;
use quadbatch_renderer::MeshBuilder;

/// Square grid of quads that grows and resets on demand.
///
/// The grid is the batch's content producer: every change rebuilds the mesh
/// from a fresh builder rather than editing geometry in place.
pub struct QuadGrid {
    x_count: i32,
    y_count: i32,
    quad_size: f32,
    quad_gap: f32,
    growth_step: i32,
}

impl QuadGrid {
    /// Start with an empty grid.
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            x_count: 0,
            y_count: 0,
            quad_size: config.quad_size,
            quad_gap: config.quad_gap,
            growth_step: config.growth_step as i32,
        }
    }

    pub fn quad_count(&self) -> u32 {
        (self.x_count * self.y_count) as u32
    }

    /// Add `growth_step` rows and columns.
    pub fn grow(&mut self) {
        self.x_count += self.growth_step;
        self.y_count += self.growth_step;
    }

    /// Back to an empty grid.
    pub fn reset(&mut self) {
        self.x_count = 0;
        self.y_count = 0;
    }

    /// Rebuild the full mesh for the current grid.
    pub fn build_mesh(&self) -> (Vec<f32>, Vec<u32>) {
        let mut builder = MeshBuilder::new();
        let size = Vec2::splat(self.quad_size);

        for x in -(self.x_count / 2)..(self.x_count / 2) {
            for y in -(self.y_count / 2)..(self.y_count / 2) {
                builder.quad(Vec2::new(x as f32, y as f32) * self.quad_gap, size);
            }
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SceneConfig {
        SceneConfig::default()
    }

    #[test]
    fn new_grid_is_empty() {
        let grid = QuadGrid::new(&test_config());
        assert_eq!(grid.quad_count(), 0);
        let (vertices, indices) = grid.build_mesh();
        assert!(vertices.is_empty());
        assert!(indices.is_empty());
    }

    #[test]
    fn grow_adds_rows_and_columns() {
        let mut grid = QuadGrid::new(&test_config());
        grid.grow();
        assert_eq!(grid.quad_count(), 4); // 2x2 with the default step
        grid.grow();
        assert_eq!(grid.quad_count(), 16); // 4x4
    }

    #[test]
    fn mesh_size_matches_quad_count() {
        let mut grid = QuadGrid::new(&test_config());
        grid.grow();
        grid.grow();

        let n = grid.quad_count() as usize;
        let (vertices, indices) = grid.build_mesh();
        assert_eq!(vertices.len(), 8 * n); // 4 corners * 2 floats
        assert_eq!(indices.len(), 6 * n);
    }

    #[test]
    fn reset_empties_the_grid() {
        let mut grid = QuadGrid::new(&test_config());
        grid.grow();
        grid.reset();
        assert_eq!(grid.quad_count(), 0);
        let (vertices, indices) = grid.build_mesh();
        assert!(vertices.is_empty());
        assert!(indices.is_empty());
    }

    #[test]
    fn grid_is_centered_on_the_origin() {
        let mut grid = QuadGrid::new(&test_config());
        grid.grow();

        let (vertices, _) = grid.build_mesh();
        let xs: Vec<f32> = vertices.iter().step_by(2).copied().collect();
        let min = xs.iter().copied().fold(f32::INFINITY, f32::min);
        let max = xs.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        // Cells sit at -1 and 0 grid steps, so the extents straddle zero
        assert!(min < 0.0 && max > min);
    }
}
