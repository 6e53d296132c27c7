use super::Axis;
use crate::color::Color;
use crate::grid::Grid;

fn mark_edge(grid: &mut Grid, (row, col): (usize, usize), neighbour: Color, threshold: f64) {
    let color = grid.color(row, col);
    let marker = if color.distance(&neighbour) > threshold {
        Color::BLACK
    } else {
        Color::WHITE
    };
    grid.set_color(row, col, marker);
}

/// Paint each pixel black if it differs from its next neighbour along
/// `axis` by more than `threshold`, white otherwise.
///
/// The pass overwrites the grid. Neighbours are always read before they
/// are painted, and the last column (or row) keeps its color.
pub fn edge_detect(grid: &mut Grid, axis: Axis, threshold: f64) {
    let (width, height) = (grid.width(), grid.height());
    match axis {
        Axis::Horizontal => {
            for row in 0..height {
                for col in 0..width.saturating_sub(1) {
                    let neighbour = grid.color(row, col + 1);
                    mark_edge(grid, (row, col), neighbour, threshold);
                }
            }
        }
        Axis::Vertical => {
            for col in 0..width {
                for row in 0..height.saturating_sub(1) {
                    let neighbour = grid.color(row + 1, col);
                    mark_edge(grid, (row, col), neighbour, threshold);
                }
            }
        }
    }
}
