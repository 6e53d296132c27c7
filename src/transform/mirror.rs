use super::{HorizontalMirror, VerticalMirror};
use crate::grid::Grid;

/// Reflect every row across the vertical centerline.
pub fn mirror_vertical(grid: &mut Grid, direction: VerticalMirror) {
    let width = grid.width();
    let source_columns = match direction {
        VerticalMirror::LeftToRight => 0..width / 2,
        VerticalMirror::RightToLeft => width / 2..width,
    };
    for row in 0..grid.height() {
        for col in source_columns.clone() {
            let color = grid.color(row, col);
            grid.set_color(row, width - 1 - col, color);
        }
    }
}

/// Reflect every column across the horizontal centerline.
pub fn mirror_horizontal(grid: &mut Grid, direction: HorizontalMirror) {
    let height = grid.height();
    let source_rows = match direction {
        HorizontalMirror::TopToBottom => 0..height / 2,
        HorizontalMirror::BottomToTop => height / 2..height,
    };
    for row in source_rows {
        for col in 0..grid.width() {
            let color = grid.color(row, col);
            grid.set_color(height - 1 - row, col, color);
        }
    }
}

/// Overwrite the upper triangle of the leading square with the
/// transposed lower triangle.
pub fn mirror_diagonal(grid: &mut Grid) {
    let size = grid.width().min(grid.height());
    for row in 0..size {
        for col in row + 1..size {
            let color = grid.color(col, row);
            grid.set_color(row, col, color);
        }
    }
}
