use std::ops::Range;

use super::Axis;
use crate::grid::Grid;

fn reflect(index: usize, mirror_point: usize) -> usize {
    (2 * mirror_point).checked_sub(index).unwrap_or_else(|| {
        panic!(
            "index {} has no reflection about mirror point {}",
            index, mirror_point
        )
    })
}

/// Mirror a window of the grid about `mirror_point`.
///
/// Every cell in `rows` x `cols` is copied to its reflection along `axis`,
/// i.e. to column `2 * mirror_point - col` for [`Axis::Horizontal`] and to
/// row `2 * mirror_point - row` for [`Axis::Vertical`]. Reflections
/// outside the grid panic like any other out-of-bounds access.
pub fn mirror_region(
    grid: &mut Grid,
    rows: Range<usize>,
    cols: Range<usize>,
    axis: Axis,
    mirror_point: usize,
) {
    for row in rows {
        for col in cols.clone() {
            let (target_row, target_col) = match axis {
                Axis::Horizontal => (row, reflect(col, mirror_point)),
                Axis::Vertical => (reflect(row, mirror_point), col),
            };
            let color = grid.color(row, col);
            grid.set_color(target_row, target_col, color);
        }
    }
}

/// Copy the `rows` x `cols` window of `source` into `destination` with its
/// top left corner at `(dest_row, dest_col)`.
///
/// The copy is clipped: it stops at whichever grid's border is reached
/// first, so windows reaching past either grid are truncated and a target
/// origin outside `destination` writes nothing.
pub fn copy_region(
    source: &Grid,
    rows: Range<usize>,
    cols: Range<usize>,
    destination: &mut Grid,
    dest_row: usize,
    dest_col: usize,
) {
    let (source_height, source_width) = (source.height(), source.width());
    let (dest_height, dest_width) = (destination.height(), destination.width());
    let row_pairs = rows
        .zip(dest_row..dest_height)
        .take_while(|&(from, _)| from < source_height);
    for (from_row, to_row) in row_pairs {
        let col_pairs = cols
            .clone()
            .zip(dest_col..dest_width)
            .take_while(|&(from, _)| from < source_width);
        for (from_col, to_col) in col_pairs {
            destination.set_color(to_row, to_col, source.color(from_row, from_col));
        }
    }
}
