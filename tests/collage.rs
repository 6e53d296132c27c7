use pixlab::color::{Channel, Color};
use pixlab::grid::Grid;
use pixlab::picture::Picture;
use pixlab::transform::{self, VerticalMirror};

const CANVAS_WIDTH: usize = 480;
const CANVAS_HEIGHT: usize = 640;

fn create_source() -> Picture {
    Picture::from(Grid::from_fn(400, 300, |row, col| {
        Color::new((col % 256) as u8, (row % 256) as u8, ((row + col) % 256) as u8)
    }))
}

const SOURCE_ROW: usize = 50;
const SOURCE_COL: usize = 240;
const SOURCE_COL_END: usize = 450;
const TARGET_ROW_LIMIT: usize = 330;
const TARGET_COL_LIMIT: usize = 410;

/// Copy the fixed source window of the lab exercise, stopping at its target limits.
fn copy(canvas: &mut Picture, from: &Picture, start_row: usize, start_col: usize) {
    let rows = SOURCE_ROW..SOURCE_ROW + TARGET_ROW_LIMIT.saturating_sub(start_row);
    let col_end = SOURCE_COL_END.min(SOURCE_COL + TARGET_COL_LIMIT.saturating_sub(start_col));
    let cols = SOURCE_COL..col_end;
    canvas.copy_from(from, rows, cols, start_row, start_col);
}

#[test]
fn test_my_collage() {
    let source = create_source();
    let mut gray = source.clone();
    transform::grayscale(gray.grid_mut());
    let mut blue = source.clone();
    transform::keep_only_channel(blue.grid_mut(), Channel::Blue);
    let mut pink = source.clone();
    transform::zero_channel(pink.grid_mut(), Channel::Green);

    let mut canvas = Picture::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    copy(&mut canvas, &blue, 100, 185);
    copy(&mut canvas, &gray, 100, 0);
    transform::mirror_vertical(canvas.grid_mut(), VerticalMirror::LeftToRight);
    copy(&mut canvas, &pink, 100, 227);

    let grid = canvas.grid();
    // gray block, source window starts at (50, 240)
    let gray_pixel = grid.color(100, 0);
    assert_eq!(gray_pixel, gray.grid().color(50, 240));
    assert_eq!(gray_pixel.red, gray_pixel.green);
    // pink block written last, rows stop at the target limit
    assert_eq!(grid.color(100, 227), pink.grid().color(50, 240));
    assert_eq!(grid.color(329, 227).green, 0);
    assert_eq!(grid.color(330, 227), Color::WHITE);
    // source is 400 columns wide, so the pink block ends at column 386
    assert_eq!(grid.color(150, 386), pink.grid().color(100, 399));
    // mirrored left half survives right of the pink block
    assert_eq!(grid.color(100, CANVAS_WIDTH - 1), gray_pixel);
    // untouched rows stay white
    assert_eq!(grid.color(0, 0), Color::WHITE);
    assert_eq!(grid.color(CANVAS_HEIGHT - 1, 10), Color::WHITE);
}
