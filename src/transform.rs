//! In-place transformations over a [`Grid`](crate::grid::Grid).
//!
//! Every function makes a single pass over the grid it is given and
//! returns nothing. Colors move between cells by value, so the only
//! interaction between reads and writes of one pass is a cell that was
//! already written earlier in the same pass.

mod channel;
mod edge;
mod mirror;
mod region;

pub use channel::{grayscale, keep_only_channel, negate, threshold_channel, zero_channel};
pub use edge::edge_detect;
pub use mirror::{mirror_diagonal, mirror_horizontal, mirror_vertical};
pub use region::{copy_region, mirror_region};

/// Direction in which the varying index runs.
///
/// `Horizontal` walks along a row (the column index changes), `Vertical`
/// walks along a column (the row index changes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Which half of the picture survives a mirror across the vertical centerline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalMirror {
    LeftToRight,
    RightToLeft,
}

/// Which half of the picture survives a mirror across the horizontal centerline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalMirror {
    TopToBottom,
    BottomToTop,
}
