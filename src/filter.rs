use clap::{builder::PossibleValue, ValueEnum};

use crate::color::Channel;
use crate::grid::Grid;
use crate::logger::log_pass;
use crate::transform::{self, Axis, HorizontalMirror, VerticalMirror};
use crate::Arguments;

const UNDERWATER_BLUE_THRESHOLD: u8 = 150;
const UNDERWATER_BLUE_REPLACEMENT: u8 = 125;

/// Named filters of the picture lab, each one pass over the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Filter {
    ZeroRed,
    ZeroGreen,
    ZeroBlue,
    KeepOnlyRed,
    KeepOnlyGreen,
    KeepOnlyBlue,
    MakePink,
    Negate,
    Grayscale,
    FixUnderwater,
    MirrorVertical,
    MirrorVerticalRightToLeft,
    MirrorHorizontal,
    MirrorHorizontalBottomToTop,
    MirrorDiagonal,
    EdgeDetection,
    EdgeDetectionVertical,
}

impl ValueEnum for Filter {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::ZeroRed,
            Self::ZeroGreen,
            Self::ZeroBlue,
            Self::KeepOnlyRed,
            Self::KeepOnlyGreen,
            Self::KeepOnlyBlue,
            Self::MakePink,
            Self::Negate,
            Self::Grayscale,
            Self::FixUnderwater,
            Self::MirrorVertical,
            Self::MirrorVerticalRightToLeft,
            Self::MirrorHorizontal,
            Self::MirrorHorizontalBottomToTop,
            Self::MirrorDiagonal,
            Self::EdgeDetection,
            Self::EdgeDetectionVertical,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.name()))
    }
}

impl Filter {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ZeroRed => "zero-red",
            Self::ZeroGreen => "zero-green",
            Self::ZeroBlue => "zero-blue",
            Self::KeepOnlyRed => "keep-only-red",
            Self::KeepOnlyGreen => "keep-only-green",
            Self::KeepOnlyBlue => "keep-only-blue",
            Self::MakePink => "make-pink",
            Self::Negate => "negate",
            Self::Grayscale => "grayscale",
            Self::FixUnderwater => "fix-underwater",
            Self::MirrorVertical => "mirror-vertical",
            Self::MirrorVerticalRightToLeft => "mirror-vertical-right-to-left",
            Self::MirrorHorizontal => "mirror-horizontal",
            Self::MirrorHorizontalBottomToTop => "mirror-horizontal-bottom-to-top",
            Self::MirrorDiagonal => "mirror-diagonal",
            Self::EdgeDetection => "edge-detection",
            Self::EdgeDetectionVertical => "edge-detection-vertical",
        }
    }

    pub fn apply(&self, grid: &mut Grid, options: &FilterOptions) {
        match self {
            Self::ZeroRed => transform::zero_channel(grid, Channel::Red),
            Self::ZeroGreen | Self::MakePink => transform::zero_channel(grid, Channel::Green),
            Self::ZeroBlue => transform::zero_channel(grid, Channel::Blue),
            Self::KeepOnlyRed => transform::keep_only_channel(grid, Channel::Red),
            Self::KeepOnlyGreen => transform::keep_only_channel(grid, Channel::Green),
            Self::KeepOnlyBlue => transform::keep_only_channel(grid, Channel::Blue),
            Self::Negate => transform::negate(grid),
            Self::Grayscale => transform::grayscale(grid),
            Self::FixUnderwater => transform::threshold_channel(
                grid,
                Channel::Blue,
                UNDERWATER_BLUE_THRESHOLD,
                UNDERWATER_BLUE_REPLACEMENT,
            ),
            Self::MirrorVertical => transform::mirror_vertical(grid, VerticalMirror::LeftToRight),
            Self::MirrorVerticalRightToLeft => {
                transform::mirror_vertical(grid, VerticalMirror::RightToLeft)
            }
            Self::MirrorHorizontal => {
                transform::mirror_horizontal(grid, HorizontalMirror::TopToBottom)
            }
            Self::MirrorHorizontalBottomToTop => {
                transform::mirror_horizontal(grid, HorizontalMirror::BottomToTop)
            }
            Self::MirrorDiagonal => transform::mirror_diagonal(grid),
            Self::EdgeDetection => {
                transform::edge_detect(grid, Axis::Horizontal, options.edge_distance)
            }
            Self::EdgeDetectionVertical => {
                transform::edge_detect(grid, Axis::Vertical, options.edge_distance)
            }
        }
        log_pass(self.name(), grid.width(), grid.height());
    }
}

pub struct FilterOptions {
    /// color distance above which two neighbours form an edge
    pub edge_distance: f64,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            edge_distance: 10.0,
        }
    }
}

impl From<&Arguments> for FilterOptions {
    fn from(value: &Arguments) -> Self {
        Self {
            edge_distance: value.edge_distance,
        }
    }
}
