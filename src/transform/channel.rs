use crate::color::{Channel, Color};
use crate::grid::Grid;

pub fn zero_channel(grid: &mut Grid, channel: Channel) {
    for color in grid.colors_mut() {
        color.set_channel(channel, 0);
    }
}

/// Zero the two channels other than `channel`.
pub fn keep_only_channel(grid: &mut Grid, channel: Channel) {
    for other in Channel::ALL.into_iter().filter(|&c| c != channel) {
        zero_channel(grid, other);
    }
}

pub fn negate(grid: &mut Grid) {
    for color in grid.colors_mut() {
        *color = color.negated();
    }
}

pub fn grayscale(grid: &mut Grid) {
    for color in grid.colors_mut() {
        let average = color.average();
        *color = Color::new(average, average, average);
    }
}

/// Replace every value of `channel` below `threshold` with `replacement`.
pub fn threshold_channel(grid: &mut Grid, channel: Channel, threshold: u8, replacement: u8) {
    for color in grid.colors_mut() {
        if color.channel(channel) < threshold {
            color.set_channel(channel, replacement);
        }
    }
}
