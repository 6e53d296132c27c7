use crate::color::Channel;
use crate::picture::Picture;
use crate::transform::{self, VerticalMirror};

/// Variants stacked top to bottom: original, grayscale, blue only, pink
/// and negated.
pub fn create_variants(source: &Picture) -> Vec<Picture> {
    let mut gray = source.clone();
    transform::grayscale(gray.grid_mut());
    let mut blue = source.clone();
    transform::keep_only_channel(blue.grid_mut(), Channel::Blue);
    let mut pink = source.clone();
    transform::zero_channel(pink.grid_mut(), Channel::Green);
    let mut negated = source.clone();
    transform::negate(negated.grid_mut());
    vec![source.clone(), gray, blue, pink, negated]
}

/// Stack every variant of `source` in its own band, then mirror the canvas
/// left to right.
pub fn create_collage(source: &Picture) -> Picture {
    let variants = create_variants(source);
    let (width, height) = (source.width(), source.height());
    let mut collage = Picture::new(width, height * variants.len());
    for (index, variant) in variants.iter().enumerate() {
        collage.copy_from(variant, 0..height, 0..width, index * height, 0);
    }
    transform::mirror_vertical(collage.grid_mut(), VerticalMirror::LeftToRight);
    log::info!("Created collage of {} variants", variants.len());
    collage
}
