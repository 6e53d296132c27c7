use crate::color::{Channel, Color};
use crate::error::Error;

/// A snapshot of one grid cell. Changes only reach the grid through
/// [`Grid::put_pixel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pixel {
    row: usize,
    col: usize,
    color: Color,
}

impl Pixel {
    pub fn new(row: usize, col: usize, color: Color) -> Self {
        Self { row, col, color }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        self.color.channel(channel)
    }

    pub fn set_channel(&mut self, channel: Channel, value: u8) {
        self.color.set_channel(channel, value);
    }

    pub fn red(&self) -> u8 {
        self.color.red
    }

    pub fn green(&self) -> u8 {
        self.color.green
    }

    pub fn blue(&self) -> u8 {
        self.color.blue
    }

    pub fn set_red(&mut self, value: u8) {
        self.color.red = value;
    }

    pub fn set_green(&mut self, value: u8) {
        self.color.green = value;
    }

    pub fn set_blue(&mut self, value: u8) {
        self.color.blue = value;
    }

    pub fn color_distance(&self, other: &Color) -> f64 {
        self.color.distance(other)
    }
}

/// Row-major grid of colors with dimensions fixed at construction.
///
/// Coordinates are always given as `(row, col)`. Accessors panic when a
/// coordinate lies outside the grid, use [`Grid::get`] to probe instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    colors: Vec<Color>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Color::WHITE)
    }

    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        Self {
            width,
            height,
            colors: vec![color; width * height],
        }
    }

    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Color,
    {
        let colors = (0..height)
            .flat_map(|row| (0..width).map(move |col| (row, col)))
            .map(|(row, col)| f(row, col))
            .collect();
        Self {
            width,
            height,
            colors,
        }
    }

    pub fn from_colors(width: usize, height: usize, colors: Vec<Color>) -> crate::Result<Self> {
        let expected = width * height;
        if colors.len() != expected {
            return Err(Error::MismatchOfSizeBetweenDimensionsAndValues(
                expected,
                colors.len(),
            ));
        }
        Ok(Self {
            width,
            height,
            colors,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            self.contains(row, col),
            "pixel ({}, {}) is outside of {}x{} grid",
            row,
            col,
            self.width,
            self.height
        );
        row * self.width + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        if !self.contains(row, col) {
            return None;
        }
        Some(self.colors[row * self.width + col])
    }

    pub fn color(&self, row: usize, col: usize) -> Color {
        self.colors[self.index(row, col)]
    }

    pub fn set_color(&mut self, row: usize, col: usize, color: Color) {
        let index = self.index(row, col);
        self.colors[index] = color;
    }

    pub fn pixel(&self, row: usize, col: usize) -> Pixel {
        Pixel::new(row, col, self.color(row, col))
    }

    pub fn put_pixel(&mut self, pixel: Pixel) {
        self.set_color(pixel.row, pixel.col, pixel.color);
    }

    pub fn row(&self, row: usize) -> &[Color] {
        let start = self.index(row, 0);
        &self.colors[start..start + self.width]
    }

    /// Pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.colors
            .iter()
            .enumerate()
            .map(|(index, &color)| Pixel::new(index / self.width, index % self.width, color))
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub(crate) fn colors_mut(&mut self) -> impl Iterator<Item = &mut Color> {
        self.colors.iter_mut()
    }
}

#[cfg(test)]
impl Grid {
    /// Pattern `(10 * row, 10 * col, 5 * (row + col))`.
    pub fn gradient(width: usize, height: usize) -> Self {
        Grid::from_fn(width, height, |row, col| {
            Color::new((row * 10) as u8, (col * 10) as u8, ((row + col) * 5) as u8)
        })
    }
}
