use clap::{builder::PossibleValue, ValueEnum};
use image::Rgb;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

impl ValueEnum for Channel {
    fn value_variants<'a>() -> &'a [Self] {
        &Self::ALL
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Red => Some(PossibleValue::new("red")),
            Self::Green => Some(PossibleValue::new("green")),
            Self::Blue => Some(PossibleValue::new("blue")),
        }
    }
}

/// An 8 bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Color { red, green, blue }
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    pub fn set_channel(&mut self, channel: Channel, value: u8) {
        match channel {
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
        }
    }

    /// Euclidean distance between two colors in RGB space.
    pub fn distance(&self, other: &Color) -> f64 {
        let red = self.red as f64 - other.red as f64;
        let green = self.green as f64 - other.green as f64;
        let blue = self.blue as f64 - other.blue as f64;
        (red * red + green * green + blue * blue).sqrt()
    }

    /// Integer mean of the three channels, rounded down.
    pub fn average(&self) -> u8 {
        let sum = self.red as u16 + self.green as u16 + self.blue as u16;
        (sum / 3) as u8
    }

    pub fn negated(&self) -> Self {
        Color {
            red: u8::MAX - self.red,
            green: u8::MAX - self.green,
            blue: u8::MAX - self.blue,
        }
    }
}

impl From<Rgb<u8>> for Color {
    fn from(value: Rgb<u8>) -> Self {
        let Rgb([red, green, blue]) = value;
        Color { red, green, blue }
    }
}

impl From<Color> for Rgb<u8> {
    fn from(value: Color) -> Self {
        Rgb([value.red, value.green, value.blue])
    }
}
