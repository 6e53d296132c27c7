use std::path::PathBuf;

pub use cli::CLIParser;
pub use error::Error;
use filter::FilterOptions;
use picture::Picture;

mod cli;
pub mod collage;
pub mod color;
mod error;
pub mod filter;
pub mod grid;
mod logger;
pub mod picture;
pub mod transform;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub filters: Vec<filter::Filter>,
    pub edge_distance: f64,
}

/// Read a picture, run the requested filters in order and write the result.
pub fn filter_picture(arguments: &Arguments) -> Result<()> {
    let mut picture = Picture::open(&arguments.input_file)?;
    let options = FilterOptions::from(arguments);
    for filter in &arguments.filters {
        filter.apply(picture.grid_mut(), &options);
    }
    log::info!(
        "Applied {} filter(s) to {}",
        arguments.filters.len(),
        picture
    );
    picture.write(&arguments.output_file)
}
