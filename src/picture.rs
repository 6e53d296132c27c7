use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Cursor};
use std::ops::Range;
use std::path::{Path, PathBuf};

use image::{ImageFormat, ImageReader, RgbImage};

use crate::color::Color;
use crate::error::Error;
use crate::grid::Grid;
use crate::transform;

const IN_MEMORY_SOURCE: &str = "<memory>";

/// A picture owning exactly one pixel grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Picture {
    file_name: Option<PathBuf>,
    grid: Grid,
}

fn open_input_file(file_path: &Path) -> crate::Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.display().to_string(), e)
    })
}

fn open_output_file(file_path: &Path) -> crate::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| {
            Error::UnableToOpenOutputFileForWriting(file_path.display().to_string(), e)
        })
}

impl Picture {
    /// A white picture of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            file_name: None,
            grid: Grid::new(width, height),
        }
    }

    pub fn open<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let reader = ImageReader::new(BufReader::new(open_input_file(path)?))
            .with_guessed_format()
            .map_err(|e| Error::UnableToDetectImageFormat(source.clone(), e))?;
        let image = reader
            .decode()
            .map_err(|e| Error::DecodingOfImageFailed(source, e))?;
        log::info!(
            "Read picture '{}' of {}x{} pixels",
            path.display(),
            image.width(),
            image.height()
        );
        let mut picture = Self::from(image.into_rgb8());
        picture.file_name = Some(path.to_path_buf());
        Ok(picture)
    }

    pub fn from_bytes(bytes: &[u8]) -> crate::Result<Self> {
        let image = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| Error::UnableToDetectImageFormat(IN_MEMORY_SOURCE.to_owned(), e))?
            .decode()
            .map_err(|e| Error::DecodingOfImageFailed(IN_MEMORY_SOURCE.to_owned(), e))?;
        Ok(Self::from(image.into_rgb8()))
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn file_name(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Copy a window of `from` into this picture, clipped at both borders.
    pub fn copy_from(
        &mut self,
        from: &Picture,
        rows: Range<usize>,
        cols: Range<usize>,
        start_row: usize,
        start_col: usize,
    ) {
        transform::copy_region(&from.grid, rows, cols, &mut self.grid, start_row, start_col);
    }

    pub fn to_rgb_image(&self) -> crate::Result<RgbImage> {
        let limit_error = || Error::DimensionsExceedEncoderLimit(self.width(), self.height());
        let width = u32::try_from(self.width()).map_err(|_| limit_error())?;
        let height = u32::try_from(self.height()).map_err(|_| limit_error())?;
        let raw = self
            .grid
            .colors()
            .iter()
            .flat_map(|c| [c.red, c.green, c.blue])
            .collect::<Vec<u8>>();
        RgbImage::from_raw(width, height, raw).ok_or_else(limit_error)
    }

    /// Encode the picture in the format implied by the extension of `path`.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let path = path.as_ref();
        let target = path.display().to_string();
        let format = ImageFormat::from_path(path)
            .map_err(|_| Error::UnsupportedOutputFormat(target.clone()))?;
        let image = self.to_rgb_image()?;
        let mut writer = BufWriter::new(open_output_file(path)?);
        image
            .write_to(&mut writer, format)
            .map_err(|e| Error::EncodingOfImageFailed(target, e))?;
        log::info!(
            "Wrote picture '{}' of {}x{} pixels",
            path.display(),
            self.width(),
            self.height()
        );
        Ok(())
    }
}

impl From<RgbImage> for Picture {
    fn from(value: RgbImage) -> Self {
        let width = value.width() as usize;
        let height = value.height() as usize;
        let grid = Grid::from_fn(width, height, |row, col| {
            Color::from(*value.get_pixel(col as u32, row as u32))
        });
        Self {
            file_name: None,
            grid,
        }
    }
}

impl From<Grid> for Picture {
    fn from(value: Grid) -> Self {
        Self {
            file_name: None,
            grid: value,
        }
    }
}

impl Display for Picture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file_name = self
            .file_name
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "None".to_owned());
        write!(
            f,
            "Picture, filename {} height {} width {}",
            file_name,
            self.height(),
            self.width()
        )
    }
}
