use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToDetectImageFormat(String, std::io::Error),
    DecodingOfImageFailed(String, image::ImageError),
    UnsupportedOutputFormat(String),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    EncodingOfImageFailed(String, image::ImageError),
    MismatchOfSizeBetweenDimensionsAndValues(usize, usize),
    DimensionsExceedEncoderLimit(usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToDetectImageFormat(path, error) => {
                write!(
                    f,
                    "Unable to detect image format of '{}': {}",
                    path, error
                )
            }
            Self::DecodingOfImageFailed(source, error) => {
                write!(f, "Decoding of image '{}' failed: {}", source, error)
            }
            Self::UnsupportedOutputFormat(path) => {
                write!(
                    f,
                    "No supported image format matches the extension of '{}'",
                    path
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::EncodingOfImageFailed(path, error) => {
                write!(f, "Encoding of image '{}' failed: {}", path, error)
            }
            Self::MismatchOfSizeBetweenDimensionsAndValues(expected, actual) => {
                write!(
                    f,
                    "Number of pixels do not match the dimensions. Expected {}, but got {}.",
                    expected, actual
                )
            }
            Self::DimensionsExceedEncoderLimit(width, height) => {
                write!(
                    f,
                    "Picture of {}x{} pixels exceeds the dimensions supported by the encoder",
                    width, height
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToOpenInputFileForReading(_, error)
            | Self::UnableToDetectImageFormat(_, error)
            | Self::UnableToOpenOutputFileForWriting(_, error) => Some(error),
            Self::DecodingOfImageFailed(_, error) | Self::EncodingOfImageFailed(_, error) => {
                Some(error)
            }
            _ => None,
        }
    }
}
