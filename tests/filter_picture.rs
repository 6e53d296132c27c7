use pixlab::color::Color;
use pixlab::grid::Grid;
use pixlab::picture::Picture;
use pixlab::{filter_picture, CLIParser};
use std::fs;
use std::path::{Path, PathBuf};

const INPUT_IMAGE_NAME: &str = "filter_input.png";
const RESULT_IMAGE_NAME: &str = "filter_result.png";

fn get_tmp_path(file_name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_TARGET_TMPDIR"));
    path.push(file_name);
    path
}

fn create_input_picture() -> Picture {
    Picture::from(Grid::from_fn(6, 4, |row, col| {
        Color::new((row * 40) as u8, (col * 40) as u8, 100)
    }))
}

fn cleanup(path: &Path) {
    if path.exists() && path.is_file() {
        fs::remove_file(path).expect("Deletion of output file failed");
    }
}

#[test]
fn test_filter_picture() {
    let input_image_path = get_tmp_path(INPUT_IMAGE_NAME);
    let result_image_path = get_tmp_path(RESULT_IMAGE_NAME);
    cleanup(&result_image_path);
    let input = create_input_picture();
    input.write(&input_image_path).expect("Writing input failed");

    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        input_image_path.to_str().unwrap(),
        result_image_path.to_str().unwrap(),
        "-f",
        "negate",
        "-f",
        "mirror-vertical",
    ]);
    filter_picture(&arguments).expect("Filtering failed");
    assert!(result_image_path.exists(), "Output file was not created");

    let result = Picture::open(&result_image_path).expect("Reading result failed");
    assert_eq!(result.width(), 6);
    assert_eq!(result.height(), 4);
    for row in 0..4 {
        for col in 0..3 {
            let expected = input.grid().color(row, col).negated();
            assert_eq!(result.grid().color(row, col), expected);
            assert_eq!(result.grid().color(row, 5 - col), expected);
        }
    }
}

#[test]
fn test_png_round_trip_keeps_every_pixel() {
    let path = get_tmp_path("round_trip.png");
    let picture = create_input_picture();
    picture.write(&path).expect("Writing failed");
    let reloaded = Picture::open(&path).expect("Reading failed");
    assert_eq!(reloaded.grid(), picture.grid());
    assert_eq!(reloaded.file_name(), Some(path.as_path()));
    assert_eq!(
        reloaded.to_string(),
        format!("Picture, filename {} height 4 width 6", path.display())
    );
}

#[test]
fn test_missing_input_is_an_error() {
    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        "does/not/exist.png",
        get_tmp_path("never_written.png").to_str().unwrap(),
    ]);
    let error = filter_picture(&arguments).expect_err("Filtering should fail");
    assert!(error.to_string().contains("does/not/exist.png"));
}
