use std::env::args_os;
use std::path::PathBuf;
use std::process::exit;

use clap::{crate_authors, crate_version, value_parser, Arg, ArgMatches, Command};
use pixlab::collage::create_collage;
use pixlab::picture::Picture;

fn create_command() -> Command {
    Command::new("collage")
        .version(crate_version!())
        .author(crate_authors!())
        .about("Stack filtered copies of a picture and mirror them left to right")
        .arg(
            Arg::new("input_file")
                .help("Path to the source picture")
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("output_file")
                .help("Path to the collage, its extension selects the format")
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
}

fn extract_path(matches: &ArgMatches, name: &str) -> PathBuf {
    matches
        .get_one::<PathBuf>(name)
        .expect("Required path argument not provided")
        .clone()
}

fn main() {
    let matches = create_command().get_matches_from(args_os());
    let input_file = extract_path(&matches, "input_file");
    let output_file = extract_path(&matches, "output_file");
    let result = Picture::open(&input_file)
        .map(|source| create_collage(&source))
        .and_then(|collage| collage.write(&output_file));
    match result {
        Ok(_) => println!("Collage written to {}", output_file.display()),
        Err(e) => {
            eprintln!("Creating collage failed because of: {}", e);
            exit(1);
        }
    }
}
