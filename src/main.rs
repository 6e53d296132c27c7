use std::env::args_os;

use pixlab::{filter_picture, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match filter_picture(&arguments) {
        Ok(_) => println!("Filtering successful"),
        Err(e) => eprintln!("Filtering failed because of: {}", e),
    }
}
