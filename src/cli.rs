use crate::filter::Filter;
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgAction, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_file_argument(command);
        let command = Self::register_output_file_argument(command);
        let command = Self::register_filter_argument(command);
        Self::register_edge_distance_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_output_file_argument(command: Command) -> Command {
        command.arg(Self::create_output_file_argument())
    }

    fn register_filter_argument(command: Command) -> Command {
        command.arg(Self::create_filter_argument())
    }

    fn register_edge_distance_argument(command: Command) -> Command {
        command.arg(Self::create_edge_distance_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to the input picture")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_output_file_argument() -> Arg {
        Arg::new("output_file")
            .help("Path to the output picture, its extension selects the format")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_filter_argument() -> Arg {
        arg!(filter: -f --filter <FILTER> "Filter to apply, may be given several times")
            .action(ArgAction::Append)
            .required(false)
            .value_parser(value_parser!(Filter))
    }

    fn create_edge_distance_argument() -> Arg {
        arg!(edge_distance: -e --edge_distance <DISTANCE> "Color distance that counts as an edge")
            .default_value("10")
            .value_parser(value_parser!(f64))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_file: Self::extract_input_file_argument(matches),
            output_file: Self::extract_output_file_argument(matches),
            filters: Self::extract_filter_argument(matches),
            edge_distance: Self::extract_edge_distance_argument(matches),
        }
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("input_file")
            .expect("Required argument input_file not provided")
            .clone()
    }

    fn extract_output_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("output_file")
            .expect("Required argument output_file not provided")
            .clone()
    }

    fn extract_filter_argument(matches: &ArgMatches) -> Vec<Filter> {
        matches
            .get_many::<Filter>("filter")
            .map(|filters| filters.copied().collect())
            .unwrap_or_default()
    }

    fn extract_edge_distance_argument(matches: &ArgMatches) -> f64 {
        matches
            .get_one::<f64>("edge_distance")
            .expect("Edge distance must be provided, but was unset.")
            .to_owned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, Command};

    use super::{CLIParser, Filter};

    const PROGRAM_NAME_ARGUMENT: &str = "test_program_name";

    #[test]
    fn parse_input_file_argument() {
        let input_file_name = "beach.jpg";
        let command = Command::new("test");
        let command = CLIParser::register_input_file_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, input_file_name]);
        let input_file = CLIParser::extract_input_file_argument(&matches);
        assert_eq!(input_file.file_name().unwrap(), input_file_name);
    }

    #[test]
    fn parse_output_file_argument() {
        let output_file_name = "collage.png";
        let command = Command::new("test");
        let command = CLIParser::register_output_file_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, output_file_name]);
        let output_file = CLIParser::extract_output_file_argument(&matches);
        assert_eq!(output_file.file_name().unwrap(), output_file_name);
    }

    #[test]
    fn parse_filters_in_order() {
        let command = Command::new("test");
        let command = CLIParser::register_filter_argument(command);
        let matches = command.get_matches_from(vec![
            PROGRAM_NAME_ARGUMENT,
            "--filter",
            "grayscale",
            "-f",
            "mirror-vertical",
            "-f",
            "grayscale",
        ]);
        let filters = CLIParser::extract_filter_argument(&matches);
        assert_eq!(
            filters,
            vec![Filter::Grayscale, Filter::MirrorVertical, Filter::Grayscale]
        );
    }

    #[test]
    fn parse_unknown_filter() {
        let command = Command::new("test");
        let command = CLIParser::register_filter_argument(command);
        let result = command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-f", "sepia"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::InvalidValue);
        } else {
            panic!("Illegal value for filter not detected");
        }
    }

    #[test]
    fn parse_edge_distance_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_edge_distance_argument(command);
        let matches =
            command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--edge_distance", "12.5"]);
        let edge_distance = CLIParser::extract_edge_distance_argument(&matches);
        assert_eq!(edge_distance, 12.5);
    }

    #[test]
    fn parse_required_arguments_only() {
        let input_file_name = "inputfile.jpg";
        let input_file_path = format!("/input_directory/{}", input_file_name);
        let output_file_name = "outputfile.png";
        let output_file_path = format!("/output_directory/{}", output_file_name);
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![
            PROGRAM_NAME_ARGUMENT,
            &input_file_path,
            &output_file_path,
        ]);
        assert_eq!(
            arguments.input_file.file_name().unwrap(),
            input_file_name,
            "input file does not match"
        );
        assert_eq!(
            arguments.output_file.file_name().unwrap(),
            output_file_name,
            "output file does not match"
        );
        assert!(arguments.filters.is_empty(), "filters should be empty");
        assert_eq!(arguments.edge_distance, 10.0, "edge_distance does not match");
    }
}
