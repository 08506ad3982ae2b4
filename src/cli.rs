use crate::{Arguments, InputSource, SymbolMode};
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgAction, ArgGroup, ArgMatches, Command,
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
        let command = Self::register_input_arguments(command);
        let command = Self::register_symbol_mode_argument(command);
        let command = Self::register_print_tree_argument(command);
        let command = Self::register_print_code_table_argument(command);
        let command = Self::register_print_statistics_argument(command);
        Self::register_decode_check_argument(command)
    }

    fn register_input_arguments(command: Command) -> Command {
        command
            .arg(Self::create_input_file_argument())
            .arg(Self::create_text_argument())
            .group(
                ArgGroup::new("input")
                    .args(["input_file", "text"])
                    .multiple(false),
            )
    }

    fn register_symbol_mode_argument(command: Command) -> Command {
        command.arg(Self::create_symbol_mode_argument())
    }

    fn register_print_tree_argument(command: Command) -> Command {
        command.arg(Self::create_print_tree_argument())
    }

    fn register_print_code_table_argument(command: Command) -> Command {
        command.arg(Self::create_print_code_table_argument())
    }

    fn register_print_statistics_argument(command: Command) -> Command {
        command.arg(Self::create_print_statistics_argument())
    }

    fn register_decode_check_argument(command: Command) -> Command {
        command.arg(Self::create_decode_check_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to the input file, standard input is read when omitted")
            .value_parser(value_parser!(PathBuf))
            .required(false)
    }

    fn create_text_argument() -> Arg {
        arg!(text: -x --text <TEXT> "Text to encode instead of an input file").required(false)
    }

    fn create_symbol_mode_argument() -> Arg {
        arg!(symbol_mode: -m --mode <MODE> "Encode characters or raw bytes")
            .default_value("Chars")
            .value_parser(value_parser!(SymbolMode))
    }

    fn create_print_tree_argument() -> Arg {
        Arg::new("print_tree")
            .long("tree")
            .help("Print the Huffman tree")
            .action(ArgAction::SetTrue)
    }

    fn create_print_code_table_argument() -> Arg {
        Arg::new("print_code_table")
            .long("table")
            .help("Print symbol, frequency and codeword of every leaf")
            .action(ArgAction::SetTrue)
    }

    fn create_print_statistics_argument() -> Arg {
        Arg::new("print_statistics")
            .short('s')
            .long("stats")
            .help("Print the size of input and encoding")
            .action(ArgAction::SetTrue)
    }

    fn create_decode_check_argument() -> Arg {
        Arg::new("decode_check")
            .short('d')
            .long("decode-check")
            .help("Decode the bit string again and compare it with the input")
            .action(ArgAction::SetTrue)
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input: Self::extract_input_arguments(matches),
            symbol_mode: Self::extract_symbol_mode_argument(matches),
            print_tree: matches.get_flag("print_tree"),
            print_code_table: matches.get_flag("print_code_table"),
            print_statistics: matches.get_flag("print_statistics"),
            decode_check: matches.get_flag("decode_check"),
        }
    }

    fn extract_input_arguments(matches: &ArgMatches) -> InputSource {
        if let Some(text) = matches.get_one::<String>("text") {
            InputSource::Text(text.clone())
        } else if let Some(path) = matches.get_one::<PathBuf>("input_file") {
            InputSource::File(path.clone())
        } else {
            InputSource::Stdin
        }
    }

    fn extract_symbol_mode_argument(matches: &ArgMatches) -> SymbolMode {
        matches
            .get_one::<SymbolMode>("symbol_mode")
            .expect("Symbol mode must be provided, but was unset.")
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
    use std::path::PathBuf;

    use super::{CLIParser, InputSource, SymbolMode};

    const PROGRAM_NAME_ARGUMENT: &str = "test_program_name";

    #[test]
    fn parse_input_file_argument() {
        let input_file_name = "testfile.txt";
        let command = Command::new("test");
        let command = CLIParser::register_input_arguments(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, input_file_name]);
        let input = CLIParser::extract_input_arguments(&matches);
        assert_eq!(input, InputSource::File(PathBuf::from(input_file_name)));
    }

    #[test]
    fn parse_text_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_input_arguments(command);
        let matches =
            command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--text", "aaaabbc"]);
        let input = CLIParser::extract_input_arguments(&matches);
        assert_eq!(input, InputSource::Text("aaaabbc".to_owned()));
    }

    #[test]
    fn parse_without_input_reads_stdin() {
        let command = Command::new("test");
        let command = CLIParser::register_input_arguments(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT]);
        let input = CLIParser::extract_input_arguments(&matches);
        assert_eq!(input, InputSource::Stdin);
    }

    #[test]
    fn parse_text_and_input_file_conflict() {
        let command = Command::new("test");
        let command = CLIParser::register_input_arguments(command);
        let result = command.try_get_matches_from(vec![
            PROGRAM_NAME_ARGUMENT,
            "input.txt",
            "--text",
            "abc",
        ]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::ArgumentConflict);
        } else {
            panic!("Conflict between input file and text not detected");
        }
    }

    #[test]
    fn parse_symbol_mode_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_symbol_mode_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--mode", "Bytes"]);
        let actual = CLIParser::extract_symbol_mode_argument(&matches);
        assert_eq!(actual, SymbolMode::Bytes);
    }

    #[test]
    fn parse_symbol_mode_illegal_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_symbol_mode_argument(command);
        let result = command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-m", "Words"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::InvalidValue);
        } else {
            panic!("Illegal value for symbol mode not detected");
        }
    }

    #[test]
    fn parse_print_flags() {
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![
            PROGRAM_NAME_ARGUMENT,
            "--text",
            "ab",
            "--tree",
            "--table",
            "-s",
            "-d",
        ]);
        assert!(arguments.print_tree, "print_tree does not match");
        assert!(arguments.print_code_table, "print_code_table does not match");
        assert!(arguments.print_statistics, "print_statistics does not match");
        assert!(arguments.decode_check, "decode_check does not match");
    }

    #[test]
    fn parse_required_arguments_only() {
        let input_file_name = "inputfile.txt";
        let input_file_path = format!("/input_directory/{}", input_file_name);
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![PROGRAM_NAME_ARGUMENT, &input_file_path]);
        match &arguments.input {
            InputSource::File(path) => assert_eq!(
                path.file_name().unwrap(),
                input_file_name,
                "input file does not match"
            ),
            other => panic!("Expected an input file, got {:?}", other),
        }
        assert_eq!(
            arguments.symbol_mode,
            SymbolMode::Chars,
            "symbol_mode does not match"
        );
        assert!(!arguments.print_tree, "print_tree does not match");
        assert!(!arguments.print_code_table, "print_code_table does not match");
        assert!(!arguments.print_statistics, "print_statistics does not match");
        assert!(!arguments.decode_check, "decode_check does not match");
    }
}
