use std::env::args_os;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use huffman_prefix_code::{run, CLIParser, Error};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());
    let result = run(&arguments, &mut output)
        .and_then(|_| output.flush().map_err(Error::UnableToWriteOutput));
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Encoding failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
