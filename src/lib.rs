use std::{
    fs::File,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use clap::{builder::PossibleValue, ValueEnum};

pub use cli::CLIParser;
pub use error::Error;
use huffman::{HuffmanCode, LoggingObserver, Symbol};

mod cli;
mod error;
pub mod huffman;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

#[derive(Clone, Debug, PartialEq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    Text(String),
}

/// How the input is split into symbols.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SymbolMode {
    Chars,
    Bytes,
}

impl ValueEnum for SymbolMode {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Chars, Self::Bytes]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Chars => Some(PossibleValue::new("Chars")),
            Self::Bytes => Some(PossibleValue::new("Bytes")),
        }
    }
}

pub struct Arguments {
    input: InputSource,
    symbol_mode: SymbolMode,
    print_tree: bool,
    print_code_table: bool,
    print_statistics: bool,
    decode_check: bool,
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.display().to_string(), e)
    })
}

fn read_to_end<R: Read>(reader: &mut R) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .map_err(Error::UnableToReadInput)?;
    Ok(buffer)
}

fn read_input(source: &InputSource) -> Result<Vec<u8>> {
    match source {
        InputSource::Text(text) => Ok(text.as_bytes().to_vec()),
        InputSource::File(path) => read_to_end(&mut open_input_file(path)?),
        InputSource::Stdin => read_to_end(&mut io::stdin().lock()),
    }
}

fn strip_line_terminator(text: &str) -> &str {
    match text.strip_suffix('\n') {
        Some(line) => line.strip_suffix('\r').unwrap_or(line),
        None => text,
    }
}

/// Reads the input, builds its Huffman code and writes the encoded bit
/// string, plus whatever the arguments ask to be shown along with it.
pub fn run<W: Write>(arguments: &Arguments, output: &mut W) -> Result<()> {
    let raw_input = read_input(&arguments.input)?;
    match arguments.symbol_mode {
        SymbolMode::Bytes => encode_symbols(&raw_input, arguments, output),
        SymbolMode::Chars => {
            let text = String::from_utf8(raw_input).map_err(|_| Error::InputIsNotValidUtf8)?;
            let text = match &arguments.input {
                InputSource::Text(_) => text.as_str(),
                _ => strip_line_terminator(&text),
            };
            let symbols: Vec<char> = text.chars().collect();
            encode_symbols(&symbols, arguments, output)
        }
    }
}

fn encode_symbols<S: Symbol, W: Write>(
    symbols: &[S],
    arguments: &Arguments,
    output: &mut W,
) -> Result<()> {
    log::info!(
        "Building Huffman code for {} symbols in {:?} mode",
        symbols.len(),
        arguments.symbol_mode
    );
    let code = HuffmanCode::from_symbols_observed(symbols.iter().cloned(), &mut LoggingObserver)?;
    let code_table = code.code_table();
    logger::log_code_table(&code_table);

    if arguments.print_tree {
        write!(output, "{}", code.tree()).map_err(Error::UnableToWriteOutput)?;
    }
    if arguments.print_code_table {
        for entry in &code_table {
            writeln!(
                output,
                "{:?}\t{}\t{}",
                entry.symbol, entry.frequency, entry.codeword
            )
            .map_err(Error::UnableToWriteOutput)?;
        }
    }

    let encoded = code.encode(symbols.iter().cloned())?;
    writeln!(output, "Encoded message as binary value: {}", encoded)
        .map_err(Error::UnableToWriteOutput)?;

    if arguments.print_statistics {
        let statistics = code.statistics();
        writeln!(
            output,
            "Symbols: {}, distinct: {}, bits: {}, bits per symbol: {:.3}",
            statistics.symbol_count,
            statistics.distinct_symbols,
            statistics.encoded_bits,
            statistics.average_bits_per_symbol()
        )
        .map_err(Error::UnableToWriteOutput)?;
    }
    if arguments.decode_check {
        let decoded = code.decode(&encoded)?;
        if let Some(position) = first_mismatch(symbols, &decoded) {
            return Err(Error::RoundTripMismatch(position));
        }
        writeln!(output, "Decode check passed").map_err(Error::UnableToWriteOutput)?;
    }
    log::info!("Encoded {} symbols into {} bits", symbols.len(), encoded.len());
    Ok(())
}

fn first_mismatch<S: PartialEq>(expected: &[S], actual: &[S]) -> Option<usize> {
    if expected.len() != actual.len() {
        return Some(expected.len().min(actual.len()));
    }
    expected.iter().zip(actual).position(|(a, b)| a != b)
}
