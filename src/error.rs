use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    EmptyInput,
    EmptyWorklist,
    InsufficientNodes(usize),
    UnknownSymbol(String),
    UnlabelledTree,
    InvalidBit(char, usize),
    IncompleteCodeword(usize),
    RoundTripMismatch(usize),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToReadInput(std::io::Error),
    InputIsNotValidUtf8,
    UnableToWriteOutput(std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input contains no symbols to encode"),
            Self::EmptyWorklist => {
                write!(f, "Unable to build a worklist without symbol frequencies")
            }
            Self::InsufficientNodes(count) => {
                write!(
                    f,
                    "Not enough nodes to build a tree. Expected at least 2 distinct symbols, but got {}.",
                    count
                )
            }
            Self::UnknownSymbol(symbol) => {
                write!(f, "Symbol {} has no codeword in the Huffman tree", symbol)
            }
            Self::UnlabelledTree => {
                write!(f, "Huffman tree has no codewords assigned to its leaves")
            }
            Self::InvalidBit(bit, position) => {
                write!(
                    f,
                    "Invalid bit '{}' at position {}. Only '0' and '1' are allowed.",
                    bit, position
                )
            }
            Self::IncompleteCodeword(position) => {
                write!(
                    f,
                    "Bit string ends inside a codeword starting at position {}",
                    position
                )
            }
            Self::RoundTripMismatch(position) => {
                write!(
                    f,
                    "Decoded symbols differ from the input at position {}",
                    position
                )
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToReadInput(error) => write!(f, "Unable to read input: {}", error),
            Self::InputIsNotValidUtf8 => {
                write!(f, "Input is not valid UTF-8. Use the Bytes mode instead.")
            }
            Self::UnableToWriteOutput(error) => write!(f, "Unable to write output: {}", error),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToOpenInputFileForReading(_, error)
            | Self::UnableToReadInput(error)
            | Self::UnableToWriteOutput(error) => Some(error),
            _ => None,
        }
    }
}
