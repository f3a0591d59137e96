use std::fmt::Display;

use crate::huffman::CodingError;

#[derive(Debug)]
pub enum Error {
    EmptyInput,
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToReadInputFile(String, std::io::Error),
    UnableToReadStandardInput(std::io::Error),
    Coding(CodingError),
    BatchJobLost(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input text is empty"),
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToReadInputFile(path, error) => {
                write!(f, "Unable to read text from input file '{}': {}", path, error)
            }
            Self::UnableToReadStandardInput(error) => {
                write!(f, "Unable to read text from standard input: {}", error)
            }
            Self::Coding(error) => write!(f, "Huffman coding failed: {}", error),
            Self::BatchJobLost(path) => {
                write!(f, "Processing of '{}' ended without a result", path)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToOpenInputFileForReading(_, error)
            | Self::UnableToReadInputFile(_, error)
            | Self::UnableToReadStandardInput(error) => Some(error),
            Self::Coding(error) => Some(error),
            Self::EmptyInput | Self::BatchJobLost(_) => None,
        }
    }
}

impl From<CodingError> for Error {
    fn from(error: CodingError) -> Self {
        Self::Coding(error)
    }
}
