use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodingErrorKind {
    /// A symbol has no code word in the code table.
    Lookup,
    /// A bit-string does not describe a path through the code tree.
    Format,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodingError {
    UnknownSymbol(String),
    InvalidBit { bit: char, position: usize },
    InvalidPath { position: usize },
    IncompleteCode { trailing_bits: usize },
}

impl CodingError {
    pub fn kind(&self) -> CodingErrorKind {
        match self {
            Self::UnknownSymbol(_) => CodingErrorKind::Lookup,
            Self::InvalidBit { .. } | Self::InvalidPath { .. } | Self::IncompleteCode { .. } => {
                CodingErrorKind::Format
            }
        }
    }
}

impl Display for CodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSymbol(symbol) => {
                write!(f, "Symbol {} not present in code table", symbol)
            }
            Self::InvalidBit { bit, position } => {
                write!(f, "Invalid bit {:?} at position {}", bit, position)
            }
            Self::InvalidPath { position } => {
                write!(
                    f,
                    "Invalid path in code tree: no child to follow at bit {}",
                    position
                )
            }
            Self::IncompleteCode { trailing_bits } => {
                write!(
                    f,
                    "Bit-string ends inside a code word, {} trailing bits left",
                    trailing_bits
                )
            }
        }
    }
}

impl std::error::Error for CodingError {}
