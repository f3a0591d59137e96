use std::fmt::{self, Display};

use crate::huffman::{CodeTable, CodeTree, FrequencyTable};
use crate::statistics::CompressionStatistics;

const PREVIEW_LENGTH: usize = 200;

// Format (Cf) and private use (Co) code points, which have no visible glyph.
const INVISIBLE_RANGES: [(char, char); 23] = [
    ('\u{00AD}', '\u{00AD}'),
    ('\u{0600}', '\u{0605}'),
    ('\u{061C}', '\u{061C}'),
    ('\u{06DD}', '\u{06DD}'),
    ('\u{070F}', '\u{070F}'),
    ('\u{0890}', '\u{0891}'),
    ('\u{08E2}', '\u{08E2}'),
    ('\u{180E}', '\u{180E}'),
    ('\u{200B}', '\u{200F}'),
    ('\u{202A}', '\u{202E}'),
    ('\u{2060}', '\u{2064}'),
    ('\u{2066}', '\u{206F}'),
    ('\u{E000}', '\u{F8FF}'),
    ('\u{FEFF}', '\u{FEFF}'),
    ('\u{FFF9}', '\u{FFFB}'),
    ('\u{110BD}', '\u{110BD}'),
    ('\u{110CD}', '\u{110CD}'),
    ('\u{13430}', '\u{1343F}'),
    ('\u{1BCA0}', '\u{1BCA3}'),
    ('\u{1D173}', '\u{1D17A}'),
    ('\u{E0001}', '\u{E0001}'),
    ('\u{E0020}', '\u{E007F}'),
    ('\u{F0000}', '\u{10FFFD}'),
];

/// Everything produced by one encode/decode run over a text.
#[derive(Debug, Clone)]
pub struct Report {
    pub text: String,
    pub frequencies: FrequencyTable<char>,
    pub tree: CodeTree<char>,
    pub code_table: CodeTable<char>,
    pub encoded: String,
    pub decoded: String,
    pub statistics: CompressionStatistics,
    show_tree: bool,
}

/// One row of the code listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRow {
    pub symbol: char,
    pub frequency: usize,
    pub code: String,
}

impl Report {
    pub fn new(
        text: String,
        frequencies: FrequencyTable<char>,
        tree: CodeTree<char>,
        code_table: CodeTable<char>,
        encoded: String,
        decoded: String,
    ) -> Self {
        let statistics =
            CompressionStatistics::new(frequencies.total(), &code_table, encoded.len());
        Report {
            text,
            frequencies,
            tree,
            code_table,
            encoded,
            decoded,
            statistics,
            show_tree: false,
        }
    }

    pub fn with_tree(mut self, show_tree: bool) -> Self {
        self.show_tree = show_tree;
        self
    }

    /// Whether decoding reproduced the original text.
    pub fn verified(&self) -> bool {
        self.decoded == self.text
    }

    pub fn rows(&self) -> Vec<CodeRow> {
        self.code_table
            .sorted()
            .into_iter()
            .map(|entry| CodeRow {
                symbol: entry.symbol,
                frequency: self.frequencies.frequency(&entry.symbol).unwrap_or(0),
                code: entry.code,
            })
            .collect()
    }
}

fn is_invisible(symbol: char) -> bool {
    INVISIBLE_RANGES
        .iter()
        .any(|&(first, last)| (first..=last).contains(&symbol))
}

/// Symbols without a visible glyph are shown by their code point.
pub fn display_symbol(symbol: char) -> String {
    if symbol.is_control() || (symbol.is_whitespace() && symbol != ' ') || is_invisible(symbol) {
        format!("ASCII({})", symbol as u32)
    } else {
        symbol.to_string()
    }
}

fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_LENGTH) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}

impl Display for CodeRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "  Character: '{}', Frequency: {}, Code: {}",
            display_symbol(self.symbol),
            self.frequency,
            self.code
        )
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original Text: \"{}\"", preview(&self.text))?;
        if self.show_tree {
            writeln!(f, "\n--- Huffman Tree ---")?;
            write!(f, "{}", self.tree)?;
        }
        writeln!(f, "\n--- Huffman Codes ---")?;
        for row in self.rows() {
            writeln!(f, "{}", row)?;
        }
        writeln!(f, "\nEncoded Text: {}", self.encoded)?;
        writeln!(f, "\n--- Compression Statistics ---")?;
        writeln!(f, "{}", self.statistics)?;
        writeln!(f, "\nDecoded Text: \"{}\"", preview(&self.decoded))?;
        if self.verified() {
            write!(
                f,
                "\nSUCCESS: Encoding and decoding successful! Original text matches decoded text."
            )
        } else {
            write!(
                f,
                "\nERROR: Decoding failed! Original text does NOT match decoded text."
            )
        }
    }
}
