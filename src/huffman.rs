//! Huffman coding over arbitrary symbols.
//!
//! The pipeline runs strictly forward: count frequencies, build the code
//! tree, read the code table off the tree, encode, and decode against the
//! same tree. Bit-strings are sequences of `'0'` and `'1'` characters; packing
//! them into bytes is left to the caller.

use std::fmt::Debug;
use std::hash::Hash;

pub mod code;
pub mod coding_error;
pub mod decoder;
pub mod encoder;
pub mod frequency;
pub mod tree;

pub use code::{CodeTable, SymbolCode};
pub use coding_error::{CodingError, CodingErrorKind};
pub use decoder::HuffmanDecoder;
pub use encoder::HuffmanEncoder;
pub use frequency::FrequencyTable;
pub use tree::{CodeTree, Node, NodeId, NodeKind};

use crate::trace::{NoTrace, TraceSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolFrequency<S> {
    pub symbol: S,
    pub frequency: usize,
}

impl<S> SymbolFrequency<S> {
    pub fn new(symbol: S, frequency: usize) -> Self {
        Self { symbol, frequency }
    }
}

impl<S> From<(S, usize)> for SymbolFrequency<S> {
    fn from(value: (S, usize)) -> Self {
        Self {
            symbol: value.0,
            frequency: value.1,
        }
    }
}

/// Builds the code tree of `symbols`, `None` when the sequence is empty.
pub fn build_tree<S: Ord + Hash + Clone>(symbols: &[S]) -> Option<CodeTree<S>> {
    build_tree_traced(symbols, &mut NoTrace)
}

pub fn build_tree_traced<S: Ord + Hash + Clone>(
    symbols: &[S],
    sink: &mut impl TraceSink<S>,
) -> Option<CodeTree<S>> {
    CodeTree::build(&FrequencyTable::from(symbols), sink)
}

pub fn assign_codes<S: Eq + Hash + Clone>(tree: &CodeTree<S>) -> CodeTable<S> {
    assign_codes_traced(tree, &mut NoTrace)
}

pub fn assign_codes_traced<S: Eq + Hash + Clone>(
    tree: &CodeTree<S>,
    sink: &mut impl TraceSink<S>,
) -> CodeTable<S> {
    CodeTable::from_tree(tree, sink)
}

pub fn encode<S: Eq + Hash + Debug>(
    symbols: &[S],
    code_table: &CodeTable<S>,
) -> Result<String, CodingError> {
    encode_traced(symbols, code_table, &mut NoTrace)
}

pub fn encode_traced<S: Eq + Hash + Debug>(
    symbols: &[S],
    code_table: &CodeTable<S>,
    sink: &mut impl TraceSink<S>,
) -> Result<String, CodingError> {
    HuffmanEncoder::new(code_table).encode(symbols, sink)
}

/// Decodes `bits` against `tree`. An empty bit-string or a missing tree
/// decodes to an empty sequence.
pub fn decode<S: Clone>(bits: &str, tree: Option<&CodeTree<S>>) -> Result<Vec<S>, CodingError> {
    decode_traced(bits, tree, &mut NoTrace)
}

pub fn decode_traced<S: Clone>(
    bits: &str,
    tree: Option<&CodeTree<S>>,
    sink: &mut impl TraceSink<S>,
) -> Result<Vec<S>, CodingError> {
    match tree {
        Some(tree) if !bits.is_empty() => HuffmanDecoder::new(tree).decode(bits, sink),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod test {
    use super::{assign_codes, build_tree, decode, encode, CodingErrorKind};

    fn round_trip(text: &str) -> String {
        let symbols: Vec<char> = text.chars().collect();
        let tree = build_tree(&symbols).expect("tree for non-empty input");
        let table = assign_codes(&tree);
        let bits = encode(&symbols, &table).unwrap();
        decode(&bits, Some(&tree)).unwrap().into_iter().collect()
    }

    #[test]
    fn test_round_trip() {
        for text in [
            "a",
            "ab",
            "aaaa",
            "aaabbc",
            "abracadabra",
            "Hello, World!\n\ttabs and \u{1F980} crabs",
            "the quick brown fox jumps over the lazy dog",
        ] {
            assert_eq!(round_trip(text), text);
        }
    }

    #[test]
    fn test_round_trip_of_every_byte_value() {
        let symbols: Vec<u8> = (0..=u8::MAX).chain(0..100).collect();
        let tree = build_tree(&symbols).unwrap();
        let table = assign_codes(&tree);
        assert_eq!(table.len(), 256);
        let bits = encode(&symbols, &table).unwrap();
        assert_eq!(decode(&bits, Some(&tree)).unwrap(), symbols);
    }

    #[test]
    fn test_empty_input() {
        let symbols: Vec<char> = Vec::new();
        assert!(build_tree(&symbols).is_none());
        assert_eq!(decode::<char>("", None).unwrap(), Vec::<char>::new());
        assert_eq!(decode::<char>("0101", None).unwrap(), Vec::<char>::new());
        let tree = build_tree(&['x', 'y']).unwrap();
        assert_eq!(encode(&symbols, &assign_codes(&tree)).unwrap(), "");
        assert_eq!(decode("", Some(&tree)).unwrap(), Vec::<char>::new());
    }

    #[test]
    fn test_single_symbol_edge_case() {
        let symbols: Vec<char> = "aaaa".chars().collect();
        let tree = build_tree(&symbols).unwrap();
        let table = assign_codes(&tree);
        assert_eq!(table.len(), 1);
        assert_eq!(table.code(&'a'), Some("0"));
        let bits = encode(&symbols, &table).unwrap();
        assert_eq!(bits, "0000");
        assert_eq!(decode(&bits, Some(&tree)).unwrap(), symbols);
        let error = decode("0100", Some(&tree)).unwrap_err();
        assert_eq!(error.kind(), CodingErrorKind::Format);
    }

    #[test]
    fn test_two_symbols_balanced() {
        let symbols = ['a', 'b'];
        let tree = build_tree(&symbols).unwrap();
        let table = assign_codes(&tree);
        assert_eq!(table.code(&'a').map(str::len), Some(1));
        assert_eq!(table.code(&'b').map(str::len), Some(1));
        assert_ne!(table.code(&'a'), table.code(&'b'));
        let bits = encode(&symbols, &table).unwrap();
        assert_eq!(decode(&bits, Some(&tree)).unwrap(), symbols);
    }

    #[test]
    fn test_malformed_bit_string() {
        let symbols: Vec<char> = "aaabbc".chars().collect();
        let tree = build_tree(&symbols).unwrap();
        let error = decode("01a1", Some(&tree)).unwrap_err();
        assert_eq!(error.kind(), CodingErrorKind::Format);
    }

    #[test]
    fn test_code_table_from_another_input() {
        let tree = build_tree(&['a', 'b']).unwrap();
        let error = encode(&['a', 'z'], &assign_codes(&tree)).unwrap_err();
        assert_eq!(error.kind(), CodingErrorKind::Lookup);
    }
}
