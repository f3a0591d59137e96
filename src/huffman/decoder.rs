use super::coding_error::CodingError;
use super::tree::{CodeTree, NodeId, NodeKind};
use crate::trace::{TraceEvent, TraceSink};

/// Walks a code tree bit by bit, emitting a symbol whenever a leaf is reached.
pub struct HuffmanDecoder<'a, S> {
    tree: &'a CodeTree<S>,
}

impl<'a, S: Clone> HuffmanDecoder<'a, S> {
    pub fn new(tree: &'a CodeTree<S>) -> Self {
        HuffmanDecoder { tree }
    }

    /// Decodes a string of `'0'`/`'1'` characters.
    ///
    /// A bit-string that stops inside a code word is rejected with
    /// [`CodingError::IncompleteCode`].
    pub fn decode(&self, bits: &str, sink: &mut impl TraceSink<S>) -> Result<Vec<S>, CodingError> {
        if let NodeKind::Leaf { symbol } = self.tree.root().kind() {
            return Self::decode_single_leaf(symbol, bits, sink);
        }

        let root_index = self.tree.root_index();
        let mut current_index = root_index;
        let mut bits_since_root = 0;
        let mut out = Vec::new();
        for (position, bit) in bits.chars().enumerate() {
            current_index = self.step(current_index, bit, position)?;
            bits_since_root += 1;
            if let Some(symbol) = self.leaf_symbol(current_index) {
                sink.record(&TraceEvent::SymbolDecoded { symbol, position });
                out.push(symbol.clone());
                current_index = root_index;
                bits_since_root = 0;
            }
        }
        if current_index != root_index {
            return Err(CodingError::IncompleteCode {
                trailing_bits: bits_since_root,
            });
        }
        Ok(out)
    }

    fn step(&self, index: NodeId, bit: char, position: usize) -> Result<NodeId, CodingError> {
        let take_right = match bit {
            '0' => false,
            '1' => true,
            _ => return Err(CodingError::InvalidBit { bit, position }),
        };
        self.tree
            .child(index, take_right)
            .ok_or(CodingError::InvalidPath { position })
    }

    fn leaf_symbol(&self, index: NodeId) -> Option<&'a S> {
        self.tree.node(index).and_then(|node| node.symbol())
    }

    // The only code word of a single leaf tree is "0", so every bit must be
    // a '0' and yields one symbol.
    fn decode_single_leaf(
        symbol: &S,
        bits: &str,
        sink: &mut impl TraceSink<S>,
    ) -> Result<Vec<S>, CodingError> {
        let mut out = Vec::with_capacity(bits.len());
        for (position, bit) in bits.chars().enumerate() {
            match bit {
                '0' => {
                    sink.record(&TraceEvent::SymbolDecoded { symbol, position });
                    out.push(symbol.clone());
                }
                '1' => return Err(CodingError::InvalidPath { position }),
                _ => return Err(CodingError::InvalidBit { bit, position }),
            }
        }
        Ok(out)
    }
}
