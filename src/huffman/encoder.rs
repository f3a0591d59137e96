use std::fmt::Debug;
use std::hash::Hash;

use super::code::CodeTable;
use super::coding_error::CodingError;
use crate::trace::{TraceEvent, TraceSink};

pub struct HuffmanEncoder<'a, S> {
    code_table: &'a CodeTable<S>,
}

impl<'a, S: Eq + Hash + Debug> HuffmanEncoder<'a, S> {
    pub fn new(code_table: &'a CodeTable<S>) -> Self {
        HuffmanEncoder { code_table }
    }

    /// Concatenates the code words of `symbols` in input order.
    pub fn encode<'s, I>(&self, symbols: I, sink: &mut impl TraceSink<S>) -> Result<String, CodingError>
    where
        I: IntoIterator<Item = &'s S>,
        S: 's,
    {
        let mut bits = String::new();
        for symbol in symbols {
            let code = self.code_word_for_symbol(symbol)?;
            sink.record(&TraceEvent::SymbolEncoded { symbol, code });
            bits.push_str(code);
        }
        Ok(bits)
    }

    fn code_word_for_symbol(&self, symbol: &S) -> Result<&'a str, CodingError> {
        self.code_table
            .code(symbol)
            .ok_or_else(|| CodingError::UnknownSymbol(format!("{:?}", symbol)))
    }
}
