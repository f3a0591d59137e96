use std::collections::HashMap;
use std::hash::Hash;

use super::tree::{CodeTree, NodeKind};
use crate::trace::{TraceEvent, TraceSink};

/// Code word assigned to a single symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolCode<S> {
    pub symbol: S,
    pub code: String,
}

/// Symbol to bit-string mapping read off the root-to-leaf paths of a code
/// tree, `'0'` for a left edge and `'1'` for a right edge.
#[derive(Debug, Clone)]
pub struct CodeTable<S> {
    code_words: HashMap<S, String>,
}

impl<S: Eq + Hash + Clone> CodeTable<S> {
    /// Depth-first walk over an explicit stack. A tree consisting of a
    /// single leaf gets the code `"0"`.
    pub fn from_tree(tree: &CodeTree<S>, sink: &mut impl TraceSink<S>) -> Self {
        let mut code_words = HashMap::with_capacity(tree.leaf_count());
        let mut stack = vec![(tree.root_index(), String::new())];
        while let Some((index, path)) = stack.pop() {
            let Some(node) = tree.node(index) else {
                continue;
            };
            match node.kind() {
                NodeKind::Leaf { symbol } => {
                    let code = if path.is_empty() {
                        String::from("0")
                    } else {
                        path
                    };
                    sink.record(&TraceEvent::CodeAssigned {
                        symbol,
                        code: &code,
                    });
                    code_words.insert(symbol.clone(), code);
                }
                NodeKind::Inner { left, right } => {
                    stack.push((*right, format!("{}1", path)));
                    stack.push((*left, format!("{}0", path)));
                }
            }
        }
        CodeTable { code_words }
    }
}

impl<S: Eq + Hash> CodeTable<S> {
    pub fn code(&self, symbol: &S) -> Option<&str> {
        self.code_words.get(symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.code_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code_words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &str)> + '_ {
        self.code_words
            .iter()
            .map(|(symbol, code)| (symbol, code.as_str()))
    }

    pub fn longest_code_length(&self) -> usize {
        self.code_words.values().map(String::len).max().unwrap_or(0)
    }
}

impl<S: Ord + Hash + Clone> CodeTable<S> {
    /// The table as a list ordered by symbol.
    pub fn sorted(&self) -> Vec<SymbolCode<S>> {
        let mut sorted: Vec<SymbolCode<S>> = self
            .iter()
            .map(|(symbol, code)| SymbolCode {
                symbol: symbol.clone(),
                code: code.to_owned(),
            })
            .collect();
        sorted.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        sorted
    }
}

impl<S: Eq + Hash> PartialEq for CodeTable<S> {
    fn eq(&self, other: &Self) -> bool {
        self.code_words == other.code_words
    }
}

impl<S: Eq + Hash> Eq for CodeTable<S> {}

impl<S: Eq + Hash> Default for CodeTable<S> {
    fn default() -> Self {
        CodeTable {
            code_words: HashMap::new(),
        }
    }
}

impl<S: Eq + Hash> FromIterator<(S, String)> for CodeTable<S> {
    fn from_iter<T: IntoIterator<Item = (S, String)>>(code_words: T) -> Self {
        CodeTable {
            code_words: code_words.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::CodeTable;
    use crate::huffman::{frequency::FrequencyTable, tree::CodeTree};
    use crate::trace::{NoTrace, RecordingTrace};

    fn create_code_table(text: &str) -> CodeTable<char> {
        let tree = CodeTree::build(&FrequencyTable::from(text), &mut NoTrace).unwrap();
        CodeTable::from_tree(&tree, &mut NoTrace)
    }

    fn assert_prefix_free(table: &CodeTable<char>) {
        for (a, code_a) in table.iter() {
            for (b, code_b) in table.iter() {
                if a != b {
                    assert!(
                        !code_b.starts_with(code_a),
                        "Code {} of {:?} is a prefix of code {} of {:?}",
                        code_a,
                        a,
                        code_b,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn test_single_symbol_gets_code_zero() {
        let table = create_code_table("aaaa");
        assert_eq!(table.len(), 1);
        assert_eq!(table.code(&'a'), Some("0"));
    }

    #[test]
    fn test_table_type_needs_no_symbol_bounds() {
        let tables: Vec<CodeTable<f64>> = Vec::new();
        assert!(tables.is_empty());
    }

    #[test]
    fn test_tables_of_same_text_are_equal() {
        assert_eq!(create_code_table("abracadabra"), create_code_table("abracadabra"));
        assert_ne!(create_code_table("aaabbc"), create_code_table("abbccc"));
    }

    #[test]
    fn test_two_symbols_get_one_bit_each() {
        let table = create_code_table("ab");
        assert_eq!(table.code(&'a'), Some("0"));
        assert_eq!(table.code(&'b'), Some("1"));
    }

    #[test]
    fn test_known_multi_symbol_codes() {
        let table = create_code_table("aaabbc");
        assert_eq!(table.code(&'a'), Some("0"));
        assert_eq!(table.code(&'c'), Some("10"));
        assert_eq!(table.code(&'b'), Some("11"));
        assert_eq!(table.longest_code_length(), 2);
    }

    #[test]
    fn test_codes_are_prefix_free() {
        for text in [
            "abracadabra",
            "she sells sea shells by the sea shore",
            "aaaaaaaaaaaaaaaaabbbccccccccccccdddeeeeeeeeeeeeeeeeeefffffffffffffggggggggggggg",
        ] {
            assert_prefix_free(&create_code_table(text));
        }
    }

    #[test]
    fn test_one_entry_per_distinct_symbol() {
        let text = "the quick brown fox jumps over the lazy dog";
        let frequencies = FrequencyTable::from(text);
        let table = create_code_table(text);
        assert_eq!(table.len(), frequencies.distinct_symbols());
        for symbol in text.chars() {
            assert!(table.code(&symbol).is_some(), "{:?} has no code", symbol);
        }
    }

    #[test]
    fn test_code_length_does_not_grow_with_frequency() {
        let text = "aaaaaaaaaaaaaaaaabbbccccccccccccdddeeeeeeeeeeeeeeeeeefffffffffffffggggggggggggg";
        let frequencies = FrequencyTable::from(text);
        let table = create_code_table(text);
        for (a, frequency_a) in frequencies.iter() {
            for (b, frequency_b) in frequencies.iter() {
                if frequency_a > frequency_b {
                    let length_a = table.code(a).unwrap().len();
                    let length_b = table.code(b).unwrap().len();
                    assert!(length_a <= length_b, "{:?} longer than {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_sorted_rows() {
        let table = create_code_table("aaabbc");
        let symbols: Vec<char> = table.sorted().into_iter().map(|row| row.symbol).collect();
        assert_eq!(symbols, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_trace_reports_every_assignment() {
        let tree = CodeTree::build(&FrequencyTable::from("aaabbc"), &mut NoTrace).unwrap();
        let mut sink = RecordingTrace::new();
        CodeTable::from_tree(&tree, &mut sink);
        assert_eq!(
            sink.lines,
            vec![
                "assigned code 0 to 'a'".to_string(),
                "assigned code 10 to 'c'".to_string(),
                "assigned code 11 to 'b'".to_string(),
            ]
        );
    }
}
