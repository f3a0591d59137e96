use std::collections::HashMap;
use std::hash::Hash;

use super::SymbolFrequency;

/// Occurrence count of every distinct symbol of an input sequence.
#[derive(Debug, Clone)]
pub struct FrequencyTable<S> {
    symbol_frequencies: HashMap<S, usize>,
    total: usize,
}

impl<S: Eq + Hash> FrequencyTable<S> {
    pub fn frequency(&self, symbol: &S) -> Option<usize> {
        self.symbol_frequencies.get(symbol).copied()
    }

    /// Sum of all counts, equal to the length of the counted sequence.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn distinct_symbols(&self) -> usize {
        self.symbol_frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbol_frequencies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, usize)> + '_ {
        self.symbol_frequencies
            .iter()
            .map(|(symbol, &frequency)| (symbol, frequency))
    }

    fn increment_symbol(&mut self, symbol: S) {
        *self.symbol_frequencies.entry(symbol).or_default() += 1;
        self.total += 1;
    }
}

impl<S: Ord + Hash + Clone> FrequencyTable<S> {
    /// The table as a list ordered by symbol.
    pub fn sorted(&self) -> Vec<SymbolFrequency<S>> {
        let mut sorted: Vec<SymbolFrequency<S>> = self
            .iter()
            .map(|(symbol, frequency)| SymbolFrequency::new(symbol.clone(), frequency))
            .collect();
        sorted.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        sorted
    }
}

impl<S: Eq + Hash> FromIterator<S> for FrequencyTable<S> {
    fn from_iter<T: IntoIterator<Item = S>>(symbols: T) -> Self {
        let mut table = FrequencyTable {
            symbol_frequencies: HashMap::new(),
            total: 0,
        };
        for symbol in symbols {
            table.increment_symbol(symbol);
        }
        table
    }
}

impl<'a, S: Eq + Hash + Clone + 'a> From<&'a [S]> for FrequencyTable<S> {
    fn from(symbols: &'a [S]) -> Self {
        symbols.iter().cloned().collect()
    }
}

impl From<&str> for FrequencyTable<char> {
    fn from(text: &str) -> Self {
        text.chars().collect()
    }
}

#[cfg(test)]
mod test {
    use super::FrequencyTable;
    use crate::huffman::SymbolFrequency;

    #[test]
    fn test_count_symbols() {
        let table = FrequencyTable::from("aaabbc");
        assert_eq!(table.frequency(&'a'), Some(3));
        assert_eq!(table.frequency(&'b'), Some(2));
        assert_eq!(table.frequency(&'c'), Some(1));
        assert_eq!(table.frequency(&'d'), None);
        assert_eq!(table.distinct_symbols(), 3);
    }

    #[test]
    fn test_total_equals_sequence_length() {
        let text = "the quick brown fox jumps over the lazy dog";
        let table = FrequencyTable::from(text);
        assert_eq!(table.total(), text.chars().count());
        let summed: usize = table.iter().map(|(_, frequency)| frequency).sum();
        assert_eq!(summed, table.total());
    }

    #[test]
    fn test_every_counted_symbol_occurs_in_input() {
        let text = "mississippi";
        let table = FrequencyTable::from(text);
        for (symbol, frequency) in table.iter() {
            assert!(frequency > 0);
            assert!(text.contains(*symbol), "{:?} not in input", symbol);
        }
    }

    #[test]
    fn test_sorted_is_ordered_by_symbol() {
        let table = FrequencyTable::from("cabbca");
        let expected = vec![
            SymbolFrequency::new('a', 2),
            SymbolFrequency::new('b', 2),
            SymbolFrequency::new('c', 2),
        ];
        assert_eq!(table.sorted(), expected);
    }

    #[test]
    fn test_empty_input() {
        let table = FrequencyTable::from("");
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert!(table.sorted().is_empty());
    }

    #[test]
    fn test_non_char_symbols() {
        let symbols: &[u32] = &[3, 3, 3, 2, 1, 4, 5, 3, 3, 3];
        let table = FrequencyTable::from(symbols);
        assert_eq!(table.frequency(&3), Some(6));
        assert_eq!(table.total(), symbols.len());
    }
}
