use std::fmt::{self, Display};
use std::hash::Hash;

use crate::huffman::CodeTable;

/// Width of a symbol in the uncompressed baseline.
pub const BITS_PER_SYMBOL: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStatistics {
    pub original_bits: usize,
    pub encoded_bits: usize,
    /// Cost of shipping the code table: every entry carries the symbol
    /// itself plus its code word.
    pub table_overhead_bits: usize,
}

impl CompressionStatistics {
    pub fn new<S: Eq + Hash>(
        symbol_count: usize,
        code_table: &CodeTable<S>,
        encoded_bits: usize,
    ) -> Self {
        let table_overhead_bits = code_table
            .iter()
            .map(|(_, code)| BITS_PER_SYMBOL + code.len())
            .sum();
        CompressionStatistics {
            original_bits: symbol_count * BITS_PER_SYMBOL,
            encoded_bits,
            table_overhead_bits,
        }
    }

    pub fn total_compressed_bits(&self) -> usize {
        self.encoded_bits + self.table_overhead_bits
    }

    pub fn space_saved_bits(&self) -> i64 {
        self.original_bits as i64 - self.encoded_bits as i64
    }

    pub fn total_space_saved_bits(&self) -> i64 {
        self.original_bits as i64 - self.total_compressed_bits() as i64
    }

    /// Saved bits of the payload relative to the baseline, in percent.
    pub fn compression_ratio(&self) -> f64 {
        self.percentage_of_original(self.space_saved_bits())
    }

    /// Like [`Self::compression_ratio`], with the code table counted in.
    pub fn total_savings_percentage(&self) -> f64 {
        self.percentage_of_original(self.total_space_saved_bits())
    }

    fn percentage_of_original(&self, bits: i64) -> f64 {
        if self.original_bits == 0 {
            return 0.0;
        }
        bits as f64 / self.original_bits as f64 * 100.0
    }
}

impl Display for CompressionStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  Original length ({} bits/symbol):  {} bits",
            BITS_PER_SYMBOL, self.original_bits
        )?;
        writeln!(f, "  Encoded length (Huffman):       {} bits", self.encoded_bits)?;
        writeln!(
            f,
            "  Code table overhead:            {} bits",
            self.table_overhead_bits
        )?;
        writeln!(
            f,
            "  Total compressed size:          {} bits",
            self.total_compressed_bits()
        )?;
        writeln!(
            f,
            "  Space saved:                    {} bits",
            self.space_saved_bits()
        )?;
        writeln!(
            f,
            "  Compression ratio:              {:.2}%",
            self.compression_ratio()
        )?;
        write!(
            f,
            "  Saved including table:          {:.2}%",
            self.total_savings_percentage()
        )
    }
}

#[cfg(test)]
mod test {
    use super::CompressionStatistics;
    use crate::huffman::CodeTable;

    fn code_table(entries: &[(char, &str)]) -> CodeTable<char> {
        entries
            .iter()
            .map(|&(symbol, code)| (symbol, code.to_string()))
            .collect()
    }

    #[test]
    fn test_statistics_of_known_input() {
        // "aaabbc" encodes to "000111110"
        let table = code_table(&[('a', "0"), ('b', "11"), ('c', "10")]);
        let statistics = CompressionStatistics::new(6, &table, 9);
        assert_eq!(statistics.original_bits, 48);
        assert_eq!(statistics.encoded_bits, 9);
        assert_eq!(statistics.table_overhead_bits, 3 * 8 + 5);
        assert_eq!(statistics.total_compressed_bits(), 38);
        assert_eq!(statistics.space_saved_bits(), 39);
        assert_eq!(statistics.total_space_saved_bits(), 10);
        assert!((statistics.compression_ratio() - 81.25).abs() < 1e-9);
        assert!((statistics.total_savings_percentage() - 20.833333333).abs() < 1e-6);
    }

    #[test]
    fn test_negative_savings_for_short_input() {
        let table = code_table(&[('a', "0"), ('b', "1")]);
        let statistics = CompressionStatistics::new(2, &table, 2);
        assert_eq!(statistics.total_compressed_bits(), 20);
        assert_eq!(statistics.total_space_saved_bits(), -4);
        assert!(statistics.total_savings_percentage() < 0.0);
    }

    #[test]
    fn test_empty_input_has_zero_percentages() {
        let statistics = CompressionStatistics::new(0, &CodeTable::<char>::default(), 0);
        assert_eq!(statistics.compression_ratio(), 0.0);
        assert_eq!(statistics.total_savings_percentage(), 0.0);
    }

    #[test]
    fn test_display_contains_ratio() {
        let table = code_table(&[('a', "0"), ('b', "11"), ('c', "10")]);
        let rendered = CompressionStatistics::new(6, &table, 9).to_string();
        assert!(rendered.contains("Compression ratio:              81.25%"));
        assert!(rendered.contains("Total compressed size:          38 bits"));
    }
}
