use huffman_coding::huffman::{
    assign_codes, build_tree_traced, decode, encode, CodingError, FrequencyTable,
};
use huffman_coding::statistics::CompressionStatistics;
use huffman_coding::trace::TraceEvent;

fn main() -> Result<(), CodingError> {
    let sequence_to_encode: Vec<u32> = vec![3, 3, 3, 2, 1, 4, 5, 3, 3, 3, 0, 2, 3];

    let frequencies = FrequencyTable::from(sequence_to_encode.as_slice());
    println!("symbol frequencies");
    for entry in frequencies.sorted() {
        println!("  {}: {}", entry.symbol, entry.frequency);
    }

    let mut merge_steps = Vec::new();
    let mut record_merges = |event: &TraceEvent<'_, u32>| {
        if let TraceEvent::NodesMerged { .. } = event {
            merge_steps.push(event.to_string());
        }
    };
    let Some(tree) = build_tree_traced(&sequence_to_encode, &mut record_merges) else {
        println!("nothing to encode");
        return Ok(());
    };
    println!("merge steps");
    for step in &merge_steps {
        println!("  {}", step);
    }
    println!("huffman tree\n{}", tree);

    let code_table = assign_codes(&tree);
    println!("code table");
    for entry in code_table.sorted() {
        println!("  {}: {}", entry.symbol, entry.code);
    }

    let encoded = encode(&sequence_to_encode, &code_table)?;
    println!("sequence to encode\n{:?}", sequence_to_encode);
    println!("encoded sequence\n{}", encoded);

    let decoded = decode(&encoded, Some(&tree))?;
    println!("decoded sequence\n{:?}", decoded);

    let statistics = CompressionStatistics::new(sequence_to_encode.len(), &code_table, encoded.len());
    println!("statistics\n{}", statistics);
    Ok(())
}
