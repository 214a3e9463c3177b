use std::io::{BufRead, Read, Write};

use crate::codec;
use crate::domain::itemset::ItemSet;
use crate::utils::error::Result;

/// Build an item set from one whitespace-separated transaction line.
pub fn parse_transaction(line: &str) -> ItemSet {
    ItemSet::from_items(line.split_whitespace())
}

/// Read transaction lines from `input` and write one wire record per
/// non-empty line to `output`. Returns the number of item sets written.
pub fn encode_transactions<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    sort: bool,
) -> Result<usize> {
    let mut written = 0;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut set = parse_transaction(&line);
        if sort {
            set.sort();
        }
        set.write_to(output)?;
        written += 1;
    }
    tracing::debug!("encoded {} item sets", written);
    Ok(written)
}

/// Decode a batch of wire records from `input` and print one set per line:
/// space-joined text, or a JSON array per line when `json` is set (labels
/// containing spaces survive only the JSON form). Returns the number of item
/// sets decoded.
pub fn decode_transactions<R: Read, W: Write>(
    input: &mut R,
    output: &mut W,
    json: bool,
) -> Result<usize> {
    let sets = codec::read_batch(input)?;
    for set in &sets {
        if json {
            serde_json::to_writer(&mut *output, set)?;
            writeln!(output)?;
        } else {
            writeln!(output, "{set}")?;
        }
    }
    tracing::debug!("decoded {} item sets", sets.len());
    Ok(sets.len())
}
