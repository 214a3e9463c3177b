//! Wire format for item sets.
//!
//! An item set encodes as a `u32` big-endian item count followed by each item
//! as a `u32` big-endian byte length and that many UTF-8 bytes, in the set's
//! current order. The empty set encodes as four zero bytes. Both widths are
//! fixed; the layout is the stable interchange representation used when item
//! sets cross process boundaries as shuffle keys or values.

use std::io::{ErrorKind, Read, Write};

use crate::domain::itemset::ItemSet;
use crate::utils::error::{ItemSetError, Result};

// Hostile counts must not drive preallocation.
const PREALLOC_LIMIT: u32 = 1024;

impl ItemSet {
    /// Write this item set's wire encoding to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let count = encode_u32("item count", self.len())?;
        writer.write_all(&count.to_be_bytes())?;
        for item in self.raw_items() {
            let len = encode_u32("item length", item.len())?;
            writer.write_all(&len.to_be_bytes())?;
            writer.write_all(item)?;
        }
        Ok(())
    }

    /// Read one item set from `reader`, consuming exactly its encoding.
    /// Truncated input, an overrunning length prefix, and invalid UTF-8 item
    /// bytes all fail without producing a partial set.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<ItemSet> {
        match try_read_count(reader)? {
            Some(count) => read_items(reader, count),
            None => Err(ItemSetError::Truncated {
                context: "the item count".to_string(),
            }),
        }
    }

    /// The wire encoding as an owned buffer.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(buf)
    }

    /// Decode an item set that spans the whole of `bytes`. Bytes left over
    /// after a complete set are rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<ItemSet> {
        let mut cursor = bytes;
        let set = ItemSet::read_from(&mut cursor)?;
        if !cursor.is_empty() {
            return Err(ItemSetError::TrailingBytes(cursor.len()));
        }
        Ok(set)
    }
}

/// Write a sequence of item sets back-to-back onto `writer`.
pub fn write_batch<W: Write>(sets: &[ItemSet], writer: &mut W) -> Result<()> {
    for set in sets {
        set.write_to(writer)?;
    }
    Ok(())
}

/// Read item sets until a clean end of stream. EOF in the middle of a record
/// is a truncation error.
pub fn read_batch<R: Read>(reader: &mut R) -> Result<Vec<ItemSet>> {
    let mut sets = Vec::new();
    while let Some(count) = try_read_count(reader)? {
        sets.push(read_items(reader, count)?);
    }
    Ok(sets)
}

fn encode_u32(what: &'static str, len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| ItemSetError::Oversize { what, len })
}

/// Read a record's leading count, or `None` on a clean EOF at the record
/// boundary.
fn try_read_count<R: Read>(reader: &mut R) -> Result<Option<u32>> {
    let mut buf = [0u8; 4];
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) if filled == 0 => return Ok(None),
            Ok(0) => {
                return Err(ItemSetError::Truncated {
                    context: "the item count".to_string(),
                })
            }
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(Some(u32::from_be_bytes(buf)))
}

fn read_u32<R: Read>(reader: &mut R, context: &str) -> Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf).map_err(|err| match err.kind() {
        ErrorKind::UnexpectedEof => ItemSetError::Truncated {
            context: context.to_string(),
        },
        _ => ItemSetError::IoError(err),
    })?;
    Ok(u32::from_be_bytes(buf))
}

fn read_items<R: Read>(reader: &mut R, count: u32) -> Result<ItemSet> {
    let mut items: Vec<String> = Vec::with_capacity(count.min(PREALLOC_LIMIT) as usize);
    for index in 0..count as usize {
        let len = read_u32(reader, &format!("the length of item {index}"))? as usize;
        let mut bytes = Vec::new();
        reader.by_ref().take(len as u64).read_to_end(&mut bytes)?;
        if bytes.len() < len {
            return Err(ItemSetError::Truncated {
                context: format!("item {index}"),
            });
        }
        let item =
            String::from_utf8(bytes).map_err(|_| ItemSetError::InvalidItemBytes { index })?;
        items.push(item);
    }
    Ok(ItemSet::from_items(items))
}
