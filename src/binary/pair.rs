//! Pair index: materializes the two parallel string-descriptor tables into
//! an array of `(original, translation)` offset/length views.

use crate::binary::header::Header;

/// One original/translation string pair, stored as offsets into the
/// catalog's owned buffer rather than as raw pointers or slices.
///
/// These are conceptually references into the owned file buffer (`{
/// original_ptr, original_len, translation_ptr, translation_len }`), but
/// Rust can't hold a `&[u8]` alongside the `Vec<u8>` it borrows from in the
/// same struct without a lifetime (and the catalog needs to move/box both
/// together), so this stores `usize` offsets instead and leaves
/// materialization to [`crate::catalog::Catalog::slice`]. Same observable
/// behavior, no self-reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringPair {
    pub orig_offset: usize,
    pub orig_len: usize,
    pub trans_offset: usize,
    pub trans_len: usize,
}

impl StringPair {
    #[inline]
    pub fn original<'a>(&self, buffer: &'a [u8]) -> &'a [u8] {
        &buffer[self.orig_offset..self.orig_offset + self.orig_len]
    }

    #[inline]
    pub fn translation<'a>(&self, buffer: &'a [u8]) -> &'a [u8] {
        &buffer[self.trans_offset..self.trans_offset + self.trans_len]
    }
}

/// Build one [`StringPair`] per declared string, resolving both descriptor
/// tables. `header` must already have been validated by
/// [`Header::parse`] against the same `buffer`.
pub fn build_pairs(header: &Header, buffer: &[u8]) -> Vec<StringPair> {
    let mut pairs = Vec::with_capacity(header.num_strings as usize);
    for i in 0..header.num_strings {
        let (orig_len, orig_offset) = read_descriptor(header, buffer, header.orig_table_offset, i);
        let (trans_len, trans_offset) =
            read_descriptor(header, buffer, header.trans_table_offset, i);
        pairs.push(StringPair {
            orig_offset: orig_offset as usize,
            orig_len: orig_len as usize,
            trans_offset: trans_offset as usize,
            trans_len: trans_len as usize,
        });
    }
    pairs
}

fn read_descriptor(header: &Header, buffer: &[u8], table_offset: u32, i: u32) -> (u32, u32) {
    const DESCRIPTOR_SIZE: usize = 8;
    let row = table_offset as usize + i as usize * DESCRIPTOR_SIZE;
    let length = header.endianness.read_u32(buffer, row);
    let offset = header.endianness.read_u32(buffer, row + 4);
    (length, offset)
}
