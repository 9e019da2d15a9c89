//! Fixed-size `.mo` header parsing and bounds validation.

use crate::byteorder::Endianness;
use crate::error::{CatalogError, Result};

/// Size in bytes of the on-disk header, up to and including the (ignored)
/// on-disk hash table size/offset fields.
pub const HEADER_SIZE: usize = 28;

/// Size in bytes of one row of a string-descriptor table: `(length, offset)`,
/// each a 32-bit field.
const DESCRIPTOR_SIZE: usize = 8;

/// Parsed and validated `.mo` header.
///
/// The on-disk hash table fields are read (so a short buffer is still
/// rejected as truncated) but never consulted: this crate builds its own
/// search structures from the pair index instead of trusting the one GNU
/// msgfmt embeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub endianness: Endianness,
    pub revision: u32,
    pub num_strings: u32,
    pub orig_table_offset: u32,
    pub trans_table_offset: u32,
}

impl Header {
    /// Parse and validate the header and both string-descriptor tables
    /// against `buffer`'s length. Does not read the string payloads
    /// themselves; callers materialize those via [`crate::binary::pair`].
    pub fn parse(buffer: &[u8]) -> Result<Self> {
        if buffer.len() < HEADER_SIZE {
            return Err(CatalogError::InvalidFormat(format!(
                "file too short for header: {} bytes, need at least {HEADER_SIZE}",
                buffer.len()
            )));
        }

        let raw_magic = u32::from_ne_bytes(buffer[0..4].try_into().expect("4 bytes"));
        let endianness = Endianness::from_magic(raw_magic).ok_or_else(|| {
            CatalogError::InvalidFormat(format!("unrecognized magic: {raw_magic:#010x}"))
        })?;

        let revision = endianness.read_u32(buffer, 4);
        let num_strings = endianness.read_u32(buffer, 8);
        let orig_table_offset = endianness.read_u32(buffer, 12);
        let trans_table_offset = endianness.read_u32(buffer, 16);
        // Hash table size/offset at 20/24 are read as part of the fixed
        // header but intentionally never interpreted further.

        let header = Header {
            endianness,
            revision,
            num_strings,
            orig_table_offset,
            trans_table_offset,
        };

        header.validate_tables(buffer)?;
        Ok(header)
    }

    /// Validate that both string-descriptor tables, and every `(offset,
    /// length)` pair plus trailing NUL they describe, lie within `buffer`.
    fn validate_tables(&self, buffer: &[u8]) -> Result<()> {
        let file_size = buffer.len() as u64;
        let n = self.num_strings as u64;

        let table_span = n
            .checked_mul(DESCRIPTOR_SIZE as u64)
            .ok_or_else(|| CatalogError::InvalidFormat("string table size overflow".into()))?;

        self.validate_table_bounds("original", self.orig_table_offset, table_span, file_size)?;
        self.validate_table_bounds(
            "translation",
            self.trans_table_offset,
            table_span,
            file_size,
        )?;

        for i in 0..self.num_strings {
            let (orig_len, orig_off) =
                self.read_descriptor(buffer, self.orig_table_offset, i);
            let (trans_len, trans_off) =
                self.read_descriptor(buffer, self.trans_table_offset, i);

            Self::validate_payload_bounds("original", i, orig_off, orig_len, file_size)?;
            Self::validate_payload_bounds("translation", i, trans_off, trans_len, file_size)?;
        }

        Ok(())
    }

    fn validate_table_bounds(
        &self,
        which: &str,
        table_offset: u32,
        table_span: u64,
        file_size: u64,
    ) -> Result<()> {
        let end = (table_offset as u64)
            .checked_add(table_span)
            .ok_or_else(|| CatalogError::InvalidFormat(format!("{which} table offset overflow")))?;
        if end > file_size {
            return Err(CatalogError::InvalidFormat(format!(
                "{which} table [{table_offset}, {end}) exceeds file size {file_size}"
            )));
        }
        Ok(())
    }

    /// Read the `(length, offset)` descriptor at row `i` of the table
    /// starting at `table_offset`. Caller must have already validated the
    /// table itself fits in `buffer`.
    fn read_descriptor(&self, buffer: &[u8], table_offset: u32, i: u32) -> (u32, u32) {
        let row = table_offset as usize + i as usize * DESCRIPTOR_SIZE;
        let length = self.endianness.read_u32(buffer, row);
        let offset = self.endianness.read_u32(buffer, row + 4);
        (length, offset)
    }

    fn validate_payload_bounds(
        which: &str,
        index: u32,
        offset: u32,
        len: u32,
        file_size: u64,
    ) -> Result<()> {
        // +1 for the mandatory trailing NUL the format guarantees after
        // every declared payload.
        let end = (offset as u64)
            .checked_add(len as u64)
            .and_then(|v| v.checked_add(1))
            .ok_or_else(|| {
                CatalogError::InvalidFormat(format!("{which} string {index} offset overflow"))
            })?;
        if end > file_size {
            return Err(CatalogError::InvalidFormat(format!(
                "{which} string {index} [{offset}, {end}) exceeds file size {file_size}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build a minimal, valid one-pair `.mo` byte buffer by hand, used as a
    /// fixture across the binary/search/cache test modules.
    pub(crate) fn build_fixture(pairs: &[(&str, &str)]) -> Vec<u8> {
        let n = pairs.len() as u32;
        let orig_table_offset = HEADER_SIZE as u32;
        let trans_table_offset = orig_table_offset + n * DESCRIPTOR_SIZE as u32;
        let strings_start = trans_table_offset + n * DESCRIPTOR_SIZE as u32;

        let mut buf = Vec::new();
        buf.extend_from_slice(&0x950412deu32.to_ne_bytes());
        buf.extend_from_slice(&0u32.to_ne_bytes());
        buf.extend_from_slice(&n.to_ne_bytes());
        buf.extend_from_slice(&orig_table_offset.to_ne_bytes());
        buf.extend_from_slice(&trans_table_offset.to_ne_bytes());
        buf.extend_from_slice(&0u32.to_ne_bytes());
        buf.extend_from_slice(&0u32.to_ne_bytes());

        let mut orig_descriptors = Vec::new();
        let mut trans_descriptors = Vec::new();
        let mut payload = Vec::new();
        let mut cursor = strings_start;

        for (orig, trans) in pairs {
            orig_descriptors.push((orig.len() as u32, cursor));
            payload.extend_from_slice(orig.as_bytes());
            payload.push(0);
            cursor += orig.len() as u32 + 1;
        }
        for (orig, trans) in pairs {
            trans_descriptors.push((trans.len() as u32, cursor));
            payload.extend_from_slice(trans.as_bytes());
            payload.push(0);
            cursor += trans.len() as u32 + 1;
        }

        for (len, off) in orig_descriptors {
            buf.extend_from_slice(&len.to_ne_bytes());
            buf.extend_from_slice(&off.to_ne_bytes());
        }
        for (len, off) in trans_descriptors {
            buf.extend_from_slice(&len.to_ne_bytes());
            buf.extend_from_slice(&off.to_ne_bytes());
        }
        buf.extend_from_slice(&payload);
        buf
    }

    #[test]
    fn rejects_short_buffer() {
        let err = Header::parse(&[0u8; 10]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidFormat(_)));
    }

    #[test]
    fn rejects_bad_magic() {
        let mut buf = build_fixture(&[("Open", "Ouvrir")]);
        buf[0] = 0xff;
        let err = Header::parse(&buf).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidFormat(_)));
    }

    #[test]
    fn parses_valid_fixture() {
        let buf = build_fixture(&[("Open", "Ouvrir"), ("Close", "Fermer")]);
        let header = Header::parse(&buf).unwrap();
        assert_eq!(header.num_strings, 2);
        assert_eq!(header.endianness, Endianness::Native);
    }

    #[test]
    fn rejects_table_past_end_of_file() {
        let mut buf = build_fixture(&[("Open", "Ouvrir")]);
        buf.truncate(HEADER_SIZE + 4);
        let err = Header::parse(&buf).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidFormat(_)));
    }

    #[test]
    fn swapped_magic_round_trips() {
        let mut buf = build_fixture(&[("Open", "Ouvrir")]);
        // A real big/little-endian-swapped file has every 32-bit field
        // byte-reversed, not just the header: swap the header plus both
        // descriptor tables, leaving the string payload (plain bytes) alone.
        let descriptor_tables_end = HEADER_SIZE + 2 * DESCRIPTOR_SIZE; // one pair, two tables
        for field in buf[0..descriptor_tables_end].chunks_mut(4) {
            field.reverse();
        }
        let header = Header::parse(&buf).unwrap();
        assert_eq!(header.endianness, Endianness::Swapped);
        assert_eq!(header.num_strings, 1);
    }
}
