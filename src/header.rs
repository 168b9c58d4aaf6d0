use crate::{
    errors::{Error, ErrorKind},
    reader::Reader,
};

/// The expected magic number, little endian `PARK`
pub const PARK_MAGIC: u32 = 0x4b52_4150;

/// How the game data payload is compressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Compression {
    /// payload stored as-is
    None,

    /// payload is a gzip stream
    Gzip,

    /// An unknown mode
    Other(u32),
}

impl Compression {
    /// Creates a Compression from a numeric value
    pub fn new(mode: u32) -> Compression {
        match mode {
            0 => Compression::None,
            1 => Compression::Gzip,
            x => Compression::Other(x),
        }
    }

    /// Returns the numeric value of this compression mode
    pub fn value(&self) -> u32 {
        match self {
            Compression::None => 0,
            Compression::Gzip => 1,
            Compression::Other(x) => *x,
        }
    }
}

/// The fixed 64 byte header at the start of every park save
///
/// Every field is read in declared order but nothing is validated: a wrong
/// magic number or an unchecked content hash is the caller's concern, not a
/// decode failure. The game itself writes the fnv1a hash of the payload here
/// and this library reads it without verifying it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SaveHeader {
    magic: u32,
    target_version: u32,
    min_version: u32,
    num_chunks: u32,
    uncompressed_size: u64,
    compression: Compression,
    compressed_size: u64,
    fnv1a: [u8; 8],
    padding: [u8; 20],
}

impl SaveHeader {
    pub(crate) const SIZE: usize = 64;

    /// Creates a SaveHeader by parsing the first 64 bytes of a save
    pub fn from_slice(data: &[u8]) -> Result<Self, Error> {
        let data: &[u8; Self::SIZE] = data
            .first_chunk()
            .ok_or_else(|| Error::new(ErrorKind::TruncatedHeader { len: data.len() }))?;

        // 64 bytes cover every read below, so none of them can fail
        let mut reader = Reader::new(data);
        let magic = reader.read_u32()?;
        let target_version = reader.read_u32()?;
        let min_version = reader.read_u32()?;
        let num_chunks = reader.read_u32()?;
        let uncompressed_size = reader.read_u64()?;
        let compression = Compression::new(reader.read_u32()?);
        let compressed_size = reader.read_u64()?;

        let mut fnv1a = [0u8; 8];
        fnv1a.copy_from_slice(reader.read_bytes(8)?);
        let mut padding = [0u8; 20];
        padding.copy_from_slice(reader.read_bytes(20)?);

        Ok(SaveHeader {
            magic,
            target_version,
            min_version,
            num_chunks,
            uncompressed_size,
            compression,
            compressed_size,
            fnv1a,
            padding,
        })
    }

    /// Returns the magic number as stored, see [`PARK_MAGIC`]
    pub fn magic(&self) -> u32 {
        self.magic
    }

    /// Returns the park file format version this save targets
    pub fn target_version(&self) -> u32 {
        self.target_version
    }

    /// Returns the minimum format version able to load this save
    pub fn min_version(&self) -> u32 {
        self.min_version
    }

    /// Returns the number of chunk descriptors in the directory
    pub fn num_chunks(&self) -> u32 {
        self.num_chunks
    }

    /// Returns the declared size of the payload once decompressed
    pub fn uncompressed_size(&self) -> u64 {
        self.uncompressed_size
    }

    /// Returns the payload compression mode
    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Returns the declared size of the payload as stored
    pub fn compressed_size(&self) -> u64 {
        self.compressed_size
    }

    /// Returns the stored fnv1a content hash (never verified)
    pub fn fnv1a(&self) -> &[u8; 8] {
        &self.fnv1a
    }

    /// Returns the reserved padding bytes
    pub fn padding(&self) -> &[u8; 20] {
        &self.padding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_header() -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&PARK_MAGIC.to_le_bytes());
        data.extend_from_slice(&6u32.to_le_bytes());
        data.extend_from_slice(&6u32.to_le_bytes());
        data.extend_from_slice(&16u32.to_le_bytes());
        data.extend_from_slice(&4096u64.to_le_bytes());
        data.extend_from_slice(&1u32.to_le_bytes());
        data.extend_from_slice(&512u64.to_le_bytes());
        data.extend_from_slice(&[0xaa; 8]);
        data.extend_from_slice(&[0u8; 20]);
        data
    }

    #[test]
    fn test_header_fields() {
        let data = sample_header();
        let header = SaveHeader::from_slice(&data).unwrap();

        assert_eq!(header.magic(), PARK_MAGIC);
        assert_eq!(header.target_version(), 6);
        assert_eq!(header.min_version(), 6);
        assert_eq!(header.num_chunks(), 16);
        assert_eq!(header.uncompressed_size(), 4096);
        assert_eq!(header.compression(), Compression::Gzip);
        assert_eq!(header.compressed_size(), 512);
        assert_eq!(header.fnv1a(), &[0xaa; 8]);
        assert_eq!(header.padding(), &[0u8; 20]);
    }

    #[test]
    fn test_header_ignores_trailing_data() {
        let mut data = sample_header();
        data.extend_from_slice(&[0xff; 32]);
        assert!(SaveHeader::from_slice(&data).is_ok());
    }

    #[test]
    fn test_truncated_header() {
        let data = sample_header();
        let err = SaveHeader::from_slice(&data[..63]).unwrap_err();
        assert!(matches!(
            err.kind(),
            crate::ErrorKind::TruncatedHeader { len: 63 }
        ));
    }

    #[test]
    fn test_wrong_magic_is_not_rejected() {
        let mut data = sample_header();
        data[0] = b'X';
        let header = SaveHeader::from_slice(&data).unwrap();
        assert_ne!(header.magic(), PARK_MAGIC);
    }
}
