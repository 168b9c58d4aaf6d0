use crate::reader::ReaderError;
use std::fmt;

/// An error that can occur when decoding a park save
#[derive(Debug)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Error {
        Error(Box::new(kind))
    }

    /// Return the specific type of error
    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }
}

/// Specific type of error
#[derive(Debug)]
pub enum ErrorKind {
    /// The data is shorter than the fixed 64 byte header
    TruncatedHeader {
        /// Number of bytes that were available
        len: usize,
    },

    /// The chunk directory ended before the declared number of descriptors
    TruncatedDirectory {
        /// Descriptor count declared by the header
        expected: u32,

        /// Descriptors read before the data ran out
        read: usize,
    },

    /// A primitive read ran past the end of its buffer
    Read(ReaderError),

    /// A chunk descriptor points outside the decompressed payload
    ChunkRange {
        /// Numeric chunk identifier
        id: u32,
        offset: u64,
        size: u64,
        payload_len: usize,
    },

    /// The compressed payload was rejected by the decompressor
    Decompression(std::io::Error),

    /// The header declares a compression mode this library does not know
    UnknownCompression(u32),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self.0 {
            ErrorKind::Read(ref err) => Some(err),
            ErrorKind::Decompression(ref err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self.0 {
            ErrorKind::TruncatedHeader { len } => {
                write!(f, "header requires 64 bytes but only {} available", len)
            }
            ErrorKind::TruncatedDirectory { expected, read } => write!(
                f,
                "chunk directory declares {} descriptors but data ran out after {}",
                expected, read
            ),
            ErrorKind::Read(ref err) => err.fmt(f),
            ErrorKind::ChunkRange {
                id,
                offset,
                size,
                payload_len,
            } => write!(
                f,
                "chunk 0x{:02x} range [{}, {}) exceeds payload of {} bytes",
                id,
                offset,
                offset.saturating_add(size),
                payload_len
            ),
            ErrorKind::Decompression(ref err) => write!(f, "decompression failed: {}", err),
            ErrorKind::UnknownCompression(mode) => {
                write!(f, "unknown compression mode: {}", mode)
            }
        }
    }
}

impl From<ReaderError> for Error {
    fn from(error: ReaderError) -> Self {
        Error::new(ErrorKind::Read(error))
    }
}
