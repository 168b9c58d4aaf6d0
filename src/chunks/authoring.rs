use crate::reader::{Reader, ReaderError};

/// Who and what produced the save
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AuthoringChunk {
    /// Engine name and version string, e.g. `openrct2 v0.4.x`
    pub engine: String,
    pub authors: Vec<String>,
    pub date_started: u64,
    pub date_modified: u64,
}

impl AuthoringChunk {
    pub(crate) fn read(reader: &mut Reader) -> Result<Self, ReaderError> {
        Ok(AuthoringChunk {
            engine: reader.read_string()?,
            authors: reader.read_string_array()?,
            date_started: reader.read_timestamp()?,
            date_modified: reader.read_timestamp()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authoring_chunk() {
        let mut data = Vec::new();
        data.extend_from_slice(b"openrct2 v0.4.5\0");
        data.extend_from_slice(&0u32.to_le_bytes()); // no authors
        data.extend_from_slice(&0u32.to_le_bytes());
        data.push(0x00); // empty string array terminator
        data.extend_from_slice(&1_600_000_000u64.to_le_bytes());
        data.extend_from_slice(&1_600_000_111u64.to_le_bytes());

        let mut reader = Reader::new(&data);
        let chunk = AuthoringChunk::read(&mut reader).unwrap();
        assert_eq!(chunk.engine, "openrct2 v0.4.5");
        assert_eq!(chunk.authors, Vec::<String>::new());
        assert_eq!(chunk.date_started, 1_600_000_000);
        assert_eq!(chunk.date_modified, 1_600_000_111);
        assert_eq!(reader.position(), data.len());
    }
}
