use crate::{
    chunks::ChunkId,
    errors::{Error, ErrorKind},
    reader::Reader,
};

/// One entry of the chunk directory that follows the header
///
/// The offset addresses the decompressed payload, not the file. Descriptors
/// may be listed in any order; slicing the payload sorts them by offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChunkDescriptor {
    pub id: ChunkId,
    pub offset: u64,
    pub size: u64,
}

/// Reads `num_chunks` descriptors in file order
pub(crate) fn read_directory(
    reader: &mut Reader,
    num_chunks: u32,
) -> Result<Vec<ChunkDescriptor>, Error> {
    let mut entries = Vec::new();
    for _ in 0..num_chunks {
        let truncated = |entries: &Vec<ChunkDescriptor>| {
            Error::new(ErrorKind::TruncatedDirectory {
                expected: num_chunks,
                read: entries.len(),
            })
        };

        let id = ChunkId::new(reader.read_u32().map_err(|_| truncated(&entries))?);
        let offset = reader.read_u64().map_err(|_| truncated(&entries))?;
        let size = reader.read_u64().map_err(|_| truncated(&entries))?;
        entries.push(ChunkDescriptor { id, offset, size });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor_bytes(id: u32, offset: u64, size: u64) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&id.to_le_bytes());
        data.extend_from_slice(&offset.to_le_bytes());
        data.extend_from_slice(&size.to_le_bytes());
        data
    }

    #[test]
    fn test_read_directory() {
        let mut data = descriptor_bytes(0x03, 0, 120);
        data.extend_from_slice(&descriptor_bytes(0x05, 120, 44));

        let mut reader = Reader::new(&data);
        let entries = read_directory(&mut reader, 2).unwrap();
        assert_eq!(
            entries,
            vec![
                ChunkDescriptor {
                    id: ChunkId::SCENARIO,
                    offset: 0,
                    size: 120,
                },
                ChunkDescriptor {
                    id: ChunkId::CLIMATE,
                    offset: 120,
                    size: 44,
                },
            ]
        );
        assert_eq!(reader.position(), 40);
    }

    #[test]
    fn test_directory_preserves_file_order() {
        // offsets listed out of order stay out of order here
        let mut data = descriptor_bytes(0x01, 100, 10);
        data.extend_from_slice(&descriptor_bytes(0x04, 0, 100));

        let mut reader = Reader::new(&data);
        let entries = read_directory(&mut reader, 2).unwrap();
        assert_eq!(entries[0].offset, 100);
        assert_eq!(entries[1].offset, 0);
    }

    #[test]
    fn test_truncated_directory() {
        let mut data = descriptor_bytes(0x03, 0, 120);
        data.extend_from_slice(&0x05u32.to_le_bytes());

        let mut reader = Reader::new(&data);
        let err = read_directory(&mut reader, 2).unwrap_err();
        assert!(matches!(
            err.kind(),
            crate::ErrorKind::TruncatedDirectory {
                expected: 2,
                read: 1,
            }
        ));
    }
}
