use crate::{
    chunks::{self, ChunkData, ChunkId},
    directory::{read_directory, ChunkDescriptor},
    errors::{Error, ErrorKind},
    header::{Compression, SaveHeader},
    reader::Reader,
};
use std::borrow::Cow;
use std::io::Read;

/// A chunk that could not be decoded, with the reason why
///
/// Chunk failures are isolated: a bad descriptor or a short chunk slice is
/// recorded here while the rest of the save decodes normally.
#[derive(Debug)]
pub struct ChunkFailure {
    pub id: ChunkId,
    pub error: Error,
}

/// A fully decoded park save
///
/// Built in one pass over the input and immutable afterwards. Independent
/// decodes share nothing, so separate files may be decoded in parallel.
#[derive(Debug)]
pub struct ParkFile {
    header: SaveHeader,
    chunks: Vec<(ChunkId, ChunkData)>,
    failures: Vec<ChunkFailure>,
}

impl ParkFile {
    /// Decodes a complete park save from memory.
    ///
    /// The pass is strictly sequential: header, chunk directory, payload
    /// decompression, then each chunk in ascending offset order. A truncated
    /// header or directory and a corrupt compressed stream are fatal; a chunk
    /// that fails to decode is recorded in [`failures`](Self::failures) and
    /// skipped.
    pub fn from_slice(data: &[u8]) -> Result<ParkFile, Error> {
        let header = SaveHeader::from_slice(data)?;

        let mut reader = Reader::new(&data[SaveHeader::SIZE..]);
        let mut directory = read_directory(&mut reader, header.num_chunks())?;

        let payload = decompress(reader.remainder(), header.compression())?;

        // Directory order and payload order are independent; slicing must
        // walk the payload front to back.
        directory.sort_by_key(|descriptor| descriptor.offset);

        let mut chunks = Vec::with_capacity(directory.len());
        let mut failures = Vec::new();
        for descriptor in &directory {
            match chunk_slice(&payload, descriptor) {
                Some(slice) => match chunks::decode(descriptor.id, slice) {
                    Ok(data) => chunks.push((descriptor.id, data)),
                    Err(e) => failures.push(ChunkFailure {
                        id: descriptor.id,
                        error: e.into(),
                    }),
                },
                None => failures.push(ChunkFailure {
                    id: descriptor.id,
                    error: Error::new(ErrorKind::ChunkRange {
                        id: descriptor.id.0,
                        offset: descriptor.offset,
                        size: descriptor.size,
                        payload_len: payload.len(),
                    }),
                }),
            }
        }

        Ok(ParkFile {
            header,
            chunks,
            failures,
        })
    }

    /// Returns the 64 byte file header
    pub fn header(&self) -> &SaveHeader {
        &self.header
    }

    /// Returns the decoded chunks in ascending payload offset order
    pub fn chunks(&self) -> &[(ChunkId, ChunkData)] {
        &self.chunks
    }

    /// Returns the first chunk decoded for the given id
    pub fn get(&self, id: ChunkId) -> Option<&ChunkData> {
        self.chunks
            .iter()
            .find(|(chunk_id, _)| *chunk_id == id)
            .map(|(_, data)| data)
    }

    /// Returns the chunks that failed to decode
    pub fn failures(&self) -> &[ChunkFailure] {
        &self.failures
    }
}

fn chunk_slice<'a>(payload: &'a [u8], descriptor: &ChunkDescriptor) -> Option<&'a [u8]> {
    let start = usize::try_from(descriptor.offset).ok()?;
    let end = start.checked_add(usize::try_from(descriptor.size).ok()?)?;
    payload.get(start..end)
}

/// Yields the game data payload in decompressed form.
///
/// The declared uncompressed size in the header is not checked against the
/// actual output.
pub(crate) fn decompress(data: &[u8], compression: Compression) -> Result<Cow<'_, [u8]>, Error> {
    match compression {
        Compression::None => Ok(Cow::Borrowed(data)),
        Compression::Gzip => {
            let mut out = Vec::new();
            flate2::read::GzDecoder::new(data)
                .read_to_end(&mut out)
                .map_err(|e| Error::new(ErrorKind::Decompression(e)))?;
            Ok(Cow::Owned(out))
        }
        Compression::Other(mode) => Err(Error::new(ErrorKind::UnknownCompression(mode))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompress_passthrough() {
        let data = [1u8, 2, 3];
        let payload = decompress(&data, Compression::None).unwrap();
        assert_eq!(payload.as_ref(), &data);
        assert!(matches!(payload, Cow::Borrowed(_)));
    }

    #[test]
    fn test_decompress_rejects_garbage_gzip() {
        let err = decompress(&[0xde, 0xad, 0xbe, 0xef], Compression::Gzip).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Decompression(_)));
    }

    #[test]
    fn test_decompress_unknown_mode() {
        let err = decompress(&[], Compression::Other(7)).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::UnknownCompression(7)));
    }

    #[test]
    fn test_chunk_slice_overflow_is_rejected() {
        let descriptor = ChunkDescriptor {
            id: ChunkId::TILES,
            offset: u64::MAX - 1,
            size: 8,
        };
        assert_eq!(chunk_slice(&[0u8; 16], &descriptor), None);
    }
}
