/*!

A low level, performance orientated parser for
[OpenRCT2](https://openrct2.org/) `.park` save files.

A park save is an "OrcaStream" container: a fixed 64 byte header, a directory
of chunk descriptors, and an optionally gzip compressed payload holding every
chunk's data back to back. This library decodes that container into typed
records, one per recognized chunk.

## Features

- ✔ Zero copy primitives: chunk slices borrow from one decompressed buffer
- ✔ Resilient: one malformed chunk is reported without failing the others
- ✔ Forward compatible: unrecognized chunk ids pass through as raw bytes
- ✔ Agnostic: no gameplay logic, just the wire format

## Quick Start

```rust
use parklib::{ParkFile, PARK_MAGIC};

// A minimal save: a header that declares zero chunks and no compression
let mut data = vec![0u8; 64];
data[0..4].copy_from_slice(&PARK_MAGIC.to_le_bytes());

let park = ParkFile::from_slice(&data)?;
assert_eq!(park.header().magic(), PARK_MAGIC);
assert!(park.chunks().is_empty());
# Ok::<(), parklib::Error>(())
```

## One Level Lower

Chunk payloads are plain byte runs, so the same [`Reader`] that powers the
chunk decoders is available for picking apart `Undecoded` and `Unknown`
chunks by hand:

```rust
use parklib::Reader;

let mut reader = Reader::new(&[0x2a, 0x00, 0x00, 0x00, b'h', b'i', 0x00]);
assert_eq!(reader.read_u32().unwrap(), 42);
assert_eq!(reader.read_string().unwrap(), "hi");
```

## Caveats

Caller is responsible for:

- Reading the file into memory (this library never touches the file system)
- Verifying the magic number and the fnv1a content hash if desired; both are
  surfaced but never checked
- Interpreting money fields, which the format stores with the same unsigned
  encoding as every other integer even though they are signed currency

*/

pub mod chunks;
mod directory;
mod errors;
mod header;
mod parkfile;
pub mod reader;

pub use self::chunks::{ChunkData, ChunkId};
pub use self::directory::ChunkDescriptor;
pub use self::errors::{Error, ErrorKind};
pub use self::header::{Compression, SaveHeader, PARK_MAGIC};
pub use self::parkfile::{ChunkFailure, ParkFile};
pub use self::reader::{LocalizedString, ReadError, Reader, ReaderError};
