//! Decode a `.park` save and print it as JSON
//!
//! ```text
//! cargo run --features json --bin dump -- save.park
//! ```

use parklib::{ChunkData, ParkFile};
use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args().nth(1).ok_or("usage: dump <file.park>")?;
    let data = std::fs::read(path)?;
    let park = ParkFile::from_slice(&data)?;

    let mut chunks = serde_json::Map::new();
    for (id, chunk) in park.chunks() {
        let key = match id.name() {
            Some(name) => name.to_string(),
            None => format!("0x{:02x}", id.0),
        };
        let value = match chunk {
            ChunkData::Undecoded(bytes) | ChunkData::Unknown(bytes) => {
                serde_json::json!({ "raw_len": bytes.len() })
            }
            decoded => serde_json::to_value(decoded)?,
        };
        chunks.insert(key, value);
    }

    let out = serde_json::json!({
        "header": park.header(),
        "chunks": chunks,
        "failures": park
            .failures()
            .iter()
            .map(|f| f.error.to_string())
            .collect::<Vec<_>>(),
    });

    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    serde_json::to_writer_pretty(&mut lock, &out)?;
    writeln!(lock)?;
    Ok(())
}
