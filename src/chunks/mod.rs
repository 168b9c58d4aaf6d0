//! Per-chunk field layouts and the dispatch between them
//!
//! Each chunk type is a fixed, ordered sequence of reads. Field order is part
//! of the format contract and must never be reordered.

mod authoring;
mod climate;
mod general;
mod park;
mod research;
mod scenario;

pub use self::authoring::AuthoringChunk;
pub use self::climate::{ClimateChunk, WeatherState};
pub use self::general::GeneralChunk;
pub use self::park::ParkChunk;
pub use self::research::{ResearchChunk, ResearchItem};
pub use self::scenario::{objective_description, Objective, ScenarioChunk};

use crate::reader::{Reader, ReaderError};

/// Numeric identifier selecting a chunk's payload schema
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(transparent)]
pub struct ChunkId(pub u32);

impl ChunkId {
    pub const AUTHORING: ChunkId = ChunkId::new(0x01);
    pub const OBJECTS: ChunkId = ChunkId::new(0x02);
    pub const SCENARIO: ChunkId = ChunkId::new(0x03);
    pub const GENERAL: ChunkId = ChunkId::new(0x04);
    pub const CLIMATE: ChunkId = ChunkId::new(0x05);
    pub const PARK: ChunkId = ChunkId::new(0x06);
    pub const HISTORY: ChunkId = ChunkId::new(0x07);
    pub const RESEARCH: ChunkId = ChunkId::new(0x08);
    pub const NOTIFICATIONS: ChunkId = ChunkId::new(0x09);
    pub const INTERFACE: ChunkId = ChunkId::new(0x20);
    pub const TILES: ChunkId = ChunkId::new(0x30);
    pub const ENTITIES: ChunkId = ChunkId::new(0x31);
    pub const RIDES: ChunkId = ChunkId::new(0x32);
    pub const BANNERS: ChunkId = ChunkId::new(0x33);
    pub const STAFF: ChunkId = ChunkId::new(0x35);
    pub const CHEATS: ChunkId = ChunkId::new(0x36);
    pub const RESTRICTED_OBJECTS: ChunkId = ChunkId::new(0x37);
    pub const PACKED_OBJECTS: ChunkId = ChunkId::new(0x80);

    #[inline]
    pub const fn new(x: u32) -> Self {
        ChunkId(x)
    }

    /// Human readable name of a recognized chunk id
    pub const fn name(&self) -> Option<&'static str> {
        match *self {
            ChunkId::AUTHORING => Some("authoring"),
            ChunkId::OBJECTS => Some("objects"),
            ChunkId::SCENARIO => Some("scenario"),
            ChunkId::GENERAL => Some("general"),
            ChunkId::CLIMATE => Some("climate"),
            ChunkId::PARK => Some("park"),
            ChunkId::HISTORY => Some("history"),
            ChunkId::RESEARCH => Some("research"),
            ChunkId::NOTIFICATIONS => Some("notifications"),
            ChunkId::INTERFACE => Some("interface"),
            ChunkId::TILES => Some("tiles"),
            ChunkId::ENTITIES => Some("entities"),
            ChunkId::RIDES => Some("rides"),
            ChunkId::BANNERS => Some("banners"),
            ChunkId::STAFF => Some("staff"),
            ChunkId::CHEATS => Some("cheats"),
            ChunkId::RESTRICTED_OBJECTS => Some("restricted_objects"),
            ChunkId::PACKED_OBJECTS => Some("packed_objects"),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_known(&self) -> bool {
        self.name().is_some()
    }
}

/// The decoded contents of one chunk
///
/// Chunk ids with a mapped field layout decode into a typed record. Ids the
/// game defines but whose layout is not mapped here keep their raw bytes in
/// [`ChunkData::Undecoded`]; ids this library has never heard of keep theirs
/// in [`ChunkData::Unknown`], so future chunk types pass through losslessly.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ChunkData {
    Authoring(AuthoringChunk),
    Scenario(ScenarioChunk),
    General(GeneralChunk),
    Climate(ClimateChunk),
    Park(ParkChunk),
    Research(ResearchChunk),

    /// A recognized chunk whose payload layout is not mapped
    Undecoded(Vec<u8>),

    /// An unrecognized chunk id, raw payload passed through
    Unknown(Vec<u8>),
}

/// Decodes one chunk slice according to its id
pub(crate) fn decode(id: ChunkId, data: &[u8]) -> Result<ChunkData, ReaderError> {
    let mut reader = Reader::new(data);
    match id {
        ChunkId::AUTHORING => Ok(ChunkData::Authoring(AuthoringChunk::read(&mut reader)?)),
        ChunkId::SCENARIO => Ok(ChunkData::Scenario(ScenarioChunk::read(&mut reader)?)),
        ChunkId::GENERAL => Ok(ChunkData::General(GeneralChunk::read(&mut reader)?)),
        ChunkId::CLIMATE => Ok(ChunkData::Climate(ClimateChunk::read(&mut reader)?)),
        ChunkId::PARK => Ok(ChunkData::Park(ParkChunk::read(&mut reader)?)),
        ChunkId::RESEARCH => Ok(ChunkData::Research(ResearchChunk::read(&mut reader)?)),
        id if id.is_known() => Ok(ChunkData::Undecoded(data.to_vec())),
        _ => Ok(ChunkData::Unknown(data.to_vec())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_id_names() {
        assert_eq!(ChunkId::SCENARIO.name(), Some("scenario"));
        assert_eq!(ChunkId::PACKED_OBJECTS.name(), Some("packed_objects"));
        assert_eq!(ChunkId::new(0x99).name(), None);
    }

    #[test]
    fn test_unknown_chunk_passes_through() {
        let data = decode(ChunkId::new(0x99), &[1, 2, 3]).unwrap();
        assert_eq!(data, ChunkData::Unknown(vec![1, 2, 3]));
    }

    #[test]
    fn test_known_but_unmapped_chunk_keeps_bytes() {
        let data = decode(ChunkId::TILES, &[9, 8, 7]).unwrap();
        assert_eq!(data, ChunkData::Undecoded(vec![9, 8, 7]));
    }
}
