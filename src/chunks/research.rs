use crate::reader::{Reader, ReaderError};

/// One entry of the research tables
///
/// Stored behind a presence flag; an absent item is not the same thing as an
/// item whose fields happen to all be zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResearchItem {
    pub kind: u32,
    pub base_ride_type: u32,
    pub entry_index: u32,
    pub flags: u32,
    pub category: u32,
}

/// Research funding and the invented/uninvented item tables
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResearchChunk {
    pub funding_level: u32,
    pub priorities: u32,
    pub progress_stage: u32,
    pub progress: u32,
    pub expected_month: u32,
    pub expected_day: u32,
    pub last_item: Option<ResearchItem>,
    pub next_item: Option<ResearchItem>,
    pub items_uninvented: Vec<ResearchItem>,
    pub items_invented: Vec<ResearchItem>,
}

impl ResearchChunk {
    pub(crate) fn read(reader: &mut Reader) -> Result<Self, ReaderError> {
        Ok(ResearchChunk {
            funding_level: reader.read_u32()?,
            priorities: reader.read_u32()?,
            progress_stage: reader.read_u32()?,
            progress: reader.read_u32()?,
            expected_month: reader.read_u32()?,
            expected_day: reader.read_u32()?,
            last_item: reader.read_research_item(1)?,
            next_item: reader.read_research_item(1)?,
            items_uninvented: reader.read_research_item_array()?,
            items_invented: reader.read_research_item_array()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_bytes(item: &ResearchItem) -> Vec<u8> {
        let mut data = Vec::new();
        for field in [
            item.kind,
            item.base_ride_type,
            item.entry_index,
            item.flags,
            item.category,
        ] {
            data.extend_from_slice(&field.to_le_bytes());
        }
        data
    }

    #[test]
    fn test_research_chunk() {
        let next = ResearchItem {
            kind: 0,
            base_ride_type: 52,
            entry_index: 7,
            flags: 0,
            category: 1,
        };

        let mut data = Vec::new();
        for field in [2u32, 31, 4, 160, 2, 14] {
            data.extend_from_slice(&field.to_le_bytes());
        }
        data.push(0x00); // last item absent
        data.push(0x01); // next item present
        data.extend_from_slice(&item_bytes(&next));

        // one uninvented item, flag width 4
        data.extend_from_slice(&1u32.to_le_bytes());
        data.extend_from_slice(&21u32.to_le_bytes());
        data.extend_from_slice(&1u32.to_le_bytes());
        data.extend_from_slice(&item_bytes(&ResearchItem::default()));

        // empty invented table
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&21u32.to_le_bytes());

        let mut reader = Reader::new(&data);
        let chunk = ResearchChunk::read(&mut reader).unwrap();
        assert_eq!(chunk.funding_level, 2);
        assert_eq!(chunk.expected_day, 14);
        assert_eq!(chunk.last_item, None);
        assert_eq!(chunk.next_item, Some(next));
        assert_eq!(chunk.items_uninvented, vec![ResearchItem::default()]);
        assert_eq!(chunk.items_invented, Vec::<ResearchItem>::new());
        assert_eq!(reader.position(), data.len());
    }
}
