use crate::reader::{Reader, ReaderError};

/// General simulation counters and new-guest parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeneralChunk {
    pub game_paused: u32,
    pub current_ticks: u32,
    pub date_month_ticks: u32,
    pub date_months_elapsed: u32,
    pub rand: [u32; 2],
    pub guest_initial_happiness: u32,

    /// money32, stored unsigned
    pub guest_initial_cash: u64,
    pub guest_initial_hunger: u32,
    pub guest_initial_thirst: u32,
    pub next_guest_number: u32,
}

impl GeneralChunk {
    pub(crate) fn read(reader: &mut Reader) -> Result<Self, ReaderError> {
        Ok(GeneralChunk {
            game_paused: reader.read_u32()?,
            current_ticks: reader.read_u32()?,
            date_month_ticks: reader.read_u32()?,
            date_months_elapsed: reader.read_u32()?,
            rand: [reader.read_u32()?, reader.read_u32()?],
            guest_initial_happiness: reader.read_u32()?,
            guest_initial_cash: reader.read_money(4)?,
            guest_initial_hunger: reader.read_u32()?,
            guest_initial_thirst: reader.read_u32()?,
            next_guest_number: reader.read_u32()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_chunk() {
        let fields: [u32; 11] = [0, 123456, 9000, 14, 777, 888, 200, 500, 120, 110, 42];
        let mut data = Vec::new();
        for field in fields {
            data.extend_from_slice(&field.to_le_bytes());
        }

        let mut reader = Reader::new(&data);
        let chunk = GeneralChunk::read(&mut reader).unwrap();
        assert_eq!(chunk.game_paused, 0);
        assert_eq!(chunk.current_ticks, 123456);
        assert_eq!(chunk.rand, [777, 888]);
        assert_eq!(chunk.guest_initial_cash, 500);
        assert_eq!(chunk.next_guest_number, 42);
        assert_eq!(reader.position(), 44);
    }
}
