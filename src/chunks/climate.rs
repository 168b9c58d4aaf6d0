use crate::reader::{Reader, ReaderError};

/// One sampled weather state, five u32 fields in storage order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WeatherState {
    pub weather: u32,
    pub temperature: u32,
    pub weather_effect: u32,
    pub weather_gloom: u32,
    pub level: u32,
}

impl WeatherState {
    fn read(reader: &mut Reader) -> Result<Self, ReaderError> {
        Ok(WeatherState {
            weather: reader.read_u32()?,
            temperature: reader.read_u32()?,
            weather_effect: reader.read_u32()?,
            weather_gloom: reader.read_u32()?,
            level: reader.read_u32()?,
        })
    }
}

/// Climate type and the current/next weather pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClimateChunk {
    /// 0 = cool and wet, 1 = warm, 2 = hot and dry, 3 = cold
    pub climate: u32,
    pub update_timer: u32,
    pub current: WeatherState,
    pub next: WeatherState,
}

impl ClimateChunk {
    pub(crate) fn read(reader: &mut Reader) -> Result<Self, ReaderError> {
        Ok(ClimateChunk {
            climate: reader.read_u32()?,
            update_timer: reader.read_u32()?,
            current: WeatherState::read(reader)?,
            next: WeatherState::read(reader)?,
        })
    }
}
