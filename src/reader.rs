use crate::chunks::ResearchItem;
use std::fmt;

/// Strings longer than this are cut short with a trailing `...`
pub const STRING_SCAN_CAP: usize = 1024;

#[inline]
pub(crate) fn read_u8(data: &[u8]) -> Result<(u8, &[u8]), ReadError> {
    let (&first, rest) = data.split_first().ok_or(ReadError::Eof)?;
    Ok((first, rest))
}

#[inline]
pub(crate) fn read_u16(data: &[u8]) -> Result<(u16, &[u8]), ReadError> {
    let (head, rest) = data.split_first_chunk::<2>().ok_or(ReadError::Eof)?;
    Ok((u16::from_le_bytes(*head), rest))
}

#[inline]
pub(crate) fn read_u32(data: &[u8]) -> Result<(u32, &[u8]), ReadError> {
    let (head, rest) = data.split_first_chunk::<4>().ok_or(ReadError::Eof)?;
    Ok((u32::from_le_bytes(*head), rest))
}

#[inline]
pub(crate) fn read_u64(data: &[u8]) -> Result<(u64, &[u8]), ReadError> {
    let (head, rest) = data.split_first_chunk::<8>().ok_or(ReadError::Eof)?;
    Ok((u64::from_le_bytes(*head), rest))
}

/// Reads a little endian unsigned integer of an arbitrary byte width.
///
/// The container uses widths of 1, 2, 4, and 8, but array element widths are
/// declared in the data itself, so any width must be accepted. Bytes beyond
/// the u64 range are consumed but do not contribute to the value.
#[inline]
pub(crate) fn read_uint(data: &[u8], width: usize) -> Result<(u64, &[u8]), ReadError> {
    if width > data.len() {
        return Err(ReadError::Eof);
    }
    let (head, rest) = data.split_at(width);
    let mut result = 0u64;
    for (i, &byte) in head.iter().enumerate().take(8) {
        result |= u64::from(byte) << (i * 8);
    }
    Ok((result, rest))
}

#[inline]
pub(crate) fn read_bytes(data: &[u8], len: usize) -> Result<(&[u8], &[u8]), ReadError> {
    if len > data.len() {
        return Err(ReadError::Eof);
    }
    Ok(data.split_at(len))
}

/// Each byte is one character; the format stores single byte characters,
/// not utf-8.
fn chars_of(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Reads a null terminated string.
///
/// The scan stops after [`STRING_SCAN_CAP`] bytes even without a terminator,
/// in which case the accumulated text is suffixed with `...`. That is a
/// documented degradation of the format, not an error. Running out of input
/// before either condition is an error.
pub(crate) fn read_string(data: &[u8]) -> Result<(String, &[u8]), ReadError> {
    match data.iter().take(STRING_SCAN_CAP).position(|&b| b == 0) {
        Some(pos) => Ok((chars_of(&data[..pos]), &data[pos + 1..])),
        None if data.len() >= STRING_SCAN_CAP => {
            let mut result = chars_of(&data[..STRING_SCAN_CAP]);
            result.push_str("...");
            Ok((result, &data[STRING_SCAN_CAP..]))
        }
        None => Err(ReadError::Eof),
    }
}

#[inline]
pub(crate) fn read_chars(data: &[u8], size: usize) -> Result<(String, &[u8]), ReadError> {
    let (head, rest) = read_bytes(data, size)?;
    Ok((chars_of(head), rest))
}

/// A localized string: one language tag and its text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LocalizedString {
    pub lang: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadError {
    Eof,
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ReadError::Eof => write!(f, "unexpected end of data"),
        }
    }
}

impl ReadError {
    #[inline]
    #[must_use]
    pub fn at(self, position: usize) -> ReaderError {
        ReaderError {
            position,
            kind: self,
        }
    }
}

/// A [`ReadError`] annotated with the position where it occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderError {
    position: usize,
    kind: ReadError,
}

impl ReaderError {
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn kind(&self) -> &ReadError {
        &self.kind
    }

    pub fn into_kind(self) -> ReadError {
        self.kind
    }
}

impl std::error::Error for ReaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl fmt::Display for ReaderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ReadError::Eof => write!(f, "not enough data to read at {}", self.position),
        }
    }
}

/// A forward-only reader over an in-memory buffer.
///
/// Every read advances the position by exactly the number of bytes consumed
/// and errors when fewer bytes remain than required. Each chunk of a save is
/// given its own reader scoped to that chunk's slice, so a failed read in one
/// chunk can not skew the position seen by another.
pub struct Reader<'a> {
    data: &'a [u8],
    original_length: usize,
}

impl<'a> Reader<'a> {
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            original_length: data.len(),
        }
    }

    /// Bytes not yet consumed
    #[inline]
    pub fn remainder(&self) -> &'a [u8] {
        self.data
    }

    /// Number of bytes consumed so far
    #[inline]
    pub fn position(&self) -> usize {
        self.original_length - self.data.len()
    }

    #[inline]
    fn err_position(&self, err: ReadError) -> ReaderError {
        err.at(self.position())
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, ReaderError> {
        let (result, rest) = read_u8(self.data).map_err(|e| self.err_position(e))?;
        self.data = rest;
        Ok(result)
    }

    #[inline]
    pub fn read_u16(&mut self) -> Result<u16, ReaderError> {
        let (result, rest) = read_u16(self.data).map_err(|e| self.err_position(e))?;
        self.data = rest;
        Ok(result)
    }

    #[inline]
    pub fn read_u32(&mut self) -> Result<u32, ReaderError> {
        let (result, rest) = read_u32(self.data).map_err(|e| self.err_position(e))?;
        self.data = rest;
        Ok(result)
    }

    #[inline]
    pub fn read_u64(&mut self) -> Result<u64, ReaderError> {
        let (result, rest) = read_u64(self.data).map_err(|e| self.err_position(e))?;
        self.data = rest;
        Ok(result)
    }

    /// Reads an unsigned little endian integer of the given byte width
    #[inline]
    pub fn read_uint(&mut self, width: usize) -> Result<u64, ReaderError> {
        let (result, rest) = read_uint(self.data, width).map_err(|e| self.err_position(e))?;
        self.data = rest;
        Ok(result)
    }

    #[inline]
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], ReaderError> {
        let (result, rest) = read_bytes(self.data, len).map_err(|e| self.err_position(e))?;
        self.data = rest;
        Ok(result)
    }

    /// Reads a null terminated string, see [`read_string`](crate::reader)
    #[inline]
    pub fn read_string(&mut self) -> Result<String, ReaderError> {
        let (result, rest) = read_string(self.data).map_err(|e| self.err_position(e))?;
        self.data = rest;
        Ok(result)
    }

    /// Reads exactly `size` bytes as a fixed width character block
    #[inline]
    pub fn read_chars(&mut self, size: usize) -> Result<String, ReaderError> {
        let (result, rest) = read_chars(self.data, size).map_err(|e| self.err_position(e))?;
        self.data = rest;
        Ok(result)
    }

    /// Four byte presence flag, as the format stores its booleans
    #[inline]
    pub fn read_bool(&mut self) -> Result<bool, ReaderError> {
        Ok(self.read_u32()? != 0)
    }

    /// Timestamps are stored as 8 byte unix epochs
    #[inline]
    pub fn read_timestamp(&mut self) -> Result<u64, ReaderError> {
        self.read_u64()
    }

    /// Money fields are stored with the same unsigned encoding as every other
    /// integer even though they are semantically signed currency. The raw
    /// unsigned value is surfaced verbatim, so a negative balance shows up as
    /// a large positive number. Known format quirk.
    #[inline]
    pub fn read_money(&mut self, width: usize) -> Result<u64, ReaderError> {
        self.read_uint(width)
    }

    /// Reads a length prefixed integer array: u32 count, u32 element width,
    /// then `count` unsigned integers of that width.
    ///
    /// A declared width of zero yields an empty array without consuming any
    /// element bytes, guarding against malformed prefixes.
    pub fn read_uint_array(&mut self) -> Result<Vec<u64>, ReaderError> {
        let count = self.read_u32()?;
        let width = self.read_u32()?;
        if width == 0 {
            return Ok(Vec::new());
        }

        let mut result = Vec::new();
        for _ in 0..count {
            result.push(self.read_uint(width as usize)?);
        }
        Ok(result)
    }

    /// Reads a length prefixed string array: u32 count, u32 element width.
    ///
    /// A width of zero means each element is null terminated; otherwise each
    /// element is a fixed width character block. An empty array still carries
    /// one lone terminator byte, which must be consumed.
    pub fn read_string_array(&mut self) -> Result<Vec<String>, ReaderError> {
        let count = self.read_u32()?;
        let width = self.read_u32()?;

        let mut result = Vec::new();
        for _ in 0..count {
            let element = if width == 0 {
                self.read_string()?
            } else {
                self.read_chars(width as usize)?
            };
            result.push(element);
        }

        if count == 0 {
            self.read_u8()?;
        }
        Ok(result)
    }

    /// Reads a localized string table.
    ///
    /// The table declares a length (always 1 in practice) and an element size
    /// (consumed, otherwise unused), followed by a language tag and a value.
    pub fn read_string_table(&mut self) -> Result<LocalizedString, ReaderError> {
        let _table_len = self.read_u32()?;
        let _element_size = self.read_u32()?;
        let lang = self.read_string()?;
        let value = self.read_string()?;
        Ok(LocalizedString { lang, value })
    }

    /// Reads an optional research item behind a presence flag of
    /// `flag_width` bytes.
    ///
    /// A zero flag is an explicit absence, distinct from an all-zero item.
    pub fn read_research_item(
        &mut self,
        flag_width: usize,
    ) -> Result<Option<ResearchItem>, ReaderError> {
        let present = self.read_uint(flag_width)?;
        if present == 0 {
            return Ok(None);
        }

        Ok(Some(ResearchItem {
            kind: self.read_u32()?,
            base_ride_type: self.read_u32()?,
            entry_index: self.read_u32()?,
            flags: self.read_u32()?,
            category: self.read_u32()?,
        }))
    }

    /// Reads a length prefixed array of optional research items (flag width
    /// 4), dropping absent entries from the result.
    pub fn read_research_item_array(&mut self) -> Result<Vec<ResearchItem>, ReaderError> {
        let count = self.read_u32()?;
        let _element_size = self.read_u32()?;

        let mut result = Vec::new();
        for _ in 0..count {
            if let Some(item) = self.read_research_item(4)? {
                result.push(item);
            }
        }
        Ok(result)
    }
}
