//! Read cursor for a single decode call.
//!
//! Holds the running latitude/longitude accumulators and the read position.
//! A cursor is created per call and never outlives it.

use crate::error::PolylineError;

/// Offset added to every emitted 6-bit value.
pub(crate) const BIAS: u8 = 63;

/// Set on every group except the last of a variable-length integer.
pub(crate) const CONTINUATION: u8 = 0x20;

pub(crate) const CHUNK_MASK: u8 = 0x1f;

/// Bits carried by one character.
pub(crate) const CHUNK_BITS: u32 = 5;

#[derive(Debug)]
pub(crate) struct DecoderCursor<'a> {
    source: &'a str,
    position: usize,
    lat: i64,
    lng: i64,
}

impl<'a> DecoderCursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            lat: 0,
            lng: 0,
        }
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Reads one latitude delta and one longitude delta and applies them.
    ///
    /// Returns the new absolute scaled pair, or `None` when the stream ends
    /// before the pair is complete. Accumulators are only touched once both
    /// deltas have been read.
    pub(crate) fn next_pair(&mut self) -> Result<Option<(i64, i64)>, PolylineError> {
        let Some(lat_raw) = self.read_varint()? else {
            return Ok(None);
        };
        let lat_end = self.position;
        let Some(lng_raw) = self.read_varint()? else {
            return Ok(None);
        };

        self.lat = self
            .lat
            .checked_add(unzigzag(lat_raw))
            .ok_or(PolylineError::EncodingOverflow { position: lat_end - 1 })?;
        self.lng = self
            .lng
            .checked_add(unzigzag(lng_raw))
            .ok_or(PolylineError::EncodingOverflow {
                position: self.position - 1,
            })?;

        Ok(Some((self.lat, self.lng)))
    }

    /// Reads one variable-length integer, least-significant group first.
    fn read_varint(&mut self) -> Result<Option<u64>, PolylineError> {
        let bytes = self.source.as_bytes();
        let mut value: u64 = 0;
        let mut shift: u32 = 0;

        loop {
            let Some(&byte) = bytes.get(self.position) else {
                return Ok(None);
            };
            let raw = self.decode_byte(byte)?;

            let chunk = u64::from(raw & CHUNK_MASK);
            if shift >= u64::BITS || (chunk << shift) >> shift != chunk {
                return Err(PolylineError::EncodingOverflow {
                    position: self.position,
                });
            }
            value |= chunk << shift;
            shift += CHUNK_BITS;
            self.position += 1;

            if raw & CONTINUATION == 0 {
                return Ok(Some(value));
            }
        }
    }

    fn decode_byte(&self, byte: u8) -> Result<u8, PolylineError> {
        match byte.checked_sub(BIAS) {
            Some(raw) if raw <= CONTINUATION | CHUNK_MASK => Ok(raw),
            _ => Err(PolylineError::InvalidCharacter {
                position: self.position,
                found: self.char_at_position(),
            }),
        }
    }

    // Every byte before `position` was valid ASCII, so it sits on a char boundary.
    fn char_at_position(&self) -> char {
        self.source
            .get(self.position..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

/// Folds the sign back out of the low bit.
pub(crate) fn unzigzag(raw: u64) -> i64 {
    let half = (raw >> 1) as i64;
    if raw & 1 == 1 { !half } else { half }
}
