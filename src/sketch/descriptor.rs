//! Sketch descriptor decoding.

use super::error::DecodeError;
use super::{CELL_COUNT, PALETTE_BASE};
use crate::palette::PALETTE_SIZE;

/// A decoded sketch: one palette index per cell, in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    cells: [u8; CELL_COUNT],
}

impl Descriptor {
    /// Decode a descriptor string.
    ///
    /// Each character must be in `'A'..='P'`. Characters past the 256th are
    /// ignored, a shorter string is an error.
    pub fn decode(data: &str) -> Result<Self, DecodeError> {
        let mut cells = [0u8; CELL_COUNT];
        let mut found = 0;

        for (position, ch) in data.chars().take(CELL_COUNT).enumerate() {
            cells[position] = cell_index(ch).ok_or(DecodeError::InvalidCell {
                position,
                found: ch,
            })?;
            found += 1;
        }

        if found < CELL_COUNT {
            return Err(DecodeError::TooShort {
                expected: CELL_COUNT,
                found,
            });
        }

        let extra = data.chars().count() - CELL_COUNT;
        if extra > 0 {
            tracing::debug!(extra, "ignoring trailing descriptor characters");
        }

        Ok(Self { cells })
    }

    /// A descriptor with every cell set to `index`.
    pub fn filled(index: u8) -> Self {
        Self {
            cells: [index.min((PALETTE_SIZE - 1) as u8); CELL_COUNT],
        }
    }

    /// Palette indices in scan order.
    pub fn cells(&self) -> &[u8; CELL_COUNT] {
        &self.cells
    }

    /// Re-encode as a descriptor string.
    pub fn encode(&self) -> String {
        self.cells
            .iter()
            .map(|&index| char::from(PALETTE_BASE + index))
            .collect()
    }
}

/// Palette index of a descriptor character.
fn cell_index(ch: char) -> Option<u8> {
    let offset = u32::from(ch).checked_sub(u32::from(PALETTE_BASE))?;
    if (offset as usize) < PALETTE_SIZE {
        Some(offset as u8)
    } else {
        None
    }
}
