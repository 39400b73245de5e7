//! Register state threaded through gate application.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{SimError, SimResult};

/// A fixed-width vector of classical bits.
///
/// Logical index 0 addresses the rightmost bit of the string form, so
/// `"0001"` has bit 0 set and bits 1 through 3 clear. The flip from logical
/// index to storage position lives in one private helper; every gate and
/// the composite-gate extract/scatter go through
/// [`get`](Registers::get), [`set`](Registers::set) and
/// [`flip`](Registers::flip) rather than indexing storage directly.
///
/// Registers are value types: gate application consumes one state and
/// produces the next, so no two gates ever observe the same vector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Registers {
    bits: Vec<bool>,
}

impl Registers {
    /// Create an all-zero register vector of the given width.
    pub fn zeros(width: u32) -> Self {
        Self {
            bits: vec![false; width as usize],
        }
    }

    /// Get the number of registers.
    #[inline]
    pub fn width(&self) -> u32 {
        self.bits.len() as u32
    }

    /// Storage position of a logical index. The single source of truth for
    /// the `width - 1 - i` addressing convention.
    #[inline]
    fn position(&self, index: u32) -> usize {
        self.bits.len() - 1 - index as usize
    }

    /// Read the bit at a logical index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= width`. Gate code validates its mapping before
    /// touching register state, so a panic here indicates an internal bug.
    #[inline]
    pub fn get(&self, index: u32) -> bool {
        self.bits[self.position(index)]
    }

    /// Write the bit at a logical index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= width`.
    #[inline]
    pub fn set(&mut self, index: u32, value: bool) {
        let position = self.position(index);
        self.bits[position] = value;
    }

    /// Invert the bit at a logical index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= width`.
    #[inline]
    pub fn flip(&mut self, index: u32) {
        let position = self.position(index);
        self.bits[position] = !self.bits[position];
    }
}

impl FromStr for Registers {
    type Err = SimError;

    /// Parse a `0`/`1` string, leftmost character first.
    fn from_str(s: &str) -> SimResult<Self> {
        let mut bits = Vec::with_capacity(s.len());
        for (position, ch) in s.chars().enumerate() {
            match ch {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => return Err(SimError::InvalidBit { ch, position }),
            }
        }
        Ok(Self { bits })
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
