//! Gate mappings: binding gate inputs to register indices.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{MappingViolation, SimError, SimResult};

/// An ordered list of register indices, one per gate input.
///
/// Entry `k` wires gate input `k` to the register with that logical index.
/// A mapping is valid against a gate and a register width when every index
/// lies in `[0, width)`, no index repeats, and the number of entries equals
/// the gate's arity. Indices are `u32`, so negative indices are
/// unrepresentable by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping(Vec<u32>);

impl Mapping {
    /// Create a mapping from a list of register indices.
    pub fn new(indices: impl Into<Vec<u32>>) -> Self {
        Self(indices.into())
    }

    /// Get the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the mapping has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the indices in gate-input order.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.0
    }

    /// Validate this mapping against a gate's arity and a register width.
    ///
    /// Pure check, no side effects. Fails fast with
    /// [`SimError::InvalidMapping`] on the first violation found: an index
    /// outside `[0, width)`, a repeated index, or an entry count that
    /// disagrees with `arity`. `gate` names the gate in the error.
    pub fn validate(&self, arity: u32, width: u32, gate: &str) -> SimResult<()> {
        for &index in &self.0 {
            if index >= width {
                return Err(SimError::InvalidMapping {
                    gate: gate.to_string(),
                    violation: MappingViolation::OutOfRange { index, width },
                });
            }
        }

        let mut seen = FxHashSet::default();
        for &index in &self.0 {
            if !seen.insert(index) {
                return Err(SimError::InvalidMapping {
                    gate: gate.to_string(),
                    violation: MappingViolation::Duplicate { index },
                });
            }
        }

        if self.0.len() as u32 != arity {
            return Err(SimError::InvalidMapping {
                gate: gate.to_string(),
                violation: MappingViolation::LengthMismatch {
                    expected: arity,
                    got: self.0.len() as u32,
                },
            });
        }

        Ok(())
    }
}

impl From<Vec<u32>> for Mapping {
    fn from(indices: Vec<u32>) -> Self {
        Mapping(indices)
    }
}

impl From<&[u32]> for Mapping {
    fn from(indices: &[u32]) -> Self {
        Mapping(indices.to_vec())
    }
}

impl<const N: usize> From<[u32; N]> for Mapping {
    fn from(indices: [u32; N]) -> Self {
        Mapping(indices.to_vec())
    }
}

impl FromIterator<u32> for Mapping {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Mapping(iter.into_iter().collect())
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{index}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_mapping() {
        let mapping = Mapping::from([2, 0, 3]);
        assert!(mapping.validate(3, 4, "ccnot").is_ok());
    }

    #[test]
    fn test_index_out_of_range() {
        let mapping = Mapping::from([0, 4]);
        let err = mapping.validate(2, 4, "cnot").unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidMapping {
                violation: MappingViolation::OutOfRange { index: 4, width: 4 },
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_index() {
        let mapping = Mapping::from([1, 1]);
        let err = mapping.validate(2, 4, "cnot").unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidMapping {
                violation: MappingViolation::Duplicate { index: 1 },
                ..
            }
        ));
    }

    #[test]
    fn test_length_mismatch() {
        let mapping = Mapping::from([0, 1]);
        let err = mapping.validate(3, 4, "ccnot").unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidMapping {
                violation: MappingViolation::LengthMismatch { expected: 3, got: 2 },
                ..
            }
        ));
    }

    #[test]
    fn test_range_checked_before_duplicates() {
        // [5, 5] is both out of range and duplicated; range wins.
        let mapping = Mapping::from([5, 5]);
        let err = mapping.validate(2, 4, "cnot").unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidMapping {
                violation: MappingViolation::OutOfRange { index: 5, width: 4 },
                ..
            }
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Mapping::from([3, 0, 1]).to_string(), "[3, 0, 1]");
        assert_eq!(Mapping::new(Vec::new()).to_string(), "[]");
    }
}
