//! Error types for circuit construction and execution.

use std::fmt;
use thiserror::Error;

/// How a gate mapping failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingViolation {
    /// An index does not correspond to any register.
    OutOfRange {
        /// The offending index.
        index: u32,
        /// The register width it was checked against.
        width: u32,
    },
    /// An index appears more than once.
    Duplicate {
        /// The repeated index.
        index: u32,
    },
    /// The number of indices disagrees with the gate's arity.
    LengthMismatch {
        /// The gate's arity.
        expected: u32,
        /// The number of indices supplied.
        got: u32,
    },
}

impl fmt::Display for MappingViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingViolation::OutOfRange { index, width } => {
                write!(f, "index {index} is out of range for width {width}")
            }
            MappingViolation::Duplicate { index } => {
                write!(f, "index {index} appears more than once")
            }
            MappingViolation::LengthMismatch { expected, got } => {
                write!(f, "expected {expected} indices, got {got}")
            }
        }
    }
}

/// Errors that can occur while building or running a circuit.
///
/// Every variant reflects a configuration mistake by the caller and is
/// reported before any register state is produced or mutated.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// A gate mapping failed validation.
    #[error("invalid mapping for gate '{gate}': {violation}")]
    InvalidMapping {
        /// Name of the gate being mapped.
        gate: String,
        /// What was wrong with the mapping.
        violation: MappingViolation,
    },

    /// A gate has more inputs than the circuit has registers.
    #[error("gate '{gate}' has {arity} inputs but the circuit is only {width} registers wide")]
    ArityExceeded {
        /// Name of the gate.
        gate: String,
        /// The gate's arity.
        arity: u32,
        /// The circuit's register width.
        width: u32,
    },

    /// An initial value's length disagrees with the circuit width.
    #[error("initial value has {got} bits but the circuit has {expected} registers")]
    WidthMismatch {
        /// The circuit's register width.
        expected: u32,
        /// The number of bits supplied.
        got: u32,
    },

    /// A register string contains a character other than `0` or `1`.
    #[error("invalid bit character '{ch}' at position {position}")]
    InvalidBit {
        /// The offending character.
        ch: char,
        /// Its byte-order position in the input string.
        position: usize,
    },
}

/// Result type for simulator operations.
pub type SimResult<T> = Result<T, SimError>;
