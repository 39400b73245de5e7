//! Circuit construction and execution.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{SimError, SimResult};
use crate::gate::{CustomGate, Gate};
use crate::mapping::Mapping;
use crate::register::Registers;

/// An ordered sequence of gates over a fixed-width register bank.
///
/// A circuit is built incrementally with [`append`](Circuit::append) or the
/// [`x`](Circuit::x)/[`cx`](Circuit::cx)/[`ccx`](Circuit::ccx) builders,
/// then run any number of times; [`run`](Circuit::run) folds the gate list
/// left to right over a register state. A finished circuit can itself be
/// wrapped as a single gate with [`into_gate`](Circuit::into_gate).
///
/// Running takes `&self`, so concurrent runs of a shared circuit are safe;
/// appending requires `&mut self` and therefore exclusive access.
///
/// ```rust
/// use revgate_sim::Circuit;
///
/// let mut circuit = Circuit::new("majority", 3);
/// circuit.ccx(0, 1, 2).unwrap();
///
/// let out = circuit.run("011").unwrap();
/// assert_eq!(out.to_string(), "111");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit, used in logging and as a default gate label.
    name: String,
    /// Number of registers the circuit operates on.
    width: u32,
    /// Gates with their mappings, in application order.
    gates: Vec<(Gate, Mapping)>,
}

impl Circuit {
    /// Create a new empty circuit over `width` registers.
    pub fn new(name: impl Into<String>, width: u32) -> Self {
        Self {
            name: name.into(),
            width,
            gates: vec![],
        }
    }

    /// Create a circuit from an existing gate list, validating every entry.
    pub fn with_gates(
        name: impl Into<String>,
        width: u32,
        gates: impl IntoIterator<Item = (Gate, Mapping)>,
    ) -> SimResult<Self> {
        let mut circuit = Self::new(name, width);
        for (gate, mapping) in gates {
            circuit.append(gate, mapping)?;
        }
        Ok(circuit)
    }

    // =========================================================================
    // Construction
    // =========================================================================

    /// Append a gate wired onto the registers named by `mapping`.
    ///
    /// Fails with [`SimError::ArityExceeded`] if the gate has more inputs
    /// than the circuit has registers, or [`SimError::InvalidMapping`] if
    /// the mapping fails validation against the circuit width. A failed
    /// append leaves the circuit unmodified.
    pub fn append(&mut self, gate: Gate, mapping: impl Into<Mapping>) -> SimResult<()> {
        let mapping = mapping.into();
        if gate.arity() > self.width {
            return Err(SimError::ArityExceeded {
                gate: gate.name().to_string(),
                arity: gate.arity(),
                width: self.width,
            });
        }
        mapping.validate(gate.arity(), self.width, gate.name())?;
        self.gates.push((gate, mapping));
        Ok(())
    }

    /// Append a NOT gate on `target`.
    pub fn x(&mut self, target: u32) -> SimResult<&mut Self> {
        self.append(Gate::Not, [target])?;
        Ok(self)
    }

    /// Append a controlled-NOT gate.
    pub fn cx(&mut self, control: u32, target: u32) -> SimResult<&mut Self> {
        self.append(Gate::ControlledNot, [control, target])?;
        Ok(self)
    }

    /// Append a doubly-controlled NOT (Toffoli) gate.
    pub fn ccx(&mut self, control1: u32, control2: u32, target: u32) -> SimResult<&mut Self> {
        self.append(Gate::DoublyControlledNot, [control1, control2, target])?;
        Ok(self)
    }

    /// Wrap this circuit as a single gate with arity equal to its width.
    ///
    /// Consumes the circuit, so a wrapped circuit can no longer be mutated
    /// and the gate always replays the gate list it was built from. The
    /// gate list is moved, not copied; clones of the returned gate share it.
    pub fn into_gate(self, name: impl Into<String>) -> Gate {
        Gate::Custom(CustomGate::new(self, name))
    }

    // =========================================================================
    // Execution
    // =========================================================================

    /// Run the circuit on an initial `0`/`1` string, leftmost character
    /// first (so the last character is register 0).
    ///
    /// Fails with [`SimError::WidthMismatch`] if the string length differs
    /// from the circuit width, or [`SimError::InvalidBit`] on a character
    /// other than `0` or `1`.
    pub fn run(&self, initial: &str) -> SimResult<Registers> {
        let got = initial.chars().count() as u32;
        if got != self.width {
            return Err(SimError::WidthMismatch {
                expected: self.width,
                got,
            });
        }
        self.run_registers(initial.parse()?)
    }

    /// Run the circuit on an existing register vector.
    ///
    /// Strict left-to-right fold: each gate consumes the previous state and
    /// produces the next, with no reordering or batching.
    pub fn run_registers(&self, registers: Registers) -> SimResult<Registers> {
        if registers.width() != self.width {
            return Err(SimError::WidthMismatch {
                expected: self.width,
                got: registers.width(),
            });
        }

        debug!(circuit = %self.name, gates = self.gates.len(), "running circuit");
        let mut state = registers;
        for (gate, mapping) in &self.gates {
            trace!(gate = gate.name(), %mapping, "applying gate");
            state = gate.apply(state, mapping)?;
        }
        Ok(state)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of registers.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the number of gates.
    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }

    /// Check whether the circuit contains no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Get the gates with their mappings, in application order.
    pub fn gates(&self) -> &[(Gate, Mapping)] {
        &self.gates
    }
}
