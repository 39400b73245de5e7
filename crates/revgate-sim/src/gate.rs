//! Reversible gate types.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::circuit::Circuit;
use crate::error::SimResult;
use crate::mapping::Mapping;
use crate::register::Registers;

/// A reversible gate: a fixed-arity, deterministic bit transform.
///
/// The three primitive gates are involutions, so any circuit built from
/// them can be undone by replaying its gate list in reverse order.
/// [`Gate::Custom`] wraps a whole [`Circuit`] so it can be wired into a
/// wider one; see [`Circuit::into_gate`].
///
/// | Gate | Arity | Mapping order | Effect |
/// |------|-------|---------------|--------|
/// | `Not` | 1 | `[target]` | flip target |
/// | `ControlledNot` | 2 | `[control, target]` | flip target if control is 1 |
/// | `DoublyControlledNot` | 3 | `[control1, control2, target]` | flip target if both controls are 1 |
/// | `Custom` | wrapped width | one entry per wrapped register | run the wrapped circuit |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    /// NOT gate: unconditionally flips its target bit.
    Not,
    /// Controlled-NOT gate: flips the target when the control bit is 1.
    ControlledNot,
    /// Doubly-controlled NOT (Toffoli) gate: flips the target when both
    /// control bits are 1.
    DoublyControlledNot,
    /// A whole circuit reused as a single gate.
    Custom(CustomGate),
}

impl Gate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            Gate::Not => "not",
            Gate::ControlledNot => "cnot",
            Gate::DoublyControlledNot => "ccnot",
            Gate::Custom(gate) => gate.name(),
        }
    }

    /// Get the number of inputs this gate consumes.
    #[inline]
    pub fn arity(&self) -> u32 {
        match self {
            Gate::Not => 1,
            Gate::ControlledNot => 2,
            Gate::DoublyControlledNot => 3,
            Gate::Custom(gate) => gate.arity(),
        }
    }

    /// Apply this gate to a register state.
    ///
    /// The mapping wires gate input `k` to the register with logical index
    /// `mapping[k]`; controls come first, the target last. The mapping is
    /// validated against the live register width on every call, so a gate
    /// can be applied standalone, outside any circuit.
    ///
    /// A controlled gate whose condition is not satisfied returns the input
    /// state unchanged.
    pub fn apply(&self, registers: Registers, mapping: &Mapping) -> SimResult<Registers> {
        mapping.validate(self.arity(), registers.width(), self.name())?;

        let m = mapping.indices();
        let mut registers = registers;
        match self {
            Gate::Not => {
                registers.flip(m[0]);
            }
            Gate::ControlledNot => {
                if registers.get(m[0]) {
                    registers.flip(m[1]);
                }
            }
            Gate::DoublyControlledNot => {
                if registers.get(m[0]) && registers.get(m[1]) {
                    registers.flip(m[2]);
                }
            }
            Gate::Custom(gate) => return gate.apply(registers, mapping),
        }
        Ok(registers)
    }
}

impl From<CustomGate> for Gate {
    fn from(gate: CustomGate) -> Self {
        Gate::Custom(gate)
    }
}

/// A circuit wrapped for use as a single gate.
///
/// The gate's arity equals the wrapped circuit's width. Wrapping consumes
/// the circuit (see [`Circuit::into_gate`]), so a custom gate always
/// replays the gate list it was built from; the circuit sits behind an
/// [`Arc`], making clones of the gate cheap and shareable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomGate {
    name: String,
    circuit: Arc<Circuit>,
}

impl CustomGate {
    pub(crate) fn new(circuit: Circuit, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            circuit: Arc::new(circuit),
        }
    }

    /// Get the gate name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of inputs: the wrapped circuit's width.
    #[inline]
    pub fn arity(&self) -> u32 {
        self.circuit.width()
    }

    /// Get the wrapped circuit.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Extract the mapped bits into a local vector, run the wrapped circuit
    /// on it, and scatter the outputs back to the same mapped positions.
    /// Registers outside the mapping pass through untouched.
    ///
    /// Inner logical index `k` corresponds to outer logical index
    /// `mapping[k]`, on extraction and scatter alike. This is the only
    /// place recursion occurs; nesting depth is bounded only by the
    /// structure the caller builds.
    fn apply(&self, registers: Registers, mapping: &Mapping) -> SimResult<Registers> {
        let mut inner = Registers::zeros(self.circuit.width());
        for (input, &index) in mapping.indices().iter().enumerate() {
            inner.set(input as u32, registers.get(index));
        }

        let output = self.circuit.run_registers(inner)?;

        let mut registers = registers;
        for (input, &index) in mapping.indices().iter().enumerate() {
            registers.set(index, output.get(input as u32));
        }
        Ok(registers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MappingViolation, SimError};

    fn registers(s: &str) -> Registers {
        s.parse().unwrap()
    }

    #[test]
    fn test_gate_properties() {
        assert_eq!(Gate::Not.name(), "not");
        assert_eq!(Gate::Not.arity(), 1);
        assert_eq!(Gate::ControlledNot.name(), "cnot");
        assert_eq!(Gate::ControlledNot.arity(), 2);
        assert_eq!(Gate::DoublyControlledNot.name(), "ccnot");
        assert_eq!(Gate::DoublyControlledNot.arity(), 3);
    }

    #[test]
    fn test_not_flips_target() {
        let out = Gate::Not.apply(registers("010"), &Mapping::from([0])).unwrap();
        assert_eq!(out.to_string(), "011");

        let out = Gate::Not.apply(registers("010"), &Mapping::from([2])).unwrap();
        assert_eq!(out.to_string(), "110");
    }

    #[test]
    fn test_cnot_respects_control() {
        let cnot = Gate::ControlledNot;
        let mapping = Mapping::from([0, 1]);

        let out = cnot.apply(registers("001"), &mapping).unwrap();
        assert_eq!(out.to_string(), "011");

        // Control clear: no-op.
        let out = cnot.apply(registers("100"), &mapping).unwrap();
        assert_eq!(out.to_string(), "100");
    }

    #[test]
    fn test_ccnot_needs_both_controls() {
        let ccnot = Gate::DoublyControlledNot;
        let mapping = Mapping::from([0, 1, 2]);

        let out = ccnot.apply(registers("011"), &mapping).unwrap();
        assert_eq!(out.to_string(), "111");

        let out = ccnot.apply(registers("001"), &mapping).unwrap();
        assert_eq!(out.to_string(), "001");

        let out = ccnot.apply(registers("010"), &mapping).unwrap();
        assert_eq!(out.to_string(), "010");
    }

    #[test]
    fn test_primitive_gates_are_involutions() {
        for (gate, mapping) in [
            (Gate::Not, Mapping::from([1])),
            (Gate::ControlledNot, Mapping::from([2, 0])),
            (Gate::DoublyControlledNot, Mapping::from([0, 2, 1])),
        ] {
            for value in ["000", "011", "101", "111"] {
                let once = gate.apply(registers(value), &mapping).unwrap();
                let twice = gate.apply(once, &mapping).unwrap();
                assert_eq!(twice.to_string(), value, "{} twice", gate.name());
            }
        }
    }

    #[test]
    fn test_standalone_apply_validates_mapping() {
        let err = Gate::Not
            .apply(registers("010"), &Mapping::from([0, 1]))
            .unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidMapping {
                violation: MappingViolation::LengthMismatch { expected: 1, got: 2 },
                ..
            }
        ));

        let err = Gate::ControlledNot
            .apply(registers("010"), &Mapping::from([0, 3]))
            .unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidMapping {
                violation: MappingViolation::OutOfRange { index: 3, width: 3 },
                ..
            }
        ));
    }
}
