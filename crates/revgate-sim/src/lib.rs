//! Classical reversible-logic circuit simulation.
//!
//! This crate simulates circuits of reversible gates (NOT, controlled-NOT,
//! Toffoli) over a fixed-width register of classical bits. Every primitive
//! gate is its own inverse, so any circuit built from them can be undone by
//! replaying its gate list in reverse order. A whole circuit can be wrapped
//! as a single [`Gate`] and wired into a wider circuit, recursively, through
//! an index-remapping contract.
//!
//! # Core Components
//!
//! - **Registers**: [`Registers`], the fixed-width bit vector threaded
//!   through gate application
//! - **Mappings**: [`Mapping`], the validated list of register indices
//!   binding a gate's inputs to concrete registers
//! - **Gates**: [`Gate`] for the three primitives and [`CustomGate`] for
//!   wrapped circuits
//! - **Circuits**: [`Circuit`], an ordered gate list with a builder API and
//!   a sequential execution fold
//!
//! # Indexing Convention
//!
//! Register index 0 is the rightmost bit of the string form: on a width-4
//! circuit, `x(0)` maps `"0000"` to `"0001"`. Mappings list controls first
//! and the target last, so `cx(0, 1)` flips register 1 when register 0 is
//! set.
//!
//! # Example: Building and Running a Circuit
//!
//! ```rust
//! use revgate_sim::Circuit;
//!
//! let mut circuit = Circuit::new("demo", 4);
//! circuit.x(0).unwrap();
//! circuit.cx(0, 1).unwrap();
//! circuit.ccx(0, 1, 2).unwrap();
//!
//! let out = circuit.run("0000").unwrap();
//! assert_eq!(out.to_string(), "0111");
//! ```
//!
//! # Example: A Circuit as a Gate
//!
//! ```rust
//! use revgate_sim::Circuit;
//!
//! // A 2-register swap built from three CNOTs.
//! let mut swap = Circuit::new("swap", 2);
//! swap.cx(0, 1).unwrap().cx(1, 0).unwrap().cx(0, 1).unwrap();
//!
//! // Wire it onto registers 3 and 0 of a wider circuit.
//! let mut outer = Circuit::new("outer", 4);
//! outer.append(swap.into_gate("swap"), [3, 0]).unwrap();
//!
//! assert_eq!(outer.run("1000").unwrap().to_string(), "0001");
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod mapping;
pub mod register;

pub use circuit::Circuit;
pub use error::{MappingViolation, SimError, SimResult};
pub use gate::{CustomGate, Gate};
pub use mapping::Mapping;
pub use register::Registers;
