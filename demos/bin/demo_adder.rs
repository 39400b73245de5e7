//! Ripple-Carry Adder Demo
//!
//! Builds a reversible full adder from Toffoli and CNOT gates, wraps it as
//! a single composite gate, and re-wires that one gate once per bit
//! position to add two integers.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use revgate_demos::{print_header, print_result, print_section, print_success};
use revgate_sim::{Circuit, Gate};

#[derive(Parser, Debug)]
#[command(name = "demo-adder")]
#[command(about = "Add two integers on a reversible ripple-carry adder")]
struct Args {
    /// First summand
    #[arg(short, long, default_value = "11")]
    a: u64,

    /// Second summand
    #[arg(short, long, default_value = "6")]
    b: u64,

    /// Adder width in bits
    #[arg(short = 'n', long, default_value = "8")]
    bits: u32,
}

/// A reversible full adder over four wires: 0 = a, 1 = b, 2 = carry-in,
/// 3 = carry-out ancilla (must be 0 on input).
///
/// After the gate runs, wire 2 holds the sum bit, wire 3 the carry-out,
/// and wires 0 and 1 still hold the summand bits.
fn full_adder() -> Gate {
    let mut fa = Circuit::new("full_adder", 4);
    fa.ccx(0, 1, 3)
        .unwrap()
        .cx(0, 1)
        .unwrap()
        .ccx(1, 2, 3)
        .unwrap()
        .cx(1, 2)
        .unwrap()
        .cx(0, 1)
        .unwrap();
    fa.into_gate("full_adder")
}

/// Build an `n`-bit ripple-carry adder.
///
/// Register layout: bit `i` of the summands sits at `3i + 1` (a) and
/// `3i + 2` (b), the carry chain at `3i`, and the final carry at `3n`.
/// The sum appears on the carry-chain wires after the run.
fn adder(n: u32) -> Circuit {
    let fa = full_adder();
    let mut circuit = Circuit::new("ripple_adder", 3 * n + 1);
    for i in 0..n {
        circuit
            .append(fa.clone(), [3 * i + 1, 3 * i + 2, 3 * i, 3 * (i + 1)])
            .expect("adder wiring is structurally valid");
    }
    circuit
}

/// Encode the summands into the adder's register layout.
fn encode(n: u32, a: u64, b: u64) -> String {
    let width = 3 * n + 1;
    let mut bits = vec!['0'; width as usize];
    let pos = |index: u32| (width - 1 - index) as usize;
    for i in 0..n {
        if (a >> i) & 1 == 1 {
            bits[pos(3 * i + 1)] = '1';
        }
        if (b >> i) & 1 == 1 {
            bits[pos(3 * i + 2)] = '1';
        }
    }
    bits.into_iter().collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    print_header("Reversible Ripple-Carry Adder Demo");

    let max = if args.bits >= 64 {
        u64::MAX
    } else {
        (1 << args.bits) - 1
    };
    if args.a > max || args.b > max {
        eprintln!(
            "Error: summands must fit in {} bits (max {})",
            args.bits, max
        );
        std::process::exit(1);
    }

    print_section("Problem Setup");
    print_result("a", format!("{} (0b{:0width$b})", args.a, args.a, width = args.bits as usize));
    print_result("b", format!("{} (0b{:0width$b})", args.b, args.b, width = args.bits as usize));
    print_result("Adder width", format!("{} bits", args.bits));

    print_section("Circuit Construction");
    let circuit = adder(args.bits);
    print_result("Registers", circuit.width());
    print_result("Composite gates", circuit.num_gates());

    print_section("Simulation");
    let input = encode(args.bits, args.a, args.b);
    let output = circuit.run(&input).expect("input matches circuit width");
    print_result("Input state", &input);
    print_result("Output state", &output);

    let mut sum = 0u64;
    for i in 0..args.bits {
        if output.get(3 * i) {
            sum |= 1 << i;
        }
    }
    if output.get(3 * args.bits) {
        sum |= 1 << args.bits;
    }

    print_section("Result");
    print_result("Sum", format!("{} + {} = {sum}", args.a, args.b));
    if sum == args.a + args.b {
        print_success("simulated sum matches integer addition");
    } else {
        eprintln!("Error: simulated sum {sum} disagrees with integer addition");
        std::process::exit(1);
    }
}
