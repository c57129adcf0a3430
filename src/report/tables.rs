//! Truth tables and worked examples for each stage of the circuit.
//!
//! Every function renders to a `String` so the same text can be printed by
//! the CLI, shown in the terminal UI or returned through WebAssembly.

use std::fmt::Write;
use crate::logic::arith::{full_adder, half_adder};
use crate::logic::{
    add4, add_subtract, ones_complement, to_signed_value, to_unsigned_value, twos_complement,
    Bit, Gate, Nibble, Operation,
};

/// A worked example with its expected output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Case {
    pub a: u8,
    pub b: u8,
    pub operation: Operation,
    pub result: u8,
    pub carry: Bit,
    pub label: &'static str,
}

impl Case {
    const fn add(a: u8, b: u8, result: u8, carry: Bit, label: &'static str) -> Self {
        Self { a, b, operation: Operation::Add, result, carry, label }
    }

    const fn sub(a: u8, b: u8, result: u8, carry: Bit, label: &'static str) -> Self {
        Self { a, b, operation: Operation::Subtract, result, carry, label }
    }

    /// Run the case through the adder/subtractor, returning (result, carry, matches).
    pub fn run(&self) -> (Nibble, Bit, bool) {
        let (result, carry) = add_subtract(
            &Nibble::from_u8(self.a),
            &Nibble::from_u8(self.b),
            self.operation,
        );
        let matches = result == Nibble::from_u8(self.result) && carry == self.carry;
        (result, carry, matches)
    }
}

/// Examples for the plain 4-bit adder.
pub const ADDER_CASES: [Case; 5] = [
    Case::add(0, 0, 0, Bit::Zero, "0 + 0 = 0"),
    Case::add(5, 3, 8, Bit::Zero, "5 + 3 = 8"),
    Case::add(8, 8, 0, Bit::One, "8 + 8 = 16 (overflow)"),
    Case::add(15, 1, 0, Bit::One, "15 + 1 = 16 (overflow)"),
    Case::add(1, 1, 2, Bit::Zero, "1 + 1 = 2"),
];

/// Examples for the combined adder/subtractor.
pub const ADD_SUB_CASES: [Case; 7] = [
    Case::add(5, 3, 8, Bit::Zero, "5 + 3 = 8"),
    Case::sub(7, 2, 5, Bit::One, "7 - 2 = 5"),
    Case::sub(2, 7, 0b1011, Bit::Zero, "2 - 7 = -5"),
    Case::add(8, 8, 0, Bit::One, "8 + 8 = 16 (overflow)"),
    Case::add(15, 1, 0, Bit::One, "15 + 1 = 16 (overflow)"),
    Case::add(0, 0, 0, Bit::Zero, "0 + 0 = 0"),
    Case::sub(5, 5, 0, Bit::One, "5 - 5 = 0"),
];

/// Values used to show the complement circuits.
pub const COMPLEMENT_SAMPLES: [u8; 5] = [0, 1, 5, 8, 15];

fn mark(ok: bool) -> &'static str {
    if ok {
        "✓"
    } else {
        "✗"
    }
}

/// Truth table for a single gate.
pub fn gate_table(gate: Gate) -> String {
    let mut out = String::new();
    let derived = if gate.is_derived() { " (built from AND, OR, NOT)" } else { "" };
    let _ = writeln!(out, "{} truth table{}:", gate, derived);

    if gate.arity() == 1 {
        let _ = writeln!(out, "A | {}", gate);
    } else {
        let _ = writeln!(out, "A B | {}", gate);
    }
    let _ = writeln!(out, "{}", "-".repeat(12));

    for row in gate.truth_table() {
        match row.b {
            Some(b) => {
                let _ = writeln!(out, "{} {} |  {}", row.a, b, row.output);
            }
            None => {
                let _ = writeln!(out, "{} |  {}", row.a, row.output);
            }
        }
    }
    out
}

/// Truth tables for every gate.
pub fn all_gate_tables() -> String {
    Gate::ALL
        .iter()
        .map(|&gate| gate_table(gate))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn half_adder_table() -> String {
    let mut out = String::from("Half adder (sum = A XOR B, carry = A AND B):\n");
    let _ = writeln!(out, "A B | Sum | Carry");
    let _ = writeln!(out, "{}", "-".repeat(18));
    for a in Bit::ALL {
        for b in Bit::ALL {
            let (sum, carry) = half_adder(a, b);
            let _ = writeln!(out, "{} {} |  {}  |   {}", a, b, sum, carry);
        }
    }
    out
}

pub fn full_adder_table() -> String {
    let mut out = String::from("Full adder (two half adders and an OR gate):\n");
    let _ = writeln!(out, "A B Cin | Sum | Cout");
    let _ = writeln!(out, "{}", "-".repeat(21));
    for a in Bit::ALL {
        for b in Bit::ALL {
            for cin in Bit::ALL {
                let (sum, cout) = full_adder(a, b, cin);
                let _ = writeln!(out, "{} {}  {}  |  {}  |  {}", a, b, cin, sum, cout);
            }
        }
    }
    out
}

pub fn complement_table() -> String {
    let mut out = String::from("Ones' complement (invert every bit):\n");
    let _ = writeln!(out, "Value | Binary | Complement | Value");
    let _ = writeln!(out, "{}", "-".repeat(36));
    for value in COMPLEMENT_SAMPLES {
        let bits = Nibble::from_u8(value);
        let comp = ones_complement(&bits);
        let _ = writeln!(
            out,
            "{:>5} |  {}  |    {}    | {:>5}",
            value, bits, comp, to_unsigned_value(&comp)
        );
    }

    let _ = writeln!(out, "\nTwo's complement (ones' complement + 0001):");
    let _ = writeln!(out, "Value | Binary | Complement | As -A");
    let _ = writeln!(out, "{}", "-".repeat(37));
    for value in COMPLEMENT_SAMPLES {
        let bits = Nibble::from_u8(value);
        let comp = twos_complement(&bits);
        let _ = writeln!(
            out,
            "{:>5} |  {}  |    {}    | {:>6}",
            value, bits, comp, to_signed_value(&comp, true, Bit::Zero)
        );
    }

    let _ = writeln!(out, "\nCheck: A + two's complement(A) = 0000");
    for value in COMPLEMENT_SAMPLES.into_iter().filter(|&v| v != 0) {
        let bits = Nibble::from_u8(value);
        let (sum, _) = add4(&bits, &twos_complement(&bits), Bit::Zero);
        let _ = writeln!(out, "  {} + (-{}) = {} {}", value, value, sum, mark(sum.is_zero()));
    }
    out
}

fn render_cases(title: &str, cases: &[Case]) -> String {
    let mut out = format!("{}:\n", title);
    let mut passed = 0;

    for case in cases {
        let (result, carry, ok) = case.run();
        if ok {
            passed += 1;
        }
        let _ = writeln!(out, "\n{}:", case.label);
        let _ = writeln!(
            out,
            "  {} {} {} = {} (carry={})",
            Nibble::from_u8(case.a), case.operation.symbol(), Nibble::from_u8(case.b), result, carry
        );
        let _ = writeln!(
            out,
            "  expected: {} (carry={}) {}",
            Nibble::from_u8(case.result), case.carry, mark(ok)
        );
    }

    let _ = writeln!(out, "\nSummary: {}/{} cases passed", passed, cases.len());
    out
}

pub fn adder_cases() -> String {
    render_cases("4-bit ripple-carry adder", &ADDER_CASES)
}

pub fn add_subtract_cases() -> String {
    render_cases("4-bit adder/subtractor", &ADD_SUB_CASES)
}

/// Commutativity, identity, self-subtraction and subtraction-as-addition.
pub fn properties() -> String {
    let a = Nibble::from_u8(5);
    let b = Nibble::from_u8(3);
    let mut out = String::from("Arithmetic properties:\n");

    let ab = add_subtract(&a, &b, Operation::Add);
    let ba = add_subtract(&b, &a, Operation::Add);
    let _ = writeln!(out, "\n1. Commutativity: A + B = B + A");
    let _ = writeln!(out, "   {} + {} = {} (carry={})", a, b, ab.0, ab.1);
    let _ = writeln!(out, "   {} + {} = {} (carry={}) {}", b, a, ba.0, ba.1, mark(ab == ba));

    let identity = add_subtract(&a, &Nibble::ZERO, Operation::Add);
    let _ = writeln!(out, "\n2. Identity: A + 0 = A");
    let _ = writeln!(
        out,
        "   {} + {} = {} (carry={}) {}",
        a, Nibble::ZERO, identity.0, identity.1, mark(identity == (a, Bit::Zero))
    );

    let zero = add_subtract(&a, &a, Operation::Subtract);
    let _ = writeln!(out, "\n3. Self-subtraction: A - A = 0");
    let _ = writeln!(
        out,
        "   {} - {} = {} (carry={}) {}",
        a, a, zero.0, zero.1, mark(zero == (Nibble::ZERO, Bit::One))
    );

    let direct = add_subtract(&a, &b, Operation::Subtract);
    let neg_b = twos_complement(&b);
    let via_add = add4(&a, &neg_b, Bit::Zero);
    let _ = writeln!(out, "\n4. A - B = A + (-B)");
    let _ = writeln!(out, "   {} - {} = {} (carry={})", a, b, direct.0, direct.1);
    let _ = writeln!(
        out,
        "   {} + {} = {} (carry={}) {}",
        a, neg_b, via_add.0, via_add.1, mark(direct == via_add)
    );
    out
}
