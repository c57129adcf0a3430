//! Built-in self-test of every circuit stage.

use std::fmt::Write;
use serde::Serialize;
use crate::logic::arith::{full_adder, half_adder};
use crate::logic::{
    add4, add_subtract, gates, ones_complement, to_signed_value, twos_complement, Bit, Gate,
    Nibble, Operation,
};
use crate::report::tables::{ADDER_CASES, ADD_SUB_CASES};

/// Outcome of one named check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub name: &'static str,
    pub passed: bool,
}

// Expected outputs for inputs (0,0), (0,1), (1,0), (1,1).
const GATE_REFERENCE: [(Gate, [u8; 4]); 4] = [
    (Gate::And, [0, 0, 0, 1]),
    (Gate::Or, [0, 1, 1, 1]),
    (Gate::Xor, [0, 1, 1, 0]),
    (Gate::Nand, [1, 1, 1, 0]),
];

fn check_gates() -> bool {
    let binary = GATE_REFERENCE.iter().all(|(gate, expected)| {
        gate.truth_table()
            .iter()
            .zip(expected)
            .all(|(row, &want)| row.output.to_u8() == want)
    });
    let not = gates::not(Bit::Zero) == Bit::One && gates::not(Bit::One) == Bit::Zero;
    binary && not
}

fn check_half_adder() -> bool {
    Bit::ALL.iter().all(|&a| {
        Bit::ALL.iter().all(|&b| {
            let (sum, carry) = half_adder(a, b);
            sum.to_u8() + 2 * carry.to_u8() == a.to_u8() + b.to_u8()
        })
    })
}

fn check_full_adder() -> bool {
    Bit::ALL.iter().all(|&a| {
        Bit::ALL.iter().all(|&b| {
            Bit::ALL.iter().all(|&cin| {
                let (sum, cout) = full_adder(a, b, cin);
                sum.to_u8() + 2 * cout.to_u8() == a.to_u8() + b.to_u8() + cin.to_u8()
            })
        })
    })
}

fn check_complements() -> bool {
    Nibble::all().all(|x| {
        let ones = ones_complement(&ones_complement(&x)) == x;
        let twos = twos_complement(&twos_complement(&x)) == x;
        let inverse = add4(&x, &twos_complement(&x), Bit::Zero).0.is_zero();
        ones && twos && inverse
    }) && twos_complement(&Nibble::from_u8(8)) == Nibble::from_u8(8)
}

fn check_cases(cases: &[crate::report::tables::Case]) -> bool {
    cases.iter().all(|case| case.run().2)
}

// Subtracting 0000 never carries, so it reads back as a borrow.
fn check_signed_readback() -> bool {
    Nibble::all().all(|a| {
        Nibble::all().filter(|b| !b.is_zero()).all(|b| {
            let (result, carry) = add_subtract(&a, &b, Operation::Subtract);
            to_signed_value(&result, true, carry) == a.to_u8() as i8 - b.to_u8() as i8
        })
    })
}

/// Run every check.
pub fn self_test() -> Vec<CheckResult> {
    vec![
        CheckResult { name: "logic gates", passed: check_gates() },
        CheckResult { name: "half adder", passed: check_half_adder() },
        CheckResult { name: "full adder", passed: check_full_adder() },
        CheckResult { name: "complements", passed: check_complements() },
        CheckResult { name: "4-bit adder", passed: check_cases(&ADDER_CASES) },
        CheckResult { name: "adder/subtractor", passed: check_cases(&ADD_SUB_CASES) },
        CheckResult { name: "signed read-back", passed: check_signed_readback() },
    ]
}

pub fn all_passed(results: &[CheckResult]) -> bool {
    results.iter().all(|r| r.passed)
}

/// One line per check followed by the totals.
pub fn summary(results: &[CheckResult]) -> String {
    let mut out = String::from("━━━ Self-Test ━━━\n\n");
    for result in results {
        let mark = if result.passed { "✓" } else { "✗" };
        let _ = writeln!(out, "{:<20} {}", result.name, mark);
    }

    let passed = results.iter().filter(|r| r.passed).count();
    let _ = writeln!(out, "\nResults: {}/{} checks passed", passed, results.len());
    if all_passed(results) {
        let _ = write!(out, "✓ All checks passed!");
    } else {
        let _ = write!(out, "✗ {} check(s) failed", results.len() - passed);
    }
    out
}
