//! Stateless command dispatcher.
//!
//! Each front end (CLI, terminal UI, WebAssembly) turns user input into a
//! [`Command`] and hands it to [`dispatch`]. Nothing is remembered between
//! calls; all printing stays with the caller.

use std::fmt;
use tracing::{event, Level};
use crate::logic::{Gate, Nibble, Operation, ParseError};
use crate::report::selftest::{self, CheckResult};
use crate::report::{tables, OperationReport};

/// A single user request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add or subtract two operands given as text, e.g. `0101`, `-`, `0011`.
    Calculate { a: String, op: String, b: String },
    /// Truth table for one gate, or for all of them.
    TruthTable(Option<Gate>),
    HalfAdder,
    FullAdder,
    Complements,
    Adder,
    AddSubtract,
    Properties,
    SelfTest,
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Report(OperationReport),
    Text(String),
    SelfTest(Vec<CheckResult>),
}

impl Response {
    /// False only for a self-test with failing checks.
    pub fn is_success(&self) -> bool {
        match self {
            Response::SelfTest(results) => selftest::all_passed(results),
            _ => true,
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Report(report) => write!(f, "{}", report),
            Response::Text(text) => f.write_str(text.trim_end()),
            Response::SelfTest(results) => f.write_str(&selftest::summary(results)),
        }
    }
}

/// Parse the text operands of a calculation.
pub fn parse_calculation(a: &str, op: &str, b: &str) -> Result<(Nibble, Operation, Nibble), ParseError> {
    Ok((Nibble::parse(a)?, op.parse::<Operation>()?, Nibble::parse(b)?))
}

/// Execute one command.
pub fn dispatch(command: &Command) -> Result<Response, ParseError> {
    event!(Level::DEBUG, "dispatching {:?}", command);

    let response = match command {
        Command::Calculate { a, op, b } => {
            let (a, op, b) = parse_calculation(a, op, b).map_err(|e| {
                event!(Level::WARN, "rejected calculation input: {}", e);
                e
            })?;
            Response::Report(OperationReport::new(a, b, op))
        }
        Command::TruthTable(Some(gate)) => Response::Text(tables::gate_table(*gate)),
        Command::TruthTable(None) => Response::Text(tables::all_gate_tables()),
        Command::HalfAdder => Response::Text(tables::half_adder_table()),
        Command::FullAdder => Response::Text(tables::full_adder_table()),
        Command::Complements => Response::Text(tables::complement_table()),
        Command::Adder => Response::Text(tables::adder_cases()),
        Command::AddSubtract => Response::Text(tables::add_subtract_cases()),
        Command::Properties => Response::Text(tables::properties()),
        Command::SelfTest => Response::SelfTest(selftest::self_test()),
    };

    Ok(response)
}
