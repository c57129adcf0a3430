//! Nibble ALU - CLI Entry Point
//!
//! Commands:
//! - `nibble-alu calc <A> <OP> <B>` - Add or subtract two 4-bit values
//! - `nibble-alu table [GATE]` - Print gate truth tables
//! - `nibble-alu demo <TOPIC>` - Walk through one stage of the circuit
//! - `nibble-alu test` - Run the built-in self-test
//! - `nibble-alu tui` - Interactive workbench

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{event, Level};
use tracing_subscriber::prelude::*;

use nibble::{dispatch, Command, Gate, Response};

#[derive(Parser)]
#[command(name = "nibble-alu")]
#[command(version)]
#[command(about = "A 4-bit adder/subtractor built from AND, OR and NOT gates")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add or subtract two 4-bit values, e.g. `calc 0111 - 0010`
    Calc {
        /// First operand (4 bits, MSB first)
        a: String,
        /// Operation: +, -, add or sub
        #[arg(allow_hyphen_values = true)]
        op: String,
        /// Second operand (4 bits, MSB first)
        b: String,
        /// Print the result as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Print truth tables (all gates if none is given)
    Table {
        /// AND, OR, NOT, XOR or NAND
        gate: Option<String>,
    },
    /// Walk through one stage of the circuit
    Demo {
        #[arg(value_enum, default_value_t = Topic::All)]
        topic: Topic,
    },
    /// Run the built-in self-test
    Test,
    /// Interactive workbench
    #[cfg(feature = "tui")]
    Tui,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Topic {
    HalfAdder,
    FullAdder,
    Complement,
    Adder,
    AddSub,
    Properties,
    All,
}

impl Topic {
    fn commands(self) -> Vec<Command> {
        match self {
            Topic::HalfAdder => vec![Command::HalfAdder],
            Topic::FullAdder => vec![Command::FullAdder],
            Topic::Complement => vec![Command::Complements],
            Topic::Adder => vec![Command::Adder],
            Topic::AddSub => vec![Command::AddSubtract],
            Topic::Properties => vec![Command::Properties],
            Topic::All => vec![
                Command::TruthTable(None),
                Command::HalfAdder,
                Command::FullAdder,
                Command::Complements,
                Command::Adder,
                Command::AddSubtract,
                Command::Properties,
            ],
        }
    }
}

fn init_tracing() -> Result<(), tracing_subscriber::filter::ParseError> {
    // RUST_LOG selects which events get printed, e.g. RUST_LOG=nibble=debug.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("warn"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
    Ok(())
}

fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("❌ Invalid log filter: {}", e);
        std::process::exit(1);
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Calc { a, op, b, json }) => {
            calculate(a, op, b, json);
        }
        Some(Commands::Table { gate }) => {
            print_tables(gate.as_deref());
        }
        Some(Commands::Demo { topic }) => {
            run_all(&topic.commands());
        }
        Some(Commands::Test) => {
            run_all(&[Command::SelfTest]);
        }
        #[cfg(feature = "tui")]
        Some(Commands::Tui) => {
            if let Err(e) = nibble::run_workbench() {
                event!(Level::ERROR, "workbench failed: {}", e);
                eprintln!("❌ Workbench error: {}", e);
                std::process::exit(1);
            }
        }
        None => {
            println!("Nibble ALU v{}", env!("CARGO_PKG_VERSION"));
            println!("A 4-bit adder/subtractor built from AND, OR and NOT gates");
            println!();
            println!("Use --help for available commands");
            println!();
            run_all(&[
                Command::Calculate { a: "0101".into(), op: "+".into(), b: "0011".into() },
                Command::Calculate { a: "0010".into(), op: "-".into(), b: "0111".into() },
            ]);
        }
    }
}

/// Dispatch each command in turn, exiting with status 1 on the first failure.
fn run_all(commands: &[Command]) {
    for (i, command) in commands.iter().enumerate() {
        if i > 0 {
            println!();
        }
        match dispatch(command) {
            Ok(response) => {
                println!("{}", response);
                if !response.is_success() {
                    std::process::exit(1);
                }
            }
            Err(e) => {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn calculate(a: String, op: String, b: String, json: bool) {
    let response = match dispatch(&Command::Calculate { a, op, b }) {
        Ok(response) => response,
        Err(e) => {
            eprintln!("❌ Invalid input: {}", e);
            std::process::exit(1);
        }
    };

    match response {
        Response::Report(report) if json => match report.to_json() {
            Ok(text) => println!("{}", text),
            Err(e) => {
                event!(Level::ERROR, "failed to encode report as JSON: {}", e);
                eprintln!("❌ Failed to encode report: {}", e);
                std::process::exit(1);
            }
        },
        other => println!("{}", other),
    }
}

fn print_tables(gate: Option<&str>) {
    let gate = match gate.map(str::parse::<Gate>).transpose() {
        Ok(gate) => gate,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    run_all(&[Command::TruthTable(gate)]);
}
