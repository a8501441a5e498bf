//! qprep — normalize complex amplitudes into a quantum state and print it
//! in Dirac notation.
//!
//! Input can come from the command line (`qprep -q 2 1+0j 0 1j 0`) or from
//! interactive prompts when arguments are omitted. All actual state logic
//! lives in `qprep-state`; this binary only collects input and formats
//! program output.

use anyhow::{bail, Context, Result};
use clap::Parser;
use num_complex::Complex64;
use qprep_state::state::MAX_QUBITS;
use qprep_state::validation::DEFAULT_NORM_TOLERANCE;
use qprep_state::{dirac_notation, validate_normalization, QuantumState};
use std::io::{self, BufRead, Write};

#[derive(Debug, Parser)]
#[command(
    name = "qprep",
    about = "Normalize complex amplitudes into a quantum state and print it in Dirac notation",
    version
)]
struct QprepCli {
    /// Number of qubits (the state has 2^n amplitudes); prompted for when omitted
    #[arg(short = 'q', long = "qubits")]
    qubits: Option<usize>,

    /// Complex amplitudes, e.g. 1+0j 0 1j 0; prompted for when omitted
    #[arg(value_name = "AMPLITUDE", allow_hyphen_values = true)]
    amplitudes: Vec<String>,
}

/// Parse whitespace-delimited complex literals (`1`, `1j`, `0.5i`, `1+0j`, ...)
fn parse_amplitudes(tokens: &[String]) -> Result<Vec<Complex64>> {
    tokens
        .iter()
        .map(|token| {
            token
                .parse::<Complex64>()
                .with_context(|| format!("invalid complex amplitude {:?}", token))
        })
        .collect()
}

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read input")?;
    Ok(line.trim().to_string())
}

fn main() -> Result<()> {
    let args = QprepCli::parse();

    let num_qubits = match args.qubits {
        Some(n) => n,
        None => prompt_line("Enter number of qubits: ")?
            .parse()
            .context("number of qubits must be a positive integer")?,
    };
    if num_qubits == 0 || num_qubits > MAX_QUBITS {
        bail!("number of qubits must be between 1 and {}", MAX_QUBITS);
    }

    let tokens = if args.amplitudes.is_empty() {
        let dim = 1usize << num_qubits;
        println!(
            "Enter {} complex amplitudes (space-separated, e.g. 1+0j 0 1j 0):",
            dim
        );
        prompt_line("")?
            .split_whitespace()
            .map(str::to_string)
            .collect()
    } else {
        args.amplitudes
    };

    let amplitudes = parse_amplitudes(&tokens)?;
    let state = QuantumState::prepare(num_qubits, &amplitudes)?;

    println!(
        "\nNormalized {}-qubit state vector (column form):\n{}",
        num_qubits, state
    );
    println!("\nState in Dirac notation:");
    println!("|ψ⟩ = {}", dirac_notation(&state));

    let check = validate_normalization(state.amplitudes(), DEFAULT_NORM_TOLERANCE);
    println!("\nNormalization check: {}", check.total_probability);

    Ok(())
}
