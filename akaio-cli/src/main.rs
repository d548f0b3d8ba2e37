//! aka-io: 3GPP Milenage/AKA authentication vector calculator
//!
//! # Usage
//!
//! ```bash
//! aka-io K OPc RAND AMF SQN
//! aka-io --op-type op K OP RAND AMF SQN
//! aka-io --format json K OPc RAND AMF SQN
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;

use akaio_cli::{compute_vector, render, VectorInput};
use akaio_common::{init_logging, LogLevel, OpType, OutputFormat};

const INPUT_HELP: &str = "\
All inputs must be in hexadecimal format
  K:    32 hex chars (16 bytes)
  OPc:  32 hex chars (16 bytes)
  RAND: 32 hex chars (16 bytes)
  AMF:  4 hex chars (2 bytes)
  SQN:  12 hex chars (6 bytes)";

/// Compute 3GPP Milenage/AKA authentication vectors
#[derive(Parser, Debug)]
#[command(name = "aka-io")]
#[command(author, version, about, long_about = None)]
#[command(after_help = INPUT_HELP)]
pub struct Args {
    /// Subscriber key K
    #[arg(value_name = "K")]
    pub k: String,

    /// Operator key OPc (or OP with --op-type op)
    #[arg(value_name = "OPc")]
    pub op: String,

    /// Random challenge RAND
    #[arg(value_name = "RAND")]
    pub rand: String,

    /// Authentication management field AMF
    #[arg(value_name = "AMF")]
    pub amf: String,

    /// Sequence number SQN
    #[arg(value_name = "SQN")]
    pub sqn: String,

    /// Type of the second argument: opc or op
    #[arg(long = "op-type", value_name = "TYPE", default_value = "opc")]
    pub op_type: OpType,

    /// Report format: text, yaml or json
    #[arg(short = 'f', long = "format", value_name = "FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Diagnostic log level on stderr (RUST_LOG overrides)
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", default_value = "warn")]
    pub log_level: LogLevel,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    init_logging(args.log_level);

    match run(&args) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Validates, computes and renders; nothing is printed until this succeeds.
fn run(args: &Args) -> Result<String> {
    debug!(op_type = %args.op_type, format = %args.format, "Starting aka-io");

    let input = VectorInput::parse(&args.k, &args.op, &args.rand, &args.amf, &args.sqn, args.op_type)?;
    let vector = compute_vector(&input)?;
    render(&vector, args.format)
}
