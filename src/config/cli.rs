use crate::config::toml_config::{CalcConfig, OutputFormat};
use crate::core::runner::Request;
use crate::domain::model::Operation;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "small-calc")]
#[command(about = "A small calculator: add, subtract, multiply, divide, sqrt, power")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format, overrides the config file
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Decimals shown for results, overrides the config file
    #[arg(long, global = true)]
    pub precision: Option<usize>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Print the sample calculations
    Demo,
    /// a + b
    Add {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// a - b
    Subtract {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// a * b
    Multiply {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// a / b, rejects b == 0
    Divide {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Square root of a, rejects a < 0
    Sqrt {
        #[arg(allow_negative_numbers = true)]
        a: f64,
    },
    /// base ^ exponent
    Power {
        #[arg(allow_negative_numbers = true)]
        base: f64,
        #[arg(allow_negative_numbers = true)]
        exponent: f64,
    },
}

impl Command {
    pub fn to_request(&self) -> Request {
        let single = |operation: Operation, operands: &[f64]| Request::Single {
            operation,
            operands: operands.to_vec(),
        };

        match *self {
            Command::Demo => Request::Demo,
            Command::Add { a, b } => single(Operation::Add, &[a, b]),
            Command::Subtract { a, b } => single(Operation::Subtract, &[a, b]),
            Command::Multiply { a, b } => single(Operation::Multiply, &[a, b]),
            Command::Divide { a, b } => single(Operation::Divide, &[a, b]),
            Command::Sqrt { a } => single(Operation::Sqrt, &[a]),
            Command::Power { base, exponent } => single(Operation::Power, &[base, exponent]),
        }
    }
}

impl CliConfig {
    /// Load the config file when one was given, then apply flag overrides.
    pub fn resolve_config(&self) -> Result<CalcConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path.display());
                CalcConfig::from_file(path)?
            }
            None => CalcConfig::default(),
        };

        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(precision) = self.precision {
            config.output.precision = Some(precision);
        }

        Ok(config)
    }
}
