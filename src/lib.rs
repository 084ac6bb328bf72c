pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::toml_config::{CalcConfig, OutputConfig, OutputFormat};
pub use core::calculator::{add, divide, multiply, power, sqrt, subtract};
pub use core::runner::{execute, Request};
pub use domain::model::{Evaluation, Operation};
pub use utils::error::{CalcError, Result, DIVIDE_BY_ZERO, NEGATIVE_SQRT};
