#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod backtrace;

mod error;
pub use error::{CliError, CliResult};

mod log;
pub use log::{LogArgs, LogFormat};

mod styles;
pub use styles::cli_styles;
