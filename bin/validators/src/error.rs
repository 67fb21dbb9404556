//! Error types for the validators binary.

use metachain_proxy::ProxyError;
use metachain_resolver::ResolverError;
use thiserror::Error;

/// Errors that can occur in the validators binary.
#[derive(Error, Debug)]
pub enum ValidatorsError {
    /// CLI error from the shared CLI utilities.
    #[error(transparent)]
    Cli(#[from] metachain_cli::CliError),

    /// The async runtime could not be started.
    #[error("failed to start runtime: {0}")]
    Runtime(#[from] std::io::Error),

    /// The gateway client could not be created.
    #[error("invalid gateway configuration: {0}")]
    Proxy(#[from] ProxyError),

    /// The validator snapshot could not be resolved.
    #[error(transparent)]
    Resolver(#[from] ResolverError),

    /// The snapshot could not be rendered.
    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Type alias for validators binary results.
pub type ValidatorsResult<T> = Result<T, ValidatorsError>;
