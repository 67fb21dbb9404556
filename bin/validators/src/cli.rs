//! Contains the validators CLI.

use crate::error::ValidatorsResult;
use clap::Parser;
use metachain_block::JsonMarshaller;
use metachain_cli::{LogArgs, cli_styles};
use metachain_proxy::{HttpProxy, HttpProxyConfig};
use metachain_resolver::RawHeaderResolver;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use url::Url;

/// Resolves the validators recorded at the start of a metachain epoch.
///
/// The gateway must serve raw blocks and miniblocks JSON-encoded. Binary encoded payloads are
/// rejected with a decode error.
///
/// The snapshot is printed to stdout as JSON. Logs go to stderr.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about, styles = cli_styles())]
pub struct Cli {
    /// Logging arguments.
    #[command(flatten)]
    pub log_args: LogArgs,
    /// Base URL of the gateway serving JSON-encoded raw metachain data.
    #[arg(long = "proxy-url", visible_alias = "proxy", env = "METACHAIN_PROXY_URL")]
    pub proxy_url: Url,
    /// The epoch to resolve the validators of.
    #[arg(long, short = 'e')]
    pub epoch: u32,
    /// Timeout of a single gateway request, in seconds.
    #[arg(long, env = "METACHAIN_PROXY_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,
}

impl Cli {
    /// Runs the validators binary.
    pub fn run(self) -> ValidatorsResult<()> {
        self.log_args.init_tracing_subscriber()?;

        let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
        runtime.block_on(self.resolve())
    }

    /// Returns the gateway configuration selected by the flags.
    pub fn proxy_config(&self) -> HttpProxyConfig {
        HttpProxyConfig::new(self.proxy_url.clone())
            .with_timeout(Duration::from_secs(self.timeout))
    }

    /// Resolves the snapshot and prints it, cancelling on `ctrl-c`.
    async fn resolve(self) -> ValidatorsResult<()> {
        let resolver = RawHeaderResolver::builder()
            .with_proxy(HttpProxy::new(self.proxy_config())?)
            .with_marshaller(JsonMarshaller)
            .build()?;

        let cancel = CancellationToken::new();
        let ctrl_c = tokio::spawn({
            let cancel = cancel.clone();
            async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    warn!(target: "validators", "Received ctrl-c, cancelling");
                    cancel.cancel();
                }
            }
        });

        info!(
            target: "validators",
            endpoint = %self.proxy_url,
            epoch = self.epoch,
            "Resolving validators"
        );
        let result = resolver.validators_info_per_epoch(&cancel, self.epoch).await;
        ctrl_c.abort();
        let snapshot = result?;

        if snapshot.epoch != self.epoch {
            warn!(
                target: "validators",
                requested = self.epoch,
                resolved = snapshot.epoch,
                "Snapshot is from a different epoch than requested"
            );
        }

        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        Ok(())
    }
}
