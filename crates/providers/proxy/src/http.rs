//! [`Proxy`] implementation backed by the gateway REST API.

use crate::{Proxy, ProxyError};
use alloy_primitives::Bytes;
use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use metachain_block::ShardId;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use std::time::Duration;
use url::Url;

/// The response code the gateway uses for successful requests.
const SUCCESS_CODE: &str = "successful";

/// Configuration of an [`HttpProxy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpProxyConfig {
    /// Base URL of the gateway.
    pub endpoint: Url,
    /// Timeout applied to every request.
    pub timeout: Duration,
}

impl HttpProxyConfig {
    /// The default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates a new [`HttpProxyConfig`] with the default timeout.
    pub fn new(mut endpoint: Url) -> Self {
        // Routes are joined relative to the endpoint, which drops the last path segment
        // unless the path ends with a slash.
        if !endpoint.path().ends_with('/') {
            let path = format!("{}/", endpoint.path());
            endpoint.set_path(&path);
        }
        Self { endpoint, timeout: Self::DEFAULT_TIMEOUT }
    }

    /// Sets the request timeout.
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// The envelope wrapping every gateway response.
#[derive(Debug, Deserialize)]
struct GatewayResponse<T> {
    data: Option<T>,
    #[serde(default)]
    error: String,
    #[serde(default)]
    code: String,
}

#[derive(Debug, Deserialize)]
struct RawBlockData {
    block: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawMiniBlockData {
    miniblock: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NetworkStatusData {
    status: Option<NetworkStatus>,
}

#[derive(Debug, Deserialize)]
struct NetworkStatus {
    erd_nonce_at_epoch_start: Option<u64>,
}

/// A [`Proxy`] talking to a gateway over HTTP.
#[derive(Debug, Clone)]
pub struct HttpProxy {
    /// The gateway configuration.
    config: HttpProxyConfig,
    /// The inner reqwest client.
    inner: Client,
}

impl HttpProxy {
    /// Creates a new [`HttpProxy`] from the given configuration.
    pub fn new(config: HttpProxyConfig) -> Result<Self, ProxyError> {
        let inner = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, inner })
    }

    /// Returns the proxy configuration.
    pub const fn config(&self) -> &HttpProxyConfig {
        &self.config
    }

    /// Issues a GET request on `route` and unwraps the response envelope.
    ///
    /// Returns `Ok(None)` if the gateway answers `404 Not Found`.
    async fn get<T: DeserializeOwned>(&self, route: &str) -> Result<Option<T>, ProxyError> {
        let url = self.config.endpoint.join(route)?;
        trace!(target: "proxy", %url, "Sending gateway request");

        let res = self.inner.get(url).send().await?;
        let status = res.status();
        if status == StatusCode::NOT_FOUND {
            debug!(target: "proxy", route, "Gateway has no data for route");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ProxyError::Status { route: route.to_string(), status: status.as_u16() });
        }

        let body = res.bytes().await?;
        parse_envelope(&body).map(Some)
    }
}

/// Decodes a gateway envelope, failing on any response code other than success.
fn parse_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<T, ProxyError> {
    let response: GatewayResponse<T> = serde_json::from_slice(body)?;
    if response.code != SUCCESS_CODE {
        return Err(ProxyError::Gateway { code: response.code, message: response.error });
    }
    response.data.ok_or(ProxyError::MissingField("data"))
}

/// Decodes a base64 payload as produced by the gateway for raw byte fields.
fn decode_payload(payload: Option<String>, field: &'static str) -> Result<Bytes, ProxyError> {
    let payload = payload.ok_or(ProxyError::MissingField(field))?;
    Ok(STANDARD.decode(payload)?.into())
}

#[async_trait]
impl Proxy for HttpProxy {
    async fn raw_block_by_hash(
        &self,
        shard: ShardId,
        hash: &str,
    ) -> Result<Option<Bytes>, ProxyError> {
        let route = format!("internal/{shard}/raw/block/by-hash/{hash}");
        match self.get::<RawBlockData>(&route).await? {
            Some(data) => decode_payload(data.block, "block").map(Some),
            None => Ok(None),
        }
    }

    async fn raw_block_by_nonce(&self, shard: ShardId, nonce: u64) -> Result<Bytes, ProxyError> {
        let route = format!("internal/{shard}/raw/block/by-nonce/{nonce}");
        let data = self.get::<RawBlockData>(&route).await?.ok_or(ProxyError::NotFound(route))?;
        decode_payload(data.block, "block")
    }

    async fn raw_mini_block_by_hash(
        &self,
        shard: ShardId,
        hash: &str,
    ) -> Result<Bytes, ProxyError> {
        let route = format!("internal/{shard}/raw/miniblock/by-hash/{hash}");
        let data =
            self.get::<RawMiniBlockData>(&route).await?.ok_or(ProxyError::NotFound(route))?;
        decode_payload(data.miniblock, "miniblock")
    }

    async fn nonce_at_epoch_start(&self, shard: ShardId) -> Result<u64, ProxyError> {
        let route = format!("network/status/{shard}");
        let data =
            self.get::<NetworkStatusData>(&route).await?.ok_or(ProxyError::NotFound(route))?;
        data.status
            .and_then(|status| status.erd_nonce_at_epoch_start)
            .ok_or(ProxyError::MissingField("erd_nonce_at_epoch_start"))
    }
}
