#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[macro_use]
extern crate tracing;

mod traits;
pub use traits::Proxy;

mod error;
pub use error::ProxyError;

mod http;
pub use http::{HttpProxy, HttpProxyConfig};

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
