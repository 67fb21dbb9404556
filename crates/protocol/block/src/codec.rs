//! The codec boundary between raw block bytes and typed values.

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// An error produced by a [`Marshaller`].
#[derive(Debug, Error)]
pub enum CodecError {
    /// The value could not be encoded.
    #[error("failed to encode value: {0}")]
    Encode(#[source] serde_json::Error),
    /// The bytes are malformed, truncated or do not match the target shape.
    #[error("failed to decode bytes: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Encodes values into bytes and decodes bytes back into typed values.
///
/// Implementations must fail deterministically on malformed or truncated input.
pub trait Marshaller: Send + Sync {
    /// Encodes `value` into bytes.
    fn marshal<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError>;

    /// Decodes `bytes` into a value of type `T`.
    fn unmarshal<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError>;
}

impl<M: Marshaller> Marshaller for &M {
    fn marshal<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        (**self).marshal(value)
    }

    fn unmarshal<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        (**self).unmarshal(bytes)
    }
}

impl<M: Marshaller> Marshaller for std::sync::Arc<M> {
    fn marshal<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        (**self).marshal(value)
    }

    fn unmarshal<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        (**self).unmarshal(bytes)
    }
}

/// A [`Marshaller`] backed by JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonMarshaller;

impl Marshaller for JsonMarshaller {
    fn marshal<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(value).map_err(CodecError::Encode)
    }

    fn unmarshal<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        serde_json::from_slice(bytes).map_err(CodecError::Decode)
    }
}
