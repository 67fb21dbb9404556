//! Builder for [`RawHeaderResolver`].

use crate::{RawHeaderResolver, ResolverError};

/// Builder for constructing a [`RawHeaderResolver`].
#[derive(Debug)]
pub struct RawHeaderResolverBuilder<P, M> {
    /// The source of raw block bytes.
    pub proxy: Option<P>,
    /// The codec used to decode raw bytes.
    pub marshaller: Option<M>,
}

impl<P, M> Default for RawHeaderResolverBuilder<P, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, M> RawHeaderResolverBuilder<P, M> {
    /// Creates a new empty [`RawHeaderResolverBuilder`].
    pub const fn new() -> Self {
        Self { proxy: None, marshaller: None }
    }

    /// Sets the proxy.
    pub fn with_proxy(mut self, proxy: P) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Sets the marshaller.
    pub fn with_marshaller(mut self, marshaller: M) -> Self {
        self.marshaller = Some(marshaller);
        self
    }

    /// Builds the [`RawHeaderResolver`].
    ///
    /// Fails with [`ResolverError::MissingDependency`] naming the first collaborator that was
    /// not set.
    pub fn build(self) -> Result<RawHeaderResolver<P, M>, ResolverError> {
        let proxy = self.proxy.ok_or(ResolverError::MissingDependency("proxy"))?;
        let marshaller = self.marshaller.ok_or(ResolverError::MissingDependency("marshaller"))?;
        Ok(RawHeaderResolver { proxy, marshaller })
    }
}
