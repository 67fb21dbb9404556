#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[macro_use]
extern crate tracing;

mod error;
pub use error::ResolverError;

mod resolver;
pub use resolver::RawHeaderResolver;

mod builder;
pub use builder::RawHeaderResolverBuilder;

mod walker;
pub use walker::EpochValidators;

mod validators;

#[cfg(test)]
mod test_utils;
