//! Lectern Catalog - the in-memory Course/Certificate relation.
//!
//! The index is built once from two static tables and is read-only for the
//! lifetime of the process. Queries resolve the certificate→course relation
//! in both directions and compute bundle pricing on the fly.

pub mod index;

pub use index::{BundlePricing, CatalogIndex, CatalogStats};
