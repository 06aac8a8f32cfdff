//! Lectern Analytics - tracking bootstrap and event dispatch
//!
//! This crate owns the third-party tracking integrations:
//!
//! - [`integration`] - the closed set of integrations and their lifecycle states
//! - [`registry`] - process-wide attempt-at-most-once state, explicitly owned
//! - [`loader`] - the script-fetch seam and its HTTP implementation
//! - [`sink`] - per-integration event delivery
//! - [`bootstrap`] - fire-and-forget initialization of all integrations
//! - [`dispatcher`] - the never-failing tracking facade used by callers
//!
//! # Overview
//!
//! Bootstrap runs once at startup, attempts each configured integration
//! independently, and never blocks the caller. Everything downstream of the
//! dispatcher is best-effort: a missing, failed, or erroring integration can
//! never surface as an error to the code emitting events.

pub mod bootstrap;
pub mod dispatcher;
pub mod integration;
pub mod loader;
pub mod registry;
pub mod sink;

pub use bootstrap::{run_bootstrap, BootstrapOptions};
pub use dispatcher::Dispatcher;
pub use integration::{Integration, IntegrationState};
pub use loader::{HttpScriptLoader, ScriptLoader};
pub use registry::AnalyticsRegistry;
pub use sink::{EventSink, HttpCollectSink, HttpSinkFactory, SinkFactory};
