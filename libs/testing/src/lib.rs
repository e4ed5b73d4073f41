//! # azfake-testing
//!
//! In-memory stand-ins for resource-manager clients, used to drive autoscaler
//! tests without a live backend.
//!
//! - [`DeploymentStore`]: a fake deployments API. Every operation runs under
//!   one store-wide lock, so concurrent callers observe a total order.
//! - [`fixtures`]: static descriptors (scale sets, VM IDs) for test setup.
//! - [`config`]: environment-driven configuration and seed-file loading.
//! - [`telemetry`]: tracing setup for test binaries.
//!
//! Stores are plain values. Each test builds its own (optionally seeded) and
//! injects it as a `DeploymentsClient`; nothing is shared process-wide.

pub mod config;
mod deployments;
mod error;
pub mod fixtures;
pub mod telemetry;

pub use config::FakeConfig;
pub use deployments::DeploymentStore;
pub use error::FixtureError;
