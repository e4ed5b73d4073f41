//! # azfake-resources
//!
//! Resource documents and client seams for the resource-manager APIs that
//! the autoscaler talks to.
//!
//! ## Design Principles
//!
//! - Documents mirror the wire shape of the genuine API (camelCase JSON)
//! - Templates and parameters are opaque JSON; nothing here validates them
//! - Code under test depends on the client traits, never on a concrete fake
//!
//! ## Contents
//!
//! - Deployment documents (`Deployment`, `DeploymentExtended`, export result)
//! - Compute documents (`VirtualMachineScaleSet`, `Sku`)
//! - `ResourceError`, the error taxonomy shared by every client
//! - `DeploymentsClient`, the deployment operations surface

mod client;
mod error;
mod types;

pub use client::DeploymentsClient;
pub use error::ResourceError;
pub use types::*;
