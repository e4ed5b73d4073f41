//! # azfake-id
//!
//! Typed Azure Resource Manager (ARM) IDs for the resources the fakes hand
//! out.
//!
//! ## ID Format
//!
//! ARM IDs are slash-separated paths of alternating segment names and values:
//!
//! - `/subscriptions/{sub}/resourceGroups/{rg}/providers/Microsoft.Compute/virtualMachineScaleSets/{name}`
//! - `.../virtualMachineScaleSets/{name}/virtualMachines/{index}`
//!
//! Segment *names* compare case-insensitively, as ARM does. Segment *values*
//! are kept verbatim.

mod error;
mod macros;
mod types;

pub use error::IdError;
pub use types::*;
