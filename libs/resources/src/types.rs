//! Resource documents exchanged with the resource-manager APIs.
//!
//! Field names follow the genuine wire format (camelCase). Every optional
//! field is skipped when absent so documents serialize the way the service
//! returns them.

use std::collections::BTreeMap;

use azfake_id::ScaleSetId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Deployments
// =============================================================================

/// Provisioning state reported on a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ProvisioningState {
    Accepted,
    Running,
    Succeeded,
    Failed,
    Canceled,
    Deleting,
}

/// Properties supplied when creating or updating a deployment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentProperties {
    /// Template document describing the resources to provision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<Value>,

    /// Parameter values referenced by the template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
}

/// Request body for a create-or-update call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    #[serde(default)]
    pub properties: DeploymentProperties,
}

impl Deployment {
    /// Builds a request carrying both documents.
    #[must_use]
    pub fn new(template: Value, parameters: Value) -> Self {
        Self {
            properties: DeploymentProperties {
                template: Some(template),
                parameters: Some(parameters),
            },
        }
    }
}

/// Properties of a stored deployment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentPropertiesExtended {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<ProvisioningState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
}

/// A deployment as returned by get and list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentExtended {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub properties: DeploymentPropertiesExtended,
}

impl DeploymentExtended {
    /// Returns the stored template, if any.
    pub fn template(&self) -> Option<&Value> {
        self.properties.template.as_ref()
    }

    /// Returns the stored parameters, if any.
    pub fn parameters(&self) -> Option<&Value> {
        self.properties.parameters.as_ref()
    }
}

/// Result of exporting a deployment's template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentExportResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<Value>,
}

// =============================================================================
// Operation Acknowledgments
// =============================================================================

/// Acknowledgment returned by mutating operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResponse {
    pub status_code: u16,
}

impl OperationResponse {
    /// A plain `200 OK`.
    pub const OK: Self = Self { status_code: 200 };

    /// Returns true for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

// =============================================================================
// Compute
// =============================================================================

/// SKU of a compute resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sku {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
}

/// A virtual machine scale set descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineScaleSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ScaleSetId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<Sku>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
}

impl VirtualMachineScaleSet {
    /// Returns the SKU capacity (instance count), if set.
    pub fn capacity(&self) -> Option<i64> {
        self.sku.as_ref().and_then(|sku| sku.capacity)
    }
}
