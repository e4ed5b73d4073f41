//! Client traits for resource-manager operations.
//!
//! Signatures follow the genuine SDK so a fake can stand in for the real
//! client wherever code under test holds a `dyn DeploymentsClient`.

use async_trait::async_trait;

use crate::{
    Deployment, DeploymentExportResult, DeploymentExtended, OperationResponse, ResourceError,
};

/// Deployment operations within a resource group.
#[async_trait]
pub trait DeploymentsClient: Send + Sync {
    /// Get a deployment by name.
    async fn get(
        &self,
        resource_group: &str,
        deployment_name: &str,
    ) -> Result<DeploymentExtended, ResourceError>;

    /// Export the template of a deployment.
    async fn export_template(
        &self,
        resource_group: &str,
        deployment_name: &str,
    ) -> Result<DeploymentExportResult, ResourceError>;

    /// Create a deployment, or replace an existing one's template and parameters.
    async fn create_or_update(
        &self,
        resource_group: &str,
        deployment_name: &str,
        deployment: Deployment,
    ) -> Result<OperationResponse, ResourceError>;

    /// List deployments. `filter` is an OData filter and `top` a page size.
    async fn list(
        &self,
        resource_group: &str,
        filter: Option<&str>,
        top: Option<i32>,
    ) -> Result<Vec<DeploymentExtended>, ResourceError>;

    /// Delete a deployment.
    async fn delete(
        &self,
        resource_group: &str,
        deployment_name: &str,
    ) -> Result<OperationResponse, ResourceError>;
}
