//! In-memory fake of the deployments API.
//!
//! All five operations take the same store-wide lock for their whole
//! critical section, and never await while holding it. Concurrent callers are
//! therefore totally ordered and never observe a half-written record.

use std::collections::HashMap;

use async_trait::async_trait;
use azfake_resources::{
    Deployment, DeploymentExportResult, DeploymentExtended, DeploymentsClient, OperationResponse,
    ProvisioningState, ResourceError,
};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{FakeConfig, FixtureError};

/// Fake deployments API backed by a locked map.
///
/// Records are keyed by deployment name. Callers always receive clones.
#[derive(Debug, Default)]
pub struct DeploymentStore {
    deployments: Mutex<HashMap<String, DeploymentExtended>>,
}

impl DeploymentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with the given records.
    ///
    /// The key is the deployment name. A record without a `name` gets the
    /// key; a record whose `name` disagrees with its key is stored under the
    /// key with its `name` overwritten, so lookups and listings agree.
    pub fn with_deployments<I, S>(deployments: I) -> Self
    where
        I: IntoIterator<Item = (S, DeploymentExtended)>,
        S: Into<String>,
    {
        let deployments: HashMap<String, DeploymentExtended> = deployments
            .into_iter()
            .map(|(name, mut deploy)| {
                let name: String = name.into();
                if deploy.name.as_deref() != Some(name.as_str()) {
                    if let Some(stale) = &deploy.name {
                        warn!(deployment = %name, seeded_name = %stale, "Seeded name differs from key");
                    }
                    deploy.name = Some(name.clone());
                }
                (name, deploy)
            })
            .collect();

        info!(count = deployments.len(), "Seeded deployment store");

        Self {
            deployments: Mutex::new(deployments),
        }
    }

    /// Create a store from configuration, loading the seed file if one is set.
    pub fn from_config(config: &FakeConfig) -> Result<Self, FixtureError> {
        match config.load_seed()? {
            Some(seed) => Ok(Self::with_deployments(seed)),
            None => Ok(Self::new()),
        }
    }

    /// Get a deployment by name.
    pub async fn get(&self, name: &str) -> Result<DeploymentExtended, ResourceError> {
        let deployments = self.deployments.lock().await;

        deployments
            .get(name)
            .cloned()
            .ok_or_else(|| ResourceError::DeploymentNotFound(name.to_string()))
    }

    /// Export the current template of a deployment.
    pub async fn export_template(
        &self,
        name: &str,
    ) -> Result<DeploymentExportResult, ResourceError> {
        let deployments = self.deployments.lock().await;

        let deploy = deployments
            .get(name)
            .ok_or_else(|| ResourceError::DeploymentNotFound(name.to_string()))?;

        Ok(DeploymentExportResult {
            template: deploy.properties.template.clone(),
        })
    }

    /// Create a deployment or replace the template and parameters of an
    /// existing one. Never fails.
    pub async fn create_or_update(&self, name: &str, deployment: Deployment) -> OperationResponse {
        let mut deployments = self.deployments.lock().await;

        let created = !deployments.contains_key(name);
        let deploy = deployments.entry(name.to_string()).or_default();

        // Wholesale replacement: nothing from the previous payload survives.
        deploy.name = Some(name.to_string());
        deploy.properties.template = deployment.properties.template;
        deploy.properties.parameters = deployment.properties.parameters;
        deploy.properties.provisioning_state = Some(ProvisioningState::Succeeded);

        debug!(deployment = %name, created, "Stored deployment");
        OperationResponse::OK
    }

    /// List every deployment, in no particular order.
    pub async fn list(&self) -> Vec<DeploymentExtended> {
        let deployments = self.deployments.lock().await;
        deployments.values().cloned().collect()
    }

    /// Delete a deployment.
    pub async fn delete(&self, name: &str) -> Result<OperationResponse, ResourceError> {
        let mut deployments = self.deployments.lock().await;

        if deployments.remove(name).is_none() {
            return Err(ResourceError::NoSuchDeployment(name.to_string()));
        }

        debug!(deployment = %name, "Deleted deployment");
        Ok(OperationResponse::OK)
    }

    /// Number of stored deployments.
    pub async fn len(&self) -> usize {
        self.deployments.lock().await.len()
    }

    /// Returns true if the store holds no deployments.
    pub async fn is_empty(&self) -> bool {
        self.deployments.lock().await.is_empty()
    }

    /// Returns true if a deployment with this name exists.
    pub async fn contains(&self, name: &str) -> bool {
        self.deployments.lock().await.contains_key(name)
    }
}

// The genuine client scopes deployments by resource group and supports
// server-side filtering and paging. The fake keeps a single flat namespace and
// ignores all three.
#[async_trait]
impl DeploymentsClient for DeploymentStore {
    async fn get(
        &self,
        _resource_group: &str,
        deployment_name: &str,
    ) -> Result<DeploymentExtended, ResourceError> {
        DeploymentStore::get(self, deployment_name).await
    }

    async fn export_template(
        &self,
        _resource_group: &str,
        deployment_name: &str,
    ) -> Result<DeploymentExportResult, ResourceError> {
        DeploymentStore::export_template(self, deployment_name).await
    }

    async fn create_or_update(
        &self,
        _resource_group: &str,
        deployment_name: &str,
        deployment: Deployment,
    ) -> Result<OperationResponse, ResourceError> {
        Ok(DeploymentStore::create_or_update(self, deployment_name, deployment).await)
    }

    async fn list(
        &self,
        _resource_group: &str,
        _filter: Option<&str>,
        _top: Option<i32>,
    ) -> Result<Vec<DeploymentExtended>, ResourceError> {
        Ok(DeploymentStore::list(self).await)
    }

    async fn delete(
        &self,
        _resource_group: &str,
        deployment_name: &str,
    ) -> Result<OperationResponse, ResourceError> {
        DeploymentStore::delete(self, deployment_name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn deployment(param: &str, tmpl: &str) -> Deployment {
        Deployment::new(json!({ "tmpl": tmpl }), json!({ "a": param }))
    }

    #[tokio::test]
    async fn test_get_missing() {
        let store = DeploymentStore::new();

        let err = store.get("missing").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.deployment_name(), "missing");
    }

    #[tokio::test]
    async fn test_create_sets_name_and_state() {
        let store = DeploymentStore::new();
        store.create_or_update("d1", deployment("1", "x")).await;

        let deploy = store.get("d1").await.unwrap();
        assert_eq!(deploy.name.as_deref(), Some("d1"));
        assert_eq!(
            deploy.properties.provisioning_state,
            Some(ProvisioningState::Succeeded)
        );
    }

    #[tokio::test]
    async fn test_update_drops_absent_documents() {
        let store = DeploymentStore::new();
        store.create_or_update("d1", deployment("1", "x")).await;

        // A request without parameters clears them rather than keeping the old ones.
        let template_only = Deployment {
            properties: azfake_resources::DeploymentProperties {
                template: Some(json!({ "tmpl": "y" })),
                parameters: None,
            },
        };
        store.create_or_update("d1", template_only).await;

        let deploy = store.get("d1").await.unwrap();
        assert_eq!(deploy.template(), Some(&json!({ "tmpl": "y" })));
        assert_eq!(deploy.parameters(), None);
    }

    #[tokio::test]
    async fn test_returned_records_are_copies() {
        let store = DeploymentStore::new();
        store.create_or_update("d1", deployment("1", "x")).await;

        let mut copy = store.get("d1").await.unwrap();
        copy.properties.template = Some(json!("mutated"));

        let fresh = store.get("d1").await.unwrap();
        assert_eq!(fresh.template(), Some(&json!({ "tmpl": "x" })));
    }

    #[tokio::test]
    async fn test_seeded_store() {
        let store = DeploymentStore::with_deployments([(
            "seeded",
            DeploymentExtended {
                name: Some("seeded".to_string()),
                ..Default::default()
            },
        )]);

        assert_eq!(store.len().await, 1);
        assert!(store.contains("seeded").await);
        assert!(store.get("seeded").await.unwrap().template().is_none());
    }

    #[tokio::test]
    async fn test_seeded_names_follow_keys() {
        let store = DeploymentStore::with_deployments([
            ("unnamed", DeploymentExtended::default()),
            (
                "renamed",
                DeploymentExtended {
                    name: Some("something-else".to_string()),
                    ..Default::default()
                },
            ),
        ]);

        let unnamed = store.get("unnamed").await.unwrap();
        assert_eq!(unnamed.name.as_deref(), Some("unnamed"));

        let renamed = store.get("renamed").await.unwrap();
        assert_eq!(renamed.name.as_deref(), Some("renamed"));

        let mut names: Vec<String> = store.list().await.into_iter().filter_map(|d| d.name).collect();
        names.sort();
        assert_eq!(names, ["renamed", "unnamed"]);
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = DeploymentStore::new();
        assert!(store.is_empty().await);
        assert!(store.list().await.is_empty());
    }
}
