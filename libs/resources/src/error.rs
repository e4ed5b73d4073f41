//! Error types returned by resource clients.

use thiserror::Error;

/// Errors returned by resource-manager operations.
///
/// Both variants are the same condition, a missing deployment. They differ
/// only in wording because `get`/`export_template` and `delete` report it
/// differently.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// Lookup of a deployment that does not exist.
    #[error("deployment not found: {0}")]
    DeploymentNotFound(String),

    /// Deletion of a deployment that does not exist.
    #[error("there is no such a deployment with name {0}")]
    NoSuchDeployment(String),
}

impl ResourceError {
    /// Returns true if the named resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ResourceError::DeploymentNotFound(_) | ResourceError::NoSuchDeployment(_)
        )
    }

    /// Returns the deployment name the error refers to.
    pub fn deployment_name(&self) -> &str {
        match self {
            ResourceError::DeploymentNotFound(name) | ResourceError::NoSuchDeployment(name) => {
                name
            }
        }
    }

    /// HTTP status the genuine service answers with for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ResourceError::DeploymentNotFound(_) | ResourceError::NoSuchDeployment(_) => 404,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_deployment() {
        let err = ResourceError::DeploymentNotFound("d1".to_string());
        assert_eq!(err.to_string(), "deployment not found: d1");

        let err = ResourceError::NoSuchDeployment("d1".to_string());
        assert_eq!(err.to_string(), "there is no such a deployment with name d1");
    }

    #[test]
    fn test_not_found_classification() {
        for err in [
            ResourceError::DeploymentNotFound("a".to_string()),
            ResourceError::NoSuchDeployment("a".to_string()),
        ] {
            assert!(err.is_not_found());
            assert_eq!(err.deployment_name(), "a");
            assert_eq!(err.status_code(), 404);
        }
    }
}
