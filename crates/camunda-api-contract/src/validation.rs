//! Request validation helpers
//!
//! Validation failures surface before a request leaves the client, so
//! callers see a contract error instead of a round trip to the engine
//! that would come back as HTTP 400.

use validator::Validate;

use crate::error::ApiContractError;
use crate::types::NewDeployment;

/// Validate any request type carrying `validator` constraints.
pub fn validate<T: Validate>(request: &T) -> Result<(), ApiContractError> {
    request.validate().map_err(ApiContractError::from)
}

/// A deployment without resource files is rejected by the engine; fail
/// it locally instead of uploading an empty form.
pub fn validate_new_deployment(deployment: &NewDeployment) -> Result<(), ApiContractError> {
    if deployment.resources.is_empty() {
        return Err(ApiContractError::EmptyDeployment);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AuthorizationCheckQuery, ResourceType};

    #[test]
    fn check_query_requires_non_empty_fields() {
        let query = AuthorizationCheckQuery {
            permission_name: String::new(),
            permission_value: "READ".into(),
            resource_name: "processDefinition".into(),
            resource_type: ResourceType::ProcessDefinition,
            resource_id: None,
        };

        assert!(validate(&query).is_err());
    }

    #[test]
    fn check_query_with_all_fields_passes() {
        let query = AuthorizationCheckQuery {
            permission_name: "READ".into(),
            permission_value: "2".into(),
            resource_name: "processDefinition".into(),
            resource_type: ResourceType::ProcessDefinition,
            resource_id: Some("invoice".into()),
        };

        assert!(validate(&query).is_ok());
    }

    #[test]
    fn empty_deployment_is_rejected() {
        let err = validate_new_deployment(&NewDeployment::named("empty")).unwrap_err();
        assert!(matches!(err, ApiContractError::EmptyDeployment));
    }

    #[test]
    fn deployment_with_a_resource_passes() {
        let deployment = NewDeployment::named("ok").resource("a.bpmn", b"<definitions/>".to_vec());
        assert!(validate_new_deployment(&deployment).is_ok());
    }
}
