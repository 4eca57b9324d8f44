//! In-memory Camunda client with canned data for consumer tests

use async_trait::async_trait;
use camunda_api_contract::*;
use camunda_client_api::{CamundaApi, ClientApiError, ClientApiResult};
use chrono::{TimeZone, Utc};

/// A `CamundaApi` implementation that serves fixed data without any
/// network traffic. List and get operations return the canned
/// entities; mutations echo plausible results.
#[derive(Debug, Default)]
pub struct MockClient;

impl MockClient {
    pub fn new() -> Self {
        Self
    }

    fn canned_authorization(id: &str) -> Authorization {
        Authorization {
            id: id.to_string(),
            authorization_type: AuthorizationType::Grant,
            permissions: vec!["CREATE".into(), "READ".into()],
            user_id: Some("demo".into()),
            group_id: None,
            resource_type: ResourceType::ProcessDefinition,
            resource_id: Some("*".into()),
            links: None,
        }
    }

    fn canned_deployment(id: &str) -> Deployment {
        Deployment {
            id: Some(id.to_string()),
            name: Some("demo-deployment".into()),
            source: Some("mock".into()),
            deployment_time: Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap(),
            tenant_id: None,
            links: None,
        }
    }
}

#[async_trait]
impl CamundaApi for MockClient {
    async fn list_authorizations(
        &self,
        _query: Option<&AuthorizationQuery>,
    ) -> ClientApiResult<Vec<Authorization>> {
        Ok(vec![
            Self::canned_authorization("auth1"),
            Self::canned_authorization("auth2"),
        ])
    }

    async fn authorization_count(
        &self,
        _query: Option<&AuthorizationQuery>,
    ) -> ClientApiResult<Count> {
        Ok(Count { count: 2 })
    }

    async fn get_authorization(&self, id: &str) -> ClientApiResult<Authorization> {
        Ok(Self::canned_authorization(id))
    }

    async fn check_authorization(
        &self,
        check: &AuthorizationCheckQuery,
    ) -> ClientApiResult<AuthorizationCheckResult> {
        Ok(AuthorizationCheckResult {
            permission_name: check.permission_name.clone(),
            resource_name: check.resource_name.clone(),
            resource_id: check.resource_id.clone(),
            is_authorized: true,
        })
    }

    async fn create_authorization(
        &self,
        request: &CreateAuthorizationRequest,
    ) -> ClientApiResult<Authorization> {
        Ok(Authorization {
            id: "createdAuthorization".into(),
            authorization_type: request.authorization_type,
            permissions: request.permissions.clone(),
            user_id: request.user_id.clone(),
            group_id: request.group_id.clone(),
            resource_type: request.resource_type,
            resource_id: request.resource_id.clone(),
            links: None,
        })
    }

    async fn update_authorization(
        &self,
        _id: &str,
        _request: &UpdateAuthorizationRequest,
    ) -> ClientApiResult<()> {
        Ok(())
    }

    async fn delete_authorization(&self, _id: &str) -> ClientApiResult<()> {
        Ok(())
    }

    async fn list_deployments(
        &self,
        _query: Option<&DeploymentQuery>,
    ) -> ClientApiResult<Vec<Deployment>> {
        Ok(vec![
            Self::canned_deployment("dep1"),
            Self::canned_deployment("dep2"),
        ])
    }

    async fn deployment_count(&self, _query: Option<&DeploymentQuery>) -> ClientApiResult<Count> {
        Ok(Count { count: 2 })
    }

    async fn get_deployment(&self, id: &str) -> ClientApiResult<Deployment> {
        Ok(Self::canned_deployment(id))
    }

    async fn create_deployment(&self, deployment: &NewDeployment) -> ClientApiResult<Deployment> {
        if deployment.resources.is_empty() {
            return Err(ClientApiError::Unexpected(
                "a deployment needs at least one resource file".into(),
            ));
        }
        let mut created = Self::canned_deployment("createdDeployment");
        created.name.clone_from(&deployment.name);
        created.source.clone_from(&deployment.source);
        created.tenant_id.clone_from(&deployment.tenant_id);
        Ok(created)
    }

    async fn redeploy(&self, id: &str, _request: &RedeployRequest) -> ClientApiResult<Deployment> {
        Ok(Self::canned_deployment(id))
    }

    async fn deployment_resources(&self, id: &str) -> ClientApiResult<Vec<DeploymentResource>> {
        Ok(vec![DeploymentResource {
            id: Some("res1".into()),
            name: "invoice.bpmn".into(),
            deployment_id: Some(id.to_string()),
        }])
    }

    async fn deployment_resource(
        &self,
        deployment_id: &str,
        resource_id: &str,
    ) -> ClientApiResult<DeploymentResource> {
        Ok(DeploymentResource {
            id: Some(resource_id.to_string()),
            name: "invoice.bpmn".into(),
            deployment_id: Some(deployment_id.to_string()),
        })
    }

    async fn delete_deployment(
        &self,
        _id: &str,
        _query: Option<&DeleteDeploymentQuery>,
    ) -> ClientApiResult<()> {
        Ok(())
    }
}
