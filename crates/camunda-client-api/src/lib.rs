//! Abstract client surface for the Camunda REST API
//!
//! Consumers program against [`CamundaApi`] so the reqwest-backed
//! client and the in-memory mock are interchangeable.

use async_trait::async_trait;
use camunda_api_contract::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientApiError {
    #[error("server error: {0}")]
    Server(String),
    #[error("unexpected: {0}")]
    Unexpected(String),
}

pub type ClientApiResult<T> = Result<T, ClientApiError>;

/// One method per Camunda REST operation.
///
/// List operations take their query struct by reference; `None` sends
/// the request without query parameters.
#[async_trait]
pub trait CamundaApi: Send + Sync {
    async fn list_authorizations(
        &self,
        query: Option<&AuthorizationQuery>,
    ) -> ClientApiResult<Vec<Authorization>>;

    async fn authorization_count(
        &self,
        query: Option<&AuthorizationQuery>,
    ) -> ClientApiResult<Count>;

    async fn get_authorization(&self, id: &str) -> ClientApiResult<Authorization>;

    async fn check_authorization(
        &self,
        check: &AuthorizationCheckQuery,
    ) -> ClientApiResult<AuthorizationCheckResult>;

    async fn create_authorization(
        &self,
        request: &CreateAuthorizationRequest,
    ) -> ClientApiResult<Authorization>;

    async fn update_authorization(
        &self,
        id: &str,
        request: &UpdateAuthorizationRequest,
    ) -> ClientApiResult<()>;

    async fn delete_authorization(&self, id: &str) -> ClientApiResult<()>;

    async fn list_deployments(
        &self,
        query: Option<&DeploymentQuery>,
    ) -> ClientApiResult<Vec<Deployment>>;

    async fn deployment_count(&self, query: Option<&DeploymentQuery>) -> ClientApiResult<Count>;

    async fn get_deployment(&self, id: &str) -> ClientApiResult<Deployment>;

    async fn create_deployment(&self, deployment: &NewDeployment) -> ClientApiResult<Deployment>;

    async fn redeploy(&self, id: &str, request: &RedeployRequest) -> ClientApiResult<Deployment>;

    async fn deployment_resources(&self, id: &str) -> ClientApiResult<Vec<DeploymentResource>>;

    async fn deployment_resource(
        &self,
        deployment_id: &str,
        resource_id: &str,
    ) -> ClientApiResult<DeploymentResource>;

    async fn delete_deployment(
        &self,
        id: &str,
        query: Option<&DeleteDeploymentQuery>,
    ) -> ClientApiResult<()>;
}
