//! REST API client for the Camunda process engine
//!
//! This crate provides a typed HTTP client for the engine's REST API.
//! It covers authentication with credential resolution, request
//! dispatch with typed error translation, and JSON/multipart entity
//! encoding for the authorization and deployment resources.

pub mod auth;
pub mod client;
pub mod error;
pub mod multipart;

pub use auth::*;
pub use client::*;
pub use error::*;

use async_trait::async_trait;
use camunda_api_contract::*;
use camunda_client_api::{CamundaApi, ClientApiError, ClientApiResult};

fn to_api_error(err: error::CamundaError) -> ClientApiError {
    ClientApiError::Server(err.to_string())
}

#[async_trait]
impl CamundaApi for client::CamundaClient {
    async fn list_authorizations(
        &self,
        query: Option<&AuthorizationQuery>,
    ) -> ClientApiResult<Vec<Authorization>> {
        self.list_authorizations(query).await.map_err(to_api_error)
    }

    async fn authorization_count(
        &self,
        query: Option<&AuthorizationQuery>,
    ) -> ClientApiResult<Count> {
        self.authorization_count(query).await.map_err(to_api_error)
    }

    async fn get_authorization(&self, id: &str) -> ClientApiResult<Authorization> {
        self.get_authorization(id).await.map_err(to_api_error)
    }

    async fn check_authorization(
        &self,
        check: &AuthorizationCheckQuery,
    ) -> ClientApiResult<AuthorizationCheckResult> {
        self.check_authorization(check).await.map_err(to_api_error)
    }

    async fn create_authorization(
        &self,
        request: &CreateAuthorizationRequest,
    ) -> ClientApiResult<Authorization> {
        self.create_authorization(request).await.map_err(to_api_error)
    }

    async fn update_authorization(
        &self,
        id: &str,
        request: &UpdateAuthorizationRequest,
    ) -> ClientApiResult<()> {
        self.update_authorization(id, request).await.map_err(to_api_error)
    }

    async fn delete_authorization(&self, id: &str) -> ClientApiResult<()> {
        self.delete_authorization(id).await.map_err(to_api_error)
    }

    async fn list_deployments(
        &self,
        query: Option<&DeploymentQuery>,
    ) -> ClientApiResult<Vec<Deployment>> {
        self.list_deployments(query).await.map_err(to_api_error)
    }

    async fn deployment_count(&self, query: Option<&DeploymentQuery>) -> ClientApiResult<Count> {
        self.deployment_count(query).await.map_err(to_api_error)
    }

    async fn get_deployment(&self, id: &str) -> ClientApiResult<Deployment> {
        self.get_deployment(id).await.map_err(to_api_error)
    }

    async fn create_deployment(&self, deployment: &NewDeployment) -> ClientApiResult<Deployment> {
        self.create_deployment(deployment).await.map_err(to_api_error)
    }

    async fn redeploy(&self, id: &str, request: &RedeployRequest) -> ClientApiResult<Deployment> {
        self.redeploy(id, request).await.map_err(to_api_error)
    }

    async fn deployment_resources(&self, id: &str) -> ClientApiResult<Vec<DeploymentResource>> {
        self.deployment_resources(id).await.map_err(to_api_error)
    }

    async fn deployment_resource(
        &self,
        deployment_id: &str,
        resource_id: &str,
    ) -> ClientApiResult<DeploymentResource> {
        self.deployment_resource(deployment_id, resource_id).await.map_err(to_api_error)
    }

    async fn delete_deployment(
        &self,
        id: &str,
        query: Option<&DeleteDeploymentQuery>,
    ) -> ClientApiResult<()> {
        self.delete_deployment(id, query).await.map_err(to_api_error)
    }
}
