//! Wire types for the Camunda REST API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ApiContractError;

/// Authorization kinds, integer coded on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum AuthorizationType {
    Global = 0,
    Grant = 1,
    Revoke = 2,
}

impl From<AuthorizationType> for i32 {
    fn from(value: AuthorizationType) -> Self {
        value as i32
    }
}

impl TryFrom<i32> for AuthorizationType {
    type Error = ApiContractError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Global),
            1 => Ok(Self::Grant),
            2 => Ok(Self::Revoke),
            _ => Err(ApiContractError::UnknownCode {
                kind: "authorization type",
                value,
            }),
        }
    }
}

/// Resource kinds understood by the engine's authorization service,
/// integer coded on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum ResourceType {
    Application = 0,
    User = 1,
    Group = 2,
    GroupMembership = 3,
    Authorization = 4,
    Filter = 5,
    ProcessDefinition = 6,
    Task = 7,
    ProcessInstance = 8,
    Deployment = 9,
    DecisionDefinition = 10,
    Tenant = 11,
    TenantMembership = 12,
    Batch = 13,
    DecisionRequirementsDefinition = 14,
}

impl From<ResourceType> for i32 {
    fn from(value: ResourceType) -> Self {
        value as i32
    }
}

impl TryFrom<i32> for ResourceType {
    type Error = ApiContractError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Application),
            1 => Ok(Self::User),
            2 => Ok(Self::Group),
            3 => Ok(Self::GroupMembership),
            4 => Ok(Self::Authorization),
            5 => Ok(Self::Filter),
            6 => Ok(Self::ProcessDefinition),
            7 => Ok(Self::Task),
            8 => Ok(Self::ProcessInstance),
            9 => Ok(Self::Deployment),
            10 => Ok(Self::DecisionDefinition),
            11 => Ok(Self::Tenant),
            12 => Ok(Self::TenantMembership),
            13 => Ok(Self::Batch),
            14 => Ok(Self::DecisionRequirementsDefinition),
            _ => Err(ApiContractError::UnknownCode {
                kind: "resource type",
                value,
            }),
        }
    }
}

/// Sorting order for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Sortable columns for authorization queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthorizationSortBy {
    ResourceType,
    ResourceId,
}

/// Sortable columns for deployment queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeploymentSortBy {
    Id,
    Name,
    DeploymentTime,
    TenantId,
}

/// An authorization as returned by the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Authorization {
    pub id: String,
    #[serde(rename = "type")]
    pub authorization_type: AuthorizationType,
    pub permissions: Vec<String>,
    pub user_id: Option<String>,
    pub group_id: Option<String>,
    pub resource_type: ResourceType,
    pub resource_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,
}

/// Result of an authorization check for the authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationCheckResult {
    pub permission_name: String,
    pub resource_name: String,
    pub resource_id: Option<String>,
    pub is_authorized: bool,
}

/// A deployment as returned by the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub id: Option<String>,
    pub name: Option<String>,
    pub source: Option<String>,
    pub deployment_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,
}

/// A single resource within a deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentResource {
    pub id: Option<String>,
    pub name: String,
    pub deployment_id: Option<String>,
}

/// Shared shape of every `/count` endpoint response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Count {
    pub count: u64,
}

/// Query parameters for listing and counting authorizations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub authorization_type: Option<AuthorizationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<AuthorizationSortBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_result: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
}

/// Query parameters for GET /authorization/check
///
/// Unlike the list queries, every field except `resource_id` is
/// required by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationCheckQuery {
    #[validate(length(min = 1, message = "permissionName cannot be empty"))]
    pub permission_name: String,
    #[validate(length(min = 1, message = "permissionValue cannot be empty"))]
    pub permission_value: String,
    #[validate(length(min = 1, message = "resourceName cannot be empty"))]
    pub resource_name: String,
    pub resource_type: ResourceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

/// Request body for POST /authorization/create
///
/// Nullable identifier fields are serialized as explicit nulls; the
/// engine expects the keys to be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthorizationRequest {
    #[serde(rename = "type")]
    pub authorization_type: AuthorizationType,
    pub permissions: Vec<String>,
    pub user_id: Option<String>,
    pub group_id: Option<String>,
    pub resource_type: ResourceType,
    pub resource_id: Option<String>,
}

/// Request body for PUT /authorization/{id}
///
/// Same shape as the create request except that the engine rejects a
/// `type` key on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAuthorizationRequest {
    pub permissions: Vec<String>,
    pub user_id: Option<String>,
    pub group_id: Option<String>,
    pub resource_type: ResourceType,
    pub resource_id: Option<String>,
}

/// Query parameters for listing and counting deployments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_like: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub without_source: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub without_tenant_id: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_deployments_without_tenant_id: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<DeploymentSortBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_result: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
}

/// Request body for POST /deployment/{id}/redeploy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeployRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Query parameters for DELETE /deployment/{id}
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDeploymentQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cascade: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_custom_listeners: Option<bool>,
}

/// A resource file attached to a new deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentResourceFile {
    pub name: String,
    pub data: Vec<u8>,
}

/// Description of a new deployment, sent as multipart/form-data to
/// POST /deployment/create
///
/// The REST client turns this into a form where each resource file is
/// an `application/octet-stream` part and each set option a
/// `text/plain` part under its dashed form name (`deployment-name`,
/// `enable-duplicate-filtering`, `deploy-changed-only`,
/// `deployment-source`, `tenant-id`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewDeployment {
    pub name: Option<String>,
    pub source: Option<String>,
    pub tenant_id: Option<String>,
    pub enable_duplicate_filtering: Option<bool>,
    pub deploy_changed_only: Option<bool>,
    pub resources: Vec<DeploymentResourceFile>,
}

impl NewDeployment {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Attach a resource file to the deployment.
    pub fn resource(mut self, name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.resources.push(DeploymentResourceFile {
            name: name.into(),
            data: data.into(),
        });
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_tenant_id(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }
}
