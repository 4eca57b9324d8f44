//! Main REST API client implementation

use std::time::Duration;

use camunda_api_contract::validation;
use camunda_api_contract::*;
use reqwest::{Client as HttpClient, Method, Response};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;
use url::Url;

use crate::auth::AuthMethod;
use crate::error::{CamundaError, CamundaResult, ErrorDetails};
use crate::multipart;

/// Prefix some engine installations prepend to JSON bodies to defeat
/// JSON hijacking; stripped before parsing.
const JSON_GUARD_PREFIX: &str = ")]}'\n";

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Path the engine serves its REST API under.
const REST_ROOT: &str = "/engine-rest";

/// REST API client for a Camunda process engine
#[derive(Debug, Clone)]
pub struct CamundaClient {
    http_client: HttpClient,
    base_url: Url,
    engine_name: Option<String>,
    auth: AuthMethod,
}

impl CamundaClient {
    /// Create a new client against the server's default process engine
    pub fn new(base_url: Url, auth: AuthMethod) -> CamundaResult<Self> {
        Self::with_timeout(base_url, auth, DEFAULT_TIMEOUT)
    }

    /// Create a new client with a non-default request timeout
    pub fn with_timeout(base_url: Url, auth: AuthMethod, timeout: Duration) -> CamundaResult<Self> {
        let http_client = HttpClient::builder()
            .user_agent(concat!("camunda-rest-client/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url,
            engine_name: None,
            auth,
        })
    }

    /// Create a client from a base URL string
    pub fn from_url(base_url: &str, auth: AuthMethod) -> CamundaResult<Self> {
        let base_url = Url::parse(base_url)?;
        Self::new(base_url, auth)
    }

    /// Scope the client to a named process engine.
    ///
    /// Requests then target `/engine-rest/engine/{name}/...` instead
    /// of the server's default engine.
    pub fn with_engine(mut self, engine_name: impl Into<String>) -> Self {
        self.engine_name = Some(engine_name.into());
        self
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the authentication method
    pub fn auth(&self) -> &AuthMethod {
        &self.auth
    }

    // Authorization resource

    /// List authorizations, optionally filtered and sorted.
    pub async fn list_authorizations(
        &self,
        query: Option<&AuthorizationQuery>,
    ) -> CamundaResult<Vec<Authorization>> {
        self.get("/authorization", query).await
    }

    /// Count authorizations matching a query.
    pub async fn authorization_count(
        &self,
        query: Option<&AuthorizationQuery>,
    ) -> CamundaResult<Count> {
        self.get("/authorization/count", query).await
    }

    /// Fetch a single authorization by id.
    pub async fn get_authorization(&self, id: &str) -> CamundaResult<Authorization> {
        self.get(&format!("/authorization/{id}"), None::<&()>).await
    }

    /// Check whether the authenticated user holds a permission.
    pub async fn check_authorization(
        &self,
        check: &AuthorizationCheckQuery,
    ) -> CamundaResult<AuthorizationCheckResult> {
        validation::validate(check)?;
        self.get("/authorization/check", Some(check)).await
    }

    /// Create an authorization.
    pub async fn create_authorization(
        &self,
        request: &CreateAuthorizationRequest,
    ) -> CamundaResult<Authorization> {
        self.post("/authorization/create", request).await
    }

    /// Update an authorization. The engine returns no body.
    pub async fn update_authorization(
        &self,
        id: &str,
        request: &UpdateAuthorizationRequest,
    ) -> CamundaResult<()> {
        self.send(Method::PUT, &format!("/authorization/{id}"), None::<&()>, Some(request))
            .await
            .map(drop)
    }

    /// Delete an authorization by id.
    pub async fn delete_authorization(&self, id: &str) -> CamundaResult<()> {
        self.delete(&format!("/authorization/{id}"), None::<&()>).await
    }

    // Deployment resource

    /// List deployments, optionally filtered and sorted.
    pub async fn list_deployments(
        &self,
        query: Option<&DeploymentQuery>,
    ) -> CamundaResult<Vec<Deployment>> {
        self.get("/deployment", query).await
    }

    /// Count deployments matching a query.
    pub async fn deployment_count(&self, query: Option<&DeploymentQuery>) -> CamundaResult<Count> {
        self.get("/deployment/count", query).await
    }

    /// Fetch a single deployment by id.
    pub async fn get_deployment(&self, id: &str) -> CamundaResult<Deployment> {
        self.get(&format!("/deployment/{id}"), None::<&()>).await
    }

    /// Upload a new deployment as multipart/form-data.
    pub async fn create_deployment(&self, deployment: &NewDeployment) -> CamundaResult<Deployment> {
        validation::validate_new_deployment(deployment)?;

        let url = self.api_url("/deployment/create", None::<&()>)?;
        debug!(%url, "sending deployment to Camunda endpoint");

        let form = multipart::deployment_form(deployment)?;
        let headers = self.auth.headers().map_err(|e| CamundaError::Auth(e.to_string()))?;
        let response = self
            .http_client
            .post(url)
            .headers(headers)
            .multipart(form)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        Self::parse_entity(response).await
    }

    /// Re-deploy resources of an existing deployment.
    pub async fn redeploy(&self, id: &str, request: &RedeployRequest) -> CamundaResult<Deployment> {
        self.post(&format!("/deployment/{id}/redeploy"), request).await
    }

    /// List the resources of a deployment.
    pub async fn deployment_resources(&self, id: &str) -> CamundaResult<Vec<DeploymentResource>> {
        self.get(&format!("/deployment/{id}/resources"), None::<&()>).await
    }

    /// Fetch a single deployment resource.
    pub async fn deployment_resource(
        &self,
        deployment_id: &str,
        resource_id: &str,
    ) -> CamundaResult<DeploymentResource> {
        self.get(
            &format!("/deployment/{deployment_id}/resources/{resource_id}"),
            None::<&()>,
        )
        .await
    }

    /// Delete a deployment, optionally cascading to process instances.
    pub async fn delete_deployment(
        &self,
        id: &str,
        query: Option<&DeleteDeploymentQuery>,
    ) -> CamundaResult<()> {
        self.delete(&format!("/deployment/{id}"), query).await
    }

    // Private helper methods

    async fn get<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: Option<&Q>,
    ) -> CamundaResult<T> {
        let response = self.send(Method::GET, path, query, None::<&()>).await?;
        Self::parse_entity(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> CamundaResult<T> {
        let response = self.send(Method::POST, path, None::<&()>, Some(body)).await?;
        Self::parse_entity(response).await
    }

    async fn delete<Q: Serialize>(&self, path: &str, query: Option<&Q>) -> CamundaResult<()> {
        self.send(Method::DELETE, path, query, None::<&()>).await.map(drop)
    }

    /// Dispatch one request and translate non-2xx statuses into typed
    /// errors. Response body parsing is left to the caller.
    async fn send<Q: Serialize, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> CamundaResult<Response> {
        let url = self.api_url(path, query)?;
        debug!(%url, "sending request to Camunda endpoint");

        let mut request = self.http_client.request(method, url);

        let headers = self.auth.headers().map_err(|e| CamundaError::Auth(e.to_string()))?;
        request = request.headers(headers);

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        Self::check_status(response).await
    }

    /// Resolve an API path against the base URL, keeping any path
    /// component the base URL already carries and inserting the named
    /// engine prefix when the client is scoped.
    fn api_url<Q: Serialize>(&self, path: &str, query: Option<&Q>) -> CamundaResult<Url> {
        let mut full = String::from(self.base_url.as_str().trim_end_matches('/'));
        full.push_str(REST_ROOT);
        if let Some(engine_name) = &self.engine_name {
            full.push_str("/engine/");
            full.push_str(engine_name);
        }
        full.push_str(path);

        let mut url = Url::parse(&full)?;
        if let Some(query) = query {
            Self::apply_query(&mut url, query)?;
        }
        Ok(url)
    }

    /// Serialize a parameters struct into the URL query string. Unset
    /// fields are already skipped by serde; enum values arrive as
    /// their wire representation (strings or integer codes).
    fn apply_query<Q: Serialize>(url: &mut Url, query: &Q) -> CamundaResult<()> {
        let value = serde_json::to_value(query)?;
        if let serde_json::Value::Object(map) = value {
            let mut pairs = url.query_pairs_mut();
            for (key, val) in map {
                let val = match val {
                    serde_json::Value::Null => continue,
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                pairs.append_pair(&key, &val);
            }
        }
        Ok(())
    }

    async fn check_status(response: Response) -> CamundaResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;
        let details: ErrorDetails =
            serde_json::from_str(strip_json_guard(&text)).unwrap_or_default();

        match status {
            reqwest::StatusCode::BAD_REQUEST => Err(CamundaError::BadRequest(details)),
            reqwest::StatusCode::NOT_FOUND => Err(CamundaError::NotFound(details)),
            _ => Err(CamundaError::Server { status, details }),
        }
    }

    /// Two-stage parse mirroring the error taxonomy: a body that is
    /// not JSON at all is malformed, JSON that does not match the
    /// entity shape is invalid.
    async fn parse_entity<T: DeserializeOwned>(response: Response) -> CamundaResult<T> {
        let text = response.text().await?;
        let text = strip_json_guard(&text);

        let value: serde_json::Value = serde_json::from_str(text)
            .map_err(|_| CamundaError::MalformedEntity(text.to_string()))?;
        serde_json::from_value(value).map_err(CamundaError::InvalidEntity)
    }
}

fn strip_json_guard(text: &str) -> &str {
    text.strip_prefix(JSON_GUARD_PREFIX).unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> CamundaClient {
        CamundaClient::from_url("http://localhost:8080", AuthMethod::None).unwrap()
    }

    #[test]
    fn client_creation() {
        let client = test_client();
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/");
    }

    #[test]
    fn api_url_targets_the_rest_root() {
        let url = test_client().api_url("/authorization", None::<&()>).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/engine-rest/authorization");
    }

    #[test]
    fn api_url_keeps_base_path_components() {
        let client = CamundaClient::from_url("http://localhost:8080/camunda", AuthMethod::None).unwrap();
        let url = client.api_url("/deployment", None::<&()>).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/camunda/engine-rest/deployment");
    }

    #[test]
    fn api_url_inserts_named_engine_prefix() {
        let client = test_client().with_engine("someEngine");
        let url = client.api_url("/deployment/count", None::<&()>).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/engine-rest/engine/someEngine/deployment/count"
        );
    }

    #[test]
    fn query_params_use_wire_representations() {
        let query = AuthorizationQuery {
            resource_type: Some(ResourceType::ProcessDefinition),
            sort_by: Some(AuthorizationSortBy::ResourceType),
            sort_order: Some(SortOrder::Asc),
            max_results: Some(10),
            ..AuthorizationQuery::default()
        };

        let url = test_client().api_url("/authorization", Some(&query)).unwrap();
        let query_string = url.query().unwrap();
        assert!(query_string.contains("resourceType=6"));
        assert!(query_string.contains("sortBy=resourceType"));
        assert!(query_string.contains("sortOrder=asc"));
        assert!(query_string.contains("maxResults=10"));
    }

    #[test]
    fn json_guard_prefix_is_stripped() {
        assert_eq!(strip_json_guard(")]}'\n{\"count\": 1}"), "{\"count\": 1}");
        assert_eq!(strip_json_guard("{\"count\": 1}"), "{\"count\": 1}");
    }
}
