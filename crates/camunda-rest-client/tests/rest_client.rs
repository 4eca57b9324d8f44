//! Round-trip tests against a local mock engine.

use camunda_api_contract::*;
use camunda_rest_client::{AuthMethod, CamundaClient, CamundaError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> CamundaClient {
    CamundaClient::from_url(&server.uri(), AuthMethod::None).unwrap()
}

#[tokio::test]
async fn lists_authorizations_with_query_and_basic_auth() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/engine-rest/authorization"))
        .and(query_param("resourceType", "6"))
        .and(query_param("sortOrder", "desc"))
        .and(header("authorization", "Basic ZGVtbzpkZW1v"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "anAuthorizationId",
            "type": 1,
            "permissions": ["READ"],
            "userId": "jonny",
            "groupId": null,
            "resourceType": 6,
            "resourceId": "*"
        }])))
        .mount(&server)
        .await;

    let client = CamundaClient::from_url(&server.uri(), AuthMethod::basic("demo", "demo")).unwrap();
    let query = AuthorizationQuery {
        resource_type: Some(ResourceType::ProcessDefinition),
        sort_order: Some(SortOrder::Desc),
        ..AuthorizationQuery::default()
    };

    let authorizations = client.list_authorizations(Some(&query)).await.unwrap();
    assert_eq!(authorizations.len(), 1);
    assert_eq!(authorizations[0].authorization_type, AuthorizationType::Grant);
    assert_eq!(authorizations[0].user_id.as_deref(), Some("jonny"));
}

#[tokio::test]
async fn missing_authorization_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/engine-rest/authorization/unknown"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "type": "InvalidRequestException",
            "message": "Authorization with id unknown does not exist"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).get_authorization("unknown").await.unwrap_err();
    match err {
        CamundaError::NotFound(details) => {
            assert_eq!(details.error_type.as_deref(), Some("InvalidRequestException"));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn create_authorization_posts_the_wire_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/engine-rest/authorization/create"))
        .and(body_json(json!({
            "type": 1,
            "permissions": ["CREATE", "READ"],
            "userId": "jonny",
            "groupId": null,
            "resourceType": 9,
            "resourceId": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "newId",
            "type": 1,
            "permissions": ["CREATE", "READ"],
            "userId": "jonny",
            "groupId": null,
            "resourceType": 9,
            "resourceId": null
        })))
        .mount(&server)
        .await;

    let request = CreateAuthorizationRequest {
        authorization_type: AuthorizationType::Grant,
        permissions: vec!["CREATE".into(), "READ".into()],
        user_id: Some("jonny".into()),
        group_id: None,
        resource_type: ResourceType::Deployment,
        resource_id: None,
    };

    let created = client_for(&server).create_authorization(&request).await.unwrap();
    assert_eq!(created.id, "newId");
}

#[tokio::test]
async fn update_authorization_tolerates_an_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/engine-rest/authorization/anId"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let request = UpdateAuthorizationRequest {
        permissions: vec!["READ".into()],
        user_id: Some("jonny".into()),
        group_id: None,
        resource_type: ResourceType::ProcessDefinition,
        resource_id: Some("*".into()),
    };

    client_for(&server).update_authorization("anId", &request).await.unwrap();
}

#[tokio::test]
async fn invalid_check_query_fails_before_dispatch() {
    let server = MockServer::start().await;
    // No mock mounted: a dispatched request would fail loudly.

    let check = AuthorizationCheckQuery {
        permission_name: String::new(),
        permission_value: "2".into(),
        resource_name: "processDefinition".into(),
        resource_type: ResourceType::ProcessDefinition,
        resource_id: None,
    };

    let err = client_for(&server).check_authorization(&check).await.unwrap_err();
    assert!(matches!(err, CamundaError::Contract(_)));
}

#[tokio::test]
async fn deployment_count_strips_the_json_guard_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/engine-rest/deployment/count"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(")]}'\n{\"count\": 3}", "application/json"),
        )
        .mount(&server)
        .await;

    let count = client_for(&server).deployment_count(None).await.unwrap();
    assert_eq!(count.count, 3);
}

#[tokio::test]
async fn named_engine_prefixes_the_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/engine-rest/engine/anotherEngine/deployment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server).with_engine("anotherEngine");
    let deployments = client.list_deployments(None).await.unwrap();
    assert!(deployments.is_empty());
}

#[tokio::test]
async fn delete_deployment_sends_cascade_flags() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/engine-rest/deployment/dep1"))
        .and(query_param("cascade", "true"))
        .and(query_param("skipCustomListeners", "true"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let query = DeleteDeploymentQuery {
        cascade: Some(true),
        skip_custom_listeners: Some(true),
    };
    client_for(&server).delete_deployment("dep1", Some(&query)).await.unwrap();
}

#[tokio::test]
async fn create_deployment_uploads_multipart_and_parses_the_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/engine-rest/deployment/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "aDeploymentId",
            "name": "invoice",
            "source": "process application",
            "deploymentTime": "2013-01-23T13:59:43.000Z",
            "tenantId": null
        })))
        .mount(&server)
        .await;

    let deployment = NewDeployment::named("invoice")
        .with_source("process application")
        .resource("invoice.bpmn", b"<definitions/>".to_vec());

    let created = client_for(&server).create_deployment(&deployment).await.unwrap();
    assert_eq!(created.id.as_deref(), Some("aDeploymentId"));
    assert_eq!(created.name.as_deref(), Some("invoice"));
}

#[tokio::test]
async fn bad_request_carries_the_engine_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/engine-rest/deployment/dep1/redeploy"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "type": "NotFoundException",
            "message": "Deployment resources do not exist"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .redeploy("dep1", &RedeployRequest::default())
        .await
        .unwrap_err();
    match err {
        CamundaError::BadRequest(details) => {
            assert_eq!(details.message.as_deref(), Some("Deployment resources do not exist"));
        }
        other => panic!("expected BadRequest, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/engine-rest/deployment/dep1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>proxy error</html>", "text/html"))
        .mount(&server)
        .await;

    let err = client_for(&server).get_deployment("dep1").await.unwrap_err();
    assert!(matches!(err, CamundaError::MalformedEntity(_)));
}

#[tokio::test]
async fn mismatched_entity_shape_is_invalid() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/engine-rest/deployment/dep1/resources"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": "object"})))
        .mount(&server)
        .await;

    let err = client_for(&server).deployment_resources("dep1").await.unwrap_err();
    assert!(matches!(err, CamundaError::InvalidEntity(_)));
}
