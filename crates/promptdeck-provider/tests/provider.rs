//! Integration tests for the provider against a mock prompt service.
//!
//! Wiring is explicit: every test constructs its own `Harness` carrying
//! the mock server and the pieces under test. No shared fixtures.

use std::sync::Arc;

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use uuid::Uuid;

use promptdeck::domain::{ProviderError, Visibility};
use promptdeck_provider::{
    PromptDataSource, PromptLookup, PromptResource, PromptResourceModel, PromptServiceClient,
    PromptVersionsDataSource, ProviderConfig, ReadOutcome,
};

struct Harness {
    server: ServerGuard,
    api: Arc<PromptServiceClient>,
}

impl Harness {
    async fn new() -> Self {
        let server = Server::new_async().await;
        let config = ProviderConfig::new(server.url(), "test-api-key");
        let api = Arc::new(PromptServiceClient::new(&config));
        Self { server, api }
    }

    fn resource(&self) -> PromptResource {
        PromptResource::new(self.api.clone())
    }

    fn prompt_data_source(&self) -> PromptDataSource {
        PromptDataSource::new(self.api.clone())
    }

    fn versions_data_source(&self) -> PromptVersionsDataSource {
        PromptVersionsDataSource::new(self.api.clone())
    }
}

fn prompt_body(id: Uuid, name: &str, content: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "content": content,
        "created_at": "2025-01-15T09:30:00Z",
        "updated_at": "2025-01-15T09:30:00Z"
    })
}

// ============================================
// Resource: Create
// ============================================

#[tokio::test]
async fn create_stores_server_assigned_id() {
    let mut harness = Harness::new().await;
    let id = Uuid::new_v4();

    let mock = harness
        .server
        .mock("POST", "/api/prompts")
        .match_header("authorization", "Bearer test-api-key")
        .match_body(Matcher::PartialJson(json!({
            "name": "test-prompt",
            "content": "Test content",
            "description": "A test prompt"
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": id,
                "name": "test-prompt",
                "description": "A test prompt",
                "content": "Test content",
                "created_at": "2025-01-15T09:30:00Z",
                "updated_at": "2025-01-15T09:30:00Z"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let config = PromptResourceModel {
        name: "test-prompt".to_string(),
        content: "Test content".to_string(),
        description: Some("A test prompt".to_string()),
        ..Default::default()
    };

    let state = harness.resource().create(&config).await.unwrap();
    mock.assert_async().await;

    assert_eq!(state.id, Some(id));
    assert_eq!(state.name, "test-prompt");
    assert_eq!(state.content, "Test content");
    assert_eq!(state.description.as_deref(), Some("A test prompt"));
    assert_eq!(state.version_id, None);
}

#[tokio::test]
async fn create_rejects_empty_required_fields() {
    let harness = Harness::new().await;
    let resource = harness.resource();

    let no_name = PromptResourceModel {
        content: "Test content".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        resource.create(&no_name).await.unwrap_err(),
        ProviderError::InvalidConfiguration(_)
    ));

    let no_content = PromptResourceModel {
        name: "test-prompt".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        resource.create(&no_content).await.unwrap_err(),
        ProviderError::InvalidConfiguration(_)
    ));
}

#[tokio::test]
async fn create_surfaces_unexpected_status() {
    let mut harness = Harness::new().await;

    harness
        .server
        .mock("POST", "/api/prompts")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(prompt_body(Uuid::new_v4(), "test-prompt", "Test content").to_string())
        .create_async()
        .await;

    let config = PromptResourceModel {
        name: "test-prompt".to_string(),
        content: "Test content".to_string(),
        ..Default::default()
    };

    let err = harness.resource().create(&config).await.unwrap_err();
    assert!(matches!(
        err,
        ProviderError::UnexpectedStatus {
            expected: 201,
            got: 200,
            ..
        }
    ));
}

// ============================================
// Resource: Read
// ============================================

#[tokio::test]
async fn read_refreshes_all_fields() {
    let mut harness = Harness::new().await;
    let id = Uuid::new_v4();

    harness
        .server
        .mock("GET", format!("/api/prompts/{}", id).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": id,
                "name": "renamed-remotely",
                "description": "Drifted description",
                "content": "Drifted content",
                "tags": ["drift"],
                "visibility": "public",
                "created_at": "2025-01-15T09:30:00Z",
                "updated_at": "2025-02-01T12:00:00Z"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let state = PromptResourceModel {
        id: Some(id),
        name: "test-prompt".to_string(),
        content: "Test content".to_string(),
        ..Default::default()
    };

    let outcome = harness.resource().read(&state).await.unwrap();
    let ReadOutcome::Current(refreshed) = outcome else {
        panic!("Expected the prompt to still exist");
    };

    assert_eq!(refreshed.name, "renamed-remotely");
    assert_eq!(refreshed.content, "Drifted content");
    assert_eq!(refreshed.description.as_deref(), Some("Drifted description"));
    assert_eq!(refreshed.tags, vec!["drift"]);
    assert_eq!(refreshed.visibility, Some(Visibility::Public));
}

#[tokio::test]
async fn read_missing_prompt_signals_removed() {
    let mut harness = Harness::new().await;
    let id = Uuid::new_v4();

    harness
        .server
        .mock("GET", format!("/api/prompts/{}", id).as_str())
        .with_status(404)
        .create_async()
        .await;

    let state = PromptResourceModel {
        id: Some(id),
        name: "test-prompt".to_string(),
        content: "Test content".to_string(),
        ..Default::default()
    };

    let outcome = harness.resource().read(&state).await.unwrap();
    assert!(matches!(outcome, ReadOutcome::Removed));
}

#[tokio::test]
async fn read_surfaces_server_errors() {
    let mut harness = Harness::new().await;
    let id = Uuid::new_v4();

    harness
        .server
        .mock("GET", format!("/api/prompts/{}", id).as_str())
        .with_status(500)
        .create_async()
        .await;

    let state = PromptResourceModel {
        id: Some(id),
        name: "test-prompt".to_string(),
        content: "Test content".to_string(),
        ..Default::default()
    };

    let err = harness.resource().read(&state).await.unwrap_err();
    assert!(matches!(
        err,
        ProviderError::UnexpectedStatus { got: 500, .. }
    ));
}

// ============================================
// Resource: Update
// ============================================

#[tokio::test]
async fn update_sends_configured_fields() {
    let mut harness = Harness::new().await;
    let id = Uuid::new_v4();

    let mock = harness
        .server
        .mock("PATCH", format!("/api/prompts/{}", id).as_str())
        .match_body(Matcher::PartialJson(json!({
            "name": "updated-prompt",
            "content": "Test content",
            "description": "Updated description"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(prompt_body(id, "updated-prompt", "Test content").to_string())
        .create_async()
        .await;

    let plan = PromptResourceModel {
        id: Some(id),
        name: "updated-prompt".to_string(),
        content: "Test content".to_string(),
        description: Some("Updated description".to_string()),
        ..Default::default()
    };

    let state = harness.resource().update(&plan).await.unwrap();
    mock.assert_async().await;

    assert_eq!(state.id, Some(id));
    assert_eq!(state.name, "updated-prompt");
    assert_eq!(state.description.as_deref(), Some("Updated description"));
}

#[tokio::test]
async fn update_with_version_id_rolls_back_instead() {
    let mut harness = Harness::new().await;
    let id = Uuid::new_v4();
    let version_id = Uuid::new_v4();

    let rollback = harness
        .server
        .mock("POST", format!("/api/prompts/{}/rollback", id).as_str())
        .match_body(Matcher::Json(json!({ "version_id": version_id })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(prompt_body(id, "test-prompt", "Reverted content").to_string())
        .create_async()
        .await;

    // The field-update endpoint must never be hit when rolling back.
    let update = harness
        .server
        .mock("PATCH", format!("/api/prompts/{}", id).as_str())
        .expect(0)
        .create_async()
        .await;

    let refresh = harness
        .server
        .mock("GET", format!("/api/prompts/{}", id).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(prompt_body(id, "test-prompt", "Reverted content").to_string())
        .create_async()
        .await;

    let plan = PromptResourceModel {
        id: Some(id),
        name: "test-prompt".to_string(),
        content: "Edited content that must lose to the rollback".to_string(),
        version_id: Some(version_id),
        ..Default::default()
    };

    let state = harness.resource().update(&plan).await.unwrap();
    rollback.assert_async().await;
    update.assert_async().await;
    refresh.assert_async().await;

    assert_eq!(state.content, "Reverted content");
    assert_eq!(state.version_id, Some(version_id));
}

// ============================================
// Resource: Delete
// ============================================

#[tokio::test]
async fn delete_succeeds_on_no_content() {
    let mut harness = Harness::new().await;
    let id = Uuid::new_v4();

    let mock = harness
        .server
        .mock("DELETE", format!("/api/prompts/{}", id).as_str())
        .with_status(204)
        .create_async()
        .await;

    let state = PromptResourceModel {
        id: Some(id),
        name: "test-prompt".to_string(),
        content: "Test content".to_string(),
        ..Default::default()
    };

    harness.resource().delete(&state).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn delete_is_idempotent_for_missing_prompts() {
    let mut harness = Harness::new().await;
    let id = Uuid::new_v4();

    harness
        .server
        .mock("DELETE", format!("/api/prompts/{}", id).as_str())
        .with_status(404)
        .create_async()
        .await;

    let state = PromptResourceModel {
        id: Some(id),
        name: "test-prompt".to_string(),
        content: "Test content".to_string(),
        ..Default::default()
    };

    harness.resource().delete(&state).await.unwrap();
}

#[tokio::test]
async fn delete_surfaces_unexpected_status() {
    let mut harness = Harness::new().await;
    let id = Uuid::new_v4();

    harness
        .server
        .mock("DELETE", format!("/api/prompts/{}", id).as_str())
        .with_status(500)
        .create_async()
        .await;

    let state = PromptResourceModel {
        id: Some(id),
        name: "test-prompt".to_string(),
        content: "Test content".to_string(),
        ..Default::default()
    };

    let err = harness.resource().delete(&state).await.unwrap_err();
    assert!(matches!(
        err,
        ProviderError::UnexpectedStatus {
            expected: 204,
            got: 500,
            ..
        }
    ));
}

// ============================================
// Prompt data source
// ============================================

#[tokio::test]
async fn data_source_finds_prompt_by_id() {
    let mut harness = Harness::new().await;
    let id = Uuid::new_v4();

    harness
        .server
        .mock("GET", format!("/api/prompts/{}", id).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": id,
                "name": "greeting",
                "description": "Says hello",
                "content": "Hello!",
                "tags": ["demo"],
                "visibility": "public",
                "created_at": "2025-01-15T09:30:00Z",
                "updated_at": "2025-01-15T09:30:00Z"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let model = harness
        .prompt_data_source()
        .read(PromptLookup::ById(id))
        .await
        .unwrap();

    assert_eq!(model.id, id);
    assert_eq!(model.name, "greeting");
    assert_eq!(model.description.as_deref(), Some("Says hello"));
    assert_eq!(model.content, "Hello!");
    assert_eq!(model.tags, vec!["demo"]);
    assert_eq!(model.visibility, Visibility::Public);
}

#[tokio::test]
async fn data_source_by_id_misses_are_not_found() {
    let mut harness = Harness::new().await;
    let id = Uuid::new_v4();

    harness
        .server
        .mock("GET", format!("/api/prompts/{}", id).as_str())
        .with_status(404)
        .create_async()
        .await;

    let err = harness
        .prompt_data_source()
        .read(PromptLookup::ById(id))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::NotFound(_)));
}

#[tokio::test]
async fn data_source_finds_first_exact_name_match() {
    let mut harness = Harness::new().await;
    let wanted = Uuid::new_v4();

    harness
        .server
        .mock("GET", "/api/prompts")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                prompt_body(Uuid::new_v4(), "other", "Other content"),
                prompt_body(wanted, "greeting", "Hello!"),
                prompt_body(Uuid::new_v4(), "greeting-2", "Near miss"),
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let model = harness
        .prompt_data_source()
        .read(PromptLookup::ByName("greeting".to_string()))
        .await
        .unwrap();

    assert_eq!(model.id, wanted);
    assert_eq!(model.content, "Hello!");
}

#[tokio::test]
async fn data_source_by_name_misses_are_not_found() {
    let mut harness = Harness::new().await;

    harness
        .server
        .mock("GET", "/api/prompts")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([prompt_body(Uuid::new_v4(), "other", "Other content")]).to_string())
        .create_async()
        .await;

    let err = harness
        .prompt_data_source()
        .read(PromptLookup::ByName("greeting".to_string()))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::NotFound(_)));
}

#[tokio::test]
async fn lookup_configuration_errors_make_no_requests() {
    // Resolution fails before any client call, so no server is needed.
    assert!(matches!(
        PromptLookup::resolve(None, None).unwrap_err(),
        ProviderError::InvalidConfiguration(_)
    ));
    assert!(matches!(
        PromptLookup::resolve(Some(Uuid::new_v4()), Some("greeting".to_string())).unwrap_err(),
        ProviderError::InvalidConfiguration(_)
    ));
}

// ============================================
// Versions data source
// ============================================

#[tokio::test]
async fn versions_preserve_server_order() {
    let mut harness = Harness::new().await;
    let prompt_id = Uuid::new_v4();

    harness
        .server
        .mock("GET", format!("/api/prompts/{}/versions", prompt_id).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                { "id": Uuid::new_v4(), "version": 3, "created_at": "2025-03-01T00:00:00Z" },
                { "id": Uuid::new_v4(), "version": 1, "created_at": "2025-01-01T00:00:00Z" },
                { "id": Uuid::new_v4(), "version": 2, "created_at": "2025-02-01T00:00:00Z" },
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let model = harness
        .versions_data_source()
        .read(prompt_id)
        .await
        .unwrap();

    assert_eq!(model.prompt_id, prompt_id);
    let numbers: Vec<i64> = model.versions.iter().map(|v| v.version_number).collect();
    assert_eq!(numbers, vec![3, 1, 2]);
    assert_eq!(model.versions[1].created_at, "2025-01-01T00:00:00+00:00");
}

// ============================================
// Full lifecycle scenario
// ============================================

#[tokio::test]
async fn create_then_update_keeps_id_stable() {
    let mut harness = Harness::new().await;
    let id = Uuid::new_v4();

    harness
        .server
        .mock("POST", "/api/prompts")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": id,
                "name": "test-prompt",
                "description": "A test prompt",
                "content": "Test content",
                "created_at": "2025-01-15T09:30:00Z",
                "updated_at": "2025-01-15T09:30:00Z"
            })
            .to_string(),
        )
        .create_async()
        .await;

    harness
        .server
        .mock("PATCH", format!("/api/prompts/{}", id).as_str())
        .with_status(200)
        .create_async()
        .await;

    let resource = harness.resource();

    let config = PromptResourceModel {
        name: "test-prompt".to_string(),
        content: "Test content".to_string(),
        description: Some("A test prompt".to_string()),
        ..Default::default()
    };
    let created = resource.create(&config).await.unwrap();
    assert_eq!(created.id, Some(id));
    assert_eq!(created.name, "test-prompt");
    assert_eq!(created.description.as_deref(), Some("A test prompt"));
    assert_eq!(created.content, "Test content");

    let plan = PromptResourceModel {
        name: "updated-prompt".to_string(),
        description: Some("Updated description".to_string()),
        ..created.clone()
    };
    let updated = resource.update(&plan).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "updated-prompt");
    assert_eq!(updated.description.as_deref(), Some("Updated description"));
}
