// REST API routes for the lyric generator front end

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::error;

use crate::ai::GEMINI_MODEL;
use crate::commands::{self, AppState};
use crate::error::AppError;
use crate::song::structure::{SectionKind, StructurePreset};
use crate::song::{GenerationResult, HistoryItem, HistorySummary, SongConfig};

type ApiResult<T> = Result<Json<T>, AppError>;

// ---- Request/Response types ----

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub name: String,
    pub version: String,
    pub model: String,
    pub history_count: usize,
    pub api_key_configured: bool,
    pub generating: bool,
}

#[derive(Deserialize)]
pub struct AddPartRequest {
    #[serde(default)]
    pub structure: Vec<String>,
    pub part: SectionKind,
}

#[derive(Deserialize)]
pub struct PresetRequest {
    pub preset: StructurePreset,
}

#[derive(Serialize)]
pub struct StructureResponse {
    pub structure: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyRequest {
    pub api_key: String,
}

#[derive(Serialize)]
pub struct ApiKeyStatusResponse {
    pub configured: bool,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingApiKey => StatusCode::PRECONDITION_FAILED,
            AppError::GenerationFailed => StatusCode::BAD_GATEWAY,
            AppError::Busy => StatusCode::CONFLICT,
            AppError::InvalidBpm(_) | AppError::InvalidApiKey => StatusCode::BAD_REQUEST,
            AppError::HistoryItemNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() && status != StatusCode::BAD_GATEWAY {
            error!(error = %self, "Request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

// ---- Router ----

pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/status", get(status))
        .route("/api/options", get(options))
        .route("/api/structure/parts", post(add_part))
        .route("/api/structure/preset", post(apply_preset))
        .route("/api/generate", post(generate))
        .route("/api/history", get(list_history).delete(clear_history))
        .route("/api/history/{id}", get(get_history_item))
        .route(
            "/api/settings/api-key",
            get(api_key_status).put(set_api_key).delete(delete_api_key),
        )
}

// ---- Handlers ----

async fn status(State(state): State<Arc<AppState>>) -> ApiResult<StatusResponse> {
    Ok(Json(StatusResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: GEMINI_MODEL.to_string(),
        history_count: commands::history::history_count(&state)?,
        api_key_configured: commands::settings::get_ai_api_key_status(&state)?,
        generating: state.is_generating(),
    }))
}

async fn options() -> Json<commands::form::FormOptions> {
    Json(commands::form::get_form_options())
}

async fn add_part(Json(req): Json<AddPartRequest>) -> Json<StructureResponse> {
    Json(StructureResponse {
        structure: commands::form::add_structure_part(req.structure, req.part),
    })
}

async fn apply_preset(Json(req): Json<PresetRequest>) -> Json<StructureResponse> {
    Json(StructureResponse {
        structure: commands::form::apply_structure_preset(req.preset),
    })
}

async fn generate(
    State(state): State<Arc<AppState>>,
    Json(config): Json<SongConfig>,
) -> ApiResult<GenerationResult> {
    let result = commands::generate::generate(&state, config).await?;
    Ok(Json(result))
}

async fn list_history(State(state): State<Arc<AppState>>) -> ApiResult<Vec<HistorySummary>> {
    Ok(Json(commands::history::list_history(&state)?))
}

async fn get_history_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<HistoryItem> {
    Ok(Json(commands::history::get_history_item(&state, &id)?))
}

async fn clear_history(State(state): State<Arc<AppState>>) -> Result<StatusCode, AppError> {
    commands::history::clear_history(&state)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn api_key_status(State(state): State<Arc<AppState>>) -> ApiResult<ApiKeyStatusResponse> {
    Ok(Json(ApiKeyStatusResponse {
        configured: commands::settings::get_ai_api_key_status(&state)?,
    }))
}

async fn set_api_key(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ApiKeyRequest>,
) -> Result<StatusCode, AppError> {
    commands::settings::set_ai_api_key(&state, &req.api_key)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_api_key(State(state): State<Arc<AppState>>) -> Result<StatusCode, AppError> {
    commands::settings::delete_ai_api_key(&state)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_state;
    use serde_json::Value;

    /// Serve the API over `state` on an ephemeral port and return its base URL.
    async fn spawn_api(state: Arc<AppState>) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = api_routes().with_state(state);
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn sample_item(id: &str) -> HistoryItem {
        HistoryItem {
            id: id.to_string(),
            form_state: SongConfig::default(),
            result: GenerationResult {
                lyrics: "bars".to_string(),
                genre_style: "style".to_string(),
                avoid_style: "avoid".to_string(),
            },
            timestamp: 1,
        }
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(AppError::MissingApiKey.status_code(), StatusCode::PRECONDITION_FAILED);
        assert_eq!(AppError::GenerationFailed.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(AppError::Busy.status_code(), StatusCode::CONFLICT);
        assert_eq!(AppError::InvalidBpm(91).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::HistoryItemNotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(AppError::LockPoisoned.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_options_and_structure_endpoints() {
        let base = spawn_api(Arc::new(test_state())).await;
        let client = reqwest::Client::new();

        let options: Value = client
            .get(format!("{}/api/options", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(options["model"], GEMINI_MODEL);
        assert_eq!(options["defaults"]["songTitle"], "Untitled");

        let added: Value = client
            .post(format!("{}/api/structure/parts", base))
            .json(&json!({"structure": ["Verse 1", "Chorus 1"], "part": "Verse"}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(added["structure"], json!(["Verse 1", "Chorus 1", "Verse 2"]));

        let preset: Value = client
            .post(format!("{}/api/structure/preset", base))
            .json(&json!({"preset": "AABA"}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert!(!preset["structure"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_generate_rejects_invalid_bpm() {
        let base = spawn_api(Arc::new(test_state())).await;

        let mut body = serde_json::to_value(SongConfig::default()).unwrap();
        body["bpm"] = json!(123);

        let response = reqwest::Client::new()
            .post(format!("{}/api/generate", base))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_generate_while_busy_is_conflict() {
        let state = Arc::new(test_state());
        let base = spawn_api(state.clone()).await;
        let _guard = state.begin_generation().unwrap();

        let response = reqwest::Client::new()
            .post(format!("{}/api/generate", base))
            .json(&SongConfig::default())
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::CONFLICT);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], AppError::Busy.to_string());
    }

    #[tokio::test]
    async fn test_history_endpoints() {
        let state = Arc::new(test_state());
        state.history.lock().unwrap().append(sample_item("abc")).unwrap();
        let base = spawn_api(state.clone()).await;
        let client = reqwest::Client::new();

        let list: Value = client
            .get(format!("{}/api/history", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(list.as_array().unwrap().len(), 1);

        let item: Value = client
            .get(format!("{}/api/history/abc", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(item["result"]["lyrics"], "bars");
        assert_eq!(item["formState"]["language"], "English");

        let missing = client
            .get(format!("{}/api/history/nope", base))
            .send()
            .await
            .unwrap();
        assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);

        let cleared = client
            .delete(format!("{}/api/history", base))
            .send()
            .await
            .unwrap();
        assert_eq!(cleared.status(), reqwest::StatusCode::NO_CONTENT);
        assert!(state.history.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_api_key_settings_endpoints() {
        let base = spawn_api(Arc::new(test_state())).await;
        let client = reqwest::Client::new();
        let url = format!("{}/api/settings/api-key", base);

        let blank = client
            .put(&url)
            .json(&json!({"apiKey": "  "}))
            .send()
            .await
            .unwrap();
        assert_eq!(blank.status(), reqwest::StatusCode::BAD_REQUEST);

        let stored = client
            .put(&url)
            .json(&json!({"apiKey": "secret"}))
            .send()
            .await
            .unwrap();
        assert_eq!(stored.status(), reqwest::StatusCode::NO_CONTENT);

        let status: Value = client.get(&url).send().await.unwrap().json().await.unwrap();
        assert_eq!(status["configured"], true);

        let deleted = client.delete(&url).send().await.unwrap();
        assert_eq!(deleted.status(), reqwest::StatusCode::NO_CONTENT);
    }
}
