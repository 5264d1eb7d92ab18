//! Gemini generative-model client
//!
//! Talks to the Generative Language REST API. The model is selected once at
//! start-up: either pinned in configuration or discovered as the first
//! listed model that supports generateContent.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::GeminiConfig;
use crate::error::{AppError, AppResult};

/// Gemini API client
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

/// generateContent request body
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

/// generateContent response body
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// ListModels response body
#[derive(Debug, Deserialize)]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelInfo>,
}

/// One entry from the model inventory
#[derive(Debug, Clone, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    #[serde(rename = "supportedGenerationMethods", default)]
    pub supported_generation_methods: Vec<String>,
}

impl GeminiClient {
    /// Create a client for an already-selected model.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>, model: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: qualified_model_name(model),
        }
    }

    /// Build a client from configuration, selecting the model up front.
    ///
    /// Fails when the API key is unset, the model inventory cannot be read,
    /// or no listed model supports generateContent. The caller treats any of
    /// these as fatal.
    pub async fn from_config(config: &GeminiConfig) -> AppResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(AppError::Configuration(
                "Gemini API key not set. Add RSP_GEMINI__API_KEY to your .env file or environment."
                    .to_string(),
            ));
        }

        let model = match &config.model {
            Some(name) => name.clone(),
            None => {
                let client = Client::new();
                let models = list_models(&client, &config.base_url, &config.api_key).await?;
                select_model(&models)
                    .ok_or_else(|| {
                        AppError::Configuration(
                            "No Gemini model with generateContent available for this API key"
                                .to_string(),
                        )
                    })?
                    .name
                    .clone()
            }
        };

        Ok(Self::new(
            config.api_key.as_str(),
            config.base_url.as_str(),
            &model,
        ))
    }

    /// The fully qualified name of the selected model.
    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// Send one text prompt and return the model's text response.
    pub async fn generate(&self, prompt: &str) -> AppResult<String> {
        let url = format!("{}/{}:generateContent", self.base_url, self.model);

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::ModelApi(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ModelApi(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let data: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::ModelApi(format!("Failed to parse response: {}", e)))?;

        Ok(response_text(&data))
    }
}

/// Read the model inventory for an API key.
async fn list_models(client: &Client, base_url: &str, api_key: &str) -> AppResult<Vec<ModelInfo>> {
    let url = format!("{}/models", base_url);

    let response = client
        .get(&url)
        .header("x-goog-api-key", api_key)
        .send()
        .await
        .map_err(|e| AppError::Configuration(format!("Could not list Gemini models: {}", e)))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::Configuration(format!(
            "Gemini model listing returned {}: {}",
            status, body
        )));
    }

    let data: ListModelsResponse = response
        .json()
        .await
        .map_err(|e| AppError::Configuration(format!("Failed to parse model listing: {}", e)))?;

    Ok(data.models)
}

/// Pick the first model that supports generateContent.
fn select_model(models: &[ModelInfo]) -> Option<&ModelInfo> {
    models.iter().find(|model| {
        model
            .supported_generation_methods
            .iter()
            .any(|method| method == "generateContent")
    })
}

/// The API addresses models as "models/<id>"; accept either form in config.
fn qualified_model_name(name: &str) -> String {
    if name.starts_with("models/") {
        name.to_string()
    } else {
        format!("models/{}", name)
    }
}

/// Concatenated text parts of the first candidate.
fn response_text(response: &GenerateContentResponse) -> String {
    response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|part| part.text.as_deref())
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
}
