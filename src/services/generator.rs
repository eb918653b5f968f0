// src/services/generator.rs

//! Text generation service client.
//!
//! Selected standards reach the model as `[code] statement` lines inside a
//! prompt. The service itself is opaque; [`GeminiClient`] talks to a
//! `generateContent`-style endpoint and anything else can implement
//! [`TextGenerator`].

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{GeneratorConfig, StandardRecord, standards_block};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Characters of an error body kept in the error message.
const MAX_ERROR_EXCERPT: usize = 300;

/// Sampling parameters for one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_output_tokens: 2048,
        }
    }
}

impl From<&GeneratorConfig> for GenerationOptions {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        }
    }
}

/// Opaque prompt-in, text-out service.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String>;
}

/// Client for a Gemini `generateContent` endpoint.
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(client: Client, endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Build a client whose API key comes from the configured environment variable.
    pub fn from_config(client: Client, config: &GeneratorConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::config(format!(
                    "API key is not set; export {} first",
                    config.api_key_env
                ))
            })?;
        Ok(Self::new(client, &config.endpoint, api_key))
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String> {
        let url = url::Url::parse(&self.endpoint)?;
        let body = serde_json::to_vec(&GenerateRequest::new(prompt, options))?;

        // Never put the key in the URL.
        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(AppError::generation(
                status.as_u16(),
                failure_message(status, &text),
            ));
        }

        let parsed: GenerateResponse = serde_json::from_str(&text)?;
        Ok(parsed.first_text())
    }
}

/// Reason phrase plus the start of the service's own error body.
fn failure_message(status: StatusCode, body: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("request failed");
    let body = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if body.is_empty() {
        return reason.to_string();
    }

    let mut excerpt: String = body.chars().take(MAX_ERROR_EXCERPT).collect();
    if body.chars().count() > MAX_ERROR_EXCERPT {
        excerpt.push('…');
    }
    format!("{reason}: {excerpt}")
}

/// Prompt asking for a lesson scenario anchored on the selected standards.
pub fn scenario_prompt(topic: &str, standards: &[StandardRecord]) -> String {
    format!(
        "주제: {topic}\n선택된 성취기준:\n{}",
        standards_block(standards)
    )
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

impl<'a> GenerateRequest<'a> {
    fn new(prompt: &'a str, options: &GenerationOptions) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: options.temperature,
                max_output_tokens: options.max_output_tokens,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// Text of the first part of the first candidate, or empty.
    fn first_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}
