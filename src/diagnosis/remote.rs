use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Deserialize;
use serde_json::json;

use super::{DiagnosisError, DiagnosisProvider};
use crate::models::DiagnosisResult;

/// Environment variable holding the generative-AI API key.
pub const API_KEY_VAR: &str = "VERDANT_API_KEY";
/// Optional override for the API base URL (useful for tests and proxies).
pub const BASE_URL_VAR: &str = "VERDANT_API_BASE_URL";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
// Multimodal preview model; stable enough for diagnostic use.
const MODEL_NAME: &str = "gemini-3-flash-preview";

const DIAGNOSIS_PROMPT: &str = "Act as a senior botanist and plant pathologist. \
    Analyze the image to: \
    1. Identify the species accurately. \
    2. Determine if it is Thriving, Recovering, or in a Critical state. \
    3. Provide a clear diagnosis and a step-by-step care plan for recovery or maintenance. \
    4. Provide specific numeric frequencies for watering, misting, and fertilizing.";

/// Client for a `generateContent`-style generative-AI endpoint. The response
/// is constrained to a JSON schema so it deserializes straight into
/// [`DiagnosisResult`].
pub struct RemoteDiagnosisClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl RemoteDiagnosisClient {
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            http,
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: MODEL_NAME.to_string(),
        }
    }

    /// Build a client from the environment. A missing key is not an error
    /// until a diagnosis is actually requested.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(API_KEY_VAR).ok().filter(|k| !k.is_empty()),
            std::env::var(BASE_URL_VAR).ok().filter(|u| !u.is_empty()),
        )
    }

    fn request_body(image_jpeg: &[u8]) -> serde_json::Value {
        json!({
            "contents": {
                "parts": [
                    {
                        "inlineData": {
                            "mimeType": "image/jpeg",
                            "data": BASE64.encode(image_jpeg),
                        }
                    },
                    { "text": DIAGNOSIS_PROMPT }
                ]
            },
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
                // Low temperature for deterministic diagnostic results
                "temperature": 0.1,
            }
        })
    }
}

#[async_trait]
impl DiagnosisProvider for RemoteDiagnosisClient {
    async fn diagnose(&self, image_jpeg: &[u8]) -> Result<DiagnosisResult, DiagnosisError> {
        let api_key = self.api_key.as_deref().ok_or(DiagnosisError::MissingApiKey)?;

        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );

        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&Self::request_body(image_jpeg))
            .send()
            .await
            .map_err(DiagnosisError::Network)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(DiagnosisError::Rejected {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(DiagnosisError::Network)?;
        let envelope: GenerateContentResponse = serde_json::from_str(&body)?;

        let text = envelope
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .and_then(|p| p.text)
            .unwrap_or_default();
        if text.trim().is_empty() {
            return Err(DiagnosisError::EmptyResponse);
        }

        let mut result: DiagnosisResult = serde_json::from_str(&text)?;
        result.confidence = result.confidence.clamp(0.0, 100.0);
        Ok(result)
    }
}

fn response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "plantName": { "type": "STRING", "description": "Common name of the plant" },
            "scientificName": { "type": "STRING", "description": "Scientific name of the plant" },
            "confidence": { "type": "NUMBER", "description": "Confidence score 0-100" },
            "healthStatus": {
                "type": "STRING",
                "enum": ["Thriving", "Recovering", "Critical"],
                "description": "Overall health status"
            },
            "diagnosis": { "type": "STRING", "description": "Summary of the findings" },
            "reasoning": { "type": "STRING", "description": "Explanation of visual symptoms" },
            "carePlan": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Actionable care steps"
            },
            "suggestedWaterFrequency": { "type": "NUMBER", "description": "Watering interval in days" },
            "suggestedMistFrequency": { "type": "NUMBER", "description": "Misting interval in days (0 if not needed)" },
            "suggestedFertilizeFrequency": { "type": "NUMBER", "description": "Fertilizing interval in days (0 if not needed)" }
        },
        "required": [
            "plantName",
            "scientificName",
            "confidence",
            "healthStatus",
            "diagnosis",
            "reasoning",
            "carePlan",
            "suggestedWaterFrequency",
            "suggestedMistFrequency",
            "suggestedFertilizeFrequency"
        ]
    })
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
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
