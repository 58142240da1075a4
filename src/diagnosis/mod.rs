//! The diagnosis collaborator: image bytes in, structured verdict out.
//!
//! The engine and controller only see [`DiagnosisProvider`]; the shipped
//! implementation talks to a hosted generative-AI API.

mod remote;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::DiagnosisResult;

pub use remote::RemoteDiagnosisClient;

#[derive(Debug, Error)]
pub enum DiagnosisError {
    #[error("API key is missing; set VERDANT_API_KEY to use AI diagnostics")]
    MissingApiKey,
    #[error("unable to connect to the diagnostic server: {0}")]
    Network(#[source] reqwest::Error),
    #[error("the diagnostic server rejected the request (HTTP {status})")]
    Rejected { status: u16 },
    #[error("the AI provided an empty response; try a clearer photo")]
    EmptyResponse,
    #[error("malformed diagnosis payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[async_trait]
pub trait DiagnosisProvider: Send + Sync {
    /// Diagnose a plant from a JPEG photo.
    async fn diagnose(&self, image_jpeg: &[u8]) -> Result<DiagnosisResult, DiagnosisError>;
}
