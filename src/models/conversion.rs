use serde::Deserialize;

use crate::utils::constants::{RESULT_FILENAME, RESULT_MIME, UNKNOWN_ERROR};

/// Respuesta cruda del transporte: status y bytes del cuerpo
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Fichero MIDI devuelto por una conversión correcta
#[derive(Clone, PartialEq, Eq)]
pub struct ConversionArtifact {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub mime: String,
}

impl ConversionArtifact {
    pub fn midi(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            filename: RESULT_FILENAME.to_string(),
            mime: RESULT_MIME.to_string(),
        }
    }
}

impl std::fmt::Debug for ConversionArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversionArtifact")
            .field("filename", &self.filename)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Cuerpo de error de `/convert`: `{ "error": "..." }`
#[derive(Debug, Deserialize)]
pub struct ConversionErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ConversionErrorBody {
    /// Mensaje legible del cuerpo de error; `Unknown error` si falta o no es JSON
    pub fn message_from(body: &[u8]) -> String {
        serde_json::from_slice::<ConversionErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.error)
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
    }
}

/// Cuerpo de `/health`. Solo `status` decide; el resto es diagnóstico.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub java_available: Option<bool>,
    #[serde(default)]
    pub audiveris_available: Option<bool>,
    #[serde(default)]
    pub audiveris_path: Option<String>,
}

impl HealthReport {
    pub fn is_ready(&self) -> bool {
        self.status == "ok"
    }
}
