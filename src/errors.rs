// ============================================================================
// ERRORS - Errores del cliente de captura y envío
// ============================================================================
// Todas las variantes son recuperables: se muestran al usuario y la UI
// sigue activa. `JsValue` solo existe en la frontera de wasm-bindgen y ahí
// se convierte en `ClientError::Dom`.
// ============================================================================

use thiserror::Error;

use crate::utils::constants::NO_NOTATION_SIGNATURE;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Tipo declarado fuera de la lista JPEG/PNG
    #[error("unsupported media type: {declared:?}")]
    InvalidFormat { declared: String },

    /// Permiso denegado o ninguna cámara con el facing mode pedido
    #[error("camera unavailable: {0}")]
    CameraUnavailable(String),

    #[error("no active capture session")]
    NoActiveSession,

    /// El servicio respondió con un cuerpo de error estructurado
    #[error("conversion rejected: {message}")]
    ConversionRejected { message: String },

    /// Sin respuesta (red, DNS, CORS, fetch abortado)
    #[error("transport failure: {0}")]
    TransportFailure(String),

    /// Llegó respuesta pero no la que promete el endpoint
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("conversion service did not answer within {seconds} seconds")]
    Timeout { seconds: u32 },

    #[error("a submission is already in flight")]
    SubmissionInFlight,

    /// El MIDI llegó pero no se pudo entregar al navegador
    #[error("download failed: {0}")]
    Download(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("browser API error: {0}")]
    Dom(String),
}

impl ClientError {
    /// Texto que ve el usuario para este error
    pub fn user_message(&self) -> String {
        match self {
            ClientError::InvalidFormat { .. } => {
                "Please upload a JPEG or PNG image file.".to_string()
            }
            ClientError::CameraUnavailable(reason) => {
                format!("Could not access camera: {}", reason)
            }
            ClientError::NoActiveSession => "Camera is not active.".to_string(),
            ClientError::ConversionRejected { message } => {
                if message.contains(NO_NOTATION_SIGNATURE) {
                    format!(
                        "❌ {}\n\n💡 Tip: Make sure your image shows clear musical notation with staff lines and notes.",
                        message
                    )
                } else {
                    format!("❌ Conversion failed: {}", message)
                }
            }
            ClientError::TransportFailure(raw) => format!("❌ Upload failed: {}", raw),
            ClientError::UnexpectedResponse(detail) => format!("❌ Upload failed: {}", detail),
            ClientError::Timeout { seconds } => format!(
                "❌ Upload failed: the conversion service did not answer within {} seconds",
                seconds
            ),
            ClientError::SubmissionInFlight => {
                "⏳ A conversion is already running, please wait for it to finish.".to_string()
            }
            ClientError::Download(reason) => {
                format!("❌ The MIDI file could not be saved: {}", reason)
            }
            ClientError::InvalidConfig(reason) => format!("⚠️ Configuration error: {}", reason),
            ClientError::Dom(reason) => format!("⚠️ {}", reason),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for ClientError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        ClientError::Dom(crate::utils::js_error_text(&value))
    }
}
