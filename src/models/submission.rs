use crate::errors::ClientError;

/// Estado del feedback del workflow de subida
#[derive(Clone, Debug, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Processing,
    Succeeded { message: String },
    Failed(ClientError),
}

impl SubmissionState {
    pub fn is_processing(&self) -> bool {
        matches!(self, SubmissionState::Processing)
    }

    /// Succeeded y Failed duran hasta que se cierran o los reemplaza otro envío
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionState::Succeeded { .. } | SubmissionState::Failed(_))
    }

    /// Texto del panel de feedback, si el estado muestra uno
    pub fn panel_message(&self) -> Option<String> {
        match self {
            SubmissionState::Succeeded { message } => Some(message.clone()),
            SubmissionState::Failed(err) => Some(err.user_message()),
            SubmissionState::Idle | SubmissionState::Processing => None,
        }
    }
}

/// Disponibilidad informativa del servicio, decidida una vez al arrancar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ReadinessStatus {
    #[default]
    Unknown,
    Ready,
    Unreachable,
}
