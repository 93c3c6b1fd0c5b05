pub mod payload;
pub mod submission;
pub mod conversion;

pub use payload::{ImagePayload, MediaType};
pub use submission::{ReadinessStatus, SubmissionState};
pub use conversion::{ConversionArtifact, ConversionErrorBody, HealthReport, HttpResponse};
