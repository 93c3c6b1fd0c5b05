pub mod traits;
pub mod api_client;
pub mod deadline;
pub mod media_capture;
pub mod upload_workflow;
pub mod readiness;

pub use traits::{CaptureStream, FeedbackPresenter, HttpTransport, MediaDevices};
pub use api_client::ApiClient;
pub use deadline::with_deadline;
pub use media_capture::{is_mobile_user_agent, CaptureSession, FacingMode, MediaCaptureController};
pub use upload_workflow::{PendingSubmission, UploadWorkflow};
pub use readiness::ReadinessNotifier;
