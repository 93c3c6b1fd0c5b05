//! Dobles que graban las llamadas a los traits de servicios, compartidos por los tests de integración.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use sheet_to_midi_web::models::{ConversionArtifact, HttpResponse, ImagePayload, SubmissionState};
use sheet_to_midi_web::services::{CaptureStream, FacingMode, FeedbackPresenter, HttpTransport, MediaDevices};
use sheet_to_midi_web::state::ReactiveState;
use sheet_to_midi_web::{App, AppConfig, ClientError, Result};

pub const SERVICE_URL: &str = "http://localhost:5000";
pub const DESKTOP_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/126.0";
pub const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) Safari/604.1";

// ---------------------------------------------------------------------------
// Cámara
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct FakeStream {
    pub id: usize,
    pub stopped: Rc<Cell<bool>>,
}

#[async_trait(?Send)]
impl CaptureStream for FakeStream {
    fn start_preview(&self) -> Result<()> {
        Ok(())
    }

    fn stop(&self) {
        self.stopped.set(true);
    }

    async fn render_frame(&self) -> Result<ImagePayload> {
        Ok(ImagePayload::new(vec![0x89, b'P', b'N', b'G'], "image/png", "camera_capture.png"))
    }
}

#[derive(Clone, Default)]
pub struct FakeCamera {
    pub streams: Rc<RefCell<Vec<FakeStream>>>,
    pub requested: Rc<RefCell<Vec<FacingMode>>>,
    pub deny_with: Option<String>,
}

impl FakeCamera {
    pub fn denying(reason: &str) -> Self {
        Self {
            deny_with: Some(reason.to_string()),
            ..Self::default()
        }
    }

    pub fn live_streams(&self) -> usize {
        self.streams.borrow().iter().filter(|s| !s.stopped.get()).count()
    }
}

#[async_trait(?Send)]
impl MediaDevices for FakeCamera {
    type Stream = FakeStream;

    async fn open_stream(&self, facing: FacingMode) -> Result<FakeStream> {
        self.requested.borrow_mut().push(facing);
        if let Some(reason) = &self.deny_with {
            return Err(ClientError::CameraUnavailable(reason.clone()));
        }
        let stream = FakeStream {
            id: self.streams.borrow().len(),
            stopped: Rc::new(Cell::new(false)),
        };
        self.streams.borrow_mut().push(stream.clone());
        Ok(stream)
    }
}

// ---------------------------------------------------------------------------
// HTTP
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: &'static str,
    pub url: String,
    pub field: Option<String>,
    pub filename: Option<String>,
    pub len: usize,
    /// Estado observado mientras la petición estaba en curso
    pub state_during: Option<SubmissionState>,
}

#[derive(Default)]
struct TransportInner {
    posts: RefCell<VecDeque<Result<HttpResponse>>>,
    gets: RefCell<VecDeque<Result<HttpResponse>>>,
    calls: RefCell<Vec<RecordedCall>>,
    observed: RefCell<Option<ReactiveState<SubmissionState>>>,
}

/// Responde desde una cola y graba cada llamada
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    inner: Rc<TransportInner>,
}

impl ScriptedTransport {
    pub fn on_post(self, response: Result<HttpResponse>) -> Self {
        self.inner.posts.borrow_mut().push_back(response);
        self
    }

    pub fn on_get(self, response: Result<HttpResponse>) -> Self {
        self.inner.gets.borrow_mut().push_back(response);
        self
    }

    pub fn observe(&self, state: ReactiveState<SubmissionState>) {
        *self.inner.observed.borrow_mut() = Some(state);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.inner.calls.borrow().clone()
    }

    fn snapshot(&self) -> Option<SubmissionState> {
        self.inner.observed.borrow().as_ref().map(|s| s.get())
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn post_multipart(
        &self,
        url: &str,
        field: &str,
        payload: &ImagePayload,
        _timeout_seconds: u32,
    ) -> Result<HttpResponse> {
        self.inner.calls.borrow_mut().push(RecordedCall {
            method: "POST",
            url: url.to_string(),
            field: Some(field.to_string()),
            filename: Some(payload.filename().to_string()),
            len: payload.len(),
            state_during: self.snapshot(),
        });
        self.inner
            .posts
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::TransportFailure("no scripted response".into())))
    }

    async fn get(&self, url: &str, _timeout_seconds: u32) -> Result<HttpResponse> {
        self.inner.calls.borrow_mut().push(RecordedCall {
            method: "GET",
            url: url.to_string(),
            field: None,
            filename: None,
            len: 0,
            state_during: self.snapshot(),
        });
        self.inner
            .gets
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::TransportFailure("no scripted response".into())))
    }
}

// ---------------------------------------------------------------------------
// Presenter
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RecordingPresenter {
    pub cues: Cell<usize>,
    pub downloads: RefCell<Vec<ConversionArtifact>>,
    pub notices: RefCell<Vec<String>>,
    pub banners: Cell<usize>,
}

impl FeedbackPresenter for RecordingPresenter {
    fn play_cue(&self) {
        self.cues.set(self.cues.get() + 1);
    }

    fn offer_download(&self, artifact: &ConversionArtifact) -> Result<()> {
        self.downloads.borrow_mut().push(artifact.clone());
        Ok(())
    }

    fn show_notice(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }

    fn show_readiness_banner(&self) {
        self.banners.set(self.banners.get() + 1);
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub struct Harness {
    pub app: App<FakeCamera, ScriptedTransport, RecordingPresenter>,
    pub camera: FakeCamera,
    pub transport: ScriptedTransport,
    pub presenter: Rc<RecordingPresenter>,
    /// Cada estado del envío, en orden
    pub history: Rc<RefCell<Vec<SubmissionState>>>,
}

pub fn harness(camera: FakeCamera, transport: ScriptedTransport, user_agent: &str) -> Harness {
    let config = AppConfig {
        service_base_url: Some(SERVICE_URL.to_string()),
        ..AppConfig::default()
    };
    let presenter = Rc::new(RecordingPresenter::default());
    let app = App::new(&config, camera.clone(), transport.clone(), presenter.clone(), user_agent)
        .expect("valid config");

    let submission = app.state().submission.clone();
    transport.observe(submission.clone());

    let history = Rc::new(RefCell::new(Vec::new()));
    let sink = history.clone();
    let reader = submission.clone();
    submission.subscribe(move || sink.borrow_mut().push(reader.get()));

    Harness {
        app,
        camera,
        transport,
        presenter,
        history,
    }
}

pub fn jpeg(len: usize) -> ImagePayload {
    let mut bytes = vec![0u8; len];
    bytes[..3].copy_from_slice(&[0xFF, 0xD8, 0xFF]);
    ImagePayload::new(bytes, "image/jpeg", "score.jpg")
}

pub fn png() -> ImagePayload {
    ImagePayload::new(vec![0x89, b'P', b'N', b'G'], "image/png", "score.png")
}

pub fn midi() -> HttpResponse {
    HttpResponse::new(200, b"MThd\x00\x00\x00\x06".to_vec())
}

pub fn error_body(status: u16, message: &str) -> HttpResponse {
    let body = serde_json::json!({ "error": message }).to_string();
    HttpResponse::new(status, body.into_bytes())
}

/// El indicador solo se pinta en Processing
pub fn indicator_visible(state: &SubmissionState) -> bool {
    state.is_processing()
}
