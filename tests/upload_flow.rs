mod common;

use futures::executor::block_on;

use common::*;
use sheet_to_midi_web::models::SubmissionState;
use sheet_to_midi_web::state::AppEvent;
use sheet_to_midi_web::ClientError;

#[test]
fn jpeg_upload_succeeds_and_offers_one_download() {
    let transport = ScriptedTransport::default().on_post(Ok(midi()));
    let h = harness(FakeCamera::default(), transport, DESKTOP_UA);

    block_on(h.app.run(AppEvent::FileSelected(jpeg(2 * 1024 * 1024))));

    let calls = h.transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "POST");
    assert_eq!(calls[0].url, "http://localhost:5000/convert");
    assert_eq!(calls[0].field.as_deref(), Some("file"));
    assert_eq!(calls[0].len, 2 * 1024 * 1024);

    let downloads = h.presenter.downloads.borrow();
    assert_eq!(downloads.len(), 1);
    assert_eq!(downloads[0].filename, "converted_music.mid");
    assert_eq!(downloads[0].mime, "audio/midi");

    let state = h.app.workflow().current();
    assert!(matches!(state, SubmissionState::Succeeded { .. }));
    assert!(!indicator_visible(&state));
    assert!(state.panel_message().unwrap().contains("converted to MIDI"));
    assert_eq!(h.presenter.cues.get(), 1);
}

#[test]
fn missing_notation_gets_guidance() {
    let transport = ScriptedTransport::default().on_post(Ok(error_body(
        400,
        "Image does not contain readable sheet music",
    )));
    let h = harness(FakeCamera::default(), transport, DESKTOP_UA);

    block_on(h.app.run(AppEvent::FileSelected(png())));

    let state = h.app.workflow().current();
    assert_eq!(
        state,
        SubmissionState::Failed(ClientError::ConversionRejected {
            message: "Image does not contain readable sheet music".to_string()
        })
    );
    let panel = state.panel_message().unwrap();
    assert!(panel.contains("💡 Tip"));
    assert!(panel.contains("staff lines"));
    assert!(h.presenter.downloads.borrow().is_empty());
}

#[test]
fn server_error_without_body_is_unknown() {
    let transport = ScriptedTransport::default().on_post(Ok(sheet_to_midi_web::models::HttpResponse::new(
        502,
        b"<html>Bad Gateway</html>".to_vec(),
    )));
    let h = harness(FakeCamera::default(), transport, DESKTOP_UA);

    block_on(h.app.run(AppEvent::FileSelected(png())));

    assert_eq!(
        h.app.workflow().current().panel_message().as_deref(),
        Some("❌ Conversion failed: Unknown error")
    );
}

#[test]
fn unsupported_type_is_rejected_before_any_request() {
    let h = harness(FakeCamera::default(), ScriptedTransport::default(), DESKTOP_UA);
    let text = sheet_to_midi_web::models::ImagePayload::new(b"do re mi".to_vec(), "text/plain", "notes.txt");

    block_on(h.app.run(AppEvent::FileSelected(text)));

    assert!(h.transport.calls().is_empty());
    assert_eq!(h.app.workflow().current(), SubmissionState::Idle);
    assert!(h.history.borrow().is_empty());
    assert_eq!(h.presenter.cues.get(), 0);
    assert_eq!(
        *h.presenter.notices.borrow(),
        vec!["Please upload a JPEG or PNG image file.".to_string()]
    );
}

#[test]
fn unread_file_of_wrong_type_is_rejected() {
    let h = harness(FakeCamera::default(), ScriptedTransport::default(), DESKTOP_UA);
    let pdf = sheet_to_midi_web::models::ImagePayload::unread("application/pdf", "score.pdf");

    block_on(h.app.run(AppEvent::FileSelected(pdf)));

    assert!(h.transport.calls().is_empty());
    assert_eq!(h.app.workflow().current(), SubmissionState::Idle);
    assert_eq!(
        *h.presenter.notices.borrow(),
        vec!["Please upload a JPEG or PNG image file.".to_string()]
    );
}

#[test]
fn indicator_is_visible_exactly_while_in_flight() {
    let outcomes = vec![
        Ok(midi()),
        Ok(error_body(500, "Server error: boom")),
        Err(ClientError::TransportFailure("TypeError: Failed to fetch".into())),
        Err(ClientError::Timeout { seconds: 120 }),
    ];

    for outcome in outcomes {
        let transport = ScriptedTransport::default().on_post(outcome.clone());
        let h = harness(FakeCamera::default(), transport, DESKTOP_UA);

        block_on(h.app.run(AppEvent::FileSelected(jpeg(1024))));

        let during = h.transport.calls()[0].state_during.clone();
        assert_eq!(during, Some(SubmissionState::Processing), "outcome {:?}", outcome);

        let history = h.history.borrow();
        assert_eq!(history.first(), Some(&SubmissionState::Processing));
        let last = history.last().unwrap();
        assert!(last.is_terminal(), "outcome {:?} ended in {:?}", outcome, last);
        assert!(!indicator_visible(last));
        assert!(!h.app.workflow().is_in_flight());
    }
}

#[test]
fn timeout_is_reported_as_failure() {
    let transport = ScriptedTransport::default().on_post(Err(ClientError::Timeout { seconds: 120 }));
    let h = harness(FakeCamera::default(), transport, DESKTOP_UA);

    block_on(h.app.run(AppEvent::FileSelected(png())));

    assert_eq!(
        h.app.workflow().current(),
        SubmissionState::Failed(ClientError::Timeout { seconds: 120 })
    );
    assert!(h.presenter.downloads.borrow().is_empty());
}

#[test]
fn overlapping_submission_is_rejected() {
    let transport = ScriptedTransport::default().on_post(Ok(midi()));
    let h = harness(FakeCamera::default(), transport, DESKTOP_UA);

    let pending = h.app.workflow().begin(png()).unwrap();
    block_on(h.app.run(AppEvent::FileSelected(jpeg(64))));

    assert!(h.transport.calls().is_empty());
    assert!(h.app.workflow().is_in_flight());
    assert_eq!(h.presenter.notices.borrow().len(), 1);
    assert_eq!(
        h.presenter.notices.borrow()[0],
        ClientError::SubmissionInFlight.user_message()
    );

    let result = block_on(h.app.workflow().send(&pending));
    block_on(h.app.run(AppEvent::SubmissionResolved(result)));
    assert!(matches!(h.app.workflow().current(), SubmissionState::Succeeded { .. }));
    assert_eq!(h.transport.calls().len(), 1);
}

#[test]
fn dismissing_feedback_returns_to_idle() {
    let transport = ScriptedTransport::default().on_post(Ok(error_body(400, "No file provided")));
    let h = harness(FakeCamera::default(), transport, DESKTOP_UA);

    block_on(h.app.run(AppEvent::FileSelected(png())));
    assert!(h.app.workflow().current().is_terminal());

    block_on(h.app.run(AppEvent::FeedbackDismissed));
    assert_eq!(h.app.workflow().current(), SubmissionState::Idle);
}

#[test]
fn new_upload_replaces_previous_panel() {
    let transport = ScriptedTransport::default()
        .on_post(Ok(error_body(400, "No file provided")))
        .on_post(Ok(midi()));
    let h = harness(FakeCamera::default(), transport, DESKTOP_UA);

    block_on(h.app.run(AppEvent::FileSelected(png())));
    block_on(h.app.run(AppEvent::FileSelected(png())));

    let history = h.history.borrow();
    assert!(matches!(history[1], SubmissionState::Failed(_)));
    assert_eq!(history[2], SubmissionState::Idle);
    assert_eq!(history[3], SubmissionState::Processing);
    assert!(matches!(history[4], SubmissionState::Succeeded { .. }));
    assert_eq!(h.presenter.downloads.borrow().len(), 1);
}
