mod common;

use futures::executor::block_on;

use common::*;
use sheet_to_midi_web::models::SubmissionState;
use sheet_to_midi_web::services::FacingMode;
use sheet_to_midi_web::state::AppEvent;

#[test]
fn handhelds_request_the_rear_camera() {
    let h = harness(FakeCamera::default(), ScriptedTransport::default(), IPHONE_UA);
    assert_eq!(h.app.facing_mode(), FacingMode::Environment);

    block_on(h.app.run(AppEvent::CameraRequested));

    assert_eq!(*h.camera.requested.borrow(), vec![FacingMode::Environment]);
    assert_eq!(h.app.camera().facing_mode(), Some(FacingMode::Environment));
}

#[test]
fn desktops_request_the_front_camera() {
    let h = harness(FakeCamera::default(), ScriptedTransport::default(), DESKTOP_UA);

    block_on(h.app.run(AppEvent::CameraRequested));

    assert_eq!(*h.camera.requested.borrow(), vec![FacingMode::User]);
}

#[test]
fn reopening_keeps_a_single_live_session() {
    let h = harness(FakeCamera::default(), ScriptedTransport::default(), DESKTOP_UA);

    block_on(h.app.run(AppEvent::CameraRequested));
    block_on(h.app.run(AppEvent::CameraRequested));

    assert_eq!(h.camera.streams.borrow().len(), 2);
    assert_eq!(h.camera.live_streams(), 1);
    assert!(h.camera.streams.borrow()[0].stopped.get());
    assert!(h.app.camera().is_active());
}

#[test]
fn shutter_without_session_notifies_and_submits_nothing() {
    let h = harness(FakeCamera::default(), ScriptedTransport::default(), DESKTOP_UA);

    block_on(h.app.run(AppEvent::ShutterPressed));

    assert!(h.transport.calls().is_empty());
    assert_eq!(*h.presenter.notices.borrow(), vec!["Camera is not active.".to_string()]);
    assert_eq!(h.app.workflow().current(), SubmissionState::Idle);
}

#[test]
fn shutter_submits_frame_and_releases_camera() {
    let transport = ScriptedTransport::default().on_post(Ok(midi()));
    let h = harness(FakeCamera::default(), transport, DESKTOP_UA);

    block_on(h.app.run(AppEvent::CameraRequested));
    block_on(h.app.run(AppEvent::ShutterPressed));

    assert!(!h.app.camera().is_active());
    assert_eq!(h.camera.live_streams(), 0);

    let calls = h.transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].filename.as_deref(), Some("camera_capture.png"));
    assert!(matches!(h.app.workflow().current(), SubmissionState::Succeeded { .. }));
}

#[test]
fn denied_permission_is_a_notice_not_a_crash() {
    let h = harness(FakeCamera::denying("NotAllowedError"), ScriptedTransport::default(), DESKTOP_UA);

    block_on(h.app.run(AppEvent::CameraRequested));

    assert!(!h.app.camera().is_active());
    assert_eq!(
        *h.presenter.notices.borrow(),
        vec!["Could not access camera: NotAllowedError".to_string()]
    );
}

#[test]
fn dismissing_the_preview_stops_tracks() {
    let h = harness(FakeCamera::default(), ScriptedTransport::default(), DESKTOP_UA);

    block_on(h.app.run(AppEvent::CameraRequested));
    block_on(h.app.run(AppEvent::CameraDismissed));
    block_on(h.app.run(AppEvent::CameraDismissed));

    assert_eq!(h.camera.live_streams(), 0);
    assert!(!h.app.camera().is_active());
    assert!(h.presenter.notices.borrow().is_empty());
}
