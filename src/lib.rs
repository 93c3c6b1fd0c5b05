// ============================================================================
// SHEET TO MIDI - Cliente de navegador (Rust + WASM)
// ============================================================================
// - Services: cámara, workflow de subida, health check (independientes de
//   la plataforma, detrás de traits)
// - State: celdas reactivas desde las que pintan las vistas
// - Views / DOM: funciones que renderizan DOM (sin lógica)
// - Web: implementaciones de navegador de los traits
// ============================================================================

pub mod app;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod views;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use app::App;
pub use config::{AppConfig, ServiceEndpoints};
pub use errors::{ClientError, Result};

#[cfg(target_arch = "wasm32")]
mod entry {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;

    use crate::app::App;
    use crate::services::FeedbackPresenter;
    use crate::state::AppEvent;
    use crate::views;
    use crate::web::{self, BrowserMediaDevices, DomPresenter, GlooTransport};

    type BrowserApp = App<BrowserMediaDevices, GlooTransport, DomPresenter>;

    thread_local! {
        static APP: RefCell<Option<Rc<BrowserApp>>> = RefCell::new(None);
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let config = web::resolve_config();
        wasm_logger::init(wasm_logger::Config::new(config.log_level()));
        log::info!("🚀 Sheet to MIDI - Rust + WASM");
        let (config, config_error) = config.or_origin_if_invalid(web::page_origin());

        let presenter = Rc::new(DomPresenter::new(config.banner_fade_ms));
        let app = App::new(
            &config,
            BrowserMediaDevices,
            GlooTransport::new(),
            presenter.clone(),
            &web::user_agent(),
        )
        .map_err(|e| JsValue::from_str(&e.user_message()))?;

        let submission = app.state().submission.clone();
        let reader = submission.clone();
        submission.subscribe(move || {
            if let Err(e) = views::apply_feedback(&reader.get()) {
                log::error!("❌ [VIEW] Feedback render failed: {:?}", e);
            }
        });

        APP.with(|cell| *cell.borrow_mut() = Some(Rc::new(app)));

        views::bind_controls()?;
        // La app sigue funcionando contra el origen; se avisa una vez
        if let Some(e) = config_error {
            presenter.show_notice(&e.user_message());
        }
        dispatch(AppEvent::PageLoaded);
        Ok(())
    }

    /// Ejecuta `event` (y sus encadenados) sin bloquear a quien llama
    pub fn dispatch(event: AppEvent) {
        let app = APP.with(|cell| cell.borrow().clone());
        match app {
            Some(app) => spawn_local(async move { app.run(event).await }),
            None => log::warn!("⚠️ [APP] {} dispatched before start", event.name()),
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use entry::dispatch;
