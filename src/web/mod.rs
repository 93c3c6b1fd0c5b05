// ============================================================================
// WEB ADAPTERS - Implementaciones de navegador de los traits de servicios
// ============================================================================

pub mod media;
pub mod transport;
pub mod presenter;

pub use media::{BrowserMediaDevices, BrowserStream};
pub use transport::GlooTransport;
pub use presenter::DomPresenter;

use crate::config::AppConfig;
use crate::dom::{get_element_by_id, window};

/// Config de compilación, con `data-service-url` de `#app` por encima y el
/// origen de la página como último recurso.
pub fn resolve_config() -> AppConfig {
    let attribute = get_element_by_id("app").and_then(|el| el.get_attribute("data-service-url"));

    AppConfig::from_env()
        .with_service_url(attribute)
        .or_origin(page_origin())
}

/// `window.location.origin`
pub fn page_origin() -> Option<String> {
    window().and_then(|w| w.location().origin().ok())
}

pub fn user_agent() -> String {
    window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}
