use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::{ClientError, Result};
use crate::utils::constants::{
    CONVERT_PATH, DEFAULT_BANNER_FADE_MS, DEFAULT_REQUEST_TIMEOUT_SECONDS, HEALTH_PATH,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// URL base del servicio de conversión, `None` hasta resolverla
    pub service_base_url: Option<String>,
    pub request_timeout_seconds: u32,
    pub banner_fade_ms: u32,
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_base_url: None,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            banner_fade_ms: DEFAULT_BANNER_FADE_MS,
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Configuración fijada en compilación (ver build.rs / .env)
    pub fn from_env() -> Self {
        Self {
            service_base_url: option_env!("SERVICE_BASE_URL")
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.to_string()),
            request_timeout_seconds: option_env!("REQUEST_TIMEOUT_SECONDS")
                .and_then(|s| s.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECONDS),
            banner_fade_ms: option_env!("BANNER_FADE_MS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_BANNER_FADE_MS),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
            log_level: option_env!("LOG_LEVEL").unwrap_or("info").to_string(),
        }
    }

    /// Override en runtime de la URL (p. ej. `data-service-url` del elemento raíz)
    pub fn with_service_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.service_base_url = Some(url);
        }
        self
    }

    /// Usa `origin` solo si nada más configuró la URL
    pub fn or_origin(mut self, origin: Option<String>) -> Self {
        if self.service_base_url.is_none() {
            self.service_base_url = origin.filter(|o| !o.trim().is_empty());
        }
        self
    }

    /// Si la URL configurada no sirve, vuelve al origen de la página y
    /// devuelve el error para avisar al usuario
    pub fn or_origin_if_invalid(mut self, origin: Option<String>) -> (Self, Option<ClientError>) {
        match self.endpoints() {
            Ok(_) => (self, None),
            Err(e) => {
                log::warn!("⚠️ [CONFIG] {}; usando el origen de la página", e);
                self.service_base_url = None;
                (self.or_origin(origin), Some(e))
            }
        }
    }

    /// Endpoints del servicio ya validados
    pub fn endpoints(&self) -> Result<ServiceEndpoints> {
        let raw = self
            .service_base_url
            .as_deref()
            .ok_or_else(|| ClientError::InvalidConfig("no service base URL configured".into()))?;
        ServiceEndpoints::parse(raw)
    }

    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            return log::Level::Error;
        }
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

/// URLs absolutas de los dos endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoints {
    base: Url,
    convert: Url,
    health: Url,
}

impl ServiceEndpoints {
    pub fn parse(raw: &str) -> Result<Self> {
        let mut base = Url::parse(raw.trim())
            .map_err(|e| ClientError::InvalidConfig(format!("{:?} is not a URL: {}", raw, e)))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(ClientError::InvalidConfig(format!(
                "unsupported scheme {:?} in service URL",
                base.scheme()
            )));
        }
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidConfig(format!("{:?} cannot be a base URL", raw)));
        }

        // Url::join quita el último segmento si el path no acaba en '/'
        let trimmed = base.path().trim_end_matches('/').to_string();
        base.set_path(&format!("{}/", trimmed));
        base.set_query(None);
        base.set_fragment(None);

        let join = |path: &str| {
            base.join(path)
                .map_err(|e| ClientError::InvalidConfig(format!("cannot build {} URL: {}", path, e)))
        };
        let convert = join(CONVERT_PATH)?;
        let health = join(HEALTH_PATH)?;

        Ok(Self { base, convert, health })
    }

    pub fn base(&self) -> &str {
        self.base.as_str()
    }

    pub fn convert_url(&self) -> &str {
        self.convert.as_str()
    }

    pub fn health_url(&self) -> &str {
        self.health.as_str()
    }
}
