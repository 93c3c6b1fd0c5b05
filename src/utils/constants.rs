/// Paths de los endpoints, relativos a la URL base configurada
pub const CONVERT_PATH: &str = "convert";
pub const HEALTH_PATH: &str = "health";

/// Campo multipart del que el servicio lee la imagen
pub const UPLOAD_FIELD_NAME: &str = "file";

/// Nombre sugerido del MIDI descargado
pub const RESULT_FILENAME: &str = "converted_music.mid";
pub const RESULT_MIME: &str = "audio/midi";

/// Nombre y tipo de los frames capturados de la cámara
pub const CAMERA_CAPTURE_FILENAME: &str = "camera_capture.png";
pub const CAMERA_CAPTURE_MIME: &str = "image/png";

/// Texto que usa el servicio cuando no encuentra notación musical
pub const NO_NOTATION_SIGNATURE: &str = "does not contain readable sheet music";

/// Por defecto si el cuerpo de error no trae `error` usable
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Fragmentos de user agent de móviles (sin distinguir mayúsculas)
pub const MOBILE_UA_SIGNATURES: &[&str] = &["android", "iphone", "ipad", "ipod"];

pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u32 = 120;
pub const DEFAULT_BANNER_FADE_MS: u32 = 12_000;

pub const SUCCESS_MESSAGE: &str = "🎵 Perfect! Your sheet music has been converted to MIDI!\n\n🎷 Now you can play along with the notes!";
