use std::fmt;
use std::rc::Rc;

use crate::errors::{ClientError, Result};

/// Formatos de imagen que acepta el servicio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Jpeg,
    Png,
}

impl MediaType {
    /// Traduce el MIME declarado a la lista permitida.
    ///
    /// Ignora mayúsculas y parámetros; `image/jpg` cuenta como JPEG porque
    /// algunos navegadores aún lo reportan.
    pub fn from_mime(declared: &str) -> Option<Self> {
        let essence = declared
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "image/jpeg" | "image/jpg" => Some(MediaType::Jpeg),
            "image/png" => Some(MediaType::Png),
            _ => None,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            MediaType::Jpeg => "image/jpeg",
            MediaType::Png => "image/png",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

/// Imagen entregada para convertir. Inmutable una vez creada.
///
/// El tipo declarado se guarda tal cual para que el workflow pueda
/// representar (y rechazar) payloads fuera de la lista.
#[derive(Clone, PartialEq, Eq)]
pub struct ImagePayload {
    bytes: Rc<[u8]>,
    declared_type: String,
    filename: String,
}

impl ImagePayload {
    pub fn new(bytes: impl Into<Rc<[u8]>>, declared_type: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            declared_type: declared_type.into(),
            filename: filename.into(),
        }
    }

    /// Solo tipo y nombre, sin bytes: para ficheros que no se leen porque
    /// su tipo ya está fuera de la lista y el workflow los va a rechazar
    pub fn unread(declared_type: impl Into<String>, filename: impl Into<String>) -> Self {
        Self::new(Vec::<u8>::new(), declared_type, filename)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn declared_type(&self) -> &str {
        &self.declared_type
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Comprobación de la lista; `InvalidFormat` si no es JPEG/PNG
    pub fn media_type(&self) -> Result<MediaType> {
        MediaType::from_mime(&self.declared_type).ok_or_else(|| ClientError::InvalidFormat {
            declared: self.declared_type.clone(),
        })
    }
}

// Un payload puede pesar megas: nunca volcar los bytes a los logs
impl fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImagePayload")
            .field("filename", &self.filename)
            .field("declared_type", &self.declared_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
