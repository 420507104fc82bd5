//! Unveränderlicher RGBA-Schnappschuss einer Zelle.
//!
//! Merged-Zellen werden beim Capture eingefroren und danach nie wieder
//! verändert. Der Schnappschuss teilt seine Pixel per `Arc`, damit Kopien
//! beim Platzieren und Capturen O(1) bleiben.

use crate::RasterError;
use base64::Engine;
use image::{ImageFormat, RgbaImage};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::io::Cursor;
use std::sync::Arc;

const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Pixel-Schnappschuss, serialisiert als PNG-Data-URL.
#[derive(Clone)]
pub struct RasterSnapshot {
    image: Arc<RgbaImage>,
}

impl RasterSnapshot {
    /// Friert ein fertiges Bild als Snapshot ein.
    pub fn new(image: RgbaImage) -> Self {
        Self {
            image: Arc::new(image),
        }
    }

    /// Read-only Zugriff auf die Pixel.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Breite in Pixeln.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Höhe in Pixeln.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Kodiert den Snapshot verlustfrei als PNG.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, RasterError> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Dekodiert einen Snapshot aus PNG-Bytes.
    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self, RasterError> {
        let decoded = image::load_from_memory_with_format(bytes, ImageFormat::Png)?;
        Ok(Self::new(decoded.to_rgba8()))
    }

    /// Kodiert den Snapshot als `data:image/png;base64,…`.
    pub fn to_data_url(&self) -> Result<String, RasterError> {
        let png = self.to_png_bytes()?;
        let payload = base64::engine::general_purpose::STANDARD.encode(png);
        Ok(format!("{DATA_URL_PREFIX}{payload}"))
    }

    /// Dekodiert einen Snapshot aus einer PNG-Data-URL.
    pub fn from_data_url(url: &str) -> Result<Self, RasterError> {
        let Some(payload) = url.strip_prefix(DATA_URL_PREFIX) else {
            let head: String = url.chars().take(32).collect();
            return Err(RasterError::InvalidDataUrl(head));
        };
        let png = base64::engine::general_purpose::STANDARD.decode(payload.trim())?;
        Self::from_png_bytes(&png)
    }
}

impl PartialEq for RasterSnapshot {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.image, &other.image)
            || (self.image.dimensions() == other.image.dimensions()
                && self.image.as_raw() == other.image.as_raw())
    }
}

impl Eq for RasterSnapshot {}

impl fmt::Debug for RasterSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RasterSnapshot")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl Serialize for RasterSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let url = self.to_data_url().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&url)
    }
}

impl<'de> Deserialize<'de> for RasterSnapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let url = String::deserialize(deserializer)?;
        Self::from_data_url(&url).map_err(serde::de::Error::custom)
    }
}
