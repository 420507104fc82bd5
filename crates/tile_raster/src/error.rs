use thiserror::Error;

/// Fehler beim Kodieren oder Dekodieren von Raster-Snapshots.
#[derive(Debug, Error)]
pub enum RasterError {
    /// PNG-Kodierung oder -Dekodierung fehlgeschlagen
    #[error("PNG-Codec fehlgeschlagen: {0}")]
    Image(#[from] image::ImageError),
    /// Base64-Nutzlast der Data-URL ist ungültig
    #[error("Base64-Dekodierung fehlgeschlagen: {0}")]
    Base64(#[from] base64::DecodeError),
    /// Data-URL hat nicht das erwartete `data:image/png;base64,`-Präfix
    #[error("keine PNG-Data-URL: {0}")]
    InvalidDataUrl(String),
}
