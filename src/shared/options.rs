//! Zentrale Konfiguration für den Tile-Tester.
//!
//! `TileTesterOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Raster ──────────────────────────────────────────────────────────

/// Basisgröße einer Zelle in Pixeln bei Zoom 1.0.
pub const CELL_SIZE_PX: f32 = 32.0;
/// Mindestabstand (Zellen) zwischen einer beschriebenen Zelle und dem Storage-Rand.
pub const GROWTH_MARGIN: i32 = 4;
/// Wachstum wird auf ein Vielfaches dieses Werts aufgerundet.
pub const GROWTH_CHUNK: i32 = 16;
/// Kantenlänge des Storage-Raums beim Sitzungsstart.
pub const INITIAL_GRID_SIZE: i32 = 64;

// ── Raster-Snapshots ────────────────────────────────────────────────

/// Auflösung verschmolzener Kollisionszellen in Pixeln.
pub const MERGED_CELL_PX: u32 = 64;
/// Längste Kante einer Layer-Vorschau in Pixeln.
pub const THUMBNAIL_PX: u32 = 96;

// ── Viewport ────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const ZOOM_MIN: f32 = 0.1;
/// Maximaler Zoom-Faktor.
pub const ZOOM_MAX: f32 = 8.0;
/// Zoom-Schritt bei stufenweisem Zoom.
pub const ZOOM_STEP: f32 = 1.2;
/// Rand in Pixeln bei "Auf Inhalt einpassen".
pub const FIT_PADDING_PX: f32 = 24.0;
/// Halbe Kantenlänge der Griff-Trefferzone um die rechte untere Ecke.
pub const RESIZE_HANDLE_PX: f32 = 6.0;

// ── Sonstiges ───────────────────────────────────────────────────────

/// Maximale Anzahl geloggter Commands.
pub const COMMAND_LOG_CAPACITY: usize = 1000;

/// Standard-Palette des eingebauten Farbfeld-Renderers (RGBA).
pub const SWATCH_PALETTE: [[u8; 4]; 8] = [
    [231, 76, 60, 255],
    [46, 204, 113, 255],
    [52, 152, 219, 255],
    [241, 196, 15, 255],
    [155, 89, 182, 255],
    [26, 188, 156, 255],
    [230, 126, 34, 255],
    [236, 240, 241, 255],
];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Tile-Tester-Optionen.
/// Wird als `tile_tester.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileTesterOptions {
    // ── Raster ──────────────────────────────────────────────────
    /// Zellgröße in Pixeln bei Zoom 1.0
    pub cell_size_px: f32,
    /// Mindestabstand zum Storage-Rand nach jedem Schreibzugriff
    pub growth_margin: i32,
    /// Wachstumsschritt (1 = exakt so viel wie nötig)
    pub growth_chunk: i32,
    /// Start-Kantenlänge des Storage-Raums
    pub initial_grid_size: i32,

    // ── Raster-Snapshots ────────────────────────────────────────
    /// Auflösung verschmolzener Zellen
    pub merged_cell_px: u32,
    /// Maximale Kante einer Layer-Vorschau
    pub thumbnail_px: u32,

    // ── Viewport ────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor
    pub zoom_min: f32,
    /// Maximaler Zoom-Faktor
    pub zoom_max: f32,
    /// Zoom-Schritt für ZoomIn/ZoomOut
    pub zoom_step: f32,
    /// Rand beim Einpassen auf den Inhalt
    pub fit_padding_px: f32,
    /// Trefferzone des Resize-Griffs (Pixel um die Ecke)
    pub resize_handle_px: f32,

    // ── Sonstiges ───────────────────────────────────────────────
    /// Kapazität des Command-Logs
    pub command_log_capacity: usize,
    /// Palette des Farbfeld-Renderers
    pub swatch_palette: Vec<[u8; 4]>,
}

impl Default for TileTesterOptions {
    fn default() -> Self {
        Self {
            cell_size_px: CELL_SIZE_PX,
            growth_margin: GROWTH_MARGIN,
            growth_chunk: GROWTH_CHUNK,
            initial_grid_size: INITIAL_GRID_SIZE,

            merged_cell_px: MERGED_CELL_PX,
            thumbnail_px: THUMBNAIL_PX,

            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
            zoom_step: ZOOM_STEP,
            fit_padding_px: FIT_PADDING_PX,
            resize_handle_px: RESIZE_HANDLE_PX,

            command_log_capacity: COMMAND_LOG_CAPACITY,
            swatch_palette: SWATCH_PALETTE.to_vec(),
        }
    }
}

impl TileTesterOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    Self::sanitized(opts)
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ersetzt unbrauchbare Werte durch Standardwerte.
    ///
    /// Nicht endliche oder nicht positive Zahlen fallen auf den Default
    /// zurück, vertauschte Zoom-Grenzen werden getauscht. Danach gilt
    /// `0 < zoom_min <= zoom_max` und `cell_size_px >= 1`.
    pub fn sanitized(mut self) -> Self {
        let before = self.clone();

        self.cell_size_px = positive_or(self.cell_size_px, CELL_SIZE_PX).max(1.0);
        self.growth_margin = self.growth_margin.max(0);
        self.growth_chunk = self.growth_chunk.max(1);
        self.initial_grid_size = self.initial_grid_size.max(1);
        self.merged_cell_px = self.merged_cell_px.max(1);
        self.thumbnail_px = self.thumbnail_px.max(1);

        self.zoom_min = positive_or(self.zoom_min, ZOOM_MIN);
        self.zoom_max = positive_or(self.zoom_max, ZOOM_MAX);
        if self.zoom_min > self.zoom_max {
            std::mem::swap(&mut self.zoom_min, &mut self.zoom_max);
        }
        self.zoom_step = positive_or(self.zoom_step, ZOOM_STEP);
        if !self.fit_padding_px.is_finite() || self.fit_padding_px < 0.0 {
            self.fit_padding_px = FIT_PADDING_PX;
        }
        if !self.resize_handle_px.is_finite() || self.resize_handle_px < 0.0 {
            self.resize_handle_px = RESIZE_HANDLE_PX;
        }
        if self.swatch_palette.is_empty() {
            self.swatch_palette = SWATCH_PALETTE.to_vec();
        }

        if self != before {
            log::warn!("Ungültige Optionen korrigiert: {:?}", self);
        }
        self
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("tile-tester"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("tile_tester.toml")
    }
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}
