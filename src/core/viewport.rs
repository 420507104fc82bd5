//! 2D-Viewport für Pan und Zoom über dem Kachelraster.
//!
//! Bildschirmkoordinaten hängen an Storage-Koordinaten:
//!
//! `screen = storage * cell_size * zoom + pan`
//!
//! Verschiebt sich der Ursprung des Koordinatenraums um `delta`, muss
//! `pan` um `-delta * cell_px` korrigiert werden, sonst springt der Inhalt.

use super::{CellBounds, CoordSpace};
use glam::{IVec2, Vec2};

/// Pan/Zoom-Zustand der Kachelansicht.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// Bildschirm-Offset von Storage-Zelle (0,0) in Pixeln
    pub pan: Vec2,
    /// Zoom-Faktor (1.0 = `cell_size` Pixel pro Zelle)
    pub zoom: f32,
    /// Basisgröße einer Zelle in Pixeln
    pub cell_size: f32,
    /// Viewport-Größe in Pixeln
    pub size: Vec2,
}

impl Viewport {
    /// Erstellt einen Viewport ohne Pan bei Zoom 1.0.
    pub fn new(cell_size: f32) -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
            cell_size: cell_size.max(1.0),
            size: Vec2::new(1280.0, 720.0),
        }
    }

    /// Aktuelle Zellgröße auf dem Bildschirm.
    #[inline]
    pub fn cell_px(&self) -> f32 {
        self.cell_size * self.zoom
    }

    /// Storage-Position (in Zellen, auch fraktional) → Bildschirm.
    pub fn storage_to_screen(&self, storage: Vec2) -> Vec2 {
        storage * self.cell_px() + self.pan
    }

    /// Bildschirm → Storage-Position in Zellen.
    pub fn screen_to_storage(&self, screen: Vec2) -> Vec2 {
        (screen - self.pan) / self.cell_px()
    }

    /// Bildschirmposition einer logischen Gitterlinien-Ecke.
    pub fn logical_to_screen(&self, space: &CoordSpace, logical: IVec2) -> Vec2 {
        self.storage_to_screen(space.to_storage(logical).as_vec2())
    }

    /// Logische Zelle unter einer Bildschirmposition (abgerundet).
    pub fn screen_to_cell(&self, space: &CoordSpace, screen: Vec2) -> IVec2 {
        space.to_logical(self.screen_to_storage(screen).floor().as_ivec2())
    }

    /// Nächster logischer Gitterpunkt zu einer Bildschirmposition.
    ///
    /// Auswahlrechtecke spannen zwischen Gitterpunkten auf; der Endpunkt
    /// ist exklusiv.
    pub fn screen_to_lattice(&self, space: &CoordSpace, screen: Vec2) -> IVec2 {
        space.to_logical(self.screen_to_storage(screen).round().as_ivec2())
    }

    /// Verschiebt den Viewport um ein Pixel-Delta.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Zoomt mit Begrenzung. Mit `focus` bleibt der Punkt unter dem
    /// Mauszeiger an derselben Bildschirmposition.
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32, focus: Option<Vec2>) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let anchor = focus.map(|screen| (screen, self.screen_to_storage(screen)));
        self.zoom = clamp_zoom(self.zoom * factor, min, max);
        if let Some((screen, storage)) = anchor {
            self.pan = screen - storage * self.cell_px();
        }
    }

    /// Gleicht eine Ursprungsverschiebung aus, damit logische Positionen
    /// auf dem Bildschirm stehen bleiben.
    pub fn compensate_origin_shift(&mut self, delta: IVec2) {
        self.pan -= delta.as_vec2() * self.cell_px();
    }

    /// Sichtbarer Storage-Zellbereich `[min, max)` (kann über den
    /// Storage-Raum hinausragen).
    pub fn visible_storage_range(&self) -> (IVec2, IVec2) {
        let min = self.screen_to_storage(Vec2::ZERO).floor().as_ivec2();
        let max = self.screen_to_storage(self.size).ceil().as_ivec2();
        (min, max)
    }

    /// Setzt den Pan so, dass ein Storage-Punkt in der Bildschirmmitte liegt.
    pub fn center_on_storage(&mut self, storage: Vec2) {
        self.pan = self.size * 0.5 - storage * self.cell_px();
    }

    /// Zentriert und zoomt auf einen Storage-Zellbereich.
    ///
    /// `padding` ist der Rand in Pixeln auf jeder Seite.
    pub fn fit_to(&mut self, bounds: CellBounds, padding: f32, min_zoom: f32, max_zoom: f32) {
        let cells = bounds.size().as_vec2();
        let available = (self.size - Vec2::splat(2.0 * padding)).max(Vec2::ONE);
        let zoom_x = available.x / (cells.x * self.cell_size);
        let zoom_y = available.y / (cells.y * self.cell_size);
        self.zoom = clamp_zoom(zoom_x.min(zoom_y), min_zoom, max_zoom);

        self.center_on_storage(bounds.min.as_vec2() + cells * 0.5);
    }
}

/// Begrenzt einen Zoom-Faktor, ohne bei vertauschten Grenzen zu paniken.
///
/// Ergebnis ist immer endlich und positiv; fehlerhafte Grenzen werden
/// ignoriert.
fn clamp_zoom(value: f32, min: f32, max: f32) -> f32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let clamped = value.max(lo).min(hi);
    if clamped.is_finite() && clamped > 0.0 {
        clamped
    } else {
        1.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(32.0)
    }
}
