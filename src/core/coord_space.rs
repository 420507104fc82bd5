//! Virtueller Koordinatenraum mit verschiebbarem Ursprung.
//!
//! Logische Koordinaten (was der Nutzer sieht) dürfen negativ werden,
//! Storage-Koordinaten bleiben immer in `[0, width) × [0, height)`:
//!
//! `storage = logical + origin`
//!
//! Wächst der Raum an einer niedrigen Kante, steigen `origin` und Größe
//! gemeinsam; alle gespeicherten Einträge müssen dann um dasselbe Delta
//! umgeschrieben werden (siehe `TileGrid::ensure_capacity`).

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Betragsgrenze logischer Koordinaten.
///
/// Schreibzugriffe und Wachstum jenseits davon werden verweigert, damit
/// Ursprung, Größe und Storage-Koordinaten sicher in `i32` bleiben.
pub const COORD_LIMIT: i32 = 1 << 24;

/// Ursprung und Ausdehnung des Storage-Raums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordSpace {
    /// X-Offset logisch → Storage
    pub origin_x: i32,
    /// Y-Offset logisch → Storage
    pub origin_y: i32,
    /// Breite des Storage-Raums in Zellen
    pub width: i32,
    /// Höhe des Storage-Raums in Zellen
    pub height: i32,
}

/// Ergebnis einer Wachstumsplanung.
///
/// `low` ist die Verschiebung des Ursprungs (= Umschreib-Delta aller
/// Einträge), `high` das reine Anhängen an den hohen Kanten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Growth {
    /// Zellen, die links/oben vorangestellt werden
    pub low: IVec2,
    /// Zellen, die rechts/unten angehängt werden
    pub high: IVec2,
}

impl Growth {
    /// `true`, wenn keine Kante wachsen muss.
    pub fn is_none(&self) -> bool {
        self.low == IVec2::ZERO && self.high == IVec2::ZERO
    }

    /// Delta, um das alle Storage-Koordinaten verschoben werden.
    pub fn shift(&self) -> IVec2 {
        self.low
    }
}

impl CoordSpace {
    /// Quadratischer Raum, dessen logischer Nullpunkt in der Mitte liegt.
    pub fn centered(size: i32) -> Self {
        let size = size.max(1);
        Self {
            origin_x: size / 2,
            origin_y: size / 2,
            width: size,
            height: size,
        }
    }

    /// Aktueller Ursprung als Vektor.
    pub fn origin(&self) -> IVec2 {
        IVec2::new(self.origin_x, self.origin_y)
    }

    /// Ausdehnung als Vektor.
    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    /// Logisch → Storage.
    #[inline]
    pub fn to_storage(&self, logical: IVec2) -> IVec2 {
        logical.saturating_add(self.origin())
    }

    /// Storage → logisch.
    #[inline]
    pub fn to_logical(&self, storage: IVec2) -> IVec2 {
        storage.saturating_sub(self.origin())
    }

    /// Prüft, ob eine logische Koordinate innerhalb von [`COORD_LIMIT`] liegt.
    #[inline]
    pub fn within_limits(logical: IVec2) -> bool {
        logical.x.unsigned_abs() <= COORD_LIMIT as u32
            && logical.y.unsigned_abs() <= COORD_LIMIT as u32
    }

    /// Begrenzt eine (z.B. aus Bildschirmkoordinaten berechnete) Zelle auf
    /// den zulässigen Bereich.
    #[inline]
    pub fn clamp_to_limits(logical: IVec2) -> IVec2 {
        logical.clamp(IVec2::splat(-COORD_LIMIT), IVec2::splat(COORD_LIMIT))
    }

    /// Prüft, ob eine Storage-Koordinate im Raum liegt.
    #[inline]
    pub fn contains_storage(&self, storage: IVec2) -> bool {
        storage.x >= 0 && storage.y >= 0 && storage.x < self.width && storage.y < self.height
    }

    /// Prüft, ob eine logische Koordinate im Raum liegt.
    #[inline]
    pub fn contains_logical(&self, logical: IVec2) -> bool {
        self.contains_storage(self.to_storage(logical))
    }

    /// Berechnet, wie weit der Raum wachsen muss, damit `logical` mindestens
    /// `margin` Zellen Abstand zu jeder Kante hat.
    ///
    /// `chunk > 1` rundet jedes Wachstum auf ein Vielfaches von `chunk` auf,
    /// damit wiederholtes Malen am Rand nicht jedes Mal alle Layer umschreibt.
    /// Jenseits von [`COORD_LIMIT`] wird nicht gewachsen.
    pub fn plan_growth(&self, logical: IVec2, margin: i32, chunk: i32) -> Growth {
        if !Self::within_limits(logical) {
            return Growth::default();
        }
        let margin = margin.clamp(0, COORD_LIMIT);
        let chunk = chunk.clamp(1, COORD_LIMIT);
        let storage = self.to_storage(logical);

        let low_x = low_deficit(storage.x, margin, chunk);
        let low_y = low_deficit(storage.y, margin, chunk);

        let high_x = high_deficit(
            storage.x.saturating_add(low_x),
            self.width.saturating_add(low_x),
            margin,
            chunk,
        );
        let high_y = high_deficit(
            storage.y.saturating_add(low_y),
            self.height.saturating_add(low_y),
            margin,
            chunk,
        );

        Growth {
            low: IVec2::new(low_x, low_y),
            high: IVec2::new(high_x, high_y),
        }
    }

    /// Wendet eine geplante Vergrößerung an (ohne Einträge anzufassen).
    pub fn apply_growth(&mut self, growth: &Growth) {
        self.origin_x = self.origin_x.saturating_add(growth.low.x);
        self.origin_y = self.origin_y.saturating_add(growth.low.y);
        self.width = self
            .width
            .saturating_add(growth.low.x.saturating_add(growth.high.x));
        self.height = self
            .height
            .saturating_add(growth.low.y.saturating_add(growth.high.y));
    }
}

impl Default for CoordSpace {
    fn default() -> Self {
        Self::centered(32)
    }
}

fn round_up(cells: i32, chunk: i32) -> i32 {
    if chunk <= 1 {
        cells
    } else {
        cells.saturating_add(chunk - 1) / chunk * chunk
    }
}

fn low_deficit(storage: i32, margin: i32, chunk: i32) -> i32 {
    if storage < margin {
        round_up(margin.saturating_sub(storage), chunk)
    } else {
        0
    }
}

fn high_deficit(storage: i32, extent: i32, margin: i32, chunk: i32) -> i32 {
    // Letzte gültige Zelle ist extent - 1; verlangt: storage + margin <= extent - 1
    let needed = storage.saturating_add(margin).saturating_add(1);
    if needed > extent {
        round_up(needed.saturating_sub(extent), chunk)
    } else {
        0
    }
}
