//! Rechteckige Zellbereiche in logischen Koordinaten.

use glam::IVec2;

/// Zellrechteck `[min, min + size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileRect {
    /// Linke obere Zelle
    pub min: IVec2,
    /// Ausdehnung in Zellen
    pub size: IVec2,
}

impl TileRect {
    /// Rechteck aus Ursprung und Größe.
    pub fn new(min: IVec2, size: IVec2) -> Self {
        Self { min, size }
    }

    /// Normalisiert zwei Gitterpunkte (Zellecken) zu einem Rechteck.
    ///
    /// Die Reihenfolge spielt keine Rolle; gleiche Punkte ergeben ein
    /// leeres Rechteck.
    pub fn from_corners(a: IVec2, b: IVec2) -> Self {
        Self {
            min: a.min(b),
            size: (a - b).abs(),
        }
    }

    /// `true` bei Breite oder Höhe ≤ 0.
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }

    /// Anzahl der Zellen.
    pub fn area(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            i64::from(self.size.x) * i64::from(self.size.y)
        }
    }

    /// Exklusive rechte untere Ecke.
    pub fn max_exclusive(&self) -> IVec2 {
        self.min + self.size
    }

    /// Prüft, ob eine Zelle im Rechteck liegt.
    pub fn contains(&self, cell: IVec2) -> bool {
        let max = self.max_exclusive();
        cell.x >= self.min.x && cell.y >= self.min.y && cell.x < max.x && cell.y < max.y
    }

    /// Rechte untere Zelle (inklusive).
    pub fn max_cell(&self) -> IVec2 {
        self.max_exclusive() - IVec2::ONE
    }

    /// Dasselbe Rechteck an neuer Position.
    pub fn moved_to(&self, min: IVec2) -> Self {
        Self {
            min,
            size: self.size,
        }
    }

    /// Die vier Eckzellen (inklusive). Leer bei leerem Rechteck.
    pub fn corner_cells(&self) -> Vec<IVec2> {
        if self.is_empty() {
            return Vec::new();
        }
        let max = self.max_cell();
        vec![
            self.min,
            IVec2::new(max.x, self.min.y),
            IVec2::new(self.min.x, max.y),
            max,
        ]
    }

    /// Alle Zellen zeilenweise (oben links → unten rechts).
    pub fn cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        let (w, h) = if self.is_empty() {
            (0, 0)
        } else {
            (self.size.x, self.size.y)
        };
        (0..h).flat_map(move |y| (0..w).map(move |x| self.min + IVec2::new(x, y)))
    }
}
