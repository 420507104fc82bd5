//! Transformationen eines Captures: Löschen, Verschieben, gekacheltes Skalieren.
//!
//! Reihenfolge ist immer: erst `ensure_capacity` für alle Eckzellen des
//! Ziels, dann schreiben. So verschiebt kein Ursprungswechsel mehr die
//! Zielkoordinaten, während bereits geschrieben wird.

use super::{CapturedEntry, CapturedSet, CoordSpace, TileGrid, TileRect, Viewport};
use glam::IVec2;

/// Entfernt jeden eingesammelten Eintrag aus seinem Herkunfts-Layer.
///
/// Gibt die Anzahl tatsächlich entfernter Einträge zurück.
pub fn clear_from_layers(grid: &mut TileGrid, captured: &CapturedSet) -> usize {
    let mut removed = 0;
    for entry in &captured.entries {
        let cell = captured.rect.min + entry.local;
        if grid.set_in_layer(entry.layer_id, cell, None) {
            removed += 1;
        }
    }
    removed
}

/// Verschiebt ein Capture an eine neue linke obere Ecke.
///
/// Gibt die neuen Auswahlgrenzen zurück (auch bei leerem Capture). Liegt
/// das Ziel jenseits von [`COORD_LIMIT`](super::COORD_LIMIT), wird der
/// Inhalt an seiner Ausgangsposition wieder eingefügt.
pub fn move_to(
    grid: &mut TileGrid,
    viewport: &mut Viewport,
    captured: &CapturedSet,
    new_min: IVec2,
    margin: i32,
) -> TileRect {
    let target = captured.rect.moved_to(new_min);
    if captured.is_empty() {
        return target;
    }

    if !reserve_corners(grid, viewport, &target, margin) {
        return restore_in_place(grid, captured);
    }
    for entry in &captured.entries {
        reinsert(grid, entry, new_min + entry.local);
    }

    log::debug!(
        "Capture verschoben: {} -> {} ({} Einträge)",
        captured.rect.min,
        new_min,
        captured.entries.len()
    );
    target
}

/// Füllt `target` durch Wiederholen des Captures (Kacheln).
///
/// Kopien, die über `target` hinausragen würden, werden abgeschnitten,
/// nicht umgebrochen. Gibt die neuen Auswahlgrenzen zurück; ein Ziel
/// außerhalb des zulässigen Bereichs verhält sich wie bei [`move_to`].
pub fn resize_tiled(
    grid: &mut TileGrid,
    viewport: &mut Viewport,
    captured: &CapturedSet,
    target: TileRect,
    margin: i32,
) -> TileRect {
    let orig = captured.rect.size;
    if captured.is_empty() || target.is_empty() || orig.x <= 0 || orig.y <= 0 {
        return target;
    }

    if !reserve_corners(grid, viewport, &target, margin) {
        return restore_in_place(grid, captured);
    }

    let repeat_x = (target.size.x + orig.x - 1) / orig.x;
    let repeat_y = (target.size.y + orig.y - 1) / orig.y;
    let mut written = 0usize;

    for ry in 0..repeat_y {
        for rx in 0..repeat_x {
            let offset = IVec2::new(rx * orig.x, ry * orig.y);
            for entry in &captured.entries {
                let local = offset + entry.local;
                if local.x >= target.size.x || local.y >= target.size.y {
                    continue;
                }
                reinsert(grid, entry, target.min + local);
                written += 1;
            }
        }
    }

    log::debug!(
        "Gekacheltes Skalieren {}x{} -> {}x{}: {} Einträge geschrieben",
        orig.x,
        orig.y,
        target.size.x,
        target.size.y,
        written
    );
    target
}

/// Reserviert Speicherplatz für alle Eckzellen eines Zielrechtecks.
///
/// `false`, wenn das Rechteck über [`COORD_LIMIT`](super::COORD_LIMIT)
/// hinausreicht; dann wird nichts verändert.
pub(crate) fn reserve_corners(
    grid: &mut TileGrid,
    viewport: &mut Viewport,
    target: &TileRect,
    margin: i32,
) -> bool {
    let far = target.min.saturating_add(target.size);
    if !CoordSpace::within_limits(target.min) || !CoordSpace::within_limits(far) {
        log::warn!(
            "Ziel {} (Größe {}) liegt außerhalb des zulässigen Bereichs",
            target.min,
            target.size
        );
        return false;
    }
    for corner in target.corner_cells() {
        grid.ensure_capacity(corner, margin, viewport);
    }
    true
}

/// Fügt ein Capture unverändert an seiner Ausgangsposition ein.
fn restore_in_place(grid: &mut TileGrid, captured: &CapturedSet) -> TileRect {
    for entry in &captured.entries {
        reinsert(grid, entry, captured.rect.min + entry.local);
    }
    captured.rect
}

/// Schreibt einen Eintrag zurück in seinen Herkunfts-Layer.
///
/// Existiert der Layer nicht mehr, landet der Eintrag im aktiven Layer.
fn reinsert(grid: &mut TileGrid, entry: &CapturedEntry, cell: IVec2) {
    let tile = Some(entry.tile.clone());
    if grid.stack().index_of(entry.layer_id).is_some() {
        grid.set_in_layer(entry.layer_id, cell, tile);
    } else {
        grid.set_active(cell, tile);
    }
}
