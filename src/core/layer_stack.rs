//! Geordneter Layer-Stapel (Index 0 = unten).

use super::{Layer, LayerId, TileRef};
use glam::IVec2;

/// Ein Eintrag aus `LayerStack::compose`.
#[derive(Debug, Clone, Copy)]
pub struct ComposedEntry<'a> {
    /// Stapel-Index des Layers
    pub layer_index: usize,
    /// Der Layer selbst (für Deckkraft/Name)
    pub layer: &'a Layer,
    /// Storage-Koordinate der Zelle
    pub pos: IVec2,
    /// Gespeicherte Referenz
    pub tile: &'a TileRef,
}

/// Layer-Stapel mit aktivem Layer. Nie leer.
#[derive(Debug, Clone)]
pub struct LayerStack {
    layers: Vec<Layer>,
    active: usize,
    next_id: LayerId,
}

impl LayerStack {
    /// Erstellt einen Stapel mit genau einem leeren Layer.
    pub fn new() -> Self {
        Self {
            layers: vec![Layer::new(1, "Layer 1")],
            active: 0,
            next_id: 2,
        }
    }

    /// Baut einen Stapel aus geladenen Layern. `None` bei leerer Liste.
    pub fn from_layers(layers: Vec<Layer>, active: usize) -> Option<Self> {
        if layers.is_empty() {
            return None;
        }
        let next_id = layers.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        let active = active.min(layers.len() - 1);
        Some(Self {
            layers,
            active,
            next_id,
        })
    }

    /// Anzahl der Layer (immer ≥ 1).
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Der Stapel ist per Invariante nie leer.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Alle Layer von unten nach oben.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub(crate) fn layers_mut(&mut self) -> impl Iterator<Item = &mut Layer> {
        self.layers.iter_mut()
    }

    /// Layer an Stapel-Index.
    pub fn get(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    /// Mutabler Layer an Stapel-Index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Layer> {
        self.layers.get_mut(index)
    }

    /// Stapel-Index eines Layers.
    pub fn index_of(&self, id: LayerId) -> Option<usize> {
        self.layers.iter().position(|l| l.id == id)
    }

    /// Layer per ID.
    pub fn by_id(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    fn by_id_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id == id)
    }

    /// Index des aktiven Layers.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Der aktive Layer.
    pub fn active_layer(&self) -> &Layer {
        &self.layers[self.active]
    }

    /// Aktiviert einen Layer per ID.
    pub fn set_active(&mut self, id: LayerId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }

    /// Liefert alle Einträge in Render-Reihenfolge (Layer unten → oben).
    ///
    /// Innerhalb eines Layers gibt es keine Reihenfolgegarantie. Deckkraft
    /// wird nicht angewendet; das ist Sache des Konsumenten.
    pub fn compose(&self, visible_only: bool) -> impl Iterator<Item = ComposedEntry<'_>> {
        self.layers
            .iter()
            .enumerate()
            .filter(move |(_, layer)| !visible_only || layer.visible)
            .flat_map(|(layer_index, layer)| {
                layer.entries().map(move |(pos, tile)| ComposedEntry {
                    layer_index,
                    layer,
                    pos,
                    tile,
                })
            })
    }

    /// Fügt einen leeren Layer direkt über `above_index` ein (Default: über
    /// dem aktiven Layer). Der neue Layer wird aktiv.
    pub fn add_layer(&mut self, above_index: Option<usize>) -> &Layer {
        let base = above_index
            .unwrap_or(self.active)
            .min(self.layers.len() - 1);
        let insert_at = base + 1;

        let id = self.next_id;
        self.next_id += 1;
        self.layers
            .insert(insert_at, Layer::new(id, format!("Layer {id}")));
        self.active = insert_at;

        log::info!("Layer {} an Position {} eingefügt", id, insert_at);
        &self.layers[insert_at]
    }

    /// Entfernt einen Layer. Abgelehnt (`false`), wenn es der letzte ist
    /// oder die ID unbekannt ist.
    pub fn remove_layer(&mut self, id: LayerId) -> bool {
        if self.layers.len() <= 1 {
            log::info!("Letzter Layer kann nicht gelöscht werden");
            return false;
        }
        let Some(index) = self.index_of(id) else {
            return false;
        };

        self.layers.remove(index);
        if index == self.active {
            // Layer, der jetzt an derselben Stelle liegt, sonst der oberste
            self.active = index.min(self.layers.len() - 1);
        } else if index < self.active {
            self.active -= 1;
        }

        log::info!("Layer {} entfernt ({} verbleibend)", id, self.layers.len());
        true
    }

    /// Verschiebt einen Layer im Stapel. Der aktive Layer bleibt aktiv.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let len = self.layers.len();
        if from >= len || to >= len {
            return false;
        }
        if from == to {
            return true;
        }

        let active_id = self.layers[self.active].id;
        let layer = self.layers.remove(from);
        self.layers.insert(to, layer);
        if let Some(index) = self.index_of(active_id) {
            self.active = index;
        }
        true
    }

    /// Setzt die Deckkraft eines Layers.
    pub fn set_opacity(&mut self, id: LayerId, value: f32) -> bool {
        match self.by_id_mut(id) {
            Some(layer) => {
                layer.set_opacity(value);
                true
            }
            None => false,
        }
    }

    /// Setzt die Sichtbarkeit eines Layers.
    pub fn set_visible(&mut self, id: LayerId, visible: bool) -> bool {
        match self.by_id_mut(id) {
            Some(layer) => {
                layer.visible = visible;
                true
            }
            None => false,
        }
    }

    /// Benennt einen Layer um.
    pub fn rename(&mut self, id: LayerId, name: impl Into<String>) -> bool {
        match self.by_id_mut(id) {
            Some(layer) => {
                layer.name = name.into();
                true
            }
            None => false,
        }
    }
}

impl Default for LayerStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileKind;

    fn ids(stack: &LayerStack) -> Vec<LayerId> {
        stack.layers().iter().map(|l| l.id).collect()
    }

    #[test]
    fn starts_with_one_layer() {
        let stack = LayerStack::new();
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.active_index(), 0);
    }

    #[test]
    fn add_layer_inserts_above_active_and_activates() {
        let mut stack = LayerStack::new();
        let second = stack.add_layer(None).id;
        assert_eq!(ids(&stack), vec![1, second]);
        assert_eq!(stack.active_layer().id, second);

        // Über Index 0 einfügen → landet zwischen 1 und second
        let third = stack.add_layer(Some(0)).id;
        assert_eq!(ids(&stack), vec![1, third, second]);
        assert_eq!(stack.active_index(), 1);
    }

    #[test]
    fn remove_last_layer_is_rejected() {
        let mut stack = LayerStack::new();
        assert!(!stack.remove_layer(1));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn removing_active_layer_activates_same_index_or_top() {
        let mut stack = LayerStack::new();
        let b = stack.add_layer(None).id;
        let c = stack.add_layer(None).id;
        // [1, b, c], aktiv = b
        stack.set_active(b);
        assert!(stack.remove_layer(b));
        assert_eq!(stack.active_layer().id, c);

        // aktiv = c (oberster) → nach Entfernen ist 1 der oberste
        assert!(stack.remove_layer(c));
        assert_eq!(stack.active_layer().id, 1);
    }

    #[test]
    fn removing_layer_below_active_keeps_active_layer() {
        let mut stack = LayerStack::new();
        let b = stack.add_layer(None).id;
        assert!(stack.remove_layer(1));
        assert_eq!(stack.active_layer().id, b);
    }

    #[test]
    fn reorder_keeps_entries_and_active_layer() {
        let mut stack = LayerStack::new();
        stack
            .get_mut(0)
            .expect("Layer 0")
            .set(IVec2::new(3, 3), Some(TileRef::symbolic(TileKind::Shape, "a", 0)));
        let b = stack.add_layer(None).id;
        assert!(stack.reorder(0, 1));
        assert_eq!(ids(&stack), vec![b, 1]);
        assert_eq!(stack.active_layer().id, b);
        assert!(stack.layers()[1].get(IVec2::new(3, 3)).is_some());
        assert!(!stack.reorder(0, 5));
    }

    #[test]
    fn compose_skips_hidden_layers_in_bottom_to_top_order() {
        let mut stack = LayerStack::new();
        let pos = IVec2::new(1, 1);
        stack
            .get_mut(0)
            .expect("Layer 0")
            .set(pos, Some(TileRef::symbolic(TileKind::Shape, "bottom", 0)));
        let top = stack.add_layer(None).id;
        stack
            .get_mut(1)
            .expect("Layer 1")
            .set(pos, Some(TileRef::symbolic(TileKind::Shape, "top", 0)));

        let order: Vec<usize> = stack.compose(true).map(|e| e.layer_index).collect();
        assert_eq!(order, vec![0, 1]);

        stack.set_visible(top, false);
        assert_eq!(stack.compose(true).count(), 1);
        assert_eq!(stack.compose(false).count(), 2);
    }
}
