//! Begrenztes Command-Log (Diagnose und Tests).

use super::AppCommand;
use crate::shared::options::COMMAND_LOG_CAPACITY;

/// Speichert ausgeführte Commands in Reihenfolge.
pub struct CommandLog {
    entries: Vec<AppCommand>,
    capacity: usize,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log mit Standardkapazität.
    pub fn new() -> Self {
        Self::with_capacity(COMMAND_LOG_CAPACITY)
    }

    /// Erstellt ein leeres Command-Log mit eigener Kapazität (mindestens 2).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(2),
        }
    }

    /// Ändert die Kapazität; überzählige ältere Einträge werden verworfen.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(2);
        if self.entries.len() > self.capacity {
            let excess = self.entries.len() - self.capacity;
            self.entries.drain(..excess);
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Bei voller Kapazität wird die ältere Hälfte verworfen.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= self.capacity {
            self.entries.drain(..self.capacity / 2);
        }
        self.entries.push(command.clone());
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}
