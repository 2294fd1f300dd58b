//! Entries of the move-history list.

use serde::{Deserialize, Serialize};

/// One selectable entry in the move-history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Index into the timeline (0 = game start).
    pub move_number: usize,
    /// Whether this entry is the displayed board.
    pub is_current: bool,
}

impl HistoryEntry {
    /// Creates a new entry.
    pub fn new(move_number: usize, is_current: bool) -> Self {
        Self {
            move_number,
            is_current,
        }
    }

    /// Label shown in the history list.
    ///
    /// Move 0 is always "Go to game start", even while displayed.
    pub fn label(&self) -> String {
        match (self.move_number, self.is_current) {
            (0, _) => "Go to game start".to_string(),
            (n, true) => format!("You are at move #{}", n),
            (n, false) => format!("Go to move #{}", n),
        }
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(HistoryEntry::new(0, true).label(), "Go to game start");
        assert_eq!(HistoryEntry::new(0, false).label(), "Go to game start");
        assert_eq!(HistoryEntry::new(3, true).label(), "You are at move #3");
        assert_eq!(HistoryEntry::new(3, false).to_string(), "Go to move #3");
    }
}
