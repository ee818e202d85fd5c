use serde::{Deserialize, Serialize};

/// Value assigned to a cell during board generation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellValue {
    /// No bomb here and no bombs in the Moore neighborhood.
    Empty,
    /// No bomb here, but 1 to 8 bombs among the neighbors.
    Adjacent(u8),
    /// A bomb.
    Bomb,
}

impl CellValue {
    pub const fn is_bomb(self) -> bool {
        matches!(self, Self::Bomb)
    }

    pub(crate) const fn from_adjacent_count(count: u8) -> Self {
        if count == 0 {
            Self::Empty
        } else {
            Self::Adjacent(count)
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        Self::Empty
    }
}

/// A single board cell.
///
/// Fields are private so the value can only be written by board generation
/// and so a cell can never read as revealed and flagged at the same time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    value: CellValue,
    revealed: bool,
    flagged: bool,
}

impl Cell {
    pub const fn value(self) -> CellValue {
        self.value
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    pub(crate) fn set_value(&mut self, value: CellValue) {
        self.value = value;
    }

    /// Marks the cell revealed, dropping any flag.
    pub(crate) fn reveal(&mut self) {
        self.revealed = true;
        self.flagged = false;
    }

    /// Toggles the flag on an unrevealed cell, a no-op on revealed ones.
    pub(crate) fn toggle_flag(&mut self) {
        if !self.revealed {
            self.flagged = !self.flagged;
        }
    }
}
