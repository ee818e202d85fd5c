use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{CellCount, Coord, GameError, Result};

/// Named bomb-density presets, as whole percentages of the total cell count.
///
/// Injected into [`GameConfig::from_difficulty`] rather than read from a
/// global, so hosts can extend or replace the presets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyTable {
    percentages: HashMap<String, u8>,
}

impl DifficultyTable {
    pub fn empty() -> Self {
        Self {
            percentages: HashMap::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, percent: u8) {
        let _ = self.percentages.insert(name.into(), percent);
    }

    pub fn bomb_percent(&self, name: &str) -> Result<u8> {
        self.percentages
            .get(name)
            .copied()
            .ok_or_else(|| GameError::InvalidDifficulty(name.to_owned()))
    }
}

impl Default for DifficultyTable {
    fn default() -> Self {
        let mut table = Self::empty();
        for (name, percent) in [
            ("beginner", 5),
            ("easy", 10),
            ("medium", 15),
            ("hard", 20),
            ("expert", 25),
        ] {
            table.insert(name, percent);
        }
        table
    }
}

/// Validated board construction parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
    pub bomb_count: CellCount,
}

impl GameConfig {
    pub fn new(width: Coord, height: Coord, bomb_count: CellCount) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimension);
        }
        if bomb_count >= width * height {
            return Err(GameError::InvalidBombCount);
        }
        Ok(Self {
            width,
            height,
            bomb_count,
        })
    }

    /// Derives the bomb count from a named difficulty preset, truncating
    /// `percent * width * height / 100` to an integer.
    pub fn from_difficulty(
        width: Coord,
        height: Coord,
        difficulty: &str,
        table: &DifficultyTable,
    ) -> Result<Self> {
        let percent = table.bomb_percent(difficulty)?;
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimension);
        }
        let bomb_count = CellCount::from(percent) * width * height / 100;
        Self::new(width, height, bomb_count)
    }

    pub const fn total_cells(&self) -> CellCount {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_percentages_match_documented_table() {
        let table = DifficultyTable::default();

        assert_eq!(table.bomb_percent("beginner"), Ok(5));
        assert_eq!(table.bomb_percent("easy"), Ok(10));
        assert_eq!(table.bomb_percent("medium"), Ok(15));
        assert_eq!(table.bomb_percent("hard"), Ok(20));
        assert_eq!(table.bomb_percent("expert"), Ok(25));
    }

    #[test]
    fn unknown_difficulty_is_rejected() {
        let table = DifficultyTable::default();

        assert_eq!(
            table.bomb_percent("nightmare"),
            Err(GameError::InvalidDifficulty("nightmare".to_owned()))
        );
    }

    #[test]
    fn custom_difficulty_can_be_inserted() {
        let mut table = DifficultyTable::default();
        table.insert("nightmare", 40);

        assert_eq!(table.bomb_percent("nightmare"), Ok(40));
    }

    #[test]
    fn bomb_count_truncates_toward_zero() {
        let table = DifficultyTable::default();

        // 15% of 9 cells is 1.35, truncated to 1
        let config = GameConfig::from_difficulty(3, 3, "medium", &table).unwrap();
        assert_eq!(config.bomb_count, 1);

        // every preset of a 1x1 board truncates to 0
        for name in ["beginner", "easy", "medium", "hard", "expert"] {
            let config = GameConfig::from_difficulty(1, 1, name, &table).unwrap();
            assert_eq!(config.bomb_count, 0);
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(GameConfig::new(0, 5, 0), Err(GameError::InvalidDimension));
        assert_eq!(GameConfig::new(5, 0, 0), Err(GameError::InvalidDimension));

        let table = DifficultyTable::default();
        assert_eq!(
            GameConfig::from_difficulty(0, 3, "easy", &table),
            Err(GameError::InvalidDimension)
        );
    }

    #[test]
    fn bomb_count_must_leave_a_safe_cell() {
        assert_eq!(GameConfig::new(2, 2, 4), Err(GameError::InvalidBombCount));
        assert!(GameConfig::new(2, 2, 3).is_ok());
    }
}
