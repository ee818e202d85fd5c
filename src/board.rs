use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    Cell, CellCount, CellValue, Coord, GameConfig, GameError, NeighborIter, NeighborIterExt, Pos,
    Result,
};

/// The puzzle grid: cell matrix, bomb placement, and reveal bookkeeping.
///
/// A board is created empty and populated by a single [`Board::generate`]
/// call; a second call fails with [`GameError::AlreadyGenerated`]. Changing
/// the dimensions or starting a new game means constructing a fresh board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    bomb_count: CellCount,
    revealed_count: CellCount,
    generated: bool,
}

impl Board {
    /// Allocates a `width x height` grid of default cells.
    pub fn new(width: Coord, height: Coord) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimension);
        }
        Ok(Self {
            cells: Array2::default((height, width)),
            bomb_count: 0,
            revealed_count: 0,
            generated: false,
        })
    }

    /// Allocates and generates a board in one step.
    pub fn from_config<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<Self> {
        let mut board = Self::new(config.width, config.height)?;
        board.generate(config.bomb_count, rng)?;
        Ok(board)
    }

    /// Builds a board with bombs at explicit positions, for deterministic
    /// setups. Duplicate positions collapse into a single bomb.
    pub fn with_bombs(width: Coord, height: Coord, bombs: &[Pos]) -> Result<Self> {
        let mut board = Self::new(width, height)?;

        for &pos in bombs {
            let pos = board.validate_pos(pos)?;
            board.cells[pos].set_value(CellValue::Bomb);
        }

        board.bomb_count = board.count_bombs();
        board.fill_adjacency();
        board.generated = true;
        Ok(board)
    }

    /// Places `bomb_count` bombs uniformly at random (sampling without
    /// replacement, every placement of that size equally likely) and fills
    /// in the adjacency counts of every non-bomb cell.
    pub fn generate<R: Rng>(&mut self, bomb_count: CellCount, rng: &mut R) -> Result<()> {
        if self.generated {
            return Err(GameError::AlreadyGenerated);
        }
        if bomb_count >= self.total_cells() {
            return Err(GameError::InvalidBombCount);
        }

        // Each draw picks an ordinal among the still-free cells and walks
        // the flat grid to that free slot, which keeps every subset of the
        // requested size equally likely.
        let mut free_cells = self.total_cells();
        let mut placed = 0;
        {
            let cells = self.cells.as_slice_mut().expect("layout should be standard");
            while placed < bomb_count {
                let mut slot = rng.random_range(0..free_cells);
                for cell in cells.iter_mut() {
                    if cell.value().is_bomb() {
                        continue;
                    }
                    if slot == 0 {
                        cell.set_value(CellValue::Bomb);
                        placed += 1;
                        free_cells -= 1;
                        break;
                    }
                    slot -= 1;
                }
            }
        }

        let actual = self.count_bombs();
        if actual != bomb_count {
            log::warn!(
                "Generated bomb count mismatch, actual: {}, requested: {}",
                actual,
                bomb_count
            );
        }

        self.fill_adjacency();
        self.bomb_count = bomb_count;
        self.generated = true;
        log::debug!(
            "Generated {}x{} board with {} bombs",
            self.width(),
            self.height(),
            bomb_count
        );
        Ok(())
    }

    /// Returns a copy of the cell at `(row, col)`.
    pub fn cell(&self, row: Coord, col: Coord) -> Result<Cell> {
        let pos = self.validate_pos((row, col))?;
        Ok(self.cells[pos])
    }

    pub fn width(&self) -> Coord {
        self.cells.dim().1
    }

    pub fn height(&self) -> Coord {
        self.cells.dim().0
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len()
    }

    pub fn bomb_count(&self) -> CellCount {
        self.bomb_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    /// Number of non-bomb cells; revealing all of them wins the game.
    pub fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.bomb_count
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    pub(crate) fn validate_pos(&self, pos: Pos) -> Result<Pos> {
        let (rows, cols) = self.cells.dim();
        if pos.0 < rows && pos.1 < cols {
            Ok(pos)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub(crate) fn cell_unchecked(&self, pos: Pos) -> Cell {
        self.cells[pos]
    }

    /// Marks an unrevealed cell revealed and counts the transition.
    pub(crate) fn reveal_cell(&mut self, pos: Pos) {
        debug_assert!(!self.cells[pos].is_revealed());
        self.cells[pos].reveal();
        self.revealed_count += 1;
    }

    pub(crate) fn toggle_flag_at(&mut self, pos: Pos) {
        self.cells[pos].toggle_flag();
    }

    /// Forces every cell visible without touching `revealed_count`; this is
    /// a terminal debug action, not a game move.
    pub(crate) fn force_reveal_all(&mut self) {
        for cell in &mut self.cells {
            cell.reveal();
        }
    }

    pub(crate) fn iter_neighbors(&self, pos: Pos) -> NeighborIter {
        self.cells.iter_neighbors(pos)
    }

    fn count_bombs(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.value().is_bomb())
            .count()
    }

    fn fill_adjacency(&mut self) {
        let (rows, cols) = self.cells.dim();
        for row in 0..rows {
            for col in 0..cols {
                if self.cells[(row, col)].value().is_bomb() {
                    continue;
                }
                let count: u8 = self
                    .cells
                    .iter_neighbors((row, col))
                    .filter(|&pos| self.cells[pos].value().is_bomb())
                    .count()
                    .try_into()
                    .unwrap();
                self.cells[(row, col)].set_value(CellValue::from_adjacent_count(count));
            }
        }
    }
}
