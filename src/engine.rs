use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::{Board, CellValue, Coord, Result};

/// Outcome of a mutating reveal, so callers never poll board state to learn
/// whether the game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    Continuing,
    HitBomb,
    Won,
}

impl RevealOutcome {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::HitBomb | Self::Won)
    }
}

/// Reveals the cell at `(row, col)` and flood-fills outward from empty cells.
///
/// An unflagged bomb target is revealed and ends the game immediately; a
/// flagged bomb target is a no-op. Any other target starts a breadth-first
/// fill: revealed and flagged cells are skipped, empty cells expand through
/// their Moore neighbors, numbered cells are revealed but do not expand.
/// The fill runs in plain FIFO order; reveal order only ever mattered for
/// animation sequencing, which is the presentation layer's concern, and the
/// final board state is identical.
pub fn reveal(board: &mut Board, row: Coord, col: Coord) -> Result<RevealOutcome> {
    let start = board.validate_pos((row, col))?;

    let target = board.cell_unchecked(start);
    if target.value().is_bomb() {
        if target.is_flagged() {
            return Ok(RevealOutcome::Continuing);
        }
        board.reveal_cell(start);
        log::debug!("Hit bomb at {:?}", start);
        return Ok(RevealOutcome::HitBomb);
    }

    let mut queued = HashSet::from([start]);
    let mut frontier = VecDeque::from([start]);
    log::trace!("Starting flood fill from {:?}", start);

    while let Some(pos) = frontier.pop_front() {
        let cell = board.cell_unchecked(pos);
        if cell.is_revealed() || cell.is_flagged() {
            continue;
        }

        board.reveal_cell(pos);
        log::trace!("Flood revealed {:?}, value {:?}", pos, cell.value());

        // Only zero-adjacency cells expand, so the fill can never enqueue
        // its way onto a bomb.
        if cell.value() != CellValue::Empty {
            continue;
        }

        for neighbor in board.iter_neighbors(pos) {
            if queued.insert(neighbor) {
                frontier.push_back(neighbor);
            }
        }
    }

    if board.revealed_count() == board.safe_cells() {
        log::debug!("All safe cells revealed, game won");
        Ok(RevealOutcome::Won)
    } else {
        Ok(RevealOutcome::Continuing)
    }
}

/// Toggles the flag on an unrevealed cell; a silent no-op on revealed cells.
pub fn toggle_flag(board: &mut Board, row: Coord, col: Coord) -> Result<()> {
    let pos = board.validate_pos((row, col))?;
    board.toggle_flag_at(pos);
    Ok(())
}

/// Forces the whole board visible, clearing every flag.
///
/// A terminal debug/end-of-game action: `revealed_count` is left alone and
/// no win check applies afterwards.
pub fn reveal_all(board: &mut Board) {
    board.force_reveal_all();
}
