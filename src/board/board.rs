//! Board structure with slot access and text encoding

use std::fmt;
use std::str::FromStr;

use super::{Cell, Player, BOARD_SIZE, TOTAL_CELLS};
use crate::{Error, Result};

/// Game board: nine slots in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
        }
    }

    /// Build a board from raw cells (any combination is accepted)
    pub fn from_cells(cells: [Cell; TOTAL_CELLS]) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn cells(&self) -> &[Cell; TOTAL_CELLS] {
        &self.cells
    }

    /// Get the cell at a slot index
    #[inline]
    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Check if a slot is empty
    #[inline]
    pub fn is_empty(&self, index: usize) -> bool {
        self.cells[index] == Cell::Empty
    }

    /// Place a player's mark into an empty slot.
    ///
    /// Rejects out-of-range indices and occupied slots; the board is left
    /// untouched on error.
    pub fn place(&mut self, index: usize, player: Player) -> Result<()> {
        if index >= TOTAL_CELLS {
            return Err(Error::InvalidPosition { position: index });
        }
        if !self.is_empty(index) {
            return Err(Error::Occupied { position: index });
        }
        self.cells[index] = player.mark();
        Ok(())
    }

    /// Write a mark without validation. Only the search's trial moves use this.
    #[inline]
    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Empty slot indices in ascending order
    pub fn empty_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
    }

    /// True when no slot is empty
    #[inline]
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Number of marks on the board
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == Cell::Empty)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse nine cells, ignoring whitespace and `|` separators.
    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s
            .chars()
            .filter(|&c| c != '|' && c != '\n' && c != '\r' && c != '\t')
            .collect();
        // Spaces count as Empty only when the string is exactly nine wide.
        let chars: Vec<char> = if chars.len() == TOTAL_CELLS {
            chars
        } else {
            chars.into_iter().filter(|c| !c.is_whitespace()).collect()
        };

        if chars.len() != TOTAL_CELLS {
            return Err(Error::InvalidBoardLength {
                expected: TOTAL_CELLS,
                got: chars.len(),
            });
        }

        let mut cells = [Cell::Empty; TOTAL_CELLS];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or(Error::InvalidCellCharacter {
                character: c,
                position: i,
            })?;
        }
        Ok(Self { cells })
    }
}
