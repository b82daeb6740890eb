//! Board representation for tic-tac-toe

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Board side length (3x3)
pub const BOARD_SIZE: usize = 3;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 9

/// Contents of a single slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }

    /// Player owning this mark (None for Empty)
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::Human),
            Cell::O => Some(Player::Computer),
            Cell::Empty => None,
        }
    }
}

/// The two sides. The human always plays X, the computer always plays O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Mark placed by this player
    #[inline]
    pub fn mark(self) -> Cell {
        match self {
            Player::Human => Cell::X,
            Player::Computer => Cell::O,
        }
    }
}

/// Row and column of a slot index (row-major)
#[inline]
pub fn to_row_col(index: usize) -> (usize, usize) {
    (index / BOARD_SIZE, index % BOARD_SIZE)
}

/// Slot index of a row and column
#[inline]
pub fn from_row_col(row: usize, col: usize) -> usize {
    debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
    row * BOARD_SIZE + col
}
