use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use super::types::Mark;

pub const CELL_COUNT: usize = 9;
pub const BOARD_SIDE: usize = 3;

pub type Line = [usize; 3];

/// Rows, then columns, then diagonals. Scan order matters to `check_win`.
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Row-major 3x3 grid. Index 0 is the top-left cell, 8 the bottom-right.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn place_mark(&mut self, index: usize, mark: Mark) -> Result<(), String> {
        if mark == Mark::Empty {
            return Err("Cannot place an empty mark".to_string());
        }
        match self.get(index) {
            None => Err(format!("Cell {} is out of bounds", index)),
            Some(Mark::Empty) => {
                self.cells[index] = mark;
                Ok(())
            }
            Some(_) => Err(format!("Cell {} is already marked", index)),
        }
    }

    /// Unchecked write used by the search to place and revert provisional moves.
    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }
}

impl Index<usize> for Board {
    type Output = Mark;

    fn index(&self, index: usize) -> &Mark {
        &self.cells[index]
    }
}

impl FromStr for Board {
    type Err = String;

    /// Parses nine cell symbols (`X`, `O`, `.`/`-`/`_`), ignoring whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Mark::Empty; CELL_COUNT];
        let mut count = 0;

        for symbol in s.chars().filter(|c| !c.is_whitespace()) {
            if count == CELL_COUNT {
                return Err(format!("Board has more than {} cells", CELL_COUNT));
            }
            cells[count] = Mark::from_symbol(symbol)
                .ok_or_else(|| format!("Unknown cell symbol '{}'", symbol))?;
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(format!("Board needs {} cells, got {}", CELL_COUNT, count));
        }

        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let compact: String = self.cells.iter().map(Mark::symbol).collect();
        write!(f, "Board({})", compact)
    }
}
