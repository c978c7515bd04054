//! Board grid representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lines;

/// A cell on the board
///
/// The wire format is numeric: `0` for empty, `1` for player one, `2` for
/// player two. Serde rides on that mapping, so a serialized grid is a plain
/// array of small integers suitable for downstream numeric consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    /// Numeric digit used for rendering and the wire format
    pub fn to_digit(self) -> u8 {
        self as u8
    }

    /// The player owning this cell, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
        }
    }

    /// Swap player marks, leaving `Empty` unchanged
    pub fn inverted(self) -> Cell {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::PlayerOne => Cell::PlayerTwo,
            Cell::PlayerTwo => Cell::PlayerOne,
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell as u8
    }
}

impl TryFrom<u8> for Cell {
    type Error = crate::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::PlayerOne),
            2 => Ok(Cell::PlayerTwo),
            _ => Err(crate::Error::InvalidCellValue { value }),
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }

    /// Numeric player id (1 or 2), matching the cell wire format
    pub fn id(self) -> u8 {
        self.to_cell().to_digit()
    }
}

/// Terminal status reported after a placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Outcome {
    /// The action was rejected; the grid was not touched
    Invalid,
    /// Legal move, game continues
    Ongoing,
    /// The mover completed a full line
    Win(Player),
    /// Every cell is occupied and nobody won
    Draw,
}

impl Outcome {
    /// Numeric wire code: `-1` invalid, `0` ongoing, `1`/`2` win, `3` draw
    pub fn to_code(self) -> i8 {
        match self {
            Outcome::Invalid => -1,
            Outcome::Ongoing => 0,
            Outcome::Win(player) => player.id() as i8,
            Outcome::Draw => 3,
        }
    }

    /// Whether the episode is over (win or draw)
    pub fn is_terminal(self) -> bool {
        matches!(self, Outcome::Win(_) | Outcome::Draw)
    }
}

impl From<Outcome> for i8 {
    fn from(outcome: Outcome) -> Self {
        outcome.to_code()
    }
}

impl TryFrom<i8> for Outcome {
    type Error = crate::Error;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(Outcome::Invalid),
            0 => Ok(Outcome::Ongoing),
            1 => Ok(Outcome::Win(Player::One)),
            2 => Ok(Outcome::Win(Player::Two)),
            3 => Ok(Outcome::Draw),
            _ => Err(crate::Error::InvalidOutcomeCode { code }),
        }
    }
}

/// An owned square grid of cells
///
/// Dimensions are fixed at construction. Actions are flat indices in
/// `[0, size * size)` with `row = action / size`, `col = action % size`.
///
/// # Examples
///
/// ```
/// use tictactoe_env::{Grid, Player};
///
/// let grid = Grid::default();
/// assert_eq!(grid.size(), 3);
/// assert_eq!(grid.current_player(), Player::One);
/// assert!(grid.all_actions().iter().all(|&a| grid.is_open(a)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    pub(crate) size: usize,
    pub(crate) cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty square grid of the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidGridSize`] when `size` is zero.
    pub fn new(size: usize) -> Result<Self, crate::Error> {
        if size == 0 {
            return Err(crate::Error::InvalidGridSize { size });
        }
        Ok(Grid {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Parse a grid from a digit string (`0`/`1`/`2`, whitespace ignored).
    ///
    /// The side length is inferred from the number of digits, which must be a
    /// perfect square. This is the inverse of the [`fmt::Display`] rendering
    /// and is the intended way to craft externally supplied states for
    /// [`simulate`](crate::TicTacToeEnv::simulate).
    ///
    /// # Errors
    ///
    /// Returns an error when a character is not a valid cell digit or the
    /// digit count has no integer square root.
    ///
    /// # Examples
    ///
    /// ```
    /// use tictactoe_env::{Cell, Grid};
    ///
    /// let grid = Grid::from_digits("1 2 0  0 1 0  0 0 0").unwrap();
    /// assert_eq!(grid.get(0, 0), Cell::PlayerOne);
    /// assert_eq!(grid.get(0, 1), Cell::PlayerTwo);
    /// assert_eq!(grid.get(1, 1), Cell::PlayerOne);
    /// ```
    pub fn from_digits(s: &str) -> Result<Self, crate::Error> {
        let mut cells = Vec::new();
        for (position, character) in s.chars().filter(|c| !c.is_whitespace()).enumerate() {
            let digit =
                character
                    .to_digit(10)
                    .ok_or_else(|| crate::Error::InvalidCellCharacter {
                        character,
                        position,
                        context: s.to_string(),
                    })?;
            let cell = Cell::try_from(digit as u8).map_err(|_| {
                crate::Error::InvalidCellCharacter {
                    character,
                    position,
                    context: s.to_string(),
                }
            })?;
            cells.push(cell);
        }

        let size = (cells.len() as f64).sqrt() as usize;
        if size == 0 || size * size != cells.len() {
            return Err(crate::Error::InvalidBoardLength {
                got: cells.len(),
                context: s.to_string(),
            });
        }

        Ok(Grid { size, cells })
    }

    /// Side length of the square grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of actions (`size * size`)
    pub fn action_count(&self) -> usize {
        self.cells.len()
    }

    /// Map a flat action index to `(row, col)`
    pub fn to_coords(&self, action: usize) -> (usize, usize) {
        (action / self.size, action % self.size)
    }

    /// Cell at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    /// Cell targeted by a flat action index
    pub fn cell(&self, action: usize) -> Cell {
        self.cells[action]
    }

    pub(crate) fn set(&mut self, action: usize, cell: Cell) {
        self.cells[action] = cell;
    }

    /// Raw cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Whether the action index is in range and targets an empty cell
    pub fn is_open(&self, action: usize) -> bool {
        action < self.cells.len() && self.cells[action] == Cell::Empty
    }

    /// Whether no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    fn count(&self, mark: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == mark).count()
    }

    /// Infer whose turn it is from the marks on the grid.
    ///
    /// Player one moves first; whoever has fewer marks moves next. Ties,
    /// including the empty grid, favor player one. This is the sole source of
    /// turn information, so replaying from an externally supplied grid needs
    /// no separate turn counter. On a crafted grid where player two is ahead
    /// the tie branch still reports player one, matching the count rule
    /// (player one's count must strictly exceed for player two to move).
    pub fn current_player(&self) -> Player {
        if self.count(Cell::PlayerOne) > self.count(Cell::PlayerTwo) {
            Player::Two
        } else {
            Player::One
        }
    }

    /// Validity mask over the action space: `1` where the cell is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tictactoe_env::Grid;
    ///
    /// let grid = Grid::from_digits("000 010 000").unwrap();
    /// assert_eq!(grid.valid_actions(), vec![1, 1, 1, 1, 0, 1, 1, 1, 1]);
    /// ```
    pub fn valid_actions(&self) -> Vec<u8> {
        self.cells
            .iter()
            .map(|&c| if c == Cell::Empty { 1 } else { 0 })
            .collect()
    }

    /// Every action index, regardless of validity
    pub fn all_actions(&self) -> Vec<usize> {
        (0..self.cells.len()).collect()
    }

    /// Judge the terminal status after a placement at `(row, col)`.
    ///
    /// Checks, in order, each column, each row, the main diagonal, and the
    /// anti-diagonal for full occupancy by the mark at `(row, col)`. When no
    /// line matches and no empty cell remains the game is a draw; otherwise
    /// it is ongoing. A "line" spans the full square dimension, so this works
    /// for any side length.
    pub fn judge(&self, row: usize, col: usize) -> Outcome {
        if let Some(player) = self.get(row, col).to_player()
            && lines::has_full_line(&self.cells, self.size, player)
        {
            return Outcome::Win(player);
        }

        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }

    /// Swap player marks, leaving empty cells unchanged.
    ///
    /// Self-inverse; used to present a position from the opponent's
    /// perspective when building training samples.
    #[must_use = "inverted returns a new grid; the original is unchanged"]
    pub fn inverted(&self) -> Grid {
        Grid {
            size: self.size,
            cells: self.cells.iter().map(|c| c.inverted()).collect(),
        }
    }

    /// Set every cell back to empty, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Row-major numeric snapshot for numeric consumers (e.g. a value network)
    pub fn to_features(&self) -> Vec<f32> {
        self.cells.iter().map(|c| c.to_digit() as f32).collect()
    }
}

impl Default for Grid {
    /// The standard 3x3 board
    fn default() -> Self {
        Grid {
            size: 3,
            cells: vec![Cell::Empty; 9],
        }
    }
}

impl fmt::Display for Grid {
    /// Renders one leading line break, then each row as space-separated
    /// digits followed by a line break.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get(row, col).to_digit())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
