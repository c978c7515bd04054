//! The board environment: move application, simulation, and episode control

use serde::{Deserialize, Serialize};

use crate::grid::{Grid, Outcome, Player};

/// The value returned by [`TicTacToeEnv::step`] and friends: the resulting
/// state, the mover's reward, and the terminal status.
///
/// Rewards follow the environment convention: `1.0` when the move won the
/// game, `-1.0` when the action was rejected, `0.0` otherwise (ongoing play
/// and draws included).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub state: Grid,
    pub reward: f64,
    pub outcome: Outcome,
}

/// A tic-tac-toe environment owning a single mutable grid.
///
/// Turn order is derived from the marks on the grid (player one moves first),
/// so the environment carries no turn counter and replaying from an external
/// grid needs no bookkeeping. Illegal actions are reported through
/// [`Outcome::Invalid`] with the grid left untouched; callers check the
/// outcome after every step.
///
/// # Examples
///
/// ```
/// use tictactoe_env::{Outcome, Player, TicTacToeEnv};
///
/// let mut env = TicTacToeEnv::new();
/// // Player one takes the top row across moves 0, 1, 2.
/// for action in [0, 4, 1, 7] {
///     assert_eq!(env.step(action).outcome, Outcome::Ongoing);
/// }
/// let t = env.step(2);
/// assert_eq!(t.outcome, Outcome::Win(Player::One));
/// assert_eq!(t.reward, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicTacToeEnv {
    grid: Grid,
}

impl TicTacToeEnv {
    /// Create a standard 3x3 environment
    pub fn new() -> Self {
        TicTacToeEnv {
            grid: Grid::default(),
        }
    }

    /// Create an environment over a square board of the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidGridSize`] when `size` is zero.
    pub fn with_size(size: usize) -> Result<Self, crate::Error> {
        Ok(TicTacToeEnv {
            grid: Grid::new(size)?,
        })
    }

    /// Create an environment resuming from an existing grid
    pub fn from_grid(grid: Grid) -> Self {
        TicTacToeEnv { grid }
    }

    /// The internal grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Whose turn it is, inferred from the internal grid
    pub fn current_player(&self) -> Player {
        self.grid.current_player()
    }

    /// Evaluate an action against a grid without touching any shared state.
    ///
    /// This is the whole move pipeline as a pure function: infer the mover
    /// from the marks, validate the action (in range and targeting an empty
    /// cell), place the mark, and judge the result. Rejected actions return
    /// an unmodified copy of the input with reward `-1.0`. Out-of-range
    /// indices and occupied cells are collapsed into the same
    /// [`Outcome::Invalid`] signal.
    ///
    /// [`step`](Self::step) commits the result to the internal grid;
    /// [`simulate`](Self::simulate) discards it. Because nothing here reads
    /// or writes engine state, hypothetical evaluation is reentrant by
    /// construction.
    pub fn apply(grid: &Grid, action: usize) -> Transition {
        let mover = grid.current_player();

        if !grid.is_open(action) {
            return Transition {
                state: grid.clone(),
                reward: -1.0,
                outcome: Outcome::Invalid,
            };
        }

        let mut next = grid.clone();
        next.set(action, mover.to_cell());
        let (row, col) = next.to_coords(action);
        let outcome = next.judge(row, col);

        // The opponent winning off our placement is impossible; the check
        // still keys the reward to the mover.
        let reward = if outcome == Outcome::Win(mover) {
            1.0
        } else {
            0.0
        };

        Transition {
            state: next,
            reward,
            outcome,
        }
    }

    /// Apply an action for the current player, mutating the internal grid on
    /// a legal move only.
    pub fn step(&mut self, action: usize) -> Transition {
        let transition = Self::apply(&self.grid, action);
        if transition.outcome != Outcome::Invalid {
            self.grid = transition.state.clone();
        }
        transition
    }

    /// Evaluate an action against a caller-supplied grid.
    ///
    /// The engine's own grid is never consulted or modified, so this is safe
    /// to call repeatedly from a search routine exploring hypothetical moves,
    /// for any `test_state`/`action` combination including invalid actions.
    pub fn simulate(&self, test_state: &Grid, action: usize) -> Transition {
        Self::apply(test_state, action)
    }

    /// Validity mask over the internal grid's action space
    pub fn valid_actions(&self) -> Vec<u8> {
        self.grid.valid_actions()
    }

    /// Every action index of the internal grid, regardless of validity
    pub fn all_actions(&self) -> Vec<usize> {
        self.grid.all_actions()
    }

    /// Set every cell back to empty
    pub fn reset(&mut self) {
        self.grid.clear();
    }

    /// Row-major numeric snapshot of the internal grid
    pub fn state(&self) -> Vec<f32> {
        self.grid.to_features()
    }

    /// Print the internal grid to stdout in the display format
    pub fn print(&self) {
        println!("{}", self.grid);
    }
}

impl Default for TicTacToeEnv {
    fn default() -> Self {
        Self::new()
    }
}
