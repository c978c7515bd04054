//! Tic-Tac-Toe environment for turn-based play and move simulation
//!
//! This crate provides:
//! - A board-state engine with move validation and win/draw detection
//! - Player-turn inference from board contents (no separate turn counter)
//! - Pure hypothetical-move evaluation for search and agent training
//! - The symmetry-transform suite (rotations, reflections, mark inversion)
//!   used to generate equivalent training samples
//!
//! Illegal moves are reported as [`Outcome::Invalid`] values rather than
//! errors, so a console driver or learning agent can branch on the outcome
//! of every [`TicTacToeEnv::step`] and retry.

pub mod env;
pub mod error;
pub mod grid;
pub mod lines;
pub mod symmetry;

pub use env::{TicTacToeEnv, Transition};
pub use error::{Error, Result};
pub use grid::{Cell, Grid, Outcome, Player};
pub use symmetry::Symmetry;
