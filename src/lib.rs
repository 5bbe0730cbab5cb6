//! sudoku-dlx
//!
//! This crate solves generalized Sudoku puzzles (any n×n board where n is a
//! perfect square) by reduction to the exact cover problem, which is then
//! solved with Donald Knuth's "Dancing Links" formulation of Algorithm X.

#![deny(warnings)]
#![allow(dead_code)]

pub mod board;
pub mod matrix;
pub mod solver;

// Re-export main types for convenience
pub use board::{BoardError, SudokuBoard};
pub use matrix::{ConstraintMatrix, MatrixError, Placement};
pub use solver::{DlxSolver, Solution, Solver};
