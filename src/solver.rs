//! Exact-cover search engine.
//!
//! This module runs Knuth's Algorithm X over the linked structure built by
//! [`crate::matrix`]: repeatedly pick the active constraint column with the fewest
//! candidates, try every candidate row that satisfies it, cover the other columns that
//! row touches, recurse, and uncover in exact reverse order on the way back. Every
//! complete exact cover is reported as a [`Solution`]; the structure is restored to its
//! pre-call state on every return, success or exhaustion.

use crate::board::SudokuBoard;
use crate::matrix::{ConstraintMatrix, MatrixError, Node, Placement};

/// One complete solution: the chosen placements, ordered by (row, column). Givens appear
/// alongside solved cells, so a solution always carries one placement per board cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    placements: Vec<Placement>,
}

impl Solution {
    /// The chosen placements in (row, column) order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Projects this solution onto a copy of `board`.
    pub fn apply_to(&self, board: &SudokuBoard) -> SudokuBoard {
        let mut filled = board.clone();
        for placement in &self.placements {
            filled.fill(placement.row, placement.col, placement.value);
        }
        filled
    }
}

/// A solving strategy: maps a board to the sequence of its solutions, delivered through
/// a caller-supplied sink. Only the exact-cover strategy lives in this crate.
pub trait Solver {
    /// Enumerate every solution of `board`, passing each one to `emit`.
    fn solve(
        &mut self,
        board: &SudokuBoard,
        emit: &mut dyn FnMut(Solution),
    ) -> Result<(), MatrixError>;
}

/// Sudoku solver backed by the Dancing Links exact-cover search.
pub struct DlxSolver;

impl DlxSolver {
    pub fn new() -> DlxSolver {
        DlxSolver
    }

    /// Solve `board`, collecting at most `limit` solved boards (all of them when `limit`
    /// is `None`). Stopping early is cooperative: each search frame still restores the
    /// structure before unwinding.
    pub fn solve_with_limit(
        &mut self,
        board: &SudokuBoard,
        limit: Option<usize>,
    ) -> Result<Vec<SudokuBoard>, MatrixError> {
        let mut boards = Vec::new();
        let mut matrix = ConstraintMatrix::from_board(board)?;
        Search::new(&mut matrix).run(&mut |solution| {
            boards.push(solution.apply_to(board));
            match limit {
                Some(limit) => boards.len() < limit,
                None => true,
            }
        });
        Ok(boards)
    }
}

impl Default for DlxSolver {
    fn default() -> Self {
        DlxSolver::new()
    }
}

impl Solver for DlxSolver {
    fn solve(
        &mut self,
        board: &SudokuBoard,
        emit: &mut dyn FnMut(Solution),
    ) -> Result<(), MatrixError> {
        let mut matrix = ConstraintMatrix::from_board(board)?;
        Search::new(&mut matrix).run(&mut |solution| {
            emit(solution);
            true
        });
        Ok(())
    }
}

/// Mutable search context threaded through the recursion: the borrowed linked structure
/// plus the growing stack of tentatively chosen candidate nodes. The search only splices
/// links; it never allocates or frees nodes.
struct Search<'a> {
    matrix: &'a mut ConstraintMatrix,
    partial: Vec<Node>,
}

impl<'a> Search<'a> {
    fn new(matrix: &'a mut ConstraintMatrix) -> Search<'a> {
        Search {
            matrix,
            partial: Vec::new(),
        }
    }

    /// Run the search to completion (or until `emit` returns `false`). Returns `false`
    /// when the sink requested a stop.
    fn run(&mut self, emit: &mut dyn FnMut(Solution) -> bool) -> bool {
        self.search(emit)
    }

    fn search(&mut self, emit: &mut dyn FnMut(Solution) -> bool) -> bool {
        // An empty header ring means every constraint is satisfied: the current partial
        // selection is one complete exact cover. Emit it and resume in the caller, since
        // the search enumerates all covers rather than stopping at the first.
        let column = match self.matrix.select_column() {
            None => return emit(self.current_solution()),
            Some(column) => column,
        };

        // A size-0 selection falls through naturally: its ring is empty, the loop below
        // runs zero iterations, and this frame backtracks.
        self.matrix.cover_column(column);

        let mut keep_going = true;
        let mut row = self.matrix.column_links.next(column);
        while keep_going && row != column {
            self.partial.push(row);

            // Cover every other column this candidate row intersects.
            let mut sibling = self.matrix.row_links.next(row);
            while sibling != row {
                let sibling_column = self.matrix.column_for_node[sibling.0];
                self.matrix.cover_column(sibling_column);
                sibling = self.matrix.row_links.next(sibling);
            }

            keep_going = self.search(emit);

            // Uncover in the exact reverse order of the covers above.
            let mut sibling = self.matrix.row_links.previous(row);
            while sibling != row {
                let sibling_column = self.matrix.column_for_node[sibling.0];
                self.matrix.uncover_column(sibling_column);
                sibling = self.matrix.row_links.previous(sibling);
            }

            self.partial.pop();
            row = self.matrix.column_links.next(row);
        }

        self.matrix.uncover_column(column);
        keep_going
    }

    fn current_solution(&self) -> Solution {
        let mut placements: Vec<Placement> = self
            .partial
            .iter()
            .map(|&node| self.matrix.placement_of(node))
            .collect();
        placements.sort_unstable();
        Solution { placements }
    }
}
