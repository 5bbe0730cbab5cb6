//! Sparse constraint matrix for the exact-cover reduction.
//!
//! A Sudoku board is translated into a 0/1 matrix whose columns are constraints and whose
//! rows are candidate placements. Each candidate (row, column, value) intersects exactly
//! four constraint columns: "that cell is filled", "that row holds the value", "that
//! column holds the value" and "that region holds the value". The matrix is stored as a
//! toroidal doubly-linked structure so that the search engine in [`crate::solver`] can
//! remove and restore whole columns in O(1) per link (Knuth's
//! ["Dancing Links"](https://arxiv.org/abs/cs/0011047) technique).
//!
//! Following Knuth's paper, the structure is held in Entity Component System form: nodes
//! are plain indices into side tables rather than heap-allocated link cells, which keeps
//! the cyclic rings friendly to Safe Rust while preserving the O(1) splice and restore.

use std::{collections::HashSet, fmt, io, ops};

use crate::board::SudokuBoard;

/// A node represents a `true` value in the sparse matrix: one (candidate, constraint)
/// intersection. `Node` is just a new-typed index into the side tables where the node's
/// data actually lives. Column headers and the root are nodes too.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Node(pub(crate) usize);

/// The singleton anchor of the header ring. Knuth calls it `h`. The header ring is empty
/// (`next(ROOT_NODE) == ROOT_NODE`) exactly when every constraint is satisfied.
pub(crate) const ROOT_NODE: Node = Node(0);

/// One candidate placement: value `value` at cell (`row`, `col`).
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub value: u8,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.row, self.col, self.value)
    }
}

/// Fatal internal-consistency failures detected by [`ConstraintMatrix::verify`]. A matrix
/// that fails verification is never handed to the search engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatrixError {
    /// A link and its reverse link disagree.
    BrokenLink { node: usize },

    /// A column's recorded size does not match the length of its ring.
    SizeMismatch {
        column: String,
        recorded: usize,
        actual: usize,
    },

    /// An expected candidate placement is not reachable from the header ring.
    MissingCandidate { label: String },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::BrokenLink { node } => {
                write!(f, "node {node} has an inconsistent link")
            }
            MatrixError::SizeMismatch {
                column,
                recorded,
                actual,
            } => {
                write!(
                    f,
                    "column {column} records size {recorded} but its ring holds {actual} nodes"
                )
            }
            MatrixError::MissingCandidate { label } => {
                write!(f, "candidate {label} is not reachable in the linked structure")
            }
        }
    }
}

impl std::error::Error for MatrixError {}

/// A candidate placement together with the four nodes it produced, one per constraint
/// family. Kept for the incidence dump and for mapping solution nodes back to placements.
#[derive(Clone, Debug)]
pub(crate) struct Candidate {
    pub(crate) placement: Placement,
    pub(crate) nodes: [Node; 4],
}

/// The fully-linked toroidal constraint matrix for one board.
///
/// Built once by [`ConstraintMatrix::from_board`]; the search engine then mutates it
/// destructively and reversibly through [`cover_column`](Self::cover_column) and
/// [`uncover_column`](Self::uncover_column). Nodes are never deallocated during search;
/// cover and uncover only splice links.
pub struct ConstraintMatrix {
    /// Board side length (n).
    size: usize,

    /// Total number of constraint columns (4n²), linked or not.
    num_columns: usize,

    /// Left/right links: the ring of a candidate's four nodes, and the header ring
    /// anchored at [`ROOT_NODE`]. Knuth's `L` and `R`.
    pub(crate) row_links: NodeLinks,

    /// Up/down links: each constraint column's ring of candidate nodes. Knuth's `U`
    /// and `D`.
    pub(crate) column_links: NodeLinks,

    /// Live candidate count per column, indexed by the column's header node. Knuth's `S`.
    /// Only header node indices carry meaningful entries.
    pub(crate) column_sizes: Vec<usize>,

    /// Header node for each column, in canonical column order.
    column_nodes: Vec<Node>,

    /// Constraint name for each column, in canonical column order.
    column_names: Vec<String>,

    /// Map each node to its owning column header. Knuth's `C`. Navigational only.
    pub(crate) column_for_node: Vec<Node>,

    /// The placement a data node belongs to; `None` for the root and column headers.
    placement_for_node: Vec<Option<Placement>>,

    /// All candidates in generation order.
    pub(crate) candidates: Vec<Candidate>,
}

impl ConstraintMatrix {
    /// Builds the linked constraint matrix for `board`.
    ///
    /// Column enumeration follows a fixed canonical order: all cell constraints in
    /// row-major order, then row-value, column-value and region-value constraints. An
    /// empty cell contributes one candidate per value 1..=n; a given cell contributes
    /// exactly one. Columns that end up with no candidates are omitted from the header
    /// ring entirely rather than linked with size zero.
    ///
    /// The structure is verified before it is returned, so a corrupt matrix is never
    /// observable by callers.
    pub fn from_board(board: &SudokuBoard) -> Result<ConstraintMatrix, MatrixError> {
        let size = board.size();
        let num_columns = 4 * size * size;

        let mut matrix = ConstraintMatrix {
            size,
            num_columns,
            row_links: NodeLinks::new(),
            column_links: NodeLinks::new(),
            column_sizes: Vec::new(),
            column_nodes: Vec::new(),
            column_names: Vec::new(),
            column_for_node: Vec::new(),
            placement_for_node: Vec::new(),
            candidates: Vec::new(),
        };

        let root = matrix.alloc();
        assert_eq!(root, ROOT_NODE);
        matrix.column_sizes.push(0);

        matrix.create_columns();
        matrix.add_candidates(board);
        matrix.link_active_columns();
        matrix.verify(board)?;

        log::debug!(
            "built {size}x{size} constraint matrix: {} columns ({} active), {} candidates, {} nodes",
            matrix.num_columns,
            matrix.active_headers().len(),
            matrix.candidates.len(),
            matrix.row_links.len(),
        );

        Ok(matrix)
    }

    /// Board side length this matrix was built for.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of candidate placements in the matrix.
    pub fn num_candidates(&self) -> usize {
        self.candidates.len()
    }

    /// Allocate a new node in both link tables using arena allocation.
    fn alloc(&mut self) -> Node {
        let node = self.row_links.alloc();
        let node_2 = self.column_links.alloc();
        assert_eq!(node, node_2);

        self.column_for_node.push(ROOT_NODE);
        self.placement_for_node.push(None);
        node
    }

    /// Allocate the 4n² column headers in canonical order with the constraint names used
    /// for diagnostics. Headers are not linked into the header ring yet; that happens in
    /// [`link_active_columns`](Self::link_active_columns) once sizes are known.
    fn create_columns(&mut self) {
        let n = self.size;

        // One constraint per cell: "cell (r, c) is filled".
        for row in 0..n {
            for col in 0..n {
                self.push_column(format!("R{}C{}", row + 1, col + 1));
            }
        }
        // One constraint per (value, row) pair.
        for value in 1..=n {
            for row in 0..n {
                self.push_column(format!("{}R{}", value, row + 1));
            }
        }
        // One constraint per (value, column) pair.
        for value in 1..=n {
            for col in 0..n {
                self.push_column(format!("{}C{}", value, col + 1));
            }
        }
        // One constraint per (value, region) pair.
        for value in 1..=n {
            for region in 0..n {
                self.push_column(format!("{}S{}", value, region + 1));
            }
        }
    }

    fn push_column(&mut self, name: String) {
        let header = self.alloc();
        self.column_nodes.push(header);
        self.column_names.push(name);
        self.column_sizes.push(0);
    }

    /// Generate the candidate rows: one per value for each empty cell, exactly one for
    /// each given cell.
    fn add_candidates(&mut self, board: &SudokuBoard) {
        let n = self.size;
        for row in 0..n {
            for col in 0..n {
                match board.value(row, col) {
                    0 => {
                        for value in 1..=n as u8 {
                            self.add_candidate(board, row, col, value);
                        }
                    }
                    given => self.add_candidate(board, row, col, given),
                }
            }
        }
    }

    /// Allocate the four nodes of one candidate, link them into a circular left/right
    /// ring, and append each to the bottom of its column's up/down ring.
    fn add_candidate(&mut self, board: &SudokuBoard, row: usize, col: usize, value: u8) {
        let n = self.size;
        let v = (value - 1) as usize;
        let region = board.region_of(row, col);

        let column_indices = [
            row * n + col,
            n * n + v * n + row,
            2 * n * n + v * n + col,
            3 * n * n + v * n + region,
        ];

        let placement = Placement { row, col, value };
        let mut nodes = [ROOT_NODE; 4];
        let mut previous: Option<Node> = None;

        for (slot, &column_index) in column_indices.iter().enumerate() {
            let node = self.alloc();
            let header = self.column_nodes[column_index];
            self.column_for_node[node.0] = header;
            self.placement_for_node[node.0] = Some(placement);
            self.column_sizes[header.0] += 1;

            // Append to the bottom of the column ring so ring order matches
            // candidate-generation order.
            self.column_links
                .insert(self.column_links.previous(header), node);

            if let Some(previous) = previous {
                self.row_links.insert(previous, node);
            }
            previous = Some(node);
            nodes[slot] = node;
        }

        self.candidates.push(Candidate { placement, nodes });
    }

    /// Link every column with at least one candidate into the header ring, in canonical
    /// column order. Size-zero columns stay out: Algorithm X recognizes success as an
    /// empty header ring, so a permanently unsatisfiable column must be absent rather
    /// than present with size zero.
    fn link_active_columns(&mut self) {
        for index in 0..self.column_nodes.len() {
            let header = self.column_nodes[index];
            if self.column_sizes[header.0] == 0 {
                continue;
            }
            self.row_links
                .insert(self.row_links.previous(ROOT_NODE), header);
        }
    }

    /// Name of the constraint owning `header`. Headers are allocated directly after the
    /// root, so their canonical column index is the node index minus one.
    pub(crate) fn column_name(&self, header: Node) -> &str {
        &self.column_names[header.0 - 1]
    }

    /// The placement a data node was generated for.
    pub(crate) fn placement_of(&self, node: Node) -> Placement {
        self.placement_for_node[node.0].expect("node is a data node with a recorded placement")
    }

    /// Headers currently linked into the header ring, in ring order.
    pub(crate) fn active_headers(&self) -> Vec<Node> {
        let mut headers = Vec::new();
        let mut node = self.row_links.next(ROOT_NODE);
        while node != ROOT_NODE {
            headers.push(node);
            node = self.row_links.next(node);
        }
        headers
    }

    /// Names of the currently active constraint columns, in ring order.
    pub(crate) fn active_column_names(&self) -> Vec<&str> {
        self.active_headers()
            .into_iter()
            .map(|header| self.column_name(header))
            .collect()
    }

    /// Choose the active column with the fewest candidates (first encountered wins on
    /// ties), minimizing the branching factor. Returns `None` when the header ring is
    /// empty, i.e. when every constraint is satisfied.
    pub(crate) fn select_column(&self) -> Option<Node> {
        let mut selected = None;
        let mut selected_size = usize::MAX;

        let mut header = self.row_links.next(ROOT_NODE);
        while header != ROOT_NODE {
            if self.column_sizes[header.0] < selected_size {
                selected = Some(header);
                selected_size = self.column_sizes[header.0];
            }
            header = self.row_links.next(header);
        }

        selected
    }

    /// Remove `header`'s column from the matrix: unlink it from the header ring, then
    /// unlink every row intersecting it from all *other* columns those rows are in.
    /// The unlinked nodes keep their stale links so [`uncover_column`](Self::uncover_column)
    /// can splice them back without recomputation.
    pub(crate) fn cover_column(&mut self, header: Node) {
        log::trace!("covering column {}", self.column_name(header));

        self.row_links.unlink(header);

        let mut node = self.column_links.next(header);
        while node != header {
            let mut sibling = self.row_links.next(node);
            while sibling != node {
                self.column_links.unlink(sibling);
                let column = self.column_for_node[sibling.0];
                self.column_sizes[column.0] -= 1;
                sibling = self.row_links.next(sibling);
            }
            node = self.column_links.next(node);
        }
    }

    /// Exact mirror of [`cover_column`](Self::cover_column), traversing both rings in the
    /// opposite direction so the relinking happens in LIFO order and restores the
    /// pre-cover state precisely.
    pub(crate) fn uncover_column(&mut self, header: Node) {
        log::trace!("uncovering column {}", self.column_name(header));

        let mut node = self.column_links.previous(header);
        while node != header {
            let mut sibling = self.row_links.previous(node);
            while sibling != node {
                let column = self.column_for_node[sibling.0];
                self.column_sizes[column.0] += 1;
                self.column_links.link(sibling);
                sibling = self.row_links.previous(sibling);
            }
            node = self.column_links.previous(node);
        }

        self.row_links.link(header);
    }

    /// One-time structural verification, run after construction (never per search step).
    ///
    /// Checks that every link is bidirectionally consistent, that every column's recorded
    /// size matches its ring length, and that every candidate the board calls for is
    /// reachable from the header ring.
    pub fn verify(&self, board: &SudokuBoard) -> Result<(), MatrixError> {
        for table in [&self.row_links, &self.column_links] {
            for index in 0..table.len() {
                let node = Node(index);
                if table.previous(table.next(node)) != node
                    || table.next(table.previous(node)) != node
                {
                    return Err(MatrixError::BrokenLink { node: index });
                }
            }
        }

        for (column_index, &header) in self.column_nodes.iter().enumerate() {
            let mut actual = 0;
            let mut node = self.column_links.next(header);
            while node != header {
                actual += 1;
                node = self.column_links.next(node);
            }
            let recorded = self.column_sizes[header.0];
            if recorded != actual {
                return Err(MatrixError::SizeMismatch {
                    column: self.column_names[column_index].clone(),
                    recorded,
                    actual,
                });
            }
        }

        let mut reachable: HashSet<Placement> = HashSet::new();
        for header in self.active_headers() {
            let mut node = self.column_links.next(header);
            while node != header {
                reachable.insert(self.placement_of(node));
                node = self.column_links.next(node);
            }
        }

        let n = board.size();
        for row in 0..n {
            for col in 0..n {
                let given = board.value(row, col);
                let values: Vec<u8> = match given {
                    0 => (1..=n as u8).collect(),
                    given => vec![given],
                };
                for value in values {
                    let placement = Placement { row, col, value };
                    if !reachable.contains(&placement) {
                        return Err(MatrixError::MissingCandidate {
                            label: placement.to_string(),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    /// Diagnostic dump of the constraint-incidence matrix in delimited tabular form: a
    /// header row of constraint names, then one 0/1 row per candidate placement. Purely
    /// a debugging aid for matrix construction; the sink is supplied by the caller so the
    /// core carries no mandatory I/O dependency.
    pub fn write_incidence_csv<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        for name in &self.column_names {
            write!(writer, "{name},")?;
        }
        writeln!(writer)?;

        for candidate in &self.candidates {
            let mut incidence = vec![false; self.num_columns];
            for &node in &candidate.nodes {
                let header = self.column_for_node[node.0];
                incidence[header.0 - 1] = true;
            }
            for bit in incidence {
                write!(writer, "{},", if bit { '1' } else { '0' })?;
            }
            writeln!(writer)?;
        }

        Ok(())
    }
}

/// Represents a single link in a circular doubly-linked list of nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Link {
    previous: Node,
    next: Node,
}

/// All the links between nodes in one "direction": one instance holds the left/right
/// rings, another the up/down rings. Freshly allocated nodes are self-linked.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct NodeLinks {
    data: Vec<Link>,
}

impl NodeLinks {
    fn new() -> Self {
        NodeLinks { data: Vec::new() }
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn next(&self, node: Node) -> Node {
        self[node].next
    }

    pub(crate) fn previous(&self, node: Node) -> Node {
        self[node].previous
    }

    /// Arena-allocate the next node, initially linked to itself.
    fn alloc(&mut self) -> Node {
        let node = Node(self.data.len());
        self.data.push(Link {
            previous: node,
            next: node,
        });
        node
    }

    /// Insert `b` into a<->c to produce a<->b<->c.
    fn insert(&mut self, a: Node, b: Node) {
        let c = self[a].next;
        self[b].previous = a;
        self[b].next = c;
        self[a].next = b;
        self[c].previous = b;
    }

    /// Unlink `b` from a<->b<->c without disturbing `b`'s own links, so that `link` can
    /// restore it later.
    fn unlink(&mut self, b: Node) {
        let b_previous = self[b].previous;
        let b_next = self[b].next;
        self[b_previous].next = b_next;
        self[b_next].previous = b_previous;
    }

    /// Splice `b` back into a<->c using its undisturbed links. This is the heart of the
    /// "dancing" in Dancing Links.
    fn link(&mut self, b: Node) {
        let b_previous = self[b].previous;
        let b_next = self[b].next;
        self[b_previous].next = b;
        self[b_next].previous = b;
    }
}

impl ops::Index<Node> for NodeLinks {
    type Output = Link;
    fn index(&self, index: Node) -> &Self::Output {
        &self.data[index.0]
    }
}

impl ops::IndexMut<Node> for NodeLinks {
    fn index_mut(&mut self, index: Node) -> &mut Self::Output {
        &mut self.data[index.0]
    }
}

impl fmt::Debug for NodeLinks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeLinks(")?;
        for (i, Link { previous, next }) in self.data.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{i}:{}-{}", previous.0, next.0)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_by_four() -> SudokuBoard {
        SudokuBoard::from_values(&[1, 0, 0, 4, 0, 4, 1, 0, 0, 1, 4, 0, 4, 0, 0, 1])
            .expect("valid board")
    }

    #[test]
    fn node_links_splice_and_restore() {
        let mut links = NodeLinks::new();
        let a = links.alloc();
        let b = links.alloc();
        let c = links.alloc();
        links.insert(a, b);
        links.insert(b, c);

        let before = links.clone();
        links.unlink(b);
        assert_eq!(links.next(a), c);
        assert_eq!(links.previous(c), a);
        // b keeps its stale links while unlinked.
        assert_eq!(links.next(b), c);
        assert_eq!(links.previous(b), a);

        links.link(b);
        assert_eq!(links, before);
    }

    #[test]
    fn empty_board_column_enumeration() {
        let board = SudokuBoard::empty(4).expect("4x4 board");
        let matrix = ConstraintMatrix::from_board(&board).expect("matrix builds");

        assert_eq!(matrix.column_names.len(), 64);
        assert_eq!(matrix.column_names[0], "R1C1");
        assert_eq!(matrix.column_names[15], "R4C4");
        assert_eq!(matrix.column_names[16], "1R1");
        assert_eq!(matrix.column_names[31], "4R4");
        assert_eq!(matrix.column_names[32], "1C1");
        assert_eq!(matrix.column_names[48], "1S1");
        assert_eq!(matrix.column_names[63], "4S4");

        // 16 empty cells, 4 candidate values each.
        assert_eq!(matrix.num_candidates(), 64);

        // Every constraint has exactly 4 candidates on an empty board.
        for &header in &matrix.column_nodes {
            assert_eq!(matrix.column_sizes[header.0], 4);
        }
        assert_eq!(matrix.active_headers().len(), 64);
    }

    #[test]
    fn givens_restrict_candidates() {
        let matrix = ConstraintMatrix::from_board(&four_by_four()).expect("matrix builds");

        // 8 givens contribute one candidate each; 8 empty cells contribute 4 each.
        assert_eq!(matrix.num_candidates(), 40);

        // The cell constraint of a given cell has exactly one candidate.
        let r1c1 = matrix.column_nodes[0];
        assert_eq!(matrix.column_name(r1c1), "R1C1");
        assert_eq!(matrix.column_sizes[r1c1.0], 1);

        let node = matrix.column_links.next(r1c1);
        assert_eq!(
            matrix.placement_of(node),
            Placement {
                row: 0,
                col: 0,
                value: 1
            }
        );
    }

    #[test]
    fn zero_size_columns_are_omitted() {
        // Row 0 is fully given as 1,1,2,3: no candidate can ever satisfy "4R1".
        let board = SudokuBoard::from_values(&[1, 1, 2, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0])
            .expect("valid board");
        let matrix = ConstraintMatrix::from_board(&board).expect("matrix builds");

        let active = matrix.active_column_names();
        assert!(!active.contains(&"4R1"));
        assert!(active.contains(&"1R1"));
        assert!(matrix.column_names.contains(&"4R1".to_string()));

        // Both given 1s intersect the "1R1" constraint.
        let header = matrix.column_nodes[16];
        assert_eq!(matrix.column_name(header), "1R1");
        assert_eq!(matrix.column_sizes[header.0], 2);
    }

    #[test]
    fn cover_then_uncover_restores_everything() {
        let board = four_by_four();
        let mut matrix = ConstraintMatrix::from_board(&board).expect("matrix builds");

        let row_links = matrix.row_links.clone();
        let column_links = matrix.column_links.clone();
        let column_sizes = matrix.column_sizes.clone();

        let column = matrix.select_column().expect("active columns remain");
        matrix.cover_column(column);
        assert_ne!(matrix.row_links, row_links);

        // Nested pair: cover a second column while the first is covered.
        let inner = matrix.select_column().expect("active columns remain");
        let inner_row_links = matrix.row_links.clone();
        let inner_column_links = matrix.column_links.clone();
        let inner_column_sizes = matrix.column_sizes.clone();

        matrix.cover_column(inner);
        matrix.uncover_column(inner);
        assert_eq!(matrix.row_links, inner_row_links);
        assert_eq!(matrix.column_links, inner_column_links);
        assert_eq!(matrix.column_sizes, inner_column_sizes);

        matrix.uncover_column(column);
        assert_eq!(matrix.row_links, row_links);
        assert_eq!(matrix.column_links, column_links);
        assert_eq!(matrix.column_sizes, column_sizes);

        matrix.verify(&board).expect("structure intact after cover/uncover");
    }

    #[test]
    fn construction_is_idempotent() {
        let board = four_by_four();
        let first = ConstraintMatrix::from_board(&board).expect("matrix builds");
        let second = ConstraintMatrix::from_board(&board).expect("matrix builds");

        assert_eq!(first.column_sizes, second.column_sizes);
        assert_eq!(first.num_candidates(), second.num_candidates());
        assert_eq!(first.active_column_names(), second.active_column_names());
    }

    #[test]
    fn verify_detects_corrupted_links() {
        let board = four_by_four();
        let mut matrix = ConstraintMatrix::from_board(&board).expect("matrix builds");

        // Make a data node point at itself without updating its neighbors.
        let node = matrix.candidates[0].nodes[1];
        matrix.column_links[node].next = node;

        match matrix.verify(&board) {
            Err(MatrixError::BrokenLink { .. }) => {}
            other => panic!("expected a broken link, got {other:?}"),
        }
    }

    #[test]
    fn verify_detects_size_drift() {
        let board = four_by_four();
        let mut matrix = ConstraintMatrix::from_board(&board).expect("matrix builds");

        let header = matrix.column_nodes[0];
        matrix.column_sizes[header.0] += 1;

        match matrix.verify(&board) {
            Err(MatrixError::SizeMismatch { column, .. }) => assert_eq!(column, "R1C1"),
            other => panic!("expected a size mismatch, got {other:?}"),
        }
    }

    #[test]
    fn incidence_csv_layout() {
        let board = SudokuBoard::empty(4).expect("4x4 board");
        let matrix = ConstraintMatrix::from_board(&board).expect("matrix builds");

        let mut output = Vec::new();
        matrix.write_incidence_csv(&mut output).expect("write succeeds");
        let text = String::from_utf8(output).expect("valid utf-8");

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1 + 64);
        assert!(lines[0].starts_with("R1C1,R1C2,"));

        // First candidate is value 1 at cell (0, 0): columns R1C1, 1R1, 1C1 and 1S1.
        let first: Vec<&str> = lines[1].split(',').collect();
        for (index, &bit) in first.iter().take(64).enumerate() {
            let expected = matches!(index, 0 | 16 | 32 | 48);
            assert_eq!(bit == "1", expected, "column index {index}");
        }
    }
}
