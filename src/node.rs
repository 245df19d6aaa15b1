//! Search nodes and the per-run arena that owns them.
use crate::engine::Board;

/// Index of a node inside its [`NodeArena`].
pub type NodeId = usize;

/// A board reached during search, with its accumulated cost `g`, heuristic estimate `h`
/// and corrected evaluation `f`.
///
/// Nodes never change after creation. Identity is the board alone: two nodes with the
/// same board compare equal whatever their costs.
#[derive(Clone, Debug)]
pub struct SearchNode {
    board: Board,
    g: u32,
    h: u32,
    f: u32,
    parent: Option<NodeId>,
}

impl SearchNode {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn g(&self) -> u32 {
        self.g
    }

    pub fn h(&self) -> u32 {
        self.h
    }

    pub fn f(&self) -> u32 {
        self.f
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}

impl Eq for SearchNode {}

/// Owns every node created during one search run. Parent links are arena indices,
/// so the implicit search tree needs no shared ownership.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a node and returns its id.
    ///
    /// A root (no parent) gets `f = g + h`. Any other node gets
    /// `f = max(parent.f, g + h)`, so `f` never decreases along a path even when
    /// `h` is inconsistent.
    ///
    /// # Panics
    /// Panics if `parent` is not an id from this arena.
    pub fn make_node(&mut self, board: Board, g: u32, h: u32, parent: Option<NodeId>) -> NodeId {
        let f = match parent {
            None => g + h,
            Some(p) => self.nodes[p].f.max(g + h),
        };
        let id = self.nodes.len();
        self.nodes.push(SearchNode {
            board,
            g,
            h,
            f,
            parent,
        });
        id
    }

    /// # Panics
    /// Panics if `id` was not returned by this arena.
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id]
    }

    /// Total nodes created so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids from the root down to `id`, following parent links.
    pub fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            path.push(node_id);
            current = self.nodes[node_id].parent;
        }
        path.reverse();
        path
    }
}
