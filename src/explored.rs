//! Closed set: nodes that have already been expanded.
use crate::engine::Board;
use crate::frontier::Frontier;
use crate::node::{NodeArena, NodeId};
use log::debug;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Expanded nodes keyed by board.
#[derive(Debug, Default)]
pub struct ClosedSet {
    entries: HashMap<Board, NodeId>,
}

impl ClosedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `id` as expanded, returning the node it replaced for the same board.
    pub fn insert(&mut self, arena: &NodeArena, id: NodeId) -> Option<NodeId> {
        self.entries.insert(*arena.get(id).board(), id)
    }

    pub fn contains(&self, board: &Board) -> bool {
        self.entries.contains_key(board)
    }

    /// The expanded node for `board`, if any.
    pub fn get(&self, board: &Board) -> Option<NodeId> {
        self.entries.get(board).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reopens a closed board when `candidate` reaches it with a strictly smaller `f`.
    ///
    /// The stored entry matched by the candidate's board is the one removed, and the
    /// candidate then goes to the frontier. Returns whether the board was reopened.
    pub fn reconsider(
        &mut self,
        arena: &NodeArena,
        candidate: NodeId,
        frontier: &mut Frontier,
    ) -> bool {
        let node = arena.get(candidate);
        match self.entries.entry(*node.board()) {
            Entry::Occupied(stored) if node.f() < arena.get(*stored.get()).f() => {
                let stale = stored.remove();
                debug!(
                    "reopening closed node {} as {} (f {} -> {})",
                    stale,
                    candidate,
                    arena.get(stale).f(),
                    node.f()
                );
                frontier.insert_or_improve(candidate, node);
                true
            }
            _ => false,
        }
    }
}
