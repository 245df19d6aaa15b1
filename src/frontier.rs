//! Open set: nodes discovered but not yet expanded.
use crate::engine::Board;
use crate::node::{NodeId, SearchNode};
use log::debug;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Heap entry. Ordered so that `BinaryHeap` (a max-heap) yields the smallest `f`,
/// then the smallest `h`, then the most recently queued entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct QueueEntry {
    f: u32,
    h: u32,
    seq: u64,
    id: NodeId,
    board: Board,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// What [`Frontier::insert_or_improve`] did with a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    /// No node with this board was queued; the node was added.
    Inserted,
    /// A queued node with this board had a larger `f` and was replaced.
    Improved,
    /// A queued node with this board already had an `f` at most as large.
    Discarded,
}

/// Priority queue of unexpanded nodes with at most one live entry per board.
///
/// Replaced entries stay in the heap and are skipped when they surface.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<QueueEntry>,
    live: HashMap<Board, (NodeId, u32)>,
    next_seq: u64,
    extracted: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `node`, reconciling it with any queued node for the same board: the
    /// newcomer replaces it only with a strictly smaller `f`.
    pub fn insert_or_improve(&mut self, id: NodeId, node: &SearchNode) -> Admission {
        let admission = match self.live.get(node.board()) {
            Some(&(_, queued_f)) if queued_f <= node.f() => return Admission::Discarded,
            Some(&(queued_id, queued_f)) => {
                debug!(
                    "frontier entry {} improved by {} (f {} -> {})",
                    queued_id,
                    id,
                    queued_f,
                    node.f()
                );
                Admission::Improved
            }
            None => Admission::Inserted,
        };

        self.live.insert(*node.board(), (id, node.f()));
        self.heap.push(QueueEntry {
            f: node.f(),
            h: node.h(),
            seq: self.next_seq,
            id,
            board: *node.board(),
        });
        self.next_seq += 1;
        admission
    }

    /// Removes and returns the node with the smallest `f` (ties: smallest `h`),
    /// or `None` when the frontier is empty.
    pub fn extract_best(&mut self) -> Option<NodeId> {
        while let Some(entry) = self.heap.pop() {
            let is_live = matches!(self.live.get(&entry.board), Some(&(id, _)) if id == entry.id);
            if is_live {
                self.live.remove(&entry.board);
                self.extracted += 1;
                return Some(entry.id);
            }
        }
        None
    }

    /// Whether a node with `board` is queued.
    pub fn contains(&self, board: &Board) -> bool {
        self.live.contains_key(board)
    }

    /// The queued node for `board`, if any.
    pub fn get(&self, board: &Board) -> Option<NodeId> {
        self.live.get(board).map(|&(id, _)| id)
    }

    /// Number of queued nodes.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Number of successful extractions ("nodes explored").
    pub fn extracted(&self) -> usize {
        self.extracted
    }
}
