//! Synthetic game trees for exercising the search without a real board.

#![allow(dead_code)]

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use alphabeta_engine::Evaluator;
use checkers_core::{Color, GameState, Score};

/// Explicit game tree. Node 0 is the root; moves are child node ids.
#[derive(Debug, Clone)]
pub struct Tree {
    children: Vec<Vec<usize>>,
    ply: Vec<u32>,
    /// Leaf: exact value. Interior: what the evaluator reports at a cutoff.
    heuristic: Vec<Score>,
}

impl Tree {
    pub fn new() -> Self {
        Self {
            children: vec![Vec::new()],
            ply: vec![0],
            heuristic: vec![0.0],
        }
    }

    pub fn add(&mut self, parent: usize, value: Score) -> usize {
        let id = self.children.len();
        self.children.push(Vec::new());
        self.ply.push(self.ply[parent] + 1);
        self.heuristic.push(value);
        self.children[parent].push(id);
        id
    }

    /// Full tree of the given branching factor; `leaf(i)` values the i-th leaf.
    pub fn uniform(branching: usize, height: u32, mut leaf: impl FnMut(usize) -> Score) -> Self {
        let mut tree = Tree::new();
        let mut frontier = vec![0];
        let mut leaves = 0;
        for level in 1..=height {
            let mut next = Vec::new();
            for &parent in &frontier {
                for _ in 0..branching {
                    let value = if level == height {
                        leaves += 1;
                        leaf(leaves - 1)
                    } else {
                        0.0
                    };
                    next.push(tree.add(parent, value));
                }
            }
            frontier = next;
        }
        tree
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Exact minimax value; even plies maximize.
    pub fn minimax(&self, id: usize) -> Score {
        let kids = &self.children[id];
        if kids.is_empty() {
            return self.heuristic[id];
        }
        let values = kids.iter().map(|&c| self.minimax(c));
        if self.ply[id] % 2 == 0 {
            values.fold(f64::NEG_INFINITY, f64::max)
        } else {
            values.fold(f64::INFINITY, f64::min)
        }
    }

    pub fn height(&self, id: usize) -> u32 {
        self.children[id]
            .iter()
            .map(|&c| 1 + self.height(c))
            .max()
            .unwrap_or(0)
    }

    /// Interior nodes report their exact value minus their height, so a cutoff
    /// always underestimates by the number of plies left unexplored.
    pub fn with_pessimistic_heuristics(mut self) -> Self {
        for id in 0..self.len() {
            if !self.children[id].is_empty() {
                self.heuristic[id] = self.minimax(id) - f64::from(self.height(id));
            }
        }
        self
    }

    pub fn set_heuristic(&mut self, id: usize, value: Score) {
        self.heuristic[id] = value;
    }

    pub fn root(self) -> Node {
        Node {
            tree: Arc::new(self),
            id: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    tree: Arc<Tree>,
    pub id: usize,
}

impl Node {
    pub fn tree(&self) -> &Tree {
        &self.tree
    }
}

impl GameState for Node {
    type Move = usize;

    const NO_PROGRESS_LIMIT: u32 = u32::MAX;

    fn side_to_move(&self) -> Color {
        if self.tree.ply[self.id] % 2 == 0 {
            Color::Red
        } else {
            Color::Black
        }
    }

    fn legal_moves(&self) -> Vec<usize> {
        self.tree.children[self.id].clone()
    }

    fn apply(&self, mv: &usize) -> Self {
        Node {
            tree: Arc::clone(&self.tree),
            id: *mv,
        }
    }

    fn turns_since_last_capture(&self) -> u32 {
        0
    }
}

/// Reads the node's stored value.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeEval;

impl Evaluator<Node> for TreeEval {
    fn evaluate(&self, state: &Node) -> Score {
        state.tree.heuristic[state.id]
    }
}

/// `TreeEval` that sleeps before answering.
#[derive(Debug, Clone, Copy)]
pub struct SlowEval(pub Duration);

impl Evaluator<Node> for SlowEval {
    fn evaluate(&self, state: &Node) -> Score {
        thread::sleep(self.0);
        TreeEval.evaluate(state)
    }
}

/// Fails the way a worker that ran out of memory would.
#[derive(Debug, Clone, Copy)]
pub struct PanicEval;

impl Evaluator<Node> for PanicEval {
    fn evaluate(&self, _state: &Node) -> Score {
        panic!("memory allocation failed");
    }
}

/// Depth-limited minimax without pruning, for cross-checking.
pub fn plain_minimax(node: &Node, depth: u32, maximizing: bool) -> Score {
    let moves = node.legal_moves();
    if depth == 0 || moves.is_empty() {
        return TreeEval.evaluate(node);
    }
    let values = moves
        .iter()
        .map(|m| plain_minimax(&node.apply(m), depth - 1, !maximizing));
    if maximizing {
        values.fold(f64::NEG_INFINITY, f64::max)
    } else {
        values.fold(f64::INFINITY, f64::min)
    }
}
