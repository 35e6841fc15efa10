use std::fmt;

use crate::code_table::{Code, CodeTable};
use crate::frequency::FrequencyTable;
use crate::min_heap::MinHeap;

/// Code given to the only symbol of a single-symbol input.
pub const SINGLE_SYMBOL_CODE: &str = "0";

/// Index of a node in the tree's arena.
pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        weight: usize,
        symbol: char,
    },
    Internal {
        weight: usize,
        left: NodeId,
        right: NodeId,
    },
}

impl HuffNode {
    pub fn weight(&self) -> usize {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }
}

// Leaves enter the arena in first-occurrence order and merged nodes are
// appended after them, so the arena index is the tie-break between equal
// weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct HeapEntry {
    weight: usize,
    node: NodeId,
}

#[derive(Debug, Clone, Default)]
pub struct HuffmanTree {
    nodes: Vec<HuffNode>,
    root: Option<NodeId>,
}

impl HuffmanTree {
    pub fn from_text(text: &str) -> Self {
        HuffmanTree::from_frequencies(&FrequencyTable::from_text(text))
    }

    pub fn from_frequencies(frequencies: &FrequencyTable) -> Self {
        let mut nodes: Vec<HuffNode> = Vec::with_capacity(2 * frequencies.len());
        nodes.extend(frequencies.iter().map(|c| HuffNode::Leaf {
            weight: c.count,
            symbol: c.symbol,
        }));

        let mut heap = MinHeap::build(
            nodes
                .iter()
                .enumerate()
                .map(|(node, n)| HeapEntry {
                    weight: n.weight(),
                    node,
                })
                .collect(),
        );
        log::trace!("building tree over {} leaves", heap.heap_size());

        let root = loop {
            let Some(left) = heap.extract_min() else {
                break None;
            };
            let Some(right) = heap.extract_min() else {
                break Some(left.node);
            };

            let node = nodes.len();
            let weight = left.weight + right.weight;
            nodes.push(HuffNode::Internal {
                weight,
                left: left.node,
                right: right.node,
            });
            heap.insert(HeapEntry { weight, node });
        };

        HuffmanTree { nodes, root }
    }

    pub fn root(&self) -> Option<&HuffNode> {
        self.root.and_then(|id| self.node(id))
    }

    pub fn node(&self, id: NodeId) -> Option<&HuffNode> {
        self.nodes.get(id)
    }

    /// Weight of the root, which is the number of symbols the tree was built from.
    pub fn weight(&self) -> usize {
        self.root().map_or(0, HuffNode::weight)
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, HuffNode::Leaf { .. }))
            .count()
    }

    /// Walks the tree depth first, appending `0` going left and `1` going right.
    pub fn code_table(&self) -> CodeTable {
        let mut table = CodeTable::new();
        let Some(root) = self.root else {
            return table;
        };

        let mut stack = vec![(root, String::new())];
        while let Some((id, path)) = stack.pop() {
            match &self.nodes[id] {
                HuffNode::Leaf { symbol, .. } => {
                    // a lone leaf is the root and has an empty path
                    let path = if path.is_empty() {
                        SINGLE_SYMBOL_CODE.to_owned()
                    } else {
                        path
                    };
                    table.insert(*symbol, Code::from_path(path));
                }
                HuffNode::Internal { left, right, .. } => {
                    let mut right_path = path.clone();
                    right_path.push('1');
                    stack.push((*right, right_path));

                    let mut left_path = path;
                    left_path.push('0');
                    stack.push((*left, left_path));
                }
            }
        }
        table
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.root else {
            return writeln!(f, "(empty)");
        };

        let mut stack = vec![(root, 0, "root")];
        while let Some((id, depth, label)) = stack.pop() {
            let indent = "  ".repeat(depth);
            match &self.nodes[id] {
                HuffNode::Leaf { symbol, weight } => {
                    writeln!(f, "{indent}{label}-> Leaf: {symbol:?} [weight: {weight}]")?;
                }
                HuffNode::Internal { weight, left, right } => {
                    writeln!(f, "{indent}{label}-> Internal [weight: {weight}]")?;
                    stack.push((*right, depth + 1, "R"));
                    stack.push((*left, depth + 1, "L"));
                }
            }
        }
        Ok(())
    }
}
