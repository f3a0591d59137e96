use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::{self, Debug};
use std::hash::Hash;

use super::frequency::FrequencyTable;
use super::SymbolFrequency;
use crate::trace::{TraceEvent, TraceSink};

pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind<S> {
    Leaf { symbol: S },
    Inner { left: NodeId, right: NodeId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<S> {
    frequency: usize,
    kind: NodeKind<S>,
}

impl<S> Node<S> {
    pub fn frequency(&self) -> usize {
        self.frequency
    }

    pub fn kind(&self) -> &NodeKind<S> {
        &self.kind
    }

    pub fn symbol(&self) -> Option<&S> {
        match &self.kind {
            NodeKind::Leaf { symbol } => Some(symbol),
            NodeKind::Inner { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }
}

/// Binary code tree. Nodes live in an arena and refer to their children by
/// index; every inner node owns exactly two children.
#[derive(Debug, Clone)]
pub struct CodeTree<S> {
    nodes: Vec<Node<S>>,
    root_index: NodeId,
}

// Ordered by frequency first, then by arena index. Nodes are appended to the
// arena in the order they enter the queue, so the index is the insertion
// sequence and equal frequencies are popped oldest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
struct QueueEntry {
    frequency: usize,
    index: NodeId,
}

impl<S: Ord + Hash + Clone> CodeTree<S> {
    /// Greedy minimum-frequency merging. Returns `None` for an empty table.
    ///
    /// Leaves enter the queue in ascending symbol order, which makes the
    /// shape of the tree deterministic for a given input.
    pub fn build(frequencies: &FrequencyTable<S>, sink: &mut impl TraceSink<S>) -> Option<Self> {
        if frequencies.is_empty() {
            return None;
        }
        let leaf_count = frequencies.distinct_symbols();
        let mut nodes = Vec::with_capacity(2 * leaf_count - 1);
        let mut heap = BinaryHeap::with_capacity(leaf_count);

        for SymbolFrequency { symbol, frequency } in frequencies.sorted() {
            sink.record(&TraceEvent::FrequencyCounted {
                symbol: &symbol,
                frequency,
            });
            sink.record(&TraceEvent::LeafQueued {
                symbol: &symbol,
                frequency,
            });
            let index = nodes.len();
            nodes.push(Node {
                frequency,
                kind: NodeKind::Leaf { symbol },
            });
            heap.push(Reverse(QueueEntry { frequency, index }));
        }

        while heap.len() > 1 {
            let (Some(Reverse(left)), Some(Reverse(right))) = (heap.pop(), heap.pop()) else {
                break;
            };
            let merged = QueueEntry {
                frequency: left.frequency + right.frequency,
                index: nodes.len(),
            };
            sink.record(&TraceEvent::NodesMerged {
                left: left.frequency,
                right: right.frequency,
                merged: merged.frequency,
            });
            nodes.push(Node {
                frequency: merged.frequency,
                kind: NodeKind::Inner {
                    left: left.index,
                    right: right.index,
                },
            });
            heap.push(Reverse(merged));
        }

        let Reverse(root) = heap.pop()?;
        sink.record(&TraceEvent::RootSelected {
            frequency: root.frequency,
        });
        Some(CodeTree {
            nodes,
            root_index: root.index,
        })
    }
}

impl<S> CodeTree<S> {
    pub fn root_index(&self) -> NodeId {
        self.root_index
    }

    pub fn root(&self) -> &Node<S> {
        &self.nodes[self.root_index]
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<S>> {
        self.nodes.get(id)
    }

    /// Frequency of the root, equal to the length of the counted sequence.
    pub fn frequency(&self) -> usize {
        self.root().frequency
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    pub fn is_single_leaf(&self) -> bool {
        self.root().is_leaf()
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut node_index_stack = vec![(self.root_index, 0)];
        while let Some((index, depth)) = node_index_stack.pop() {
            match self.nodes[index].kind {
                NodeKind::Inner { left, right } => {
                    node_index_stack.push((left, depth + 1));
                    node_index_stack.push((right, depth + 1));
                }
                NodeKind::Leaf { .. } => max_depth = max_depth.max(depth),
            }
        }
        max_depth
    }

    pub(super) fn child(&self, index: NodeId, take_right: bool) -> Option<NodeId> {
        match self.nodes[index].kind {
            NodeKind::Inner { left, right } => Some(if take_right { right } else { left }),
            NodeKind::Leaf { .. } => None,
        }
    }
}

const BOX_DRAWINGS_VERTICAL_AND_RIGHT: &str = "├─";
const BOX_DRAWINGS_UP_AND_RIGHT: &str = "└─";
const BOX_DRAWINGS_VERTICAL: &str = "│   ";
const SPACE: &str = "    ";

struct OutlineEntry {
    index: NodeId,
    prefix: String,
    edge: Option<(char, bool)>,
}

// Tree visualization
impl<S: Debug> Node<S> {
    fn label(&self) -> String {
        match &self.kind {
            NodeKind::Leaf { symbol } => format!("{:?} (f:{})", symbol, self.frequency),
            NodeKind::Inner { .. } => format!("(f:{})", self.frequency),
        }
    }
}

impl<S: Debug> fmt::Display for CodeTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![OutlineEntry {
            index: self.root_index,
            prefix: String::new(),
            edge: None,
        }];
        while let Some(entry) = stack.pop() {
            let node = &self.nodes[entry.index];
            let child_prefix = match entry.edge {
                None => {
                    writeln!(f, "{}", node.label())?;
                    String::new()
                }
                Some((bit, is_last)) => {
                    let connector = if is_last {
                        BOX_DRAWINGS_UP_AND_RIGHT
                    } else {
                        BOX_DRAWINGS_VERTICAL_AND_RIGHT
                    };
                    writeln!(f, "{}{}{}─ {}", entry.prefix, connector, bit, node.label())?;
                    let continuation = if is_last { SPACE } else { BOX_DRAWINGS_VERTICAL };
                    format!("{}{}", entry.prefix, continuation)
                }
            };
            if let NodeKind::Inner { left, right } = node.kind {
                stack.push(OutlineEntry {
                    index: right,
                    prefix: child_prefix.clone(),
                    edge: Some(('1', true)),
                });
                stack.push(OutlineEntry {
                    index: left,
                    prefix: child_prefix,
                    edge: Some(('0', false)),
                });
            }
        }
        Ok(())
    }
}
