//! An ordered group of nodes sharing the same incoming-connection topology.

use std::ops::Index;
use std::slice;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::node::Node;

/// An ordered sequence of [`Node`]s.
///
/// Node index within a layer is meaningful: it is used for wiring (node *i* of layer *L*
/// connects to all nodes of layer *L - 1* in order) and for [`NodeRef`][crate::NodeRef]
/// resolution. A layer's length is fixed at network construction.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Layer {
    nodes: Vec<Node>,
}

impl Layer {
    /// Returns a new `Layer` of `len` default nodes.
    pub fn new(len: usize) -> Self {
        Self {
            nodes: vec![Node::new(); len],
        }
    }

    /// Returns the number of nodes in this `Layer`.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether this `Layer` has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the nodes of this `Layer` in order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns an iterator over the nodes of this `Layer`.
    pub fn iter(&self) -> slice::Iter<Node> {
        self.nodes.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> slice::IterMut<Node> {
        self.nodes.iter_mut()
    }

    pub(crate) fn mut_node(&mut self, index: usize) -> &mut Node {
        &mut self.nodes[index]
    }
}

impl Index<usize> for Layer {
    type Output = Node;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.nodes[idx]
    }
}
