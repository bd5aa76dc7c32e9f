//! The atomic signaling units of a [`Network`][crate::Network]: nodes and their incoming
//! connections.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A reference to a [`Node`] by its position in a network's layer sequence.
///
/// Connections are purely relational: a `NodeRef` indexes into the layers of the network that
/// owns it and never owns the referenced node. Copying a network copies these indices
/// unchanged, so the copy's connections automatically refer to the copy's own nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeRef {
    layer: usize,
    node: usize,
}

impl NodeRef {
    /// Returns a new `NodeRef` pointing at node `node` of layer `layer`.
    pub fn new(layer: usize, node: usize) -> Self {
        Self { layer, node }
    }

    /// Returns the index of the referenced layer.
    pub fn layer(&self) -> usize {
        self.layer
    }

    /// Returns the index of the referenced node within its layer.
    pub fn node(&self) -> usize {
        self.node
    }
}

/// A weighted incoming connection from a sending node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Connection {
    weight: f64,
    source: NodeRef,
}

impl Connection {
    /// Returns a new `Connection` from `source` with the given `weight`.
    pub fn new(weight: f64, source: NodeRef) -> Self {
        Self { weight, source }
    }

    /// Returns the weight of this `Connection`.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns a mutable reference to the weight of this `Connection`.
    pub fn mut_weight(&mut self) -> &mut f64 {
        &mut self.weight
    }

    /// Returns the reference to the sending node.
    pub fn source(&self) -> NodeRef {
        self.source
    }
}

/// A signal-accumulating unit with a bias, a state, and a list of incoming weighted
/// connections.
///
/// Two nodes are equal iff their bias, state, and incoming connections (weights and source
/// *indices*) are all equal. Equality never recurses through the referenced nodes, so it is
/// well-defined and O(size) even for self-connected layers.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    bias: f64,
    state: f64,
    incoming: Vec<Connection>,
}

impl Node {
    /// Returns a new `Node` with zero bias, zero state, and no incoming connections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bias acting on this `Node`.
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Returns the internal state of this `Node`.
    pub fn state(&self) -> f64 {
        self.state
    }

    /// Sets the bias acting on this `Node`.
    pub fn set_bias(&mut self, bias: f64) {
        self.bias = bias;
    }

    /// Sets the internal state of this `Node`.
    pub fn set_state(&mut self, state: f64) {
        self.state = state;
    }

    /// Returns the incoming connections of this `Node`.
    pub fn incoming(&self) -> &[Connection] {
        &self.incoming
    }

    /// Returns an iterator over the weights of the incoming connections.
    pub fn weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.incoming.iter().map(Connection::weight)
    }

    /// Returns an iterator over the references to the sending nodes.
    pub fn sources(&self) -> impl Iterator<Item = NodeRef> + '_ {
        self.incoming.iter().map(Connection::source)
    }

    /// Replaces the incoming connections with zero-weight connections from `sources`, in
    /// order. Weights are installed separately with [`set_weights`][Self::set_weights].
    pub fn set_sources(&mut self, sources: &[NodeRef]) {
        self.incoming = sources
            .iter()
            .map(|&source| Connection::new(0.0, source))
            .collect();
    }

    /// Replaces the weight of each incoming connection positionally.
    ///
    /// # Panics
    ///
    /// Panics if `weights.len()` differs from the incoming-connection count. Callers must
    /// install the sending nodes first and keep the two lengths in sync.
    pub fn set_weights(&mut self, weights: &[f64]) {
        assert_eq!(
            weights.len(),
            self.incoming.len(),
            "weight count must match the incoming-connection count"
        );

        for (connection, &weight) in self.incoming.iter_mut().zip(weights) {
            *connection.mut_weight() = weight;
        }
    }

    /// Appends a connection after the existing wiring.
    pub(crate) fn push_connection(&mut self, connection: Connection) {
        self.incoming.push(connection);
    }

    /// Returns mutable references to the incoming connections.
    pub(crate) fn mut_incoming(&mut self) -> &mut [Connection] {
        &mut self.incoming
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let node = Node::new();

        assert_eq!(0.0, node.bias());
        assert_eq!(0.0, node.state());
        assert!(node.incoming().is_empty());
    }

    #[test]
    fn test_wiring_protocol() {
        let mut node = Node::new();
        node.set_sources(&[NodeRef::new(0, 0), NodeRef::new(0, 1)]);

        // Sources are installed with zero weights until they are set explicitly
        assert!(node.weights().all(|w| w == 0.0));

        node.set_weights(&[0.25, -0.5]);
        assert_eq!(vec![0.25, -0.5], node.weights().collect::<Vec<_>>());
        assert_eq!(NodeRef::new(0, 1), node.incoming()[1].source());
    }

    #[test]
    #[should_panic]
    fn test_weight_count_mismatch() {
        let mut node = Node::new();
        node.set_sources(&[NodeRef::new(0, 0)]);
        node.set_weights(&[1.0, 2.0]);
    }

    #[test]
    fn test_equality() {
        let mut a = Node::new();
        a.set_sources(&[NodeRef::new(1, 0)]);
        a.set_weights(&[0.5]);

        let mut b = a.clone();
        assert_eq!(a, b);

        b.set_state(3.142356987);
        assert_ne!(a, b);

        // Equality compares source indices, never the referenced node's own contents
        let mut c = a.clone();
        c.set_sources(&[NodeRef::new(1, 1)]);
        c.set_weights(&[0.5]);
        assert_ne!(a, c);
    }
}
