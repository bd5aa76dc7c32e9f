//! Signal propagation through a network.

use crate::layer::Layer;
use crate::network::{Error, Network};
use crate::node::{Node, NodeRef};

/// Returns the contribution of a sending node: `1.0` if its state exceeds its own bias, `0.0`
/// otherwise.
fn threshold(source: &Node) -> f64 {
    if source.state() > source.bias() {
        1.0
    } else {
        0.0
    }
}

impl Network {
    /// Computes the signal received by the node at `at`: the sum over its incoming
    /// connections of the connection weight times the thresholded state of the sending node.
    /// A node with no incoming connections receives `0.0`.
    ///
    /// # Panics
    ///
    /// Panics if `at` is out of range.
    pub fn receive_signal(&self, at: NodeRef) -> f64 {
        self[at]
            .incoming()
            .iter()
            .map(|connection| connection.weight() * threshold(&self[connection.source()]))
            .sum()
    }

    /// Returns a new value for layer `layer` in which each node's state is set to `1.0` if
    /// the signal it receives exceeds its own bias and `0.0` otherwise, computed against
    /// `self`'s current states. `self` is untouched.
    ///
    /// # Panics
    ///
    /// Panics if `layer` is out of range.
    pub fn update_layer(&self, layer: usize) -> Layer {
        let mut updated = self.layers()[layer].clone();

        for (j, node) in updated.iter_mut().enumerate() {
            let signal = self.receive_signal(NodeRef::new(layer, j));
            node.set_state(if signal > node.bias() { 1.0 } else { 0.0 });
        }

        updated
    }

    /// Returns a new `Network` propagated one pass: layers are updated in ascending order,
    /// and each layer reads the states its predecessor was given earlier in the same pass, so
    /// a single call carries an input through the whole network.
    ///
    /// Layer 0 is skipped and keeps its externally supplied states (see
    /// [`take_input`][Self::take_input]); its nodes have no incoming connections, so an
    /// update would only overwrite the input with a zero-signal comparison. Self-connections
    /// within a layer read that layer's pre-update states.
    pub fn update(&self) -> Network {
        let mut updated = self.clone();

        for i in 1..updated.layers.len() {
            // Layers below `i` already hold their new states; layer `i` still holds its old
            // ones, which is what its self-connections must read
            let new_layer = updated.update_layer(i);
            updated.layers[i] = new_layer;
        }

        updated
    }

    /// Returns a new `Network` with the states of layer 0 set to `values`, node `i` receiving
    /// `values[i]`; all other nodes are unchanged. `self` is untouched.
    ///
    /// Fails with [`Error::InputSizeMismatch`] if the number of values differs from the size
    /// of the input layer; the input is never truncated or padded.
    pub fn take_input(&self, values: &[f64]) -> Result<Network, Error> {
        let expected = self.layers[0].len();
        if values.len() != expected {
            return Err(Error::InputSizeMismatch {
                expected,
                actual: values.len(),
            });
        }

        let mut fed = self.clone();
        for (node, &value) in fed.layers[0].iter_mut().zip(values) {
            node.set_state(value);
        }

        Ok(fed)
    }
}
