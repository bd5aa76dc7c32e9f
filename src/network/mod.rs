//! The gene regulatory network struct.

mod error;
mod propagate;

pub use error::{Error, MutationError};

use rand::Rng;
use rand_distr::{Bernoulli, Distribution, Normal, Uniform};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::ops::Index;

use crate::layer::Layer;
use crate::node::{Connection, Node, NodeRef};

// NOTE: All `Network` values must keep their wiring invariants: layer 0 has no incoming
//       connections, and every node of layer i > 0 references exactly the nodes of layer
//       i - 1 in order, with self-connections only ever appended after that wiring.
//       Transformations clone and never hand out `&mut Node`, so connections cannot be
//       repointed outside the owning network's layers.

/// A layered, feed-forward gene regulatory network.
///
/// A `Network` is an ordered sequence of [`Layer`]s; layer 0 is the input layer and the last
/// layer is the output layer. Connections are stored as indices into the owning network's
/// layer sequence, so every transformation (`take_input`, `update`, `mutate`, `self_connect`)
/// is a pure value transformation: it reads `self` and returns a new, independently owned
/// `Network`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Network {
    layers: Vec<Layer>,
}

impl Network {
    /// Returns a new `Network` with the given topology (node count per layer, layer 0 first).
    ///
    /// Every node of layer i > 0 is wired to all nodes of layer i - 1 in order, and its
    /// weights and bias are drawn i.i.d. from the uniform distribution on
    /// `[min_weight, max_weight]` (inclusive, so a degenerate range draws the constant).
    /// Layer 0 receives no connections and keeps the default bias and state of zero.
    pub fn new<R: Rng>(
        topology: &[usize],
        rng: &mut R,
        min_weight: f64,
        max_weight: f64,
    ) -> Result<Self, Error> {
        if topology.is_empty() {
            return Err(Error::EmptyTopology);
        }
        if !min_weight.is_finite() || !max_weight.is_finite() || min_weight > max_weight {
            return Err(Error::InvalidWeightRange(min_weight, max_weight));
        }

        let dist = Uniform::new_inclusive(min_weight, max_weight);
        let mut layers = Vec::with_capacity(topology.len());

        for (i, &len) in topology.iter().enumerate() {
            let mut layer = Layer::new(len);

            if i > 0 {
                let sources: Vec<NodeRef> = (0..topology[i - 1])
                    .map(|j| NodeRef::new(i - 1, j))
                    .collect();

                for node in layer.iter_mut() {
                    node.set_sources(&sources);

                    let weights: Vec<f64> =
                        (0..sources.len()).map(|_| dist.sample(rng)).collect();
                    node.set_weights(&weights);
                    node.set_bias(dist.sample(rng));
                }
            }

            layers.push(layer);
        }

        Ok(Self { layers })
    }

    /// Returns the layers of this `Network` in order, layer 0 first.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Returns the number of layers in this `Network`.
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Sets the state of the node at `at`.
    ///
    /// # Panics
    ///
    /// Panics if `at` is out of range.
    pub fn set_state(&mut self, at: NodeRef, state: f64) {
        self.layers[at.layer()].mut_node(at.node()).set_state(state);
    }

    /// Sets the bias of the node at `at`.
    ///
    /// # Panics
    ///
    /// Panics if `at` is out of range.
    pub fn set_bias(&mut self, at: NodeRef, bias: f64) {
        self.layers[at.layer()].mut_node(at.node()).set_bias(bias);
    }

    /// Replaces the incoming-connection weights of the node at `at`, positionally.
    ///
    /// # Panics
    ///
    /// Panics if `at` is out of range or if `weights.len()` differs from the node's
    /// incoming-connection count.
    pub fn set_weights(&mut self, at: NodeRef, weights: &[f64]) {
        self.layers[at.layer()].mut_node(at.node()).set_weights(weights);
    }

    /// Returns a new `Network` in which every bias and every connection weight of `self` has,
    /// independently and with probability `probability`, been perturbed by a draw from
    /// `Normal(0, step_stddev)`. `self` is untouched.
    ///
    /// Layer 0 takes part structurally (its biases are gated like any other), although it has
    /// no weights to perturb. The draw order is fixed: for each node in layer-then-node order,
    /// the bias gate, the bias step if taken, then for each incoming connection in order its
    /// gate and step. This sequence is part of the reproducibility contract for seeded
    /// streams.
    pub fn mutate<R: Rng>(
        &self,
        rng: &mut R,
        probability: f64,
        step_stddev: f64,
    ) -> Result<Network, MutationError> {
        let gate = Bernoulli::new(probability)
            .map_err(|_| MutationError::InvalidProbability(probability))?;
        if !step_stddev.is_finite() {
            return Err(MutationError::InvalidStepSize(step_stddev));
        }
        let step = Normal::new(0.0, step_stddev)
            .map_err(|_| MutationError::InvalidStepSize(step_stddev))?;

        let mut mutated = self.clone();

        for layer in &mut mutated.layers {
            for node in layer.iter_mut() {
                if gate.sample(rng) {
                    let bias = node.bias() + step.sample(rng);
                    node.set_bias(bias);
                }

                for connection in node.mut_incoming() {
                    if gate.sample(rng) {
                        *connection.mut_weight() += step.sample(rng);
                    }
                }
            }
        }

        Ok(mutated)
    }

    /// Returns a new `Network` whose layer `layer` is augmented so that every node of that
    /// layer also receives a zero-weight connection from every node of the same layer, itself
    /// included. The original wiring is preserved; the new connections are appended after it,
    /// in node order, as a neutral starting point meant to be mutated later.
    ///
    /// # Panics
    ///
    /// Panics if `layer` is out of range.
    pub fn self_connect(&self, layer: usize) -> Network {
        let mut connected = self.clone();
        let len = connected.layers[layer].len();

        for node in connected.layers[layer].iter_mut() {
            for j in 0..len {
                node.push_connection(Connection::new(0.0, NodeRef::new(layer, j)));
            }
        }

        connected
    }

    /// Returns whether every node of layer `layer` receives a connection from every node of
    /// that same layer. Sources are compared by index, so two structurally equal but distinct
    /// nodes never satisfy self-connection.
    ///
    /// # Panics
    ///
    /// Panics if `layer` is out of range.
    pub fn is_self_connected(&self, layer: usize) -> bool {
        let nodes = &self.layers[layer];

        nodes.iter().all(|node| {
            (0..nodes.len()).all(|j| {
                let target = NodeRef::new(layer, j);
                node.sources().any(|source| source == target)
            })
        })
    }

    /// Counts one value per bias and one per connection weight, summed over all layers except
    /// layer 0 (which has no incoming connections and whose biases are not counted toward
    /// training statistics).
    pub fn count_weights_biases(&self) -> usize {
        self.layers[1..]
            .iter()
            .flat_map(Layer::iter)
            .map(|node| 1 + node.incoming().len())
            .sum()
    }

    /// Sums every bias and every connection weight over all layers except layer 0.
    pub fn sum_weights_biases(&self) -> f64 {
        self.layers[1..]
            .iter()
            .flat_map(Layer::iter)
            .map(|node| node.bias() + node.weights().sum::<f64>())
            .sum()
    }

    /// Returns the mean of the values counted by
    /// [`count_weights_biases`][Self::count_weights_biases], or
    /// [`Error::NoWeightsOrBiases`] for a single-layer network.
    pub fn mean_weights_biases(&self) -> Result<f64, Error> {
        let count = self.count_weights_biases();
        if count == 0 {
            return Err(Error::NoWeightsOrBiases);
        }

        Ok(self.sum_weights_biases() / count as f64)
    }

    /// Returns the population variance of the values counted by
    /// [`count_weights_biases`][Self::count_weights_biases], or
    /// [`Error::NoWeightsOrBiases`] for a single-layer network.
    pub fn variance_weights_biases(&self) -> Result<f64, Error> {
        let mean = self.mean_weights_biases()?;
        let count = self.count_weights_biases();

        let sum_squares: f64 = self.layers[1..]
            .iter()
            .flat_map(Layer::iter)
            .map(|node| {
                let bias = node.bias() - mean;
                bias * bias
                    + node
                        .weights()
                        .map(|weight| {
                            let delta = weight - mean;
                            delta * delta
                        })
                        .sum::<f64>()
            })
            .sum();

        Ok(sum_squares / count as f64)
    }
}

impl Index<usize> for Network {
    type Output = Layer;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.layers[idx]
    }
}

impl Index<NodeRef> for Network {
    type Output = Node;

    fn index(&self, at: NodeRef) -> &Self::Output {
        &self.layers[at.layer()][at.node()]
    }
}
