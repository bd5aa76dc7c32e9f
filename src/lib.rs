//! An implementation of a layered gene regulatory network (GRN): a feed-forward signaling
//! graph used as a genotype-to-phenotype mapping in evolutionary-computation experiments.
//! The [`Network`] struct has methods for injecting input, propagating signals layer by
//! layer, mutating weights and biases, self-connecting a layer, and inspecting aggregate
//! statistics.
//!
//! Every transformation produces a new, independently owned value. Connections are stored as
//! indices into the owning network's layers rather than references, so copies are always
//! self-contained and populations of networks can be built and mutated in parallel from
//! seeded, caller-owned random streams.
//!
//! # Examples
//!
//! ```
//! use grn::Network;
//!
//! let mut rng = rand::thread_rng();
//!
//! // Two input nodes, a hidden layer of three, one output node
//! let network = Network::new(&[2, 3, 1], &mut rng, 0.4, 0.6).unwrap();
//!
//! // Inject an input and propagate it through the layers
//! let updated = network.take_input(&[1.0, 0.0]).unwrap().update();
//! let output = updated.layers()[2][0].state();
//! assert!(output == 0.0 || output == 1.0);
//!
//! // Produce a perturbed offspring; the parent is untouched
//! let offspring = network.mutate(&mut rng, 0.1, 0.05).unwrap();
//! ```

mod layer;
mod node;
pub mod network;

pub use self::layer::Layer;
pub use self::node::{Connection, Node, NodeRef};
pub use self::network::{Error, MutationError, Network};
