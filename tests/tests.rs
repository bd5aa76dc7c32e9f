//! Statistical and end-to-end properties of the network, driven by seeded random streams so
//! the results are reproducible.

use assert_approx_eq::assert_approx_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use grn::{Network, NodeRef};

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[test]
fn test_weight_distribution() {
    let mut rng = rng(1);
    let topology = [1, 1, 2, 2];
    let (min, max) = (0.4, 0.6);

    let mut sum = 0.0;
    let mut count = 0;
    for _ in 0..1000 {
        let network = Network::new(&topology, &mut rng, min, max).unwrap();
        sum += network.sum_weights_biases();
        count += network.count_weights_biases();
    }

    let mean = sum / count as f64;
    let expected = (min + max) / 2.0;
    assert!(
        (mean - expected).abs() < 0.01,
        "empirical mean {} strayed from {}",
        mean,
        expected
    );
}

#[test]
fn test_mutation_statistical_neutrality() {
    let mut rng = rng(2);
    let constant = 0.1;
    let base = Network::new(&[2, 2], &mut rng, constant, constant).unwrap();

    // Zero-mean Gaussian steps must not drift the mean away from the starting constant
    let mut sum = 0.0;
    let mut count = 0;
    for _ in 0..500 {
        let mutated = base.mutate(&mut rng, 0.5, 0.1).unwrap();
        sum += mutated.sum_weights_biases();
        count += mutated.count_weights_biases();
    }

    let mean = sum / count as f64;
    assert!(
        (mean - constant).abs() < 0.01,
        "mutation drifted the mean to {}",
        mean
    );
}

#[test]
fn test_rebuild_differs() {
    let mut rng = rng(3);
    let topology = [1, 2, 3, 4];

    let a = Network::new(&topology, &mut rng, 0.4, 0.6).unwrap();
    let b = a.clone();
    assert_eq!(a, b);

    // A fresh draw over the same topology produces a different network
    let c = Network::new(&topology, &mut rng, 0.4, 0.6).unwrap();
    assert_ne!(a, c);
}

#[test]
fn test_input_update_pipeline() {
    let mut network = Network::new(&[2, 1], &mut rng(4), 0.5, 0.5).unwrap();
    let output = NodeRef::new(1, 0);
    network.set_weights(output, &[1.0, 1.0]);
    network.set_bias(output, 0.5);

    let fed = network.take_input(&[2.0, 2.0]).unwrap();
    assert_ne!(network, fed);

    // Both senders are active (state 2 exceeds their zero bias), so the output node receives
    // 2.0, exceeds its 0.5 bias, and activates
    let updated = fed.update();
    assert_ne!(fed, updated);
    assert_eq!(1.0, updated[output].state());

    // The injected input survives the pass
    assert_eq!(2.0, updated[NodeRef::new(0, 0)].state());
}

#[test]
fn test_self_connection_evolves() {
    let mut rng = rng(5);
    let network = Network::new(&[2, 2], &mut rng, 0.4, 0.6).unwrap();
    assert!(!network.is_self_connected(1));

    // Self-connecting appends neutral weights that mutation can then act on
    let connected = network.self_connect(1);
    assert!(connected.is_self_connected(1));

    let mutated = connected.mutate(&mut rng, 1.0, 0.5).unwrap();
    assert!(mutated.is_self_connected(1));
    assert!(mutated[1]
        .iter()
        .flat_map(|node| node.incoming())
        .any(|connection| connection.source().layer() == 1 && connection.weight() != 0.0));
}

#[test]
fn test_mean_converges_under_constant_draws() {
    let constant = 0.1;
    let network = Network::new(&[2, 2], &mut rng(6), constant, constant).unwrap();

    assert_approx_eq!(constant, network.mean_weights_biases().unwrap());
    assert_approx_eq!(0.0, network.variance_weights_biases().unwrap());
}
