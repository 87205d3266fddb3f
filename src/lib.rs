//! A multilayer perceptron built as a graph of neurons and synapses.
//!
//! `mlp-graph` models a fixed input → hidden → output network the way the textbook
//! draws it: every neuron is a node that owns its bias, activation, and gradient,
//! and every weight lives on a [`Connection`] between two neurons. Training is
//! online backpropagation (one sample at a time) with momentum.
//!
//! # Design
//!
//! - The [`Network`] owns two flat arenas, one of [`Neuron`]s and one of
//!   [`Connection`]s. [`NeuronId`] and [`ConnectionId`] are indices into them.
//!   Neurons refer to their incoming and outgoing connections by id, so there are
//!   no reference cycles.
//! - A single [`Activation`] is shared by the hidden and output layers. Input
//!   neurons pass their values through unchanged.
//! - Randomness is injected through the builder (`build_with_seed` /
//!   `build_with_rng`); the network's `StdRng` drives weight initialization and the
//!   per-epoch shuffle.
//!
//! # Building vs training
//!
//! Configuring a network creates no neurons. [`Network::initialize`] builds the
//! graph; [`Network::train`] calls it for you and then runs the epochs, which means
//! every `train` call starts from fresh weights. [`Network::fit`] runs epochs on the
//! existing graph instead.
//!
//! # Errors
//!
//! Shape problems are reported as [`Error::InvalidShape`] before any neuron state
//! changes; using a network before `initialize` is an [`Error::InvalidConfig`].
//!
//! # Quick start
//!
//! ```rust
//! use mlp_graph::{Activation, BiasMode, Dataset, NetworkBuilder};
//!
//! # fn main() -> mlp_graph::Result<()> {
//! let mut xor = Dataset::from_rows(
//!     &[
//!         vec![0.0, 0.0],
//!         vec![0.0, 1.0],
//!         vec![1.0, 0.0],
//!         vec![1.0, 1.0],
//!     ],
//!     &[vec![0.0], vec![1.0], vec![1.0], vec![0.0]],
//! )?;
//!
//! let mut net = NetworkBuilder::new(2, 3, 1)
//!     .activation(Activation::Sigmoid)
//!     .learning_rate(0.5)
//!     .momentum(0.5)
//!     .bias(BiasMode::Learned)
//!     .build_with_seed(0)?;
//!
//! let report = net.train(&mut xor, 100)?;
//! assert_eq!(report.epochs, 100);
//!
//! let y = net.predict(&[1.0, 0.0])?;
//! assert_eq!(y.len(), 1);
//! println!("shape={} y={y:?}", net.shape());
//! # Ok(())
//! # }
//! ```

pub mod activation;
pub mod builder;
pub mod connection;
pub mod data;
pub mod error;
pub mod layer;
pub mod network;
pub mod neuron;
pub mod shape;
pub mod train;

pub use activation::Activation;
pub use builder::{BiasMode, NetworkBuilder, NetworkConfig};
pub use connection::{Connection, ConnectionId};
pub use data::{Dataset, Sample};
pub use error::{Error, Result};
pub use layer::{Layer, LayerKind};
pub use network::Network;
pub use neuron::{Neuron, NeuronId};
pub use shape::NetworkShape;
pub use train::TrainReport;
