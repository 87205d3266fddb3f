//! Network configuration.
//!
//! `NetworkBuilder` is the recommended way to configure a network. Building only
//! validates and stores the configuration: no neurons exist until
//! [`Network::initialize`] (or [`Network::train`]) runs.
//!
//! Randomness is injected here. The resulting network owns a `StdRng` that drives
//! both weight initialization and per-epoch shuffling, so a seeded build is fully
//! reproducible.

use rand::SeedableRng;
use rand::rngs::StdRng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Activation, Error, Network, Result};

pub const DEFAULT_LEARNING_RATE: f64 = 0.01;
pub const DEFAULT_MOMENTUM: f64 = 0.5;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// How neuron biases behave during training.
pub enum BiasMode {
    /// Every bias stays at its initial value of `1.0`.
    #[default]
    Fixed,
    /// Biases are updated like weights on a constant input of `1.0`, with momentum.
    Learned,
}

/// Layer sizes and hyperparameters of a 3-layer network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkConfig {
    pub input_size: usize,
    pub hidden_size: usize,
    pub output_size: usize,
    /// Shared by every hidden and output neuron. Must be set before `initialize`.
    pub activation: Option<Activation>,
    pub learning_rate: f64,
    pub momentum: f64,
    pub bias: BiasMode,
}

impl NetworkConfig {
    pub fn new(input_size: usize, hidden_size: usize, output_size: usize) -> Self {
        Self {
            input_size,
            hidden_size,
            output_size,
            ..Self::default()
        }
    }

    /// Validate sizes and hyperparameters.
    ///
    /// A missing activation is not an error here; it is reported by `initialize`.
    pub fn validate(&self) -> Result<()> {
        if self.input_size == 0 {
            return Err(Error::InvalidConfig("input_size must be > 0".to_owned()));
        }
        if self.hidden_size == 0 {
            return Err(Error::InvalidConfig("hidden_size must be > 0".to_owned()));
        }
        if self.output_size == 0 {
            return Err(Error::InvalidConfig("output_size must be > 0".to_owned()));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "learning_rate must be finite and > 0, got {}",
                self.learning_rate
            )));
        }
        if !(self.momentum.is_finite() && (0.0..1.0).contains(&self.momentum)) {
            return Err(Error::InvalidConfig(format!(
                "momentum must be finite and in [0,1), got {}",
                self.momentum
            )));
        }
        if let Some(act) = self.activation {
            act.validate()?;
        }
        Ok(())
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            input_size: 0,
            hidden_size: 0,
            output_size: 0,
            activation: None,
            learning_rate: DEFAULT_LEARNING_RATE,
            momentum: DEFAULT_MOMENTUM,
            bias: BiasMode::Fixed,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for a `Network`.
///
/// Example:
///
/// ```rust
/// use mlp_graph::{Activation, NetworkBuilder};
///
/// # fn main() -> mlp_graph::Result<()> {
/// let mut net = NetworkBuilder::new(2, 3, 1)
///     .activation(Activation::Sigmoid)
///     .learning_rate(0.3)
///     .momentum(0.5)
///     .build_with_seed(0)?;
/// net.initialize()?;
/// assert_eq!(net.connection_count(), 2 * 3 + 3 * 1);
/// # Ok(())
/// # }
/// ```
pub struct NetworkBuilder {
    config: NetworkConfig,
}

impl NetworkBuilder {
    /// Start configuring a network with the given layer sizes.
    pub fn new(input_size: usize, hidden_size: usize, output_size: usize) -> Self {
        Self {
            config: NetworkConfig::new(input_size, hidden_size, output_size),
        }
    }

    pub fn from_config(config: NetworkConfig) -> Self {
        Self { config }
    }

    pub fn activation(mut self, activation: Activation) -> Self {
        self.config.activation = Some(activation);
        self
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.config.learning_rate = learning_rate;
        self
    }

    pub fn momentum(mut self, momentum: f64) -> Self {
        self.config.momentum = momentum;
        self
    }

    pub fn bias(mut self, bias: BiasMode) -> Self {
        self.config.bias = bias;
        self
    }

    /// Build with an RNG seeded from OS entropy.
    pub fn build(self) -> Result<Network> {
        self.build_with_rng(StdRng::from_entropy())
    }

    /// Build using a deterministic seed.
    pub fn build_with_seed(self, seed: u64) -> Result<Network> {
        self.build_with_rng(StdRng::seed_from_u64(seed))
    }

    /// Build using the provided RNG.
    pub fn build_with_rng(self, rng: StdRng) -> Result<Network> {
        self.config.validate()?;
        Ok(Network::from_config(self.config, rng))
    }
}
