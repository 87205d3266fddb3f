//! Weighted, directed edges between neurons.

use rand::Rng;
use rand::distributions::{Distribution, Uniform};

use crate::NeuronId;

/// Initial weights are drawn uniformly from `[WEIGHT_INIT_LOW, WEIGHT_INIT_HIGH)`.
pub const WEIGHT_INIT_LOW: f64 = -2.0;
pub const WEIGHT_INIT_HIGH: f64 = 2.0;

/// Stable handle to a connection inside a [`crate::Network`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(pub(crate) usize);

impl ConnectionId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A synapse from one neuron to a neuron in the next layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    id: ConnectionId,
    from: NeuronId,
    to: NeuronId,
    weight: f64,
    /// Last update computed by the owning neuron, carried into the next step as momentum.
    pub(crate) weight_delta: f64,
}

impl Connection {
    pub fn new_with_rng<R: Rng + ?Sized>(
        id: ConnectionId,
        from: NeuronId,
        to: NeuronId,
        rng: &mut R,
    ) -> Self {
        let dist = Uniform::new(WEIGHT_INIT_LOW, WEIGHT_INIT_HIGH);
        Self {
            id,
            from,
            to,
            weight: dist.sample(rng),
            weight_delta: 0.0,
        }
    }

    #[inline]
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    #[inline]
    pub fn from(&self) -> NeuronId {
        self.from
    }

    #[inline]
    pub fn to(&self) -> NeuronId {
        self.to
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[inline]
    pub fn weight_delta(&self) -> f64 {
        self.weight_delta
    }

    /// Adds `delta` to the weight.
    #[inline]
    pub fn update_weight(&mut self, delta: f64) {
        self.weight += delta;
    }
}
