//! Neurons and the per-neuron steps of forward and backward propagation.
//!
//! A neuron does not own its neighbours. Everything that needs another neuron's
//! state (weighted input sums, downstream gradients, incoming weight updates) takes
//! the network's neuron and connection arenas as arguments and looks neighbours up
//! by id.
//!
//! Hidden and output neurons share one [`Activation`], owned by the network and
//! passed into every step that transforms or differentiates. Input neurons never
//! take those steps: their value is set directly.

use crate::{Activation, Connection, ConnectionId, LayerKind};

/// Bias every neuron starts with.
pub const INITIAL_BIAS: f64 = 1.0;

/// Stable handle to a neuron inside a [`crate::Network`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NeuronId(pub(crate) usize);

impl NeuronId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    id: NeuronId,
    kind: LayerKind,
    pub(crate) incoming: Vec<ConnectionId>,
    pub(crate) outgoing: Vec<ConnectionId>,
    bias: f64,
    bias_delta: f64,
    pre_activation: f64,
    activation: f64,
    gradient: f64,
}

impl Neuron {
    /// A neuron with no connections yet. Connections are attached by the network.
    pub fn new(id: NeuronId, kind: LayerKind) -> Self {
        Self {
            id,
            kind,
            incoming: Vec::new(),
            outgoing: Vec::new(),
            bias: INITIAL_BIAS,
            bias_delta: 0.0,
            pre_activation: 0.0,
            activation: 0.0,
            gradient: 0.0,
        }
    }

    #[inline]
    pub fn id(&self) -> NeuronId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    #[inline]
    pub fn incoming(&self) -> &[ConnectionId] {
        &self.incoming
    }

    #[inline]
    pub fn outgoing(&self) -> &[ConnectionId] {
        &self.outgoing
    }

    #[inline]
    pub fn bias(&self) -> f64 {
        self.bias
    }

    #[inline]
    pub fn pre_activation(&self) -> f64 {
        self.pre_activation
    }

    #[inline]
    pub fn activation(&self) -> f64 {
        self.activation
    }

    #[inline]
    pub fn gradient(&self) -> f64 {
        self.gradient
    }

    #[inline]
    pub fn is_input(&self) -> bool {
        self.kind == LayerKind::Input
    }

    /// Sets the raw value of an input neuron.
    #[inline]
    pub(crate) fn set_activation(&mut self, value: f64) {
        self.activation = value;
    }

    /// Stores the weighted input sum and applies `f` to `sum + bias`.
    #[inline]
    pub(crate) fn activate(&mut self, f: Activation, weighted_sum: f64) {
        self.pre_activation = weighted_sum;
        self.activation = f.output(weighted_sum + self.bias);
    }

    #[inline]
    pub fn error_against(&self, target: f64) -> f64 {
        target - self.activation
    }

    /// Output-layer gradient: `(target - activation) * f'(activation)`.
    #[inline]
    pub fn compute_output_gradient(&mut self, f: Activation, target: f64) {
        self.gradient = self.error_against(target) * f.output_derivative(self.activation);
    }

    /// Hidden-layer gradient from the already-summed downstream signal.
    #[inline]
    pub(crate) fn set_hidden_gradient(&mut self, f: Activation, downstream: f64) {
        self.gradient = downstream * f.output_derivative(self.activation);
    }

    /// Treats the bias as a weight on a constant input of `1.0`.
    #[inline]
    pub(crate) fn update_bias(&mut self, learning_rate: f64, momentum: f64) {
        let new_delta = learning_rate * self.gradient;
        self.bias += new_delta + momentum * self.bias_delta;
        self.bias_delta = new_delta;
    }

    /// `Σ w·a` over incoming connections, then [`Neuron::activate`].
    ///
    /// Every predecessor must already hold its activation for this pass.
    pub(crate) fn compute_activation(
        id: NeuronId,
        f: Activation,
        neurons: &mut [Neuron],
        connections: &[Connection],
    ) {
        let view: &[Neuron] = neurons;
        let mut sum = 0.0_f64;
        for &c in &view[id.0].incoming {
            let conn = &connections[c.0];
            sum = conn.weight().mul_add(view[conn.from().0].activation, sum);
        }
        neurons[id.0].activate(f, sum);
    }

    /// `(Σ to.gradient · w)` over outgoing connections, times `f'(activation)`.
    ///
    /// Every downstream neuron must already hold its gradient for this step.
    pub(crate) fn compute_hidden_gradient(
        id: NeuronId,
        f: Activation,
        neurons: &mut [Neuron],
        connections: &[Connection],
    ) {
        let view: &[Neuron] = neurons;
        let mut downstream = 0.0_f64;
        for &c in &view[id.0].outgoing {
            let conn = &connections[c.0];
            downstream = view[conn.to().0].gradient.mul_add(conn.weight(), downstream);
        }
        neurons[id.0].set_hidden_gradient(f, downstream);
    }

    /// Momentum update of every incoming weight.
    ///
    /// `new = lr · gradient · from.activation`, the weight moves by
    /// `new + momentum · previous`, and `new` is stored for the next step.
    pub(crate) fn update_incoming_weights(
        id: NeuronId,
        neurons: &[Neuron],
        connections: &mut [Connection],
        learning_rate: f64,
        momentum: f64,
    ) {
        let neuron = &neurons[id.0];
        for &c in &neuron.incoming {
            let conn = &mut connections[c.0];
            let input = neurons[conn.from().0].activation;
            let new_delta = learning_rate * neuron.gradient * input;
            let previous = conn.weight_delta;
            conn.update_weight(new_delta + momentum * previous);
            conn.weight_delta = new_delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Two inputs feeding one sigmoid neuron, with known weights.
    fn tiny_graph() -> (Vec<Neuron>, Vec<Connection>) {
        let mut rng = StdRng::seed_from_u64(0);
        let mut neurons = vec![
            Neuron::new(NeuronId(0), LayerKind::Input),
            Neuron::new(NeuronId(1), LayerKind::Input),
            Neuron::new(NeuronId(2), LayerKind::Output),
        ];
        let mut connections = Vec::new();
        for (i, w) in [(0, 0.5), (1, -0.25)] {
            let id = ConnectionId(connections.len());
            let mut c = Connection::new_with_rng(id, NeuronId(i), NeuronId(2), &mut rng);
            c.update_weight(w - c.weight());
            neurons[i].outgoing.push(id);
            neurons[2].incoming.push(id);
            connections.push(c);
        }
        (neurons, connections)
    }

    #[test]
    fn input_neuron_is_pass_through() {
        let mut n = Neuron::new(NeuronId(0), LayerKind::Input);
        assert!(n.is_input());
        assert_eq!(n.kind(), LayerKind::Input);
        assert!(n.incoming().is_empty());
        n.set_activation(0.42);
        assert_eq!(n.activation(), 0.42);
    }

    #[test]
    fn compute_activation_adds_bias_before_transform() {
        let (mut neurons, connections) = tiny_graph();
        neurons[0].set_activation(1.0);
        neurons[1].set_activation(2.0);

        Neuron::compute_activation(NeuronId(2), Activation::Sigmoid, &mut neurons, &connections);

        let pre = 0.5 * 1.0 + -0.25 * 2.0;
        assert!((neurons[2].pre_activation() - pre).abs() < 1e-12);
        let expected = Activation::Sigmoid.output(pre + INITIAL_BIAS);
        assert!((neurons[2].activation() - expected).abs() < 1e-12);
    }

    #[test]
    fn output_gradient_uses_error_and_derivative_of_activation() {
        let mut n = Neuron::new(NeuronId(0), LayerKind::Output);
        assert!(!n.is_input());
        n.activate(Activation::Sigmoid, 0.0);
        let a = n.activation();
        assert_eq!(n.error_against(1.0), 1.0 - a);

        n.compute_output_gradient(Activation::Sigmoid, 1.0);
        assert!((n.gradient() - (1.0 - a) * a * (1.0 - a)).abs() < 1e-12);
    }

    #[test]
    fn hidden_gradient_sums_downstream_signal() {
        let (mut neurons, connections) = tiny_graph();
        // Neuron 0 stands in for a hidden sigmoid neuron here.
        neurons[0].activate(Activation::Sigmoid, 0.0);
        neurons[2].gradient = 0.8;

        Neuron::compute_hidden_gradient(
            NeuronId(0),
            Activation::Sigmoid,
            &mut neurons,
            &connections,
        );

        let a = neurons[0].activation();
        let expected = 0.8 * 0.5 * a * (1.0 - a);
        assert!((neurons[0].gradient() - expected).abs() < 1e-12);
    }

    #[test]
    fn incoming_update_reads_previous_delta_before_overwriting() {
        let (mut neurons, mut connections) = tiny_graph();
        neurons[0].set_activation(1.0);
        neurons[1].set_activation(0.5);
        neurons[2].gradient = 0.2;
        connections[0].weight_delta = 0.1;

        let w0 = connections[0].weight();
        Neuron::update_incoming_weights(NeuronId(2), &neurons, &mut connections, 0.5, 0.9);

        let new_delta = 0.5 * 0.2 * 1.0;
        assert!((connections[0].weight() - (w0 + new_delta + 0.9 * 0.1)).abs() < 1e-12);
        assert_eq!(connections[0].weight_delta(), new_delta);
        assert_eq!(connections[1].weight_delta(), 0.5 * 0.2 * 0.5);
    }

    #[test]
    fn bias_update_mirrors_weight_update() {
        let mut n = Neuron::new(NeuronId(0), LayerKind::Hidden);
        n.gradient = 0.4;
        n.update_bias(0.1, 0.5);
        assert!((n.bias() - (INITIAL_BIAS + 0.04)).abs() < 1e-12);
        n.update_bias(0.1, 0.5);
        assert!((n.bias() - (INITIAL_BIAS + 0.04 + 0.04 + 0.02)).abs() < 1e-12);
    }
}
