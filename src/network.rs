use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::{
    Activation, BiasMode, Connection, ConnectionId, Error, Layer, LayerKind, NetworkConfig,
    NetworkShape, Neuron, NeuronId, Result,
};

/// A fully connected input → hidden → output network stored as a neuron graph.
///
/// Neurons and connections live in two flat arenas owned by the network; ids are
/// indices into those arenas. Each hidden and output neuron lists its incoming
/// connections, and each input and hidden neuron lists its outgoing ones, so
/// forward and backward passes can walk the graph in either direction.
#[derive(Debug, Clone)]
pub struct Network {
    config: NetworkConfig,
    rng: StdRng,
    neurons: Vec<Neuron>,
    connections: Vec<Connection>,
    input_layer: Layer,
    hidden_layer: Layer,
    output_layer: Layer,
    initialized: bool,
}

impl Network {
    /// Configure a network with an entropy-seeded RNG. No neurons are created yet.
    pub fn configure(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        activation: Activation,
        learning_rate: f64,
        momentum: f64,
    ) -> Result<Self> {
        crate::NetworkBuilder::new(input_size, hidden_size, output_size)
            .activation(activation)
            .learning_rate(learning_rate)
            .momentum(momentum)
            .build()
    }

    pub(crate) fn from_config(config: NetworkConfig, rng: StdRng) -> Self {
        Self {
            config,
            rng,
            neurons: Vec::new(),
            connections: Vec::new(),
            input_layer: Layer::new(LayerKind::Input),
            hidden_layer: Layer::new(LayerKind::Hidden),
            output_layer: Layer::new(LayerKind::Output),
            initialized: false,
        }
    }

    /// Build the neuron graph, discarding any previous one (and everything it learned).
    ///
    /// Input neurons come first, then hidden neurons wired from every input neuron,
    /// then output neurons wired from every hidden neuron. Each new connection draws
    /// its weight from the network's RNG.
    pub fn initialize(&mut self) -> Result<()> {
        let activation = self.config.activation.ok_or_else(|| {
            Error::InvalidConfig("activation function must be set before initialize()".to_owned())
        })?;
        let NetworkConfig {
            input_size,
            hidden_size,
            output_size,
            ..
        } = self.config;

        self.neurons.clear();
        self.connections.clear();
        self.neurons.reserve(input_size + hidden_size + output_size);
        self.connections
            .reserve(input_size * hidden_size + hidden_size * output_size);
        self.input_layer = Layer::with_capacity(LayerKind::Input, input_size);
        self.hidden_layer = Layer::with_capacity(LayerKind::Hidden, hidden_size);
        self.output_layer = Layer::with_capacity(LayerKind::Output, output_size);

        for _ in 0..input_size {
            let id = NeuronId(self.neurons.len());
            self.neurons.push(Neuron::new(id, LayerKind::Input));
            self.input_layer.push(id);
        }

        for _ in 0..hidden_size {
            let id = NeuronId(self.neurons.len());
            self.neurons.push(Neuron::new(id, LayerKind::Hidden));
            for &from in self.input_layer.neurons() {
                connect(
                    &mut self.neurons,
                    &mut self.connections,
                    from,
                    id,
                    &mut self.rng,
                );
            }
            self.hidden_layer.push(id);
        }

        for _ in 0..output_size {
            let id = NeuronId(self.neurons.len());
            self.neurons.push(Neuron::new(id, LayerKind::Output));
            for &from in self.hidden_layer.neurons() {
                connect(
                    &mut self.neurons,
                    &mut self.connections,
                    from,
                    id,
                    &mut self.rng,
                );
            }
            self.output_layer.push(id);
        }

        self.initialized = true;
        info!(
            input_size,
            hidden_size,
            output_size,
            connections = self.connections.len(),
            ?activation,
            "network initialized"
        );
        Ok(())
    }

    /// Forward pass for a single sample.
    ///
    /// Input values are copied into the input neurons as-is; hidden neurons are then
    /// activated in order, followed by output neurons.
    pub fn forward(&mut self, inputs: &[f64]) -> Result<()> {
        let activation = self.ensure_initialized("forward")?;
        if inputs.len() != self.config.input_size {
            return Err(Error::InvalidShape(format!(
                "inputs len {} does not match input_size {}",
                inputs.len(),
                self.config.input_size
            )));
        }

        for (&id, &x) in self.input_layer.neurons().iter().zip(inputs) {
            self.neurons[id.0].set_activation(x);
        }
        for &id in self.hidden_layer.neurons() {
            Neuron::compute_activation(id, activation, &mut self.neurons, &self.connections);
        }
        for &id in self.output_layer.neurons() {
            Neuron::compute_activation(id, activation, &mut self.neurons, &self.connections);
        }
        Ok(())
    }

    /// Backward pass for a single sample. Call `forward` with the matching inputs first.
    ///
    /// Runs four phases, each over a whole layer before the next starts: output
    /// gradients, hidden gradients, hidden incoming-weight updates, output
    /// incoming-weight updates.
    pub fn backward(&mut self, targets: &[f64]) -> Result<()> {
        let activation = self.ensure_initialized("backward")?;
        if targets.len() != self.config.output_size {
            return Err(Error::InvalidShape(format!(
                "targets len {} does not match output_size {}",
                targets.len(),
                self.config.output_size
            )));
        }

        for (&id, &t) in self.output_layer.neurons().iter().zip(targets) {
            self.neurons[id.0].compute_output_gradient(activation, t);
        }
        for &id in self.hidden_layer.neurons() {
            Neuron::compute_hidden_gradient(id, activation, &mut self.neurons, &self.connections);
        }

        let NetworkConfig {
            learning_rate,
            momentum,
            bias,
            ..
        } = self.config;
        for layer in [&self.hidden_layer, &self.output_layer] {
            for &id in layer.neurons() {
                Neuron::update_incoming_weights(
                    id,
                    &self.neurons,
                    &mut self.connections,
                    learning_rate,
                    momentum,
                );
                if bias == BiasMode::Learned {
                    self.neurons[id.0].update_bias(learning_rate, momentum);
                }
            }
        }
        Ok(())
    }

    /// Runs `forward` and returns the output activations in layer order.
    ///
    /// Weights are not modified; only the cached activations change.
    pub fn predict(&mut self, inputs: &[f64]) -> Result<Vec<f64>> {
        let mut out = vec![0.0_f64; self.config.output_size];
        self.predict_into(inputs, &mut out)?;
        Ok(out)
    }

    /// Shape-checked inference into a caller-provided buffer.
    pub fn predict_into(&mut self, inputs: &[f64], out: &mut [f64]) -> Result<()> {
        if out.len() != self.config.output_size {
            return Err(Error::InvalidShape(format!(
                "out len {} does not match output_size {}",
                out.len(),
                self.config.output_size
            )));
        }
        self.forward(inputs)?;
        for (o, &id) in out.iter_mut().zip(self.output_layer.neurons()) {
            *o = self.neurons[id.0].activation();
        }
        debug!(?inputs, outputs = ?out, "predicted");
        Ok(())
    }

    /// Output activations left by the most recent forward pass.
    pub fn outputs(&self) -> impl Iterator<Item = f64> + '_ {
        self.output_layer
            .neurons()
            .iter()
            .map(|&id| self.neurons[id.0].activation())
    }

    #[inline]
    pub fn shape(&self) -> NetworkShape {
        NetworkShape::new(
            self.config.input_size,
            self.config.hidden_size,
            self.config.output_size,
        )
    }

    #[inline]
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    #[inline]
    pub fn input_size(&self) -> usize {
        self.config.input_size
    }

    #[inline]
    pub fn hidden_size(&self) -> usize {
        self.config.hidden_size
    }

    #[inline]
    pub fn output_size(&self) -> usize {
        self.config.output_size
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[inline]
    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    #[inline]
    pub fn neuron(&self, id: NeuronId) -> Option<&Neuron> {
        self.neurons.get(id.0)
    }

    #[inline]
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    #[inline]
    pub fn connection(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.get(id.0)
    }

    #[inline]
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    #[inline]
    pub fn input_layer(&self) -> &Layer {
        &self.input_layer
    }

    #[inline]
    pub fn hidden_layer(&self) -> &Layer {
        &self.hidden_layer
    }

    #[inline]
    pub fn output_layer(&self) -> &Layer {
        &self.output_layer
    }

    /// Replace the RNG used by future `initialize` calls and shuffles.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    #[inline]
    pub(crate) fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// The activation shared by hidden and output neurons, once the graph exists.
    pub(crate) fn ensure_initialized(&self, op: &str) -> Result<Activation> {
        match (self.initialized, self.config.activation) {
            (true, Some(f)) => Ok(f),
            _ => Err(Error::uninitialized(op)),
        }
    }
}

/// Adds `from -> to`, registering it as outgoing on `from` and incoming on `to`.
fn connect(
    neurons: &mut [Neuron],
    connections: &mut Vec<Connection>,
    from: NeuronId,
    to: NeuronId,
    rng: &mut StdRng,
) {
    let id = ConnectionId(connections.len());
    connections.push(Connection::new_with_rng(id, from, to, rng));
    neurons[from.0].outgoing.push(id);
    neurons[to.0].incoming.push(id);
}
