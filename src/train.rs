use tracing::{debug, info};

use crate::{Dataset, Error, Network, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainReport {
    pub epochs: usize,
    /// Mean squared error over the last epoch, measured on each sample's forward pass
    /// just before its weight update. `None` when no epoch ran.
    pub final_loss: Option<f64>,
}

impl Network {
    /// Rebuild the graph with [`Network::initialize`], then run `epochs` epochs.
    ///
    /// Anything learned before this call is discarded. Use [`Network::fit`] to keep
    /// training an already-initialized network.
    ///
    /// `epochs == 0` still initializes, so `predict` works afterwards.
    /// The dataset's sample order is shuffled in place.
    pub fn train(&mut self, data: &mut Dataset, epochs: usize) -> Result<TrainReport> {
        self.check_dataset(data)?;
        self.initialize()?;
        self.run_epochs(data, epochs)
    }

    /// Online training on the existing weights: for each epoch, shuffle `data` in
    /// place, then `forward` + `backward` every sample in the new order.
    pub fn fit(&mut self, data: &mut Dataset, epochs: usize) -> Result<TrainReport> {
        self.ensure_initialized("fit")?;
        self.check_dataset(data)?;
        self.run_epochs(data, epochs)
    }

    /// Mean of the per-sample MSE over `data`. Weights are not modified.
    pub fn evaluate_mse(&mut self, data: &Dataset) -> Result<f64> {
        self.ensure_initialized("evaluate_mse")?;
        self.check_dataset(data)?;

        let mut out = vec![0.0_f64; self.output_size()];
        let mut total = 0.0_f64;
        for sample in data {
            self.predict_into(&sample.inputs, &mut out)?;
            total += mse(&out, &sample.targets);
        }
        Ok(total / data.len() as f64)
    }

    fn run_epochs(&mut self, data: &mut Dataset, epochs: usize) -> Result<TrainReport> {
        info!(epochs, samples = data.len(), "training started");

        let mut final_loss = None;
        for epoch in 0..epochs {
            data.shuffle(self.rng_mut());

            let mut epoch_loss = 0.0_f64;
            for sample in data.iter() {
                self.forward(&sample.inputs)?;
                epoch_loss += self.sample_mse(&sample.targets);
                self.backward(&sample.targets)?;
            }
            let mean = epoch_loss / data.len() as f64;
            debug!(epoch, loss = mean, "epoch finished");
            final_loss = Some(mean);
        }

        info!(epochs, ?final_loss, "training finished");
        Ok(TrainReport { epochs, final_loss })
    }

    fn sample_mse(&self, targets: &[f64]) -> f64 {
        let mut sum_sq = 0.0_f64;
        for (y, &t) in self.outputs().zip(targets) {
            let d = y - t;
            sum_sq += d * d;
        }
        sum_sq / targets.len() as f64
    }

    fn check_dataset(&self, data: &Dataset) -> Result<()> {
        if data.is_empty() {
            return Err(Error::InvalidData("dataset must not be empty".to_owned()));
        }
        if data.input_dim() != self.input_size() {
            return Err(Error::InvalidShape(format!(
                "dataset input_dim {} does not match input_size {}",
                data.input_dim(),
                self.input_size()
            )));
        }
        if data.target_dim() != self.output_size() {
            return Err(Error::InvalidShape(format!(
                "dataset target_dim {} does not match output_size {}",
                data.target_dim(),
                self.output_size()
            )));
        }
        Ok(())
    }
}

/// Mean squared error between two equal-length slices.
pub fn mse(pred: &[f64], target: &[f64]) -> f64 {
    assert_eq!(
        pred.len(),
        target.len(),
        "pred len {} does not match target len {}",
        pred.len(),
        target.len()
    );

    if pred.is_empty() {
        return 0.0;
    }

    let mut sum_sq = 0.0_f64;
    for (&p, &t) in pred.iter().zip(target) {
        let d = p - t;
        sum_sq += d * d;
    }
    sum_sq / pred.len() as f64
}
