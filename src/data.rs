//! Training samples.
//!
//! A `Dataset` is an ordered list of `(inputs, targets)` rows. Rows are validated
//! once at construction so the training loop never has to re-check widths. The
//! order is not stable: every training epoch shuffles it in place.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::{Error, Result};

/// One supervised example.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub inputs: Vec<f64>,
    pub targets: Vec<f64>,
}

impl Sample {
    pub fn new(inputs: Vec<f64>, targets: Vec<f64>) -> Self {
        Self { inputs, targets }
    }
}

/// A non-empty collection of samples that all share the same input and target widths.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    samples: Vec<Sample>,
    input_dim: usize,
    target_dim: usize,
}

impl Dataset {
    /// Build a dataset from owned samples.
    pub fn from_samples(samples: Vec<Sample>) -> Result<Self> {
        let first = samples
            .first()
            .ok_or_else(|| Error::InvalidData("dataset must not be empty".to_owned()))?;

        let input_dim = first.inputs.len();
        let target_dim = first.targets.len();
        if input_dim == 0 {
            return Err(Error::InvalidData("input_dim must be > 0".to_owned()));
        }
        if target_dim == 0 {
            return Err(Error::InvalidData("target_dim must be > 0".to_owned()));
        }

        for (i, s) in samples.iter().enumerate() {
            if s.inputs.len() != input_dim {
                return Err(Error::InvalidData(format!(
                    "input row {i} has len {}, expected {input_dim}",
                    s.inputs.len()
                )));
            }
            if s.targets.len() != target_dim {
                return Err(Error::InvalidData(format!(
                    "target row {i} has len {}, expected {target_dim}",
                    s.targets.len()
                )));
            }
        }

        Ok(Self {
            samples,
            input_dim,
            target_dim,
        })
    }

    /// Build a dataset from parallel input/target rows.
    ///
    /// This is a convenience constructor (it copies every row).
    pub fn from_rows(inputs: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<Self> {
        if inputs.len() != targets.len() {
            return Err(Error::InvalidData(format!(
                "inputs/targets length mismatch: {} vs {}",
                inputs.len(),
                targets.len()
            )));
        }

        let samples = inputs
            .iter()
            .zip(targets)
            .map(|(x, y)| Sample::new(x.clone(), y.clone()))
            .collect();
        Self::from_samples(samples)
    }

    #[inline]
    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    /// Returns true if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    /// Returns the per-sample input width.
    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    #[inline]
    /// Returns the per-sample target width.
    pub fn target_dim(&self) -> usize {
        self.target_dim
    }

    #[inline]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[inline]
    /// Returns the `idx`-th sample in the current order.
    ///
    /// Panics if `idx >= len`.
    pub fn sample(&self, idx: usize) -> &Sample {
        &self.samples[idx]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Uniformly permutes the samples in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.samples.shuffle(rng);
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
