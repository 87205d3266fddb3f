//! Activation functions.
//!
//! A hidden or output neuron computes a pre-activation value `z = Σ w·x` and then
//! applies its activation function to `z + bias`.
//!
//! Derivatives follow a fixed calling convention: `output_derivative` is always
//! evaluated on the neuron's *activation* (its post-transform value), never on the
//! pre-activation. For sigmoid and leaky ReLU that is the usual "derivative from the
//! cached output" trick. For tanh and swish the transform is re-applied to the
//! argument, which is the behavior the training loop has always had.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default negative slope used by [`Activation::leaky_relu`].
pub const DEFAULT_LEAKY_ALPHA: f64 = 0.01;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq)]
/// Element-wise activation function shared by every hidden and output neuron.
pub enum Activation {
    Sigmoid,
    Tanh,
    LeakyReLU { alpha: f64 },
    Swish,
}

impl Activation {
    /// Leaky ReLU with the default slope of `0.01`.
    pub const fn leaky_relu() -> Self {
        Activation::LeakyReLU {
            alpha: DEFAULT_LEAKY_ALPHA,
        }
    }

    /// Validate activation parameters.
    pub fn validate(self) -> Result<()> {
        match self {
            Activation::LeakyReLU { alpha } => {
                if !(alpha.is_finite() && alpha >= 0.0) {
                    return Err(Error::InvalidConfig(format!(
                        "leaky ReLU alpha must be finite and >= 0, got {alpha}"
                    )));
                }
            }
            Activation::Sigmoid | Activation::Tanh | Activation::Swish => {}
        }

        Ok(())
    }

    #[inline]
    pub fn output(self, x: f64) -> f64 {
        match self {
            Activation::Sigmoid => sigmoid(x),
            Activation::Tanh => x.tanh(),
            Activation::LeakyReLU { alpha } => {
                if x > 0.0 {
                    x
                } else {
                    alpha * x
                }
            }
            Activation::Swish => x * sigmoid(x),
        }
    }

    /// Derivative used by backprop, evaluated on an activation value `a`.
    #[inline]
    pub fn output_derivative(self, a: f64) -> f64 {
        match self {
            Activation::Sigmoid => a * (1.0 - a),
            Activation::Tanh => {
                let t = a.tanh();
                1.0 - t * t
            }
            Activation::LeakyReLU { alpha } => {
                if a > 0.0 {
                    1.0
                } else {
                    alpha
                }
            }
            Activation::Swish => {
                let s = sigmoid(a);
                s + a * s * (1.0 - s)
            }
        }
    }
}

#[inline]
fn sigmoid(x: f64) -> f64 {
    // Numerically stable sigmoid.
    if x >= 0.0 {
        let z = (-x).exp();
        1.0 / (1.0 + z)
    } else {
        let z = x.exp();
        z / (1.0 + z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaky_relu_alpha_must_be_finite_and_non_negative() {
        assert!(
            Activation::LeakyReLU { alpha: f64::NAN }
                .validate()
                .is_err()
        );
        assert!(Activation::LeakyReLU { alpha: -0.1 }.validate().is_err());
        assert!(Activation::leaky_relu().validate().is_ok());
    }

    #[test]
    fn sigmoid_basic_values() {
        let y0 = Activation::Sigmoid.output(0.0);
        assert!((y0 - 0.5).abs() < 1e-12);

        assert!(Activation::Sigmoid.output(10.0) > 0.9999);
        assert!(Activation::Sigmoid.output(-10.0) < 0.0001);
        // No overflow at the far tails.
        assert_eq!(Activation::Sigmoid.output(-1000.0), 0.0);
        assert_eq!(Activation::Sigmoid.output(1000.0), 1.0);
    }

    #[test]
    fn sigmoid_derivative_is_a_times_one_minus_a() {
        for &a in &[0.01, 0.2, 0.5, 0.7, 0.99] {
            let d = Activation::Sigmoid.output_derivative(a);
            assert_eq!(d, a * (1.0 - a));
        }

        let peak = Activation::Sigmoid.output_derivative(0.5);
        assert_eq!(peak, 0.25);
        for &a in &[0.1, 0.3, 0.49, 0.51, 0.8] {
            assert!(Activation::Sigmoid.output_derivative(a) < peak);
        }
        assert!(Activation::Sigmoid.output_derivative(1e-9) < 1e-8);
        assert!(Activation::Sigmoid.output_derivative(1.0 - 1e-9) < 1e-8);
    }

    #[test]
    fn tanh_derivative_reapplies_tanh_to_its_argument() {
        let a = Activation::Tanh.output(0.3);
        let d = Activation::Tanh.output_derivative(a);
        let expected = 1.0 - a.tanh().powi(2);
        assert!((d - expected).abs() < 1e-12);
        // Not the textbook `1 - a^2`.
        assert!((d - (1.0 - a * a)).abs() > 1e-3);
        assert_eq!(Activation::Tanh.output_derivative(0.0), 1.0);
    }

    #[test]
    fn leaky_relu_shapes() {
        let act = Activation::LeakyReLU { alpha: 0.1 };
        assert_eq!(act.output(-2.0), -0.2);
        assert_eq!(act.output(3.0), 3.0);
        assert_eq!(act.output_derivative(-0.2), 0.1);
        assert_eq!(act.output_derivative(3.0), 1.0);
    }

    #[test]
    fn swish_values() {
        assert_eq!(Activation::Swish.output(0.0), 0.0);
        let x = 2.0_f64;
        let expected = x / (1.0 + (-x).exp());
        assert!((Activation::Swish.output(x) - expected).abs() < 1e-12);
        // swish'(0) = sigmoid(0) = 0.5
        assert!((Activation::Swish.output_derivative(0.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn outputs_are_finite_everywhere() {
        let acts = [
            Activation::Sigmoid,
            Activation::Tanh,
            Activation::leaky_relu(),
            Activation::Swish,
        ];
        for act in acts {
            for &x in &[-1e6, -50.0, -1.0, 0.0, 1.0, 50.0, 1e6] {
                assert!(act.output(x).is_finite(), "{act:?} output({x})");
                assert!(
                    act.output_derivative(act.output(x)).is_finite(),
                    "{act:?} derivative at output({x})"
                );
            }
        }
    }
}
