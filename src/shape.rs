//! Read-only view of a network's layer sizes, for reporting and serving.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
use crate::Result;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkShape {
    pub input: usize,
    pub hidden: usize,
    pub output: usize,
}

impl NetworkShape {
    #[inline]
    pub const fn new(input: usize, hidden: usize, output: usize) -> Self {
        Self {
            input,
            hidden,
            output,
        }
    }

    #[inline]
    pub const fn as_array(&self) -> [usize; 3] {
        [self.input, self.hidden, self.output]
    }

    /// Number of connections in a fully wired network of this shape.
    #[inline]
    pub const fn total_connections(&self) -> usize {
        self.input * self.hidden + self.hidden * self.output
    }

    #[inline]
    pub const fn total_neurons(&self) -> usize {
        self.input + self.hidden + self.output
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    #[cfg(feature = "serde")]
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Renders as a bracketed list of real numbers, e.g. `[2.0, 3.0, 1.0]`.
impl fmt::Display for NetworkShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.1}, {:.1}, {:.1}]",
            self.input as f64, self.hidden as f64, self.output as f64
        )
    }
}

impl From<NetworkShape> for (usize, usize, usize) {
    fn from(s: NetworkShape) -> Self {
        (s.input, s.hidden, s.output)
    }
}
