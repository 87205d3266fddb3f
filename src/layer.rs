use crate::NeuronId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Input,
    Hidden,
    Output,
}

/// An ordered group of neurons. Iteration order is the order neurons are evaluated in.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    kind: LayerKind,
    neurons: Vec<NeuronId>,
}

impl Layer {
    #[inline]
    pub fn new(kind: LayerKind) -> Self {
        Self {
            kind,
            neurons: Vec::new(),
        }
    }

    #[inline]
    pub fn with_capacity(kind: LayerKind, size: usize) -> Self {
        Self {
            kind,
            neurons: Vec::with_capacity(size),
        }
    }

    #[inline]
    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    #[inline]
    pub fn neurons(&self) -> &[NeuronId] {
        &self.neurons
    }

    #[inline]
    pub(crate) fn push(&mut self, id: NeuronId) {
        self.neurons.push(id);
    }
}
