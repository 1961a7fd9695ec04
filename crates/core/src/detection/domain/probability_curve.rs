/// Per-sample speech probabilities produced by the model, index-aligned
/// to the preprocessed waveform.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProbabilityCurve {
    values: Vec<f32>,
}

impl ProbabilityCurve {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Highest probability, 0.0 for an empty curve.
    pub fn max(&self) -> f32 {
        self.values.iter().copied().fold(0.0f32, f32::max)
    }

    /// Average probability, 0.0 for an empty curve.
    pub fn mean(&self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let total: f64 = self.values.iter().map(|&p| f64::from(p)).sum();
        (total / self.values.len() as f64) as f32
    }
}

impl From<Vec<f32>> for ProbabilityCurve {
    fn from(values: Vec<f32>) -> Self {
        Self::new(values)
    }
}
