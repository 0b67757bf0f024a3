use crate::detect::{DetectError, Direction};

/// Sample statistics over a series of values.
pub struct TimeSeries {
    values: Vec<f64>,
}

impl TimeSeries {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Bessel-corrected sample variance (divides by `n - 1`).
    pub fn sample_variance(&self) -> Result<f64, DetectError> {
        let n = self.values.len();
        if n < 2 {
            return Err(DetectError::InsufficientSamples { needed: 2, have: n });
        }
        let mean = self.mean();
        let sum_sq_diff: f64 = self.values.iter().map(|&x| (x - mean).powi(2)).sum();
        Ok(sum_sq_diff / (n - 1) as f64)
    }

    pub fn sample_std_dev(&self) -> Result<f64, DetectError> {
        Ok(self.sample_variance()?.sqrt())
    }

    /// The band `mean ± multiplier * std_dev` for this series.
    pub fn band(&self, multiplier: f64) -> Result<Band, DetectError> {
        let mean = self.mean();
        let std_dev = self.sample_std_dev()?;
        Ok(Band {
            mean,
            std_dev,
            low: mean - multiplier * std_dev,
            high: mean + multiplier * std_dev,
        })
    }
}

/// Mean, standard deviation and the derived closed acceptance interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub mean: f64,
    pub std_dev: f64,
    pub low: f64,
    pub high: f64,
}

impl Band {
    /// `None` when `value` lies within `[low, high]`; values on a bound are not anomalous.
    pub fn classify(&self, value: f64) -> Option<Direction> {
        if value > self.high {
            Some(Direction::High)
        } else if value < self.low {
            Some(Direction::Low)
        } else {
            None
        }
    }

    /// Distance from the mean in standard deviations. Zero for a flat series.
    pub fn z_score(&self, value: f64) -> f64 {
        if self.std_dev == 0.0 {
            return 0.0;
        }
        (value - self.mean) / self.std_dev
    }
}
