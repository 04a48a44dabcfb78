//! A sample of observed data.
//!
//! [Samples] is the data a distribution can be fitted to (see
//! [Binomial::replace_stats_with_data](crate::distributions::Binomial::Binomial::replace_stats_with_data)).
//! It can be built from memory or read from a text file with one number per line.

use std::path::Path;

use crate::errors::DistributionError;

/// An ordered collection of observations.
///
/// All the values are finite: NaNs and infinities are rejected on insertion.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Samples {
    // may be empty
    data: Vec<f64>,
}

/// Checks that `data` has no NaNs nor infinities.
fn validate(data: &[f64]) -> Result<(), DistributionError> {
    for value in data {
        if value.is_nan() {
            return Err(DistributionError::NanErr);
        }
        if value.is_infinite() {
            return Err(DistributionError::InvalidNumber);
        }
    }
    return Ok(());
}

impl Samples {
    /// Creates a new instance of [Samples] with the given `data`.
    ///
    /// `data` must not contain NaNs or infinities (`+-inf`).
    ///
    /// If you want to just move the data without copying it,
    /// use [Samples::new_move].
    pub fn new(data: &[f64]) -> Result<Samples, DistributionError> {
        validate(data)?;
        return Ok(Samples {
            data: Vec::from(data),
        });
    }

    /// Creates a new instance of [Samples] with the given `data`.
    ///
    /// `data` must not contain NaNs or infinities (`+-inf`).
    pub fn new_move(data: Vec<f64>) -> Result<Samples, DistributionError> {
        validate(&data)?;
        return Ok(Samples { data });
    }

    /// Reads a text file with one number per line.
    ///
    /// Surrounding whitespace and blank lines are ignored. Any other line
    /// that is not a number returns [DistributionError::Parse] with the
    /// (1-based) line number.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Samples, DistributionError> {
        let content: String = std::fs::read_to_string(path.as_ref())?;
        let samples: Samples = Samples::parse(&content)?;

        log::debug!(
            "Read {} values from {}",
            samples.count(),
            path.as_ref().display()
        );

        return Ok(samples);
    }

    /// Parses text with one number per line. See [Samples::from_file].
    pub fn parse(content: &str) -> Result<Samples, DistributionError> {
        let mut data: Vec<f64> = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            let trimmed: &str = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let value: f64 = trimmed
                .parse::<f64>()
                .map_err(|_| DistributionError::Parse {
                    line: idx + 1,
                    content: trimmed.to_string(),
                })?;
            data.push(value);
        }

        return Samples::new_move(data);
    }

    /// Gives a reference to the contained data.
    #[must_use]
    pub fn peek_data(&self) -> &[f64] {
        return &self.data;
    }

    /// Returns the contained data and drops self.
    ///
    /// If you do not want to drop self, use [Samples::peek_data]
    #[must_use]
    pub fn get_data(self) -> Vec<f64> {
        return self.data;
    }

    /// The number of observations.
    #[must_use]
    pub fn count(&self) -> usize {
        return self.data.len();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        return self.data.is_empty();
    }

    /// Computes the sample [mean](https://en.wikipedia.org/wiki/Mean).
    ///
    /// Returns [DistributionError::DivisionByZero] if there are no samples.
    ///
    /// A running mean is used instead of a plain sum, so big values
    /// (near `f64::MAX`) do not overflow.
    pub fn mean(&self) -> Result<f64, DistributionError> {
        if self.data.is_empty() {
            return Err(DistributionError::DivisionByZero);
        }

        let mut mean: f64 = 0.0;
        for (i, &s) in self.data.iter().enumerate() {
            let count: f64 = (i + 1) as f64;
            // `s - mean` could overflow, the divided terms can not
            mean += s / count - mean / count;
        }

        if !mean.is_finite() {
            return Err(DistributionError::InvalidNumber);
        }
        return Ok(mean);
    }

    /// Computes the sample [variance](https://en.wikipedia.org/wiki/Variance)
    /// with the unbiased (`n - 1`) formula.
    ///
    /// Uses [Welford's algorithm](https://en.wikipedia.org/wiki/Algorithms_for_calculating_variance#Welford's_online_algorithm).
    ///
    /// Returns [DistributionError::DivisionByZero] if there are no samples,
    /// [DistributionError::NotEnoughSamples] if there is only 1 and
    /// [DistributionError::InvalidNumber] if the variance overflows.
    pub fn variance(&self) -> Result<f64, DistributionError> {
        let n: usize = self.data.len();
        if n == 0 {
            return Err(DistributionError::DivisionByZero);
        }
        if n < 2 {
            return Err(DistributionError::NotEnoughSamples);
        }

        let mut mean: f64 = 0.0;
        // sum of squared differences from the current mean
        let mut m2: f64 = 0.0;
        for (i, &s) in self.data.iter().enumerate() {
            let count: f64 = (i + 1) as f64;
            let previous_mean: f64 = mean;
            mean += s / count - mean / count;
            m2 += (s - previous_mean) * (s - mean);
        }

        let variance: f64 = m2 / (n as f64 - 1.0);
        if !variance.is_finite() {
            return Err(DistributionError::InvalidNumber);
        }
        return Ok(variance);
    }

    /// The sample [standard deviation](https://en.wikipedia.org/wiki/Standard_deviation).
    /// Square root of [Samples::variance].
    pub fn standard_deviation(&self) -> Result<f64, DistributionError> {
        return Ok(self.variance()?.sqrt());
    }

    /// The smallest observation, or [None] if there are no samples.
    #[must_use]
    pub fn minimum(&self) -> Option<f64> {
        return self.data.iter().copied().reduce(f64::min);
    }

    /// The largest observation, or [None] if there are no samples.
    #[must_use]
    pub fn maximum(&self) -> Option<f64> {
        return self.data.iter().copied().reduce(f64::max);
    }
}
