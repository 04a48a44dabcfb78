//! This script contains the interfaces used to comunicate with the distributions.
//!
//! Every distribution stores a [GeneralDistribution] (the observed data and
//! the current summary statistics) and implements [Distribution], wich gives
//! it the capability to compute its mean, standard deviation and pdf.

use std::path::Path;

use crate::Samples::Samples;
use crate::errors::DistributionError;

/// The state shared by all the distributions.
///
/// `mean` and `stdev` are either given on creation or derived from the
/// parameters of the distribution (that may have been estimated from `data`).
/// They are **not** updated automatically: call [Distribution::update_stats]
/// after changing the parameters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeneralDistribution {
    /// The mean of the distribution
    pub mean: f64,
    /// The standard deviation of the distribution
    pub stdev: f64,
    /// Observed data. May be empty.
    pub data: Samples,
}

impl GeneralDistribution {
    /// Creates a [GeneralDistribution] with the given statistics and no data.
    #[must_use]
    pub fn new(mean: f64, stdev: f64) -> GeneralDistribution {
        return GeneralDistribution {
            mean,
            stdev,
            data: Samples::default(),
        };
    }
}

/// The trait for any distribution in this library.
///
/// The required methods are the distribution specific formulas. The provided
/// ones deal with the data and the stored statistics.
pub trait Distribution {
    //Requiered methods:

    /// Computes the [mean](https://en.wikipedia.org/wiki/Expected_value) from the
    /// parameters of the distribution.
    fn calculate_mean(&self) -> f64;

    /// Computes the [standard deviation](https://en.wikipedia.org/wiki/Standard_deviation)
    /// from the parameters of the distribution.
    fn calculate_stdev(&self) -> f64;

    /// Evaluates the [PDF](https://en.wikipedia.org/wiki/Probability_density_function)
    /// (or the [PMF](https://en.wikipedia.org/wiki/Probability_mass_function) for
    /// discrete distributions) at `x`.
    ///
    /// Returns [DistributionError::DomainErr] if `x` is outside the support.
    fn pdf(&self, x: f64) -> Result<f64, DistributionError>;

    /// Draws `n` random values from the distribution.
    fn sample_multiple(&self, n: usize) -> Vec<f64>;

    /// A reference to the shared state.
    fn general(&self) -> &GeneralDistribution;

    /// A mutable reference to the shared state.
    fn general_mut(&mut self) -> &mut GeneralDistribution;

    // Provided methods:

    /// The stored mean.
    fn get_mean(&self) -> f64 {
        return self.general().mean;
    }

    /// The stored standard deviation.
    fn get_stdev(&self) -> f64 {
        return self.general().stdev;
    }

    /// The observed data.
    fn get_data(&self) -> &[f64] {
        return self.general().data.peek_data();
    }

    /// Recomputes the stored mean and standard deviation from the current
    /// parameters.
    fn update_stats(&mut self) {
        let mean: f64 = self.calculate_mean();
        let stdev: f64 = self.calculate_stdev();
        let general: &mut GeneralDistribution = self.general_mut();
        general.mean = mean;
        general.stdev = stdev;
    }

    /// Replaces the observed data with a copy of `data`.
    ///
    /// The parameters are not touched: the distribution specific
    /// `replace_stats_with_data` fits them to the new data.
    fn load_data(&mut self, data: &[f64]) -> Result<(), DistributionError> {
        self.general_mut().data = Samples::new(data)?;
        return Ok(());
    }

    /// Replaces the observed data with the contents of a text file with
    /// one number per line. See [Samples::from_file].
    fn read_data_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), DistributionError>
    where
        Self: Sized,
    {
        self.general_mut().data = Samples::from_file(path)?;
        return Ok(());
    }

    /// Draws `n` values with [Distribution::sample_multiple] and keeps them
    /// as the observed data.
    fn load_random_data(&mut self, n: usize) -> Result<(), DistributionError> {
        let data: Vec<f64> = self.sample_multiple(n);
        self.general_mut().data = Samples::new_move(data)?;
        return Ok(());
    }
}
