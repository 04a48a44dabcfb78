//! # Gaussian distribution
//!
//! The [Gaussian (Normal) distribution](https://en.wikipedia.org/wiki/Normal_distribution)
//! with a given `mean` and standard deviation (`stdev`).
//!
//! Unlike the [Binomial](crate::distributions::Binomial::Binomial), the
//! parameters of the Gaussian *are* its mean and standard deviation. When
//! fitted to data, the mean is the sample mean and the standard deviation
//! uses the unbiased (`n - 1`) formula.

use std::f64::consts::{PI, TAU};
use std::fmt;
use std::ops::Add;

use rand::Rng;

use crate::{
    Samples::Samples,
    configuration::plot::{GAUSSIAN_PLOT_POINTS, GAUSSIAN_PLOT_SPAN},
    distribution_trait::{Distribution, GeneralDistribution},
    errors::DistributionError,
    plot::{self, PlotData, PlotKind, Plotter},
};

/// Represents a Gaussian distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct Gaussian {
    general: GeneralDistribution,
}

impl Gaussian {
    /// Create a [Gaussian] distribution.
    ///
    ///  - The `mean` must be finite (No `+-inf` or NaNs)
    ///  - The `stdev` must be finite and `0.0 <= stdev`.
    ///
    /// [Gaussian::default] is the standard normal (`mean = 0`, `stdev = 1`).
    pub fn new(mean: f64, stdev: f64) -> Result<Gaussian, DistributionError> {
        if mean.is_nan() || stdev.is_nan() {
            return Err(DistributionError::NanErr);
        }
        if !mean.is_finite() || !stdev.is_finite() || stdev < 0.0 {
            return Err(DistributionError::InvalidNumber);
        }

        return Ok(Gaussian {
            general: GeneralDistribution::new(mean, stdev),
        });
    }

    /// Estimates the mean and the standard deviation from the observed data
    /// and returns them as `(mean, stdev)`.
    ///
    /// Returns [DistributionError::DivisionByZero] if there is no data,
    /// [DistributionError::NotEnoughSamples] if there is only one value and
    /// [DistributionError::InvalidNumber] if the estimated values are not
    /// finite (the data is too spread to fit in a `f64`).
    /// In all these cases `self` is not modified.
    pub fn replace_stats_with_data(&mut self) -> Result<(f64, f64), DistributionError> {
        let mean: f64 = self.general.data.mean()?;
        let stdev: f64 = self.general.data.standard_deviation()?;
        if !mean.is_finite() || !stdev.is_finite() {
            return Err(DistributionError::InvalidNumber);
        }

        self.general.mean = mean;
        self.general.stdev = stdev;

        log::debug!(
            "Gaussian fitted to {} values: mean = {}, stdev = {}",
            self.general.data.count(),
            mean,
            stdev
        );

        return Ok((mean, stdev));
    }

    /// Combines 2 independent Gaussians into the distribution of their sum:
    ///  - `mean = mean_1 + mean_2`
    ///  - `stdev = sqrt(stdev_1^2 + stdev_2^2)`
    ///
    /// The data of the result is the data of `self` followed by the data
    /// of `other`.
    pub fn combine(&self, other: &Gaussian) -> Result<Gaussian, DistributionError> {
        let mean: f64 = self.general.mean + other.general.mean;
        let stdev: f64 = self.general.stdev.hypot(other.general.stdev);

        let mut ret: Gaussian = Gaussian::new(mean, stdev)?;
        ret.general.data = Samples::new_move([self.get_data(), other.get_data()].concat())?;

        return Ok(ret);
    }

    /// The data of the line plot of the pdf: [GAUSSIAN_PLOT_POINTS] equally
    /// spaced points in `[mean - k * stdev, mean + k * stdev]` (`k` =
    /// [GAUSSIAN_PLOT_SPAN]).
    pub fn pdf_line_data(&self) -> Result<PlotData, DistributionError> {
        let mean: f64 = self.general.mean;
        let stdev: f64 = self.general.stdev;
        let min: f64 = mean - GAUSSIAN_PLOT_SPAN * stdev;
        let step: f64 = 2.0 * GAUSSIAN_PLOT_SPAN * stdev / (GAUSSIAN_PLOT_POINTS - 1) as f64;

        let mut x: Vec<f64> = Vec::with_capacity(GAUSSIAN_PLOT_POINTS);
        let mut y: Vec<f64> = Vec::with_capacity(GAUSSIAN_PLOT_POINTS);

        for i in 0..GAUSSIAN_PLOT_POINTS {
            let point: f64 = min + step * i as f64;
            x.push(point);
            y.push(self.pdf(point)?);
        }

        return Ok(PlotData {
            kind: PlotKind::Line,
            title: String::from("Normal Distribution"),
            x_label: String::from("Value"),
            y_label: String::from("Probability Density"),
            x,
            y,
        });
    }

    /// Renders the [Gaussian::pdf_line_data] with `plotter` and returns the
    /// `(x, y)` values.
    pub fn plot_pdf<P: Plotter>(
        &self,
        plotter: &mut P,
    ) -> Result<(Vec<f64>, Vec<f64>), DistributionError> {
        let plot: PlotData = self.pdf_line_data()?;
        plotter.render(&plot)?;
        return Ok((plot.x, plot.y));
    }

    /// Renders an histogram of the observed data with `plotter`.
    pub fn plot_histogram<P: Plotter>(&self, plotter: &mut P) -> Result<(), DistributionError> {
        let plot: PlotData = plot::histogram().data(&self.general.data).call()?;
        return plotter.render(&plot);
    }
}

impl Distribution for Gaussian {
    fn calculate_mean(&self) -> f64 {
        return self.general.mean;
    }

    fn calculate_stdev(&self) -> f64 {
        return self.general.stdev;
    }

    /// > pdf(x) = 1 / (stdev * sqrt(2 * pi)) * exp(-(x - mean)^2 / (2 * stdev^2))
    ///
    /// A Gaussian with `stdev = 0` has no density: [DistributionError::DomainErr].
    fn pdf(&self, x: f64) -> Result<f64, DistributionError> {
        if x.is_nan() {
            return Err(DistributionError::NanErr);
        }
        let stdev: f64 = self.general.stdev;
        if stdev == 0.0 {
            return Err(DistributionError::DomainErr);
        }

        let z: f64 = (x - self.general.mean) / stdev;
        return Ok((-0.5 * z * z).exp() / (stdev * TAU.sqrt()));
    }

    fn sample_multiple(&self, n: usize) -> Vec<f64> {
        // Box-Muller transform
        let mut rng: rand::prelude::ThreadRng = rand::rng();
        let mut ret: Vec<f64> = Vec::with_capacity(n);

        while ret.len() < n {
            // 1 - [0, 1) = (0, 1], avoids ln(0)
            let u_1: f64 = 1.0 - rng.random::<f64>();
            let u_2: f64 = rng.random::<f64>();

            let radius: f64 = (-2.0 * u_1.ln()).sqrt();
            let angle: f64 = 2.0 * PI * u_2;

            ret.push(self.general.mean + self.general.stdev * radius * angle.cos());
            if ret.len() < n {
                ret.push(self.general.mean + self.general.stdev * radius * angle.sin());
            }
        }

        return ret;
    }

    fn general(&self) -> &GeneralDistribution {
        return &self.general;
    }

    fn general_mut(&mut self) -> &mut GeneralDistribution {
        return &mut self.general;
    }
}

impl Add for Gaussian {
    type Output = Result<Gaussian, DistributionError>;

    fn add(self, rhs: Gaussian) -> Self::Output {
        return self.combine(&rhs);
    }
}

impl<'a> Add<&'a Gaussian> for &'a Gaussian {
    type Output = Result<Gaussian, DistributionError>;

    fn add(self, rhs: &'a Gaussian) -> Self::Output {
        return self.combine(rhs);
    }
}

impl fmt::Display for Gaussian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(
            f,
            "mean {}, standard deviation {}",
            self.general.mean, self.general.stdev
        );
    }
}

impl Default for Gaussian {
    fn default() -> Self {
        return Self {
            general: GeneralDistribution::new(0.0, 1.0),
        };
    }
}
