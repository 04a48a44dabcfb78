//! The [Binomial distribution](https://en.wikipedia.org/wiki/Binomial_distribution)
//! is the distribution that models the number of successes of `n`
//! [Bernoulli trials](https://en.wikipedia.org/wiki/Bernoulli_trial) with succes probability `p`.
//!
//! For example, if you whant to know the probability to get exacly 17 heads in 22
//! throws of a coin, we can model this as a binomial distribution with parameters
//! `n = 22` and `p = 0.5` and evaluate the pmf at `17` (assuming head = 1 and tail = 0).
//!
//! The parameters can also be estimated from observed data with
//! [Binomial::replace_stats_with_data], where every positive value counts as
//! a success.

use std::fmt;
use std::ops::Add;

use rand::Rng;

use crate::{
    Samples::Samples,
    configuration::{P_EQUALITY_TOLERANCE, plot::MAX_PLOT_POINTS},
    distribution_trait::{Distribution, GeneralDistribution},
    errors::DistributionError,
    euclid,
    plot::{self, PlotData, PlotKind, Plotter},
};

/// Represents a Binomial distribution.
///
/// The stored mean and standard deviation are always the ones of the
/// current `p` and `n`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Binomial {
    general: GeneralDistribution,
    p: f64,
    n: u64,
}

/// Checks that `p` is a valid probability.
fn validate_p(p: f64) -> Result<(), DistributionError> {
    if p.is_nan() {
        return Err(DistributionError::NanErr);
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(DistributionError::InvalidNumber);
    }
    return Ok(());
}

impl Binomial {
    /// Creates a new [Binomial distribution](https://en.wikipedia.org/wiki/Binomial_distribution).
    ///
    ///  - `p` indicates the probability of success (returning `1.0`) of each Bernoulli trial.
    ///      - `p` must belong in the interval `[0.0, 1.0]`. Otherwise an error will be returned.
    ///  - `n` indicates the number of trials
    ///
    /// [Binomial::default] is `p = 0` and `n = 0`.
    pub fn new(p: f64, n: u64) -> Result<Binomial, DistributionError> {
        validate_p(p)?;

        let mut ret: Binomial = Binomial {
            general: GeneralDistribution::default(),
            p,
            n,
        };
        ret.update_stats();

        return Ok(ret);
    }

    /// Return `p` (probability of success).
    #[must_use]
    pub const fn get_p(&self) -> f64 {
        return self.p;
    }

    /// Return `n` (number of trials).
    #[must_use]
    pub const fn get_n(&self) -> u64 {
        return self.n;
    }

    /// Changes `p` and updates the mean and standard deviation.
    pub fn set_p(&mut self, p: f64) -> Result<(), DistributionError> {
        validate_p(p)?;
        self.p = p;
        self.update_stats();
        return Ok(());
    }

    /// Changes `n` and updates the mean and standard deviation.
    pub fn set_n(&mut self, n: u64) {
        self.n = n;
        self.update_stats();
    }

    /// Estimates `p` and `n` from the observed data.
    ///
    /// Each observation is a Bernoulli trial: values `> 0` are successes and
    /// anything else is a failure. Then:
    ///  - `n` = number of observations
    ///  - `p` = successes / `n`
    ///
    /// The mean and standard deviation are updated and `(p, n)` is returned.
    ///
    /// Returns [DistributionError::DivisionByZero] if there is no data. In that
    /// case `self` is not modified.
    pub fn replace_stats_with_data(&mut self) -> Result<(f64, u64), DistributionError> {
        let data: &[f64] = self.general.data.peek_data();
        if data.is_empty() {
            return Err(DistributionError::DivisionByZero);
        }

        let total_trials: usize = data.len();
        let successes: usize = data.iter().filter(|&&x| 0.0 < x).count();

        self.n = total_trials as u64;
        self.p = successes as f64 / total_trials as f64;
        self.update_stats();

        log::debug!(
            "Binomial fitted to {} trials: p = {}, n = {}",
            total_trials,
            self.p,
            self.n
        );

        return Ok((self.p, self.n));
    }

    /// Evaluates the [pmf](https://en.wikipedia.org/wiki/Probability_mass_function)
    /// at `k`:
    ///
    /// > pmf(k) = C(n, k) * p^k * (1 - p)^(n - k)
    ///
    /// The computation is done in log space, so big values of `n` do not
    /// overflow. Returns [DistributionError::DomainErr] if `n < k`.
    pub fn pmf(&self, k: u64) -> Result<f64, DistributionError> {
        let ln_coef: f64 =
            euclid::ln_binomial_coefficient(self.n, k).ok_or(DistributionError::DomainErr)?;

        // ln(0) would give `0 * -inf = NaN`
        if self.p == 0.0 {
            return Ok(if k == 0 { 1.0 } else { 0.0 });
        }
        if self.p == 1.0 {
            return Ok(if k == self.n { 1.0 } else { 0.0 });
        }

        let successes: f64 = k as f64;
        let failures: f64 = (self.n - k) as f64;
        let ln_pmf: f64 = ln_coef + successes * self.p.ln() + failures * (-self.p).ln_1p();

        return Ok(ln_pmf.exp());
    }

    /// Combines 2 binomials with the same `p` into one with
    /// `n = self.n + other.n`.
    ///
    /// The `p` values are compared with a tolerance of [P_EQUALITY_TOLERANCE].
    /// If they are different, [DistributionError::PreconditionViolation] is
    /// returned. The data of the result is the data of `self` followed by the
    /// data of `other`.
    ///
    /// Returns [DistributionError::InvalidNumber] if the total number of
    /// trials does not fit in a `u64`.
    ///
    /// The same operation is available with the `+` operator.
    pub fn combine(&self, other: &Binomial) -> Result<Binomial, DistributionError> {
        if P_EQUALITY_TOLERANCE < (self.p - other.p).abs() {
            log::warn!(
                "Tried to combine 2 binomials with different p values: {} and {}",
                self.p,
                other.p
            );
            return Err(DistributionError::PreconditionViolation {
                left: self.p,
                right: other.p,
            });
        }

        let n: u64 = self
            .n
            .checked_add(other.n)
            .ok_or(DistributionError::InvalidNumber)?;
        let data: Vec<f64> = [self.get_data(), other.get_data()].concat();

        let mut ret: Binomial = Binomial {
            general: GeneralDistribution::default(),
            p: self.p,
            n,
        };
        ret.general.data = Samples::new_move(data)?;
        ret.update_stats();

        return Ok(ret);
    }

    /// The data of the bar plot of the pmf: `x = 0, 1, ..., n - 1` and
    /// `y = pmf(x)`.
    ///
    /// Returns [DistributionError::InvalidNumber] if `n` is bigger than
    /// [MAX_PLOT_POINTS].
    pub fn pdf_bar_data(&self) -> Result<PlotData, DistributionError> {
        let points: usize = usize::try_from(self.n)
            .ok()
            .filter(|&points| points <= MAX_PLOT_POINTS)
            .ok_or(DistributionError::InvalidNumber)?;

        let mut x: Vec<f64> = Vec::with_capacity(points);
        let mut y: Vec<f64> = Vec::with_capacity(points);

        for k in 0..self.n {
            x.push(k as f64);
            y.push(self.pmf(k)?);
        }

        return Ok(PlotData {
            kind: PlotKind::Bar,
            title: String::from("Probability Density Chart"),
            x_label: String::from("Value"),
            y_label: String::from("Probability"),
            x,
            y,
        });
    }

    /// Renders the [Binomial::pdf_bar_data] with `plotter` and returns the
    /// `(x, y)` values.
    pub fn plot_bar_pdf<P: Plotter>(
        &self,
        plotter: &mut P,
    ) -> Result<(Vec<f64>, Vec<f64>), DistributionError> {
        let plot: PlotData = self.pdf_bar_data()?;
        plotter.render(&plot)?;
        return Ok((plot.x, plot.y));
    }

    /// Renders an histogram of the observed data with `plotter`.
    pub fn plot_bar<P: Plotter>(&self, plotter: &mut P) -> Result<(), DistributionError> {
        let plot: PlotData = plot::histogram().data(&self.general.data).call()?;
        return plotter.render(&plot);
    }
}

impl Distribution for Binomial {
    /// `mean = n * p`
    fn calculate_mean(&self) -> f64 {
        return self.p * self.n as f64;
    }

    /// `stdev = sqrt(n * p * (1 - p))`
    fn calculate_stdev(&self) -> f64 {
        return (self.n as f64 * self.p * (1.0 - self.p)).sqrt();
    }

    /// Evaluates the pmf at `x`. `x` must be an integer in `[0, n]`,
    /// otherwise [DistributionError::DomainErr] is returned (or
    /// [DistributionError::NanErr] if it is a NaN).
    fn pdf(&self, x: f64) -> Result<f64, DistributionError> {
        if x.is_nan() {
            return Err(DistributionError::NanErr);
        }
        if !x.is_finite() || x < 0.0 || x.fract() != 0.0 {
            return Err(DistributionError::DomainErr);
        }

        return self.pmf(x as u64);
    }

    fn sample_multiple(&self, n: usize) -> Vec<f64> {
        let mut rng: rand::prelude::ThreadRng = rand::rng();
        let mut ret: Vec<f64> = Vec::with_capacity(n);

        for _ in 0..n {
            let mut count: u64 = 0;
            for _ in 0..self.n {
                // in [0, 1): never a success for p = 0, always for p = 1
                if rng.random::<f64>() < self.p {
                    count += 1;
                }
            }
            ret.push(count as f64);
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

impl Add for Binomial {
    type Output = Result<Binomial, DistributionError>;

    fn add(self, rhs: Binomial) -> Self::Output {
        return self.combine(&rhs);
    }
}

impl<'a> Add<&'a Binomial> for &'a Binomial {
    type Output = Result<Binomial, DistributionError>;

    fn add(self, rhs: &'a Binomial) -> Self::Output {
        return self.combine(rhs);
    }
}

impl fmt::Display for Binomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(
            f,
            "mean {}, standard deviation {}, p {}, n {}",
            self.general.mean, self.general.stdev, self.p, self.n
        );
    }
}
