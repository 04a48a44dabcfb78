#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::excessive_precision
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
// ^Disable warning "crate `ProbabilityDistributions` should have a snake case name convert the identifier to snake case: `probability_distributions`"
// The rest of the names will follow the snake_case convention.

//! # Probability Distributions
//!
//! Small helpers to work with probability distributions:
//!
//! - [x] Summary statistics (mean and standard deviation) from the parameters
//! - [x] Parameter estimation from observed data
//! - [x] Evaluation of the pdf / pmf
//! - [x] Combination of distributions (with `+`)
//! - [x] Plot data (rendering is done by a [Plotter](plot::Plotter))
//! - [x] Random sampling
//!
//! ## Distributions
//!
//! Every distribution implements the [Distribution] trait. The only requiered
//! methods are the distribution specific formulas:
//!  - [calculate_mean](Distribution::calculate_mean)
//!  - [calculate_stdev](Distribution::calculate_stdev)
//!  - [pdf](Distribution::pdf)
//!
//! The observed data and the current statistics live in a
//! [GeneralDistribution](distribution_trait::GeneralDistribution), shared by all of them.
//!
//!  - [x] [Binomial](distributions::Binomial) ([Wiki](https://en.wikipedia.org/wiki/Binomial_distribution))
//!  - [x] [Gaussian](distributions::Gaussian) ([Wiki](https://en.wikipedia.org/wiki/Normal_distribution))
//!
//! ```ignore
//! let mut binomial: Binomial = Binomial::default();
//! binomial.load_data(&[1.0, 1.0, 0.0, 1.0, 0.0])?;
//! let (p, n) = binomial.replace_stats_with_data()?; // (0.6, 5)
//!
//! let total: Binomial = (&binomial + &Binomial::new(0.6, 10)?)?; // n = 15
//! ```
//!
//! ## Logging
//!
//! The library logs trough the [log](https://docs.rs/log) facade. Install any
//! logger in your application to see the messages.
//!
//! ***
//!

pub use distribution_trait::Distribution;

pub mod Samples;
pub mod configuration;
pub mod distribution_trait;
pub mod distributions;
pub mod errors;
pub mod euclid;
pub mod plot;
