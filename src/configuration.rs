//! This file contains the deafult values and other value choices used trough the library.
//!

/// Two `p` values are considered equal when they differ by less than this.
///
/// Used when combining [Binomial](crate::distributions::Binomial::Binomial)
/// distributions. Exact float equality is too fragile for values that come
/// from an estimation (`3.0 / 5.0` and `0.6` should be the same `p`).
pub static P_EQUALITY_TOLERANCE: f64 = 1.0e-9;

/// Values used to generate the data for the plots.
///
/// The plots themselves are rendered by a [Plotter](crate::plot::Plotter),
/// this library only computes the points.
pub mod plot {

    /// Number of bins of a histogram if none is given.
    pub static DEFAULT_HISTOGRAM_BINS: usize = 10;

    /// Maximum number of bars of the pmf plot of a discrete distribution.
    /// A [Binomial](crate::distributions::Binomial::Binomial) with a bigger
    /// `n` can not be plotted.
    pub static MAX_PLOT_POINTS: usize = 1_000_000;

    /// Number of points used to draw the pdf of a continuous distribution.
    pub static GAUSSIAN_PLOT_POINTS: usize = 100;

    /// The pdf of a Gaussian is drawn in `[mean - k * stdev, mean + k * stdev]`
    /// with `k` = [GAUSSIAN_PLOT_SPAN].
    pub static GAUSSIAN_PLOT_SPAN: f64 = 3.0;

    /// Maximum number of characters of a bar drawn by a
    /// [TextPlotter](crate::plot::TextPlotter).
    pub static TEXT_PLOT_WIDTH: usize = 50;
}
