//! Plot data.
//!
//! This library does not draw anything by itself. The distributions produce
//! [PlotData] (a set of `(x, y)` points plus some labels) and hand it to a
//! [Plotter], wich is free to render it however it wants.
//!
//! A very simple [TextPlotter] is provided for terminals and logs.

use std::io::Write;

use crate::Samples::Samples;
use crate::configuration::plot::{DEFAULT_HISTOGRAM_BINS, TEXT_PLOT_WIDTH};
use crate::errors::DistributionError;

/// How the points of a [PlotData] should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotKind {
    /// One bar per point.
    #[default]
    Bar,
    /// One bar per bin. `x` holds the centers of the bins and `y` the counts.
    Histogram,
    /// A continuous line trough the points.
    Line,
}

/// The points and labels of a plot.
///
/// Has the **invariant** that `x.len() == y.len()`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlotData {
    pub kind: PlotKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl PlotData {
    /// Iterates over the `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        return self.x.iter().copied().zip(self.y.iter().copied());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        return self.x.is_empty();
    }
}

/// Something that can draw a [PlotData].
pub trait Plotter {
    fn render(&mut self, plot: &PlotData) -> Result<(), DistributionError>;
}

/// Computes a [histogram](https://en.wikipedia.org/wiki/Histogram) of `data`.
///
/// The range `[min, max]` of the data is split in `bins` intervals of the
/// same width (the last one includes `max`).
///  - `bins`: (optional) the number of bins. The default is
///     [DEFAULT_HISTOGRAM_BINS]. Must be at least 1, otherwise
///     [DistributionError::InvalidNumber] is returned.
///
/// If `data` is empty, the returned plot has no points. If all the values
/// are equal, there is a single bin. If the range of the data does not fit
/// in a `f64` (`max - min` overflows), [DistributionError::InvalidNumber]
/// is returned.
///
/// ```ignore
/// let plot: PlotData = histogram().data(&samples).bins(5).call()?;
/// ```
#[bon::builder]
pub fn histogram(
    data: &Samples,
    #[builder(default = DEFAULT_HISTOGRAM_BINS)] bins: usize,
) -> Result<PlotData, DistributionError> {
    if bins == 0 {
        return Err(DistributionError::InvalidNumber);
    }

    let mut plot: PlotData = PlotData {
        kind: PlotKind::Histogram,
        title: String::from("Histogram of Data"),
        x_label: String::from("Data"),
        y_label: String::from("Count"),
        x: Vec::new(),
        y: Vec::new(),
    };

    let (min, max): (f64, f64) = match (data.minimum(), data.maximum()) {
        (Some(min), Some(max)) => (min, max),
        _ => return Ok(plot),
    };

    if max == min {
        plot.x.push(min);
        plot.y.push(data.count() as f64);
        return Ok(plot);
    }

    let width: f64 = (max - min) / bins as f64;
    if !width.is_finite() {
        // `max - min` overflowed
        return Err(DistributionError::InvalidNumber);
    }
    let mut counts: Vec<f64> = vec![0.0; bins];

    for &value in data.peek_data() {
        let idx: usize = ((value - min) / width).floor() as usize;
        // `max` itself falls one past the end
        counts[idx.min(bins - 1)] += 1.0;
    }

    plot.x = (0..bins)
        .map(|i| min + width * (i as f64 + 0.5))
        .collect::<Vec<f64>>();
    plot.y = counts;

    return Ok(plot);
}

/// A [Plotter] that writes the plot as text, one row per point.
///
/// ```text
/// Probability Density Chart
///      0.000 | ##                                        0.0010
///      1.000 | ###########                               0.0098
/// ```
pub struct TextPlotter<W: Write> {
    writer: W,
    width: usize,
}

impl<W: Write> TextPlotter<W> {
    /// Creates a new [TextPlotter] with bars of at most
    /// [TEXT_PLOT_WIDTH] characters.
    pub fn new(writer: W) -> TextPlotter<W> {
        return TextPlotter {
            writer,
            width: TEXT_PLOT_WIDTH,
        };
    }

    /// Changes the maximum length of the bars.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> TextPlotter<W> {
        self.width = width;
        return self;
    }

    /// Returns the inner writer and drops self.
    pub fn into_inner(self) -> W {
        return self.writer;
    }
}

impl<W: Write> Plotter for TextPlotter<W> {
    fn render(&mut self, plot: &PlotData) -> Result<(), DistributionError> {
        writeln!(self.writer, "{}", plot.title)?;
        writeln!(self.writer, "({}: {})", plot.x_label, plot.y_label)?;

        let y_max: f64 = plot.y.iter().copied().fold(0.0, f64::max);

        for (x, y) in plot.points() {
            let len: usize = if 0.0 < y_max {
                ((y / y_max) * self.width as f64).round() as usize
            } else {
                0
            };
            let bar: String = "#".repeat(len);
            writeln!(
                self.writer,
                "{:>10.3} | {:<width$} {:.4}",
                x,
                bar,
                y,
                width = self.width
            )?;
        }

        self.writer.flush()?;
        return Ok(());
    }
}
