//! Testing module for parameter estimation from observed data.
//!
//!
//!

use ProbabilityDistributions::{
    Distribution,
    Samples::Samples,
    distributions::{Binomial::Binomial, Gaussian::Gaussian},
    errors::DistributionError,
};
use assert_approx_eq::assert_approx_eq;

#[test]
fn binomial_from_data() {
    let mut binomial: Binomial = Binomial::default();
    binomial
        .load_data(&[1.0, 1.0, 0.0, 1.0, 0.0])
        .expect("No inf nor nans");

    let (p, n): (f64, u64) = binomial
        .replace_stats_with_data()
        .expect("There is data");

    assert_eq!(n, 5);
    assert_approx_eq!(p, 0.6);
    assert_eq!(binomial.get_n(), 5);
    assert_approx_eq!(binomial.get_p(), 0.6);
    assert_approx_eq!(binomial.get_mean(), 3.0);
    assert_approx_eq!(binomial.get_stdev(), 1.2_f64.sqrt());
}

#[test]
fn binomial_positive_values_are_successes() {
    let mut binomial: Binomial = Binomial::new(0.9, 100).unwrap();
    binomial
        .load_data(&[0.5, -2.0, 0.0, 3.0, 0.0, 0.0, 7.0, -0.1])
        .unwrap();

    let (p, n): (f64, u64) = binomial.replace_stats_with_data().unwrap();
    assert_eq!(n, 8);
    assert_approx_eq!(p, 3.0 / 8.0);
}

#[test]
fn binomial_empty_data() {
    let mut binomial: Binomial = Binomial::new(0.25, 8).unwrap();

    assert!(matches!(
        binomial.replace_stats_with_data(),
        Err(DistributionError::DivisionByZero)
    ));

    // nothing changed
    assert_eq!(binomial.get_p(), 0.25);
    assert_eq!(binomial.get_n(), 8);
    assert_approx_eq!(binomial.get_mean(), 2.0);
}

#[test]
fn binomial_from_own_samples() {
    let mut binomial: Binomial = Binomial::new(0.7, 1).unwrap();
    binomial.load_random_data(5000).unwrap();

    let (p, n): (f64, u64) = binomial.replace_stats_with_data().unwrap();
    assert_eq!(n, 5000);
    // standard error ~0.0065
    assert!((p - 0.7).abs() < 0.05, "p too far from 0.7: {p}");
}

#[test]
fn gaussian_from_data() {
    let mut gaussian: Gaussian = Gaussian::default();
    gaussian.load_data(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();

    let (mean, stdev): (f64, f64) = gaussian.replace_stats_with_data().unwrap();
    assert_approx_eq!(mean, 3.0);
    assert_approx_eq!(stdev, 2.5_f64.sqrt());
    assert_approx_eq!(gaussian.get_mean(), 3.0);
    assert_approx_eq!(gaussian.get_stdev(), 2.5_f64.sqrt());
}

#[test]
fn gaussian_not_enough_data() {
    let mut gaussian: Gaussian = Gaussian::new(4.0, 1.5).unwrap();
    assert!(matches!(
        gaussian.replace_stats_with_data(),
        Err(DistributionError::DivisionByZero)
    ));

    gaussian.load_data(&[2.0]).unwrap();
    assert!(matches!(
        gaussian.replace_stats_with_data(),
        Err(DistributionError::NotEnoughSamples)
    ));

    assert_eq!(gaussian.get_mean(), 4.0);
    assert_eq!(gaussian.get_stdev(), 1.5);
}

#[test]
fn gaussian_from_huge_data() {
    let mut gaussian: Gaussian = Gaussian::new(4.0, 1.5).unwrap();
    gaussian.load_data(&[f64::MAX, f64::MAX, -1.0]).unwrap();

    // the mean fits in a f64, the standard deviation does not
    let samples: Samples = Samples::new(gaussian.get_data()).unwrap();
    let mean: f64 = samples.mean().unwrap();
    assert!(mean.is_finite());
    assert_approx_eq!(mean / f64::MAX, 2.0 / 3.0, 1.0e-12);

    assert!(matches!(
        gaussian.replace_stats_with_data(),
        Err(DistributionError::InvalidNumber)
    ));
    assert_eq!(gaussian.get_mean(), 4.0);
    assert_eq!(gaussian.get_stdev(), 1.5);
}

#[test]
fn invalid_data_is_rejected() {
    let mut binomial: Binomial = Binomial::default();
    binomial.load_data(&[1.0, 0.0]).unwrap();

    assert!(matches!(
        binomial.load_data(&[1.0, f64::NAN]),
        Err(DistributionError::NanErr)
    ));
    assert!(matches!(
        binomial.load_data(&[f64::NEG_INFINITY]),
        Err(DistributionError::InvalidNumber)
    ));

    // the previous data is kept
    assert_eq!(binomial.get_data(), &[1.0, 0.0]);
}
