//! Properties that must hold for any valid parameters.

use ProbabilityDistributions::{
    Distribution,
    distributions::{Binomial::Binomial, Gaussian::Gaussian},
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn binomial_mean_and_stdev(p in 0.0_f64..=1.0, n in 0_u64..10_000) {
        let binomial: Binomial = Binomial::new(p, n).unwrap();

        prop_assert_eq!(binomial.calculate_mean(), p * n as f64);
        prop_assert_eq!(binomial.calculate_stdev(), (n as f64 * p * (1.0 - p)).sqrt());
        prop_assert_eq!(binomial.get_mean(), binomial.calculate_mean());
        prop_assert_eq!(binomial.get_stdev(), binomial.calculate_stdev());
    }

    #[test]
    fn binomial_pmf_sums_to_one(p in 0.0_f64..=1.0, n in 0_u64..200) {
        let binomial: Binomial = Binomial::new(p, n).unwrap();

        let mut total: f64 = 0.0;
        for k in 0..=n {
            let value: f64 = binomial.pmf(k).unwrap();
            prop_assert!((0.0..=1.0 + 1.0e-12).contains(&value), "pmf({}) = {}", k, value);
            total += value;
        }

        prop_assert!((total - 1.0).abs() < 1.0e-9, "total = {}", total);
    }

    #[test]
    fn binomial_combination_adds_trials(
        p in 0.0_f64..=1.0,
        n_1 in 0_u64..1_000,
        n_2 in 0_u64..1_000,
    ) {
        let a: Binomial = Binomial::new(p, n_1).unwrap();
        let b: Binomial = Binomial::new(p, n_2).unwrap();

        let c: Binomial = (&a + &b).unwrap();
        prop_assert_eq!(c.get_n(), n_1 + n_2);
        prop_assert_eq!(c.get_p(), p);
    }

    #[test]
    fn binomial_estimation_counts_successes(
        data in proptest::collection::vec(-10.0_f64..10.0, 1..100)
    ) {
        let mut binomial: Binomial = Binomial::default();
        binomial.load_data(&data).unwrap();

        let (p, n): (f64, u64) = binomial.replace_stats_with_data().unwrap();
        let successes: usize = data.iter().filter(|&&x| 0.0 < x).count();

        prop_assert_eq!(n, data.len() as u64);
        prop_assert_eq!(p, successes as f64 / data.len() as f64);
        prop_assert!((binomial.get_mean() - successes as f64).abs() < 1.0e-9);
    }

    #[test]
    fn gaussian_pdf_is_symmetric(
        mean in -100.0_f64..100.0,
        stdev in 0.01_f64..50.0,
        offset in 0.0_f64..100.0,
    ) {
        let gaussian: Gaussian = Gaussian::new(mean, stdev).unwrap();
        let left: f64 = gaussian.pdf(mean - offset).unwrap();
        let right: f64 = gaussian.pdf(mean + offset).unwrap();

        // `mean +- offset` is rounded, so only approximately symmetric
        prop_assert!((left - right).abs() <= 1.0e-6 * left.max(right) + 1.0e-300);
        prop_assert!(right <= gaussian.pdf(mean).unwrap());
    }
}
