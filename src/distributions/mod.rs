// Discrete
pub mod Binomial;

// Continuous
pub mod Gaussian;
