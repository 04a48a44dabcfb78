use thiserror::Error;

/// Everything that can go wrong when building, estimating or evaluating
/// a distribution.
#[derive(Error, Debug)]
pub enum DistributionError {
    /// Two distributions were combined but their parameters did not allow it.
    /// (For the [Binomial](crate::distributions::Binomial) the `p` values must be equal).
    #[error("The p values are not equal ({left} != {right}). ")]
    PreconditionViolation { left: f64, right: f64 },
    /// The sample was empty, so the parameters can not be estimated.
    #[error("Division by zero: the sample is empty. ")]
    DivisionByZero,
    /// There were not enough samples to do the operation.
    #[error("There were not enough samples to do the operation. ")]
    NotEnoughSamples,
    /// A NaN (Not a Number) was found in the input.
    #[error("A NaN (Not a Number) was found in the input. ")]
    NanErr,
    /// The a number did not fullfill the conditions of the function.
    /// Maybe it was infinite when it was not allowed, was negative when the function
    /// only takes positive number, or was a big numer when the function asks for a
    /// probability.
    #[error(
        "The a number did not fullfill the conditions of the function. Maybe it was infinite when it was not allowed, was negative when the function only takes positive number, or was a big numer when the function asks for a probability. "
    )]
    InvalidNumber,
    /// A function was evaluated outside it's domain.
    #[error("A function was evaluated outside it's domain. ")]
    DomainErr,
    /// The data file could not be read.
    #[error("Could not read the data file: {0}")]
    Io(#[from] std::io::Error),
    /// A line of the data file is not a number.
    #[error("Line {line} of the data file is not a number: `{content}`")]
    Parse { line: usize, content: String },
}
