use num_traits::{FromPrimitive, ToPrimitive};

use super::VarianceError;

/// Divisor applied to the accumulated sum of squared deviations.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Normalization {
    /// Unbiased estimator with Bessel's correction: divide by `n - 1`.
    Sample,
    /// Biased estimator treating the sequence as the whole population:
    /// divide by `n`.
    Population,
}
impl Normalization {
    fn divisor(self, n: usize) -> usize {
        match self {
            Normalization::Sample => n - 1,
            Normalization::Population => n,
        }
    }
}

/// Welford's single-pass accumulation at `f64` precision.
///
/// The element count is taken before accumulation starts, so a sequence
/// shorter than 2 elements fails without producing a partial result.
pub(crate) fn welford<D>(
    values: impl Iterator<Item = D> + Clone,
    normalization: Normalization,
) -> Result<f64, VarianceError>
where
    D: ToPrimitive,
{
    let n: usize = values.clone().count();
    if n < 2 {
        return Err(VarianceError::InsufficientData);
    }
    let mut count: usize = 0;
    let mut mean: f64 = 0.;
    let mut m2: f64 = 0.;
    for value in values {
        let x = value.to_f64().ok_or(VarianceError::InvalidInput)?;
        count += 1;
        let delta = x - mean;
        mean += delta / count as f64;
        // Uses the updated mean, which keeps the recurrence stable
        m2 += delta * (x - mean);
    }
    Ok(m2 / normalization.divisor(n) as f64)
}

pub(crate) fn narrow<D>(value: f64) -> Result<D, VarianceError>
where
    D: FromPrimitive,
{
    D::from_f64(value).ok_or(VarianceError::InvalidInput)
}

pub trait VarianceExt<D>: Iterator<Item = D> {
    /// Sample variance of the sequence, in the sequence's own numeric domain.
    ///
    /// Accumulation happens at `f64` precision regardless of `D`; the final
    /// narrowing back to `D` can lose precision.
    fn variance(self) -> Result<D, VarianceError>;
    /// Population variance of the sequence.
    fn population_variance(self) -> Result<D, VarianceError>;
}
impl<T, D> VarianceExt<D> for T
where
    T: Iterator<Item = D> + Clone,
    D: ToPrimitive + FromPrimitive,
{
    fn variance(self) -> Result<D, VarianceError> {
        narrow(welford(self, Normalization::Sample)?)
    }

    fn population_variance(self) -> Result<D, VarianceError> {
        narrow(welford(self, Normalization::Population)?)
    }
}
