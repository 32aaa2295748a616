use num_traits::{FromPrimitive, ToPrimitive};

use super::{variance::VarianceExt, VarianceError};

/// Variance over sequences of optional values.
///
/// Absent values are excluded from the computation. A sequence with no
/// present values at all yields `Ok(None)` rather than an error; a single
/// present value is still too few and fails with
/// [`VarianceError::InsufficientData`].
pub trait NullableVarianceExt<D>: Iterator<Item = Option<D>> {
    fn variance(self) -> Result<Option<D>, VarianceError>;
    fn population_variance(self) -> Result<Option<D>, VarianceError>;
}
impl<T, D> NullableVarianceExt<D> for T
where
    T: Iterator<Item = Option<D>> + Clone,
    D: ToPrimitive + FromPrimitive + Copy,
{
    fn variance(self) -> Result<Option<D>, VarianceError> {
        let present = self.flatten();
        if present.clone().next().is_none() {
            return Ok(None);
        }
        present.variance().map(Some)
    }

    fn population_variance(self) -> Result<Option<D>, VarianceError> {
        let present = self.flatten();
        if present.clone().next().is_none() {
            return Ok(None);
        }
        present.population_variance().map(Some)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::float::FloatExt;

    use super::*;

    #[test]
    fn test_all_absent_is_no_data() {
        let absent: [Option<f64>; 5] = [None; 5];
        assert_eq!(absent.iter().copied().variance(), Ok(None));
        assert_eq!(absent.iter().copied().population_variance(), Ok(None));

        let empty: [Option<i32>; 0] = [];
        assert_eq!(empty.iter().copied().variance(), Ok(None));
    }

    #[test]
    fn test_absent_values_are_skipped() {
        let mixed = [Some(2.), None, Some(4.), None, Some(6.)];
        let variance: Option<f64> = mixed.iter().copied().variance().unwrap();
        assert!(variance.unwrap().closes_to(4.));

        let dense = [2., 4., 6.];
        let reference: f64 = dense.iter().copied().variance().unwrap();
        assert!(variance.unwrap().closes_to(reference));

        let population: Option<f64> = mixed.iter().copied().population_variance().unwrap();
        assert!(population.unwrap().closes_to(8. / 3.));
    }

    #[test]
    fn test_single_present_value_is_too_few() {
        let sparse = [None, Some(5.0_f64), None];
        assert_eq!(
            sparse.iter().copied().variance(),
            Err(VarianceError::InsufficientData)
        );
        assert_eq!(
            sparse.iter().copied().population_variance(),
            Err(VarianceError::InsufficientData)
        );
    }

    #[test]
    fn test_decimal_elements() {
        let mixed = [
            Some(Decimal::from(2)),
            None,
            Some(Decimal::from(4)),
            None,
            Some(Decimal::from(6)),
        ];
        let variance: Option<Decimal> = mixed.iter().copied().variance().unwrap();
        assert_eq!(variance, Some(Decimal::from(4)));
    }
}
