use num_traits::{FromPrimitive, ToPrimitive};

use super::{nullable::NullableVarianceExt, variance::VarianceExt, VarianceError};

/// Variance of numeric values obtained by applying a projection to each
/// element of an arbitrary sequence.
///
/// The projection is applied lazily; the projected sequence behaves exactly
/// like the corresponding plain (or optional) sequence would.
pub trait ProjectionVarianceExt: Iterator + Sized {
    fn variance_by<D, F>(self, project: F) -> Result<D, VarianceError>
    where
        Self: Clone,
        F: FnMut(Self::Item) -> D + Clone,
        D: ToPrimitive + FromPrimitive,
    {
        self.map(project).variance()
    }

    fn population_variance_by<D, F>(self, project: F) -> Result<D, VarianceError>
    where
        Self: Clone,
        F: FnMut(Self::Item) -> D + Clone,
        D: ToPrimitive + FromPrimitive,
    {
        self.map(project).population_variance()
    }

    /// Like [`Self::variance_by`] but for projections that may come up
    /// empty; elements projected to `None` are excluded.
    fn variance_by_opt<D, F>(self, project: F) -> Result<Option<D>, VarianceError>
    where
        Self: Clone,
        F: FnMut(Self::Item) -> Option<D> + Clone,
        D: ToPrimitive + FromPrimitive + Copy,
    {
        self.map(project).variance()
    }

    fn population_variance_by_opt<D, F>(self, project: F) -> Result<Option<D>, VarianceError>
    where
        Self: Clone,
        F: FnMut(Self::Item) -> Option<D> + Clone,
        D: ToPrimitive + FromPrimitive + Copy,
    {
        self.map(project).population_variance()
    }
}
impl<T: Iterator> ProjectionVarianceExt for T {}
