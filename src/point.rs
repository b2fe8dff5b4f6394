use std::fmt::Debug;

use nalgebra::{Point, SVector};
use num_traits::{Float, One};

/// Floating point type of a single component of a [SplinePoint].
///
/// Derivatives are always solved in `f64`, so every scalar has to convert to and from it.
pub trait Scalar: Float + Debug + 'static {
    fn as_f64(self) -> f64;

    fn from_f64(value: f64) -> Self;
}

impl Scalar for f32 {
    fn as_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Scalar for f64 {
    fn as_f64(self) -> f64 {
        self
    }

    fn from_f64(value: f64) -> Self {
        value
    }
}

/// Value which can be interpolated by a [crate::Spline].
///
/// A point consists of `SCALAR_COUNT` independent components. Every component is interpolated
/// as its own one dimensional problem, therefore the only operations required are indexed access,
/// addition and multiplication by a scalar.
///
/// Implemented for `f32`, `f64` and nalgebra's statically sized vectors and points.
/// # Example
/// ```
/// use hermite_spline::SplinePoint;
/// use nalgebra::Vector2;
///
/// let a = Vector2::new(1.0_f64, 2.0);
/// let b = Vector2::new(0.5_f64, -1.0);
///
/// assert_eq!(2, <Vector2<f64> as SplinePoint>::SCALAR_COUNT);
/// assert_eq!(Vector2::new(0.5, 3.0), a.minus(b));
/// assert_eq!(-1.0, b.component(1));
/// ```
pub trait SplinePoint: Copy + Debug {
    type Scalar: Scalar;

    /// Number of scalar components.
    const SCALAR_COUNT: usize;

    /// Returns component `index`, `0 <= index < SCALAR_COUNT`.
    fn component(&self, index: usize) -> Self::Scalar;

    fn set_component(&mut self, index: usize, value: Self::Scalar);

    fn scaled(self, factor: Self::Scalar) -> Self;

    fn plus(self, other: Self) -> Self;

    fn minus(self, other: Self) -> Self {
        self.plus(other.scaled(-<Self::Scalar as One>::one()))
    }
}

macro_rules! impl_spline_point_for_float {
    ($($t:ty),*) => {
        $(
            impl SplinePoint for $t {
                type Scalar = $t;

                const SCALAR_COUNT: usize = 1;

                fn component(&self, _index: usize) -> $t {
                    *self
                }

                fn set_component(&mut self, _index: usize, value: $t) {
                    *self = value;
                }

                fn scaled(self, factor: $t) -> Self {
                    factor * self
                }

                fn plus(self, other: Self) -> Self {
                    self + other
                }
            }
        )*
    };
}

macro_rules! impl_spline_point_for_nalgebra {
    ($($t:ty),*) => {
        $(
            impl<const D: usize> SplinePoint for SVector<$t, D> {
                type Scalar = $t;

                const SCALAR_COUNT: usize = D;

                fn component(&self, index: usize) -> $t {
                    self[index]
                }

                fn set_component(&mut self, index: usize, value: $t) {
                    self[index] = value;
                }

                fn scaled(self, factor: $t) -> Self {
                    self.map(|c| factor * c)
                }

                fn plus(self, other: Self) -> Self {
                    self.zip_map(&other, |a, b| a + b)
                }
            }

            impl<const D: usize> SplinePoint for Point<$t, D> {
                type Scalar = $t;

                const SCALAR_COUNT: usize = D;

                fn component(&self, index: usize) -> $t {
                    self[index]
                }

                fn set_component(&mut self, index: usize, value: $t) {
                    self[index] = value;
                }

                fn scaled(self, factor: $t) -> Self {
                    Point::from(self.coords.map(|c| factor * c))
                }

                fn plus(self, other: Self) -> Self {
                    Point::from(self.coords.zip_map(&other.coords, |a, b| a + b))
                }
            }
        )*
    };
}

impl_spline_point_for_float!(f32, f64);
impl_spline_point_for_nalgebra!(f32, f64);
