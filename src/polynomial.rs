use num_traits::One;

use crate::point::{Scalar, SplinePoint};

/// Cubic polynomial `a + b*λ + c*λ^2 + d*λ^3` of a single spline segment in its local
/// parameter `λ`, which is `0` at the left and `1` at the right control point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicPoly<P: SplinePoint> {
    pub a: P,
    pub b: P,
    pub c: P,
    pub d: P,
}

impl<P: SplinePoint> CubicPoly<P> {
    /// Hermite segment passing through `p0` and `p1` with derivatives `d0` and `d1` at its ends.
    pub fn from_hermite(p0: P, p1: P, d0: P, d1: P) -> Self {
        let two = scalar::<P>(2.0);
        let three = scalar::<P>(3.0);

        CubicPoly {
            a: p0,
            b: d0,
            c: p1.minus(p0).scaled(three).minus(d0.scaled(two)).minus(d1),
            d: p0.minus(p1).scaled(two).plus(d0).plus(d1),
        }
    }

    /// Value at `lambda`. Arguments outside `[0, 1]` continue the cubic.
    pub fn evaluate(&self, lambda: P::Scalar) -> P {
        let lambda2 = lambda * lambda;
        let linear = self.a.plus(self.b.scaled(lambda));
        let quadratic = self.c.scaled(lambda2);

        linear.plus(quadratic).plus(self.d.scaled(lambda2 * lambda))
    }

    /// First derivative with respect to `lambda`.
    pub fn derivative(&self, lambda: P::Scalar) -> P {
        let two = scalar::<P>(2.0);
        let three = scalar::<P>(3.0);

        self.b
            .plus(self.c.scaled(two * lambda))
            .plus(self.d.scaled(three * lambda * lambda))
    }

    /// Segments for consecutive pairs of control points, one less than number of `values`.
    pub(crate) fn segments(values: &[P], derivatives: &[P]) -> Vec<Self> {
        values
            .windows(2)
            .zip(derivatives.windows(2))
            .map(|(p, d)| CubicPoly::from_hermite(p[0], p[1], d[0], d[1]))
            .collect()
    }

    pub(crate) fn end(&self) -> P {
        self.evaluate(<P::Scalar as One>::one())
    }
}

fn scalar<P: SplinePoint>(value: f64) -> P::Scalar {
    <P::Scalar as Scalar>::from_f64(value)
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use nalgebra::Point2;

    use super::*;

    #[test]
    fn evaluate() {
        let eps = 1e-6;
        let polynomial = CubicPoly {
            a: 1.0_f64,
            b: 2.5,
            c: -0.25,
            d: 0.0,
        };

        assert_approx_eq!(polynomial.evaluate(2.1), 5.1475, eps);
        assert_approx_eq!(polynomial.evaluate(-3.14), -9.3149, eps);
        assert_approx_eq!(polynomial.evaluate(0.0), 1.0, eps);
    }

    #[test]
    fn hermite_ends() {
        let eps = 1e-12;
        let polynomial = CubicPoly::from_hermite(2.0_f64, -1.0, 0.5, 3.0);

        assert_approx_eq!(polynomial.evaluate(0.0), 2.0, eps);
        assert_approx_eq!(polynomial.evaluate(1.0), -1.0, eps);
        assert_approx_eq!(polynomial.end(), -1.0, eps);
        assert_approx_eq!(polynomial.derivative(0.0), 0.5, eps);
        assert_approx_eq!(polynomial.derivative(1.0), 3.0, eps);
    }

    #[test]
    fn hermite_coefficients() {
        let polynomial = CubicPoly::from_hermite(1.0_f64, 2.0, 0.0, 0.0);

        let expected = CubicPoly {
            a: 1.0,
            b: 0.0,
            c: 3.0,
            d: -2.0,
        };
        assert_eq!(expected, polynomial);
    }

    #[test]
    fn hermite_line_is_linear() {
        let polynomial = CubicPoly::from_hermite(0.0_f64, 1.0, 1.0, 1.0);

        assert_eq!(0.0, polynomial.c);
        assert_eq!(0.0, polynomial.d);
        assert_approx_eq!(polynomial.evaluate(-1.0), -1.0, 1e-12);
        assert_approx_eq!(polynomial.evaluate(2.5), 2.5, 1e-12);
    }

    #[test]
    fn hermite_points() {
        let p0 = Point2::new(0.0_f32, 0.0);
        let p1 = Point2::new(1.0, 2.0);
        let d0 = Point2::new(1.0, 0.0);
        let d1 = Point2::new(0.0, 1.0);
        let polynomial = CubicPoly::from_hermite(p0, p1, d0, d1);

        let start = polynomial.evaluate(0.0);
        let end = polynomial.evaluate(1.0);
        assert_approx_eq!(start.x, 0.0, 1e-6);
        assert_approx_eq!(start.y, 0.0, 1e-6);
        assert_approx_eq!(end.x, 1.0, 1e-6);
        assert_approx_eq!(end.y, 2.0, 1e-6);
        assert_eq!(d1, polynomial.derivative(1.0));
    }

    #[test]
    fn segments() {
        let values = [0.0_f64, 1.0, 4.0];
        let derivatives = [0.0, 2.0, 4.0];
        let segments = CubicPoly::segments(&values, &derivatives);

        assert_eq!(2, segments.len());
        assert_eq!(CubicPoly::from_hermite(1.0, 4.0, 2.0, 4.0), segments[1]);
    }
}
