use nalgebra::DVector;

use crate::{
    boundary::BoundaryCondition,
    error::SolverError,
    point::{Scalar, SplinePoint},
    system::{right_hand_side, CubicSplineMatrix},
};

const PIVOT_TOLERANCE: f64 = 1e-14;

/// Solves derivatives system for every dimension of `values`, returned vector holds derivative
/// at each control point.
///
/// Derivatives are expressed per unit of the local segment parameter, the same units
/// [crate::CubicPoly] is evaluated in.
/// # Example
/// ```
/// use hermite_spline::{compute_derivatives, BoundaryCondition};
/// use assert_approx_eq::assert_approx_eq;
///
/// let values = vec![0.0_f64, 2.0, 4.0, 6.0];
/// let derivatives = compute_derivatives(&values, &BoundaryCondition::Smooth).unwrap();
///
/// for derivative in derivatives {
///     assert_approx_eq!(2.0, derivative, 1e-12);
/// }
/// ```
/// # Errors
/// [SolverError] is returned when elimination meets a zero pivot.
pub fn compute_derivatives<P: SplinePoint>(
    values: &[P],
    boundary: &BoundaryCondition<P>,
) -> Result<Vec<P>, SolverError> {
    let matrix = CubicSplineMatrix::new(boundary, values.len());
    solve_derivatives(&matrix, values, boundary)
}

/// Solves `matrix` against right hand side of every dimension of `values`. Failed solve
/// reports the dimension it happened in.
pub(crate) fn solve_derivatives<P: SplinePoint>(
    matrix: &CubicSplineMatrix,
    values: &[P],
    boundary: &BoundaryCondition<P>,
) -> Result<Vec<P>, SolverError> {
    let size = values.len();
    let mut derivatives = values.to_vec();

    for dimension in 0..P::SCALAR_COUNT {
        let rhs = right_hand_side(values, boundary, dimension);

        // constant values along this dimension
        let solution = if rhs.iter().all(|value| *value == 0.0) {
            #[cfg(feature = "log")]
            log::trace!("dimension {} has zero right hand side, skipping solve", dimension);
            DVector::zeros(size)
        } else {
            #[cfg(feature = "log")]
            log::trace!(
                "solving {} system of size {} for dimension {}",
                matrix.boundary,
                size,
                dimension
            );
            matrix
                .solve(&rhs)
                .map_err(|error| SolverError { dimension, ..error })?
        };

        for (derivative, value) in derivatives.iter_mut().zip(solution.iter()) {
            derivative.set_component(dimension, <P::Scalar as Scalar>::from_f64(*value));
        }
    }
    Ok(derivatives)
}

impl CubicSplineMatrix {
    /// Solves `self * x = rhs` by direct elimination. Tridiagonal matrices use the Thomas
    /// algorithm, the `Circular` matrix is reduced to two tridiagonal solves with the
    /// Sherman-Morrison formula.
    ///
    /// Returned error always reports dimension `0`.
    /// # Panics
    /// When length of `rhs` differs from [CubicSplineMatrix::size].
    pub fn solve(&self, rhs: &DVector<f64>) -> Result<DVector<f64>, SolverError> {
        assert_eq!(
            self.size(),
            rhs.len(),
            "Right hand side length doesn't match matrix size"
        );

        let result = match self.corners {
            Some((top_right, bottom_left)) => self.solve_cyclic(top_right, bottom_left, rhs),
            None => self.solve_tridiagonal(&self.diagonal, rhs),
        };

        result.map_err(|row| SolverError {
            boundary: self.boundary,
            dimension: 0,
            row,
        })
    }

    fn solve_tridiagonal(
        &self,
        diagonal: &DVector<f64>,
        rhs: &DVector<f64>,
    ) -> Result<DVector<f64>, usize> {
        let size = diagonal.len();
        if size == 0 {
            return Ok(DVector::zeros(0));
        }

        let mut c_prime = DVector::<f64>::zeros(size);
        let mut d_prime = DVector::<f64>::zeros(size);

        // forward sweep
        if diagonal[0].abs() < PIVOT_TOLERANCE {
            return Err(0);
        }
        c_prime[0] = self.upper[0] / diagonal[0];
        d_prime[0] = rhs[0] / diagonal[0];

        for i in 1..size {
            let pivot = diagonal[i] - self.lower[i] * c_prime[i - 1];
            if pivot.abs() < PIVOT_TOLERANCE {
                return Err(i);
            }
            c_prime[i] = self.upper[i] / pivot;
            d_prime[i] = (rhs[i] - self.lower[i] * d_prime[i - 1]) / pivot;
        }

        // back substitution
        let mut x = DVector::<f64>::zeros(size);
        x[size - 1] = d_prime[size - 1];
        for i in (0..size - 1).rev() {
            x[i] = d_prime[i] - c_prime[i] * x[i + 1];
        }
        Ok(x)
    }

    fn solve_cyclic(
        &self,
        top_right: f64,
        bottom_left: f64,
        rhs: &DVector<f64>,
    ) -> Result<DVector<f64>, usize> {
        let size = self.size();
        let last = size - 1;

        let gamma = -self.diagonal[0];
        if gamma.abs() < PIVOT_TOLERANCE {
            return Err(0);
        }

        let mut diagonal = self.diagonal.clone();
        diagonal[0] -= gamma;
        diagonal[last] -= bottom_left * top_right / gamma;

        let x = self.solve_tridiagonal(&diagonal, rhs)?;

        let mut u = DVector::<f64>::zeros(size);
        u[0] = gamma;
        u[last] = bottom_left;
        let z = self.solve_tridiagonal(&diagonal, &u)?;

        let denominator = 1.0 + z[0] + top_right * z[last] / gamma;
        if denominator.abs() < PIVOT_TOLERANCE {
            return Err(last);
        }
        let factor = (x[0] + top_right * x[last] / gamma) / denominator;

        Ok(x - z * factor)
    }
}
