use nalgebra::{DMatrix, DVector};

use crate::{
    boundary::BoundaryCondition,
    point::{Scalar, SplinePoint},
};

/// Matrix of the classic cubic spline derivatives system, see
/// <https://mathworld.wolfram.com/CubicSpline.html>.
///
/// Interior rows are always `1 4 1`. Rows at both ends depend on [BoundaryCondition]:
/// ```text
/// Smooth      Circular    FixedTangentials
/// 2 1 . . .   4 1 . . 1   1 . . . .
/// 1 4 1 . .   1 4 1 . .   1 4 1 . .
/// . 1 4 1 .   . 1 4 1 .   . 1 4 1 .
/// . . 1 4 1   . . 1 4 1   . . 1 4 1
/// . . . 1 2   1 . . 1 4   . . . . 1
/// ```
/// The matrix does not depend on the values, so it is built once and shared by every dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSplineMatrix {
    /// `lower[i]` is the entry left of the diagonal in row `i`, `lower[0]` is unused.
    pub(crate) lower: DVector<f64>,
    pub(crate) diagonal: DVector<f64>,
    /// `upper[i]` is the entry right of the diagonal in row `i`, `upper[n - 1]` is unused.
    pub(crate) upper: DVector<f64>,
    /// Top right and bottom left entries of the `Circular` matrix.
    pub(crate) corners: Option<(f64, f64)>,
    pub(crate) boundary: &'static str,
}

impl CubicSplineMatrix {
    pub fn new<P: SplinePoint>(boundary: &BoundaryCondition<P>, size: usize) -> Self {
        let mut matrix = CubicSplineMatrix {
            lower: DVector::zeros(size),
            diagonal: DVector::from_element(size, 1.0),
            upper: DVector::zeros(size),
            corners: None,
            boundary: boundary.name(),
        };

        // single control point leaves identity, derivative equals right hand side
        if size < 2 {
            return matrix;
        }

        let last = size - 1;
        for i in 0..size {
            matrix.diagonal[i] = 4.0;
            if i > 0 {
                matrix.lower[i] = 1.0;
            }
            if i < last {
                matrix.upper[i] = 1.0;
            }
        }

        match boundary {
            BoundaryCondition::Smooth => {
                matrix.diagonal[0] = 2.0;
                matrix.diagonal[last] = 2.0;
            }
            BoundaryCondition::Circular => {
                if size == 2 {
                    // neighbour and wrapped neighbour are the same column
                    matrix.upper[0] += 1.0;
                    matrix.lower[last] += 1.0;
                } else {
                    matrix.corners = Some((1.0, 1.0));
                }
            }
            BoundaryCondition::FixedTangentials { .. } => {
                matrix.diagonal[0] = 1.0;
                matrix.upper[0] = 0.0;
                matrix.diagonal[last] = 1.0;
                matrix.lower[last] = 0.0;
            }
        }
        matrix
    }

    pub fn size(&self) -> usize {
        self.diagonal.len()
    }

    pub fn is_cyclic(&self) -> bool {
        self.corners.is_some()
    }

    /// Dense copy of the matrix.
    pub fn to_dense(&self) -> DMatrix<f64> {
        let size = self.size();
        let mut dense = DMatrix::<f64>::zeros(size, size);

        for i in 0..size {
            dense[(i, i)] = self.diagonal[i];
            if i > 0 {
                dense[(i, i - 1)] = self.lower[i];
            }
            if i + 1 < size {
                dense[(i, i + 1)] = self.upper[i];
            }
        }
        if let Some((top_right, bottom_left)) = self.corners {
            dense[(0, size - 1)] = top_right;
            dense[(size - 1, 0)] = bottom_left;
        }
        dense
    }
}

/// Right hand side of the derivatives system for a single `dimension` of `values`.
/// # Panics
/// When `dimension` is not less than [SplinePoint::SCALAR_COUNT].
pub fn right_hand_side<P: SplinePoint>(
    values: &[P],
    boundary: &BoundaryCondition<P>,
    dimension: usize,
) -> DVector<f64> {
    assert!(
        dimension < P::SCALAR_COUNT,
        "Dimension {} out of range for {} components",
        dimension,
        P::SCALAR_COUNT
    );
    let size = values.len();
    if size < 2 {
        return DVector::zeros(size);
    }

    let y: Vec<f64> = values
        .iter()
        .map(|value| value.component(dimension).as_f64())
        .collect();
    let last = size - 1;

    DVector::from_fn(size, |i, _| {
        if i == 0 {
            match boundary {
                BoundaryCondition::Smooth => 3.0 * (y[1] - y[0]),
                BoundaryCondition::Circular => 3.0 * (y[1] - y[last]),
                BoundaryCondition::FixedTangentials { start, .. } => {
                    start.component(dimension).as_f64()
                }
            }
        } else if i == last {
            match boundary {
                BoundaryCondition::Smooth => 3.0 * (y[last] - y[last - 1]),
                BoundaryCondition::Circular => 3.0 * (y[0] - y[last - 1]),
                BoundaryCondition::FixedTangentials { end, .. } => {
                    end.component(dimension).as_f64()
                }
            }
        } else {
            3.0 * (y[i + 1] - y[i - 1])
        }
    })
}

#[cfg(test)]
mod tests {
    use nalgebra::{dmatrix, dvector, Vector2};

    use super::*;

    #[test]
    fn smooth_matrix() {
        let matrix = CubicSplineMatrix::new(&BoundaryCondition::<f64>::Smooth, 5);

        let expected = dmatrix![
            2.0, 1.0, 0.0, 0.0, 0.0;
            1.0, 4.0, 1.0, 0.0, 0.0;
            0.0, 1.0, 4.0, 1.0, 0.0;
            0.0, 0.0, 1.0, 4.0, 1.0;
            0.0, 0.0, 0.0, 1.0, 2.0
        ];
        assert!(!matrix.is_cyclic());
        assert_eq!(expected, matrix.to_dense());
        assert_eq!(matrix.to_dense(), matrix.to_dense().transpose());
    }

    #[test]
    fn circular_matrix() {
        let matrix = CubicSplineMatrix::new(&BoundaryCondition::<f64>::Circular, 4);

        let expected = dmatrix![
            4.0, 1.0, 0.0, 1.0;
            1.0, 4.0, 1.0, 0.0;
            0.0, 1.0, 4.0, 1.0;
            1.0, 0.0, 1.0, 4.0
        ];
        assert!(matrix.is_cyclic());
        assert_eq!(expected, matrix.to_dense());
    }

    #[test]
    fn circular_matrix_of_three() {
        let matrix = CubicSplineMatrix::new(&BoundaryCondition::<f64>::Circular, 3);

        let expected = dmatrix![
            4.0, 1.0, 1.0;
            1.0, 4.0, 1.0;
            1.0, 1.0, 4.0
        ];
        assert_eq!(expected, matrix.to_dense());
    }

    #[test]
    fn circular_matrix_of_two() {
        let matrix = CubicSplineMatrix::new(&BoundaryCondition::<f64>::Circular, 2);

        assert!(!matrix.is_cyclic());
        assert_eq!(dmatrix![4.0, 2.0; 2.0, 4.0], matrix.to_dense());
    }

    #[test]
    fn fixed_tangentials_matrix() {
        let boundary = BoundaryCondition::FixedTangentials {
            start: 0.0,
            end: 0.0_f64,
        };
        let matrix = CubicSplineMatrix::new(&boundary, 4);

        let expected = dmatrix![
            1.0, 0.0, 0.0, 0.0;
            1.0, 4.0, 1.0, 0.0;
            0.0, 1.0, 4.0, 1.0;
            0.0, 0.0, 0.0, 1.0
        ];
        assert_eq!(expected, matrix.to_dense());
        assert_ne!(matrix.to_dense(), matrix.to_dense().transpose());

        let matrix = CubicSplineMatrix::new(&boundary, 3);
        let expected = dmatrix![
            1.0, 0.0, 0.0;
            1.0, 4.0, 1.0;
            0.0, 0.0, 1.0
        ];
        assert_eq!(expected, matrix.to_dense());

        let matrix = CubicSplineMatrix::new(&boundary, 2);
        assert_eq!(DMatrix::<f64>::identity(2, 2), matrix.to_dense());
    }

    #[test]
    fn smooth_matrix_of_two() {
        let matrix = CubicSplineMatrix::new(&BoundaryCondition::<f64>::Smooth, 2);

        assert_eq!(dmatrix![2.0, 1.0; 1.0, 2.0], matrix.to_dense());
    }

    #[test]
    fn degenerate_sizes() {
        let matrix = CubicSplineMatrix::new(&BoundaryCondition::<f64>::Smooth, 1);
        assert_eq!(dmatrix![1.0], matrix.to_dense());

        let matrix = CubicSplineMatrix::new(&BoundaryCondition::<f64>::Circular, 0);
        assert_eq!(0, matrix.size());
    }

    #[test]
    fn smooth_right_hand_side() {
        let values = [0.0_f64, 1.0, 4.0, 9.0];
        let rhs = right_hand_side(&values, &BoundaryCondition::Smooth, 0);

        assert_eq!(dvector![3.0, 12.0, 24.0, 15.0], rhs);
    }

    #[test]
    fn circular_right_hand_side() {
        let values = [0.0_f64, 1.0, 4.0, 9.0];
        let rhs = right_hand_side(&values, &BoundaryCondition::Circular, 0);

        assert_eq!(dvector![-24.0, 12.0, 24.0, -12.0], rhs);
    }

    #[test]
    fn fixed_tangentials_right_hand_side() {
        let values = [0.0_f64, 1.0, 4.0, 9.0];
        let boundary = BoundaryCondition::FixedTangentials {
            start: -2.0_f64,
            end: 7.5,
        };
        let rhs = right_hand_side(&values, &boundary, 0);

        assert_eq!(dvector![-2.0, 12.0, 24.0, 7.5], rhs);
    }

    #[test]
    fn right_hand_side_per_dimension() {
        let values = [
            Vector2::new(0.0_f64, 5.0),
            Vector2::new(1.0, 5.0),
            Vector2::new(3.0, 5.0),
        ];
        let boundary = BoundaryCondition::FixedTangentials {
            start: Vector2::new(1.0, 0.0),
            end: Vector2::new(2.0, -1.0),
        };

        assert_eq!(dvector![1.0, 9.0, 2.0], right_hand_side(&values, &boundary, 0));
        assert_eq!(dvector![0.0, 0.0, -1.0], right_hand_side(&values, &boundary, 1));
    }

    #[test]
    #[should_panic(expected = "Dimension 2 out of range for 2 components")]
    fn right_hand_side_dimension_out_of_range() {
        let values = [Vector2::new(0.0_f64, 1.0), Vector2::new(1.0, 2.0)];
        right_hand_side(&values, &BoundaryCondition::Smooth, 2);
    }
}
