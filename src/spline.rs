use num_traits::{Float, ToPrimitive};

use crate::{
    boundary::BoundaryCondition,
    error::{ConfigurationError, SplineError},
    point::{Scalar, SplinePoint},
    polynomial::CubicPoly,
    solver::compute_derivatives,
};

/// Piecewise cubic spline passing through control points `(arguments[i], values[i])`.
///
/// Spline is immutable once constructed, evaluation only reads its segments.
#[derive(Debug, Clone)]
pub struct Spline<P: SplinePoint> {
    arguments: Vec<P::Scalar>,
    segments: Vec<CubicPoly<P>>,
    boundary: BoundaryCondition<P>,
    is_argument_spacing_uniform: bool,
}

impl<P: SplinePoint> Spline<P> {
    /// Creates spline through `values`, derivatives at control points are solved according to
    /// `boundary`. When `arguments` are not given, `0, 1, 2, ...` are used. Arguments have to be
    /// strictly increasing.
    /// # Example
    /// ```
    /// use hermite_spline::{BoundaryCondition, Spline};
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let spline = Spline::new(
    ///     vec![0.0_f64, 1.0, 2.0, 3.0],
    ///     Some(vec![0.0, 0.5, 1.0, 1.5]),
    ///     BoundaryCondition::Smooth,
    /// ).unwrap();
    ///
    /// assert_approx_eq!(1.5, spline.evaluate(0.75), 1e-12);
    /// assert_approx_eq!(-1.0, spline.evaluate(-0.5), 1e-12);
    /// ```
    /// # Errors
    /// [SplineError::Configuration] when there are less than 2 values or lengths of `values` and
    /// `arguments` differ, [SplineError::Solver] when derivatives can not be solved.
    /// ```
    /// use hermite_spline::{BoundaryCondition, Spline};
    ///
    /// let spline = Spline::new(vec![1.0_f64, 2.0], Some(vec![0.0]), BoundaryCondition::Smooth);
    /// assert!(spline.is_err());
    /// ```
    pub fn new(
        values: Vec<P>,
        arguments: Option<Vec<P::Scalar>>,
        boundary: BoundaryCondition<P>,
    ) -> Result<Self, SplineError> {
        let arguments = match arguments {
            Some(arguments) => arguments,
            None => (0..values.len()).map(|i| scalar::<P>(i as f64)).collect(),
        };
        check_length(values.len(), "arguments", arguments.len())?;

        let derivatives = compute_derivatives(&values, &boundary)?;
        Self::with_derivatives(values, arguments, derivatives, boundary)
    }

    /// Creates spline with known derivatives at control points, no system is solved.
    /// # Errors
    /// [SplineError::Configuration] when there are less than 2 values or lengths of `values`,
    /// `arguments` and `derivatives` differ.
    pub fn with_derivatives(
        values: Vec<P>,
        arguments: Vec<P::Scalar>,
        derivatives: Vec<P>,
        boundary: BoundaryCondition<P>,
    ) -> Result<Self, SplineError> {
        check_length(values.len(), "arguments", arguments.len())?;
        check_length(values.len(), "derivatives", derivatives.len())?;

        let segments = CubicPoly::segments(&values, &derivatives);
        let is_argument_spacing_uniform = is_spacing_uniform(&arguments);

        #[cfg(feature = "log")]
        log::debug!(
            "created {} spline with {} control points, uniform spacing: {}",
            boundary.name(),
            values.len(),
            is_argument_spacing_uniform
        );

        Ok(Spline {
            arguments,
            segments,
            boundary,
            is_argument_spacing_uniform,
        })
    }

    /// Value of the spline at `t`. Outside of the arguments range spline is extrapolated
    /// according to its [BoundaryCondition]:
    /// - `Smooth` - boundary segment polynomial is continued,
    /// - `Circular` - `t` is shifted by whole periods into the arguments range,
    /// - `FixedTangentials` - line through boundary control point with the fixed tangential.
    ///
    /// Fixed tangentials are pinned per unit of the local segment parameter inside the range,
    /// but the extrapolated line uses them per unit of argument. With boundary segments longer
    /// or shorter than `1` the slope changes at the first and the last argument.
    pub fn evaluate(&self, t: P::Scalar) -> P {
        let first = self.first_argument();
        let last = self.last_argument();

        if t < first {
            self.extrapolate_below(t)
        } else if t > last {
            self.extrapolate_above(t)
        } else {
            self.evaluate_in_range(t)
        }
    }

    /// Evaluates every argument of `t_vector`. Previous segment is used as a starting point of
    /// the search, so ordered arguments are evaluated faster.
    pub fn batch_evaluate(&self, t_vector: &[P::Scalar]) -> Vec<P> {
        let mut results = Vec::with_capacity(t_vector.len());
        let mut index = 0;
        let first = self.first_argument();
        let last = self.last_argument();

        for t in t_vector {
            if first <= *t && *t < last {
                index = self.find_segment_index_with_hint(index, *t);
                results.push(self.evaluate_segment(index, *t));
            } else {
                results.push(self.evaluate(*t));
            }
        }
        results
    }

    /// `count` points evenly spread over arguments range, both ends included.
    pub fn sample(&self, count: usize) -> Vec<(P::Scalar, P)> {
        let first = self.first_argument();
        let last = self.last_argument();

        match count {
            0 => Vec::new(),
            1 => vec![(first, self.evaluate(first))],
            _ => {
                let step = (last - first) / scalar::<P>((count - 1) as f64);
                let t_vector: Vec<P::Scalar> = (0..count)
                    .map(|i| {
                        if i == count - 1 {
                            last
                        } else {
                            first + step * scalar::<P>(i as f64)
                        }
                    })
                    .collect();
                let values = self.batch_evaluate(&t_vector);
                t_vector.into_iter().zip(values).collect()
            }
        }
    }

    pub fn arguments(&self) -> &[P::Scalar] {
        &self.arguments
    }

    pub fn segments(&self) -> &[CubicPoly<P>] {
        &self.segments
    }

    pub fn boundary_condition(&self) -> &BoundaryCondition<P> {
        &self.boundary
    }

    /// Length of the arguments range.
    pub fn period(&self) -> P::Scalar {
        self.last_argument() - self.first_argument()
    }

    /// Number of control points.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    fn first_argument(&self) -> P::Scalar {
        self.arguments[0]
    }

    fn last_argument(&self) -> P::Scalar {
        self.arguments[self.arguments.len() - 1]
    }

    fn evaluate_in_range(&self, t: P::Scalar) -> P {
        if t == self.last_argument() {
            return self.segments[self.segments.len() - 1].end();
        }
        let index = self.find_segment_index(t);
        self.evaluate_segment(index, t)
    }

    fn evaluate_segment(&self, index: usize, t: P::Scalar) -> P {
        let t0 = self.arguments[index];
        let t1 = self.arguments[index + 1];
        self.segments[index].evaluate((t - t0) / (t1 - t0))
    }

    fn extrapolate_below(&self, t: P::Scalar) -> P {
        let first = self.first_argument();

        match &self.boundary {
            BoundaryCondition::Smooth => self.evaluate_segment(0, t),
            BoundaryCondition::Circular => {
                let period = self.period();
                let factor = ((first - t) / period).ceil();
                self.evaluate_in_range(t + factor * period)
            }
            BoundaryCondition::FixedTangentials { start, .. } => {
                self.segments[0].a.plus(start.scaled(t - first))
            }
        }
    }

    fn extrapolate_above(&self, t: P::Scalar) -> P {
        let last = self.last_argument();
        let last_segment = self.segments.len() - 1;

        match &self.boundary {
            BoundaryCondition::Smooth => self.evaluate_segment(last_segment, t),
            BoundaryCondition::Circular => {
                let period = self.period();
                let factor = ((t - last) / period).ceil();
                self.evaluate_in_range(t - factor * period)
            }
            BoundaryCondition::FixedTangentials { end, .. } => self.segments[last_segment]
                .end()
                .plus(end.scaled(t - last)),
        }
    }

    fn find_segment_index(&self, t: P::Scalar) -> usize {
        if self.is_argument_spacing_uniform {
            self.find_segment_index_uniform(t)
        } else {
            self.find_segment_index_bisect(t)
        }
    }

    fn find_segment_index_bisect(&self, t: P::Scalar) -> usize {
        let mut min = 0;
        let mut max = self.arguments.len() - 1;

        while max - min > 1 {
            let mid = (min + max) / 2;
            if t < self.arguments[mid] {
                max = mid;
            } else {
                min = mid;
            }
        }
        min
    }

    fn find_segment_index_uniform(&self, t: P::Scalar) -> usize {
        let step = self.period() / scalar::<P>(self.segments.len() as f64);
        let index = ((t - self.first_argument()) / step)
            .floor()
            .to_usize()
            .unwrap_or(0);
        index.min(self.segments.len() - 1)
    }

    fn find_segment_index_with_hint(&self, index_hint: usize, t: P::Scalar) -> usize {
        if self.is_in_segment(index_hint, t) {
            index_hint
        } else if index_hint + 1 < self.segments.len() && self.is_in_segment(index_hint + 1, t) {
            index_hint + 1
        } else {
            self.find_segment_index(t)
        }
    }

    fn is_in_segment(&self, index: usize, t: P::Scalar) -> bool {
        self.arguments[index] <= t && t < self.arguments[index + 1]
    }
}

fn check_length(
    expected: usize,
    name: &'static str,
    found: usize,
) -> Result<(), ConfigurationError> {
    if expected < 2 {
        return Err(ConfigurationError::TooFewControlPoints { count: expected });
    }
    if expected != found {
        return Err(ConfigurationError::LengthMismatch { name, expected, found });
    }
    Ok(())
}

fn is_spacing_uniform<T: Scalar>(arguments: &[T]) -> bool {
    let size = arguments.len();
    if size < 3 {
        return true;
    }

    let step = (arguments[size - 1] - arguments[0]) / T::from_f64((size - 1) as f64);
    let tolerance = step.abs() * T::epsilon() * T::from_f64(16.0);

    arguments
        .windows(2)
        .all(|pair| ((pair[1] - pair[0]) - step).abs() <= tolerance)
}

fn scalar<P: SplinePoint>(value: f64) -> P::Scalar {
    <P::Scalar as Scalar>::from_f64(value)
}
