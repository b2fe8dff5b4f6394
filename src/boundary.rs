use crate::point::SplinePoint;

/// Rule closing the system of equations at both ends of the spline. It also decides how the
/// spline is extrapolated outside of its arguments range.
/// - `Smooth` - second derivative vanishes at both ends, boundary segments are continued,
/// - `Circular` - first and last control points are adjacent, spline is periodic,
/// - `FixedTangentials` - first derivative is given at both ends, spline is continued linearly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryCondition<P: SplinePoint> {
    Smooth,
    Circular,
    FixedTangentials { start: P, end: P },
}

impl<P: SplinePoint> BoundaryCondition<P> {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            BoundaryCondition::Smooth => "smooth",
            BoundaryCondition::Circular => "circular",
            BoundaryCondition::FixedTangentials { .. } => "fixed tangentials",
        }
    }
}

impl<P: SplinePoint> Default for BoundaryCondition<P> {
    fn default() -> Self {
        BoundaryCondition::Smooth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_smooth() {
        assert_eq!(BoundaryCondition::<f64>::Smooth, BoundaryCondition::default());
    }

    #[test]
    fn names() {
        assert_eq!("circular", BoundaryCondition::<f32>::Circular.name());
        let boundary = BoundaryCondition::FixedTangentials {
            start: 0.0,
            end: 1.0_f64,
        };
        assert_eq!("fixed tangentials", boundary.name());
    }
}
