//! Library of generic piecewise cubic (Hermite) spline interpolation and extrapolation.
//! Spline can interpolate any [SplinePoint]: plain `f32`/`f64` functions as well as
//! multi-component values such as nalgebra vectors and points.
//!
//! Derivatives at control points are solved from the classic cubic spline system closed by one
//! of the [BoundaryCondition]s, which also decides how the spline is extrapolated.
//!
//! # Example
//! ```
//! use hermite_spline::{BoundaryCondition, Spline};
//! use assert_approx_eq::assert_approx_eq;
//! use nalgebra::Vector2;
//!
//! let values = vec![0.0_f64, 1.0, 2.0, 3.0, 4.0, 5.0];
//! let spline = Spline::new(values, None, BoundaryCondition::Smooth).unwrap();
//!
//! assert_approx_eq!(2.5, spline.evaluate(2.5), 1e-9);
//! assert_approx_eq!(-1.0, spline.evaluate(-1.0), 1e-9);
//!
//! let curve = vec![
//!     Vector2::new(0.0_f64, 0.0),
//!     Vector2::new(1.0, 0.0),
//!     Vector2::new(1.0, 1.0),
//!     Vector2::new(0.0, 1.0),
//! ];
//! let spline = Spline::new(curve, None, BoundaryCondition::Circular).unwrap();
//!
//! assert_approx_eq!(1.0, spline.evaluate(2.0).y, 1e-9);
//! assert_approx_eq!(spline.evaluate(0.5).x, spline.evaluate(3.5).x, 1e-9);
//! ```

mod boundary;
mod error;
mod point;
mod polynomial;
mod solver;
mod spline;
mod system;

pub use boundary::BoundaryCondition;
pub use error::{ConfigurationError, SolverError, SplineError};
pub use point::{Scalar, SplinePoint};
pub use polynomial::CubicPoly;
pub use solver::compute_derivatives;
pub use spline::Spline;
pub use system::{right_hand_side, CubicSplineMatrix};
