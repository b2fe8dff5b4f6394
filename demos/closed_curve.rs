extern crate hermite_spline;

use hermite_spline::{BoundaryCondition, Spline};
use nalgebra::Point2;

fn main() {

    // points in the order they were placed, last one closes the curve
    let points = vec![
        Point2::new(0.0_f64, 0.0),
        Point2::new(2.0, -1.0),
        Point2::new(4.0, 1.0),
        Point2::new(3.0, 3.0),
        Point2::new(0.5, 2.5),
        Point2::new(0.0, 0.0),
    ];

    let spline = Spline::new(points, None, BoundaryCondition::Circular).unwrap();

    println!("t;x;y");
    for (t, point) in spline.sample(101) {
        println!("{:.2};{:.3};{:.3}", t, point.x, point.y);
    }
}
