extern crate hermite_spline;

use hermite_spline::{BoundaryCondition, Spline};
use nalgebra::Vector2;

fn main() {

    let values = vec![
        Vector2::new(0.0_f64, 0.0),
        Vector2::new(1.0, 2.0),
        Vector2::new(3.0, 2.0),
        Vector2::new(4.0, 0.0),
    ];
    let boundary = BoundaryCondition::FixedTangentials {
        start: Vector2::new(0.0, 3.0),
        end: Vector2::new(0.0, -3.0),
    };

    let spline = Spline::new(values, Some(vec![0.0, 1.0, 2.5, 3.5]), boundary).unwrap();

    let t_min = -0.5;
    let t_max = 4.0;
    let number_of_steps = 45;
    let step = (t_max - t_min) / number_of_steps as f64;

    println!("t;x;y");
    for i in 0..=number_of_steps {
        let t = t_min + step * i as f64;
        let point = spline.evaluate(t);
        println!("{:.2};{:.3};{:.3}", t, point.x, point.y);
    }
}
