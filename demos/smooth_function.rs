extern crate hermite_spline;

use hermite_spline::{BoundaryCondition, Spline};

fn main() {

    let t_min = 0.0;
    let t_max = 6.0;

    let values = vec![1.0_f64, -1.0, 0.0, 3.0, 1.0, 1.0];
    let arguments = vec![t_min, 1.0, 2.0, 4.0, 5.0, t_max];

    let spline = Spline::new(values, Some(arguments), BoundaryCondition::Smooth).unwrap();

    let number_of_steps = 60;
    let step = (t_max - t_min) / number_of_steps as f64;

    println!("t;y");
    for i in 0..=number_of_steps {
        let t = t_min + step * i as f64;
        println!("{:.2};{:.2}", t, spline.evaluate(t));
    }
}
