extern crate hermite_spline;

use hermite_spline::{BoundaryCondition, Spline};

fn main() {

    let t_min = 0.0;
    let t_max = 10.0;

    let values = vec![0.0_f64, -1.0, 2.0, -3.0, 4.0, -5.0];
    let arguments = vec![t_min, 0.1, 0.5, 1.5, 3.0, t_max];

    let spline = Spline::new(values, Some(arguments), BoundaryCondition::Smooth).unwrap();

    let number_of_steps = 100;
    let step = (t_max - t_min) / number_of_steps as f64;

    let mut t_vector = Vec::new();

    for i in 0..=number_of_steps {
        t_vector.push(t_min + step * i as f64);
    }

    let result = spline.batch_evaluate(&t_vector);

    println!("t;y");
    for i in 0..=number_of_steps {
        println!("{:.2};{:.2}", t_vector[i], result[i]);
    }
}
