extern crate hermite_spline;

use hermite_spline::{BoundaryCondition, Spline};

fn main() {

    let values = vec![1.0, 0.0, -2.0, 1.0, 1.0];
    let arguments = vec![1.0, 2.0, 3.0, 4.0, 5.0];

    let boundaries = [
        BoundaryCondition::Smooth,
        BoundaryCondition::Circular,
        BoundaryCondition::FixedTangentials {
            start: 0.0,
            end: -1.0,
        },
    ];
    let splines: Vec<Spline<f64>> = boundaries
        .into_iter()
        .map(|boundary| Spline::new(values.clone(), Some(arguments.clone()), boundary).unwrap())
        .collect();

    let t_min = -2.0;
    let t_max = 8.0;
    let number_of_steps = 100;
    let step = (t_max - t_min) / number_of_steps as f64;

    println!("t;smooth;circular;fixed");
    for i in 0..=number_of_steps {
        let t = t_min + step * i as f64;
        println!(
            "{:.2};{:.2};{:.2};{:.2}",
            t,
            splines[0].evaluate(t),
            splines[1].evaluate(t),
            splines[2].evaluate(t)
        );
    }
}
