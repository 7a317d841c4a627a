// Example converting a detergent formulation problem to a BoFire domain
//
// Five ingredients x1..x5 form a mixture:
// - the fractions add up to one
// - at most three ingredients may be used at once
// - x1 and x2 together stay below 0.6
//
// Outputs:
//   y1..y3 (cleaning performance on three stains), maximized
//   foam, kept close to 0.3 by an output constraint
//   colour, categorical, should come out "white"

use opti2bofire::opti::{Constraint, Objective, Parameter, Problem};
use opti2bofire::{logging, ConverterConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let inputs = (1..=5)
        .map(|i| Parameter::continuous(format!("x{}", i), (0.0, 1.0)))
        .collect();

    let outputs = vec![
        Parameter::continuous("y1", (0.0, 3.0)),
        Parameter::continuous("y2", (0.0, 3.0)),
        Parameter::continuous("y3", (0.0, 3.0)),
        Parameter::discrete("foam", vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5]),
        Parameter::categorical("colour", ["white", "grey", "yellow"]),
    ];

    let names = ["x1", "x2", "x3", "x4", "x5"];
    let problem = Problem::new(inputs, outputs)
        .with_name("Detergent")
        .with_objectives(vec![
            Objective::maximize("y1"),
            Objective::maximize("y2"),
            Objective::maximize("y3"),
            Objective::close_to_target("colour", "white"),
        ])
        .with_output_constraints(vec![Objective::close_to_target("foam", 0.3)
            .with_exponent(2.0)
            .with_tolerance(0.05)])
        .with_constraints(vec![
            Constraint::linear_equality(names, vec![1.0; 5], 1.0),
            Constraint::linear_inequality(["x1", "x2"], vec![1.0, 1.0], 0.6),
            Constraint::n_choose_k(names, 3),
        ]);

    println!("=== Converting '{}' ===\n", problem.name);

    let converted = opti2bofire::convert_problem(&problem, &ConverterConfig::default())?;

    if converted.has_warnings() {
        for warning in &converted.warnings {
            println!("warning: {}", warning);
        }
        println!();
    }

    let domain = converted.into_inner();
    println!("Inputs:  {}", domain.input_keys().join(", "));
    println!("Outputs: {}", domain.output_keys().join(", "));
    println!(
        "Constraints: {}",
        domain.constraints().map_or(0, |c| c.len())
    );
    println!("\n{}", domain.to_json()?);

    Ok(())
}
