// Integration tests: whole opti problems converted to BoFire domains

use opti2bofire::opti::{Constraint, Objective, Parameter, Problem};
use opti2bofire::{
    convert_json, convert_problem, logging, ConversionError, ConversionWarning, ConverterConfig,
    DomainError, MultipleObjectivesPolicy, Output,
};
use serde_json::json;

fn mixture_problem() -> Problem {
    let inputs = vec![
        Parameter::continuous("x1", (0.0, 1.0)),
        Parameter::continuous("x2", (0.1, 1.0)),
        Parameter::continuous("x3", (0.0, 0.6)),
    ];
    let outputs = vec![Parameter::unbounded("y")];

    Problem::new(inputs, outputs)
        .with_name("mixture")
        .with_objectives(vec![Objective::minimize("y")])
}

#[test]
fn absent_constraints_stay_absent() {
    logging::init_test();

    let domain = mixture_problem().to_domain().unwrap().into_inner();

    assert_eq!(domain.constraints(), None);
    assert_eq!(domain.inputs().len(), 3);
}

#[test]
fn empty_constraints_stay_empty() {
    let problem = mixture_problem().with_constraints(vec![]);

    let domain = problem.to_domain().unwrap().into_inner();

    assert_eq!(domain.constraints().map(|c| c.len()), Some(0));
}

#[test]
fn constraints_convert_one_for_one() {
    logging::init_test();

    let problem = mixture_problem().with_constraints(vec![
        Constraint::linear_equality(["x1", "x2", "x3"], vec![1.0, 1.0, 1.0], 1.0),
        Constraint::linear_inequality(["x1", "x2"], vec![5.0, 4.0], 3.9),
        Constraint::linear_inequality(["x1", "x2"], vec![-20.0, 5.0], -3.0),
        Constraint::nonlinear_inequality("(85.334407 + 0.0056858 * x2 * x1) - 92.0"),
        Constraint::n_choose_k(["x1", "x2", "x3"], 2),
    ]);

    let converted = problem.to_domain().unwrap();
    let domain = &converted.value;

    assert!(!converted.has_warnings());
    assert_eq!(
        domain.inputs().len(),
        problem.inputs.len(),
        "every input is converted"
    );
    assert_eq!(
        domain.constraints().map(|c| c.len()),
        problem.constraints.as_ref().map(|c| c.len())
    );
}

#[test]
fn mixed_problem_with_output_constraints() {
    logging::init_test();

    let inputs = vec![
        Parameter::discrete("x1", vec![0.0, 1.0, 2.0, 3.0]),
        Parameter::continuous("x2", (-2.0, 2.0)),
        Parameter::categorical("x3", ["cat", "dog", "monkey"]),
    ];
    let outputs = vec![
        Parameter::discrete("meetings", vec![0.0, 1.0, 2.0, 3.0]),
        Parameter::continuous("coffee", (0.0, 20.0)),
        Parameter::categorical("animal", ["cat", "dog", "monkey"]),
    ];
    let problem = Problem::new(inputs, outputs)
        .with_objectives(vec![
            Objective::minimize("meetings"),
            Objective::minimize("coffee"),
        ])
        .with_output_constraints(vec![Objective::maximize("coffee")]);

    let converted = convert_problem(&problem, &ConverterConfig::default()).unwrap();
    let domain = converted.value;

    assert_eq!(
        domain.output_keys(),
        vec!["meetings", "coffee_0", "coffee_1", "animal"]
    );
    assert_eq!(domain.get_output("meetings").unwrap().type_name(), "ContinuousOutput");
    assert_eq!(
        converted.warnings,
        vec![ConversionWarning::DiscreteOutputCoerced {
            name: "meetings".to_string()
        }]
    );

    match domain.get_output("animal").unwrap() {
        Output::Categorical { objective, .. } => {
            assert_eq!(objective.desirability, vec![true, true, true]);
        }
        other => panic!("expected a categorical output, got {other:?}"),
    }
}

#[test]
fn reject_policy_aborts_the_whole_conversion() {
    let problem = mixture_problem().with_output_constraints(vec![Objective::maximize("y")]);
    let config =
        ConverterConfig::default().with_multiple_objectives(MultipleObjectivesPolicy::Reject);

    let err = convert_problem(&problem, &config).unwrap_err();

    assert!(matches!(err, ConversionError::MultipleObjectives { count: 2, .. }));
}

#[test]
fn domain_validation_errors_propagate() {
    let problem = mixture_problem()
        .with_constraints(vec![Constraint::linear_inequality(["x1", "x9"], vec![1.0, 1.0], 1.0)]);

    let err = problem.to_domain().unwrap_err();

    assert!(matches!(
        err,
        ConversionError::InvalidDomain(DomainError::UnknownFeature { ref feature, .. })
            if feature == "x9"
    ));
}

#[test]
fn unsupported_kind_from_config_fails_conversion() {
    let config = json!({
        "name": "broken",
        "inputs": [{"type": "unsupported_kind", "name": "x1", "domain": [0, 1]}],
        "outputs": [{"type": "continuous", "name": "y"}],
        "objectives": [{"type": "minimize", "name": "y"}]
    });

    let err = convert_json(&config.to_string(), &ConverterConfig::default()).unwrap_err();

    assert!(matches!(err, ConversionError::UnrecognizedKind { ref kind, .. } if kind == "unsupported_kind"));
}

#[test]
fn input_without_domain_fails_validation() {
    let config = json!({
        "inputs": [{"type": "continuous", "name": "x1"}],
        "outputs": [{"type": "continuous", "name": "y"}]
    });

    let err = convert_json(&config.to_string(), &ConverterConfig::default()).unwrap_err();

    assert!(matches!(
        err,
        ConversionError::InvalidDomain(DomainError::UnboundedInput { ref key, .. }) if key == "x1"
    ));
}

#[test]
fn malformed_config_is_a_json_error() {
    let err = convert_json("{\"inputs\": 3}", &ConverterConfig::default()).unwrap_err();
    assert!(matches!(err, ConversionError::Json(_)));
}

#[test]
fn opti_config_converts_to_bofire_json() {
    logging::init_test();

    let config = json!({
        "name": "Detergent",
        "inputs": [
            {"type": "continuous", "name": "x1", "domain": [0.0, 0.2]},
            {"type": "continuous", "name": "x2", "domain": [0.0, 0.3]},
            {"type": "categorical", "name": "x3", "domain": ["a", "b"]}
        ],
        "outputs": [
            {"type": "continuous", "name": "y1", "domain": [0, 3]},
            {"type": "categorical", "name": "colour", "domain": ["white", "grey"]}
        ],
        "objectives": [
            {"type": "close-to-target", "name": "y1", "target": 2.5, "exponent": 2, "tolerance": 0.1},
            {"type": "close-to-target", "name": "colour", "target": "white"}
        ],
        "constraints": [
            {"type": "n-choose-k", "names": ["x1", "x2"], "max_active": 1}
        ]
    });

    let domain = convert_json(&config.to_string(), &ConverterConfig::default())
        .unwrap()
        .into_inner();
    let rendered: serde_json::Value = serde_json::from_str(&domain.to_json().unwrap()).unwrap();

    assert_eq!(
        rendered["inputs"][0],
        json!({"type": "ContinuousInput", "key": "x1", "bounds": [0.0, 0.2]})
    );
    assert_eq!(
        rendered["outputs"][0]["objective"],
        json!({"type": "CloseToTargetObjective", "w": 1.0, "target_value": 2.5, "exponent": 2.0})
    );
    assert_eq!(
        rendered["outputs"][1]["objective"]["desirability"],
        json!([true, false])
    );
    assert_eq!(
        rendered["constraints"][0],
        json!({
            "type": "NChooseKConstraint",
            "features": ["x1", "x2"],
            "min_count": 0,
            "max_count": 1,
            "none_also_valid": true
        })
    );
}

#[test]
fn conversion_is_repeatable() {
    let problem = mixture_problem().with_constraints(vec![Constraint::nonlinear_equality(
        "x1 + x2 + x3 - 1",
    )]);

    let first = problem.to_domain().unwrap();
    let second = problem.to_domain().unwrap();

    assert_eq!(first, second);
}
