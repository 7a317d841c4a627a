// Cross-field checks a domain must pass before it is handed out

use super::constraints::Constraint;
use super::models::{Input, Output};
use std::collections::HashSet;

/// Error types for domain construction
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("Duplicate feature key: {0}")]
    DuplicateKey(String),

    #[error("{constraint} refers to unknown input '{feature}'")]
    UnknownFeature {
        constraint: &'static str,
        feature: String,
    },

    #[error("{constraint} has {coefficients} coefficients for {features} features")]
    CoefficientMismatch {
        constraint: &'static str,
        features: usize,
        coefficients: usize,
    },

    #[error("NChooseKConstraint needs min_count ({min}) <= max_count ({max}) <= {features} features")]
    InvalidCardinality {
        min: usize,
        max: usize,
        features: usize,
    },

    #[error("Input '{key}' has lower bound ({lower}) > upper bound ({upper})")]
    InvalidBounds { key: String, lower: f64, upper: f64 },

    #[error("Input '{key}' needs finite bounds, got ({lower}, {upper})")]
    UnboundedInput { key: String, lower: f64, upper: f64 },

    #[error("Output '{key}' has {desirability} desirability flags for {categories} categories")]
    DesirabilityMismatch {
        key: String,
        categories: usize,
        desirability: usize,
    },
}

pub(crate) fn validate_domain(
    inputs: &[Input],
    outputs: &[Output],
    constraints: Option<&[Constraint]>,
) -> Result<(), DomainError> {
    let mut keys = HashSet::new();
    for key in inputs.iter().map(Input::key).chain(outputs.iter().map(Output::key)) {
        if !keys.insert(key) {
            return Err(DomainError::DuplicateKey(key.to_string()));
        }
    }

    for input in inputs {
        if let Input::Continuous { key, bounds } = input {
            // also rejects NaN bounds
            if !(bounds.0 <= bounds.1) {
                return Err(DomainError::InvalidBounds {
                    key: key.clone(),
                    lower: bounds.0,
                    upper: bounds.1,
                });
            }
            if !bounds.0.is_finite() || !bounds.1.is_finite() {
                return Err(DomainError::UnboundedInput {
                    key: key.clone(),
                    lower: bounds.0,
                    upper: bounds.1,
                });
            }
        }
    }

    for output in outputs {
        if let Output::Categorical {
            key, objective, ..
        } = output
        {
            if objective.desirability.len() != objective.categories.len() {
                return Err(DomainError::DesirabilityMismatch {
                    key: key.clone(),
                    categories: objective.categories.len(),
                    desirability: objective.desirability.len(),
                });
            }
        }
    }

    let input_keys: HashSet<&str> = inputs.iter().map(Input::key).collect();
    for constraint in constraints.unwrap_or_default() {
        validate_constraint(constraint, &input_keys)?;
    }

    Ok(())
}

fn validate_constraint(constraint: &Constraint, input_keys: &HashSet<&str>) -> Result<(), DomainError> {
    if let Some(feature) = constraint
        .features()
        .iter()
        .find(|f| !input_keys.contains(f.as_str()))
    {
        return Err(DomainError::UnknownFeature {
            constraint: constraint.type_name(),
            feature: feature.clone(),
        });
    }

    match constraint {
        Constraint::LinearEquality {
            features,
            coefficients,
            ..
        }
        | Constraint::LinearInequality {
            features,
            coefficients,
            ..
        } if features.len() != coefficients.len() => Err(DomainError::CoefficientMismatch {
            constraint: constraint.type_name(),
            features: features.len(),
            coefficients: coefficients.len(),
        }),
        Constraint::NChooseK {
            features,
            min_count,
            max_count,
            ..
        } if min_count > max_count || *max_count > features.len() => {
            Err(DomainError::InvalidCardinality {
                min: *min_count,
                max: *max_count,
                features: features.len(),
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CategoricalObjective, Domain, Objective};

    fn inputs() -> Vec<Input> {
        vec![
            Input::Continuous {
                key: "x1".to_string(),
                bounds: (0.0, 1.0),
            },
            Input::Continuous {
                key: "x2".to_string(),
                bounds: (0.0, 1.0),
            },
        ]
    }

    fn outputs() -> Vec<Output> {
        vec![Output::continuous("y", Some(Objective::minimize()))]
    }

    #[test]
    fn valid_domain_keeps_absent_constraints_absent() {
        let domain = Domain::from_lists(inputs(), outputs(), None).unwrap();
        assert_eq!(domain.constraints(), None);
        assert_eq!(domain.input_keys(), vec!["x1", "x2"]);

        let domain = Domain::from_lists(inputs(), outputs(), Some(vec![])).unwrap();
        assert_eq!(domain.constraints(), Some(&[][..]));
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let outputs = vec![Output::continuous("x1", None)];
        assert_eq!(
            Domain::from_lists(inputs(), outputs, None),
            Err(DomainError::DuplicateKey("x1".to_string()))
        );
    }

    #[test]
    fn constraint_features_must_be_inputs() {
        let constraint = Constraint::LinearInequality {
            features: vec!["x1".to_string(), "x9".to_string()],
            coefficients: vec![1.0, 1.0],
            rhs: 1.0,
        };
        let err = Domain::from_lists(inputs(), outputs(), Some(vec![constraint])).unwrap_err();
        assert_eq!(
            err,
            DomainError::UnknownFeature {
                constraint: "LinearInequalityConstraint",
                feature: "x9".to_string(),
            }
        );
    }

    #[test]
    fn linear_coefficients_must_match_features() {
        let constraint = Constraint::LinearEquality {
            features: vec!["x1".to_string(), "x2".to_string()],
            coefficients: vec![1.0],
            rhs: 1.0,
        };
        let err = Domain::from_lists(inputs(), outputs(), Some(vec![constraint])).unwrap_err();
        assert!(matches!(err, DomainError::CoefficientMismatch { .. }));
    }

    #[test]
    fn n_choose_k_cardinality_is_bounded_by_features() {
        let constraint = Constraint::NChooseK {
            features: vec!["x1".to_string(), "x2".to_string()],
            min_count: 0,
            max_count: 3,
            none_also_valid: true,
        };
        let err = Domain::from_lists(inputs(), outputs(), Some(vec![constraint])).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidCardinality {
                min: 0,
                max: 3,
                features: 2
            }
        );
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let inputs = vec![Input::Continuous {
            key: "x1".to_string(),
            bounds: (2.0, 1.0),
        }];
        let err = Domain::from_lists(inputs, outputs(), None).unwrap_err();
        assert!(matches!(err, DomainError::InvalidBounds { .. }));
    }

    #[test]
    fn unbounded_inputs_are_rejected() {
        let inputs = vec![Input::Continuous {
            key: "x1".to_string(),
            bounds: (0.0, f64::INFINITY),
        }];
        let err = Domain::from_lists(inputs, outputs(), None).unwrap_err();
        assert!(matches!(err, DomainError::UnboundedInput { ref key, .. } if key == "x1"));
    }

    #[test]
    fn desirability_must_cover_categories() {
        let objective = CategoricalObjective::new(vec!["a".to_string(), "b".to_string()], vec![true]);
        let outputs = vec![Output::categorical(
            "c",
            vec!["a".to_string(), "b".to_string()],
            objective,
        )];
        let err = Domain::from_lists(inputs(), outputs, None).unwrap_err();
        assert!(matches!(err, DomainError::DesirabilityMismatch { .. }));
    }
}
