use super::config::{RawObjective, RawParameter};
use super::value_objects::{ObjectiveKind, ParameterKind, Target};
use serde::Deserialize;

/// Input or output parameter of an opti problem
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawParameter")]
pub struct Parameter {
    pub name: String,
    pub kind: ParameterKind,
}

impl Parameter {
    pub fn continuous(name: impl Into<String>, bounds: (f64, f64)) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::Continuous { bounds },
        }
    }

    /// Continuous parameter without bounds, opti's default domain
    pub fn unbounded(name: impl Into<String>) -> Self {
        Self::continuous(name, (f64::NEG_INFINITY, f64::INFINITY))
    }

    pub fn discrete(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::Discrete { values },
        }
    }

    pub fn categorical<S: Into<String>>(
        name: impl Into<String>,
        categories: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::Categorical {
                categories: categories.into_iter().map(Into::into).collect(),
            },
        }
    }
}

/// Objective (or output constraint) referring to an output by name
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawObjective")]
pub struct Objective {
    pub name: String,
    pub kind: ObjectiveKind,
}

impl Objective {
    pub fn minimize(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ObjectiveKind::Minimize { target: 0.0 },
        }
    }

    pub fn maximize(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ObjectiveKind::Maximize { target: 0.0 },
        }
    }

    pub fn close_to_target(name: impl Into<String>, target: impl Into<Target>) -> Self {
        Self {
            name: name.into(),
            kind: ObjectiveKind::CloseToTarget {
                target: target.into(),
                exponent: 1.0,
                tolerance: 0.0,
            },
        }
    }

    /// Set opti's reference target of a minimize/maximize objective
    pub fn with_target(mut self, value: f64) -> Self {
        match &mut self.kind {
            ObjectiveKind::Minimize { target } | ObjectiveKind::Maximize { target } => {
                *target = value
            }
            ObjectiveKind::CloseToTarget { target, .. } => *target = Target::Value(value),
            ObjectiveKind::Unrecognized { .. } => {}
        }
        self
    }

    pub fn with_exponent(mut self, value: f64) -> Self {
        if let ObjectiveKind::CloseToTarget { exponent, .. } = &mut self.kind {
            *exponent = value;
        }
        self
    }

    pub fn with_tolerance(mut self, value: f64) -> Self {
        if let ObjectiveKind::CloseToTarget { tolerance, .. } = &mut self.kind {
            *tolerance = value;
        }
        self
    }
}

/// Linear (in)equality `lhs · x(names) {=, <=} rhs`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinearConstraint {
    pub names: Vec<String>,
    pub lhs: Vec<f64>,
    pub rhs: f64,
}

/// Nonlinear (in)equality given as an expression over input names
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NonlinearConstraint {
    pub expression: String,
}

/// At most `max_active` of `names` may be non-zero
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NChooseK {
    pub names: Vec<String>,
    pub max_active: usize,
}

/// Constraint on the inputs of an opti problem
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub enum Constraint {
    LinearEquality(LinearConstraint),
    LinearInequality(LinearConstraint),
    NonlinearEquality(NonlinearConstraint),
    NonlinearInequality(NonlinearConstraint),
    NChooseK(NChooseK),
    /// A `type` tag this crate does not know how to convert
    Unrecognized { tag: String },
}

impl Constraint {
    pub fn linear_equality<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        lhs: Vec<f64>,
        rhs: f64,
    ) -> Self {
        Constraint::LinearEquality(LinearConstraint {
            names: names.into_iter().map(Into::into).collect(),
            lhs,
            rhs,
        })
    }

    pub fn linear_inequality<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        lhs: Vec<f64>,
        rhs: f64,
    ) -> Self {
        Constraint::LinearInequality(LinearConstraint {
            names: names.into_iter().map(Into::into).collect(),
            lhs,
            rhs,
        })
    }

    pub fn nonlinear_equality(expression: impl Into<String>) -> Self {
        Constraint::NonlinearEquality(NonlinearConstraint {
            expression: expression.into(),
        })
    }

    pub fn nonlinear_inequality(expression: impl Into<String>) -> Self {
        Constraint::NonlinearInequality(NonlinearConstraint {
            expression: expression.into(),
        })
    }

    pub fn n_choose_k<S: Into<String>>(names: impl IntoIterator<Item = S>, max_active: usize) -> Self {
        Constraint::NChooseK(NChooseK {
            names: names.into_iter().map(Into::into).collect(),
            max_active,
        })
    }

    /// The opti `type` tag of this constraint
    pub fn tag(&self) -> &str {
        match self {
            Constraint::LinearEquality(_) => "linear-equality",
            Constraint::LinearInequality(_) => "linear-inequality",
            Constraint::NonlinearEquality(_) => "nonlinear-equality",
            Constraint::NonlinearInequality(_) => "nonlinear-inequality",
            Constraint::NChooseK(_) => "n-choose-k",
            Constraint::Unrecognized { tag } => tag,
        }
    }
}

/// Complete opti problem
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Problem {
    #[serde(default)]
    pub name: String,
    pub inputs: Vec<Parameter>,
    pub outputs: Vec<Parameter>,
    #[serde(default)]
    pub objectives: Vec<Objective>,
    #[serde(default)]
    pub output_constraints: Option<Vec<Objective>>,
    #[serde(default)]
    pub constraints: Option<Vec<Constraint>>,
}

impl Problem {
    pub fn new(inputs: Vec<Parameter>, outputs: Vec<Parameter>) -> Self {
        Self {
            name: String::new(),
            inputs,
            outputs,
            objectives: Vec::new(),
            output_constraints: None,
            constraints: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_objectives(mut self, objectives: Vec<Objective>) -> Self {
        self.objectives = objectives;
        self
    }

    pub fn with_output_constraints(mut self, output_constraints: Vec<Objective>) -> Self {
        self.output_constraints = Some(output_constraints);
        self
    }

    pub fn with_constraints(mut self, constraints: Vec<Constraint>) -> Self {
        self.constraints = Some(constraints);
        self
    }

    /// Load a problem from opti's JSON config layout
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
