// opti value objects: the kind of a parameter and the direction of an objective

use serde::Deserialize;
use std::fmt;

/// Kind of an opti parameter together with its domain
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterKind {
    /// Real-valued parameter within `(lower, upper)`
    Continuous { bounds: (f64, f64) },
    /// Parameter restricted to an ordered set of values
    Discrete { values: Vec<f64> },
    /// Parameter taking one of a set of labels
    Categorical { categories: Vec<String> },
    /// A `type` tag this crate does not know how to convert
    Unrecognized { tag: String },
}

impl ParameterKind {
    /// The opti `type` tag of this kind
    pub fn tag(&self) -> &str {
        match self {
            ParameterKind::Continuous { .. } => "continuous",
            ParameterKind::Discrete { .. } => "discrete",
            ParameterKind::Categorical { .. } => "categorical",
            ParameterKind::Unrecognized { tag } => tag,
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Target of a close-to-target objective.
///
/// Numeric outputs are steered towards a value, categorical outputs towards
/// one or more labels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Target {
    Value(f64),
    Label(String),
    Labels(Vec<String>),
}

impl Target {
    /// Labels this target accepts, or `None` for a numeric target
    pub fn labels(&self) -> Option<Vec<&str>> {
        match self {
            Target::Value(_) => None,
            Target::Label(label) => Some(vec![label.as_str()]),
            Target::Labels(labels) => Some(labels.iter().map(String::as_str).collect()),
        }
    }
}

impl From<f64> for Target {
    fn from(value: f64) -> Self {
        Target::Value(value)
    }
}

impl From<&str> for Target {
    fn from(label: &str) -> Self {
        Target::Label(label.to_string())
    }
}

/// Direction of an opti objective
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectiveKind {
    /// Minimize the output; `target` is opti's reference point
    Minimize { target: f64 },
    /// Maximize the output; `target` is opti's reference point
    Maximize { target: f64 },
    /// Drive the output towards `target`
    CloseToTarget {
        target: Target,
        exponent: f64,
        tolerance: f64,
    },
    /// A `type` tag this crate does not know how to convert
    Unrecognized { tag: String },
}

impl ObjectiveKind {
    /// The opti `type` tag of this kind
    pub fn tag(&self) -> &str {
        match self {
            ObjectiveKind::Minimize { .. } => "minimize",
            ObjectiveKind::Maximize { .. } => "maximize",
            ObjectiveKind::CloseToTarget { .. } => "close-to-target",
            ObjectiveKind::Unrecognized { tag } => tag,
        }
    }
}

impl fmt::Display for ObjectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
