use serde::{Deserialize, Serialize};

/// Constraint on the inputs of a domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Constraint {
    /// `coefficients · features == rhs`
    #[serde(rename = "LinearEqualityConstraint")]
    LinearEquality {
        features: Vec<String>,
        coefficients: Vec<f64>,
        rhs: f64,
    },
    /// `coefficients · features <= rhs`
    #[serde(rename = "LinearInequalityConstraint")]
    LinearInequality {
        features: Vec<String>,
        coefficients: Vec<f64>,
        rhs: f64,
    },
    #[serde(rename = "NonlinearEqualityConstraint")]
    NonlinearEquality { expression: String },
    #[serde(rename = "NonlinearInequalityConstraint")]
    NonlinearInequality { expression: String },
    /// Between `min_count` and `max_count` of `features` are active
    #[serde(rename = "NChooseKConstraint")]
    NChooseK {
        features: Vec<String>,
        min_count: usize,
        max_count: usize,
        none_also_valid: bool,
    },
}

impl Constraint {
    /// Input keys this constraint names explicitly
    pub fn features(&self) -> &[String] {
        match self {
            Constraint::LinearEquality { features, .. }
            | Constraint::LinearInequality { features, .. }
            | Constraint::NChooseK { features, .. } => features,
            Constraint::NonlinearEquality { .. } | Constraint::NonlinearInequality { .. } => &[],
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Constraint::LinearEquality { .. } => "LinearEqualityConstraint",
            Constraint::LinearInequality { .. } => "LinearInequalityConstraint",
            Constraint::NonlinearEquality { .. } => "NonlinearEqualityConstraint",
            Constraint::NonlinearInequality { .. } => "NonlinearInequalityConstraint",
            Constraint::NChooseK { .. } => "NChooseKConstraint",
        }
    }
}
