use super::constraints::Constraint;
use super::validation::{validate_domain, DomainError};
use super::value_objects::{CategoricalObjective, Objective};
use serde::{Deserialize, Serialize};

/// Input feature of a domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Input {
    #[serde(rename = "ContinuousInput")]
    Continuous { key: String, bounds: (f64, f64) },
    #[serde(rename = "DiscreteInput")]
    Discrete { key: String, values: Vec<f64> },
    #[serde(rename = "CategoricalInput")]
    Categorical { key: String, categories: Vec<String> },
}

impl Input {
    pub fn key(&self) -> &str {
        match self {
            Input::Continuous { key, .. }
            | Input::Discrete { key, .. }
            | Input::Categorical { key, .. } => key,
        }
    }
}

/// Output feature of a domain with its embedded objective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Output {
    #[serde(rename = "ContinuousOutput")]
    Continuous {
        key: String,
        objective: Option<Objective>,
    },
    #[serde(rename = "CategoricalOutput")]
    Categorical {
        key: String,
        categories: Vec<String>,
        objective: CategoricalObjective,
    },
}

impl Output {
    pub fn continuous(key: impl Into<String>, objective: Option<Objective>) -> Self {
        Output::Continuous {
            key: key.into(),
            objective,
        }
    }

    pub fn categorical(
        key: impl Into<String>,
        categories: Vec<String>,
        objective: CategoricalObjective,
    ) -> Self {
        Output::Categorical {
            key: key.into(),
            categories,
            objective,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Output::Continuous { key, .. } | Output::Categorical { key, .. } => key,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Output::Continuous { .. } => "ContinuousOutput",
            Output::Categorical { .. } => "CategoricalOutput",
        }
    }
}

/// Validated aggregate of inputs, outputs and constraints.
///
/// `constraints` is `None` when the source declared no constraint collection,
/// which is distinct from an empty one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Domain {
    inputs: Vec<Input>,
    outputs: Vec<Output>,
    constraints: Option<Vec<Constraint>>,
}

impl Domain {
    /// Build a domain, checking cross-field consistency
    pub fn from_lists(
        inputs: Vec<Input>,
        outputs: Vec<Output>,
        constraints: Option<Vec<Constraint>>,
    ) -> Result<Self, DomainError> {
        validate_domain(&inputs, &outputs, constraints.as_deref())?;
        Ok(Self {
            inputs,
            outputs,
            constraints,
        })
    }

    pub fn inputs(&self) -> &[Input] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[Output] {
        &self.outputs
    }

    pub fn constraints(&self) -> Option<&[Constraint]> {
        self.constraints.as_deref()
    }

    pub fn input_keys(&self) -> Vec<&str> {
        self.inputs.iter().map(Input::key).collect()
    }

    pub fn output_keys(&self) -> Vec<&str> {
        self.outputs.iter().map(Output::key).collect()
    }

    pub fn get_output(&self, key: &str) -> Option<&Output> {
        self.outputs.iter().find(|o| o.key() == key)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
