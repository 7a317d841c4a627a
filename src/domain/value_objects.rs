// Domain value objects: objectives embedded in outputs

use serde::{Deserialize, Serialize};

fn unit_weight() -> f64 {
    1.0
}

/// Objective of a continuous output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Objective {
    /// Smaller is better
    #[serde(rename = "MinimizeObjective")]
    Minimize {
        #[serde(default = "unit_weight")]
        w: f64,
    },
    /// Larger is better
    #[serde(rename = "MaximizeObjective")]
    Maximize {
        #[serde(default = "unit_weight")]
        w: f64,
    },
    /// Penalize `|y - target_value| ^ exponent`
    #[serde(rename = "CloseToTargetObjective")]
    CloseToTarget {
        #[serde(default = "unit_weight")]
        w: f64,
        target_value: f64,
        exponent: f64,
    },
}

impl Objective {
    pub fn minimize() -> Self {
        Objective::Minimize { w: unit_weight() }
    }

    pub fn maximize() -> Self {
        Objective::Maximize { w: unit_weight() }
    }

    pub fn close_to_target(target_value: f64, exponent: f64) -> Self {
        Objective::CloseToTarget {
            w: unit_weight(),
            target_value,
            exponent,
        }
    }
}

/// Objective of a categorical output: which categories are desirable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "ConstrainedCategoricalObjective")]
pub struct CategoricalObjective {
    #[serde(default = "unit_weight")]
    pub w: f64,
    pub categories: Vec<String>,
    pub desirability: Vec<bool>,
}

impl CategoricalObjective {
    pub fn new(categories: Vec<String>, desirability: Vec<bool>) -> Self {
        Self {
            w: unit_weight(),
            categories,
            desirability,
        }
    }

    /// Every category is desirable
    pub fn accept_all(categories: Vec<String>) -> Self {
        let desirability = vec![true; categories.len()];
        Self::new(categories, desirability)
    }

    /// Only the categories contained in `targets` are desirable
    pub fn targeting(categories: Vec<String>, targets: &[&str]) -> Self {
        let desirability = categories
            .iter()
            .map(|c| targets.contains(&c.as_str()))
            .collect();
        Self::new(categories, desirability)
    }

    pub fn desirable_categories(&self) -> impl Iterator<Item = &str> + '_ {
        self.categories
            .iter()
            .zip(&self.desirability)
            .filter(|(_, desirable)| **desirable)
            .map(|(c, _)| c.as_str())
    }
}
