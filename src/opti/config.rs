// opti's JSON config layout
//
// Records carry a `type` tag. Tags outside the known set are kept as
// `Unrecognized` so the converter can report them; malformed records of a
// known tag fail deserialization.

use super::models::{Constraint, LinearConstraint, NChooseK, NonlinearConstraint, Objective, Parameter};
use super::value_objects::{ObjectiveKind, ParameterKind, Target};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
pub(crate) struct RawParameter {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    domain: Option<Value>,
}

impl TryFrom<RawParameter> for Parameter {
    type Error = String;

    fn try_from(raw: RawParameter) -> Result<Self, Self::Error> {
        let name = raw.name;
        let kind = match raw.kind.as_str() {
            "continuous" => {
                let bounds = match raw.domain {
                    None | Some(Value::Null) => (None, None),
                    Some(domain) => serde_json::from_value::<(Option<f64>, Option<f64>)>(domain)
                        .map_err(|e| format!("parameter '{name}': invalid bounds: {e}"))?,
                };
                ParameterKind::Continuous {
                    bounds: (
                        bounds.0.unwrap_or(f64::NEG_INFINITY),
                        bounds.1.unwrap_or(f64::INFINITY),
                    ),
                }
            }
            "discrete" => ParameterKind::Discrete {
                values: parse_domain(&name, raw.domain)?,
            },
            "categorical" => ParameterKind::Categorical {
                categories: parse_domain(&name, raw.domain)?,
            },
            _ => ParameterKind::Unrecognized { tag: raw.kind },
        };
        Ok(Parameter { name, kind })
    }
}

fn parse_domain<T: serde::de::DeserializeOwned>(
    name: &str,
    domain: Option<Value>,
) -> Result<Vec<T>, String> {
    let domain = domain.ok_or_else(|| format!("parameter '{name}': missing domain"))?;
    serde_json::from_value(domain).map_err(|e| format!("parameter '{name}': invalid domain: {e}"))
}

#[derive(Deserialize)]
pub(crate) struct RawObjective {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    target: Option<Value>,
    #[serde(default)]
    exponent: Option<f64>,
    #[serde(default)]
    tolerance: Option<f64>,
}

impl TryFrom<RawObjective> for Objective {
    type Error = String;

    fn try_from(raw: RawObjective) -> Result<Self, Self::Error> {
        let name = raw.name;
        let reference = |target: Option<Value>| -> Result<f64, String> {
            target
                .map(serde_json::from_value::<f64>)
                .transpose()
                .map(|t| t.unwrap_or(0.0))
                .map_err(|e| format!("objective '{name}': invalid target: {e}"))
        };

        let kind = match raw.kind.as_str() {
            "minimize" => ObjectiveKind::Minimize {
                target: reference(raw.target)?,
            },
            "maximize" => ObjectiveKind::Maximize {
                target: reference(raw.target)?,
            },
            "close-to-target" => {
                let target = raw
                    .target
                    .ok_or_else(|| format!("objective '{name}': missing target"))?;
                ObjectiveKind::CloseToTarget {
                    target: serde_json::from_value::<Target>(target)
                        .map_err(|e| format!("objective '{name}': invalid target: {e}"))?,
                    exponent: raw.exponent.unwrap_or(1.0),
                    tolerance: raw.tolerance.unwrap_or(0.0),
                }
            }
            _ => ObjectiveKind::Unrecognized { tag: raw.kind },
        };
        Ok(Objective { name, kind })
    }
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
enum KnownConstraint {
    LinearEquality(LinearConstraint),
    LinearInequality(LinearConstraint),
    NonlinearEquality(NonlinearConstraint),
    NonlinearInequality(NonlinearConstraint),
    #[serde(rename = "n-choose-k")]
    NChooseK(NChooseK),
}

const CONSTRAINT_TAGS: [&str; 5] = [
    "linear-equality",
    "linear-inequality",
    "nonlinear-equality",
    "nonlinear-inequality",
    "n-choose-k",
];

impl TryFrom<Value> for Constraint {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let tag = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| "constraint is missing its `type` tag".to_string())?
            .to_string();

        if !CONSTRAINT_TAGS.contains(&tag.as_str()) {
            return Ok(Constraint::Unrecognized { tag });
        }

        let known: KnownConstraint =
            serde_json::from_value(value).map_err(|e| format!("invalid {tag} constraint: {e}"))?;
        Ok(match known {
            KnownConstraint::LinearEquality(c) => Constraint::LinearEquality(c),
            KnownConstraint::LinearInequality(c) => Constraint::LinearInequality(c),
            KnownConstraint::NonlinearEquality(c) => Constraint::NonlinearEquality(c),
            KnownConstraint::NonlinearInequality(c) => Constraint::NonlinearInequality(c),
            KnownConstraint::NChooseK(c) => Constraint::NChooseK(c),
        })
    }
}
