// Mappers: Convert opti problem definitions into BoFire domain models
// opti keeps objectives next to the outputs they refer to, BoFire embeds at
// most one objective in each output.

use super::config::{ConverterConfig, MultipleObjectivesPolicy};
use super::error::{ConversionError, ConversionWarning, Converted, Result};
use crate::domain::{CategoricalObjective, Constraint, Domain, Input, Objective, Output};
use crate::opti::{self, ObjectiveKind, ParameterKind, Target};
use tracing::{debug, info, warn};

/// Objective or output constraint, tagged with where it came from
#[derive(Debug, Clone, Copy)]
enum Requirement<'a> {
    Objective(&'a opti::Objective),
    OutputConstraint(&'a opti::Objective),
}

impl<'a> Requirement<'a> {
    fn objective(&self) -> &'a opti::Objective {
        match self {
            Requirement::Objective(obj) | Requirement::OutputConstraint(obj) => obj,
        }
    }

    fn origin(&self) -> &'static str {
        match self {
            Requirement::Objective(_) => "objective",
            Requirement::OutputConstraint(_) => "output constraint",
        }
    }
}

/// Convert opti input parameters to BoFire inputs, keeping their order
pub fn convert_inputs(inputs: &[opti::Parameter]) -> Result<Vec<Input>> {
    inputs.iter().map(convert_input).collect()
}

/// Convert a single opti parameter to a BoFire input
pub fn convert_input(param: &opti::Parameter) -> Result<Input> {
    let key = param.name.clone();
    let input = match &param.kind {
        ParameterKind::Continuous { bounds } => Input::Continuous {
            key,
            bounds: *bounds,
        },
        ParameterKind::Discrete { values } => Input::Discrete {
            key,
            values: values.clone(),
        },
        ParameterKind::Categorical { categories } => Input::Categorical {
            key,
            categories: categories.clone(),
        },
        ParameterKind::Unrecognized { tag } => {
            return Err(ConversionError::UnrecognizedKind {
                name: param.name.clone(),
                kind: tag.clone(),
            })
        }
    };

    debug!(input = %param.name, kind = %param.kind, "converted input");
    Ok(input)
}

/// Convert opti constraints one-for-one, keeping their order
pub fn convert_constraints(constraints: &[opti::Constraint]) -> Result<Vec<Constraint>> {
    constraints.iter().map(convert_constraint).collect()
}

/// Convert a single opti constraint to a BoFire constraint
pub fn convert_constraint(constraint: &opti::Constraint) -> Result<Constraint> {
    let converted = match constraint {
        opti::Constraint::LinearEquality(c) => Constraint::LinearEquality {
            features: c.names.clone(),
            coefficients: c.lhs.clone(),
            rhs: c.rhs,
        },
        opti::Constraint::LinearInequality(c) => Constraint::LinearInequality {
            features: c.names.clone(),
            coefficients: c.lhs.clone(),
            rhs: c.rhs,
        },
        opti::Constraint::NonlinearEquality(c) => Constraint::NonlinearEquality {
            expression: c.expression.clone(),
        },
        opti::Constraint::NonlinearInequality(c) => Constraint::NonlinearInequality {
            expression: c.expression.clone(),
        },
        opti::Constraint::NChooseK(c) => Constraint::NChooseK {
            features: c.names.clone(),
            min_count: 0,
            max_count: c.max_active,
            none_also_valid: true,
        },
        opti::Constraint::Unrecognized { tag } => {
            return Err(ConversionError::UnrecognizedConstraintKind { kind: tag.clone() })
        }
    };

    debug!(from = constraint.tag(), to = converted.type_name(), "converted constraint");
    Ok(converted)
}

/// Make BoFire outputs from opti outputs, objectives and output constraints.
///
/// Output constraints are treated like objectives. An output referenced by
/// several of them is split into `{name}_0`, `{name}_1`, ... unless the
/// configuration rejects multiple objectives. Discrete outputs become
/// continuous ones and are reported as warnings.
pub fn convert_outputs_and_objectives(
    outputs: &[opti::Parameter],
    objectives: &[opti::Objective],
    output_constraints: Option<&[opti::Objective]>,
    config: &ConverterConfig,
) -> Result<Converted<Vec<Output>>> {
    let requirements: Vec<Requirement> = objectives
        .iter()
        .map(Requirement::Objective)
        .chain(
            output_constraints
                .unwrap_or_default()
                .iter()
                .map(Requirement::OutputConstraint),
        )
        .collect();

    for req in &requirements {
        let name = &req.objective().name;
        if !outputs.iter().any(|o| &o.name == name) {
            debug!(output = %name, origin = req.origin(), "ignoring requirement on unknown output");
        }
    }

    let mut converted = Vec::with_capacity(outputs.len());
    let mut warnings = Vec::new();

    for output in outputs {
        let group: Vec<Requirement> = requirements
            .iter()
            .filter(|req| req.objective().name == output.name)
            .copied()
            .collect();

        if group.len() > 1 && config.multiple_objectives == MultipleObjectivesPolicy::Reject {
            return Err(ConversionError::MultipleObjectives {
                name: output.name.clone(),
                count: group.len(),
            });
        }

        let entries: Vec<(String, Option<Requirement>)> = match group.as_slice() {
            [] => vec![(output.name.clone(), None)],
            [req] => vec![(output.name.clone(), Some(*req))],
            many => many
                .iter()
                .enumerate()
                .map(|(idx, req)| (format!("{}_{}", output.name, idx), Some(*req)))
                .collect(),
        };

        for (key, req) in entries {
            if let ParameterKind::Discrete { .. } = output.kind {
                let warning = ConversionWarning::DiscreteOutputCoerced { name: key.clone() };
                warn!(output = %output.name, "{}", warning);
                warnings.push(warning);
            }
            converted.push(convert_output(output, key, req)?);
        }
    }

    Ok(Converted::new(converted, warnings))
}

fn convert_output(
    output: &opti::Parameter,
    key: String,
    req: Option<Requirement>,
) -> Result<Output> {
    let converted = match &output.kind {
        ParameterKind::Continuous { .. } | ParameterKind::Discrete { .. } => {
            let objective = req
                .map(|req| continuous_objective(output, req))
                .transpose()?;
            Output::continuous(key, objective)
        }
        ParameterKind::Categorical { categories } => {
            let objective = match req {
                Some(req) => categorical_objective(output, categories, req)?,
                None => CategoricalObjective::accept_all(categories.clone()),
            };
            Output::categorical(key, categories.clone(), objective)
        }
        ParameterKind::Unrecognized { tag } => {
            return Err(ConversionError::UnrecognizedKind {
                name: output.name.clone(),
                kind: tag.clone(),
            })
        }
    };

    debug!(
        output = %output.name,
        key = converted.key(),
        origin = req.map(|r| r.origin()).unwrap_or("none"),
        "converted output"
    );
    Ok(converted)
}

fn continuous_objective(output: &opti::Parameter, req: Requirement) -> Result<Objective> {
    match &req.objective().kind {
        ObjectiveKind::Minimize { .. } => Ok(Objective::minimize()),
        ObjectiveKind::Maximize { .. } => Ok(Objective::maximize()),
        ObjectiveKind::CloseToTarget {
            target: Target::Value(target),
            exponent,
            tolerance,
        } => {
            if *tolerance != 0.0 {
                debug!(output = %output.name, tolerance, "dropping close-to-target tolerance");
            }
            Ok(Objective::close_to_target(*target, *exponent))
        }
        ObjectiveKind::CloseToTarget { .. } => Err(invalid_objective(
            output,
            req,
            "a category target needs a categorical output",
        )),
        ObjectiveKind::Unrecognized { tag } => Err(unrecognized_objective(output, tag)),
    }
}

fn categorical_objective(
    output: &opti::Parameter,
    categories: &[String],
    req: Requirement,
) -> Result<CategoricalObjective> {
    match &req.objective().kind {
        ObjectiveKind::Minimize { .. } | ObjectiveKind::Maximize { .. } => Err(invalid_objective(
            output,
            req,
            "categorical outputs have no direction",
        )),
        ObjectiveKind::CloseToTarget { target, .. } => {
            // a numeric target matches no label
            let labels = target.labels().unwrap_or_default();
            Ok(CategoricalObjective::targeting(categories.to_vec(), &labels))
        }
        ObjectiveKind::Unrecognized { tag } => Err(unrecognized_objective(output, tag)),
    }
}

fn invalid_objective(output: &opti::Parameter, req: Requirement, reason: &str) -> ConversionError {
    ConversionError::InvalidObjectiveForKind {
        name: output.name.clone(),
        objective: req.objective().kind.tag().to_string(),
        origin: req.origin(),
        reason: reason.to_string(),
    }
}

fn unrecognized_objective(output: &opti::Parameter, tag: &str) -> ConversionError {
    ConversionError::UnrecognizedObjectiveKind {
        name: output.name.clone(),
        kind: tag.to_string(),
    }
}

/// Turn an opti problem into the equivalent BoFire domain.
///
/// Any error aborts the whole conversion. A problem without a constraint
/// collection yields a domain without one.
pub fn convert_problem(
    problem: &opti::Problem,
    config: &ConverterConfig,
) -> Result<Converted<Domain>> {
    info!(
        problem = %problem.name,
        inputs = problem.inputs.len(),
        outputs = problem.outputs.len(),
        "converting opti problem"
    );

    let inputs = convert_inputs(&problem.inputs)?;
    let constraints = problem
        .constraints
        .as_deref()
        .map(convert_constraints)
        .transpose()?;
    let Converted {
        value: outputs,
        warnings,
    } = convert_outputs_and_objectives(
        &problem.outputs,
        &problem.objectives,
        problem.output_constraints.as_deref(),
        config,
    )?;

    let domain = Domain::from_lists(inputs, outputs, constraints)?;
    Ok(Converted::new(domain, warnings))
}

/// Load an opti problem from its JSON config and convert it
pub fn convert_json(json: &str, config: &ConverterConfig) -> Result<Converted<Domain>> {
    let problem = opti::Problem::from_json(json)?;
    convert_problem(&problem, config)
}

impl opti::Problem {
    /// Convert with the default configuration
    pub fn to_domain(&self) -> Result<Converted<Domain>> {
        convert_problem(self, &ConverterConfig::default())
    }
}
