// Source schema: opti problem definitions
pub mod opti;

// Domain layer: the BoFire domain a problem converts into
pub mod domain;

// Application layer: conversion use cases
pub mod application;

// Infrastructure layer: logging
pub mod infrastructure;

pub use infrastructure::logging;

// Re-export commonly used types
pub use domain::{
    CategoricalObjective, Constraint, Domain, DomainError, Input, Objective, Output,
};

pub use application::{
    convert_constraints, convert_inputs, convert_json, convert_outputs_and_objectives,
    convert_problem, ConversionError, ConversionWarning, Converted, ConverterConfig,
    MultipleObjectivesPolicy, Result,
};
