use serde::Deserialize;

/// What to do with an output referenced by more than one objective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MultipleObjectivesPolicy {
    /// One suffixed output per objective: `y_0`, `y_1`, ...
    FanOut,
    /// Fail with `ConversionError::MultipleObjectives`
    Reject,
}

/// Configuration for the converter
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    pub multiple_objectives: MultipleObjectivesPolicy,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            multiple_objectives: MultipleObjectivesPolicy::FanOut,
        }
    }
}

impl ConverterConfig {
    pub fn with_multiple_objectives(mut self, policy: MultipleObjectivesPolicy) -> Self {
        self.multiple_objectives = policy;
        self
    }
}
