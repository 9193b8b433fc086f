use crate::core::FieldId;
use crate::state::configuration::Configuration;
use serde::{Deserialize, Deserializer, Serialize};

/// Input events sent by the rendering layer, one user action at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WizardEvent {
    FieldChanged {
        name: FieldId,
        #[serde(deserialize_with = "scalar_text")]
        value: String,
    },
    OptionToggled { name: FieldId, option: String },
    NextRequested,
    PreviousRequested,
    SubmitRequested,
}

impl WizardEvent {
    pub fn field_changed(name: impl Into<FieldId>, value: impl Into<String>) -> Self {
        Self::FieldChanged {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn option_toggled(name: impl Into<FieldId>, option: impl Into<String>) -> Self {
        Self::OptionToggled {
            name: name.into(),
            option: option.into(),
        }
    }
}

/// Accepts a string, number or bool and keeps its text form, so recorded
/// scripts may write `value: 3` or `value: true` unquoted.
fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Flag(bool),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(v) => v,
        Scalar::Flag(v) => v.to_string(),
        Scalar::Unsigned(v) => v.to_string(),
        Scalar::Signed(v) => v.to_string(),
        Scalar::Float(v) => v.to_string(),
    })
}

/// Result of an accepted event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Updated,
    StepChanged(usize),
    Finalized(Configuration),
}
