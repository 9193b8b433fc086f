use crate::core::FieldId;
use crate::core::value::Value;
use crate::state::field::{ChoiceOption, FieldKind};
use crate::state::step::StepStatus;
use serde::Serialize;

/// Everything the rendering layer needs to draw the active step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepView {
    pub number: usize,
    pub total: usize,
    pub title: String,
    pub fields: Vec<FieldView>,
    pub progress: Vec<ProgressMarker>,
    pub can_go_back: bool,
    /// "Next" is enabled: not the last step and the step is complete.
    pub can_advance: bool,
    /// "Submit" is enabled: last step and the step is complete.
    pub can_submit: bool,
    pub is_last: bool,
    pub finalized: bool,
}

impl StepView {
    pub fn field(&self, name: &str) -> Option<&FieldView> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn visible_fields(&self) -> impl Iterator<Item = &FieldView> {
        self.fields.iter().filter(|field| field.visible)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub name: FieldId,
    pub label: String,
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ChoiceOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub value: Value,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressMarker {
    pub title: String,
    pub status: StepStatus,
    /// Steps up to and including the active one are reached.
    pub reached: bool,
}
