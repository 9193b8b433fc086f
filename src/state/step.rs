use crate::state::field::FieldSpec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Pending,
    Active,
    Done,
}

/// One screen of related fields, validated as a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSpec {
    pub title: String,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl StepSpec {
    pub fn new(title: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            title: title.into(),
            fields,
        }
    }

    pub fn builder(title: impl Into<String>) -> StepBuilder {
        StepBuilder::new(title)
    }
}

pub struct StepBuilder {
    title: String,
    fields: Vec<FieldSpec>,
}

impl StepBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn build(self) -> StepSpec {
        StepSpec {
            title: self.title,
            fields: self.fields,
        }
    }
}
