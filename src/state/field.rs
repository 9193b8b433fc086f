use crate::core::FieldId;
use crate::core::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    SingleChoice,
    MultiChoice,
    NumericText,
    Boolean,
}

impl FieldKind {
    pub fn default_value(self) -> Value {
        match self {
            Self::SingleChoice | Self::NumericText => Value::empty_text(),
            Self::MultiChoice => Value::empty_choices(),
            Self::Boolean => Value::Flag(false),
        }
    }

    pub fn has_options(self) -> bool {
        matches!(self, Self::SingleChoice | Self::MultiChoice)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SingleChoice => "single-choice",
            Self::MultiChoice => "multi-choice",
            Self::NumericText => "numeric-text",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

impl ChoiceOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: FieldId,
    pub label: String,
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ChoiceOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Field is only active while the named field holds a truthy value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<FieldId>,
}

impl FieldSpec {
    pub fn new(name: impl Into<FieldId>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            options: Vec::new(),
            placeholder: None,
            depends_on: None,
        }
    }

    pub fn single_choice(name: impl Into<FieldId>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::SingleChoice)
    }

    pub fn multi_choice(name: impl Into<FieldId>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::MultiChoice)
    }

    pub fn numeric_text(name: impl Into<FieldId>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::NumericText)
    }

    pub fn boolean(name: impl Into<FieldId>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Boolean)
    }

    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(ChoiceOption::new(value, label));
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn depends_on(mut self, field: impl Into<FieldId>) -> Self {
        self.depends_on = Some(field.into());
        self
    }

    pub fn default_value(&self) -> Value {
        self.kind.default_value()
    }

    pub fn is_conditional(&self) -> bool {
        self.depends_on.is_some()
    }
}
