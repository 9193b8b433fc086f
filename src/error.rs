use crate::core::FieldId;
use crate::state::field::FieldKind;
use std::io;
use thiserror::Error;

/// A wizard operation rejected by one of its guards.
///
/// An incomplete step is not an error: it is reported as a boolean by the
/// validator. These variants only cover calls the caller should not make.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidOperation {
    #[error("unknown field `{0}`")]
    UnknownField(FieldId),

    #[error("`{operation}` is not supported by {kind} field `{field}`")]
    KindMismatch {
        field: FieldId,
        kind: FieldKind,
        operation: &'static str,
    },

    #[error("step {step} is incomplete")]
    StepIncomplete { step: usize },

    #[error("step {step} is the last step")]
    NoNextStep { step: usize },

    #[error("step {step} is the first step")]
    NoPreviousStep { step: usize },

    #[error("submit is only allowed on step {last}, current step is {step}")]
    NotOnLastStep { step: usize, last: usize },

    #[error("wizard has already been finalized")]
    AlreadyFinalized,
}

/// Errors raised while authoring or loading a schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("schema has no steps")]
    NoSteps,

    #[error("invalid field name `{0}`")]
    InvalidFieldName(String),

    #[error("field `{0}` is defined more than once")]
    DuplicateField(FieldId),

    #[error("{kind} field `{field}` has no options")]
    MissingOptions { field: FieldId, kind: FieldKind },

    #[error("field `{field}` lists option `{option}` more than once")]
    DuplicateOption { field: FieldId, option: String },

    #[error("field `{field}` depends on unknown field `{depends_on}`")]
    UnknownDependency { field: FieldId, depends_on: FieldId },

    #[error("field `{0}` depends on itself")]
    SelfDependency(FieldId),

    #[error("field `{field}` depends on `{depends_on}`, which is itself conditional")]
    NestedDependency { field: FieldId, depends_on: FieldId },

    #[error("failed to read schema: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse schema: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors raised while loading or replaying an event script.
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("failed to read script: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse script: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("event #{index} rejected: {source}")]
    Rejected {
        index: usize,
        #[source]
        source: InvalidOperation,
    },
}
