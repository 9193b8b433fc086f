//! Step completeness rules.
//!
//! A field that depends on another field only takes part in its step while
//! that field holds a truthy value. Inactive fields are hidden from the
//! rendering layer and exempt from completeness.

use crate::core::FieldId;
use crate::state::field::{FieldKind, FieldSpec};
use crate::state::step::StepSpec;
use crate::state::store::AnswerSet;

/// Whether `field` is part of its step given the current answers.
///
/// The dependency is looked up by name against the live answers.
pub fn is_field_active(field: &FieldSpec, answers: &AnswerSet) -> bool {
    field
        .depends_on
        .as_ref()
        .is_none_or(|dependency| answers.is_truthy(dependency.as_str()))
}

/// Completeness of a single field, ignoring whether it is active.
pub fn is_field_satisfied(field: &FieldSpec, answers: &AnswerSet) -> bool {
    let Some(value) = answers.get(field.name.as_str()) else {
        return false;
    };
    match field.kind {
        FieldKind::MultiChoice => value.as_choices().is_some_and(|set| !set.is_empty()),
        _ => !value.is_empty(),
    }
}

/// A step is valid when every active field is satisfied.
pub fn validate_step(step: &StepSpec, answers: &AnswerSet) -> bool {
    step.fields
        .iter()
        .filter(|field| is_field_active(field, answers))
        .all(|field| is_field_satisfied(field, answers))
}

/// Active fields that still block the step, in step order.
pub fn incomplete_fields(step: &StepSpec, answers: &AnswerSet) -> Vec<FieldId> {
    step.fields
        .iter()
        .filter(|field| is_field_active(field, answers))
        .filter(|field| !is_field_satisfied(field, answers))
        .map(|field| field.name.clone())
        .collect()
}
