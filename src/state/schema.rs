use crate::core::FieldId;
use crate::error::SchemaError;
use crate::state::field::FieldSpec;
use crate::state::step::StepSpec;
use crate::state::trading_bot;
use indexmap::{IndexMap, IndexSet};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static FIELD_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("field name pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FieldLocation {
    step: usize,
    position: usize,
}

#[derive(Serialize, Deserialize)]
struct SchemaDocument {
    steps: Vec<StepSpec>,
}

/// Ordered, read-only description of the wizard steps.
///
/// Step numbers are 1-based everywhere in the public API.
#[derive(Debug, Clone)]
pub struct Schema {
    steps: Vec<StepSpec>,
    index: IndexMap<FieldId, FieldLocation>,
}

impl Schema {
    pub fn new(steps: Vec<StepSpec>) -> Result<Self, SchemaError> {
        check_steps(&steps)?;
        Ok(Self::indexed(steps))
    }

    /// Built-in trading bot configuration schema.
    pub fn trading_bot() -> Self {
        Self::indexed(trading_bot::steps())
    }

    pub fn from_yaml_str(input: &str) -> Result<Self, SchemaError> {
        let document: SchemaDocument = serde_yaml::from_str(input)?;
        Self::new(document.steps)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&raw)
    }

    pub fn to_yaml(&self) -> Result<String, SchemaError> {
        let document = SchemaDocument {
            steps: self.steps.clone(),
        };
        Ok(serde_yaml::to_string(&document)?)
    }

    pub fn steps(&self) -> &[StepSpec] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step(&self, number: usize) -> Option<&StepSpec> {
        number.checked_sub(1).and_then(|index| self.steps.get(index))
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        let location = self.index.get(name)?;
        self.steps
            .get(location.step)
            .and_then(|step| step.fields.get(location.position))
    }

    /// Number of the step that owns `name`.
    pub fn step_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).map(|location| location.step + 1)
    }

    /// All fields across all steps, in schema order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.steps.iter().flat_map(|step| step.fields.iter())
    }

    fn indexed(steps: Vec<StepSpec>) -> Self {
        let mut index = IndexMap::new();
        for (step_idx, step) in steps.iter().enumerate() {
            for (position, field) in step.fields.iter().enumerate() {
                index.insert(
                    field.name.clone(),
                    FieldLocation {
                        step: step_idx,
                        position,
                    },
                );
            }
        }
        Self { steps, index }
    }
}

fn check_steps(steps: &[StepSpec]) -> Result<(), SchemaError> {
    if steps.is_empty() {
        return Err(SchemaError::NoSteps);
    }

    let mut seen = IndexMap::<&str, &FieldSpec>::new();
    for field in steps.iter().flat_map(|step| step.fields.iter()) {
        if !FIELD_NAME.is_match(field.name.as_str()) {
            return Err(SchemaError::InvalidFieldName(field.name.to_string()));
        }
        if seen.insert(field.name.as_str(), field).is_some() {
            return Err(SchemaError::DuplicateField(field.name.clone()));
        }
        check_options(field)?;
    }

    for field in seen.values() {
        let Some(depends_on) = field.depends_on.as_ref() else {
            continue;
        };
        if *depends_on == field.name {
            return Err(SchemaError::SelfDependency(field.name.clone()));
        }
        let Some(target) = seen.get(depends_on.as_str()) else {
            return Err(SchemaError::UnknownDependency {
                field: field.name.clone(),
                depends_on: depends_on.clone(),
            });
        };
        if target.is_conditional() {
            return Err(SchemaError::NestedDependency {
                field: field.name.clone(),
                depends_on: depends_on.clone(),
            });
        }
    }

    Ok(())
}

fn check_options(field: &FieldSpec) -> Result<(), SchemaError> {
    if !field.kind.has_options() {
        return Ok(());
    }
    if field.options.is_empty() {
        return Err(SchemaError::MissingOptions {
            field: field.name.clone(),
            kind: field.kind,
        });
    }
    let mut values = IndexSet::new();
    for option in &field.options {
        if !values.insert(option.value.as_str()) {
            return Err(SchemaError::DuplicateOption {
                field: field.name.clone(),
                option: option.value.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Schema;
    use crate::error::SchemaError;
    use crate::state::field::{FieldKind, FieldSpec};
    use crate::state::step::StepSpec;

    #[test]
    fn trading_bot_schema_passes_authoring_checks() {
        let schema = Schema::trading_bot();
        let rebuilt = Schema::new(schema.steps().to_vec()).expect("built-in schema is valid");
        assert_eq!(rebuilt.len(), 4);
    }

    #[test]
    fn trading_bot_schema_layout() {
        let schema = Schema::trading_bot();
        let titles: Vec<&str> = schema.steps().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Risk Profile",
                "Trading Strategy",
                "Technical Parameters",
                "Advanced Settings"
            ]
        );
        assert_eq!(schema.fields().count(), 12);
        assert_eq!(schema.step_of("tradingGoals"), Some(2));
        assert_eq!(schema.step_of("dipPercentage"), Some(4));

        let whale_min = schema.field("whaleMinimumAmount").expect("field");
        assert_eq!(whale_min.kind, FieldKind::NumericText);
        assert_eq!(
            whale_min.depends_on.as_ref().map(|id| id.as_str()),
            Some("whaleTracking")
        );
        assert_eq!(schema.field("tradingGoals").map(|f| f.options.len()), Some(9));
    }

    #[test]
    fn step_numbers_are_one_based() {
        let schema = Schema::trading_bot();
        assert!(schema.step(0).is_none());
        assert_eq!(schema.step(1).map(|s| s.title.as_str()), Some("Risk Profile"));
        assert!(schema.step(5).is_none());
    }

    #[test]
    fn rejects_duplicate_names_across_steps() {
        let err = Schema::new(vec![
            StepSpec::new("one", vec![FieldSpec::boolean("flag", "Flag")]),
            StepSpec::new("two", vec![FieldSpec::numeric_text("flag", "Amount")]),
        ])
        .expect_err("duplicate names must be rejected");
        assert!(matches!(err, SchemaError::DuplicateField(id) if id == "flag"));
    }

    #[test]
    fn rejects_empty_schema_and_bad_names() {
        assert!(matches!(Schema::new(vec![]), Err(SchemaError::NoSteps)));

        let err = Schema::new(vec![StepSpec::new(
            "one",
            vec![FieldSpec::boolean("max loss", "Max loss")],
        )])
        .expect_err("names with spaces are rejected");
        assert!(matches!(err, SchemaError::InvalidFieldName(name) if name == "max loss"));
    }

    #[test]
    fn rejects_choice_fields_without_options() {
        let err = Schema::new(vec![StepSpec::new(
            "one",
            vec![FieldSpec::multi_choice("goals", "Goals")],
        )])
        .expect_err("options are required");
        assert!(matches!(
            err,
            SchemaError::MissingOptions {
                kind: FieldKind::MultiChoice,
                ..
            }
        ));

        let err = Schema::new(vec![StepSpec::new(
            "one",
            vec![
                FieldSpec::single_choice("risk", "Risk")
                    .option("low", "Low")
                    .option("low", "Also low"),
            ],
        )])
        .expect_err("option values are unique");
        assert!(matches!(err, SchemaError::DuplicateOption { option, .. } if option == "low"));
    }

    #[test]
    fn rejects_broken_dependencies() {
        let unknown = Schema::new(vec![StepSpec::new(
            "one",
            vec![FieldSpec::numeric_text("amount", "Amount").depends_on("missing")],
        )]);
        assert!(matches!(unknown, Err(SchemaError::UnknownDependency { .. })));

        let own = Schema::new(vec![StepSpec::new(
            "one",
            vec![FieldSpec::boolean("flag", "Flag").depends_on("flag")],
        )]);
        assert!(matches!(own, Err(SchemaError::SelfDependency(_))));

        let nested = Schema::new(vec![StepSpec::new(
            "one",
            vec![
                FieldSpec::boolean("a", "A"),
                FieldSpec::boolean("b", "B").depends_on("a"),
                FieldSpec::numeric_text("c", "C").depends_on("b"),
            ],
        )]);
        assert!(matches!(nested, Err(SchemaError::NestedDependency { .. })));
    }

    #[test]
    fn dependency_may_point_to_a_later_step() {
        let schema = Schema::new(vec![
            StepSpec::new(
                "one",
                vec![FieldSpec::numeric_text("amount", "Amount").depends_on("enabled")],
            ),
            StepSpec::new("two", vec![FieldSpec::boolean("enabled", "Enabled")]),
        ]);
        assert!(schema.is_ok());
    }

    #[test]
    fn yaml_round_trip_preserves_layout() {
        let schema = Schema::trading_bot();
        let yaml = schema.to_yaml().expect("schema serializes");
        let parsed = Schema::from_yaml_str(&yaml).expect("schema parses");
        assert_eq!(parsed.steps(), schema.steps());
    }

    #[test]
    fn parses_hand_written_yaml() {
        let yaml = r#"
steps:
  - title: Basics
    fields:
      - name: enabled
        label: Enabled
        kind: boolean
      - name: amount
        label: Amount
        kind: numeric_text
        placeholder: Enter amount
        depends_on: enabled
"#;
        let schema = Schema::from_yaml_str(yaml).expect("yaml schema");
        let amount = schema.field("amount").expect("amount");
        assert_eq!(amount.placeholder.as_deref(), Some("Enter amount"));
        assert!(amount.is_conditional());
    }
}
