use crate::core::FieldId;
use crate::core::value::Value;
use crate::error::InvalidOperation;
use crate::runtime::event::{Outcome, WizardEvent};
use crate::state::configuration::Configuration;
use crate::state::field::FieldKind;
use crate::state::flow::Flow;
use crate::state::schema::Schema;
use crate::state::step::{StepSpec, StepStatus};
use crate::state::store::AnswerSet;
use crate::state::validation::{incomplete_fields, is_field_active, validate_step};
use crate::state::view::{FieldView, ProgressMarker, StepView};
use tracing::{debug, info};

const TRUTHY_INPUTS: [&str; 5] = ["true", "1", "on", "yes", "checked"];

/// Step-gated configuration wizard.
///
/// Owns the answers and the step cursor. Every mutation goes through one of
/// the methods below and either completes or is rejected without changing
/// any state.
#[derive(Debug, Clone)]
pub struct Wizard {
    schema: Schema,
    flow: Flow,
    answers: AnswerSet,
    finalized: bool,
}

impl Wizard {
    pub fn new(schema: Schema) -> Self {
        let flow = Flow::new(schema.len());
        let answers = AnswerSet::from_schema(&schema);
        Self {
            schema,
            flow,
            answers,
            finalized: false,
        }
    }

    pub fn trading_bot() -> Self {
        Self::new(Schema::trading_bot())
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.answers.get(name)
    }

    /// 1-based number of the active step.
    pub fn current_step(&self) -> usize {
        self.flow.current_number()
    }

    pub fn step_count(&self) -> usize {
        self.schema.len()
    }

    pub fn current_step_spec(&self) -> &StepSpec {
        &self.schema.steps()[self.flow.current_number() - 1]
    }

    pub fn step_status(&self, number: usize) -> StepStatus {
        self.flow.status_at(number)
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn is_step_valid(&self, number: usize) -> bool {
        self.schema
            .step(number)
            .is_some_and(|step| validate_step(step, &self.answers))
    }

    pub fn is_current_step_valid(&self) -> bool {
        validate_step(self.current_step_spec(), &self.answers)
    }

    /// Fields of the active step that still block "next" or "submit".
    pub fn incomplete_fields(&self) -> Vec<FieldId> {
        incomplete_fields(self.current_step_spec(), &self.answers)
    }

    pub fn is_field_visible(&self, name: &str) -> bool {
        self.schema
            .field(name)
            .is_some_and(|field| is_field_active(field, &self.answers))
    }

    pub fn can_advance(&self) -> bool {
        !self.finalized && self.flow.has_next() && self.is_current_step_valid()
    }

    pub fn can_retreat(&self) -> bool {
        !self.finalized && self.flow.has_prev()
    }

    pub fn can_finalize(&self) -> bool {
        !self.finalized && self.flow.is_last() && self.is_current_step_valid()
    }

    /// Stores `raw` for `name`. Boolean fields coerce the input; text kinds
    /// keep it verbatim, without any numeric parsing.
    pub fn set_value(&mut self, name: &str, raw: &str) -> Result<(), InvalidOperation> {
        self.ensure_open()?;
        let kind = self.field_kind(name)?;
        let value = match kind {
            FieldKind::Boolean => Value::Flag(parse_flag(raw)),
            FieldKind::SingleChoice | FieldKind::NumericText => Value::Text(raw.to_string()),
            FieldKind::MultiChoice => {
                return Err(InvalidOperation::KindMismatch {
                    field: name.into(),
                    kind,
                    operation: "set_value",
                });
            }
        };
        debug!(field = name, ?value, "field value set");
        self.answers.set(name, value);
        Ok(())
    }

    pub fn set_flag(&mut self, name: &str, value: bool) -> Result<(), InvalidOperation> {
        self.ensure_open()?;
        let kind = self.field_kind(name)?;
        if kind != FieldKind::Boolean {
            return Err(InvalidOperation::KindMismatch {
                field: name.into(),
                kind,
                operation: "set_flag",
            });
        }
        debug!(field = name, value, "flag set");
        self.answers.set(name, Value::Flag(value));
        Ok(())
    }

    /// Removes `option` if selected, otherwise appends it. Returns whether
    /// the option is selected afterwards.
    pub fn toggle_multi_value(
        &mut self,
        name: &str,
        option: &str,
    ) -> Result<bool, InvalidOperation> {
        self.ensure_open()?;
        let kind = self.field_kind(name)?;
        if kind != FieldKind::MultiChoice {
            return Err(InvalidOperation::KindMismatch {
                field: name.into(),
                kind,
                operation: "toggle_multi_value",
            });
        }

        let mut selected = self
            .answers
            .get(name)
            .and_then(Value::as_choices)
            .cloned()
            .unwrap_or_default();
        let now_selected = if selected.shift_remove(option) {
            false
        } else {
            selected.insert(option.to_string());
            true
        };
        debug!(field = name, option, selected = now_selected, "option toggled");
        self.answers.set(name, Value::Choices(selected));
        Ok(now_selected)
    }

    /// Moves to the next step. Returns the new step number.
    pub fn advance(&mut self) -> Result<usize, InvalidOperation> {
        self.ensure_open()?;
        let step = self.current_step();
        if !self.flow.has_next() {
            return Err(InvalidOperation::NoNextStep { step });
        }
        if !self.is_current_step_valid() {
            debug!(step, missing = ?self.incomplete_fields(), "advance rejected");
            return Err(InvalidOperation::StepIncomplete { step });
        }
        self.flow.advance();
        debug!(from = step, to = self.current_step(), "advanced");
        Ok(self.current_step())
    }

    /// Moves to the previous step without validation. Returns the new step
    /// number.
    pub fn retreat(&mut self) -> Result<usize, InvalidOperation> {
        self.ensure_open()?;
        let step = self.current_step();
        if !self.flow.retreat() {
            return Err(InvalidOperation::NoPreviousStep { step });
        }
        debug!(from = step, to = self.current_step(), "retreated");
        Ok(self.current_step())
    }

    /// Closes the wizard and returns a snapshot of every answer.
    pub fn finalize(&mut self) -> Result<Configuration, InvalidOperation> {
        self.ensure_open()?;
        let step = self.current_step();
        if !self.flow.is_last() {
            return Err(InvalidOperation::NotOnLastStep {
                step,
                last: self.step_count(),
            });
        }
        if !self.is_current_step_valid() {
            return Err(InvalidOperation::StepIncomplete { step });
        }

        self.flow.complete_current();
        self.finalized = true;
        let configuration = Configuration::new(self.answers.to_map());
        info!(fields = configuration.len(), "configuration finalized");
        debug!(?configuration, "final configuration");
        Ok(configuration)
    }

    pub fn dispatch(&mut self, event: WizardEvent) -> Result<Outcome, InvalidOperation> {
        match event {
            WizardEvent::FieldChanged { name, value } => self
                .set_value(name.as_str(), &value)
                .map(|()| Outcome::Updated),
            WizardEvent::OptionToggled { name, option } => self
                .toggle_multi_value(name.as_str(), &option)
                .map(|_| Outcome::Updated),
            WizardEvent::NextRequested => self.advance().map(Outcome::StepChanged),
            WizardEvent::PreviousRequested => self.retreat().map(Outcome::StepChanged),
            WizardEvent::SubmitRequested => self.finalize().map(Outcome::Finalized),
        }
    }

    pub fn view(&self) -> StepView {
        let step = self.current_step_spec();
        let valid = self.is_current_step_valid();
        let is_last = self.flow.is_last();

        let fields = step
            .fields
            .iter()
            .map(|field| FieldView {
                name: field.name.clone(),
                label: field.label.clone(),
                kind: field.kind,
                options: field.options.clone(),
                placeholder: field.placeholder.clone(),
                value: self
                    .answers
                    .get(field.name.as_str())
                    .cloned()
                    .unwrap_or_else(|| field.default_value()),
                visible: is_field_active(field, &self.answers),
            })
            .collect();

        let progress = self
            .schema
            .steps()
            .iter()
            .enumerate()
            .map(|(index, spec)| ProgressMarker {
                title: spec.title.clone(),
                status: self.flow.status_at(index + 1),
                reached: index < self.current_step(),
            })
            .collect();

        StepView {
            number: self.current_step(),
            total: self.step_count(),
            title: step.title.clone(),
            fields,
            progress,
            can_go_back: self.can_retreat(),
            can_advance: !self.finalized && !is_last && valid,
            can_submit: !self.finalized && is_last && valid,
            is_last,
            finalized: self.finalized,
        }
    }

    fn ensure_open(&self) -> Result<(), InvalidOperation> {
        if self.finalized {
            return Err(InvalidOperation::AlreadyFinalized);
        }
        Ok(())
    }

    fn field_kind(&self, name: &str) -> Result<FieldKind, InvalidOperation> {
        self.schema
            .field(name)
            .map(|field| field.kind)
            .ok_or_else(|| InvalidOperation::UnknownField(name.into()))
    }
}

fn parse_flag(raw: &str) -> bool {
    let normalized = raw.trim().to_ascii_lowercase();
    TRUTHY_INPUTS.contains(&normalized.as_str())
}
