use crate::error::{InvalidOperation, ScriptError};
use crate::runtime::event::{Outcome, WizardEvent};
use crate::state::configuration::Configuration;
use crate::state::wizard::Wizard;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplayMode {
    /// Log rejected events and keep going.
    #[default]
    Lenient,
    /// Stop at the first rejected event.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEvent {
    pub index: usize,
    pub event: WizardEvent,
    pub error: InvalidOperation,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReplayReport {
    pub applied: usize,
    pub rejected: Vec<RejectedEvent>,
    pub final_step: usize,
    pub configuration: Option<Configuration>,
}

/// Recorded sequence of wizard events.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Script {
    events: Vec<WizardEvent>,
}

impl Script {
    pub fn new(events: Vec<WizardEvent>) -> Self {
        Self { events }
    }

    /// Accepts YAML or JSON.
    pub fn from_yaml_str(input: &str) -> Result<Self, ScriptError> {
        let events: Vec<WizardEvent> = serde_yaml::from_str(input)?;
        Ok(Self::new(events))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&raw)
    }

    pub fn events(&self) -> &[WizardEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn replay(
        &self,
        wizard: &mut Wizard,
        mode: ReplayMode,
    ) -> Result<ReplayReport, ScriptError> {
        let mut report = ReplayReport::default();

        for (index, event) in self.events.iter().enumerate() {
            match wizard.dispatch(event.clone()) {
                Ok(outcome) => {
                    report.applied += 1;
                    debug!(index, ?event, "event applied");
                    if let Outcome::Finalized(configuration) = outcome {
                        report.configuration = Some(configuration);
                    }
                }
                Err(error) if mode == ReplayMode::Strict => {
                    return Err(ScriptError::Rejected {
                        index,
                        source: error,
                    });
                }
                Err(error) => {
                    warn!(index, ?event, %error, "event rejected");
                    report.rejected.push(RejectedEvent {
                        index,
                        event: event.clone(),
                        error,
                    });
                }
            }
        }

        report.final_step = wizard.current_step();
        Ok(report)
    }
}
