use crate::state::step::StepStatus;

/// Cursor over a fixed number of steps.
///
/// Holds no step content; guards that depend on answers live in the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flow {
    current: usize,
    statuses: Vec<StepStatus>,
}

impl Flow {
    pub fn new(len: usize) -> Self {
        let mut statuses = vec![StepStatus::Pending; len];
        if let Some(first) = statuses.first_mut() {
            *first = StepStatus::Active;
        }
        Self {
            current: 0,
            statuses,
        }
    }

    /// 1-based number of the active step.
    pub fn current_number(&self) -> usize {
        self.current + 1
    }

    pub fn status_at(&self, number: usize) -> StepStatus {
        number
            .checked_sub(1)
            .and_then(|index| self.statuses.get(index))
            .copied()
            .unwrap_or(StepStatus::Pending)
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.statuses.len()
    }

    pub fn has_prev(&self) -> bool {
        self.current > 0
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    pub fn complete_current(&mut self) {
        if let Some(status) = self.statuses.get_mut(self.current) {
            *status = StepStatus::Done;
        }
    }

    pub fn advance(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.complete_current();
        self.current += 1;
        if let Some(status) = self.statuses.get_mut(self.current) {
            *status = StepStatus::Active;
        }
        true
    }

    pub fn retreat(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        if let Some(status) = self.statuses.get_mut(self.current) {
            *status = StepStatus::Pending;
        }
        self.current -= 1;
        if let Some(status) = self.statuses.get_mut(self.current) {
            *status = StepStatus::Active;
        }
        true
    }
}
