use thiserror::Error;

use crate::models::wizard::{StepState, StepView, WizardStep, WizardView, STEP_COUNT};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("Step index {0} is out of range, expected 0..6")]
    OutOfRange(usize),
    #[error("Unknown step: {0}")]
    UnknownStep(String),
}

/// Position in the six-step editor flow. Moving never goes past either end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wizard {
    current: usize,
}

impl Wizard {
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> WizardStep {
        WizardStep::ALL[self.current]
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current == STEP_COUNT - 1
    }

    pub fn next(&mut self) -> WizardStep {
        self.current = (self.current + 1).min(STEP_COUNT - 1);
        self.current_step()
    }

    pub fn previous(&mut self) -> WizardStep {
        self.current = self.current.saturating_sub(1);
        self.current_step()
    }

    pub fn jump_to(&mut self, index: usize) -> Result<WizardStep, WizardError> {
        let step = WizardStep::from_index(index).ok_or(WizardError::OutOfRange(index))?;
        self.current = step.index();
        Ok(step)
    }

    pub fn jump_to_key(&mut self, key: &str) -> Result<WizardStep, WizardError> {
        let step =
            WizardStep::from_key(key).ok_or_else(|| WizardError::UnknownStep(key.to_string()))?;
        self.current = step.index();
        Ok(step)
    }

    pub fn view(&self) -> WizardView {
        let steps = WizardStep::ALL
            .iter()
            .map(|step| self.step_view(*step))
            .collect();

        WizardView {
            current_index: self.current,
            current: self.step_view(self.current_step()),
            steps,
            position: format!("Step {} of {}", self.current + 1, STEP_COUNT),
            can_go_back: !self.is_first(),
            can_go_forward: !self.is_last(),
            forward_label: if self.is_last() { "Finish" } else { "Next" },
        }
    }

    fn step_view(&self, step: WizardStep) -> StepView {
        let state = match step.index() {
            index if index == self.current => StepState::Current,
            index if index < self.current => StepState::Completed,
            _ => StepState::Upcoming,
        };

        StepView {
            index: step.index(),
            number: step.number(),
            key: step.key(),
            label: step.label(),
            description: step.description(),
            state,
        }
    }
}
