use serde::{Deserialize, Serialize};

/// Stages of the problem-creation flow, in order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Details,
    Description,
    Solution,
    Tests,
    Testing,
    Settings,
}

pub const STEP_COUNT: usize = WizardStep::ALL.len();

impl WizardStep {
    pub const ALL: [WizardStep; 6] = [
        WizardStep::Details,
        WizardStep::Description,
        WizardStep::Solution,
        WizardStep::Tests,
        WizardStep::Testing,
        WizardStep::Settings,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.key() == key)
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// 1-based number shown in the step navigator
    pub fn number(&self) -> usize {
        self.index() + 1
    }

    pub fn key(&self) -> &'static str {
        match self {
            WizardStep::Details => "details",
            WizardStep::Description => "description",
            WizardStep::Solution => "solution",
            WizardStep::Tests => "tests",
            WizardStep::Testing => "testing",
            WizardStep::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Details => "Problem Details",
            WizardStep::Description => "Description",
            WizardStep::Solution => "Solution Files",
            WizardStep::Tests => "Test Cases",
            WizardStep::Testing => "Testing & Debugging",
            WizardStep::Settings => "Settings",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::Details => "Define problem information and metadata",
            WizardStep::Description => "Create the problem description with examples",
            WizardStep::Solution => "Create and edit solution files",
            WizardStep::Tests => "Define test cases for the problem",
            WizardStep::Testing => "Test and debug your solutions",
            WizardStep::Settings => "Configure problem settings and options",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Completed,
    Current,
    Upcoming,
}

#[derive(Debug, Serialize)]
pub struct StepView {
    pub index: usize,
    pub number: usize,
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub state: StepState,
}

#[derive(Debug, Serialize)]
pub struct WizardView {
    pub current_index: usize,
    pub current: StepView,
    pub steps: Vec<StepView>,
    /// "Step n of 6"
    pub position: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    /// "Next", or "Finish" on the last step
    pub forward_label: &'static str,
}

/// Jump target, by index or by key
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum JumpStepRequest {
    Index { index: usize },
    Key { key: String },
}
