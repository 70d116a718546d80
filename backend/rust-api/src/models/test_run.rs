use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::editor::EditorOptions;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    Failed,
    Error,
    Timeout,
}

/// Outcome of one predefined test case
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub id: u32,
    pub input: String,
    pub expected_output: String,
    pub actual_output: String,
    pub status: TestStatus,
    /// Milliseconds
    pub execution_time: u32,
    /// Megabytes
    pub memory_used: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TestRunSummary {
    pub passed: usize,
    pub total: usize,
    pub pass_rate: f64,
    pub all_passed: bool,
    /// "All Passed" or "Some Failed"
    pub verdict: &'static str,
}

impl TestRunSummary {
    pub fn from_results(results: &[TestResult]) -> Option<Self> {
        if results.is_empty() {
            return None;
        }

        let total = results.len();
        let passed = results
            .iter()
            .filter(|result| result.status == TestStatus::Passed)
            .count();
        let all_passed = passed == total;

        Some(Self {
            passed,
            total,
            pass_rate: passed as f64 / total as f64 * 100.0,
            all_passed,
            verdict: if all_passed { "All Passed" } else { "Some Failed" },
        })
    }
}

#[derive(Debug, Serialize)]
pub struct TestRunView {
    pub results: Vec<TestResult>,
    pub summary: Option<TestRunSummary>,
    pub custom_output: Option<String>,
    pub custom_input_editor: EditorOptions,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CustomRunRequest {
    #[validate(length(max = 65536, message = "Custom input is too large"))]
    #[serde(default)]
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct CustomRunResponse {
    pub output: String,
}
