use std::time::Duration;

use crate::config::RunnerConfig;
use crate::metrics::TEST_RUNS_TOTAL;
use crate::models::test_run::{TestResult, TestStatus};

/// Stand-in for a judge: answers with canned results after an artificial delay.
/// It never looks at the solution files and cannot fail.
#[derive(Debug, Clone)]
pub struct MockTestRunner {
    run_all_delay: Duration,
    custom_delay: Duration,
}

impl MockTestRunner {
    pub fn new(config: &RunnerConfig) -> Self {
        Self {
            run_all_delay: Duration::from_millis(config.run_all_delay_ms),
            custom_delay: Duration::from_millis(config.custom_delay_ms),
        }
    }

    pub async fn run_all(&self) -> Vec<TestResult> {
        tracing::debug!("Running predefined tests (simulated {:?})", self.run_all_delay);
        tokio::time::sleep(self.run_all_delay).await;

        TEST_RUNS_TOTAL.with_label_values(&["predefined"]).inc();
        fixture()
    }

    pub async fn run_custom(&self, input: &str) -> String {
        tracing::debug!("Running custom test (simulated {:?})", self.custom_delay);
        tokio::time::sleep(self.custom_delay).await;

        TEST_RUNS_TOTAL.with_label_values(&["custom"]).inc();
        format!(
            "Output for input: {}\nResult: [0,1]\nExecution time: 10ms",
            input
        )
    }
}

fn case(
    id: u32,
    input: &str,
    expected: &str,
    actual: &str,
    status: TestStatus,
    execution_time: u32,
    memory_used: f64,
) -> TestResult {
    TestResult {
        id,
        input: input.to_string(),
        expected_output: expected.to_string(),
        actual_output: actual.to_string(),
        status,
        execution_time,
        memory_used,
    }
}

/// The five canned Two Sum results: four passes and the empty-array error.
pub fn fixture() -> Vec<TestResult> {
    vec![
        case(1, "nums = [2,7,11,15], target = 9", "[0,1]", "[0,1]", TestStatus::Passed, 12, 14.2),
        case(2, "nums = [3,2,4], target = 6", "[1,2]", "[1,2]", TestStatus::Passed, 8, 13.8),
        case(3, "nums = [3,3], target = 6", "[0,1]", "[0,1]", TestStatus::Passed, 6, 13.5),
        case(4, "nums = [1,2,3,4,5], target = 9", "[3,4]", "[3,4]", TestStatus::Passed, 15, 14.8),
        case(
            5,
            "nums = [], target = 0",
            "[]",
            "Error: Array cannot be empty",
            TestStatus::Error,
            0,
            0.0,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_runner() -> MockTestRunner {
        MockTestRunner::new(&RunnerConfig {
            run_all_delay_ms: 0,
            custom_delay_ms: 0,
        })
    }

    #[tokio::test]
    async fn test_run_all_returns_fixture() {
        let results = instant_runner().run_all().await;

        assert_eq!(results.len(), 5);
        let passed = results.iter().filter(|r| r.status == TestStatus::Passed).count();
        let errors = results.iter().filter(|r| r.status == TestStatus::Error).count();
        assert_eq!(passed, 4);
        assert_eq!(errors, 1);
        assert_eq!(results[4].actual_output, "Error: Array cannot be empty");
    }

    #[tokio::test]
    async fn test_run_custom_echoes_input() {
        let output = instant_runner().run_custom("nums = [1,2], target = 3").await;
        assert_eq!(
            output,
            "Output for input: nums = [1,2], target = 3\nResult: [0,1]\nExecution time: 10ms"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_all_waits_for_configured_delay() {
        let runner = MockTestRunner::new(&RunnerConfig::default());
        let started = tokio::time::Instant::now();

        runner.run_all().await;

        assert!(started.elapsed() >= Duration::from_millis(2000));
    }
}
