use chrono::NaiveDate;
use thiserror::Error;

use crate::models::problem::{
    Category, Difficulty, ListProblemsQuery, ProblemListResponse, ProblemStatus, ProblemSummary,
    Selector,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),
}

/// Parsed list filter
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemFilter {
    pub search: String,
    pub difficulty: Selector<Difficulty>,
    pub status: Selector<ProblemStatus>,
}

impl ProblemFilter {
    pub fn from_query(query: &ListProblemsQuery) -> Result<Self, CatalogError> {
        Ok(Self {
            search: query.search.clone().unwrap_or_default(),
            difficulty: Selector::parse(query.difficulty.as_deref())
                .map_err(CatalogError::InvalidFilter)?,
            status: Selector::parse(query.status.as_deref()).map_err(CatalogError::InvalidFilter)?,
        })
    }

    /// Title or any tag contains the search text (case-insensitive), and both
    /// selectors match.
    pub fn matches(&self, problem: &ProblemSummary) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = problem.title.to_lowercase().contains(&needle)
            || problem
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle));

        matches_search
            && self.difficulty.matches(&problem.difficulty)
            && self.status.matches(&problem.status)
    }
}

/// Static list of problem summaries shown on the dashboard. Never mutated.
#[derive(Debug, Clone)]
pub struct ProblemCatalog {
    problems: Vec<ProblemSummary>,
}

impl Default for ProblemCatalog {
    fn default() -> Self {
        Self::new(fixture())
    }
}

impl ProblemCatalog {
    pub fn new(problems: Vec<ProblemSummary>) -> Self {
        Self { problems }
    }

    pub fn filter(&self, filter: &ProblemFilter) -> Vec<ProblemSummary> {
        filter_problems(&self.problems, filter)
    }

    pub fn list(&self, query: &ListProblemsQuery) -> Result<ProblemListResponse, CatalogError> {
        let filter = ProblemFilter::from_query(query)?;
        let problems = self.filter(&filter);

        tracing::debug!(
            "Problem list filter {:?} matched {}/{} rows",
            filter,
            problems.len(),
            self.problems.len()
        );

        Ok(ProblemListResponse {
            total: problems.len(),
            unfiltered_total: self.problems.len(),
            problems,
        })
    }
}

/// Order of the input is preserved.
pub fn filter_problems(problems: &[ProblemSummary], filter: &ProblemFilter) -> Vec<ProblemSummary> {
    problems
        .iter()
        .filter(|problem| filter.matches(problem))
        .cloned()
        .collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn summary(
    id: &str,
    title: &str,
    difficulty: Difficulty,
    category: Category,
    tags: &[&str],
    status: ProblemStatus,
    created_at: NaiveDate,
    last_modified: NaiveDate,
    submissions: u32,
    acceptance_rate: f64,
) -> ProblemSummary {
    ProblemSummary {
        id: id.to_string(),
        title: title.to_string(),
        difficulty,
        category,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        status,
        created_at,
        last_modified,
        submissions,
        acceptance_rate,
    }
}

pub fn fixture() -> Vec<ProblemSummary> {
    vec![
        summary(
            "1",
            "Two Sum",
            Difficulty::Easy,
            Category::Algorithms,
            &["Array", "Hash Table"],
            ProblemStatus::Published,
            date(2024, 1, 15),
            date(2024, 1, 20),
            1250,
            85.2,
        ),
        summary(
            "2",
            "Add Two Numbers",
            Difficulty::Medium,
            Category::Algorithms,
            &["Linked List", "Math"],
            ProblemStatus::Published,
            date(2024, 1, 10),
            date(2024, 1, 18),
            890,
            72.4,
        ),
        summary(
            "3",
            "Longest Substring Without Repeating Characters",
            Difficulty::Medium,
            Category::Algorithms,
            &["Hash Table", "String", "Sliding Window"],
            ProblemStatus::Draft,
            date(2024, 1, 22),
            date(2024, 1, 22),
            0,
            0.0,
        ),
        summary(
            "4",
            "Median of Two Sorted Arrays",
            Difficulty::Hard,
            Category::Algorithms,
            &["Array", "Binary Search", "Divide and Conquer"],
            ProblemStatus::Published,
            date(2024, 1, 5),
            date(2024, 1, 15),
            456,
            34.8,
        ),
        summary(
            "5",
            "Valid Parentheses",
            Difficulty::Easy,
            Category::DataStructures,
            &["String", "Stack"],
            ProblemStatus::Archived,
            date(2023, 12, 20),
            date(2024, 1, 10),
            2100,
            91.5,
        ),
    ]
}
