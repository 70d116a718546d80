use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use validator::Validate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[default]
    Algorithms,
    DataStructures,
    DynamicProgramming,
    GraphTheory,
    StringManipulation,
    Math,
    Greedy,
    Backtracking,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Algorithms => "Algorithms",
            Category::DataStructures => "Data Structures",
            Category::DynamicProgramming => "Dynamic Programming",
            Category::GraphTheory => "Graph Theory",
            Category::StringManipulation => "String Manipulation",
            Category::Math => "Mathematics",
            Category::Greedy => "Greedy",
            Category::Backtracking => "Backtracking",
        }
    }
}

/// Problem record edited through the wizard. Field names follow the export format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Problem {
    pub title: String,
    pub difficulty: Difficulty,
    pub category: Category,
    pub tags: Vec<String>,
    pub time_complexity: String,
    pub space_complexity: String,
    pub hints: String,
    pub follow_up: String,
    /// Markdown
    pub description: String,
    pub test_cases: String,
}

/// Partial update of the problem record; absent fields are left untouched.
#[derive(Debug, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProblemRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub category: Option<Category>,
    pub tags: Option<Vec<String>>,
    #[validate(length(max = 100))]
    pub time_complexity: Option<String>,
    #[validate(length(max = 100))]
    pub space_complexity: Option<String>,
    pub hints: Option<String>,
    pub follow_up: Option<String>,
    pub description: Option<String>,
    pub test_cases: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddTagRequest {
    #[validate(length(max = 50, message = "Tag must be at most 50 characters"))]
    pub tag: String,
}

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub imported: bool,
    pub problem: Problem,
}

pub const TIME_LIMIT_CHOICES: [u32; 3] = [2, 5, 10];
pub const MEMORY_LIMIT_CHOICES: [u32; 3] = [256, 512, 1024];

/// Execution limits chosen on the Settings step
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemSettings {
    pub time_limit_seconds: u32,
    pub memory_limit_mb: u32,
}

impl Default for ProblemSettings {
    fn default() -> Self {
        Self {
            time_limit_seconds: TIME_LIMIT_CHOICES[0],
            memory_limit_mb: MEMORY_LIMIT_CHOICES[0],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub time_limit_seconds: Option<u32>,
    pub memory_limit_mb: Option<u32>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProblemStatus {
    Draft,
    Published,
    Archived,
}

impl ProblemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemStatus::Draft => "Draft",
            ProblemStatus::Published => "Published",
            ProblemStatus::Archived => "Archived",
        }
    }
}

impl FromStr for ProblemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "draft" => Ok(ProblemStatus::Draft),
            "published" => Ok(ProblemStatus::Published),
            "archived" => Ok(ProblemStatus::Archived),
            other => Err(format!("Unknown status: {}", other)),
        }
    }
}

/// Row of the problem list view
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProblemSummary {
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub category: Category,
    pub tags: Vec<String>,
    pub status: ProblemStatus,
    pub created_at: NaiveDate,
    pub last_modified: NaiveDate,
    pub submissions: u32,
    pub acceptance_rate: f64,
}

/// Either "all" or one concrete value of a list filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T: PartialEq> Selector<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(expected) => expected == value,
        }
    }
}

impl<T: FromStr<Err = String>> Selector<T> {
    /// Missing, empty and "all" all mean no restriction.
    pub fn parse(raw: Option<&str>) -> Result<Self, String> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Selector::All),
            Some(value) if value.eq_ignore_ascii_case("all") => Ok(Selector::All),
            Some(value) => value.parse().map(Selector::Only),
        }
    }
}

/// Query parameters shared by the dashboard and `/api/problems`
#[derive(Debug, Deserialize, Default)]
pub struct ListProblemsQuery {
    pub search: Option<String>,
    pub difficulty: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProblemListResponse {
    pub problems: Vec<ProblemSummary>,
    pub total: usize,
    pub unfiltered_total: usize,
}
