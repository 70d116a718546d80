use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::models::{
    editor::{
        DescriptionView, EditorOptions, EditorView, FormOptions, MarkdownTool, MarkdownViewMode,
        SelectOption,
    },
    problem::{
        Category, Difficulty, Problem, ProblemSettings, UpdateProblemRequest,
        UpdateSettingsRequest, MEMORY_LIMIT_CHOICES, TIME_LIMIT_CHOICES,
    },
    solution_file::{Language, OpenFileView},
    test_run::{TestResult, TestRunSummary, TestRunView},
};
use crate::services::{
    file_manager::FileManager, markdown::insert_markdown, seed, wizard::Wizard,
};

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("valid whitespace regex");
}

/// Longest title accepted, matching the rule on `UpdateProblemRequest`
const MAX_TITLE_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Malformed problem document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Title must be between 1 and 200 characters, got {0}")]
    Title(usize),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Time limit must be 2, 5 or 10 seconds, got {0}")]
    TimeLimit(u32),
    #[error("Memory limit must be 256, 512 or 1024 MB, got {0}")]
    MemoryLimit(u32),
}

/// One user's editor state: the problem being authored, its solution files,
/// the wizard position and the latest (simulated) test results.
#[derive(Debug, Clone)]
pub struct ProblemWorkspace {
    pub problem: Problem,
    pub settings: ProblemSettings,
    pub files: FileManager,
    pub wizard: Wizard,
    pub description_view: MarkdownViewMode,
    pub test_results: Vec<TestResult>,
    pub custom_output: Option<String>,
}

impl Default for ProblemWorkspace {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ProblemWorkspace {
    pub fn seeded() -> Self {
        Self {
            problem: seed::seed_problem(),
            settings: ProblemSettings::default(),
            files: FileManager::new(seed::seed_files()),
            wizard: Wizard::default(),
            description_view: MarkdownViewMode::default(),
            test_results: Vec::new(),
            custom_output: None,
        }
    }

    pub fn apply_update(&mut self, update: UpdateProblemRequest) {
        let problem = &mut self.problem;
        if let Some(title) = update.title {
            problem.title = title;
        }
        if let Some(difficulty) = update.difficulty {
            problem.difficulty = difficulty;
        }
        if let Some(category) = update.category {
            problem.category = category;
        }
        if let Some(tags) = update.tags {
            problem.tags.clear();
            for tag in tags {
                push_unique_tag(&mut problem.tags, &tag);
            }
        }
        if let Some(time_complexity) = update.time_complexity {
            problem.time_complexity = time_complexity;
        }
        if let Some(space_complexity) = update.space_complexity {
            problem.space_complexity = space_complexity;
        }
        if let Some(hints) = update.hints {
            problem.hints = hints;
        }
        if let Some(follow_up) = update.follow_up {
            problem.follow_up = follow_up;
        }
        if let Some(description) = update.description {
            problem.description = description;
        }
        if let Some(test_cases) = update.test_cases {
            problem.test_cases = test_cases;
        }
    }

    /// Returns false when the tag was blank or already present.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        push_unique_tag(&mut self.problem.tags, tag)
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.problem.tags.len();
        self.problem.tags.retain(|existing| existing != tag);
        self.problem.tags.len() != before
    }

    pub fn update_settings(&mut self, update: UpdateSettingsRequest) -> Result<(), SettingsError> {
        if let Some(seconds) = update.time_limit_seconds {
            if !TIME_LIMIT_CHOICES.contains(&seconds) {
                return Err(SettingsError::TimeLimit(seconds));
            }
        }
        if let Some(megabytes) = update.memory_limit_mb {
            if !MEMORY_LIMIT_CHOICES.contains(&megabytes) {
                return Err(SettingsError::MemoryLimit(megabytes));
            }
        }

        if let Some(seconds) = update.time_limit_seconds {
            self.settings.time_limit_seconds = seconds;
        }
        if let Some(megabytes) = update.memory_limit_mb {
            self.settings.memory_limit_mb = megabytes;
        }
        Ok(())
    }

    pub fn insert_into_description(&mut self, tool: MarkdownTool, start: usize, end: usize) {
        self.problem.description = insert_markdown(&self.problem.description, tool, start, end);
    }

    /// Pretty-printed problem record, as offered for download.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.problem)
    }

    /// Download name: lowercased title with whitespace runs turned into dashes.
    pub fn export_file_name(&self) -> String {
        let slug = WHITESPACE_RUN
            .replace_all(&self.problem.title.trim().to_lowercase(), "-")
            .into_owned();
        if slug.is_empty() {
            "problem.json".to_string()
        } else {
            format!("{}.json", slug)
        }
    }

    /// Replaces the problem record with the parsed document. Tags are trimmed
    /// and de-duplicated like any other edit. On error the record is left
    /// exactly as it was.
    pub fn import_json(&mut self, raw: &str) -> Result<(), ImportError> {
        let mut problem: Problem = serde_json::from_str(raw)?;

        let title_chars = problem.title.chars().count();
        if title_chars == 0 || title_chars > MAX_TITLE_CHARS {
            return Err(ImportError::Title(title_chars));
        }

        let mut tags = Vec::with_capacity(problem.tags.len());
        for tag in &problem.tags {
            push_unique_tag(&mut tags, tag);
        }
        problem.tags = tags;

        self.problem = problem;
        Ok(())
    }

    pub fn reset_tests(&mut self) {
        self.test_results.clear();
        self.custom_output = None;
    }

    pub fn test_view(&self) -> TestRunView {
        TestRunView {
            results: self.test_results.clone(),
            summary: TestRunSummary::from_results(&self.test_results),
            custom_output: self.custom_output.clone(),
            custom_input_editor: EditorOptions::custom_input(),
        }
    }

    pub fn open_file(&self, id: &str) -> Option<OpenFileView> {
        self.files.get(id).ok().map(|file| OpenFileView {
            file: file.clone(),
            editor: EditorOptions::code(file.language),
        })
    }

    pub fn description(&self) -> DescriptionView {
        DescriptionView {
            content: self.problem.description.clone(),
            view_mode: self.description_view,
            show_editor: self.description_view.shows_editor(),
            show_preview: self.description_view.shows_preview(),
            editor: EditorOptions::markdown(),
        }
    }

    pub fn view(&self) -> EditorView {
        EditorView {
            wizard: self.wizard.view(),
            problem: self.problem.clone(),
            settings: self.settings,
            description: self.description(),
            files: self.files.listing(None),
            active_file: self
                .files
                .active_file_id()
                .and_then(|id| self.open_file(id)),
            tests: self.test_view(),
            options: form_options(),
        }
    }
}

fn push_unique_tag(tags: &mut Vec<String>, tag: &str) -> bool {
    let tag = tag.trim();
    if tag.is_empty() || tags.iter().any(|existing| existing == tag) {
        return false;
    }
    tags.push(tag.to_string());
    true
}

fn form_options() -> FormOptions {
    let option = |value: &str, label: &str| SelectOption {
        value: value.to_string(),
        label: label.to_string(),
    };

    FormOptions {
        difficulties: [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
            .iter()
            .map(|d| option(d.as_str(), d.as_str()))
            .collect(),
        categories: [
            (Category::Algorithms, "algorithms"),
            (Category::DataStructures, "data-structures"),
            (Category::DynamicProgramming, "dynamic-programming"),
            (Category::GraphTheory, "graph-theory"),
            (Category::StringManipulation, "string-manipulation"),
            (Category::Math, "math"),
            (Category::Greedy, "greedy"),
            (Category::Backtracking, "backtracking"),
        ]
        .iter()
        .map(|(category, value)| option(*value, category.label()))
        .collect(),
        languages: Language::ALL
            .iter()
            .filter(|language| **language != Language::Markdown)
            .map(|language| option(language.as_str(), language.label()))
            .collect(),
        time_limits_seconds: TIME_LIMIT_CHOICES.to_vec(),
        memory_limits_mb: MEMORY_LIMIT_CHOICES.to_vec(),
    }
}
